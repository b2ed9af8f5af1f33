use serde::Serialize;

/// The student shown on the info page.
///
/// The record is not loaded from storage: every field is a literal and a fresh
/// value is built for each request.
#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
pub struct StudentRecord {
    pub student_name: String,
    pub roll_number: String,
    pub branch: String,
    pub semester: String,
}

impl StudentRecord {
    pub fn hardcoded() -> Self {
        Self {
            student_name: "Prince Raj Kiran".to_owned(),
            roll_number: "2403051050507".to_owned(),
            branch: "Computer Science & Engineering".to_owned(),
            semester: "4th".to_owned(),
        }
    }
}
