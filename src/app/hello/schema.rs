use crate::domain::StudentRecord;

/// Context handed to the renderer for the student info page.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StudentInfoContext {
    pub student_data: StudentRecord,
}
