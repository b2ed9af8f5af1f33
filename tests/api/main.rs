mod health;
mod student_page;
