pub mod student;

pub use self::student::StudentRecord;
