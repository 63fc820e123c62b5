pub mod location;
pub mod student;
