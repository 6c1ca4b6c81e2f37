pub mod submission;
pub mod user;
