pub mod homework;

pub use homework::{ApiResponse, HomeworkRecord, Verdict};
