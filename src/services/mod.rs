pub mod grade_service;

pub use grade_service::*;
