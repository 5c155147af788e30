pub mod batch;
pub mod count;
