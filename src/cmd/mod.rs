pub mod analyze;
pub mod project;
pub mod score;
