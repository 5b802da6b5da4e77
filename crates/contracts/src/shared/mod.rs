pub mod api;
pub mod limits;
pub mod text_analysis;
pub mod upload_rules;
