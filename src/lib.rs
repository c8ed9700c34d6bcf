pub mod aggregate;
pub mod api;
pub mod catalog;
pub mod cli;
pub mod config;
pub mod errors;
pub mod insights;
pub mod llm;
pub mod models;
pub mod reporting;
pub mod summary;
