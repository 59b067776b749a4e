pub mod app;
pub mod upload;
pub mod utils;
