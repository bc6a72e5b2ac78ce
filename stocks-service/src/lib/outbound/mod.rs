pub mod cache;
pub mod polygon;
pub mod repositories;
