pub mod errors;
pub mod models;
pub mod ports;
pub mod service;

pub use errors::AccountError;
pub use models::User;
pub use models::UserId;
pub use service::AccountService;
