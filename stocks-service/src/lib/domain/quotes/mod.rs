pub mod errors;
pub mod models;
pub mod ports;

pub use errors::QuoteError;
pub use models::Quote;
pub use ports::QuoteGateway;
