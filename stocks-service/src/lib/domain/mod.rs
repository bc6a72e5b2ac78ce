pub mod account;
pub mod quotes;
