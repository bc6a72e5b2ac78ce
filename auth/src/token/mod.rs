pub mod authority;
pub mod claims;
pub mod errors;

pub use authority::TokenAuthority;
pub use claims::Claims;
pub use errors::TokenError;
