use async_trait::async_trait;

use crate::account::errors::AccountError;
use crate::account::models::IssuedToken;
use crate::account::models::LoginCommand;
use crate::account::models::RegisterCommand;
use crate::account::models::User;

/// Port for the credential service.
#[async_trait]
pub trait AccountServicePort: Send + Sync + 'static {
    /// Register a new account and issue an access token for it.
    ///
    /// # Errors
    /// * `AlreadyExists` - An account with this email is already registered
    /// * `Password` / `Token` - Hashing or signing failed
    /// * `Database` - Store operation failed
    async fn register(&self, command: RegisterCommand) -> Result<IssuedToken, AccountError>;

    /// Verify credentials and issue an access token.
    ///
    /// An unknown email and a wrong password both fail with
    /// `InvalidCredentials`; callers must not be able to tell them apart.
    ///
    /// # Errors
    /// * `InvalidCredentials` - Email unknown or password mismatch
    /// * `Token` - Signing failed
    /// * `Database` - Store operation failed
    async fn login(&self, command: LoginCommand) -> Result<IssuedToken, AccountError>;
}

/// Persistence operations for the user store.
///
/// The store is externally synchronized: email uniqueness is ultimately
/// enforced by its unique constraint, not by this process.
#[async_trait]
pub trait UserRepository: Send + Sync + 'static {
    /// Persist a new user.
    ///
    /// # Errors
    /// * `AlreadyExists` - The email collides with an existing row
    /// * `Database` - Store operation failed
    async fn create(&self, user: User) -> Result<User, AccountError>;

    /// Retrieve a user by email address.
    ///
    /// # Returns
    /// Optional user entity (None if not found)
    ///
    /// # Errors
    /// * `Database` - Store operation failed
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, AccountError>;
}
