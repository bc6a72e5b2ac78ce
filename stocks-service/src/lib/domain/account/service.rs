use std::sync::Arc;

use async_trait::async_trait;
use auth::PasswordHasher;
use auth::TokenAuthority;
use chrono::Utc;

use crate::account::errors::AccountError;
use crate::account::models::IssuedToken;
use crate::account::models::LoginCommand;
use crate::account::models::RegisterCommand;
use crate::account::models::User;
use crate::account::models::UserId;
use crate::account::ports::AccountServicePort;
use crate::account::ports::UserRepository;

/// Credential service: registration and login.
///
/// Composes the password hasher, the token authority, and a user store
/// passed in at construction.
pub struct AccountService<R>
where
    R: UserRepository,
{
    repository: Arc<R>,
    password_hasher: PasswordHasher,
    token_authority: Arc<TokenAuthority>,
    /// Verified against when login hits an unknown email, so the absent-user
    /// path costs about the same as a real password check.
    dummy_hash: String,
}

impl<R> AccountService<R>
where
    R: UserRepository,
{
    /// Create the service with injected dependencies.
    ///
    /// # Errors
    /// * `Password` - Computing the dummy hash failed
    pub fn new(
        repository: Arc<R>,
        password_hasher: PasswordHasher,
        token_authority: Arc<TokenAuthority>,
    ) -> Result<Self, AccountError> {
        let dummy_hash = password_hasher.hash("unused-dummy-password")?;

        Ok(Self {
            repository,
            password_hasher,
            token_authority,
            dummy_hash,
        })
    }

    fn issue_token(&self, user: &User) -> Result<IssuedToken, AccountError> {
        let access_token = self
            .token_authority
            .issue(&user.id.to_string(), user.email.as_str())?;

        Ok(IssuedToken { access_token })
    }
}

#[async_trait]
impl<R> AccountServicePort for AccountService<R>
where
    R: UserRepository,
{
    async fn register(&self, command: RegisterCommand) -> Result<IssuedToken, AccountError> {
        // Check-then-insert: the race window between these two steps is
        // closed by the store's unique constraint, which `create` maps to
        // the same `AlreadyExists`.
        if self
            .repository
            .find_by_email(command.email.as_str())
            .await?
            .is_some()
        {
            return Err(AccountError::AlreadyExists);
        }

        let password_hash = self.password_hasher.hash(&command.password)?;

        let user = User {
            id: UserId::new(),
            email: command.email,
            password_hash,
            created_at: Utc::now(),
        };

        let created = self.repository.create(user).await?;
        tracing::info!(user_id = %created.id, "User registered");

        self.issue_token(&created)
    }

    async fn login(&self, command: LoginCommand) -> Result<IssuedToken, AccountError> {
        let user = self.repository.find_by_email(&command.email).await?;

        match user {
            Some(user) => {
                if !self
                    .password_hasher
                    .verify(&command.password, &user.password_hash)
                {
                    return Err(AccountError::InvalidCredentials);
                }
                self.issue_token(&user)
            }
            None => {
                // Burn comparable work before failing, same outcome as a
                // password mismatch.
                self.password_hasher.verify(&command.password, &self.dummy_hash);
                Err(AccountError::InvalidCredentials)
            }
        }
    }
}
