use std::sync::Arc;

use async_trait::async_trait;
use auth::Authenticator;

use crate::domain::user::models::LoginCommand;
use crate::domain::user::models::LoginOutcome;
use crate::domain::user::models::NewUser;
use crate::domain::user::models::RegisterCommand;
use crate::domain::user::models::User;
use crate::domain::user::models::UserId;
use crate::user::errors::UserError;
use crate::user::ports::UserRepository;
use crate::user::ports::UserServicePort;

/// Domain service implementation for registration and login.
///
/// Hashing and password verification are CPU-bound and run on the blocking
/// thread pool so they never stall the request-handling tasks.
pub struct UserService<UR>
where
    UR: UserRepository,
{
    repository: Arc<UR>,
    authenticator: Arc<Authenticator>,
}

impl<UR> UserService<UR>
where
    UR: UserRepository,
{
    /// Create a new user service with injected dependencies.
    ///
    /// # Arguments
    /// * `repository` - User persistence implementation
    /// * `authenticator` - Password hashing and token issuing
    pub fn new(repository: Arc<UR>, authenticator: Arc<Authenticator>) -> Self {
        Self {
            repository,
            authenticator,
        }
    }
}

#[async_trait]
impl<UR> UserServicePort for UserService<UR>
where
    UR: UserRepository,
{
    async fn register(&self, command: RegisterCommand) -> Result<User, UserError> {
        if self
            .repository
            .find_by_email(&command.email)
            .await?
            .is_some()
        {
            tracing::info!("Registration rejected: email already registered");
            return Err(UserError::EmailAlreadyExists(command.email.to_string()));
        }

        let authenticator = Arc::clone(&self.authenticator);
        let password = command.password;
        let password_hash =
            tokio::task::spawn_blocking(move || authenticator.hash_password(&password)).await??;

        // A concurrent registration may still win the insert; the store
        // reports that as EmailAlreadyExists.
        let created_user = self
            .repository
            .create(NewUser {
                name: command.name,
                email: command.email,
                password_hash,
            })
            .await?;

        tracing::info!(user_id = %created_user.id, "User registered");

        Ok(created_user)
    }

    async fn login(&self, command: LoginCommand) -> Result<LoginOutcome, UserError> {
        let user = self
            .repository
            .find_by_email(&command.email)
            .await?
            .ok_or_else(|| UserError::NotFoundByEmail(command.email.to_string()))?;

        let authenticator = Arc::clone(&self.authenticator);
        let password = command.password;
        let stored_hash = user.password_hash.clone();
        let subject = user.subject();

        let result = tokio::task::spawn_blocking(move || {
            authenticator.authenticate(&password, &stored_hash, subject)
        })
        .await?;

        match result {
            Ok(result) => {
                tracing::info!(user_id = %user.id, "User logged in");
                Ok(LoginOutcome {
                    token: result.access_token,
                })
            }
            Err(e) => {
                tracing::info!(user_id = %user.id, error = %e, "Login rejected");
                Err(e.into())
            }
        }
    }

    async fn get_user(&self, id: &UserId) -> Result<User, UserError> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or(UserError::NotFound(id.to_string()))
    }
}
