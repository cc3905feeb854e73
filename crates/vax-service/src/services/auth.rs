//! Authentication service
//!
//! Handles user registration, login, token refresh, and logout.

use tracing::{info, instrument, warn};
use vax_common::auth::{hash_password, validate_password_strength, verify_password};
use vax_common::AppError;
use vax_core::entities::User;
use vax_core::{DomainError, UserId};

use crate::dto::{
    AuthResponse, CurrentUserResponse, LoginRequest, RefreshTokenRequest, RegisterRequest,
};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Authentication service
pub struct AuthService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> AuthService<'a> {
    /// Create a new AuthService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Register a new user with push reminders enabled
    #[instrument(skip(self, request), fields(username = %request.username, email = %request.email))]
    pub async fn register(&self, request: RegisterRequest) -> ServiceResult<AuthResponse> {
        validate_password_strength(&request.password)?;
        if request.password != request.confirm_password {
            return Err(ServiceError::validation("Passwords don't match"));
        }
        let age = u32::try_from(request.age)
            .map_err(|_| ServiceError::validation("Age cannot be negative."))?;

        let email = request.email.trim().to_string();
        if self.ctx.user_repo().email_exists(&email).await? {
            return Err(DomainError::EmailAlreadyExists.into());
        }

        let password_hash = hash_password(&request.password)?;

        let user = User::new(
            UserId::new(),
            request.username.trim().to_string(),
            email,
            age,
            request.gender,
            request.address.filter(|a| !a.trim().is_empty()),
        );

        self.ctx.user_repo().create(&user, &password_hash).await?;

        info!(user_id = %user.id, "User registered successfully");

        self.issue_tokens(&user).await
    }

    /// Login with email and password
    #[instrument(skip(self, request), fields(email = %request.email))]
    pub async fn login(&self, request: LoginRequest) -> ServiceResult<AuthResponse> {
        let user = self
            .ctx
            .user_repo()
            .find_by_email(request.email.trim())
            .await?
            .ok_or_else(|| {
                warn!("Login failed: user not found");
                ServiceError::App(AppError::InvalidCredentials)
            })?;

        let password_hash = self
            .ctx
            .user_repo()
            .get_password_hash(user.id)
            .await?
            .ok_or_else(|| {
                warn!(user_id = %user.id, "Login failed: no password hash");
                ServiceError::App(AppError::InvalidCredentials)
            })?;

        if !verify_password(&request.password, &password_hash)? {
            warn!(user_id = %user.id, "Login failed: invalid password");
            return Err(ServiceError::App(AppError::InvalidCredentials));
        }

        info!(user_id = %user.id, "User logged in successfully");

        self.issue_tokens(&user).await
    }

    /// Exchange a refresh token for a new token pair
    ///
    /// The old refresh token is revoked.
    #[instrument(skip(self, request))]
    pub async fn refresh_tokens(&self, request: RefreshTokenRequest) -> ServiceResult<AuthResponse> {
        let claims = self
            .ctx
            .jwt_service()
            .validate_refresh_token(&request.refresh_token)?;

        let user_id = self
            .ctx
            .session_store()
            .validate(&request.refresh_token)
            .await?
            .ok_or(ServiceError::App(AppError::InvalidToken))?;

        if claims.user_id()? != user_id {
            warn!(user_id = %user_id, "Refresh token subject does not match its session");
            return Err(ServiceError::App(AppError::InvalidToken));
        }

        let user = self
            .ctx
            .user_repo()
            .find_by_id(user_id)
            .await?
            .ok_or(DomainError::UserNotFound(user_id))?;

        self.ctx.session_store().revoke(&request.refresh_token).await?;

        info!(user_id = %user.id, "Tokens refreshed successfully");

        self.issue_tokens(&user).await
    }

    /// Logout user by revoking one refresh token, or all of them
    #[instrument(skip(self, refresh_token))]
    pub async fn logout(&self, user_id: UserId, refresh_token: Option<String>) -> ServiceResult<()> {
        if let Some(token) = refresh_token {
            self.ctx.session_store().revoke(&token).await?;
        } else {
            let revoked = self.ctx.session_store().revoke_all_for_user(user_id).await?;
            info!(user_id = %user_id, revoked, "Revoked all sessions");
        }

        info!(user_id = %user_id, "User logged out successfully");
        Ok(())
    }

    /// Validate an access token and return the user ID
    #[instrument(skip(self, token))]
    pub fn validate_token(&self, token: &str) -> ServiceResult<UserId> {
        let claims = self.ctx.jwt_service().validate_access_token(token)?;
        Ok(claims.user_id()?)
    }

    async fn issue_tokens(&self, user: &User) -> ServiceResult<AuthResponse> {
        let token_pair = self.ctx.jwt_service().generate_token_pair(user.id)?;

        self.ctx
            .session_store()
            .store(&token_pair.refresh_token, user.id)
            .await?;

        Ok(AuthResponse::new(
            token_pair.access_token,
            token_pair.refresh_token,
            token_pair.expires_in,
            CurrentUserResponse::from(user),
        ))
    }
}
