//! Authentication service
//!
//! Handles user registration, login, and token verification.

use chrono::Utc;
use tracing::{info, instrument, warn};
use uuid::Uuid;
use vecino_common::auth::{hash_password, verify_password, Claims};
use vecino_core::entities::User;

use crate::dto::{AuthResponse, LoginRequest, RegisterRequest, UserResponse};

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

    /// Register a new user
    #[instrument(skip(self, request), fields(email = %request.email))]
    pub async fn register(&self, request: RegisterRequest) -> ServiceResult<AuthResponse> {
        // Check if email already exists (the unique index is the backstop
        // for concurrent registrations)
        if self.ctx.user_repo().email_exists(&request.email).await? {
            return Err(ServiceError::Domain(
                vecino_core::DomainError::EmailAlreadyExists,
            ));
        }

        // Hash password
        let password_hash =
            hash_password(&request.password).map_err(|e| ServiceError::internal(e.to_string()))?;

        // Create user
        let now = Utc::now();
        let user = User {
            id: Uuid::new_v4(),
            email: request.email,
            name: request.name,
            created_at: now,
            updated_at: now,
        };

        self.ctx.user_repo().create(&user, &password_hash).await?;

        info!(user_id = %user.id, "User registered successfully");

        let token = self
            .ctx
            .jwt_service()
            .issue_token(user.id, &user.email, &user.name)
            .map_err(|e| ServiceError::internal(e.to_string()))?;

        Ok(AuthResponse::new(token, UserResponse::from(&user)))
    }

    /// Login with email and password
    ///
    /// Unknown email and wrong password produce the same error so callers
    /// cannot enumerate accounts.
    #[instrument(skip(self, request), fields(email = %request.email))]
    pub async fn login(&self, request: LoginRequest) -> ServiceResult<AuthResponse> {
        let user = self
            .ctx
            .user_repo()
            .find_by_email(&request.email)
            .await?
            .ok_or_else(|| {
                warn!("Login failed: user not found");
                ServiceError::App(vecino_common::AppError::InvalidCredentials)
            })?;

        let password_hash = self
            .ctx
            .user_repo()
            .get_password_hash(&request.email)
            .await?
            .ok_or_else(|| {
                warn!(user_id = %user.id, "Login failed: no password hash");
                ServiceError::App(vecino_common::AppError::InvalidCredentials)
            })?;

        let is_valid = verify_password(&request.password, &password_hash)
            .map_err(|e| ServiceError::internal(e.to_string()))?;

        if !is_valid {
            warn!(user_id = %user.id, "Login failed: invalid password");
            return Err(ServiceError::App(
                vecino_common::AppError::InvalidCredentials,
            ));
        }

        info!(user_id = %user.id, "User logged in successfully");

        let token = self
            .ctx
            .jwt_service()
            .issue_token(user.id, &user.email, &user.name)
            .map_err(|e| ServiceError::internal(e.to_string()))?;

        Ok(AuthResponse::new(token, UserResponse::from(&user)))
    }

    /// Verify a session token and return its claims
    #[instrument(skip(self, token))]
    pub fn verify_token(&self, token: &str) -> ServiceResult<Claims> {
        self.ctx
            .jwt_service()
            .verify_token(token)
            .map_err(ServiceError::from)
    }
}
