// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Authentication types and the session service.

use time::{Duration, OffsetDateTime};

use gadget_market_persistence::{
    AdminData, Persistence, PersistenceError, SessionData, verify_password,
};

use crate::error::AuthError;

/// An authenticated administrator.
///
/// This represents an admin whose session token has been validated for the
/// current request. Administrators are the only authenticated principals in
/// the system; sellers and buyers interact through public endpoints.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthenticatedAdmin {
    /// The admin's canonical identifier.
    pub admin_id: i64,
    /// The admin's login name (normalized uppercase).
    pub username: String,
}

impl AuthenticatedAdmin {
    /// Creates a new authenticated admin.
    #[must_use]
    pub const fn new(admin_id: i64, username: String) -> Self {
        Self { admin_id, username }
    }
}

/// Authentication service for session-based authentication.
pub struct AuthenticationService;

impl AuthenticationService {
    /// Session expiration window.
    ///
    /// Sessions carry an absolute expiry; there is no refresh or rotation.
    const SESSION_EXPIRATION: Duration = Duration::minutes(30);

    /// Authenticates an admin and creates a session.
    ///
    /// Validates the credentials against the stored bcrypt hash, then
    /// issues an opaque session token with an absolute expiry.
    ///
    /// # Arguments
    ///
    /// * `persistence` - The persistence layer
    /// * `username` - The admin username
    /// * `password` - The plain-text password
    ///
    /// # Returns
    ///
    /// A tuple of (`session_token`, `authenticated_admin`, `admin_data`)
    ///
    /// # Errors
    ///
    /// Returns an error if the username is unknown or the password does not
    /// match. Both cases produce the same message so the response does not
    /// reveal which usernames exist.
    pub fn login(
        persistence: &mut Persistence,
        username: &str,
        password: &str,
    ) -> Result<(String, AuthenticatedAdmin, AdminData), AuthError> {
        // Retrieve admin by username
        let admin: AdminData = persistence
            .get_admin_by_username(username)
            .map_err(|e| AuthError::AuthenticationFailed {
                reason: format!("Database error: {e}"),
            })?
            .ok_or_else(|| AuthError::AuthenticationFailed {
                reason: String::from("Incorrect username or password"),
            })?;

        // Verify the password against the stored hash
        let password_matches: bool = verify_password(password, &admin.password_hash)
            .map_err(|e| AuthError::AuthenticationFailed {
                reason: format!("Database error: {e}"),
            })?;
        if !password_matches {
            return Err(AuthError::AuthenticationFailed {
                reason: String::from("Incorrect username or password"),
            });
        }

        // Generate session token
        let session_token: String = Self::generate_session_token();

        // Calculate expiration time
        let expires_at: OffsetDateTime = OffsetDateTime::now_utc() + Self::SESSION_EXPIRATION;
        let expires_at_str: String = expires_at
            .format(&time::format_description::well_known::Iso8601::DEFAULT)
            .map_err(|e| AuthError::AuthenticationFailed {
                reason: format!("Failed to format expiration time: {e}"),
            })?;

        // Create session
        persistence
            .create_session(&session_token, admin.admin_id, &expires_at_str)
            .map_err(|e| AuthError::AuthenticationFailed {
                reason: format!("Failed to create session: {e}"),
            })?;

        // Update last login timestamp
        persistence
            .update_last_login(admin.admin_id)
            .map_err(|e| AuthError::AuthenticationFailed {
                reason: format!("Failed to update last login: {e}"),
            })?;

        let authenticated_admin: AuthenticatedAdmin =
            AuthenticatedAdmin::new(admin.admin_id, admin.username.clone());

        Ok((session_token, authenticated_admin, admin))
    }

    /// Validates a session token and returns the authenticated admin.
    ///
    /// A tampered token is indistinguishable from an unknown one and fails
    /// with the same error; expiry is checked against the stored absolute
    /// timestamp.
    ///
    /// # Arguments
    ///
    /// * `persistence` - The persistence layer
    /// * `session_token` - The session token to validate
    ///
    /// # Returns
    ///
    /// A tuple of (`authenticated_admin`, `admin_data`)
    ///
    /// # Errors
    ///
    /// Returns an error if the session is unknown or expired, or if the
    /// admin it belongs to no longer exists.
    pub fn validate_session(
        persistence: &mut Persistence,
        session_token: &str,
    ) -> Result<(AuthenticatedAdmin, AdminData), AuthError> {
        // Retrieve session
        let session: SessionData = persistence
            .get_session_by_token(session_token)
            .map_err(Self::map_persistence_error)?
            .ok_or_else(|| AuthError::AuthenticationFailed {
                reason: String::from("Invalid session token"),
            })?;

        // Check if session is expired
        let expires_at: OffsetDateTime = OffsetDateTime::parse(
            &session.expires_at,
            &time::format_description::well_known::Iso8601::DEFAULT,
        )
        .map_err(|e| AuthError::AuthenticationFailed {
            reason: format!("Failed to parse session expiration: {e}"),
        })?;

        if OffsetDateTime::now_utc() > expires_at {
            return Err(AuthError::AuthenticationFailed {
                reason: String::from("Session expired"),
            });
        }

        // Retrieve admin
        let admin: AdminData = persistence
            .get_admin_by_id(session.admin_id)
            .map_err(Self::map_persistence_error)?
            .ok_or_else(|| AuthError::AuthenticationFailed {
                reason: String::from("Admin not found"),
            })?;

        // Update session activity
        persistence
            .update_session_activity(session.session_id)
            .map_err(Self::map_persistence_error)?;

        let authenticated_admin: AuthenticatedAdmin =
            AuthenticatedAdmin::new(admin.admin_id, admin.username.clone());

        Ok((authenticated_admin, admin))
    }

    /// Logs out by deleting the session.
    ///
    /// # Arguments
    ///
    /// * `persistence` - The persistence layer
    /// * `session_token` - The session token to delete
    ///
    /// # Errors
    ///
    /// Returns an error if the logout fails.
    pub fn logout(persistence: &mut Persistence, session_token: &str) -> Result<(), AuthError> {
        persistence
            .delete_session(session_token)
            .map_err(|e| AuthError::AuthenticationFailed {
                reason: format!("Failed to delete session: {e}"),
            })?;

        Ok(())
    }

    /// Purges sessions whose expiry has passed.
    ///
    /// # Errors
    ///
    /// Returns an error if the purge fails.
    pub fn purge_expired_sessions(persistence: &mut Persistence) -> Result<usize, AuthError> {
        let now: String = OffsetDateTime::now_utc()
            .format(&time::format_description::well_known::Iso8601::DEFAULT)
            .map_err(|e| AuthError::AuthenticationFailed {
                reason: format!("Failed to format timestamp: {e}"),
            })?;

        persistence
            .delete_expired_sessions(&now)
            .map_err(|e| AuthError::AuthenticationFailed {
                reason: format!("Failed to purge sessions: {e}"),
            })
    }

    /// Generates a session token.
    ///
    /// In a production system, this would use a cryptographically secure
    /// random number generator. For simplicity, we use a timestamp-based
    /// approach here.
    fn generate_session_token() -> String {
        use std::time::{SystemTime, UNIX_EPOCH};
        let timestamp: u128 = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .expect("Time went backwards")
            .as_nanos();
        format!("session_{timestamp}_{}", rand::random::<u64>())
    }

    /// Maps persistence errors to authentication errors.
    fn map_persistence_error(err: PersistenceError) -> AuthError {
        match err {
            PersistenceError::SessionExpired(msg) | PersistenceError::SessionNotFound(msg) => {
                AuthError::AuthenticationFailed { reason: msg }
            }
            _ => AuthError::AuthenticationFailed {
                reason: format!("Database error: {err}"),
            },
        }
    }
}
