//! Mock authentication: hardcoded demo accounts behind a simulated backend.

use crate::ids::UserId;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use thiserror::Error;
use tracing::{info, warn};

/// Authentication error type.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum AuthError {
    /// Invalid credentials provided.
    #[error("invalid credentials")]
    InvalidCredentials,

    /// A registration field was left blank.
    #[error("missing field: {0}")]
    MissingField(&'static str),
}

/// User role for authorization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Role {
    /// Regular customer.
    #[default]
    Customer,
    /// Store administrator (sees the back office).
    Admin,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Customer => "customer",
            Role::Admin => "admin",
        }
    }
}

/// An authenticated user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    /// User ID.
    pub id: UserId,
    /// Display name.
    pub name: String,
    /// Email address.
    pub email: String,
    /// Role.
    pub role: Role,
}

impl User {
    /// Check if this user is an administrator.
    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }
}

/// The two demo accounts the storefront ships with.
const DEMO_ACCOUNTS: [(&str, &str, &str, Role); 2] = [
    ("admin@hanbok.com", "admin123", "Admin User", Role::Admin),
    ("user@hanbok.com", "user123", "Regular User", Role::Customer),
];

/// Simulated authentication backend.
///
/// There is no real credential store: login checks against the hardcoded demo
/// accounts and registration always succeeds, after sleeping an artificial
/// latency that stands in for the network round trip. A future real backend
/// keeps this async signature and replaces the body with an actual request.
#[derive(Debug, Clone)]
pub struct AuthGateway {
    latency: Duration,
}

impl AuthGateway {
    /// Create a gateway with the given simulated latency.
    pub fn new(latency: Duration) -> Self {
        Self { latency }
    }

    /// Authenticate against the demo accounts.
    pub async fn login(&self, email: &str, password: &str) -> Result<User, AuthError> {
        tokio::time::sleep(self.latency).await;

        for (demo_email, demo_password, name, role) in DEMO_ACCOUNTS {
            if email == demo_email && password == demo_password {
                let user = User {
                    id: UserId::new(match role {
                        Role::Admin => "1",
                        Role::Customer => "2",
                    }),
                    name: name.to_string(),
                    email: demo_email.to_string(),
                    role,
                };
                info!(email, role = role.as_str(), "login succeeded");
                return Ok(user);
            }
        }

        warn!(email, "login failed");
        Err(AuthError::InvalidCredentials)
    }

    /// Register a new account.
    ///
    /// Always succeeds with a fresh customer identity once the fields are
    /// non-empty; the caller is expected to log the returned user in
    /// immediately, as the storefront does.
    pub async fn register(
        &self,
        name: &str,
        email: &str,
        password: &str,
    ) -> Result<User, AuthError> {
        if name.trim().is_empty() {
            return Err(AuthError::MissingField("name"));
        }
        if email.trim().is_empty() {
            return Err(AuthError::MissingField("email"));
        }
        if password.is_empty() {
            return Err(AuthError::MissingField("password"));
        }

        tokio::time::sleep(self.latency).await;

        let user = User {
            id: UserId::generate(),
            name: name.to_string(),
            email: email.to_string(),
            role: Role::Customer,
        };
        info!(email, "registration succeeded");
        Ok(user)
    }
}

impl Default for AuthGateway {
    /// The storefront's simulated 1 second round trip.
    fn default() -> Self {
        Self::new(Duration::from_secs(1))
    }
}

/// The session holder: at most one logged-in user per storefront instance.
///
/// Lives from session start to session end; nothing is persisted. The cart
/// does not consult the session.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Session {
    user: Option<User>,
}

impl Session {
    /// Create a logged-out session.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a successful login.
    pub fn log_in(&mut self, user: User) {
        self.user = Some(user);
    }

    /// Log out. A no-op when nobody is logged in.
    pub fn log_out(&mut self) {
        self.user = None;
    }

    /// The current user, if any.
    pub fn current_user(&self) -> Option<&User> {
        self.user.as_ref()
    }

    /// Check if a user is logged in.
    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }
}
