use std::time::Duration;

use lazy_static::lazy_static;
use regex::Regex;
use time::OffsetDateTime;
use tracing::{debug, warn};

use crate::error::ValidationError;

use super::dto::{LoginRequest, RegisterRequest, User};

pub(crate) const DEMO_USER_ID: &str = "user-1";
pub(crate) const DEMO_USER_NAME: &str = "John Doe";

pub(crate) fn is_valid_email(email: &str) -> bool {
    lazy_static! {
        static ref EMAIL_RE: Regex = Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").unwrap();
    }
    EMAIL_RE.is_match(email)
}

fn normalize_email(email: &str) -> Result<String, ValidationError> {
    let email = email.trim().to_lowercase();
    if !is_valid_email(&email) {
        warn!(email = %email, "invalid email");
        return Err(ValidationError::InvalidEmail(email));
    }
    Ok(email)
}

/// Mock identity provider. Resolves after a fixed simulated round trip and
/// accepts any well-formed credentials.
#[derive(Debug, Clone)]
pub struct MockAuthenticator {
    latency: Duration,
}

impl MockAuthenticator {
    pub fn new(latency: Duration) -> Self {
        Self { latency }
    }

    async fn round_trip(&self) {
        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }
    }

    pub async fn register(&self, mut req: RegisterRequest) -> Result<User, ValidationError> {
        req.name = req.name.trim().to_string();
        if req.name.is_empty() {
            return Err(ValidationError::Empty("name"));
        }
        let email = normalize_email(&req.email)?;
        if req.password.is_empty() {
            return Err(ValidationError::Empty("password"));
        }

        self.round_trip().await;

        let millis = OffsetDateTime::now_utc().unix_timestamp_nanos() / 1_000_000;
        let user = User {
            id: format!("user-{millis}"),
            name: req.name,
            email,
        };
        debug!(user_id = %user.id, "mock register resolved");
        Ok(user)
    }

    pub async fn login(&self, req: LoginRequest) -> Result<User, ValidationError> {
        let email = normalize_email(&req.email)?;
        if req.password.is_empty() {
            return Err(ValidationError::Empty("password"));
        }

        self.round_trip().await;

        debug!(email = %email, "mock login resolved");
        Ok(User {
            id: DEMO_USER_ID.to_string(),
            name: DEMO_USER_NAME.to_string(),
            email,
        })
    }
}
