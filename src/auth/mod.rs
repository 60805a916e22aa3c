mod dto;
mod services;

pub use dto::{LoginRequest, RegisterRequest, User};
pub use services::MockAuthenticator;
