mod dto;
pub mod guard;
mod store;

pub use dto::{Session, SessionSnapshot, SNAPSHOT_SCHEMA_VERSION};
pub use guard::{RouteCategory, RouteDecision, SessionState};
pub use store::{SaveOutcome, SessionStore, WaterUpdate};
