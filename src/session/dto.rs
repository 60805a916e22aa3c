use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use crate::{auth::User, meals::MealEntry, profile::Profile, water::WaterLog};

/// Version written into every persisted snapshot.
pub const SNAPSHOT_SCHEMA_VERSION: u32 = 1;

/// The signed-in user and everything logged for them today.
#[derive(Debug, Clone, PartialEq)]
pub struct Session {
    pub user: User,
    pub profile: Option<Profile>,
    pub meals: Vec<MealEntry>,
    pub water: WaterLog,
    pub health_status: Option<String>,
}

impl Session {
    pub fn new(user: User) -> Self {
        Self {
            user,
            profile: None,
            meals: Vec::new(),
            water: WaterLog::default(),
            health_status: None,
        }
    }
}

/// Durable JSON shape. Missing `schemaVersion` means a pre-versioning record (0).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionSnapshot {
    #[serde(default)]
    pub schema_version: u32,
    pub id: String,
    pub name: String,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profile: Option<Profile>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meals: Option<Vec<MealEntry>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub water_consumed: Option<WaterLog>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub health_status: Option<String>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "time::serde::rfc3339::option"
    )]
    pub saved_at: Option<OffsetDateTime>,
}

impl SessionSnapshot {
    pub fn capture(session: &Session, saved_at: OffsetDateTime) -> Self {
        Self {
            schema_version: SNAPSHOT_SCHEMA_VERSION,
            id: session.user.id.clone(),
            name: session.user.name.clone(),
            email: session.user.email.clone(),
            profile: session.profile.clone(),
            meals: Some(session.meals.clone()),
            water_consumed: Some(session.water),
            health_status: session.health_status.clone(),
            saved_at: Some(saved_at),
        }
    }

    pub fn into_session(self) -> Session {
        Session {
            user: User {
                id: self.id,
                name: self.name,
                email: self.email,
            },
            profile: self.profile,
            meals: self.meals.unwrap_or_default(),
            water: self.water_consumed.unwrap_or_default(),
            health_status: self.health_status,
        }
    }
}

#[cfg(test)]
mod dto_tests {
    use super::*;
    use time::macros::datetime;

    fn user() -> User {
        User {
            id: "user-1700000000000".into(),
            name: "Jane".into(),
            email: "jane@example.com".into(),
        }
    }

    #[test]
    fn snapshot_uses_camel_case_keys() {
        let mut session = Session::new(user());
        session.water = WaterLog::new(1.5);
        session.health_status = Some("healthy".into());
        let snap = SessionSnapshot::capture(&session, datetime!(2024-05-01 08:00 UTC));
        let v = serde_json::to_value(&snap).unwrap();
        assert_eq!(v["schemaVersion"], 1);
        assert_eq!(v["waterConsumed"], 1.5);
        assert_eq!(v["healthStatus"], "healthy");
        assert_eq!(v["savedAt"], "2024-05-01T08:00:00Z");
        assert!(v.get("profile").is_none());
    }

    #[test]
    fn legacy_record_without_version_is_readable() {
        let raw = r#"{"id":"user-1","name":"John Doe","email":"john@example.com","waterConsumed":2}"#;
        let snap: SessionSnapshot = serde_json::from_str(raw).unwrap();
        assert_eq!(snap.schema_version, 0);
        let session = snap.into_session();
        assert_eq!(session.water.liters(), 2.0);
        assert!(session.meals.is_empty());
        assert!(session.profile.is_none());
    }

    #[test]
    fn capture_then_restore_is_lossless() {
        let mut session = Session::new(user());
        session.water = WaterLog::new(0.75);
        let snap = SessionSnapshot::capture(&session, datetime!(2024-05-01 08:00 UTC));
        let json = serde_json::to_string(&snap).unwrap();
        let back: SessionSnapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(back.into_session(), session);
    }
}
