use std::sync::Arc;

use time::OffsetDateTime;
use tracing::{debug, info, instrument, warn};

use crate::{
    auth::{LoginRequest, MockAuthenticator, RegisterRequest},
    config::AppConfig,
    error::{StorageError, ValidationError},
    meals::{self, MealEntry, MealId, NewMeal},
    profile::{OnboardingForm, Profile},
    storage::StorageClient,
    water::{self, WaterLog},
};

use super::{
    dto::{Session, SessionSnapshot, SNAPSHOT_SCHEMA_VERSION},
    guard::{self, RouteCategory, RouteDecision, SessionState},
};

/// Result of a mutation's write-through to durable storage.
#[must_use]
#[derive(Debug)]
pub enum SaveOutcome {
    Persisted,
    /// The in-memory change stands; only the durable copy is stale.
    Unpersisted(StorageError),
    /// No signed-in user, nothing changed.
    NoSession,
}

impl SaveOutcome {
    pub fn is_persisted(&self) -> bool {
        matches!(self, Self::Persisted)
    }
}

/// Outcome of [`SessionStore::add_water`].
#[derive(Debug)]
pub struct WaterUpdate {
    pub total: WaterLog,
    /// The delta moved the day's total from below the target to at or above it.
    pub target_reached: bool,
    pub outcome: SaveOutcome,
}

/// Owns the current session and writes it through a [`StorageClient`].
///
/// Created with [`SessionStore::init`], which restores any persisted
/// (registered) session, and passed explicitly to whatever needs it.
pub struct SessionStore {
    storage: Arc<dyn StorageClient>,
    key: String,
    auth: MockAuthenticator,
    session: Option<Session>,
}

impl SessionStore {
    pub fn init(storage: Arc<dyn StorageClient>, config: &AppConfig) -> Self {
        let key = config.storage.session_key.clone();
        let session = restore(storage.as_ref(), &key);
        match &session {
            Some(s) => info!(user_id = %s.user.id, "session restored"),
            None => debug!(key = %key, "no stored session"),
        }
        Self {
            storage,
            key,
            auth: MockAuthenticator::new(config.auth_latency),
            session,
        }
    }

    /// Ends the store. Durable state is left as is so the next `init` restores it.
    pub fn dispose(self) {
        debug!(
            user_id = ?self.session.as_ref().map(|s| s.user.id.as_str()),
            "session store disposed"
        );
    }

    pub fn session(&self) -> Option<&Session> {
        self.session.as_ref()
    }

    pub fn state(&self) -> SessionState {
        match &self.session {
            None => SessionState::Anonymous,
            Some(s) if s.profile.is_none() => SessionState::AuthenticatedNoProfile,
            Some(_) => SessionState::AuthenticatedWithProfile,
        }
    }

    pub fn route_decision(&self, route: RouteCategory) -> RouteDecision {
        guard::decide(self.state(), route)
    }

    /// Creates a new user and persists it immediately.
    #[instrument(skip(self, req), fields(email = %req.email))]
    pub async fn register(&mut self, req: RegisterRequest) -> Result<SaveOutcome, ValidationError> {
        let user = self.auth.register(req).await?;
        info!(user_id = %user.id, "user registered");
        self.session = Some(Session::new(user));
        Ok(self.save())
    }

    /// Signs in with the mock identity. Kept in memory only: a fresh `init`
    /// will not see this session.
    #[instrument(skip(self, req), fields(email = %req.email))]
    pub async fn login(&mut self, req: LoginRequest) -> Result<(), ValidationError> {
        let user = self.auth.login(req).await?;
        info!(user_id = %user.id, "user logged in");
        self.session = Some(Session::new(user));
        Ok(())
    }

    pub fn logout(&mut self) -> SaveOutcome {
        if let Some(s) = self.session.take() {
            info!(user_id = %s.user.id, "user logged out");
        }
        match self.storage.remove(&self.key) {
            Ok(()) => SaveOutcome::Persisted,
            Err(e) => {
                warn!(error = %e, key = %self.key, "failed to clear stored session");
                SaveOutcome::Unpersisted(e)
            }
        }
    }

    /// Replaces the profile as given. `daily_calorie_target` is taken verbatim.
    pub fn update_profile(&mut self, profile: Profile) -> SaveOutcome {
        self.mutate(|s| s.profile = Some(profile))
    }

    /// Stores the onboarding profile together with the free-text health status.
    pub fn complete_onboarding(
        &mut self,
        form: OnboardingForm,
    ) -> Result<SaveOutcome, ValidationError> {
        if self.session.is_none() {
            return Ok(SaveOutcome::NoSession);
        }
        let (profile, health_status) = form.into_profile()?;
        Ok(self.mutate(|s| {
            s.profile = Some(profile);
            s.health_status = health_status;
        }))
    }

    pub fn update_meal_data(&mut self, meals: Vec<MealEntry>) -> SaveOutcome {
        self.mutate(|s| s.meals = meals)
    }

    /// Negative or non-finite amounts are stored as zero.
    pub fn update_water_data(&mut self, liters: f64) -> SaveOutcome {
        self.mutate(|s| s.water = WaterLog::new(liters))
    }

    pub fn update_health_status(&mut self, status: Option<String>) -> SaveOutcome {
        let status = status
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty());
        self.mutate(|s| s.health_status = status)
    }

    pub fn add_meal(&mut self, meal: NewMeal) -> Result<SaveOutcome, ValidationError> {
        let Some(session) = &self.session else {
            return Ok(SaveOutcome::NoSession);
        };
        let updated = meals::add_meal(&session.meals, meal)?;
        Ok(self.update_meal_data(updated))
    }

    pub fn remove_meal(&mut self, id: MealId) -> SaveOutcome {
        let Some(session) = &self.session else {
            return SaveOutcome::NoSession;
        };
        let updated = meals::remove_meal(&session.meals, id);
        self.update_meal_data(updated)
    }

    /// Adds a signed delta to today's water. Returns `None` without a session.
    pub fn add_water(&mut self, delta: f64) -> Option<WaterUpdate> {
        let session = self.session.as_ref()?;
        let target = water::water_target(session.profile.as_ref());
        let before = session.water;
        let total = before.add(delta);
        let target_reached = water::crossed_target(before, total, target);
        if target_reached {
            info!(user_id = %session.user.id, target_l = target, "daily water target reached");
        }
        let outcome = self.mutate(|s| s.water = total);
        Some(WaterUpdate {
            total,
            target_reached,
            outcome,
        })
    }

    /// Writes the current session to storage.
    pub fn save(&self) -> SaveOutcome {
        let Some(session) = &self.session else {
            return SaveOutcome::NoSession;
        };
        match self.write_snapshot(session) {
            Ok(()) => {
                debug!(user_id = %session.user.id, key = %self.key, "session persisted");
                SaveOutcome::Persisted
            }
            Err(e) => {
                warn!(user_id = %session.user.id, error = %e, "session not persisted");
                SaveOutcome::Unpersisted(e)
            }
        }
    }

    fn write_snapshot(&self, session: &Session) -> Result<(), StorageError> {
        let snapshot = SessionSnapshot::capture(session, OffsetDateTime::now_utc());
        let json = serde_json::to_string(&snapshot)?;
        self.storage.set(&self.key, &json)
    }

    fn mutate(&mut self, f: impl FnOnce(&mut Session)) -> SaveOutcome {
        let Some(session) = self.session.as_mut() else {
            debug!("mutation ignored without a session");
            return SaveOutcome::NoSession;
        };
        f(session);
        self.save()
    }
}

fn restore(storage: &dyn StorageClient, key: &str) -> Option<Session> {
    let raw = match storage.get(key) {
        Ok(Some(raw)) => raw,
        Ok(None) => return None,
        Err(e) => {
            warn!(error = %e, key = %key, "could not read stored session");
            return None;
        }
    };

    let snapshot = match serde_json::from_str::<SessionSnapshot>(&raw) {
        Ok(s) if s.schema_version <= SNAPSHOT_SCHEMA_VERSION => s,
        Ok(s) => {
            warn!(
                key = %key,
                found = s.schema_version,
                supported = SNAPSHOT_SCHEMA_VERSION,
                "discarding session from a newer schema"
            );
            discard(storage, key);
            return None;
        }
        Err(e) => {
            warn!(error = %e, key = %key, "discarding unreadable session");
            discard(storage, key);
            return None;
        }
    };
    Some(snapshot.into_session())
}

fn discard(storage: &dyn StorageClient, key: &str) {
    if let Err(e) = storage.remove(key) {
        warn!(error = %e, key = %key, "failed to remove stored session");
    }
}
