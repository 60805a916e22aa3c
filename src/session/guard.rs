/// Where the current user stands in the onboarding flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Anonymous,
    AuthenticatedNoProfile,
    AuthenticatedWithProfile,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteCategory {
    Public,
    /// Needs a user with a completed profile.
    Protected,
    /// Profile setup; needs a user, profile optional.
    ProfileSetup,
    /// Login and registration pages.
    AuthPages,
}

impl RouteCategory {
    pub fn from_path(path: &str) -> Self {
        let path = path.split(['?', '#']).next().unwrap_or_default();
        let first = path.trim_start_matches('/').split('/').next().unwrap_or_default();
        match first {
            "dashboard" | "meals" | "water" | "recipes" => Self::Protected,
            "profile" => Self::ProfileSetup,
            "auth" => Self::AuthPages,
            _ => Self::Public,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteDecision {
    Allow,
    RedirectToLogin,
    RedirectToProfileSetup,
    RedirectToDashboard,
}

impl RouteDecision {
    pub fn redirect_path(self) -> Option<&'static str> {
        match self {
            Self::Allow => None,
            Self::RedirectToLogin => Some("/auth/login"),
            Self::RedirectToProfileSetup => Some("/profile"),
            Self::RedirectToDashboard => Some("/dashboard"),
        }
    }
}

pub fn decide(state: SessionState, route: RouteCategory) -> RouteDecision {
    use RouteCategory::*;
    use RouteDecision::*;
    use SessionState::*;

    match (state, route) {
        (_, Public) => Allow,
        (Anonymous, Protected | ProfileSetup) => RedirectToLogin,
        (Anonymous, AuthPages) => Allow,
        (AuthenticatedNoProfile, Protected) => RedirectToProfileSetup,
        // registration step 2 lives behind the auth pages, so don't bounce to the dashboard
        (AuthenticatedNoProfile, ProfileSetup | AuthPages) => Allow,
        (AuthenticatedWithProfile, Protected | ProfileSetup) => Allow,
        (AuthenticatedWithProfile, AuthPages) => RedirectToDashboard,
    }
}
