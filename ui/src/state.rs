use payloads::responses;
use yewdux::prelude::*;

#[derive(Clone, PartialEq, Default)]
pub enum AuthState {
    /// Startup: a stored token may still be getting validated.
    #[default]
    Unknown,
    LoggedOut,
    LoggedIn(responses::UserProfile),
}

/// Global session state, populated by `use_authentication` on startup and by
/// the login/sign-up pages afterwards. Query data does not live here; that
/// is the query cache's job.
#[derive(Default, Clone, PartialEq, Store)]
pub struct SessionState {
    pub auth_state: AuthState,
}

impl SessionState {
    pub fn is_authenticated(&self) -> bool {
        matches!(self.auth_state, AuthState::LoggedIn(_))
    }

    pub fn username(&self) -> Option<&str> {
        match &self.auth_state {
            AuthState::LoggedIn(profile) => Some(&profile.username),
            _ => None,
        }
    }

    pub fn logout(&mut self) {
        self.auth_state = AuthState::LoggedOut;
    }
}
