// Per-run authentication state. Lives on the interaction loop's stack and
// is passed by reference to the router and views; nothing is persisted.

use tracing::info;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Session {
    #[default]
    Unauthenticated,
    Authenticated {
        token: String,
    },
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply the outcome of a login attempt. A successful token moves the
    /// session to `Authenticated`; a failed attempt leaves it untouched.
    /// Returns whether the session is now authenticated.
    pub fn apply_login<E>(&mut self, outcome: Result<String, E>) -> bool {
        match outcome {
            Ok(token) if !token.is_empty() => {
                info!("session authenticated");
                *self = Session::Authenticated { token };
                true
            }
            _ => self.is_authenticated(),
        }
    }

    /// Drop the token unconditionally.
    pub fn logout(&mut self) {
        if self.is_authenticated() {
            info!("session logged out");
        }
        *self = Session::Unauthenticated;
    }

    pub fn token(&self) -> Option<&str> {
        match self {
            Session::Authenticated { token } => Some(token),
            Session::Unauthenticated => None,
        }
    }

    pub fn is_authenticated(&self) -> bool {
        matches!(self, Session::Authenticated { .. })
    }
}
