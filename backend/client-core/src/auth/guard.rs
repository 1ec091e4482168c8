//! Pre-navigation session check.
//!
//! The embedding application calls [`before_navigate`] ahead of every route
//! transition. When a persisted token exists but no session is loaded yet
//! (fresh start, page reload), the guard restores the session before the
//! transition lands, and bounces an already-authenticated visit to the
//! login route back home.
//!
//! The guard is advisory only: it never blocks navigation on a failed
//! restore. Unauthenticated visitors navigate freely, and access control
//! stays the server's responsibility.

use crate::auth::AuthSession;

pub const LOGIN_ROUTE: &str = "/login";
pub const HOME_ROUTE: &str = "/";

/// What the caller should do with the pending navigation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuardOutcome {
    /// Let the transition proceed unchanged.
    Proceed,
    /// Navigate to the given route instead.
    Redirect(String),
}

/// Run the session check for a transition from `_from` to `to`.
pub async fn before_navigate(session: &AuthSession, to: &str, _from: &str) -> GuardOutcome {
    if session.token_store().get().is_some() && !session.is_logged_in().await {
        let reverted = session.revert(None).await;
        if to == LOGIN_ROUTE && reverted {
            return GuardOutcome::Redirect(HOME_ROUTE.to_string());
        }
    }

    GuardOutcome::Proceed
}
