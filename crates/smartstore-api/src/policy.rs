// SPDX-FileCopyrightText: 2026 SmartStore Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Global authorization-failure policy.
//!
//! Layered under the GraphQL path: any response carrying an
//! `UNAUTHORIZED` or `FORBIDDEN` error clears the session store and
//! forces navigation to the login entry point. The policy fires exactly
//! once per qualifying response, regardless of how many errors in that
//! response carry an authorization code, and it never fires for logout
//! (logout is idempotent against an already-expired token).

use std::fmt;
use std::sync::Arc;

use smartstore_session::SessionStore;
use tracing::warn;

/// Session-clear + redirect policy injected into the [`crate::ApiClient`].
pub struct UnauthorizedPolicy {
    session: Arc<dyn SessionStore>,
    on_redirect: Box<dyn Fn() + Send + Sync>,
}

impl UnauthorizedPolicy {
    /// Create a policy over the given session store. `on_redirect` is the
    /// navigation action (route to login in a UI host; a notice in the CLI).
    pub fn new(
        session: Arc<dyn SessionStore>,
        on_redirect: impl Fn() + Send + Sync + 'static,
    ) -> Self {
        Self {
            session,
            on_redirect: Box::new(on_redirect),
        }
    }

    /// Clear the session and invoke the redirect action.
    ///
    /// A failed clear is logged and does not suppress the redirect.
    pub(crate) fn fire(&self) {
        warn!("authorization error from backend, clearing session");
        if let Err(e) = self.session.clear() {
            warn!(error = %e, "failed to clear session while handling authorization error");
        }
        (self.on_redirect)();
    }
}

impl fmt::Debug for UnauthorizedPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UnauthorizedPolicy").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use smartstore_session::MemorySessionStore;

    #[test]
    fn fire_clears_session_and_invokes_redirect() {
        let session = Arc::new(MemorySessionStore::new());
        session.set_session("token", "user-1").unwrap();

        let redirects = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&redirects);
        let policy = UnauthorizedPolicy::new(Arc::clone(&session) as Arc<dyn SessionStore>, move || {
            counter.fetch_add(1, Ordering::SeqCst);
        });

        policy.fire();

        assert!(session.access_token().is_none());
        assert_eq!(redirects.load(Ordering::SeqCst), 1);
    }
}
