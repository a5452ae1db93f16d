//! Login / logout

use super::Library;
use crate::{models::UserInfo, session::Identity};

impl Library {
    /// Log in by exact email and secret.
    ///
    /// Returns `None` on any mismatch, without telling an unknown email apart
    /// from a wrong secret. A failed attempt leaves the current session as it
    /// was.
    pub fn login(&mut self, email: &str, password: &str) -> Option<UserInfo> {
        let Some(user) = self.repository.users.find_by_credentials(email, password) else {
            tracing::debug!("Login rejected");
            return None;
        };

        let info = user.info();
        self.session.set(Identity::from(user));
        tracing::info!(user_id = %info.user_id, role = %info.role, "User logged in");
        Some(info)
    }

    pub fn logout(&mut self) {
        if let Some(identity) = self.session.current() {
            tracing::info!(user_id = %identity.user_id, "User logged out");
        }
        self.session.clear();
    }

    /// The logged-in user, if any
    pub fn current_user(&self) -> Option<UserInfo> {
        let identity = self.session.current()?;
        self.repository
            .users
            .find(&identity.user_id)
            .map(|user| user.info())
    }
}
