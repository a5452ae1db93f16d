//! User management

use super::Library;
use crate::{
    error::AppResult,
    models::{Role, User, UserInfo},
    policy::Capability,
};

impl Library {
    /// Register a new user (administrators only)
    pub fn register_user(
        &mut self,
        id: &str,
        name: &str,
        email: &str,
        password: &str,
        role: Role,
    ) -> AppResult<UserInfo> {
        self.session.require(Capability::RegisterUsers)?;
        self.repository.users.ensure_vacant(id)?;

        let user = User::new(id, name, email, password, role, self.now());
        let info = self.repository.users.insert(user)?.info();

        tracing::info!(user_id = %info.user_id, role = %info.role, "User registered");
        Ok(info)
    }

    /// User details; students only see their own
    pub fn get_user_info(&self, id: &str) -> AppResult<UserInfo> {
        self.session.require_self_view(id)?;
        let user = self.repository.users.get(id)?;
        Ok(user.info())
    }

    pub fn list_users(&self) -> AppResult<Vec<UserInfo>> {
        self.session.require(Capability::ViewUsers)?;
        Ok(self.repository.users.iter().map(User::info).collect())
    }
}
