//! Current session identity

use crate::{
    error::{AppError, AppResult},
    models::user::{Role, User},
    policy::{self, Capability},
};

/// Who is logged in
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identity {
    pub user_id: String,
    pub role: Role,
}

impl From<&User> for Identity {
    fn from(user: &User) -> Self {
        Self {
            user_id: user.id.clone(),
            role: user.role,
        }
    }
}

/// At most one identity at a time; logging in replaces it
#[derive(Debug, Clone, Default)]
pub struct Session {
    current: Option<Identity>,
}

impl Session {
    pub fn current(&self) -> Option<&Identity> {
        self.current.as_ref()
    }

    pub fn set(&mut self, identity: Identity) {
        self.current = Some(identity);
    }

    pub fn clear(&mut self) {
        self.current = None;
    }

    /// Fails unless someone is logged in with the capability
    pub fn require(&self, capability: Capability) -> AppResult<&Identity> {
        match &self.current {
            Some(identity) if policy::is_allowed(identity.role, capability) => Ok(identity),
            Some(identity) => Err(AppError::Authorization(format!(
                "Role {} may not {}",
                identity.role,
                capability.description()
            ))),
            None => Err(AppError::Authorization(format!(
                "Login required to {}",
                capability.description()
            ))),
        }
    }

    /// Students may only look at records that belong to them
    pub fn require_self_view(&self, user_id: &str) -> AppResult<()> {
        match &self.current {
            Some(identity) if identity.role == Role::Student && identity.user_id != user_id => {
                Err(AppError::Authorization(
                    "Students may only view their own records".to_string(),
                ))
            }
            _ => Ok(()),
        }
    }
}
