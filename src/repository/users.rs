//! Users collection

use super::{Keyed, UsersRepository};
use crate::{error::Entity, models::User};

impl Keyed for User {
    const ENTITY: Entity = Entity::User;

    fn key(&self) -> &str {
        &self.id
    }
}

impl UsersRepository {
    /// First user whose email and secret both match exactly
    pub fn find_by_credentials(&self, email: &str, password: &str) -> Option<&User> {
        self.iter().find(|u| u.matches_credentials(email, password))
    }
}
