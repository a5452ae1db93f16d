//! Role-based authorization policy

use crate::models::user::Role;

/// Named permission granted to some roles
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Capability {
    RegisterUsers,
    ManageBooks,
    /// Create loans, take returns, record payments, read the overdue report
    ManageLoans,
    ViewUsers,
}

impl Capability {
    pub fn description(&self) -> &'static str {
        match self {
            Capability::RegisterUsers => "register users",
            Capability::ManageBooks => "manage books",
            Capability::ManageLoans => "manage loans",
            Capability::ViewUsers => "list users",
        }
    }
}

pub fn is_allowed(role: Role, capability: Capability) -> bool {
    match capability {
        Capability::RegisterUsers => role == Role::Admin,
        Capability::ManageBooks | Capability::ManageLoans | Capability::ViewUsers => {
            matches!(role, Role::Admin | Role::Librarian)
        }
    }
}

pub fn can_register_users(role: Role) -> bool {
    is_allowed(role, Capability::RegisterUsers)
}

pub fn can_manage_books(role: Role) -> bool {
    is_allowed(role, Capability::ManageBooks)
}

pub fn can_manage_loans(role: Role) -> bool {
    is_allowed(role, Capability::ManageLoans)
}
