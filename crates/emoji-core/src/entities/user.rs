//! User entity - represents a registered account

use chrono::{DateTime, Utc};

use super::role::Role;
use crate::value_objects::Snowflake;

/// User account as seen by the domain (the password hash never leaves the store)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: Snowflake,
    pub email: String,
    pub role: Role,
    pub avatar_url: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Create a new User with the given role and no avatar
    pub fn new(id: Snowflake, email: String, role: Role) -> Self {
        let now = Utc::now();
        Self {
            id,
            email,
            role,
            avatar_url: None,
            created_at: now,
            updated_at: now,
        }
    }

    /// Replace the email address
    pub fn set_email(&mut self, email: String) {
        self.email = email;
        self.updated_at = Utc::now();
    }

    /// Replace the role
    pub fn set_role(&mut self, role: Role) {
        self.role = role;
        self.updated_at = Utc::now();
    }

    /// Replace the avatar URL
    pub fn set_avatar_url(&mut self, avatar_url: Option<String>) {
        self.avatar_url = avatar_url;
        self.updated_at = Utc::now();
    }
}
