//! User model → entity

use emoji_core::entities::{Role, User};
use emoji_core::error::DomainError;
use emoji_core::value_objects::Snowflake;

use crate::models::UserModel;

impl TryFrom<UserModel> for User {
    type Error = DomainError;

    fn try_from(model: UserModel) -> Result<Self, Self::Error> {
        let role = model
            .role
            .parse::<Role>()
            .map_err(|e| DomainError::DatabaseError(format!("user {}: {e}", model.id)))?;

        Ok(User {
            id: Snowflake::new(model.id),
            email: model.email,
            role,
            avatar_url: model.avatar_url,
            created_at: model.created_at,
            updated_at: model.updated_at,
        })
    }
}
