//! Login session bound to an issued access token

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::value_objects::Snowflake;

/// Session record stored for every issued access token
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub user_id: Snowflake,
    pub session_id: String,
    pub created_at: DateTime<Utc>,
}

impl Session {
    pub fn new(user_id: Snowflake, session_id: impl Into<String>) -> Self {
        Self {
            user_id,
            session_id: session_id.into(),
            created_at: Utc::now(),
        }
    }
}
