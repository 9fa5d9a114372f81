//! Activity history service

use emoji_core::{ActivityQuery, Snowflake};
use tracing::instrument;

use crate::dto::{ActivityItem, ActivityParams, ActivityResponse};

use super::context::ServiceContext;
use super::error::ServiceResult;

/// Activity service
pub struct ActivityService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> ActivityService<'a> {
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Newest-first page of the user's emoji lookups
    #[instrument(skip(self))]
    pub async fn list(
        &self,
        user_id: Snowflake,
        params: ActivityParams,
    ) -> ServiceResult<ActivityResponse> {
        let query = ActivityQuery::new(params.before, params.limit);

        let activities = self
            .ctx
            .activity_repo()
            .list(user_id, query)
            .await?
            .into_iter()
            .map(ActivityItem::from)
            .collect();

        Ok(ActivityResponse { activities })
    }
}
