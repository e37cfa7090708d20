use std::sync::Arc;

use tracing::info;

use crate::domain::entities::campaign::CampaignStatus;
use crate::usecase::ports::api::{ApiError, DashboardApi};

pub struct CampaignService {
    api: Arc<dyn DashboardApi>,
}

impl CampaignService {
    pub fn new(api: Arc<dyn DashboardApi>) -> Self {
        Self { api }
    }

    /// Flips an active campaign to paused and anything else to active.
    /// Returns the new status.
    pub fn toggle_status(
        &self,
        campaign_id: &str,
        current: CampaignStatus,
    ) -> Result<CampaignStatus, ApiError> {
        let next = current.toggled();
        self.api.update_campaign_status(campaign_id, next)?;
        info!(campaign_id, from = %current, to = %next, "campaign status updated");
        Ok(next)
    }
}
