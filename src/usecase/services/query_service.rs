use std::sync::Arc;

use tracing::{debug, info};

use crate::domain::entities::campaign::{
    ActivityItem, CampaignData, CampaignRow, DateRange, DeviceData, KpiData, RevenuePoint,
    SearchItem, TrafficSource,
};
use crate::usecase::ports::api::{ApiError, DashboardApi};

/// Queries shorter than this return no results without hitting the backend.
pub const MIN_SEARCH_CHARS: usize = 2;

#[derive(Debug, Clone, PartialEq)]
pub struct DashboardSnapshot {
    pub range: DateRange,
    pub kpis: Vec<KpiData>,
    pub revenue: Vec<RevenuePoint>,
    pub campaigns: Vec<CampaignData>,
    pub traffic_sources: Vec<TrafficSource>,
    pub devices: Vec<DeviceData>,
    pub recent_activity: Vec<ActivityItem>,
}

impl DashboardSnapshot {
    pub fn campaign_rows(&self) -> Vec<CampaignRow> {
        self.campaigns.iter().map(CampaignRow::from).collect()
    }
}

pub struct QueryService {
    api: Arc<dyn DashboardApi>,
}

impl QueryService {
    pub fn new(api: Arc<dyn DashboardApi>) -> Self {
        Self { api }
    }

    /// Loads every dashboard section; the first failing call aborts the load.
    pub fn load_dashboard(&self, range: DateRange) -> Result<DashboardSnapshot, ApiError> {
        let mut recent_activity = self.api.fetch_recent_activity()?;
        recent_activity.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
        let snapshot = DashboardSnapshot {
            range,
            kpis: self.api.fetch_kpis(range)?,
            revenue: self.api.fetch_revenue(range)?,
            campaigns: self.api.fetch_campaigns()?,
            traffic_sources: self.api.fetch_traffic_sources()?,
            devices: self.api.fetch_devices()?,
            recent_activity,
        };
        info!(
            range = %range,
            campaigns = snapshot.campaigns.len(),
            "dashboard loaded"
        );
        Ok(snapshot)
    }

    pub fn campaign_rows(&self) -> Result<Vec<CampaignRow>, ApiError> {
        let campaigns = self.api.fetch_campaigns()?;
        Ok(campaigns.iter().map(CampaignRow::from).collect())
    }

    pub fn search(&self, query: &str) -> Result<Vec<SearchItem>, ApiError> {
        if query.chars().count() < MIN_SEARCH_CHARS {
            return Ok(Vec::new());
        }
        let results = self.api.search_dashboard(query)?;
        debug!(query, hits = results.len(), "dashboard search");
        Ok(results)
    }
}
