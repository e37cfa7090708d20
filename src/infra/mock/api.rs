use std::sync::Mutex;
use std::thread;
use std::time::Duration;

use chrono::Utc;
use tracing::debug;

use crate::domain::entities::campaign::{
    ActivityItem, CampaignData, CampaignStatus, DateRange, DeviceData, KpiData, ReportFormat,
    RevenuePoint, SearchItem, TrafficSource,
};
use crate::infra::mock::data;
use crate::usecase::ports::api::{ApiError, DashboardApi};

const KPI_DELAY_MS: u64 = 500;
const REVENUE_DELAY_MS: u64 = 800;
const CAMPAIGN_DELAY_MS: u64 = 600;
const TRAFFIC_DELAY_MS: u64 = 400;
const DEVICE_DELAY_MS: u64 = 300;
const ACTIVITY_DELAY_MS: u64 = 200;
const SEARCH_DELAY_MS: u64 = 300;
const REPORT_DELAY_MS: u64 = 2000;
const STATUS_DELAY_MS: u64 = 1000;

/// In-memory dashboard backend with simulated network latency.
pub struct MockDashboardApi {
    campaigns: Mutex<Vec<CampaignData>>,
    latency_scale: f64,
}

impl MockDashboardApi {
    pub fn new(latency_scale: f64) -> Self {
        Self {
            campaigns: Mutex::new(data::campaigns()),
            latency_scale: latency_scale.max(0.0),
        }
    }

    /// No simulated latency; used by tests.
    pub fn instant() -> Self {
        Self::new(0.0)
    }

    fn simulate_latency(&self, call: &str, base_ms: u64) {
        let millis = (base_ms as f64 * self.latency_scale).round() as u64;
        debug!(call, millis, "mock api call");
        if millis > 0 {
            thread::sleep(Duration::from_millis(millis));
        }
    }
}

impl Default for MockDashboardApi {
    fn default() -> Self {
        Self::new(1.0)
    }
}

impl DashboardApi for MockDashboardApi {
    fn fetch_kpis(&self, range: DateRange) -> Result<Vec<KpiData>, ApiError> {
        self.simulate_latency("fetch_kpis", KPI_DELAY_MS);
        Ok(data::kpis(range))
    }

    fn fetch_revenue(&self, range: DateRange) -> Result<Vec<RevenuePoint>, ApiError> {
        self.simulate_latency("fetch_revenue", REVENUE_DELAY_MS);
        Ok(data::revenue(range))
    }

    fn fetch_campaigns(&self) -> Result<Vec<CampaignData>, ApiError> {
        self.simulate_latency("fetch_campaigns", CAMPAIGN_DELAY_MS);
        let campaigns = self
            .campaigns
            .lock()
            .map_err(|_| ApiError::Unavailable("campaign store lock poisoned".to_string()))?;
        Ok(campaigns.clone())
    }

    fn fetch_traffic_sources(&self) -> Result<Vec<TrafficSource>, ApiError> {
        self.simulate_latency("fetch_traffic_sources", TRAFFIC_DELAY_MS);
        Ok(data::traffic_sources())
    }

    fn fetch_devices(&self) -> Result<Vec<DeviceData>, ApiError> {
        self.simulate_latency("fetch_devices", DEVICE_DELAY_MS);
        Ok(data::devices())
    }

    fn fetch_recent_activity(&self) -> Result<Vec<ActivityItem>, ApiError> {
        self.simulate_latency("fetch_recent_activity", ACTIVITY_DELAY_MS);
        Ok(data::recent_activity())
    }

    fn search_dashboard(&self, query: &str) -> Result<Vec<SearchItem>, ApiError> {
        self.simulate_latency("search_dashboard", SEARCH_DELAY_MS);
        let query = query.to_lowercase();
        Ok(data::search_catalogue()
            .into_iter()
            .filter(|item| item.matches(&query))
            .collect())
    }

    fn export_report(&self, format: ReportFormat, range: DateRange) -> Result<String, ApiError> {
        self.simulate_latency("export_report", REPORT_DELAY_MS);
        Ok(format!(
            "report-{}-{}.{}",
            range.slug(),
            Utc::now().timestamp_millis(),
            format.extension()
        ))
    }

    fn update_campaign_status(&self, id: &str, status: CampaignStatus) -> Result<(), ApiError> {
        self.simulate_latency("update_campaign_status", STATUS_DELAY_MS);
        let mut campaigns = self
            .campaigns
            .lock()
            .map_err(|_| ApiError::Unavailable("campaign store lock poisoned".to_string()))?;
        let campaign = campaigns
            .iter_mut()
            .find(|campaign| campaign.id == id)
            .ok_or_else(|| ApiError::NotFound(format!("campaign #{id}")))?;
        campaign.status = status;
        Ok(())
    }
}
