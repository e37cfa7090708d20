use thiserror::Error;

use crate::domain::entities::campaign::{
    ActivityItem, CampaignData, CampaignStatus, DateRange, DeviceData, KpiData, ReportFormat,
    RevenuePoint, SearchItem, TrafficSource,
};

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ApiError {
    #[error("not found: {0}")]
    NotFound(String),

    #[error("service unavailable: {0}")]
    Unavailable(String),
}

/// Source of dashboard data. Every call may block while the backend answers.
pub trait DashboardApi: Send + Sync {
    fn fetch_kpis(&self, range: DateRange) -> Result<Vec<KpiData>, ApiError>;
    fn fetch_revenue(&self, range: DateRange) -> Result<Vec<RevenuePoint>, ApiError>;
    fn fetch_campaigns(&self) -> Result<Vec<CampaignData>, ApiError>;
    fn fetch_traffic_sources(&self) -> Result<Vec<TrafficSource>, ApiError>;
    fn fetch_devices(&self) -> Result<Vec<DeviceData>, ApiError>;
    fn fetch_recent_activity(&self) -> Result<Vec<ActivityItem>, ApiError>;

    fn search_dashboard(&self, query: &str) -> Result<Vec<SearchItem>, ApiError>;

    /// Generates a report and returns its file name.
    fn export_report(&self, format: ReportFormat, range: DateRange) -> Result<String, ApiError>;
    fn update_campaign_status(&self, id: &str, status: CampaignStatus) -> Result<(), ApiError>;
}
