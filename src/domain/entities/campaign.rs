use std::fmt;

use chrono::{DateTime, Utc};

use crate::domain::entities::table::ColumnSpec;
use crate::domain::entities::value::FieldValue;
use crate::domain::record::Record;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum DateRange {
    Last7Days,
    #[default]
    Last30Days,
    Last90Days,
    ThisYear,
}

impl DateRange {
    pub const ALL: [DateRange; 4] = [
        DateRange::Last7Days,
        DateRange::Last30Days,
        DateRange::Last90Days,
        DateRange::ThisYear,
    ];

    pub fn label(self) -> &'static str {
        match self {
            DateRange::Last7Days => "Last 7 days",
            DateRange::Last30Days => "Last 30 days",
            DateRange::Last90Days => "Last 90 days",
            DateRange::ThisYear => "This year",
        }
    }

    /// The range the date picker moves to on the next click.
    pub fn next(self) -> Self {
        match self {
            DateRange::Last7Days => DateRange::Last30Days,
            DateRange::Last30Days => DateRange::Last90Days,
            DateRange::Last90Days => DateRange::ThisYear,
            DateRange::ThisYear => DateRange::Last7Days,
        }
    }

    pub fn multiplier(self) -> f64 {
        match self {
            DateRange::Last7Days => 0.3,
            DateRange::Last90Days => 3.0,
            DateRange::Last30Days | DateRange::ThisYear => 1.0,
        }
    }

    pub fn slug(self) -> String {
        self.label().to_lowercase().replace(' ', "-")
    }
}

impl fmt::Display for DateRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CampaignStatus {
    Active,
    Paused,
    Completed,
}

impl CampaignStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            CampaignStatus::Active => "active",
            CampaignStatus::Paused => "paused",
            CampaignStatus::Completed => "completed",
        }
    }

    /// Status after pressing the play/pause toggle.
    pub fn toggled(self) -> Self {
        match self {
            CampaignStatus::Active => CampaignStatus::Paused,
            CampaignStatus::Paused | CampaignStatus::Completed => CampaignStatus::Active,
        }
    }
}

impl fmt::Display for CampaignStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct CampaignData {
    pub id: String,
    pub name: String,
    pub clicks: u64,
    pub conversions: u64,
    pub spend: f64,
    pub revenue: f64,
    pub status: CampaignStatus,
    pub start_date: String,
    pub end_date: String,
}

/// A campaign flattened for the performance table, with derived ratios.
#[derive(Debug, Clone, PartialEq)]
pub struct CampaignRow {
    pub id: String,
    pub name: String,
    pub status: CampaignStatus,
    pub clicks: u64,
    pub conversions: u64,
    pub spend: f64,
    pub revenue: f64,
    pub roas: f64,
    pub ctr: String,
    pub cpc: f64,
    pub start_date: String,
    pub end_date: String,
}

impl From<&CampaignData> for CampaignRow {
    fn from(campaign: &CampaignData) -> Self {
        let clicks = campaign.clicks as f64;
        Self {
            id: campaign.id.clone(),
            name: campaign.name.clone(),
            status: campaign.status,
            clicks: campaign.clicks,
            conversions: campaign.conversions,
            spend: campaign.spend,
            revenue: campaign.revenue,
            roas: round2(safe_div(campaign.revenue, campaign.spend)),
            ctr: format!("{:.2}%", safe_div(clicks, clicks * 20.0) * 100.0),
            cpc: round2(safe_div(campaign.spend, clicks)),
            start_date: campaign.start_date.clone(),
            end_date: campaign.end_date.clone(),
        }
    }
}

const CAMPAIGN_FIELDS: [&str; 12] = [
    "id",
    "name",
    "status",
    "clicks",
    "conversions",
    "spend",
    "revenue",
    "roas",
    "ctr",
    "cpc",
    "startDate",
    "endDate",
];

impl Record for CampaignRow {
    fn field(&self, key: &str) -> FieldValue {
        match key {
            "id" => self.id.as_str().into(),
            "name" => self.name.as_str().into(),
            "status" => self.status.as_str().into(),
            "clicks" => self.clicks.into(),
            "conversions" => self.conversions.into(),
            "spend" => self.spend.into(),
            "revenue" => self.revenue.into(),
            "roas" => self.roas.into(),
            "ctr" => self.ctr.as_str().into(),
            "cpc" => self.cpc.into(),
            "startDate" => self.start_date.as_str().into(),
            "endDate" => self.end_date.as_str().into(),
            _ => FieldValue::Missing,
        }
    }

    fn values(&self) -> Vec<FieldValue> {
        CAMPAIGN_FIELDS.iter().map(|key| self.field(key)).collect()
    }
}

pub const CAMPAIGN_TABLE_TITLE: &str = "Campaign Performance Data";

pub fn campaign_columns() -> Vec<ColumnSpec> {
    vec![
        ColumnSpec::new("name", "Campaign Name").sortable().filterable(),
        ColumnSpec::new("status", "Status").sortable().filterable(),
        ColumnSpec::new("clicks", "Clicks").sortable(),
        ColumnSpec::new("conversions", "Conversions").sortable(),
        ColumnSpec::new("spend", "Spend").sortable(),
        ColumnSpec::new("revenue", "Revenue").sortable(),
        ColumnSpec::new("roas", "ROAS").sortable(),
        ColumnSpec::new("ctr", "CTR").sortable(),
        ColumnSpec::new("cpc", "CPC").sortable(),
        ColumnSpec::new("startDate", "Start Date").sortable().filterable(),
    ]
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trend {
    Up,
    Down,
}

#[derive(Debug, Clone, PartialEq)]
pub struct KpiData {
    pub title: String,
    pub value: String,
    pub change: String,
    pub trend: Trend,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RevenuePoint {
    pub month: String,
    pub revenue: f64,
    pub impressions: f64,
    pub date: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TrafficSource {
    pub name: String,
    pub share: u32,
    pub color: String,
    pub sessions: u64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DeviceData {
    pub device: String,
    pub sessions: u64,
    pub conversions: u64,
    pub icon: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActivityKind {
    Success,
    Warning,
    Info,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ActivityItem {
    pub id: String,
    pub title: String,
    pub description: String,
    pub time: String,
    pub kind: ActivityKind,
    pub icon: String,
    pub timestamp: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchItem {
    pub kind: String,
    pub title: String,
    pub description: String,
    pub icon: String,
}

impl SearchItem {
    pub fn matches(&self, query_lower: &str) -> bool {
        [&self.title, &self.description, &self.kind]
            .iter()
            .any(|text| text.to_lowercase().contains(query_lower))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportFormat {
    Pdf,
    Excel,
}

impl ReportFormat {
    pub fn extension(self) -> &'static str {
        match self {
            ReportFormat::Pdf => "pdf",
            ReportFormat::Excel => "excel",
        }
    }
}

fn safe_div(numerator: f64, denominator: f64) -> f64 {
    if denominator == 0.0 {
        0.0
    } else {
        numerator / denominator
    }
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn summer_sale() -> CampaignData {
        CampaignData {
            id: "1".to_string(),
            name: "Summer Sale".to_string(),
            clicks: 12500,
            conversions: 450,
            spend: 8500.0,
            revenue: 22000.0,
            status: CampaignStatus::Active,
            start_date: "2024-06-01".to_string(),
            end_date: "2024-08-31".to_string(),
        }
    }

    #[test]
    fn campaign_row_derives_ratios() {
        let row = CampaignRow::from(&summer_sale());

        assert_eq!(row.roas, 2.59);
        assert_eq!(row.ctr, "5.00%");
        assert_eq!(row.cpc, 0.68);
    }

    #[test]
    fn zero_spend_and_clicks_do_not_divide_by_zero() {
        let mut campaign = summer_sale();
        campaign.spend = 0.0;
        campaign.clicks = 0;

        let row = CampaignRow::from(&campaign);

        assert_eq!(row.roas, 0.0);
        assert_eq!(row.cpc, 0.0);
        assert_eq!(row.ctr, "0.00%");
    }

    #[test]
    fn record_fields_use_column_keys() {
        let row = CampaignRow::from(&summer_sale());

        assert_eq!(row.field("startDate"), FieldValue::from("2024-06-01"));
        assert_eq!(row.field("spend").to_string(), "8500");
        assert_eq!(row.field("nope"), FieldValue::Missing);
        assert!(row.values().contains(&FieldValue::from("2024-08-31")));
    }

    #[test]
    fn date_range_cycles_through_all_ranges() {
        let mut range = DateRange::Last7Days;
        for expected in DateRange::ALL.iter().cycle().skip(1).take(4) {
            range = range.next();
            assert_eq!(range, *expected);
        }
        assert_eq!(DateRange::Last90Days.slug(), "last-90-days");
    }
}
