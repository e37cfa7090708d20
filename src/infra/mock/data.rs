use chrono::{Duration, Utc};

use crate::domain::entities::campaign::{
    ActivityItem, ActivityKind, CampaignData, CampaignStatus, DateRange, DeviceData, KpiData,
    RevenuePoint, SearchItem, TrafficSource, Trend,
};
use crate::domain::entities::value::group_thousands;

pub fn kpis(range: DateRange) -> Vec<KpiData> {
    let multiplier = range.multiplier();
    let revenue = 124563.0 * multiplier;
    let conversions = (1429.0 * multiplier).round();

    vec![
        KpiData {
            title: "Total Revenue".to_string(),
            value: format!("${}", group_thousands(revenue)),
            change: "+12.5%".to_string(),
            trend: Trend::Up,
        },
        KpiData {
            title: "Impressions".to_string(),
            value: format!("{:.1}M", 2.4 * multiplier),
            change: "+8.2%".to_string(),
            trend: Trend::Up,
        },
        KpiData {
            title: "Click Rate".to_string(),
            value: "3.24%".to_string(),
            change: "-0.4%".to_string(),
            trend: Trend::Down,
        },
        KpiData {
            title: "Conversions".to_string(),
            value: group_thousands(conversions),
            change: "+18.7%".to_string(),
            trend: Trend::Up,
        },
    ]
}

pub fn revenue(range: DateRange) -> Vec<RevenuePoint> {
    let months = [
        ("Jan", 45000.0, 1_200_000.0, "2024-01-01"),
        ("Feb", 52000.0, 1_350_000.0, "2024-02-01"),
        ("Mar", 48000.0, 1_180_000.0, "2024-03-01"),
        ("Apr", 61000.0, 1_420_000.0, "2024-04-01"),
        ("May", 55000.0, 1_380_000.0, "2024-05-01"),
        ("Jun", 67000.0, 1_520_000.0, "2024-06-01"),
    ];
    let points = months
        .iter()
        .map(|(month, revenue, impressions, date)| RevenuePoint {
            month: month.to_string(),
            revenue: *revenue,
            impressions: *impressions,
            date: date.to_string(),
        })
        .collect::<Vec<_>>();

    if range != DateRange::Last7Days {
        return points;
    }

    points
        .into_iter()
        .last()
        .map(|point| RevenuePoint {
            month: "This Week".to_string(),
            revenue: (point.revenue * 0.25).round(),
            impressions: (point.impressions * 0.25).round(),
            date: point.date,
        })
        .into_iter()
        .collect()
}

pub fn campaigns() -> Vec<CampaignData> {
    let seed = [
        ("1", "Summer Sale", 12500, 450, 8500.0, 22000.0, CampaignStatus::Active, "2024-06-01", "2024-08-31"),
        ("2", "Brand Awareness", 8200, 180, 5200.0, 9800.0, CampaignStatus::Paused, "2024-05-15", "2024-07-15"),
        ("3", "Product Launch", 15600, 680, 12000.0, 34500.0, CampaignStatus::Active, "2024-06-15", "2024-09-15"),
        ("4", "Holiday Special", 9800, 320, 6800.0, 16200.0, CampaignStatus::Active, "2024-07-01", "2024-12-31"),
    ];

    seed.iter()
        .map(
            |(id, name, clicks, conversions, spend, revenue, status, start_date, end_date)| {
                CampaignData {
                    id: id.to_string(),
                    name: name.to_string(),
                    clicks: *clicks,
                    conversions: *conversions,
                    spend: *spend,
                    revenue: *revenue,
                    status: *status,
                    start_date: start_date.to_string(),
                    end_date: end_date.to_string(),
                }
            },
        )
        .collect()
}

pub fn traffic_sources() -> Vec<TrafficSource> {
    [
        ("Google Ads", 45, "#8b5cf6", 180000),
        ("Facebook", 25, "#06b6d4", 100000),
        ("Instagram", 15, "#f59e0b", 60000),
        ("LinkedIn", 10, "#10b981", 40000),
        ("Others", 5, "#ef4444", 20000),
    ]
    .iter()
    .map(|(name, share, color, sessions)| TrafficSource {
        name: name.to_string(),
        share: *share,
        color: color.to_string(),
        sessions: *sessions,
    })
    .collect()
}

pub fn devices() -> Vec<DeviceData> {
    [
        ("Desktop", 45000, 1200, "💻"),
        ("Mobile", 38000, 980, "📱"),
        ("Tablet", 12000, 240, "📱"),
    ]
    .iter()
    .map(|(device, sessions, conversions, icon)| DeviceData {
        device: device.to_string(),
        sessions: *sessions,
        conversions: *conversions,
        icon: icon.to_string(),
    })
    .collect()
}

pub fn recent_activity() -> Vec<ActivityItem> {
    let now = Utc::now();
    [
        (
            "1",
            "Summer Sale campaign exceeded target",
            "Generated $22,000 in revenue with 450 conversions",
            "2 hours ago",
            ActivityKind::Success,
            "🎉",
            2,
        ),
        (
            "2",
            "Brand Awareness campaign needs attention",
            "Click-through rate dropped below 2% threshold",
            "4 hours ago",
            ActivityKind::Warning,
            "⚠️",
            4,
        ),
        (
            "3",
            "New audience segment created",
            "Mobile users aged 25-34 with high engagement",
            "6 hours ago",
            ActivityKind::Info,
            "👥",
            6,
        ),
        (
            "4",
            "Monthly report generated",
            "Performance summary for June 2024 is ready",
            "1 day ago",
            ActivityKind::Info,
            "📊",
            24,
        ),
    ]
    .iter()
    .map(|(id, title, description, time, kind, icon, hours_ago)| ActivityItem {
        id: id.to_string(),
        title: title.to_string(),
        description: description.to_string(),
        time: time.to_string(),
        kind: *kind,
        icon: icon.to_string(),
        timestamp: now - Duration::hours(*hours_ago),
    })
    .collect()
}

pub fn search_catalogue() -> Vec<SearchItem> {
    [
        ("Campaign", "Summer Sale Campaign", "Active campaign with high conversion rate", "Target"),
        ("Campaign", "Brand Awareness", "Paused campaign focusing on brand visibility", "Target"),
        ("Campaign", "Product Launch", "High-performing product introduction campaign", "Target"),
        ("Metric", "Revenue Trends", "Monthly revenue analysis and forecasting", "TrendingUp"),
        ("Metric", "Conversion Rate", "Track conversion performance across campaigns", "MousePointer"),
        ("Audience", "Mobile Users 25-34", "High-engagement audience segment", "Users"),
        ("Audience", "Desktop Users", "Primary desktop audience analytics", "Users"),
        ("Report", "Performance Report", "Comprehensive campaign performance analysis", "BarChart3"),
    ]
    .iter()
    .map(|(kind, title, description, icon)| SearchItem {
        kind: kind.to_string(),
        title: title.to_string(),
        description: description.to_string(),
        icon: icon.to_string(),
    })
    .collect()
}
