use dioxus::prelude::*;

use crate::domain::entities::campaign::{
    ActivityItem, ActivityKind, DeviceData, KpiData, RevenuePoint, TrafficSource, Trend,
};
use crate::domain::entities::value::group_thousands;
use crate::ui::format::bar_percent;

fn card_style() -> &'static str {
    "background: #fff; border: 1px solid #e3e3e3; border-radius: 10px; padding: 14px;"
}

#[component]
pub fn KpiStrip(kpis: Vec<KpiData>) -> Element {
    rsx! {
        div {
            style: "display: grid; grid-template-columns: repeat(4, minmax(0, 1fr)); gap: 12px;",
            for kpi in kpis.iter() {
                {
                    let (arrow, color) = match kpi.trend {
                        Trend::Up => ("▲", "#1a7f3c"),
                        Trend::Down => ("▼", "#c62828"),
                    };
                    rsx!(
                        div {
                            key: "{kpi.title}",
                            style: "{card_style()}",
                            div { style: "color: #666; font-size: 13px;", "{kpi.title}" }
                            div { style: "font-size: 24px; font-weight: 700; margin: 6px 0;", "{kpi.value}" }
                            div { style: "color: {color}; font-size: 13px;", "{arrow} {kpi.change}" }
                        }
                    )
                }
            }
        }
    }
}

#[component]
pub fn RevenuePanel(points: Vec<RevenuePoint>) -> Element {
    let peak = points.iter().map(|point| point.revenue).fold(0.0, f64::max);

    rsx! {
        div {
            style: "{card_style()}",
            h3 { style: "margin: 0 0 8px 0;", "Revenue & Impressions" }
            if points.is_empty() {
                div { style: "color: #777;", "No revenue data for this range" }
            }
            for point in points.iter() {
                {
                    let revenue = group_thousands(point.revenue.round());
                    let impressions = group_thousands(point.impressions.round());
                    let width = format!("{:.1}", bar_percent(point.revenue, peak));
                    rsx!(
                        div {
                            key: "{point.month}",
                            title: "{point.date}",
                            style: "display: grid; grid-template-columns: 80px minmax(0, 1fr) 90px 110px; align-items: center; gap: 8px; margin: 4px 0;",
                            span { "{point.month}" }
                            div { style: "background: #eef0f4; border-radius: 4px; height: 10px;",
                                div { style: "background: #1f5fbf; border-radius: 4px; height: 10px; width: {width}%;" }
                            }
                            span { style: "text-align: right;", "${revenue}" }
                            span { style: "color: #777; text-align: right;", "{impressions} impr." }
                        }
                    )
                }
            }
        }
    }
}

#[component]
pub fn TrafficPanel(sources: Vec<TrafficSource>, devices: Vec<DeviceData>) -> Element {
    rsx! {
        div {
            style: "{card_style()}",
            h3 { style: "margin: 0 0 8px 0;", "Traffic Sources" }
            for source in sources.iter() {
                {
                    let sessions = group_thousands(source.sessions as f64);
                    rsx!(
                        div {
                            key: "{source.name}",
                            style: "display: flex; align-items: center; gap: 8px; margin: 4px 0;",
                            span { style: "width: 10px; height: 10px; border-radius: 5px; background: {source.color};" }
                            span { style: "flex: 1;", "{source.name}" }
                            span { "{source.share}%" }
                            span { style: "color: #777; min-width: 80px; text-align: right;", "{sessions}" }
                        }
                    )
                }
            }
            h3 { style: "margin: 12px 0 8px 0;", "Devices" }
            for device in devices.iter() {
                {
                    let sessions = group_thousands(device.sessions as f64);
                    let conversions = group_thousands(device.conversions as f64);
                    rsx!(
                        div {
                            key: "{device.device}",
                            style: "display: flex; gap: 8px; margin: 4px 0;",
                            span { style: "flex: 1;", "{device.device}" }
                            span { "{sessions} sessions" }
                            span { style: "color: #777;", "{conversions} conv." }
                        }
                    )
                }
            }
        }
    }
}

#[component]
pub fn ActivityFeed(items: Vec<ActivityItem>) -> Element {
    rsx! {
        div {
            style: "{card_style()}",
            h3 { style: "margin: 0 0 8px 0;", "Recent Activity" }
            for item in items.iter() {
                {
                    let color = match item.kind {
                        ActivityKind::Success => "#1a7f3c",
                        ActivityKind::Warning => "#a66300",
                        ActivityKind::Info => "#1f5fbf",
                    };
                    let stamp = item.timestamp.format("%Y-%m-%d %H:%M UTC").to_string();
                    rsx!(
                        div {
                            key: "{item.id}",
                            title: "{stamp}",
                            style: "border-left: 3px solid {color}; padding: 4px 8px; margin: 6px 0;",
                            div { style: "font-weight: 600;", "{item.title}" }
                            div { style: "color: #555; font-size: 13px;", "{item.description}" }
                            div { style: "color: #999; font-size: 12px;", "{item.time}" }
                        }
                    )
                }
            }
        }
    }
}
