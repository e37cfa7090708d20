use std::sync::Arc;
use std::time::Instant;

use dioxus::prelude::*;
use tracing::{error, warn};

use crate::config::DashboardConfig;
use crate::domain::entities::campaign::{CampaignStatus, ReportFormat};
use crate::platform::desktop::blocking::{run_blocking, run_in_background};
use crate::ui::components::data_table::CampaignTable;
use crate::ui::components::overview::{ActivityFeed, KpiStrip, RevenuePanel, TrafficPanel};
use crate::ui::components::toast_stack::ToastStack;
use crate::ui::state::app_state::AppState;
use crate::ui::state::toast::{ToastNotice, ToastQueue};
use crate::usecase::ports::api::DashboardApi;
use crate::usecase::services::campaign_service::CampaignService;
use crate::usecase::services::export_service::ExportService;
use crate::usecase::services::query_service::{QueryService, MIN_SEARCH_CHARS};

/// Everything the launcher hands to the component tree.
#[derive(Clone)]
pub struct AppContext {
    pub config: DashboardConfig,
    pub api: Arc<dyn DashboardApi>,
}

fn notify(mut toasts: Signal<ToastQueue>, notice: ToastNotice) {
    let now = Instant::now();
    let mut queue = toasts.write();
    queue.expire(now);
    queue.push(notice, now);
}

fn header_button_style() -> &'static str {
    "border: 1px solid #bbb; background: #fff; padding: 4px 10px; border-radius: 6px; cursor: pointer;"
}

#[component]
pub fn App() -> Element {
    let context = use_context::<AppContext>();

    let AppState {
        mut range,
        mut snapshot,
        mut campaign_table,
        mut toasts,
        mut search_query,
        mut search_results,
        mut updating_campaigns,
        mut busy,
        mut status,
    } = AppState::new(&context.config);

    let query_service = Arc::new(QueryService::new(context.api.clone()));
    let campaign_service = Arc::new(CampaignService::new(context.api.clone()));
    let export_service = Arc::new(ExportService::new(
        context.api.clone(),
        context.config.export_dir.clone(),
    ));
    let query_service_for_load = query_service.clone();
    let query_service_for_search = query_service.clone();
    let export_service_for_table = export_service.clone();
    let export_service_for_report = export_service.clone();

    use_effect(move || {
        let current_range = range();
        let service = query_service_for_load.clone();
        *busy.write() = true;
        spawn(async move {
            let result =
                run_in_background("load_dashboard", move || service.load_dashboard(current_range))
                    .await;
            // A newer range may have been picked while this one was loading.
            if *range.peek() != current_range {
                return;
            }
            match result {
                Ok(loaded) => {
                    if let Err(err) = campaign_table.write().set_records(loaded.campaign_rows()) {
                        warn!(%err, "campaign table could not be refreshed");
                    }
                    snapshot.set(Some(loaded));
                    status.set(format!("Showing data for: {current_range}"));
                }
                Err(err) => {
                    error!(error = %format!("{err:#}"), range = %current_range, "dashboard load failed");
                    status.set(format!("Failed to load dashboard: {err:#}"));
                    notify(toasts, ToastNotice::error("Load Failed", format!("{err:#}")));
                }
            }
            *busy.write() = false;
        });
    });

    let loaded = snapshot();
    let kpis = loaded.as_ref().map(|s| s.kpis.clone()).unwrap_or_default();
    let revenue = loaded.as_ref().map(|s| s.revenue.clone()).unwrap_or_default();
    let traffic_sources = loaded
        .as_ref()
        .map(|s| s.traffic_sources.clone())
        .unwrap_or_default();
    let devices = loaded.as_ref().map(|s| s.devices.clone()).unwrap_or_default();
    let recent_activity = loaded
        .as_ref()
        .map(|s| s.recent_activity.clone())
        .unwrap_or_default();
    let current_query = search_query();
    let show_results = current_query.chars().count() >= MIN_SEARCH_CHARS;
    let results = search_results();
    let visible_toasts = toasts.read().toasts().to_vec();

    rsx! {
        div {
            style: "height: 100vh; display: flex; flex-direction: column; gap: 12px; padding: 16px; box-sizing: border-box; background: #f7f8fb; font-family: sans-serif;",

            div {
                style: "display: flex; gap: 12px; align-items: center;",
                h2 { style: "margin: 0; flex: 1;", "Campaign Dashboard" }
                div {
                    style: "position: relative;",
                    input {
                        style: "padding: 4px 8px; border: 1px solid #bbb; border-radius: 6px; min-width: 240px;",
                        placeholder: "Search dashboard...",
                        value: "{current_query}",
                        oninput: move |event| {
                            let query = event.value();
                            search_query.set(query.clone());
                            let service = query_service_for_search.clone();
                            spawn(async move {
                                let sent = query.clone();
                                let result =
                                    run_in_background("search_dashboard", move || service.search(&sent)).await;
                                // Drop answers to queries the user has already typed past.
                                if *search_query.peek() != query {
                                    return;
                                }
                                match result {
                                    Ok(found) => search_results.set(found),
                                    Err(err) => {
                                        search_results.set(Vec::new());
                                        notify(toasts, ToastNotice::error("Search Failed", format!("{err:#}")));
                                    }
                                }
                            });
                        },
                    }
                    if show_results {
                        div {
                            style: "position: absolute; top: 32px; right: 0; min-width: 300px; max-height: 320px; overflow-y: auto; background: #fff; border: 1px solid #bbb; border-radius: 8px; box-shadow: 0 10px 24px rgba(0,0,0,0.15); z-index: 1200;",
                            if results.is_empty() {
                                div { style: "padding: 8px 10px; color: #777;", "No results for \"{current_query}\"" }
                            }
                            for item in results.iter() {
                                div {
                                    key: "{item.kind}-{item.title}",
                                    style: "padding: 8px 10px; border-bottom: 1px solid #eee;",
                                    div { style: "font-weight: 600;", "{item.title}" }
                                    div { style: "color: #666; font-size: 12px;", "{item.kind} · {item.description}" }
                                }
                            }
                        }
                    }
                }
                button {
                    style: "{header_button_style()}",
                    disabled: busy(),
                    onclick: move |_| {
                        let next = range().next();
                        range.set(next);
                        notify(toasts, ToastNotice::info("Date Range Updated", format!("Showing data for: {next}")));
                    },
                    "{range()}"
                }
                button {
                    style: "{header_button_style()}",
                    disabled: busy(),
                    onclick: move |_| {
                        // Re-setting the range re-runs the load effect.
                        let current = range();
                        range.set(current);
                    },
                    "Refresh"
                }
                {[ReportFormat::Pdf, ReportFormat::Excel].into_iter().map(|format| {
                    let export_service_for_report = export_service_for_report.clone();
                    let label = match format {
                        ReportFormat::Pdf => "Export PDF",
                        ReportFormat::Excel => "Export Excel",
                    };
                    rsx!(
                        button {
                            key: "{label}",
                            style: "{header_button_style()}",
                            disabled: busy(),
                            onclick: move |_| {
                                *busy.write() = true;
                                let current_range = range();
                                let service = export_service_for_report.clone();
                                spawn(async move {
                                    let result = run_in_background("export_report", move || {
                                        service.export_report(format, current_range)
                                    })
                                    .await;
                                    match result {
                                        Ok(filename) => notify(
                                            toasts,
                                            ToastNotice::success("Export Complete", format!("Report exported as {filename}")),
                                        ),
                                        Err(err) => {
                                            error!(error = %format!("{err:#}"), "report export failed");
                                            notify(toasts, ToastNotice::error("Export Failed", format!("{err:#}")));
                                        }
                                    }
                                    *busy.write() = false;
                                });
                            },
                            "{label}"
                        }
                    )
                })}
            }

            KpiStrip { kpis: kpis }
            RevenuePanel { points: revenue }

            div {
                style: "flex: 1; min-height: 0; display: grid; grid-template-columns: minmax(0, 3fr) minmax(0, 1fr); gap: 12px;",
                CampaignTable {
                    table: campaign_table,
                    updating: updating_campaigns(),
                    busy: busy(),
                    on_notice: move |notice: ToastNotice| notify(toasts, notice),
                    on_export: move |_| {
                        let payload = match campaign_table.read().export() {
                            Ok(payload) => payload,
                            Err(err) => {
                                notify(toasts, ToastNotice::error("Export Failed", err.to_string()));
                                return;
                            }
                        };
                        #[cfg(feature = "desktop")]
                        let target_dir = match rfd::FileDialog::new()
                            .set_directory(export_service_for_table.export_dir())
                            .pick_folder()
                        {
                            Some(dir) => dir,
                            None => return,
                        };
                        #[cfg(not(feature = "desktop"))]
                        let target_dir = export_service_for_table.export_dir().to_path_buf();

                        match run_blocking("save_table", || {
                            export_service_for_table.save_table_to(&target_dir, &payload)
                        }) {
                            Ok(path) => {
                                status.set(format!("Exported to {}", path.display()));
                                notify(
                                    toasts,
                                    ToastNotice::success("Export Complete", format!("Data exported as {}", payload.filename)),
                                );
                            }
                            Err(err) => {
                                error!(error = %format!("{err:#}"), "table export failed");
                                notify(toasts, ToastNotice::error("Export Failed", format!("{err:#}")));
                            }
                        }
                    },
                    on_toggle_status: move |(campaign_id, current): (String, CampaignStatus)| {
                        if !updating_campaigns.write().begin(&campaign_id) {
                            return;
                        }
                        let service = campaign_service.clone();
                        spawn(async move {
                            let sent_id = campaign_id.clone();
                            let result = run_in_background("update_campaign_status", move || {
                                service.toggle_status(&sent_id, current)
                            })
                            .await;
                            match result {
                                Ok(next) => {
                                    if let Some(loaded) = snapshot.write().as_mut() {
                                        if let Some(campaign) = loaded
                                            .campaigns
                                            .iter_mut()
                                            .find(|campaign| campaign.id == campaign_id)
                                        {
                                            campaign.status = next;
                                        }
                                    }
                                    let rows = snapshot
                                        .read()
                                        .as_ref()
                                        .map(|loaded| loaded.campaign_rows())
                                        .unwrap_or_default();
                                    if let Err(err) = campaign_table.write().set_records(rows) {
                                        warn!(%err, "campaign table could not be refreshed");
                                    }
                                    notify(
                                        toasts,
                                        ToastNotice::success("Campaign Updated", format!("Campaign is now {next}")),
                                    );
                                }
                                Err(err) => {
                                    notify(toasts, ToastNotice::error("Update Failed", format!("{err:#}")));
                                }
                            }
                            updating_campaigns.write().finish(&campaign_id);
                        });
                    },
                }
                div {
                    style: "display: flex; flex-direction: column; gap: 12px; overflow-y: auto;",
                    TrafficPanel { sources: traffic_sources, devices: devices }
                    ActivityFeed { items: recent_activity }
                }
            }

            div { style: "color: #666; font-size: 12px;", "{status}" }

            ToastStack {
                toasts: visible_toasts,
                on_dismiss: move |id: u64| toasts.write().dismiss(id),
            }
        }
    }
}
