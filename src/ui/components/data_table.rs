use dioxus::prelude::*;

use crate::domain::entities::campaign::{CampaignRow, CampaignStatus};
use crate::domain::record::Record;
use crate::ui::format::{column_alignment, format_cell, sort_indicator};
use crate::ui::state::campaign_updates::CampaignUpdates;
use crate::ui::state::table_state::TableSession;
use crate::ui::state::toast::ToastNotice;

fn table_container_style() -> &'static str {
    "flex: 1; min-height: 0; overflow: auto; border: 1px solid #ddd; border-radius: 8px;"
}

fn table_header_cell_style(align: &str) -> String {
    format!(
        "position: sticky; top: 0; background: #f4f6fa; border: 1px solid #bbb; padding: 6px 8px; text-align: {align}; white-space: nowrap;"
    )
}

fn pager_button_style(enabled: bool) -> &'static str {
    if enabled {
        "border: 1px solid #bbb; background: #fff; padding: 4px 10px; border-radius: 6px; cursor: pointer;"
    } else {
        "border: 1px solid #ddd; background: #f6f6f6; color: #aaa; padding: 4px 10px; border-radius: 6px;"
    }
}

fn status_badge_style(status: CampaignStatus) -> &'static str {
    match status {
        CampaignStatus::Active => "background: #e6f6ec; color: #1a7f3c; padding: 2px 8px; border-radius: 10px;",
        CampaignStatus::Paused => "background: #fff4e0; color: #a66300; padding: 2px 8px; border-radius: 10px;",
        CampaignStatus::Completed => "background: #eef0f4; color: #555; padding: 2px 8px; border-radius: 10px;",
    }
}

#[component]
pub fn CampaignTable(
    mut table: Signal<TableSession<CampaignRow>>,
    updating: CampaignUpdates,
    busy: bool,
    on_notice: EventHandler<ToastNotice>,
    on_export: EventHandler<()>,
    on_toggle_status: EventHandler<(String, CampaignStatus)>,
) -> Element {
    // Render from a copy so clamping the page does not write the signal mid-render.
    let mut session = table.read().clone();
    let title = session.title().to_string();
    let columns = session.columns().to_vec();
    let page_size_options = session.page_size_options().to_vec();
    let view = session.view().clone();
    let search_term = view.search_term().to_string();
    let page_size = view.page_size().get();
    let active_sort = view.sort().cloned();

    let (rows, page, total_pages, showing, has_previous, has_next) = match session.current() {
        Ok(result) => {
            let (first, last, total) = result.showing_range();
            (
                result.page_records.iter().map(|row| (*row).clone()).collect::<Vec<_>>(),
                result.page,
                result.total_pages,
                format!("Showing {first} to {last} of {total} entries"),
                result.has_previous(),
                result.has_next(),
            )
        }
        Err(err) => (Vec::new(), 1, 1, err.to_string(), false, false),
    };
    let column_count = columns.len() + 1;
    let actions_header_style = table_header_cell_style("center");

    rsx! {
        div {
            style: "display: flex; flex-direction: column; gap: 10px; background: #fff; border: 1px solid #e3e3e3; border-radius: 10px; padding: 14px;",
            div {
                style: "display: flex; justify-content: space-between; align-items: center; gap: 12px;",
                h3 { style: "margin: 0;", "{title}" }
                div {
                    style: "display: flex; gap: 8px; align-items: center;",
                    input {
                        style: "padding: 4px 8px; border: 1px solid #bbb; border-radius: 6px; min-width: 220px;",
                        placeholder: "Search all columns...",
                        value: "{search_term}",
                        oninput: move |event| table.write().search(event.value()),
                    }
                    button {
                        style: "{pager_button_style(!busy)}",
                        disabled: busy,
                        onclick: move |_| on_export.call(()),
                        "Export CSV"
                    }
                }
            }

            div {
                style: "display: flex; flex-wrap: wrap; gap: 8px;",
                for column in columns.iter().filter(|column| column.filterable) {
                    {
                        let key = column.key.clone();
                        let filter_key = column.key.clone();
                        let clear_key = column.key.clone();
                        let label = column.label.clone();
                        let current = view.column_filter(&column.key).unwrap_or_default().to_string();
                        let has_filter = !current.is_empty();
                        rsx!(
                            div {
                                key: "{key}",
                                style: "display: inline-flex; gap: 4px; align-items: center;",
                                input {
                                    style: "padding: 4px 8px; border: 1px solid #bbb; border-radius: 6px;",
                                    placeholder: "Filter {label}...",
                                    value: "{current}",
                                    oninput: move |event| {
                                        if let Err(err) = table.write().filter(&filter_key, event.value()) {
                                            on_notice.call(ToastNotice::error("Filter Failed", err.to_string()));
                                        }
                                    },
                                }
                                if has_filter {
                                    button {
                                        style: "{pager_button_style(true)}",
                                        onclick: move |_| table.write().clear_filter(&clear_key),
                                        "×"
                                    }
                                }
                            }
                        )
                    }
                }
            }

            div {
                style: "{table_container_style()}",
                table { style: "border-collapse: collapse; width: 100%; background: #fff;",
                    thead {
                        tr {
                            for column in columns.iter() {
                                {
                                    let key = column.key.clone();
                                    let sort_key = column.key.clone();
                                    let label = column.label.clone();
                                    let sortable = column.sortable;
                                    let direction = active_sort
                                        .as_ref()
                                        .filter(|sort| sort.key == column.key)
                                        .map(|sort| sort.direction);
                                    let header_style = table_header_cell_style(column_alignment(&column.key));
                                    rsx!(
                                        th {
                                            key: "{key}",
                                            style: "{header_style}",
                                            if sortable {
                                                button {
                                                    style: "border: none; background: transparent; cursor: pointer; font-weight: 600;",
                                                    onclick: move |_| {
                                                        let notice = table.write().toggle_sort(&sort_key);
                                                        match notice {
                                                            Ok(notice) => on_notice.call(notice),
                                                            Err(err) => on_notice.call(ToastNotice::error("Sort Failed", err.to_string())),
                                                        }
                                                    },
                                                    "{label} {sort_indicator(direction)}"
                                                }
                                            } else {
                                                "{label}"
                                            }
                                        }
                                    )
                                }
                            }
                            th { style: "{actions_header_style}", "Actions" }
                        }
                    }
                    tbody {
                        if rows.is_empty() {
                            tr {
                                td {
                                    colspan: "{column_count}",
                                    style: "padding: 16px; text-align: center; color: #777;",
                                    "No matching records"
                                }
                            }
                        }
                        {rows.iter().map(|row| {
                            let id = row.id.clone();
                            let toggle_id = row.id.clone();
                            let status = row.status;
                            let is_updating = updating.is_pending(&row.id);
                            let toggle_label = match status {
                                CampaignStatus::Active => "Pause",
                                CampaignStatus::Paused | CampaignStatus::Completed => "Resume",
                            };
                            let cells = columns
                                .iter()
                                .map(|column| {
                                    (
                                        column.key.clone(),
                                        format_cell(&column.key, &row.field(&column.key)),
                                        column_alignment(&column.key),
                                    )
                                })
                                .collect::<Vec<_>>();
                            rsx!(
                                tr {
                                    key: "{id}",
                                    for (key, text, align) in cells {
                                        td {
                                            key: "{key}",
                                            style: "border: 1px solid #bbb; padding: 4px 8px; text-align: {align};",
                                            if key == "status" {
                                                span { style: "{status_badge_style(status)}", "{text}" }
                                            } else {
                                                "{text}"
                                            }
                                        }
                                    }
                                    td { style: "border: 1px solid #bbb; padding: 4px; text-align: center;",
                                        button {
                                            style: "{pager_button_style(!is_updating)}",
                                            disabled: is_updating,
                                            onclick: move |_| on_toggle_status.call((toggle_id.clone(), status)),
                                            if is_updating { "Updating..." } else { "{toggle_label}" }
                                        }
                                    }
                                }
                            )
                        })}
                    }
                }
            }

            div {
                style: "display: flex; justify-content: space-between; align-items: center; gap: 12px;",
                span { style: "color: #555;", "{showing}" }
                div {
                    style: "display: flex; gap: 6px; align-items: center;",
                    span { "Rows per page" }
                    select {
                        value: "{page_size}",
                        onchange: move |event| {
                            let Ok(size) = event.value().parse::<usize>() else {
                                return;
                            };
                            if let Err(err) = table.write().set_page_size(size) {
                                on_notice.call(ToastNotice::error("Invalid Page Size", err.to_string()));
                            }
                        },
                        for size in page_size_options.iter() {
                            option { key: "{size}", value: "{size}", selected: *size == page_size, "{size}" }
                        }
                    }
                    button {
                        style: "{pager_button_style(has_previous)}",
                        disabled: !has_previous,
                        onclick: move |_| table.write().first_page(),
                        "«"
                    }
                    button {
                        style: "{pager_button_style(has_previous)}",
                        disabled: !has_previous,
                        onclick: move |_| table.write().previous_page(),
                        "‹"
                    }
                    span { "Page {page} of {total_pages}" }
                    button {
                        style: "{pager_button_style(has_next)}",
                        disabled: !has_next,
                        onclick: move |_| {
                            if let Err(err) = table.write().next_page() {
                                on_notice.call(ToastNotice::error("Paging Failed", err.to_string()));
                            }
                        },
                        "›"
                    }
                    button {
                        style: "{pager_button_style(has_next)}",
                        disabled: !has_next,
                        onclick: move |_| {
                            if let Err(err) = table.write().last_page() {
                                on_notice.call(ToastNotice::error("Paging Failed", err.to_string()));
                            }
                        },
                        "»"
                    }
                }
            }
        }
    }
}
