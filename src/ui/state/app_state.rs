use dioxus::prelude::{use_signal, Signal};

use crate::config::DashboardConfig;
use crate::domain::entities::campaign::{
    campaign_columns, CampaignRow, DateRange, SearchItem, CAMPAIGN_TABLE_TITLE,
};
use crate::ui::state::campaign_updates::CampaignUpdates;
use crate::ui::state::table_state::TableSession;
use crate::ui::state::toast::ToastQueue;
use crate::usecase::services::query_service::DashboardSnapshot;

pub struct AppState {
    pub range: Signal<DateRange>,
    pub snapshot: Signal<Option<DashboardSnapshot>>,
    pub campaign_table: Signal<TableSession<CampaignRow>>,
    pub toasts: Signal<ToastQueue>,
    pub search_query: Signal<String>,
    pub search_results: Signal<Vec<SearchItem>>,
    pub updating_campaigns: Signal<CampaignUpdates>,
    pub busy: Signal<bool>,
    pub status: Signal<String>,
}

impl AppState {
    pub fn new(config: &DashboardConfig) -> Self {
        let policy = config.page_size_policy();
        let page_size = config.initial_page_size().unwrap_or_default();
        Self {
            range: use_signal(DateRange::default),
            snapshot: use_signal(|| None::<DashboardSnapshot>),
            campaign_table: use_signal(move || {
                TableSession::new(
                    CAMPAIGN_TABLE_TITLE,
                    campaign_columns(),
                    policy,
                    page_size,
                )
            }),
            toasts: use_signal(ToastQueue::default),
            search_query: use_signal(String::new),
            search_results: use_signal(Vec::<SearchItem>::new),
            updating_campaigns: use_signal(CampaignUpdates::default),
            busy: use_signal(|| false),
            status: use_signal(|| "Ready".to_string()),
        }
    }
}
