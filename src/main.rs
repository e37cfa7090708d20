use std::sync::Arc;

use campaign_dashboard::config::{default_webview_data_dir, DashboardConfig};
use campaign_dashboard::infra::mock::api::MockDashboardApi;
use campaign_dashboard::logging::init_tracing;
use campaign_dashboard::ui::app::{App, AppContext};

fn main() {
    let config = match DashboardConfig::load_default() {
        Ok(config) => config,
        Err(err) => {
            eprintln!("config ignored: {err:#}");
            DashboardConfig::default()
        }
    };
    init_tracing(&config.log_filter);

    let webview_data_dir =
        default_webview_data_dir().expect("should resolve and create WebView2 data directory");
    let api = Arc::new(MockDashboardApi::new(config.latency_scale));

    dioxus::LaunchBuilder::desktop()
        .with_cfg(
            dioxus::desktop::Config::new()
                .with_window(dioxus::desktop::WindowBuilder::new().with_title("Campaign Dashboard"))
                .with_data_directory(webview_data_dir),
        )
        .with_context(AppContext { config, api })
        .launch(App);
}
