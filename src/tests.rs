use std::fs;
use std::sync::{mpsc, Arc, Mutex};
use std::time::Duration;

use crate::config::PageSizePolicy;
use crate::domain::engine::{apply_view, export_view, matched_records, total_pages};
use crate::domain::entities::campaign::{
    campaign_columns, ActivityItem, CampaignData, CampaignRow, CampaignStatus, DateRange,
    DeviceData, KpiData, ReportFormat, RevenuePoint, SearchItem, TrafficSource,
    CAMPAIGN_TABLE_TITLE,
};
use crate::domain::entities::table::{ColumnSpec, PageSize, SortDirection, TableError, ViewState};
use crate::domain::entities::value::FieldValue;
use crate::domain::record::{dynamic_record, DynamicRecord, Record};
use crate::infra::mock::api::MockDashboardApi;
use crate::platform::desktop::blocking::run_in_background;
use crate::ui::state::campaign_updates::CampaignUpdates;
use crate::ui::state::table_state::TableSession;
use crate::ui::state::toast::ToastKind;
use crate::usecase::ports::api::{ApiError, DashboardApi};
use crate::usecase::services::campaign_service::CampaignService;
use crate::usecase::services::export_service::ExportService;
use crate::usecase::services::query_service::QueryService;

fn scenario_columns() -> Vec<ColumnSpec> {
    vec![
        ColumnSpec::new("id", "ID").sortable(),
        ColumnSpec::new("group", "Group").sortable().filterable(),
        ColumnSpec::new("score", "Score").sortable(),
    ]
}

/// `count` records; the first `keep` are in group "keep", the rest in "drop".
fn scenario_rows(count: usize, keep: usize) -> Vec<DynamicRecord> {
    (1..=count)
        .map(|idx| {
            let group = if idx <= keep { "keep" } else { "drop" };
            dynamic_record([
                ("id", FieldValue::from(idx.to_string())),
                ("group", FieldValue::from(group)),
                ("score", FieldValue::Number((idx % 4) as f64)),
            ])
        })
        .collect()
}

fn ids<R: Record>(records: &[&R]) -> Vec<String> {
    records.iter().map(|record| record.field("id").to_string()).collect()
}

fn session(rows: Vec<DynamicRecord>, page_size: usize) -> TableSession<DynamicRecord> {
    let mut session = TableSession::new(
        "Scenario Rows",
        scenario_columns(),
        PageSizePolicy::default(),
        PageSize::new(page_size).expect("page size should be valid"),
    );
    session.set_records(rows).expect("records should load");
    session
}

fn campaign_rows() -> Vec<CampaignRow> {
    crate::infra::mock::data::campaigns()
        .iter()
        .map(CampaignRow::from)
        .collect()
}

#[test]
fn same_inputs_give_the_same_view() {
    let rows = scenario_rows(25, 10);
    let columns = scenario_columns();
    let mut view = ViewState::default();
    view.set_search_term("ee");
    view.toggle_sort(&columns, "score").expect("score should sort");

    let first = apply_view(&rows, &columns, &view).expect("view should apply");
    let second = apply_view(&rows, &columns, &view).expect("view should apply");

    assert_eq!(ids(&first.page_records), ids(&second.page_records));
    assert_eq!(first.total_matched, second.total_matched);
}

#[test]
fn adding_a_filter_never_grows_the_match() {
    let rows = scenario_rows(25, 10);
    let columns = scenario_columns();
    let mut view = ViewState::default();
    view.set_search_term("1");
    let before = matched_records(&rows, &columns, &view).expect("view should apply");

    view.set_column_filter("group", "keep");
    let after = matched_records(&rows, &columns, &view).expect("view should apply");

    assert!(after.len() <= before.len());
    for record in &after {
        assert!(before.iter().any(|other| std::ptr::eq(*other, *record)));
    }
}

#[test]
fn pages_cover_the_matched_sequence_exactly_once() {
    let rows = scenario_rows(23, 23);
    let columns = scenario_columns();
    let mut view = ViewState::with_page_size(PageSize::new(5).expect("valid page size"));
    view.toggle_sort(&columns, "score").expect("score should sort");
    let matched = ids(&matched_records(&rows, &columns, &view).expect("view should apply"));
    let pages = total_pages(matched.len(), 5);
    assert_eq!(pages, 5);

    let mut collected = Vec::new();
    for page in 1..=pages {
        view.set_page(page);
        let result = apply_view(&rows, &columns, &view).expect("view should apply");
        assert!(result.page_records.len() <= 5);
        collected.extend(ids(&result.page_records));
    }

    assert_eq!(collected, matched);
}

#[test]
fn sort_orders_by_key_and_keeps_ties_in_input_order() {
    let rows = scenario_rows(8, 8);
    let columns = scenario_columns();
    let mut view = ViewState::default();
    view.toggle_sort(&columns, "score").expect("score should sort");

    let result = matched_records(&rows, &columns, &view).expect("view should apply");

    // Scores are idx % 4, so ties keep ascending id order.
    assert_eq!(ids(&result), vec!["4", "8", "1", "5", "2", "6", "3", "7"]);

    view.toggle_sort(&columns, "score").expect("score should sort");
    let descending = matched_records(&rows, &columns, &view).expect("view should apply");
    assert_eq!(ids(&descending), vec!["3", "7", "2", "6", "1", "5", "4", "8"]);
}

#[test]
fn sort_toggle_walks_ascending_descending_none() {
    let mut session = session(scenario_rows(3, 3), 10);

    let notice = session.toggle_sort("score").expect("score should sort");
    assert_eq!(notice.kind, ToastKind::Info);
    assert_eq!(notice.message, "Sorted by score ascending");
    assert_eq!(
        session.view().sort().map(|sort| sort.direction),
        Some(SortDirection::Asc)
    );

    let notice = session.toggle_sort("score").expect("score should sort");
    assert_eq!(notice.message, "Sorted by score descending");

    let notice = session.toggle_sort("score").expect("score should sort");
    assert_eq!(notice.message, "Sorting on score removed");
    assert!(session.view().sort().is_none());

    session.toggle_sort("score").expect("score should sort");
    session.toggle_sort("id").expect("id should sort");
    assert_eq!(
        session.view().sort().map(|sort| (sort.key.as_str(), sort.direction)),
        Some(("id", SortDirection::Asc))
    );
}

#[test]
fn filtering_from_a_late_page_returns_to_page_one() {
    let mut session = session(scenario_rows(25, 5), 10);
    session.go_to_page(3);
    assert_eq!(session.current().expect("view should apply").page, 3);

    session.filter("group", "keep").expect("group is a column");
    let result = session.current().expect("view should apply");

    assert_eq!(result.total_pages, 1);
    assert_eq!(result.page, 1);
    assert_eq!(ids(&result.page_records), vec!["1", "2", "3", "4", "5"]);
}

#[test]
fn shrinking_records_clamps_the_page() {
    let mut session = session(scenario_rows(25, 25), 10);
    session.go_to_page(3);

    session
        .set_records(scenario_rows(5, 5))
        .expect("records should load");
    let result = session.current().expect("view should apply");

    assert_eq!(result.page, 1);
    assert_eq!(result.total_pages, 1);
    assert_eq!(result.page_records.len(), 5);
    assert_eq!(result.showing_range(), (1, 5, 5));
}

#[test]
fn page_beyond_the_end_is_clamped_on_render() {
    let mut session = session(scenario_rows(12, 12), 5);
    session.go_to_page(9);

    let result = session.current().expect("view should apply");

    assert_eq!(result.page, 3);
    assert_eq!(ids(&result.page_records), vec!["11", "12"]);
    assert!(result.has_previous());
    assert!(!result.has_next());
}

#[test]
fn navigation_stays_inside_the_page_range() {
    let mut session = session(scenario_rows(12, 12), 5);

    session.previous_page();
    assert_eq!(session.view().page(), 1);
    session.last_page().expect("pages should compute");
    assert_eq!(session.view().page(), 3);
    session.next_page().expect("pages should compute");
    assert_eq!(session.view().page(), 3);
    session.first_page();
    assert_eq!(session.view().page(), 1);
}

#[test]
fn next_page_after_jumping_far_past_the_end_lands_on_the_last_page() {
    let mut session = session(scenario_rows(12, 12), 5);

    session.go_to_page(usize::MAX);
    session.next_page().expect("pages should compute");

    assert_eq!(session.view().page(), 3);
}

#[test]
fn session_rejects_unknown_columns_and_unoffered_page_sizes() {
    let mut session = session(scenario_rows(3, 3), 10);

    assert_eq!(
        session.filter("nope", "x"),
        Err(TableError::UnknownColumn("nope".to_string()))
    );
    assert_eq!(
        session.toggle_sort("nope").map(|_| ()),
        Err(TableError::UnknownColumn("nope".to_string()))
    );
    assert_eq!(session.set_page_size(0), Err(TableError::InvalidPageSize));
    assert_eq!(session.set_page_size(7), Err(TableError::PageSizeNotOffered(7)));
    assert_eq!(session.view().page_size().get(), 10);

    session.set_page_size(20).expect("20 is offered");
    assert_eq!(session.view().page_size().get(), 20);
}

#[test]
fn empty_search_shows_everything() {
    let mut session = session(scenario_rows(4, 2), 10);
    session.search("keep");
    session.search("");

    let result = session.current().expect("view should apply");

    assert_eq!(result.total_matched, 4);
}

#[test]
fn campaign_export_matches_the_filtered_view() {
    let rows = campaign_rows();
    let columns = vec![
        ColumnSpec::new("name", "Campaign Name").filterable(),
        ColumnSpec::new("spend", "Spend"),
    ];
    let mut view = ViewState::default();
    view.set_column_filter("name", "summer");

    let payload =
        export_view(&rows, &columns, &view, CAMPAIGN_TABLE_TITLE).expect("export should work");

    assert_eq!(payload.filename, "campaign-performance-data-data.csv");
    assert_eq!(payload.content, "Campaign Name,Spend\n\"Summer Sale\",\"8500\"");
}

#[test]
fn session_export_includes_every_page() {
    let mut session = TableSession::new(
        CAMPAIGN_TABLE_TITLE,
        campaign_columns(),
        PageSizePolicy::default(),
        PageSize::new(5).expect("valid page size"),
    );
    session.set_records(campaign_rows()).expect("records should load");
    session.set_page_size(5).expect("5 is offered");
    session.toggle_sort("revenue").expect("revenue should sort");
    session.toggle_sort("revenue").expect("revenue should sort");

    let payload = session.export().expect("export should work");
    let lines = payload.content.lines().collect::<Vec<_>>();

    assert_eq!(lines.len(), 5);
    assert!(lines[0].starts_with("Campaign Name,Status,Clicks"));
    assert!(lines[1].starts_with("\"Product Launch\""));
    assert!(lines[4].starts_with("\"Brand Awareness\""));
}

#[test]
fn dashboard_loads_every_section() {
    let api: Arc<dyn DashboardApi> = Arc::new(MockDashboardApi::instant());
    let service = QueryService::new(api);

    let snapshot = service
        .load_dashboard(DateRange::Last7Days)
        .expect("dashboard should load");

    assert_eq!(snapshot.range, DateRange::Last7Days);
    assert_eq!(snapshot.kpis.len(), 4);
    assert_eq!(snapshot.campaign_rows().len(), 4);
    assert!(!snapshot.traffic_sources.is_empty());
    assert!(!snapshot.recent_activity.is_empty());
    assert_eq!(snapshot.revenue.len(), 1);
    assert!(snapshot
        .recent_activity
        .windows(2)
        .all(|pair| pair[0].timestamp >= pair[1].timestamp));
}

#[test]
fn short_queries_skip_the_search() {
    let api: Arc<dyn DashboardApi> = Arc::new(MockDashboardApi::instant());
    let service = QueryService::new(api);

    assert!(service.search("s").expect("search should run").is_empty());
    let hits = service.search("summer").expect("search should run");
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].title, "Summer Sale Campaign");
}

#[test]
fn toggling_a_campaign_is_seen_by_the_next_load() {
    let api: Arc<dyn DashboardApi> = Arc::new(MockDashboardApi::instant());
    let campaigns = CampaignService::new(api.clone());
    let queries = QueryService::new(api);

    let next = campaigns
        .toggle_status("2", CampaignStatus::Paused)
        .expect("campaign 2 exists");
    assert_eq!(next, CampaignStatus::Active);

    let rows = queries.campaign_rows().expect("campaigns should load");
    let brand = rows
        .iter()
        .find(|row| row.id == "2")
        .expect("campaign 2 should be listed");
    assert_eq!(brand.status, CampaignStatus::Active);

    assert_eq!(
        campaigns.toggle_status("99", CampaignStatus::Active),
        Err(ApiError::NotFound("campaign #99".to_string()))
    );
}

#[test]
fn export_service_writes_table_and_names_reports() {
    let temp_dir = tempfile::tempdir().expect("should create temp dir");
    let api: Arc<dyn DashboardApi> = Arc::new(MockDashboardApi::instant());
    let service = ExportService::new(api, temp_dir.path().to_path_buf());
    let mut session = TableSession::new(
        CAMPAIGN_TABLE_TITLE,
        campaign_columns(),
        PageSizePolicy::default(),
        PageSize::default(),
    );
    session.set_records(campaign_rows()).expect("records should load");
    session.search("holiday");

    let payload = session.export().expect("export should work");
    let path = service.save_table(&payload).expect("table should save");

    assert_eq!(path, temp_dir.path().join("campaign-performance-data-data.csv"));
    let written = fs::read_to_string(&path).expect("should read export");
    assert_eq!(written, payload.content);
    assert_eq!(written.lines().count(), 2);

    let report = service
        .export_report(ReportFormat::Excel, DateRange::ThisYear)
        .expect("report should export");
    assert!(report.starts_with("report-this-year-"), "{report}");
    assert!(report.ends_with(".excel"), "{report}");
}

/// Mock backend whose status updates wait until the test releases them.
struct GatedApi {
    inner: MockDashboardApi,
    release: Mutex<mpsc::Receiver<()>>,
}

impl DashboardApi for GatedApi {
    fn fetch_kpis(&self, range: DateRange) -> Result<Vec<KpiData>, ApiError> {
        self.inner.fetch_kpis(range)
    }

    fn fetch_revenue(&self, range: DateRange) -> Result<Vec<RevenuePoint>, ApiError> {
        self.inner.fetch_revenue(range)
    }

    fn fetch_campaigns(&self) -> Result<Vec<CampaignData>, ApiError> {
        self.inner.fetch_campaigns()
    }

    fn fetch_traffic_sources(&self) -> Result<Vec<TrafficSource>, ApiError> {
        self.inner.fetch_traffic_sources()
    }

    fn fetch_devices(&self) -> Result<Vec<DeviceData>, ApiError> {
        self.inner.fetch_devices()
    }

    fn fetch_recent_activity(&self) -> Result<Vec<ActivityItem>, ApiError> {
        self.inner.fetch_recent_activity()
    }

    fn search_dashboard(&self, query: &str) -> Result<Vec<SearchItem>, ApiError> {
        self.inner.search_dashboard(query)
    }

    fn export_report(&self, format: ReportFormat, range: DateRange) -> Result<String, ApiError> {
        self.inner.export_report(format, range)
    }

    fn update_campaign_status(&self, id: &str, status: CampaignStatus) -> Result<(), ApiError> {
        self.release
            .lock()
            .expect("gate lock")
            .recv()
            .map_err(|_| ApiError::Unavailable("gate closed".to_string()))?;
        self.inner.update_campaign_status(id, status)
    }
}

#[tokio::test]
async fn campaign_stays_updating_until_the_backend_answers() {
    let (release, gate) = mpsc::channel();
    let api: Arc<dyn DashboardApi> = Arc::new(GatedApi {
        inner: MockDashboardApi::instant(),
        release: Mutex::new(gate),
    });
    let service = Arc::new(CampaignService::new(api));
    let mut updates = CampaignUpdates::default();

    assert!(updates.begin("2"));
    let worker = Arc::clone(&service);
    let task = tokio::spawn(run_in_background("update_campaign_status", move || {
        worker.toggle_status("2", CampaignStatus::Paused)
    }));

    tokio::time::sleep(Duration::from_millis(50)).await;
    assert!(!task.is_finished());
    assert!(updates.is_pending("2"));
    assert!(!updates.is_empty());
    assert!(!updates.begin("2"));

    release.send(()).expect("gate should be open");
    let next = task
        .await
        .expect("task should join")
        .expect("toggle should succeed");
    updates.finish("2");

    assert_eq!(next, CampaignStatus::Active);
    assert!(updates.is_empty());
}
