use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{Context, Result};
use tracing::info;

use crate::domain::engine::ExportPayload;
use crate::domain::entities::campaign::{DateRange, ReportFormat};
use crate::infra::export::file::write_payload;
use crate::usecase::ports::api::DashboardApi;

pub struct ExportService {
    api: Arc<dyn DashboardApi>,
    export_dir: PathBuf,
}

impl ExportService {
    pub fn new(api: Arc<dyn DashboardApi>, export_dir: PathBuf) -> Self {
        Self { api, export_dir }
    }

    pub fn export_dir(&self) -> &Path {
        &self.export_dir
    }

    pub fn save_table(&self, payload: &ExportPayload) -> Result<PathBuf> {
        self.save_table_to(&self.export_dir, payload)
    }

    pub fn save_table_to(&self, dir: &Path, payload: &ExportPayload) -> Result<PathBuf> {
        let path = write_payload(dir, payload)?;
        info!(path = %path.display(), bytes = payload.content.len(), "table exported");
        Ok(path)
    }

    pub fn export_report(&self, format: ReportFormat, range: DateRange) -> Result<String> {
        let filename = self
            .api
            .export_report(format, range)
            .with_context(|| format!("failed to export {range} report"))?;
        info!(%filename, "report exported");
        Ok(filename)
    }
}
