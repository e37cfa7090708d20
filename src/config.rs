use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{anyhow, bail, Context, Result};
use directories::{ProjectDirs, UserDirs};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::domain::entities::table::{PageSize, TableError, DEFAULT_PAGE_SIZE, PAGE_SIZE_OPTIONS};

pub const CONFIG_FILE_NAME: &str = "dashboard.toml";

fn project_dirs() -> Result<ProjectDirs> {
    ProjectDirs::from("com", "hellhbbd", "campaign-dashboard")
        .ok_or_else(|| anyhow!("unable to resolve project directories"))
}

/// User-tunable settings, read from `dashboard.toml`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    pub default_page_size: usize,
    pub page_size_options: Vec<usize>,
    pub allow_custom_page_size: bool,
    /// Multiplier applied to the simulated backend latency. `0` disables it.
    pub latency_scale: f64,
    pub export_dir: PathBuf,
    pub log_filter: String,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            default_page_size: DEFAULT_PAGE_SIZE,
            page_size_options: PAGE_SIZE_OPTIONS.to_vec(),
            allow_custom_page_size: false,
            latency_scale: 1.0,
            export_dir: default_export_dir(),
            log_filter: "info".to_string(),
        }
    }
}

impl DashboardConfig {
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path)
            .with_context(|| format!("failed to read config: {}", path.display()))?;
        let config: Self = toml::from_str(&contents)
            .with_context(|| format!("failed to parse config: {}", path.display()))?;
        config.validate()?;
        debug!(path = %path.display(), "config loaded");
        Ok(config)
    }

    /// Reads the config from the platform config directory, falling back to
    /// defaults when no file exists there.
    pub fn load_default() -> Result<Self> {
        let path = default_config_path()?;
        if !path.exists() {
            info!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }
        Self::from_file(path)
    }

    pub fn validate(&self) -> Result<()> {
        if self.page_size_options.contains(&0) {
            bail!("page_size_options must not contain zero");
        }
        if self.default_page_size == 0 {
            bail!("default_page_size must be greater than zero");
        }
        if !self.allow_custom_page_size && !self.page_size_options.contains(&self.default_page_size)
        {
            bail!(
                "default_page_size {} is not one of page_size_options {:?}",
                self.default_page_size,
                self.page_size_options
            );
        }
        if !self.latency_scale.is_finite() || self.latency_scale < 0.0 {
            bail!("latency_scale must be a non-negative number");
        }
        Ok(())
    }

    pub fn page_size_policy(&self) -> PageSizePolicy {
        PageSizePolicy {
            options: self.page_size_options.clone(),
            allow_custom: self.allow_custom_page_size,
        }
    }

    pub fn initial_page_size(&self) -> Result<PageSize, TableError> {
        self.page_size_policy().check(self.default_page_size)
    }
}

/// Which page sizes the table lets the user pick.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageSizePolicy {
    pub options: Vec<usize>,
    pub allow_custom: bool,
}

impl Default for PageSizePolicy {
    fn default() -> Self {
        Self {
            options: PAGE_SIZE_OPTIONS.to_vec(),
            allow_custom: false,
        }
    }
}

impl PageSizePolicy {
    pub fn check(&self, size: usize) -> Result<PageSize, TableError> {
        let page_size = PageSize::new(size)?;
        if !self.allow_custom && !self.options.contains(&size) {
            return Err(TableError::PageSizeNotOffered(size));
        }
        Ok(page_size)
    }
}

pub fn default_config_path() -> Result<PathBuf> {
    Ok(project_dirs()?.config_dir().join(CONFIG_FILE_NAME))
}

pub fn default_export_dir() -> PathBuf {
    UserDirs::new()
        .and_then(|dirs| dirs.download_dir().map(Path::to_path_buf))
        .unwrap_or_else(|| PathBuf::from("."))
}

pub fn default_webview_data_dir() -> Result<PathBuf> {
    let webview_data_dir = project_dirs()?.data_local_dir().join("webview");
    fs::create_dir_all(&webview_data_dir).with_context(|| {
        format!(
            "failed to create webview dir: {}",
            webview_data_dir.display()
        )
    })?;
    Ok(webview_data_dir)
}
