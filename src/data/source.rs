//! Where records come from.
//!
//! A source is fetched exactly once, off the frame loop. Any transport or
//! read failure surfaces as [`ShowcaseError::DataUnavailable`]; row-level
//! problems are absorbed by the lenient parser instead.

use std::path::PathBuf;

use super::record::{Record, parse_csv};
use crate::config::ShowcaseConfig;
use crate::error::{ShowcaseError, ShowcaseResult};

/// Supplier of the ordered record list
pub trait RecordSource: Send + Sync {
    fn fetch_records(&self) -> ShowcaseResult<Vec<Record>>;

    /// Short human-readable origin for logs
    fn describe(&self) -> String;
}

/// CSV text already in memory
#[derive(Debug, Clone)]
pub struct CsvText(pub String);

impl RecordSource for CsvText {
    fn fetch_records(&self) -> ShowcaseResult<Vec<Record>> {
        Ok(parse_csv(&self.0))
    }

    fn describe(&self) -> String {
        format!("inline csv ({} bytes)", self.0.len())
    }
}

/// CSV file on local disk
#[derive(Debug, Clone)]
pub struct FileSource {
    pub path: PathBuf,
}

impl RecordSource for FileSource {
    fn fetch_records(&self) -> ShowcaseResult<Vec<Record>> {
        let text = std::fs::read_to_string(&self.path).map_err(|e| {
            ShowcaseError::DataUnavailable(format!("{}: {}", self.path.display(), e))
        })?;
        Ok(parse_csv(&text))
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}

/// Published spreadsheet fetched over HTTP
///
/// Native builds use reqwest's blocking client from a compute-pool thread. In
/// the browser the async client goes through `fetch`, so there is no timeout
/// or user agent to set.
#[derive(Debug, Clone)]
pub struct SheetSource {
    pub url: String,
    pub timeout: std::time::Duration,
}

const SHEET_ACCEPT: &str = "text/csv,text/plain;q=0.9,*/*;q=0.8";

fn unavailable(what: &str, e: reqwest::Error) -> ShowcaseError {
    ShowcaseError::DataUnavailable(format!("{}: {}", what, e))
}

fn check_status(status: reqwest::StatusCode) -> ShowcaseResult<()> {
    if !status.is_success() {
        return Err(ShowcaseError::DataUnavailable(format!(
            "sheet returned HTTP {}",
            status.as_u16()
        )));
    }
    Ok(())
}

#[cfg(not(target_arch = "wasm32"))]
impl RecordSource for SheetSource {
    fn fetch_records(&self) -> ShowcaseResult<Vec<Record>> {
        let client = reqwest::blocking::Client::builder()
            .user_agent(concat!("panel_showcase/", env!("CARGO_PKG_VERSION")))
            .timeout(self.timeout)
            .redirect(reqwest::redirect::Policy::limited(10))
            .build()
            .map_err(|e| unavailable("client error", e))?;

        let response = client
            .get(&self.url)
            .header("Accept", SHEET_ACCEPT)
            .send()
            .map_err(|e| unavailable("request failed", e))?;
        check_status(response.status())?;

        let text = response
            .text()
            .map_err(|e| unavailable("failed to read body", e))?;
        log::debug!("fetched {} bytes from {}", text.len(), self.url);

        Ok(parse_csv(&text))
    }

    fn describe(&self) -> String {
        self.url.clone()
    }
}

#[cfg(target_arch = "wasm32")]
impl SheetSource {
    pub async fn fetch_records_async(&self) -> ShowcaseResult<Vec<Record>> {
        let response = reqwest::Client::new()
            .get(&self.url)
            .header("Accept", SHEET_ACCEPT)
            .send()
            .await
            .map_err(|e| unavailable("request failed", e))?;
        check_status(response.status())?;

        let text = response
            .text()
            .await
            .map_err(|e| unavailable("failed to read body", e))?;
        log::debug!("fetched {} bytes from {}", text.len(), self.url);

        Ok(parse_csv(&text))
    }
}

/// The source named by the configuration
#[derive(Debug, Clone)]
pub enum ConfiguredSource {
    File(FileSource),
    Sheet(SheetSource),
}

impl ConfiguredSource {
    /// Fetch on whichever client the target supports
    pub async fn fetch(self) -> ShowcaseResult<Vec<Record>> {
        match self {
            ConfiguredSource::File(file) => file.fetch_records(),
            #[cfg(not(target_arch = "wasm32"))]
            ConfiguredSource::Sheet(sheet) => sheet.fetch_records(),
            #[cfg(target_arch = "wasm32")]
            ConfiguredSource::Sheet(sheet) => sheet.fetch_records_async().await,
        }
    }

    pub fn describe(&self) -> String {
        match self {
            ConfiguredSource::File(file) => file.describe(),
            ConfiguredSource::Sheet(sheet) => sheet.url.clone(),
        }
    }
}

/// Pick the source named by the configuration: a local file wins over the URL,
/// except in the browser, which has no filesystem
pub fn from_config(config: &ShowcaseConfig) -> ConfiguredSource {
    let sheet = ConfiguredSource::Sheet(SheetSource {
        url: config.source_url.clone(),
        timeout: std::time::Duration::from_secs(config.fetch_timeout_secs),
    });

    match &config.source_file {
        Some(path) if cfg!(target_arch = "wasm32") => {
            log::warn!("ignoring source_file {} in the browser", path);
            sheet
        }
        Some(path) => ConfiguredSource::File(FileSource {
            path: PathBuf::from(path),
        }),
        None => sheet,
    }
}
