// src/config/options.rs
use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::time::Duration;

use super::consts::*;
use crate::specs::ItemSpec;

/// Everything one run needs. `Default` is the hardcoded job.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AppOptions {
    pub fetch: FetchOptions,
    pub items: ItemSpec,
    pub export: ExportOptions,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FetchOptions {
    pub url: String,
    pub timeout: Duration,
    pub user_agent: String,
}

impl Default for FetchOptions {
    fn default() -> Self {
        Self {
            url: s!(TARGET_URL),
            timeout: Duration::from_secs(REQUEST_TIMEOUT_SECS),
            user_agent: s!(USER_AGENT),
        }
    }
}

impl FetchOptions {
    pub fn for_url(url: impl Into<String>) -> Self {
        Self { url: url.into(), ..Self::default() }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExportOptions {
    dir: PathBuf,
    file_stem: OsString, // without extension
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            dir: PathBuf::from(DEFAULT_OUT_DIR),
            file_stem: OsString::from(DEFAULT_FILE),
        }
    }
}

impl ExportOptions {
    /// Export into `dir` under the default file name.
    pub fn in_dir(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into(), ..Self::default() }
    }

    pub fn dir(&self) -> &Path { &self.dir }

    /// `<dir>/<stem>.csv`
    pub fn out_path(&self) -> PathBuf {
        let stem = self.file_stem.to_string_lossy();
        self.dir.join(join!(&*stem, ".", CSV_EXT))
    }

    #[inline] pub fn delim(&self) -> char { CSV_SEP }
}
