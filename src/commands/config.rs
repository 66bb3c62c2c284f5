use anyhow::{Context, Result};
use log::debug;
use std::path::PathBuf;

use crate::lldb::SupportTable;
use crate::platform::Platform;
use crate::runtime::Runtime;

/// Directory under the user's data directory used when no root is given.
pub const DEFAULT_ROOT_DIR_NAME: &str = "lldb-setup";

/// Resolved settings for one invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Root that `resource/debug/<platform>` is created under.
    pub extension_root: PathBuf,
    pub platform: Platform,
    /// Replaces the download URL of every platform when set.
    pub download_url: Option<String>,
}

impl Config {
    pub fn new<R: Runtime>(
        runtime: &R,
        extension_root: Option<PathBuf>,
        platform: Option<String>,
        download_url: Option<String>,
    ) -> Result<Self> {
        let extension_root = match extension_root {
            Some(path) => path,
            None => default_extension_root(runtime)?,
        };

        let platform = match platform {
            Some(os) => Platform::with_os(os),
            None => Platform::detect(),
        };

        debug!(
            "Using extension root {:?} for platform {}",
            extension_root, platform
        );

        Ok(Self {
            extension_root,
            platform,
            download_url,
        })
    }

    /// The built-in support table, with the download URL override applied.
    pub fn support_table(&self) -> SupportTable {
        let table = SupportTable::builtin();
        match &self.download_url {
            Some(url) => table.with_download_url(url),
            None => table,
        }
    }
}

#[tracing::instrument(skip(runtime))]
pub fn default_extension_root<R: Runtime>(runtime: &R) -> Result<PathBuf> {
    let data_dir = runtime
        .data_dir()
        .context("Could not find the user data directory; pass --root")?;
    Ok(data_dir.join(DEFAULT_ROOT_DIR_NAME))
}
