//! WAMR LLDB installation: presence check and the interactive install flow.
//!
//! The flow is strictly sequential: prompt, download, extract, fix
//! permissions, delete the archive. Nothing is rolled back on failure.

mod paths;
mod support;

use anyhow::{Context, Result};
use log::{debug, info};
use std::path::{Path, PathBuf};

use crate::archive::Extractor;
use crate::download::Downloader;
use crate::platform::Platform;
use crate::runtime::{Runtime, SetupResponse};

pub use paths::{
    BUNDLE_ZIP, LLDB_BINARY, LLDB_RESOURCE_DIR, STRIPPED_ARCHIVE_DIR, bundle_zip_path,
    lldb_binary_path, lldb_destination_dir, unzip_destination,
};
pub use support::{SupportEntry, SupportTable, UnsupportedPlatformError};

/// Mode applied to every extracted file.
pub const LLDB_FILE_MODE: u32 = 0o775;

pub const SETUP_PROMPT: &str = "No LLDB instance found. Setup now?";

/// How an install request ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InstallOutcome {
    /// Installed into the given platform directory.
    Installed(PathBuf),
    /// The user declined the prompt.
    Skipped,
    /// The binary was already present at the given path.
    AlreadyInstalled(PathBuf),
}

pub struct LldbInstaller<R: Runtime, D: Downloader, E: Extractor> {
    pub runtime: R,
    pub downloader: D,
    pub extractor: E,
    pub support: SupportTable,
    pub platform: Platform,
}

impl<R: Runtime + 'static, D: Downloader, E: Extractor> LldbInstaller<R, D, E> {
    pub fn new(
        runtime: R,
        downloader: D,
        extractor: E,
        support: SupportTable,
        platform: Platform,
    ) -> Self {
        Self {
            runtime,
            downloader,
            extractor,
            support,
            platform,
        }
    }

    fn support_entry(&self) -> Result<&SupportEntry> {
        Ok(self.support.lookup(&self.platform.os)?)
    }

    /// Where the debugger binary is expected for the host platform.
    pub fn binary_path(&self, extension_root: &Path) -> Result<PathBuf> {
        let entry = self.support_entry()?;
        Ok(lldb_binary_path(extension_root, entry))
    }

    #[tracing::instrument(skip(self))]
    pub fn is_installed(&self, extension_root: &Path) -> Result<bool> {
        let binary = self.binary_path(extension_root)?;
        let installed = self.runtime.exists(&binary);
        debug!("LLDB binary {:?} present: {}", binary, installed);
        Ok(installed)
    }

    /// Ask the user, then install unless they chose to skip.
    #[tracing::instrument(skip(self))]
    pub async fn prompt_install(&self, extension_root: &Path) -> Result<InstallOutcome> {
        if self.runtime.ask_setup(SETUP_PROMPT)? == SetupResponse::Skip {
            info!("LLDB setup skipped by user");
            return Ok(InstallOutcome::Skipped);
        }

        let entry = self.support_entry()?;
        let destination = self.install_entry(extension_root, entry).await?;
        Ok(InstallOutcome::Installed(destination))
    }

    /// Download and unpack the platform's LLDB build without asking.
    /// Returns the platform directory it was installed into.
    #[tracing::instrument(skip(self))]
    pub async fn install(&self, extension_root: &Path) -> Result<PathBuf> {
        let entry = self.support_entry()?;
        self.install_entry(extension_root, entry).await
    }

    async fn install_entry(&self, extension_root: &Path, entry: &SupportEntry) -> Result<PathBuf> {
        let destination = lldb_destination_dir(extension_root, entry);
        let zip_path = bundle_zip_path(&destination);

        info!(
            "Installing LLDB for {} into {:?}",
            self.platform, destination
        );
        self.runtime.create_dir_all(&destination)?;

        self.runtime.inform("Downloading LLDB...");
        self.downloader
            .download(&entry.download_url, &zip_path)
            .await?;

        self.runtime.inform(&format!(
            "LLDB downloaded to {}. Installing...",
            zip_path.display()
        ));

        let remap = |name: &str| unzip_destination(&destination, name);
        let files = self
            .extractor
            .extract(&self.runtime, &zip_path, &remap)
            .with_context(|| format!("Failed to extract {:?}", zip_path))?;

        for file in &files {
            self.runtime.set_permissions(file, LLDB_FILE_MODE)?;
        }

        self.runtime.inform(&format!(
            "LLDB installed at {}",
            destination.display()
        ));

        if let Err(e) = self.runtime.remove_file(&zip_path) {
            debug!("Failed to remove {:?}: {}", zip_path, e);
        }

        Ok(destination)
    }
}
