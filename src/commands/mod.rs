use anyhow::Result;
use serde::Serialize;
use std::path::{Path, PathBuf};

use crate::{
    archive::Extractor,
    download::Downloader,
    lldb::{InstallOutcome, LldbInstaller},
    runtime::Runtime,
};

pub mod config;
pub mod services;

use config::Config;
use services::build_installer;

/// Installation state reported by `check`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LldbStatus {
    pub platform: String,
    pub installed: bool,
    pub binary_path: PathBuf,
}

/// Print whether LLDB is installed. Returns the installed flag.
#[tracing::instrument(skip(config))]
pub fn check(config: Config, json: bool) -> Result<bool> {
    let installer = build_installer(&config)?;
    let status = lldb_status(&installer, &config.extension_root)?;

    if json {
        println!("{}", serde_json::to_string(&status)?);
    } else if status.installed {
        println!("LLDB is installed at {}", status.binary_path.display());
    } else {
        println!(
            "LLDB is not installed (expected at {})",
            status.binary_path.display()
        );
    }

    Ok(status.installed)
}

/// Install LLDB unless it is already present.
#[tracing::instrument(skip(config))]
pub async fn install(config: Config, yes: bool, force: bool) -> Result<()> {
    let installer = build_installer(&config)?;
    run_install(&installer, &config.extension_root, yes, force).await?;
    Ok(())
}

pub fn lldb_status<R, D, E>(
    installer: &LldbInstaller<R, D, E>,
    extension_root: &Path,
) -> Result<LldbStatus>
where
    R: Runtime + 'static,
    D: Downloader,
    E: Extractor,
{
    let binary_path = installer.binary_path(extension_root)?;
    let installed = installer.is_installed(extension_root)?;
    Ok(LldbStatus {
        platform: installer.platform.os.clone(),
        installed,
        binary_path,
    })
}

pub async fn run_install<R, D, E>(
    installer: &LldbInstaller<R, D, E>,
    extension_root: &Path,
    yes: bool,
    force: bool,
) -> Result<InstallOutcome>
where
    R: Runtime + 'static,
    D: Downloader,
    E: Extractor,
{
    if !force && installer.is_installed(extension_root)? {
        let binary = installer.binary_path(extension_root)?;
        installer
            .runtime
            .inform(&format!("LLDB is already installed at {}", binary.display()));
        return Ok(InstallOutcome::AlreadyInstalled(binary));
    }

    if yes {
        let destination = installer.install(extension_root).await?;
        Ok(InstallOutcome::Installed(destination))
    } else {
        installer.prompt_install(extension_root).await
    }
}
