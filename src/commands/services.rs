//! Service factory for building the installer's dependencies.
//!
//! Construction of the HTTP client, downloader and extractor lives here so the
//! command handlers only deal with configuration.

use anyhow::Result;
use reqwest::Client;

use crate::{
    archive::ZipExtractor,
    download::HttpDownloader,
    http::HttpClient,
    lldb::LldbInstaller,
    runtime::RealRuntime,
};

use super::config::Config;

pub const USER_AGENT: &str = "lldb-setup";

/// Installer wired to the real system.
pub type RealInstaller = LldbInstaller<RealRuntime, HttpDownloader<RealRuntime>, ZipExtractor>;

/// Build the HTTP client used for downloads
pub fn build_http_client() -> Result<HttpClient> {
    let client = Client::builder().user_agent(USER_AGENT).build()?;
    Ok(HttpClient::new(client))
}

/// Build a downloader writing through the real filesystem
pub fn build_downloader() -> Result<HttpDownloader<RealRuntime>> {
    Ok(HttpDownloader::new(RealRuntime, build_http_client()?))
}

/// Build an archive extractor (stateless, no configuration needed)
pub fn build_extractor() -> ZipExtractor {
    ZipExtractor
}

/// Build an installer from configuration
pub fn build_installer(config: &Config) -> Result<RealInstaller> {
    Ok(LldbInstaller::new(
        RealRuntime,
        build_downloader()?,
        build_extractor(),
        config.support_table(),
        config.platform.clone(),
    ))
}
