use crate::http::HttpClient;
use crate::runtime::Runtime;
use anyhow::{Context, Result};
use async_trait::async_trait;
use log::info;
use std::path::Path;

/// Fetches a remote file to a local path.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait Downloader: Send + Sync {
    async fn download(&self, url: &str, destination: &Path) -> Result<()>;
}

/// Downloads over HTTP(S), writing through a [`Runtime`].
pub struct HttpDownloader<R: Runtime> {
    runtime: R,
    http_client: HttpClient,
}

impl<R: Runtime> HttpDownloader<R> {
    pub fn new(runtime: R, http_client: HttpClient) -> Self {
        Self {
            runtime,
            http_client,
        }
    }
}

#[async_trait]
impl<R: Runtime> Downloader for HttpDownloader<R> {
    async fn download(&self, url: &str, destination: &Path) -> Result<()> {
        download_file(&self.runtime, url, destination, &self.http_client).await
    }
}

/// Downloads a file from a URL to `destination` with retry support.
#[tracing::instrument(skip(runtime, http_client))]
pub async fn download_file<R: Runtime>(
    runtime: &R,
    url: &str,
    destination: &Path,
    http_client: &HttpClient,
) -> Result<()> {
    info!("Downloading file from {}...", url);

    let destination = destination.to_path_buf();
    let bytes = http_client
        .download_file(url, || {
            runtime
                .create_file(&destination)
                .with_context(|| format!("Failed to create download file at {:?}", destination))
        })
        .await
        .with_context(|| format!("Failed to download {}", url))?;

    info!("Download complete ({} bytes).", bytes);
    Ok(())
}
