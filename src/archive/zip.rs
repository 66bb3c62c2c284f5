use crate::runtime::Runtime;
use anyhow::{Context, Result, anyhow};
use log::{debug, info};
use std::io::Read;
use std::path::{Path, PathBuf};
use zip::ZipArchive;

use super::{EntryRemap, Extractor};

/// Extractor for .zip archives
pub struct ZipExtractor;

impl Extractor for ZipExtractor {
    #[tracing::instrument(skip(self, runtime, remap))]
    fn extract<R: Runtime + 'static>(
        &self,
        runtime: &R,
        archive_path: &Path,
        remap: EntryRemap<'_>,
    ) -> Result<Vec<PathBuf>> {
        debug!("Extracting zip archive {:?}...", archive_path);
        let mut reader = runtime
            .open(archive_path)
            .with_context(|| format!("Failed to open archive at {:?}", archive_path))?;

        // zip needs Read + Seek, Runtime::open only gives Read
        let mut buffer = Vec::new();
        reader
            .read_to_end(&mut buffer)
            .with_context(|| format!("Failed to read archive {:?}", archive_path))?;
        let cursor = std::io::Cursor::new(buffer);

        let mut archive = ZipArchive::new(cursor).with_context(|| "Failed to parse ZIP archive")?;

        let mut extracted = Vec::new();

        for i in 0..archive.len() {
            let mut entry = archive
                .by_index(i)
                .with_context(|| format!("Failed to read ZIP entry {}", i))?;

            if entry.enclosed_name().is_none() {
                debug!("Skipping entry with unsafe path {:?}", entry.name());
                continue;
            }

            let name = entry.name().replace('\\', "/");
            let full_path = remap(&name);

            if entry.is_dir() {
                runtime.create_dir_all(&full_path)?;
                continue;
            }

            if let Some(parent) = full_path.parent() {
                runtime.create_dir_all(parent)?;
            }
            let mut dest_file = runtime.create_file(&full_path)?;
            std::io::copy(&mut entry, &mut dest_file)
                .with_context(|| format!("Failed to extract file {:?}", full_path))?;

            debug!("Extracted {} -> {:?}", name, full_path);
            extracted.push(full_path);
        }

        if extracted.is_empty() {
            return Err(anyhow!("Archive appears to be empty."));
        }

        info!("Extraction complete ({} files).", extracted.len());
        Ok(extracted)
    }
}
