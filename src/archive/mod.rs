mod zip;

use crate::runtime::Runtime;
use anyhow::Result;
use std::path::{Path, PathBuf};

pub use self::zip::ZipExtractor;

/// Maps an archive entry name (`/`-separated) to its destination on disk.
pub type EntryRemap<'a> = &'a dyn Fn(&str) -> PathBuf;

/// Trait for format-specific archive extractors
pub trait Extractor: Send + Sync {
    /// Extract every entry of the archive to the path chosen by `remap`.
    /// Returns the paths of the extracted regular files.
    fn extract<R: Runtime + 'static>(
        &self,
        runtime: &R,
        archive_path: &Path,
        remap: EntryRemap<'_>,
    ) -> Result<Vec<PathBuf>>;
}
