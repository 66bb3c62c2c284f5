//! Which platforms have a prebuilt WAMR LLDB, and where to get it.

use std::fmt;

const WAMR_LLDB_UNIVERSAL_URL: &str = "https://github.com/cimacmillan/wasm-micro-runtime/releases/download/WAMR-1.1.1/wamr-lldb-1.1.1-universal-macos-latest.zip";

/// (platform, destination_dir, download_url)
const BUILTIN_SUPPORT: &[(&str, &str, &str)] = &[
    ("linux", "linux", WAMR_LLDB_UNIVERSAL_URL),
    ("darwin", "osx", WAMR_LLDB_UNIVERSAL_URL),
];

/// Where one platform's LLDB build comes from and where it goes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SupportEntry {
    /// Subdirectory of the resource directory that receives the build.
    pub destination_dir: String,
    pub download_url: String,
}

/// Raised when the host platform has no LLDB build.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnsupportedPlatformError {
    pub platform: String,
}

impl fmt::Display for UnsupportedPlatformError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "WAMR LLDB is not supported on this platform: {}",
            self.platform
        )
    }
}

impl std::error::Error for UnsupportedPlatformError {}

/// Mapping from platform identifier to [`SupportEntry`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SupportTable {
    entries: Vec<(String, SupportEntry)>,
}

impl Default for SupportTable {
    fn default() -> Self {
        Self::builtin()
    }
}

impl SupportTable {
    /// The platforms WAMR publishes LLDB builds for.
    pub fn builtin() -> Self {
        let entries = BUILTIN_SUPPORT
            .iter()
            .map(|(platform, destination_dir, download_url)| {
                (
                    platform.to_string(),
                    SupportEntry {
                        destination_dir: destination_dir.to_string(),
                        download_url: download_url.to_string(),
                    },
                )
            })
            .collect();
        Self { entries }
    }

    /// Points every entry at `url` instead, e.g. a local mirror.
    pub fn with_download_url(mut self, url: &str) -> Self {
        for (_, entry) in &mut self.entries {
            entry.download_url = url.to_string();
        }
        self
    }

    pub fn lookup(&self, platform: &str) -> Result<&SupportEntry, UnsupportedPlatformError> {
        self.entries
            .iter()
            .find(|(p, _)| p == platform)
            .map(|(_, entry)| entry)
            .ok_or_else(|| UnsupportedPlatformError {
                platform: platform.to_string(),
            })
    }
}
