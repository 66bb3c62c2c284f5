//! Host platform detection.
//!
//! Operating systems are named the way the LLDB support table names them:
//! `linux`, `darwin` and `win32`. Anything else keeps Rust's target OS name.

use std::fmt;

/// Platform information for picking an LLDB build
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Platform {
    pub os: String,
    pub arch: String,
}

impl Platform {
    /// Detect the current platform
    pub fn detect() -> Self {
        Self {
            os: Self::detect_os(),
            arch: Self::detect_arch(),
        }
    }

    /// The current architecture with an explicit OS identifier.
    pub fn with_os(os: impl Into<String>) -> Self {
        Self {
            os: os.into(),
            arch: Self::detect_arch(),
        }
    }

    fn detect_os() -> String {
        #[cfg(target_os = "macos")]
        {
            "darwin".to_string()
        }
        #[cfg(target_os = "linux")]
        {
            "linux".to_string()
        }
        #[cfg(target_os = "windows")]
        {
            "win32".to_string()
        }
        #[cfg(not(any(target_os = "macos", target_os = "linux", target_os = "windows")))]
        {
            std::env::consts::OS.to_string()
        }
    }

    fn detect_arch() -> String {
        #[cfg(target_arch = "x86_64")]
        {
            "x86_64".to_string()
        }
        #[cfg(target_arch = "aarch64")]
        {
            "aarch64".to_string()
        }
        #[cfg(target_arch = "x86")]
        {
            "i686".to_string()
        }
        #[cfg(not(any(target_arch = "x86_64", target_arch = "aarch64", target_arch = "x86")))]
        {
            std::env::consts::ARCH.to_string()
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.os, self.arch)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_platform_detect() {
        let platform = Platform::detect();

        assert!(!platform.os.is_empty());
        assert!(!platform.arch.is_empty());

        #[cfg(target_os = "macos")]
        assert_eq!(platform.os, "darwin");

        #[cfg(target_os = "linux")]
        assert_eq!(platform.os, "linux");

        #[cfg(target_os = "windows")]
        assert_eq!(platform.os, "win32");

        #[cfg(target_arch = "x86_64")]
        assert_eq!(platform.arch, "x86_64");

        #[cfg(target_arch = "aarch64")]
        assert_eq!(platform.arch, "aarch64");
    }

    #[test]
    fn test_with_os_keeps_detected_arch() {
        let platform = Platform::with_os("freebsd");

        assert_eq!(platform.os, "freebsd");
        assert_eq!(platform.arch, Platform::detect().arch);
    }

    #[test]
    fn test_platform_display() {
        let platform = Platform {
            os: "linux".into(),
            arch: "x86_64".into(),
        };

        assert_eq!(platform.to_string(), "linux/x86_64");
    }
}
