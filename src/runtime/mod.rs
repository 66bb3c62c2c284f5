//! Runtime abstraction for system operations.
//!
//! The installer never touches the filesystem or the terminal directly; it goes
//! through [`Runtime`] so tests can swap in a `MockRuntime`.
//!
//! # Structure
//!
//! - `env` - Well-known directories
//! - `fs` - File system operations (create, open, remove, permissions)
//! - `user` - User interaction (setup prompt, status messages)

mod env;
mod fs;
mod user;

use anyhow::Result;
use std::path::{Path, PathBuf};

pub use user::SetupResponse;

#[cfg_attr(test, mockall::automock)]
pub trait Runtime: Send + Sync {
    // File System
    fn exists(&self, path: &Path) -> bool;
    fn create_dir_all(&self, path: &Path) -> Result<()>;
    fn create_file(&self, path: &Path) -> Result<Box<dyn std::io::Write + Send>>;
    fn open(&self, path: &Path) -> Result<Box<dyn std::io::Read + Send>>;
    fn remove_file(&self, path: &Path) -> Result<()>;

    /// Set file permissions (mode) on Unix systems. No-op on Windows.
    fn set_permissions(&self, path: &Path, mode: u32) -> Result<()>;

    // Directories
    fn data_dir(&self) -> Option<PathBuf>;

    // User interaction
    /// Ask whether to set up a missing tool. Only an explicit skip declines.
    fn ask_setup(&self, prompt: &str) -> Result<SetupResponse>;

    /// Show a status message to the user.
    fn inform(&self, message: &str);
}

pub struct RealRuntime;

impl Runtime for RealRuntime {
    fn exists(&self, path: &Path) -> bool {
        self.exists_impl(path)
    }

    fn create_dir_all(&self, path: &Path) -> Result<()> {
        self.create_dir_all_impl(path)
    }

    fn create_file(&self, path: &Path) -> Result<Box<dyn std::io::Write + Send>> {
        self.create_file_impl(path)
    }

    fn open(&self, path: &Path) -> Result<Box<dyn std::io::Read + Send>> {
        self.open_impl(path)
    }

    fn remove_file(&self, path: &Path) -> Result<()> {
        self.remove_file_impl(path)
    }

    fn set_permissions(&self, path: &Path, mode: u32) -> Result<()> {
        self.set_permissions_impl(path, mode)
    }

    fn data_dir(&self) -> Option<PathBuf> {
        self.data_dir_impl()
    }

    fn ask_setup(&self, prompt: &str) -> Result<SetupResponse> {
        self.ask_setup_impl(prompt)
    }

    fn inform(&self, message: &str) {
        self.inform_impl(message)
    }
}
