pub mod archive;
pub mod commands;
pub mod download;
pub mod http;
pub mod lldb;
pub mod platform;
pub mod runtime;

/// Test utilities shared by unit tests.
#[cfg(test)]
pub mod test_utils {
    use crate::runtime::{MockRuntime, RealRuntime, Runtime};
    use anyhow::Result;
    use std::fs::File;
    use std::io::Write;
    use std::path::{Path, PathBuf};
    use zip::CompressionMethod;
    use zip::ZipWriter;
    use zip::write::FileOptions;

    /// Returns the test extension root based on the platform.
    /// - Unix: `/home/user/.vscode/extensions/wamr-ide`
    /// - Windows: `C:\Users\user\.vscode\extensions\wamr-ide`
    pub fn test_root() -> PathBuf {
        #[cfg(not(windows))]
        {
            PathBuf::from("/home/user/.vscode/extensions/wamr-ide")
        }
        #[cfg(windows)]
        {
            PathBuf::from(r"C:\Users\user\.vscode\extensions\wamr-ide")
        }
    }

    /// Route the mock's filesystem calls to the real filesystem.
    /// User interaction (`ask_setup`, `inform`) is left to the test.
    pub fn configure_mock_runtime_real_fs(runtime: &mut MockRuntime) {
        runtime.expect_exists().returning(|p| RealRuntime.exists(p));
        runtime
            .expect_create_dir_all()
            .returning(|p| RealRuntime.create_dir_all(p));
        runtime
            .expect_create_file()
            .returning(|p| RealRuntime.create_file(p));
        runtime.expect_open().returning(|p| RealRuntime.open(p));
        runtime
            .expect_remove_file()
            .returning(|p| RealRuntime.remove_file(p));
        runtime
            .expect_set_permissions()
            .returning(|p, mode| RealRuntime.set_permissions(p, mode));
    }

    /// Write a deflated zip with the given `(name, content)` entries.
    pub fn create_test_zip(path: &Path, files: &[(&str, &str)]) -> Result<()> {
        let file = File::create(path)?;
        let mut zip = ZipWriter::new(file);
        let options: FileOptions<()> =
            FileOptions::default().compression_method(CompressionMethod::Deflated);

        for (name, content) in files {
            zip.start_file(*name, options)?;
            zip.write_all(content.as_bytes())?;
        }

        zip.finish()?;
        Ok(())
    }
}
