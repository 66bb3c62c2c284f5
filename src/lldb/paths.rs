use std::path::{Component, Path, PathBuf};

use super::support::SupportEntry;

/// Resource subdirectory of the extension root holding debugger builds.
pub const LLDB_RESOURCE_DIR: &str = "resource/debug";

/// The debugger binary, relative to a platform directory.
pub const LLDB_BINARY: &str = "bin/lldb";

/// Name of the temporary archive inside the platform directory.
pub const BUNDLE_ZIP: &str = "bundle.zip";

/// Leading directory of the release archive that is dropped on extraction.
pub const STRIPPED_ARCHIVE_DIR: &str = "inst";

pub fn lldb_destination_dir(extension_root: &Path, entry: &SupportEntry) -> PathBuf {
    extension_root
        .join(LLDB_RESOURCE_DIR)
        .join(&entry.destination_dir)
}

pub fn lldb_binary_path(extension_root: &Path, entry: &SupportEntry) -> PathBuf {
    lldb_destination_dir(extension_root, entry).join(LLDB_BINARY)
}

pub fn bundle_zip_path(destination: &Path) -> PathBuf {
    destination.join(BUNDLE_ZIP)
}

/// Where an archive entry lands: `inst/bin/lldb` and `bin/lldb` both map to
/// `<destination>/bin/lldb`.
///
/// Only plain name segments are kept, so the result never leaves
/// `destination` (`inst/../x` lands at `<destination>/x`).
pub fn unzip_destination(destination: &Path, entry_name: &str) -> PathBuf {
    let mut segments = entry_name.split('/').peekable();
    if segments.peek() == Some(&STRIPPED_ARCHIVE_DIR) {
        segments.next();
    }

    segments
        .flat_map(|segment| Path::new(segment).components())
        .filter_map(|component| match component {
            Component::Normal(name) => Some(name),
            _ => None,
        })
        .fold(destination.to_path_buf(), |path, name| path.join(name))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::test_root;

    fn linux_entry() -> SupportEntry {
        SupportEntry {
            destination_dir: "linux".to_string(),
            download_url: "https://example.com/lldb.zip".to_string(),
        }
    }

    #[test]
    fn test_lldb_binary_path() {
        let root = test_root();

        assert_eq!(
            lldb_binary_path(&root, &linux_entry()),
            root.join("resource")
                .join("debug")
                .join("linux")
                .join("bin")
                .join("lldb")
        );
    }

    #[test]
    fn test_bundle_zip_lives_in_destination() {
        let root = test_root();
        let destination = lldb_destination_dir(&root, &linux_entry());

        assert_eq!(bundle_zip_path(&destination), destination.join("bundle.zip"));
    }

    #[test]
    fn test_unzip_destination_strips_leading_inst() {
        let dest = test_root().join("resource/debug/linux");

        assert_eq!(
            unzip_destination(&dest, "inst/bin/lldb"),
            dest.join("bin").join("lldb")
        );
        assert_eq!(
            unzip_destination(&dest, "inst/lib/liblldb.so.15"),
            dest.join("lib").join("liblldb.so.15")
        );
    }

    #[test]
    fn test_unzip_destination_passes_other_names_through() {
        let dest = test_root().join("resource/debug/linux");

        assert_eq!(
            unzip_destination(&dest, "bin/lldb"),
            dest.join("bin").join("lldb")
        );
        // Only a leading, exact "inst" segment is dropped
        assert_eq!(
            unzip_destination(&dest, "share/inst/readme"),
            dest.join("share").join("inst").join("readme")
        );
        assert_eq!(
            unzip_destination(&dest, "installer/setup"),
            dest.join("installer").join("setup")
        );
    }

    #[test]
    fn test_unzip_destination_directory_entries() {
        let dest = test_root().join("resource/debug/osx");

        assert_eq!(unzip_destination(&dest, "inst/"), dest);
        assert_eq!(unzip_destination(&dest, "inst/bin/"), dest.join("bin"));
    }

    #[test]
    fn test_unzip_destination_stays_inside_destination() {
        let dest = test_root().join("resource/debug/linux");

        assert_eq!(
            unzip_destination(&dest, "inst/../escaped.txt"),
            dest.join("escaped.txt")
        );
        assert_eq!(
            unzip_destination(&dest, "inst/bin/../../lldb"),
            dest.join("bin").join("lldb")
        );
        assert_eq!(unzip_destination(&dest, "./inst/./bin"), dest.join("inst").join("bin"));
        assert_eq!(unzip_destination(&dest, "inst/.."), dest);
    }
}
