//! Well-known directories.

use std::path::PathBuf;

use super::RealRuntime;

impl RealRuntime {
    #[tracing::instrument(skip(self))]
    pub(crate) fn data_dir_impl(&self) -> Option<PathBuf> {
        dirs::data_dir()
    }
}

#[cfg(test)]
mod tests {
    use crate::runtime::{RealRuntime, Runtime};

    #[test]
    fn test_real_runtime_data_dir() {
        let runtime = RealRuntime;

        // CI containers may have no home directory at all
        let data = runtime.data_dir();
        assert!(data.map(|d| d.is_absolute()).unwrap_or(true));
    }
}
