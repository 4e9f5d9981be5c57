/// Shared filesystem helpers.
pub mod fs {
    use std::fs;
    use std::io;
    use std::path::Path;

    /// Ensure a directory exists, creating it and any missing parents.
    ///
    /// An existing directory is a no-op. An existing non-directory at `path`
    /// or at any ancestor is an error.
    pub fn ensure_dir(path: &Path) -> io::Result<()> {
        fs::create_dir_all(path)
    }

}
