// crates/infra/src/persistence/file_writer.rs
use std::{
    fs::{self, File, OpenOptions},
    io::{BufWriter, Write},
    path::Path,
};

use repo_visualiser_shared_kernel::{InfraResult, InfrastructureError};

/// Helper utilities for writing files.
pub struct FileWriter;

impl FileWriter {
    /// Atomically write `data` to `path` via a temp file and rename.
    /// Best-effort fsync is attempted where available to reduce corruption on crash.
    pub fn atomic_write<P: AsRef<Path>>(path: P, data: &[u8]) -> InfraResult<()> {
        let path = path.as_ref();
        Self::write_via_temp(path, data)
            .map_err(|source| InfrastructureError::FileWrite { path: path.to_path_buf(), source })
    }

    /// Append `data` to `path`, creating it if needed.
    pub fn append<P: AsRef<Path>>(path: P, data: &[u8]) -> InfraResult<()> {
        let path = path.as_ref();
        let write = || -> std::io::Result<()> {
            let file = OpenOptions::new().create(true).append(true).open(path)?;
            let mut w = BufWriter::new(file);
            w.write_all(data)?;
            w.flush()
        };
        write().map_err(|source| InfrastructureError::FileWrite { path: path.to_path_buf(), source })
    }

    fn write_via_temp(path: &Path, data: &[u8]) -> std::io::Result<()> {
        let parent = match path.parent() {
            Some(p) if !p.as_os_str().is_empty() => p,
            _ => Path::new("."),
        };
        if !parent.exists() {
            fs::create_dir_all(parent)?;
        }

        // PID + current time nanos keeps the name unique without a retry loop.
        let nanos = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap_or_default()
            .as_nanos();
        let tmp = parent.join(format!(".{}.{}.tmp", std::process::id(), nanos));

        let file = File::create(&tmp)?;
        let mut w = BufWriter::new(file);
        w.write_all(data)?;
        w.flush()?;
        let _ = w.get_ref().sync_all();

        fs::rename(&tmp, path)?;

        // Attempt to sync parent directory to make the rename durable on Unix.
        #[cfg(unix)]
        {
            if let Ok(dir) = File::open(parent) {
                let _ = dir.sync_all();
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn atomic_write_creates_missing_parent() {
        let dir = tempfile::tempdir().unwrap();
        let target = dir.path().join("out").join("diagram.svg");
        FileWriter::atomic_write(&target, b"<svg/>").unwrap();
        assert_eq!(fs::read(&target).unwrap(), b"<svg/>");
    }

    #[test]
    fn append_keeps_existing_content() {
        let dir = tempfile::tempdir().unwrap();
        let target = dir.path().join("summary.md");
        FileWriter::append(&target, b"one\n").unwrap();
        FileWriter::append(&target, b"two\n").unwrap();
        assert_eq!(fs::read_to_string(&target).unwrap(), "one\ntwo\n");
    }
}
