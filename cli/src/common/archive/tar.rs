//! # Orchard TAR Archive Utilities
//!
//! File: cli/src/common/archive/tar.rs
//!
//! ## Overview
//!
//! Extracts a single named file from an in-memory `.tar.gz`. The file is
//! matched by its final path component, so archives that wrap the binary in
//! a top-level directory (`orchard-0.4.0/orchard`) work as well as flat ones.
//!
use crate::core::error::{OrchardError, Result};
use anyhow::{anyhow, Context};
use flate2::read::GzDecoder;
use std::fs::File;
use std::io;
use std::path::{Path, PathBuf};
use tar::Archive;
use tracing::debug;

/// Writes the first entry named `file_name` into `dest_dir` and returns its path.
///
/// # Errors
///
/// Returns `OrchardError::Update` if the archive has no such regular file, or
/// an I/O error (with context) if the archive is corrupt or the write fails.
pub fn extract_file(tar_gz: &[u8], file_name: &str, dest_dir: &Path) -> Result<PathBuf> {
    let mut archive = Archive::new(GzDecoder::new(tar_gz));

    for entry in archive.entries().context("Failed to read archive entries")? {
        let mut entry = entry.context("Failed to read archive entry")?;
        if !entry.header().entry_type().is_file() {
            continue;
        }
        let path = entry.path().context("Archive entry has an invalid path")?;
        if path.file_name().and_then(|n| n.to_str()) != Some(file_name) {
            continue;
        }
        debug!("Extracting '{}' from archive", path.display());

        let dest = dest_dir.join(file_name);
        let mut out = File::create(&dest)
            .with_context(|| format!("Failed to create '{}'", dest.display()))?;
        io::copy(&mut entry, &mut out)
            .with_context(|| format!("Failed to write '{}'", dest.display()))?;
        return Ok(dest);
    }

    Err(anyhow!(OrchardError::Update(format!(
        "Archive does not contain '{}'.",
        file_name
    ))))
}

#[cfg(test)]
mod tests {
    use super::*;
    use flate2::{write::GzEncoder, Compression};
    use std::fs;
    use tempfile::tempdir;

    fn tar_gz(files: &[(&str, &[u8])]) -> Vec<u8> {
        let mut builder = tar::Builder::new(GzEncoder::new(Vec::new(), Compression::default()));
        for (path, data) in files {
            let mut header = tar::Header::new_gnu();
            header.set_size(data.len() as u64);
            header.set_mode(0o755);
            header.set_cksum();
            builder.append_data(&mut header, path, *data).unwrap();
        }
        builder.into_inner().unwrap().finish().unwrap()
    }

    #[test]
    fn test_extracts_nested_binary() -> Result<()> {
        let archive = tar_gz(&[
            ("orchard-0.4.0/README.md", &b"docs"[..]),
            ("orchard-0.4.0/orchard", &b"#!binary"[..]),
        ]);
        let dir = tempdir()?;

        let extracted = extract_file(&archive, "orchard", dir.path())?;

        assert_eq!(extracted, dir.path().join("orchard"));
        assert_eq!(fs::read(&extracted)?, b"#!binary");
        Ok(())
    }

    #[test]
    fn test_missing_file_is_update_error() {
        let archive = tar_gz(&[("README.md", &b"docs"[..])]);
        let dir = tempdir().unwrap();

        let err = extract_file(&archive, "orchard", dir.path()).unwrap_err();
        assert!(err.to_string().contains("does not contain 'orchard'"));
    }
}
