//! Pinned Chromium snapshot download.
//!
//! When no browser is installed and downloading is enabled, one fixed
//! revision of the chromium-browser-snapshots build is fetched and
//! unpacked into the data directory. The cache is keyed by revision so a
//! pin bump never collides with an old extraction.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::error::{Error, Result};

/// Revision of the snapshot build fetched when no system browser exists.
pub const CHROMIUM_REVISION: &str = "1181205";

/// Subdirectory of the data directory holding downloaded browsers.
pub const CACHE_DIR_NAME: &str = ".local-chromium";

const SNAPSHOT_BASE: &str = "https://storage.googleapis.com/chromium-browser-snapshots";

const DOWNLOAD_TIMEOUT: Duration = Duration::from_secs(600);

/// Layout of one extracted snapshot archive.
struct SnapshotLayout {
    platform: &'static str,
    archive: &'static str,
    executable: &'static str,
}

#[cfg(target_os = "linux")]
fn snapshot_layout() -> Result<SnapshotLayout> {
    Ok(SnapshotLayout {
        platform: "Linux_x64",
        archive: "chrome-linux",
        executable: "chrome-linux/chrome",
    })
}

#[cfg(target_os = "windows")]
fn snapshot_layout() -> Result<SnapshotLayout> {
    Ok(SnapshotLayout {
        platform: "Win_x64",
        archive: "chrome-win",
        executable: "chrome-win/chrome.exe",
    })
}

#[cfg(not(any(target_os = "linux", target_os = "windows")))]
fn snapshot_layout() -> Result<SnapshotLayout> {
    Err(Error::UnsupportedPlatform(std::env::consts::OS))
}

/// Returns the pinned-revision executable under `cache_dir` when a
/// finished download is already present.
pub fn downloaded_executable(cache_dir: &Path) -> Option<PathBuf> {
    let layout = snapshot_layout().ok()?;
    let executable = cache_dir
        .join(CACHE_DIR_NAME)
        .join(CHROMIUM_REVISION)
        .join(layout.executable);
    executable.is_file().then_some(executable)
}

/// Returns the pinned-revision executable under `cache_dir`, downloading
/// and extracting it first when missing.
///
/// Idempotent per revision directory: an existing executable
/// short-circuits without any network traffic.
pub fn ensure_downloaded(cache_dir: &Path) -> Result<PathBuf> {
    let layout = snapshot_layout()?;
    if let Some(executable) = downloaded_executable(cache_dir) {
        return Ok(executable);
    }

    let revision_dir = cache_dir.join(CACHE_DIR_NAME).join(CHROMIUM_REVISION);
    let executable = revision_dir.join(layout.executable);
    fs::create_dir_all(&revision_dir)?;

    let url = format!(
        "{}/{}/{}/{}.zip",
        SNAPSHOT_BASE, layout.platform, CHROMIUM_REVISION, layout.archive
    );
    let archive_path = revision_dir.join("snapshot.zip");
    download(&url, &archive_path)?;
    extract(&archive_path, &revision_dir)?;
    fs::remove_file(&archive_path)?;

    if !executable.is_file() {
        return Err(Error::DownloadFailed(format!(
            "archive did not contain the expected executable: {}",
            executable.display()
        )));
    }

    Ok(executable)
}

fn download(url: &str, dest: &Path) -> Result<()> {
    let client = reqwest::blocking::Client::builder()
        .timeout(DOWNLOAD_TIMEOUT)
        .build()
        .map_err(|err| Error::DownloadFailed(err.to_string()))?;

    let mut response = client
        .get(url)
        .send()
        .map_err(|err| Error::DownloadFailed(format!("{}: {}", url, err)))?;

    if !response.status().is_success() {
        return Err(Error::DownloadFailed(format!(
            "{} returned HTTP {}",
            url,
            response.status()
        )));
    }

    let mut file = fs::File::create(dest)?;
    io::copy(&mut response, &mut file).map_err(|err| Error::DownloadFailed(err.to_string()))?;
    Ok(())
}

fn extract(archive_path: &Path, dest: &Path) -> Result<()> {
    let file = fs::File::open(archive_path)?;
    let mut archive = zip::ZipArchive::new(file)
        .map_err(|err| Error::DownloadFailed(format!("unreadable archive: {}", err)))?;

    for index in 0..archive.len() {
        let mut entry = archive
            .by_index(index)
            .map_err(|err| Error::DownloadFailed(err.to_string()))?;

        // Entries with traversal components are skipped rather than trusted.
        let Some(relative) = entry.enclosed_name() else {
            continue;
        };
        let target = dest.join(relative);

        if entry.is_dir() {
            fs::create_dir_all(&target)?;
            continue;
        }

        if let Some(parent) = target.parent() {
            fs::create_dir_all(parent)?;
        }
        let mut out = fs::File::create(&target)?;
        io::copy(&mut entry, &mut out)?;

        #[cfg(unix)]
        if let Some(mode) = entry.unix_mode() {
            use std::os::unix::fs::PermissionsExt;
            fs::set_permissions(&target, fs::Permissions::from_mode(mode))?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[cfg(any(target_os = "linux", target_os = "windows"))]
    #[test]
    fn existing_executable_short_circuits() {
        let dir = tempfile::tempdir().unwrap();
        let layout = snapshot_layout().unwrap();
        let revision_dir = dir.path().join(CACHE_DIR_NAME).join(CHROMIUM_REVISION);
        let executable = revision_dir.join(layout.executable);

        fs::create_dir_all(executable.parent().unwrap()).unwrap();
        fs::write(&executable, "stub").unwrap();

        // No network is reachable from here; a cache hit must not need it.
        let resolved = ensure_downloaded(dir.path()).unwrap();
        assert_eq!(resolved, executable);
    }

    #[cfg(any(target_os = "linux", target_os = "windows"))]
    #[test]
    fn downloaded_executable_reports_cache_state() {
        let dir = tempfile::tempdir().unwrap();
        assert_eq!(downloaded_executable(dir.path()), None);

        let layout = snapshot_layout().unwrap();
        let executable = dir
            .path()
            .join(CACHE_DIR_NAME)
            .join(CHROMIUM_REVISION)
            .join(layout.executable);
        fs::create_dir_all(executable.parent().unwrap()).unwrap();
        fs::write(&executable, "stub").unwrap();

        assert_eq!(downloaded_executable(dir.path()), Some(executable));
    }

    #[test]
    fn extract_unpacks_nested_entries() {
        use zip::ZipWriter;
        use zip::write::SimpleFileOptions;

        let dir = tempfile::tempdir().unwrap();
        let archive_path = dir.path().join("snapshot.zip");

        let file = fs::File::create(&archive_path).unwrap();
        let mut writer = ZipWriter::new(file);
        let options =
            SimpleFileOptions::default().compression_method(zip::CompressionMethod::Stored);
        writer.add_directory("chrome-linux/", options).unwrap();
        writer.start_file("chrome-linux/chrome", options).unwrap();
        writer.write_all(b"#!/bin/sh\nexit 0\n").unwrap();
        writer.finish().unwrap();

        let out_dir = dir.path().join("out");
        fs::create_dir_all(&out_dir).unwrap();
        extract(&archive_path, &out_dir).unwrap();

        let unpacked = out_dir.join("chrome-linux/chrome");
        assert!(unpacked.is_file());
        assert_eq!(fs::read(&unpacked).unwrap(), b"#!/bin/sh\nexit 0\n");
    }

    #[test]
    fn extract_rejects_garbage() {
        let dir = tempfile::tempdir().unwrap();
        let archive_path = dir.path().join("snapshot.zip");
        fs::write(&archive_path, "not a zip archive").unwrap();

        let result = extract(&archive_path, dir.path());
        assert!(matches!(result, Err(Error::DownloadFailed(_))));
    }
}
