use std::fmt;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};
use crate::fetch;

/// Environment variable consulted between the explicit override and the
/// system candidate list.
pub const ENV_BROWSER: &str = "CVPRESS_BROWSER";

/// The rung of the resolution ladder that produced an executable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BrowserSource {
    /// Explicit path from config or a CLI flag
    Override,
    /// The CVPRESS_BROWSER environment variable
    Environment,
    /// A well-known install location for this platform
    System,
    /// The downloaded Chromium snapshot cache
    Download,
}

impl fmt::Display for BrowserSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BrowserSource::Override => write!(f, "override"),
            BrowserSource::Environment => write!(f, "environment"),
            BrowserSource::System => write!(f, "system"),
            BrowserSource::Download => write!(f, "download"),
        }
    }
}

/// A browser executable plus where it came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiscoveredBrowser {
    pub path: PathBuf,
    pub source: BrowserSource,
}

/// Well-known install locations for the current platform, in probe order:
/// Edge first, then Chrome via its uninstall registry entry.
///
/// Overrides are honored on any OS; only this table is platform-gated.
#[cfg(target_os = "windows")]
pub fn system_candidates() -> Result<Vec<PathBuf>> {
    let mut candidates = vec![PathBuf::from(
        r"C:\Program Files (x86)\Microsoft\Edge\Application\msedge.exe",
    )];
    if let Some(chrome) = chrome_install_location() {
        candidates.push(chrome);
    }
    Ok(candidates)
}

#[cfg(target_os = "windows")]
fn chrome_install_location() -> Option<PathBuf> {
    use winreg::RegKey;
    use winreg::enums::HKEY_LOCAL_MACHINE;

    let key = RegKey::predef(HKEY_LOCAL_MACHINE)
        .open_subkey(r"SOFTWARE\WOW6432Node\Microsoft\Windows\CurrentVersion\Uninstall\Google Chrome")
        .ok()?;
    let install_location: String = key.get_value("InstallLocation").ok()?;
    Some(PathBuf::from(install_location).join("chrome.exe"))
}

/// Well-known install locations for the current platform, in probe order.
///
/// Overrides are honored on any OS; only this table is platform-gated.
#[cfg(target_os = "linux")]
pub fn system_candidates() -> Result<Vec<PathBuf>> {
    Ok(vec![
        PathBuf::from("/usr/bin/chromium"),
        PathBuf::from("/usr/bin/chromium-browser"),
        PathBuf::from("/usr/bin/google-chrome"),
    ])
}

#[cfg(not(any(target_os = "windows", target_os = "linux")))]
pub fn system_candidates() -> Result<Vec<PathBuf>> {
    Err(Error::UnsupportedPlatform(std::env::consts::OS))
}

/// Walks the resolution ladder: explicit override, CVPRESS_BROWSER, then
/// the given candidates. Returns the first existing executable.
///
/// A configured override or environment path that does not exist on disk
/// is an error rather than a silent fall-through.
pub fn discover(
    explicit: Option<&Path>,
    candidates: &[PathBuf],
) -> Result<Option<DiscoveredBrowser>> {
    if let Some(path) = explicit {
        if path.is_file() {
            return Ok(Some(DiscoveredBrowser {
                path: path.to_path_buf(),
                source: BrowserSource::Override,
            }));
        }
        return Err(Error::BrowserUnavailable(format!(
            "configured browser does not exist: {}",
            path.display()
        )));
    }

    if let Ok(value) = std::env::var(ENV_BROWSER)
        && !value.is_empty()
    {
        let path = PathBuf::from(&value);
        if path.is_file() {
            return Ok(Some(DiscoveredBrowser {
                path,
                source: BrowserSource::Environment,
            }));
        }
        return Err(Error::BrowserUnavailable(format!(
            "{} points to a missing executable: {}",
            ENV_BROWSER, value
        )));
    }

    for candidate in candidates {
        if candidate.is_file() {
            return Ok(Some(DiscoveredBrowser {
                path: candidate.clone(),
                source: BrowserSource::System,
            }));
        }
    }

    Ok(None)
}

/// Runs the discovery ladder over the platform candidates without the
/// download fallback. `Ok(None)` means no browser is installed.
///
/// Overrides still work where no candidate table exists; the platform
/// error only surfaces once the override rungs come up empty.
pub fn probe(explicit: Option<&Path>) -> Result<Option<DiscoveredBrowser>> {
    match system_candidates() {
        Ok(candidates) => discover(explicit, &candidates),
        Err(err) => match discover(explicit, &[])? {
            Some(found) => Ok(Some(found)),
            None => Err(err),
        },
    }
}

/// Resolves the browser executable for one generation call.
///
/// Runs the discovery ladder over the platform candidates; when nothing
/// is found and `download` is set, falls back to the pinned Chromium
/// snapshot under `cache_dir`. Resolution happens per call and is never
/// cached across calls.
pub fn resolve(explicit: Option<&Path>, download: bool, cache_dir: &Path) -> Result<DiscoveredBrowser> {
    if let Some(found) = probe(explicit)? {
        return Ok(found);
    }

    download_fallback(download, cache_dir)
}

fn download_fallback(download: bool, cache_dir: &Path) -> Result<DiscoveredBrowser> {
    if !download {
        return Err(Error::BrowserUnavailable(String::from(
            "no browser is installed and downloading one is disabled; \
             install Chromium, set CVPRESS_BROWSER, or enable [browser] download",
        )));
    }

    let path = fetch::ensure_downloaded(cache_dir)?;
    Ok(DiscoveredBrowser {
        path,
        source: BrowserSource::Download,
    })
}
