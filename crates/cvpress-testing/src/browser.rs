//! Fake browser executables for exercising the PDF lifecycle.
//!
//! Each helper writes a small shell script that mimics the slice of
//! Chromium behavior the engine depends on: consume the
//! `--print-to-pdf=<path>` flag and produce (or fail to produce) a file
//! there. Unix only; tests that use them are gated accordingly.

#![cfg(unix)]

use anyhow::Result;
use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};

/// Writes a browser stand-in that emits a stub PDF and exits cleanly.
pub fn write_fake_browser(dir: &Path) -> Result<PathBuf> {
    let script = r#"#!/bin/sh
for arg in "$@"; do
  case "$arg" in
    --print-to-pdf=*)
      printf '%%PDF-1.4 stub resume render\n' > "${arg#--print-to-pdf=}"
      ;;
  esac
done
exit 0
"#;
    write_script(dir, "fake-chromium", script)
}

/// Writes a browser stand-in that fails without producing output.
pub fn write_failing_browser(dir: &Path) -> Result<PathBuf> {
    let script = r#"#!/bin/sh
echo "renderer crashed" >&2
exit 1
"#;
    write_script(dir, "failing-chromium", script)
}

/// Writes a browser stand-in that never finishes on its own.
pub fn write_hanging_browser(dir: &Path) -> Result<PathBuf> {
    let script = r#"#!/bin/sh
sleep 30
"#;
    write_script(dir, "hanging-chromium", script)
}

/// Writes an empty executable file, enough to satisfy existence probes.
pub fn write_stub_executable(dir: &Path, name: &str) -> Result<PathBuf> {
    write_script(dir, name, "#!/bin/sh\nexit 0\n")
}

fn write_script(dir: &Path, name: &str, contents: &str) -> Result<PathBuf> {
    let path = dir.join(name);
    fs::write(&path, contents)?;

    let mut perms = fs::metadata(&path)?.permissions();
    perms.set_mode(0o755);
    fs::set_permissions(&path, perms)?;

    Ok(path)
}
