//! Headless browser PDF engine.

use std::fs;
use std::io::Read;
use std::path::{Path, PathBuf};
use std::process::{Child, Command, ExitStatus, Stdio};
use std::time::{Duration, Instant};

use crate::error::{Error, Result};

/// Default deadline for one print-to-PDF round trip.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(60);

/// Drives a Chromium-family executable in headless mode to rasterize a
/// local HTML file into a PDF.
#[derive(Debug, Clone)]
pub struct PdfEngine {
    executable: PathBuf,
    timeout: Duration,
}

impl PdfEngine {
    pub fn new(executable: impl Into<PathBuf>) -> Self {
        Self {
            executable: executable.into(),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Replaces the render deadline.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Rasterizes `html_path` into `pdf_path`.
    ///
    /// One blocking call: the browser is spawned, waited on until it
    /// exits or the deadline passes, and the output is verified to be a
    /// non-empty file. The browser process never outlives this call.
    pub fn from_html(&self, html_path: &Path, pdf_path: &Path) -> Result<()> {
        if html_path.as_os_str().is_empty() {
            return Err(Error::InvalidArgument("html path cannot be empty".into()));
        }
        if pdf_path.as_os_str().is_empty() {
            return Err(Error::InvalidArgument("pdf path cannot be empty".into()));
        }

        let url = file_url(html_path).map_err(|err| Error::RenderFailed {
            path: html_path.to_path_buf(),
            detail: err.to_string(),
        })?;

        let mut command = Command::new(&self.executable);
        command
            .arg("--headless")
            .arg("--disable-gpu")
            .arg("--no-sandbox")
            .arg("--no-pdf-header-footer")
            .arg(format!("--print-to-pdf={}", pdf_path.display()))
            .arg(&url)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::piped());

        let mut browser = BrowserProcess::spawn(command).map_err(|err| Error::RenderFailed {
            path: html_path.to_path_buf(),
            detail: format!("failed to launch {}: {}", self.executable.display(), err),
        })?;

        let status = browser.wait_timeout(self.timeout)?;

        let Some(status) = status else {
            browser.kill();
            return Err(Error::RenderFailed {
                path: html_path.to_path_buf(),
                detail: format!("browser exceeded the render deadline ({:?})", self.timeout),
            });
        };

        if !status.success() {
            let snippet = browser.stderr_snippet();
            let detail = if snippet.is_empty() {
                format!("browser exited with {}", status)
            } else {
                format!("browser exited with {}: {}", status, snippet)
            };
            return Err(Error::RenderFailed {
                path: html_path.to_path_buf(),
                detail,
            });
        }

        let pdf_size = fs::metadata(pdf_path).map(|meta| meta.len()).unwrap_or(0);
        if pdf_size == 0 {
            return Err(Error::RenderFailed {
                path: pdf_path.to_path_buf(),
                detail: "browser exited cleanly but produced no PDF".into(),
            });
        }

        Ok(())
    }
}

/// Absolute `file://` URL for a local path.
fn file_url(path: &Path) -> std::io::Result<String> {
    let absolute = path.canonicalize()?;

    #[cfg(windows)]
    {
        let text = absolute.to_string_lossy();
        let text = text.strip_prefix(r"\\?\").unwrap_or(&text);
        Ok(format!("file:///{}", text.replace('\\', "/")))
    }

    #[cfg(not(windows))]
    Ok(format!("file://{}", absolute.display()))
}

/// Child browser handle, killed on drop so no exit path leaks a process.
struct BrowserProcess {
    child: Child,
}

impl BrowserProcess {
    fn spawn(mut command: Command) -> std::io::Result<Self> {
        let child = command.spawn()?;
        Ok(Self { child })
    }

    /// Waits for the browser to exit, polling up to the deadline.
    fn wait_timeout(&mut self, timeout: Duration) -> std::io::Result<Option<ExitStatus>> {
        let start = Instant::now();
        loop {
            match self.child.try_wait()? {
                Some(status) => return Ok(Some(status)),
                None => {
                    if start.elapsed() > timeout {
                        return Ok(None);
                    }
                    std::thread::sleep(Duration::from_millis(100));
                }
            }
        }
    }

    fn kill(&mut self) {
        let _ = self.child.kill();
        let _ = self.child.wait();
    }

    /// First chunk of captured stderr, for error messages.
    fn stderr_snippet(&mut self) -> String {
        let Some(stderr) = self.child.stderr.as_mut() else {
            return String::new();
        };
        let mut buf = [0u8; 2048];
        let read = stderr.read(&mut buf).unwrap_or(0);
        String::from_utf8_lossy(&buf[..read]).trim().to_string()
    }
}

impl Drop for BrowserProcess {
    fn drop(&mut self) {
        let _ = self.child.kill();
        let _ = self.child.wait();
    }
}
