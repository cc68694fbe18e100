use anyhow::Result;
use cvpress_runtime::Config;
use once_cell::sync::OnceCell;
use std::path::{Path, PathBuf};

pub struct ExecutionContext {
    data_dir: PathBuf,
    config: OnceCell<Config>,
}

impl ExecutionContext {
    pub fn new(data_dir: PathBuf) -> Self {
        Self {
            data_dir,
            config: OnceCell::new(),
        }
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    pub fn config_path(&self) -> PathBuf {
        Config::path_in(&self.data_dir)
    }

    /// Loads the config on first access; a missing file yields defaults.
    pub fn config(&self) -> Result<&Config> {
        self.config.get_or_try_init(|| {
            let config = Config::load_from(&self.config_path())?;
            Ok(config)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn config_loads_lazily() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("config.toml");
        fs::write(&config_path, "[browser]\ndownload = true\n").unwrap();

        let ctx = ExecutionContext::new(temp_dir.path().to_path_buf());
        assert!(
            ctx.config.get().is_none(),
            "Config should not be loaded initially"
        );

        let config = ctx.config().unwrap();
        assert!(config.browser.download);
        assert!(
            ctx.config.get().is_some(),
            "Config should be loaded after access"
        );
    }

    #[test]
    fn missing_config_falls_back_to_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let ctx = ExecutionContext::new(temp_dir.path().to_path_buf());

        let config = ctx.config().unwrap();
        assert!(!config.browser.download);
        assert_eq!(config.browser.timeout_secs, 60);
    }
}
