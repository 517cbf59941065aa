//! Builder for creating and configuring Tracker instances.

use std::{
    path::{Path, PathBuf},
    sync::Arc,
};

use log::debug;
use tokio::task;

use super::Tracker;
use crate::{
    ai::{GeminiClient, OfflineGenerator, TextGenerator},
    config::AiConfig,
    db::Database,
    error::{Result, TrackerError},
};

/// Builder for creating and configuring Tracker instances.
#[derive(Clone, Default)]
pub struct TrackerBuilder {
    database_path: Option<PathBuf>,
    ai_config: Option<AiConfig>,
    generator: Option<Arc<dyn TextGenerator>>,
}

impl TrackerBuilder {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a custom database file path.
    ///
    /// If not specified, uses the XDG Base Directory specification:
    /// `$XDG_DATA_HOME/milesync/milesync.db` or
    /// `~/.local/share/milesync/milesync.db`
    pub fn with_database_path<P: AsRef<Path>>(mut self, path: Option<P>) -> Self {
        if let Some(path) = path {
            self.database_path = Some(path.as_ref().to_path_buf());
        }
        self
    }

    /// Sets the generative text configuration. Defaults to
    /// [`AiConfig::from_env`].
    pub fn with_ai_config(mut self, config: AiConfig) -> Self {
        self.ai_config = Some(config);
        self
    }

    /// Uses a specific text generator instead of one built from the
    /// configuration. The configured timeout still applies.
    pub fn with_generator(mut self, generator: Arc<dyn TextGenerator>) -> Self {
        self.generator = Some(generator);
        self
    }

    /// Builds the configured tracker instance.
    ///
    /// # Errors
    ///
    /// Returns `TrackerError::FileSystem` if the database directory cannot be
    /// created, `TrackerError::Database` if database initialization fails and
    /// `TrackerError::Configuration` if the text client cannot be built.
    pub async fn build(self) -> Result<Tracker> {
        let db_path = match self.database_path {
            Some(path) => path,
            None => Self::default_database_path()?,
        };

        if let Some(parent) = db_path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent).map_err(|e| TrackerError::FileSystem {
                    path: parent.to_path_buf(),
                    source: e,
                })?;
            }
        }

        let init_path = db_path.clone();
        task::spawn_blocking(move || Database::new(&init_path).map(|_| ()))
            .await
            .map_err(TrackerError::join)??;

        let config = self.ai_config.unwrap_or_else(AiConfig::from_env);
        let generator = match self.generator {
            Some(generator) => generator,
            None => Self::generator_for(&config)?,
        };
        debug!(
            "Tracker using {} at {} (timeout {:?})",
            generator.provider(),
            db_path.display(),
            config.timeout
        );

        Ok(Tracker::new(db_path, generator, config.timeout))
    }

    fn generator_for(config: &AiConfig) -> Result<Arc<dyn TextGenerator>> {
        if config.api_key.is_none() {
            return Ok(Arc::new(OfflineGenerator));
        }
        let client = GeminiClient::from_config(config).map_err(|e| TrackerError::Configuration {
            message: format!("Failed to build Gemini client: {e}"),
        })?;
        Ok(Arc::new(client))
    }

    /// Returns the default database path following XDG Base Directory
    /// specification.
    fn default_database_path() -> Result<PathBuf> {
        xdg::BaseDirectories::with_prefix("milesync")
            .place_data_file("milesync.db")
            .map_err(|e| TrackerError::XdgDirectory(e.to_string()))
    }
}
