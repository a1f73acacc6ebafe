//! Builder for creating and configuring Planner instances.

use std::{
    path::{Path, PathBuf},
    sync::Arc,
    time::Duration,
};

use log::debug;

use super::Planner;
use crate::{
    content::{DEFAULT_TIMEOUT, HttpGenerator, Storyteller, TextGenerator},
    error::{PathwayError, Result},
};

/// Builder for creating and configuring Planner instances.
#[derive(Clone)]
pub struct PlannerBuilder {
    database_path: Option<PathBuf>,
    generator_url: Option<String>,
    generator_timeout: Duration,
    generator: Option<Arc<dyn TextGenerator>>,
}

impl PlannerBuilder {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self {
            database_path: None,
            generator_url: None,
            generator_timeout: DEFAULT_TIMEOUT,
            generator: None,
        }
    }

    /// Sets a custom database file path.
    ///
    /// If not specified, uses XDG Base Directory specification:
    /// `$XDG_DATA_HOME/pathway/pathway.db` or `~/.local/share/pathway/pathway.db`
    pub fn with_database_path<P: AsRef<Path>>(mut self, path: Option<P>) -> Self {
        if let Some(path) = path {
            self.database_path = Some(path.as_ref().to_path_buf());
        }
        self
    }

    /// Sets the text generation endpoint used for stories and affirmations.
    pub fn with_generator_url(mut self, url: Option<String>) -> Self {
        if let Some(url) = url {
            self.generator_url = Some(url);
        }
        self
    }

    /// Sets the per-request timeout for the generation endpoint.
    pub fn with_generator_timeout(mut self, timeout: Duration) -> Self {
        self.generator_timeout = timeout;
        self
    }

    /// Uses the given generator instead of an HTTP endpoint.
    pub fn with_generator(mut self, generator: Arc<dyn TextGenerator>) -> Self {
        self.generator = Some(generator);
        self
    }

    /// Builds the configured planner instance.
    ///
    /// # Errors
    ///
    /// Returns `PathwayError::FileSystem` if the database directory cannot be
    /// created, `PathwayError::Database` if schema initialization fails, and
    /// `PathwayError::InvalidInput` for an empty generator URL.
    pub async fn build(self) -> Result<Planner> {
        let db_path = match self.database_path {
            Some(path) => path,
            None => Self::default_database_path()?,
        };

        if let Some(parent) = db_path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|e| PathwayError::FileSystem {
                path: parent.to_path_buf(),
                source: e,
            })?;
        }

        let generator: Option<Arc<dyn TextGenerator>> = match (self.generator, self.generator_url)
        {
            (Some(generator), _) => Some(generator),
            (None, Some(url)) => {
                let generator = HttpGenerator::new(url, self.generator_timeout)?;
                debug!("Using text generation endpoint {}", generator.endpoint());
                Some(Arc::new(generator))
            }
            (None, None) => None,
        };

        let planner = Planner::new(db_path, generator.map(Storyteller::new));
        planner.with_database(|_| Ok(())).await?;
        debug!("Planner ready at {}", planner.db_path.display());

        Ok(planner)
    }

    /// Returns the default database path following XDG Base Directory
    /// specification.
    fn default_database_path() -> Result<PathBuf> {
        xdg::BaseDirectories::with_prefix("pathway")
            .place_data_file("pathway.db")
            .map_err(|e| PathwayError::XdgDirectory(e.to_string()))
    }
}

impl Default for PlannerBuilder {
    fn default() -> Self {
        Self::new()
    }
}
