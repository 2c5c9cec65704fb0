//! Builder for creating and configuring Tempo instances.

use std::path::{Path, PathBuf};

use tokio::task;

use super::Tempo;
use crate::{
    db::Database,
    error::{Result, TempoError},
    reconciler::DisambiguationPolicy,
};

/// Builder for creating and configuring [`Tempo`] instances.
#[derive(Debug, Clone, Default)]
pub struct TempoBuilder {
    database_path: Option<PathBuf>,
    policy: DisambiguationPolicy,
}

impl TempoBuilder {
    /// Creates a new builder with default settings: XDG database path and
    /// the strict disambiguation policy.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a custom database file path.
    ///
    /// If not specified, uses XDG Base Directory specification:
    /// `$XDG_DATA_HOME/tempo/tempo.db` or `~/.local/share/tempo/tempo.db`
    pub fn with_database_path<P: AsRef<Path>>(mut self, path: Option<P>) -> Self {
        if let Some(path) = path {
            self.database_path = Some(path.as_ref().to_path_buf());
        }
        self
    }

    /// Sets the gap/fold tie-break policy applied by the workflow.
    ///
    /// The default is strict: ambiguous civil times are surfaced as
    /// errors rather than resolved.
    pub fn with_policy(mut self, policy: DisambiguationPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Builds the configured coordinator, initializing the database.
    ///
    /// # Errors
    ///
    /// Returns `TempoError::FileSystem` if the database path is invalid
    /// and `TempoError::Database` if schema initialization fails.
    pub async fn build(self) -> Result<Tempo> {
        let db_path = if let Some(path) = self.database_path {
            path
        } else {
            Self::default_database_path()?
        };

        if let Some(parent) = db_path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| TempoError::FileSystem {
                path: parent.to_path_buf(),
                source: e,
            })?;
        }

        let db_path_clone = db_path.clone();
        task::spawn_blocking(move || {
            let _db = Database::new(&db_path_clone)?;
            Ok::<(), TempoError>(())
        })
        .await
        .map_err(|e| TempoError::Configuration {
            message: format!("Task join error: {e}"),
        })??;

        Ok(Tempo::new(db_path, self.policy))
    }

    /// Returns the default database path following XDG Base Directory
    /// specification.
    fn default_database_path() -> Result<PathBuf> {
        xdg::BaseDirectories::with_prefix("tempo")
            .place_data_file("tempo.db")
            .map_err(|e| TempoError::XdgDirectory(e.to_string()))
    }
}
