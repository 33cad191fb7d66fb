//! Application state management

use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use initrack_core::{CharacterStore, Database, Error, Result, TrackerConfig};

/// Main application state
pub struct AppState {
    pub config: TrackerConfig,
    pub store: CharacterStore<Database>,
    data_dir: PathBuf,
}

impl AppState {
    /// Load config, open the database, and read the character collection.
    ///
    /// `config_path` and `data_dir` override the platform locations.
    pub fn new(config_path: Option<PathBuf>, data_dir: Option<PathBuf>) -> Result<Self> {
        let config_path = match config_path {
            Some(path) => path,
            None => Self::project_dirs()?
                .config_dir()
                .join(TrackerConfig::FILE_NAME),
        };
        let config = TrackerConfig::load(&config_path)?;

        let data_dir = match data_dir {
            Some(dir) => dir,
            None => Self::project_dirs()?.data_dir().to_path_buf(),
        };
        let db_path = config.database_path(&data_dir);

        // Ensure parent directory exists
        if let Some(parent) = db_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        tracing::debug!(path = %db_path.display(), "Opening character database");
        let db = Database::open(&db_path)?;
        let store = CharacterStore::load(db, config.storage_key.clone())?;

        Ok(Self {
            config,
            store,
            data_dir,
        })
    }

    fn project_dirs() -> Result<ProjectDirs> {
        ProjectDirs::from("dev", "initrack", "initrack").ok_or_else(|| {
            Error::Io(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                "Could not determine data directory",
            ))
        })
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }
}
