//! Mechanic settings loader.

use std::path::Path;

use crate::loaders::{LoadResult, read_file};
use crate::settings::MechanicSettings;

/// Loader for mechanic settings from TOML files.
pub struct SettingsLoader;

impl SettingsLoader {
    /// Load settings from a TOML file, migrating stale versions in place.
    ///
    /// When migration changes anything the file is rewritten so the next
    /// load sees the current version.
    pub fn load(path: &Path) -> LoadResult<MechanicSettings> {
        let content = read_file(path)?;
        let mut settings: MechanicSettings = toml::from_str(&content)
            .map_err(|e| anyhow::anyhow!("Failed to parse settings TOML: {}", e))?;

        if settings.migrate() {
            Self::save(path, &settings)?;
        }

        Ok(settings)
    }

    /// Load settings, writing a default file first when none exists.
    pub fn load_or_default(path: &Path) -> LoadResult<MechanicSettings> {
        if !path.exists() {
            let settings = MechanicSettings::default();
            Self::save(path, &settings)?;
            return Ok(settings);
        }
        Self::load(path)
    }

    /// Write settings as pretty TOML.
    pub fn save(path: &Path, settings: &MechanicSettings) -> LoadResult<()> {
        let content = toml::to_string_pretty(settings)
            .map_err(|e| anyhow::anyhow!("Failed to serialize settings TOML: {}", e))?;
        std::fs::write(path, content)
            .map_err(|e| anyhow::anyhow!("Failed to write file {}: {}", path.display(), e))?;
        Ok(())
    }
}
