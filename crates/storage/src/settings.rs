use std::{fs, io::ErrorKind, path::Path};

use anyhow::Context;
use gymplan_domain::Settings;
use log::debug;

/// Read settings from a JSON file.
///
/// A missing file yields the default settings, missing fields their default values.
pub fn load(path: &Path) -> anyhow::Result<Settings> {
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(err) if err.kind() == ErrorKind::NotFound => {
            debug!("using default settings, {} not found", path.display());
            return Ok(Settings::default());
        }
        Err(err) => {
            return Err(err)
                .with_context(|| format!("failed to read {}", path.display()));
        }
    };
    serde_json::from_str(&content)
        .with_context(|| format!("invalid settings in {}", path.display()))
}
