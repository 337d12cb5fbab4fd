use crate::conf::error::ConfigError;
use crate::conf::types::RunConfig;
use std::fs;
use std::path::Path;

/// Reads a TOML run configuration. Relative `source` paths are resolved
/// against the directory holding the file.
pub fn load_run_config(path: &Path) -> Result<RunConfig, ConfigError> {
    let text = fs::read_to_string(path).map_err(|e| ConfigError::read_file(path, e))?;
    let mut config: RunConfig = toml::from_str(&text).map_err(|e| ConfigError::parse(path, e))?;

    if let (Some(source), Some(dir)) = (config.source.as_mut(), path.parent()) {
        if source.is_relative() && source.as_os_str() != crate::scan::STDIN_PATH {
            *source = dir.join(&*source);
        }
    }

    Ok(config)
}
