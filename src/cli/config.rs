use crate::cli::global::GlobalArgs;
use sigilwire::Settings;
use std::path::Path;

/// Loads settings with user overrides, then the `--config` file if given.
///
/// Unlike the implicit override locations, an explicit `--config` file
/// that cannot be loaded is an error.
pub fn load_settings(global: &GlobalArgs) -> Result<Settings, Box<dyn std::error::Error>> {
    let mut settings = Settings::load_with_overrides()?;

    if let Some(path) = &global.config {
        let expanded = shellexpand::tilde(path);
        let path = Path::new(expanded.as_ref());
        let explicit = Settings::load_from_file(path)
            .map_err(|e| format!("Failed to load config from {}: {}", path.display(), e))?;
        settings.merge(explicit);
    }

    Ok(settings)
}

/// Resolves the input size limit: CLI flag, then settings.
pub fn max_size(global: &GlobalArgs, settings: &Settings) -> usize {
    global.max_size.unwrap_or_else(|| settings.max_size())
}
