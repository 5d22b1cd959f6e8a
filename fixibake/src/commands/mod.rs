// fixibake/src/commands/mod.rs
pub mod detect;
pub mod encodings;

use std::path::Path;

use anyhow::Result;
use log::debug;

use fixibake_core::{merge_config, DetectionConfig};

/// Builds the effective detection settings.
///
/// Built-in defaults come first, then the user's config file, then any
/// `--encodings` override from the command line.
pub fn load_detection_config(config_path: Option<&Path>, encodings: &[String]) -> Result<DetectionConfig> {
    let default_config = DetectionConfig::load_default()?;
    let user_config = config_path.map(DetectionConfig::load_from_file).transpose()?;
    let mut merged = merge_config(default_config, user_config);

    if !encodings.is_empty() {
        debug!("Overriding candidate encodings from the command line: {:?}", encodings);
        merged = merged.with_encodings(encodings.iter().cloned());
    }
    Ok(merged)
}
