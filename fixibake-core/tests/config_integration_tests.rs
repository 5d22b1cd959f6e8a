// fixibake-core/tests/config_integration_tests.rs
use anyhow::Result;
use std::io::Write;
use tempfile::NamedTempFile;

use fixibake_core::config::{self, DetectionConfig, LimitsConfig};
use fixibake_core::{FixibakeError, DEFAULT_ENCODINGS, DEFAULT_MAX_CHARS};

fn yaml_file(content: &str) -> Result<NamedTempFile> {
    let mut file = NamedTempFile::new()?;
    file.write_all(content.as_bytes())?;
    Ok(file)
}

#[test]
fn test_load_default_config() -> Result<()> {
    let config = DetectionConfig::load_default()?;
    assert_eq!(
        config.encodings.as_deref().map(|v| v.len()),
        Some(DEFAULT_ENCODINGS.len())
    );
    assert_eq!(config.limits.max_chars, Some(DEFAULT_MAX_CHARS));
    Ok(())
}

#[test]
fn test_load_from_file() -> Result<()> {
    let file = yaml_file(
        r#"
encodings:
  - shift_jis
  - utf-8
limits:
  max_chars: 500
"#,
    )?;
    let config = DetectionConfig::load_from_file(file.path())?;
    assert_eq!(
        config.encodings,
        Some(vec!["shift_jis".to_string(), "utf-8".to_string()])
    );
    assert_eq!(config.limits.max_chars, Some(500));
    assert_eq!(config.limits.max_entries, None);

    let resolved = config.resolve()?;
    let labels: Vec<&str> = resolved.candidates.iter().map(|c| c.label()).collect();
    assert_eq!(labels, ["shift_jis", "utf-8"]);
    assert_eq!(resolved.limits.max_chars, 500);
    Ok(())
}

#[test]
fn test_load_from_file_rejects_unknown_label() -> Result<()> {
    let file = yaml_file("encodings: [utf-8, klingon]\n")?;
    let err = DetectionConfig::load_from_file(file.path()).unwrap_err();
    let root = err
        .chain()
        .find_map(|e| e.downcast_ref::<FixibakeError>())
        .expect("a FixibakeError in the chain");
    assert!(matches!(root, FixibakeError::UnknownEncoding(l) if l == "klingon"));
    Ok(())
}

#[test]
fn test_load_from_file_rejects_zero_limit() -> Result<()> {
    let file = yaml_file("limits:\n  text_prefix_bytes: 0\n")?;
    assert!(DetectionConfig::load_from_file(file.path()).is_err());
    Ok(())
}

#[test]
fn test_load_from_file_rejects_malformed_yaml() -> Result<()> {
    let file = yaml_file("encodings: [utf-8\n")?;
    let err = DetectionConfig::load_from_file(file.path()).unwrap_err();
    assert!(err.to_string().contains("Failed to parse config file"));
    Ok(())
}

#[test]
fn test_missing_file_is_reported() {
    let err = DetectionConfig::load_from_file("/no/such/config.yaml").unwrap_err();
    assert!(err.to_string().contains("Failed to read config file"));
}

#[test]
fn test_merge_user_file_over_defaults() -> Result<()> {
    let file = yaml_file("limits:\n  max_entries: 5\n")?;
    let user = DetectionConfig::load_from_file(file.path())?;
    let merged = config::merge_config(DetectionConfig::load_default()?, Some(user));

    let resolved = merged.resolve()?;
    assert_eq!(resolved.candidates.len(), DEFAULT_ENCODINGS.len());
    assert_eq!(resolved.limits.max_entries, 5);
    assert_eq!(resolved.limits.max_chars, DEFAULT_MAX_CHARS);
    Ok(())
}

#[test]
fn test_duplicate_labels_are_kept() -> Result<()> {
    let config = DetectionConfig {
        encodings: Some(vec!["gbk".into(), "GBK".into()]),
        limits: LimitsConfig::default(),
    };
    assert_eq!(config.resolve()?.candidates.len(), 2);
    Ok(())
}
