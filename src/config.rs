use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Serializable description of a [`TempDirectory`](crate::TempDirectory).
///
/// Every field is optional in TOML:
///
/// ```toml
/// location = "/var/tmp/builds"
/// name = "job-42"
/// force = true
/// delete_on_drop = true
/// ```
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
#[serde(default)]
pub struct TempDirConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub force: bool,
    pub delete_on_drop: bool,
}

impl TempDirConfig {
    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    pub fn to_toml_string(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::TempDirError;
    use anyhow::Result;

    #[test]
    fn test_empty_document_is_default() -> Result<()> {
        assert_eq!(TempDirConfig::from_toml_str("")?, TempDirConfig::default());
        Ok(())
    }

    #[test]
    fn test_parse_full_document() -> Result<()> {
        let config = TempDirConfig::from_toml_str(
            r#"
location = "/var/tmp/builds"
name = "job-42"
force = true
delete_on_drop = true
"#,
        )?;
        assert_eq!(config.location.as_deref(), Some("/var/tmp/builds"));
        assert_eq!(config.name.as_deref(), Some("job-42"));
        assert!(config.force);
        assert!(config.delete_on_drop);
        Ok(())
    }

    #[test]
    fn test_wrong_type_is_config_error() {
        match TempDirConfig::from_toml_str("force = \"yes\"") {
            Err(TempDirError::Config(_)) => {}
            other => panic!("expected Config error, got {:?}", other),
        }
    }

    #[test]
    fn test_load_from_file() -> Result<()> {
        let root = tempfile::tempdir()?;
        let path = root.path().join("tempdir.toml");
        let written = TempDirConfig {
            location: Some("/srv/scratch".to_string()),
            name: None,
            force: true,
            delete_on_drop: false,
        };
        fs::write(&path, written.to_toml_string()?)?;

        assert_eq!(TempDirConfig::load(&path)?, written);
        Ok(())
    }
}
