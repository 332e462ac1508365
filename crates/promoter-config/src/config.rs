use std::path::Path;

use promoter_core::BumpLevel;

use crate::ConfigError;
use crate::env::debug_resolver_requested;
use crate::settings::{PromotionSection, SettingsFile};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PromotionConfig {
    level: BumpLevel,
    strict: bool,
    debug_resolver: bool,
}

impl PromotionConfig {
    #[must_use]
    pub fn level(&self) -> BumpLevel {
        self.level
    }

    #[must_use]
    pub fn strict(&self) -> bool {
        self.strict
    }

    #[must_use]
    pub fn debug_resolver(&self) -> bool {
        self.debug_resolver
    }

    #[must_use]
    pub fn with_level(mut self, level: BumpLevel) -> Self {
        self.level = level;
        self
    }

    #[must_use]
    pub fn with_strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    #[must_use]
    pub fn with_debug_resolver(mut self, debug_resolver: bool) -> Self {
        self.debug_resolver = debug_resolver;
        self
    }

    /// Applies `DEBUG_RESOLVER` from the process environment.
    #[must_use]
    pub fn with_env(self) -> Self {
        self.with_env_lookup(|key| std::env::var(key).ok())
    }

    #[must_use]
    pub fn with_env_lookup<F>(mut self, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        if debug_resolver_requested(lookup) {
            self.debug_resolver = true;
        }
        self
    }
}

fn build_config(section: Option<PromotionSection>) -> Result<PromotionConfig, ConfigError> {
    let defaults = PromotionConfig::default();
    let Some(section) = section else {
        return Ok(defaults);
    };

    let level = match section.level {
        Some(raw) => raw.parse::<BumpLevel>()?,
        None => defaults.level,
    };

    Ok(PromotionConfig {
        level,
        strict: section.strict.unwrap_or(defaults.strict),
        debug_resolver: defaults.debug_resolver,
    })
}

/// # Errors
///
/// Returns an error if the document is not valid TOML or names an unknown level.
pub fn parse_config(content: &str) -> Result<PromotionConfig, ConfigError> {
    let settings: SettingsFile = toml::from_str(content)?;
    build_config(settings.promotion)
}

/// # Errors
///
/// Returns an error if the file cannot be read or its contents are rejected by
/// [`parse_config`].
pub fn load_config(path: &Path) -> Result<PromotionConfig, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    parse_config(&content).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source: Box::new(source),
    })
}

#[cfg(test)]
mod tests {
    use promoter_core::CoreError;

    use super::*;

    #[test]
    fn empty_document_yields_defaults() {
        let config = parse_config("").expect("parse");
        assert_eq!(config, PromotionConfig::default());
        assert_eq!(config.level(), BumpLevel::Major);
        assert!(!config.strict());
        assert!(!config.debug_resolver());
    }

    #[test]
    fn reads_level_and_strict() {
        let config = parse_config(
            r#"
[promotion]
level = "patch"
strict = true
"#,
        )
        .expect("parse");

        assert_eq!(config.level(), BumpLevel::Patch);
        assert!(config.strict());
    }

    #[test]
    fn missing_keys_fall_back_to_defaults() {
        let config = parse_config("[promotion]\nstrict = true\n").expect("parse");
        assert_eq!(config.level(), BumpLevel::Major);
        assert!(config.strict());
    }

    #[test]
    fn unrelated_tables_are_ignored() {
        let config = parse_config("[source]\nremote = \"https://rubygems.org\"\n").expect("parse");
        assert_eq!(config, PromotionConfig::default());
    }

    #[test]
    fn unknown_level_is_rejected() {
        let err = parse_config("[promotion]\nlevel = \"huge\"\n").expect_err("should fail");
        assert!(matches!(
            err,
            ConfigError::InvalidLevel(CoreError::InvalidBumpLevel(ref level)) if level == "huge"
        ));
    }

    #[test]
    fn wrong_type_is_a_toml_error() {
        let err = parse_config("[promotion]\nstrict = \"yes\"\n").expect_err("should fail");
        assert!(matches!(err, ConfigError::TomlParse(_)));
    }

    #[test]
    fn env_lookup_enables_debug() {
        let config = PromotionConfig::default()
            .with_env_lookup(|key| (key == "DEBUG_RESOLVER").then(|| "1".to_string()));
        assert!(config.debug_resolver());
    }

    #[test]
    fn env_lookup_never_disables_explicit_debug() {
        let config = PromotionConfig::default()
            .with_debug_resolver(true)
            .with_env_lookup(|_| None);
        assert!(config.debug_resolver());
    }
}
