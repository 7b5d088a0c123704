//! Top-level Guardrails configuration with layered resolution.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::{
    BoundaryConfig, ComplianceConfig, LayerConfig, ScanConfig, SpecConfig, TokenConfig,
};
use crate::constants::PROJECT_CONFIG_FILE;
use crate::errors::ConfigError;

/// Top-level configuration aggregating all sub-configs.
///
/// Resolution order (highest priority first):
/// 1. CLI flags (applied via `apply_cli_overrides`)
/// 2. Environment variables (`GUARDRAILS_*`)
/// 3. Project config (`guardrails.toml` in the root)
/// 4. User config (`~/.guardrails/config.toml`)
/// 5. Compiled defaults
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct GuardrailsConfig {
    pub scan: ScanConfig,
    pub layers: LayerConfig,
    pub boundaries: BoundaryConfig,
    pub tokens: TokenConfig,
    pub spec: SpecConfig,
    pub compliance: ComplianceConfig,
}

/// CLI override arguments that can be applied to a config.
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub src_dir: Option<String>,
    pub scan_max_file_size: Option<u64>,
    pub scan_threads: Option<usize>,
    pub ci_command: Option<String>,
}

impl GuardrailsConfig {
    /// Load configuration for the project rooted at `root`.
    ///
    /// Fails with `RootNotFound` when `root` is not an existing directory;
    /// that is the fatal precondition of every check.
    pub fn load(root: &Path, cli_overrides: Option<&CliOverrides>) -> Result<Self, ConfigError> {
        ensure_root(root)?;
        let mut config = Self::default();

        // Layer 4 (lowest priority): user config
        if let Some(user_config_path) = Self::user_config_path() {
            if user_config_path.exists() {
                match Self::merge_toml_file(&mut config, &user_config_path) {
                    Ok(()) => {}
                    Err(e @ ConfigError::ParseError { .. }) => return Err(e),
                    Err(e) => {
                        tracing::warn!(error = %e, "ignoring unreadable user config");
                    }
                }
            }
        }

        // Layer 3: project config
        let project_config_path = root.join(PROJECT_CONFIG_FILE);
        if project_config_path.exists() {
            Self::merge_toml_file(&mut config, &project_config_path)?;
            tracing::debug!(path = %project_config_path.display(), "loaded project config");
        }

        // Layer 2: environment variables
        Self::apply_env_overrides(&mut config);

        // Layer 1 (highest priority): CLI flags
        if let Some(cli) = cli_overrides {
            Self::apply_cli_overrides(&mut config, cli);
        }

        Self::validate(&config)?;
        Ok(config)
    }

    /// Load configuration from a TOML string (for testing).
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })?;
        Self::validate(&config)?;
        Ok(config)
    }

    /// Validate the configuration values and rule tables.
    pub fn validate(config: &GuardrailsConfig) -> Result<(), ConfigError> {
        if let Some(max_file_size) = config.scan.max_file_size {
            if max_file_size == 0 {
                return Err(ConfigError::ValidationFailed {
                    field: "scan.max_file_size".to_string(),
                    message: "must be greater than 0".to_string(),
                });
            }
        }
        if config.scan.effective_extensions().is_empty() {
            return Err(ConfigError::ValidationFailed {
                field: "scan.extensions".to_string(),
                message: "at least one extension is required".to_string(),
            });
        }
        super::validate_globs("scan.include", &config.scan.include)?;
        config.layers.validate()?;
        config.boundaries.validate()?;
        config.tokens.validate()?;
        config.spec.validate()?;
        super::validate_globs(
            "compliance.violation_test_globs",
            &config.compliance.effective_violation_test_globs(),
        )?;
        Ok(())
    }

    /// Returns the user config path: `~/.guardrails/config.toml`.
    fn user_config_path() -> Option<PathBuf> {
        home_dir().map(|h| h.join(".guardrails").join("config.toml"))
    }

    /// Merge a TOML file into the existing config.
    /// Unknown keys are silently ignored (forward-compatible).
    fn merge_toml_file(config: &mut GuardrailsConfig, path: &Path) -> Result<(), ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
            path: path.display().to_string(),
        })?;

        let file_config: GuardrailsConfig =
            toml::from_str(&content).map_err(|e| ConfigError::ParseError {
                path: path.display().to_string(),
                message: e.to_string(),
            })?;

        Self::merge(config, &file_config);
        Ok(())
    }

    /// Merge `other` into `base`, where `other` values override `base` values
    /// only when `other` has a `Some` (or non-empty) value.
    fn merge(base: &mut GuardrailsConfig, other: &GuardrailsConfig) {
        // Scan
        if other.scan.extensions.is_some() {
            base.scan.extensions = other.scan.extensions.clone();
        }
        if !other.scan.include.is_empty() {
            base.scan.include = other.scan.include.clone();
        }
        if !other.scan.extra_ignore.is_empty() {
            base.scan.extra_ignore = other.scan.extra_ignore.clone();
        }
        if other.scan.max_file_size.is_some() {
            base.scan.max_file_size = other.scan.max_file_size;
        }
        if other.scan.threads.is_some() {
            base.scan.threads = other.scan.threads;
        }
        if other.scan.follow_symlinks.is_some() {
            base.scan.follow_symlinks = other.scan.follow_symlinks;
        }

        // Layers
        if other.layers.definitions.is_some() {
            base.layers.definitions = other.layers.definitions.clone();
        }
        if other.layers.foundation_dirs.is_some() {
            base.layers.foundation_dirs = other.layers.foundation_dirs.clone();
        }

        // Boundaries
        if other.boundaries.forbidden_imports.is_some() {
            base.boundaries.forbidden_imports = other.boundaries.forbidden_imports.clone();
        }
        if !other.boundaries.cross_package.is_empty() {
            base.boundaries.cross_package = other.boundaries.cross_package.clone();
        }
        if other.boundaries.exempt.is_some() {
            base.boundaries.exempt = other.boundaries.exempt.clone();
        }
        if !other.boundaries.aliases.is_empty() {
            base.boundaries.aliases = other.boundaries.aliases.clone();
        }

        // Tokens
        if other.tokens.forbidden_elements.is_some() {
            base.tokens.forbidden_elements = other.tokens.forbidden_elements.clone();
        }
        if other.tokens.exempt.is_some() {
            base.tokens.exempt = other.tokens.exempt.clone();
        }
        if other.tokens.raw_elements_allowed.is_some() {
            base.tokens.raw_elements_allowed = other.tokens.raw_elements_allowed.clone();
        }
        if other.tokens.token_patterns.is_some() {
            base.tokens.token_patterns = other.tokens.token_patterns.clone();
        }

        // Spec
        if other.spec.required_files.is_some() {
            base.spec.required_files = other.spec.required_files.clone();
        }

        // Compliance
        if other.compliance.src_dir.is_some() {
            base.compliance.src_dir = other.compliance.src_dir.clone();
        }
        if other.compliance.required_dependency.is_some() {
            base.compliance.required_dependency = other.compliance.required_dependency.clone();
        }
        if other.compliance.lint_preset.is_some() {
            base.compliance.lint_preset = other.compliance.lint_preset.clone();
        }
        if other.compliance.violation_test_globs.is_some() {
            base.compliance.violation_test_globs =
                other.compliance.violation_test_globs.clone();
        }
        if other.compliance.ci_command.is_some() {
            base.compliance.ci_command = other.compliance.ci_command.clone();
        }
    }

    /// Apply environment variable overrides.
    /// Pattern: `GUARDRAILS_SRC_DIR`, `GUARDRAILS_SCAN_THREADS`, etc.
    fn apply_env_overrides(config: &mut GuardrailsConfig) {
        if let Ok(val) = std::env::var("GUARDRAILS_SRC_DIR") {
            config.compliance.src_dir = Some(val);
        }
        if let Ok(val) = std::env::var("GUARDRAILS_SCAN_MAX_FILE_SIZE") {
            if let Ok(v) = val.parse::<u64>() {
                config.scan.max_file_size = Some(v);
            }
        }
        if let Ok(val) = std::env::var("GUARDRAILS_SCAN_THREADS") {
            if let Ok(v) = val.parse::<usize>() {
                config.scan.threads = Some(v);
            }
        }
        if let Ok(val) = std::env::var("GUARDRAILS_CI_COMMAND") {
            config.compliance.ci_command = Some(val);
        }
    }

    /// Apply CLI overrides (highest priority).
    fn apply_cli_overrides(config: &mut GuardrailsConfig, cli: &CliOverrides) {
        if let Some(ref v) = cli.src_dir {
            config.compliance.src_dir = Some(v.clone());
        }
        if let Some(v) = cli.scan_max_file_size {
            config.scan.max_file_size = Some(v);
        }
        if let Some(v) = cli.scan_threads {
            config.scan.threads = Some(v);
        }
        if let Some(ref v) = cli.ci_command {
            config.compliance.ci_command = Some(v.clone());
        }
    }

    /// Serialize the config back to TOML.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::ParseError {
            path: "<serialization>".to_string(),
            message: e.to_string(),
        })
    }
}

/// Fail fast when a root directory is missing or unreadable.
pub fn ensure_root(root: &Path) -> Result<(), ConfigError> {
    let metadata = std::fs::metadata(root).map_err(|e| match e.kind() {
        std::io::ErrorKind::NotFound => ConfigError::RootNotFound {
            path: root.to_path_buf(),
        },
        _ => ConfigError::RootUnreadable {
            path: root.to_path_buf(),
            message: e.to_string(),
        },
    })?;
    if !metadata.is_dir() {
        return Err(ConfigError::RootNotFound {
            path: root.to_path_buf(),
        });
    }
    std::fs::read_dir(root).map_err(|e| ConfigError::RootUnreadable {
        path: root.to_path_buf(),
        message: e.to_string(),
    })?;
    Ok(())
}

/// Cross-platform home directory resolution.
fn home_dir() -> Option<PathBuf> {
    std::env::var_os("HOME")
        .or_else(|| std::env::var_os("USERPROFILE"))
        .map(PathBuf::from)
}
