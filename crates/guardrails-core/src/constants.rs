//! Shared constants for the Guardrails compliance engine.

/// Guardrails version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Project configuration file name, looked up in the root directory.
pub const PROJECT_CONFIG_FILE: &str = "guardrails.toml";

/// Extra ignore file honoured by the scanner, gitignore syntax.
pub const IGNORE_FILE: &str = ".guardrailsignore";

/// Default component source directory, relative to the root.
pub const DEFAULT_SRC_DIR: &str = "src";

/// Maximum file size in bytes for scanning (default: 1MB).
pub const DEFAULT_MAX_FILE_SIZE: u64 = 1_048_576;

/// Default number of threads (0 = auto-detect).
pub const DEFAULT_THREADS: usize = 0;

/// Default source extensions considered component code.
pub const DEFAULT_EXTENSIONS: [&str; 8] = ["ts", "tsx", "mts", "cts", "js", "jsx", "mjs", "cjs"];

/// Default package required in the root `package.json`.
pub const DEFAULT_REQUIRED_DEPENDENCY: &str = "@guardrails/eslint-config";

/// Default lint preset the ESLint configuration must extend.
pub const DEFAULT_LINT_PRESET: &str = "@guardrails/eslint-config";

/// Default command a CI workflow must invoke.
pub const DEFAULT_CI_COMMAND: &str = "guardrails verify";

/// Sentinel layer name for code with no assigned level.
pub const FOUNDATION_LAYER: &str = "foundation";
