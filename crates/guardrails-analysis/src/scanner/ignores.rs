//! Exclusion patterns for component source trees.
//!
//! Dependency caches, build output and tool state are never component code.
//! On top of the defaults the scanner honours `.gitignore`, `.guardrailsignore`
//! and the configured extra patterns.

use std::path::{Path, PathBuf};

use ignore::gitignore::{Gitignore, GitignoreBuilder};

use guardrails_core::constants::IGNORE_FILE;

/// Default directories to always ignore.
pub const DEFAULT_IGNORE_DIRS: &[&str] = &[
    // Package managers
    "node_modules",
    ".pnpm",
    ".pnpm-store",
    ".yarn",
    ".npm",
    "bower_components",
    // Version control
    ".git",
    ".svn",
    ".hg",
    // IDE/Editor
    ".idea",
    ".vscode",
    // Build outputs
    "dist",
    "build",
    "out",
    "lib-dist",
    "storybook-static",
    // Coverage/Testing
    "coverage",
    ".nyc_output",
    "__snapshots__",
    // Caches
    ".cache",
    ".parcel-cache",
    ".next",
    ".nuxt",
    ".turbo",
    ".vercel",
    ".storybook",
    // Temp
    "tmp",
    ".tmp",
];

/// Generated or bundled files that are never hand-written components.
pub const DEFAULT_IGNORE_FILES: &[&str] = &[
    "*.min.js",
    "*.min.css",
    "*.map",
    "*.generated.*",
    "*.d.ts.map",
];

/// Gitignore-style matcher built from defaults + project ignore files.
pub struct IgnorePatterns {
    gitignore: Gitignore,
    /// Ignore files of an enclosing project root, with the scanned root's
    /// path below it.
    project: Option<(Gitignore, PathBuf)>,
}

impl IgnorePatterns {
    /// Create ignore patterns from defaults + custom patterns.
    pub fn new(root: &Path, extra_patterns: &[String]) -> Self {
        let mut builder = GitignoreBuilder::new(root);

        for pattern in DEFAULT_IGNORE_DIRS.iter().chain(DEFAULT_IGNORE_FILES) {
            let _ = builder.add_line(None, pattern);
        }

        for pattern in extra_patterns {
            if let Err(e) = builder.add_line(None, pattern) {
                tracing::warn!(pattern = %pattern, error = %e, "skipping invalid ignore pattern");
            }
        }

        add_ignore_files(&mut builder, root);
        Self {
            gitignore: build(builder),
            project: None,
        }
    }

    /// Also honour the ignore files of `project_root`, which encloses `root`.
    /// A no-op when both are the same directory.
    pub fn with_project_root(mut self, root: &Path, project_root: &Path) -> Self {
        let Ok(prefix) = root.strip_prefix(project_root) else {
            return self;
        };
        if prefix.as_os_str().is_empty() {
            return self;
        }
        let mut builder = GitignoreBuilder::new(project_root);
        add_ignore_files(&mut builder, project_root);
        self.project = Some((build(builder), prefix.to_path_buf()));
        self
    }

    /// Check if a path (relative to the root) should be ignored.
    pub fn is_ignored(&self, path: &Path, is_dir: bool) -> bool {
        if self.gitignore.matched(path, is_dir).is_ignore() {
            return true;
        }
        self.project.as_ref().is_some_and(|(gitignore, prefix)| {
            gitignore.matched(prefix.join(path), is_dir).is_ignore()
        })
    }
}

fn add_ignore_files(builder: &mut GitignoreBuilder, dir: &Path) {
    for name in [IGNORE_FILE, ".gitignore"] {
        let file = dir.join(name);
        if file.exists() {
            if let Some(e) = builder.add(&file) {
                tracing::warn!(path = %file.display(), error = %e, "partially invalid ignore file");
            }
        }
    }
}

fn build(builder: GitignoreBuilder) -> Gitignore {
    builder.build().unwrap_or_else(|e| {
        tracing::warn!(error = %e, "ignore patterns failed to compile, using none");
        Gitignore::empty()
    })
}
