//! Deterministic source tree walker.
//!
//! Walks single-threaded so the candidate list is reproducible, then sorts by
//! relative path. Per-file problems become findings; only a missing root is
//! fatal, and that is checked before a `Scanner` is built.

use std::fs;
use std::path::{Path, PathBuf};

use guardrails_core::config::ScanConfig;
use guardrails_core::errors::{ConfigError, FileFinding, ScanError};
use guardrails_core::types::collections::FxHashSet;

use super::filter::PathFilter;
use super::ignores::IgnorePatterns;
use super::types::{ScanResult, ScannedFile};

/// Candidate discovery for one root directory.
pub struct Scanner {
    root: PathBuf,
    ignores: IgnorePatterns,
    include: PathFilter,
    /// `None` keeps every file regardless of extension.
    extensions: Option<FxHashSet<String>>,
    max_file_size: u64,
    follow_symlinks: bool,
}

impl Scanner {
    /// Build a scanner for component sources under `root`.
    pub fn new(root: &Path, config: &ScanConfig) -> Result<Self, ConfigError> {
        Ok(Self {
            root: root.to_path_buf(),
            ignores: IgnorePatterns::new(root, &config.extra_ignore),
            include: PathFilter::new("scan.include", &config.include)?,
            extensions: Some(
                config
                    .effective_extensions()
                    .into_iter()
                    .map(|e| e.trim_start_matches('.').to_ascii_lowercase())
                    .collect(),
            ),
            max_file_size: config.effective_max_file_size(),
            follow_symlinks: config.effective_follow_symlinks(),
        })
    }

    /// Also apply the ignore files found in `project_root`.
    pub fn with_project_root(mut self, project_root: &Path) -> Self {
        self.ignores = self.ignores.with_project_root(&self.root, project_root);
        self
    }

    /// Build a scanner that keeps every non-ignored file, whatever its type.
    /// Project-level checks use it to look for test and workflow files.
    pub fn all_files(root: &Path, config: &ScanConfig) -> Self {
        Self {
            root: root.to_path_buf(),
            ignores: IgnorePatterns::new(root, &config.extra_ignore),
            include: PathFilter::empty(),
            extensions: None,
            max_file_size: u64::MAX,
            follow_symlinks: config.effective_follow_symlinks(),
        }
    }

    /// Walk the tree and split candidates by the `exempt` predicate.
    pub fn scan(&self, exempt: &PathFilter) -> ScanResult {
        let mut files = Vec::new();
        let mut errors = Vec::new();
        let mut visited = FxHashSet::default();
        self.walk_dir(&self.root, &mut files, &mut errors, &mut visited);

        files.sort_by(|a: &ScannedFile, b| a.relative_path.cmp(&b.relative_path));
        let before = files.len();
        files.retain(|f| !exempt.is_match(&f.relative_path));
        let exempt_count = before - files.len();
        errors.sort();

        tracing::debug!(
            root = %self.root.display(),
            candidates = files.len(),
            exempt = exempt_count,
            errors = errors.len(),
            "scan complete"
        );

        ScanResult {
            root: self.root.clone(),
            files,
            exempt: exempt_count,
            errors,
        }
    }

    fn walk_dir(
        &self,
        dir: &Path,
        files: &mut Vec<ScannedFile>,
        errors: &mut Vec<FileFinding>,
        visited: &mut FxHashSet<PathBuf>,
    ) {
        if self.follow_symlinks {
            // Symlink loops would otherwise recurse forever.
            if let Ok(canonical) = dir.canonicalize() {
                if !visited.insert(canonical) {
                    return;
                }
            }
        }

        let entries = match fs::read_dir(dir) {
            Ok(e) => e,
            Err(e) => {
                errors.push(FileFinding::new(
                    self.relative(dir),
                    ScanError::from_io(dir.to_path_buf(), e),
                ));
                return;
            }
        };

        for entry in entries.flatten() {
            let path = entry.path();
            let Ok(file_type) = entry.file_type() else {
                continue;
            };
            let (is_dir, is_file) = if file_type.is_symlink() {
                if !self.follow_symlinks {
                    continue;
                }
                match fs::metadata(&path) {
                    Ok(m) => (m.is_dir(), m.is_file()),
                    Err(_) => continue,
                }
            } else {
                (file_type.is_dir(), file_type.is_file())
            };

            let relative = path.strip_prefix(&self.root).unwrap_or(&path);
            if is_dir {
                if !self.ignores.is_ignored(relative, true) {
                    self.walk_dir(&path, files, errors, visited);
                }
            } else if is_file {
                if self.ignores.is_ignored(relative, false) || !self.keeps_extension(&path) {
                    continue;
                }
                let relative_path = to_slash(relative);
                if !self.include.patterns().is_empty() && !self.include.is_match(&relative_path) {
                    continue;
                }
                match fs::metadata(&path) {
                    Ok(meta) if meta.len() > self.max_file_size => {
                        errors.push(FileFinding::new(
                            relative_path,
                            ScanError::MaxFileSizeExceeded {
                                path: path.clone(),
                                size: meta.len(),
                                max: self.max_file_size,
                            },
                        ));
                    }
                    Ok(meta) => files.push(ScannedFile {
                        path,
                        relative_path,
                        size: meta.len(),
                    }),
                    Err(e) => {
                        errors.push(FileFinding::new(relative_path, ScanError::from_io(path, e)));
                    }
                }
            }
        }
    }

    fn keeps_extension(&self, path: &Path) -> bool {
        let Some(extensions) = &self.extensions else {
            return true;
        };
        path.extension()
            .and_then(|e| e.to_str())
            .is_some_and(|e| extensions.contains(&e.to_ascii_lowercase()))
    }

    fn relative(&self, path: &Path) -> String {
        to_slash(path.strip_prefix(&self.root).unwrap_or(path))
    }
}

/// Render a relative path with `/` separators on every platform.
pub fn to_slash(path: &Path) -> String {
    path.components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn write(root: &Path, rel: &str, content: &str) {
        let path = root.join(rel);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, content).unwrap();
    }

    #[test]
    fn collects_sorted_component_files() {
        let dir = tempfile::tempdir().unwrap();
        write(dir.path(), "composed/Card.tsx", "");
        write(dir.path(), "primitives/Button.tsx", "");
        write(dir.path(), "primitives/button.css", "");
        write(dir.path(), "node_modules/react/index.js", "");

        let scanner = Scanner::new(dir.path(), &ScanConfig::default()).unwrap();
        let result = scanner.scan(&PathFilter::empty());
        let paths: Vec<_> = result.files.iter().map(|f| f.relative_path.as_str()).collect();
        assert_eq!(paths, vec!["composed/Card.tsx", "primitives/Button.tsx"]);
        assert!(result.errors.is_empty());
    }

    #[test]
    fn default_extensions_cover_every_module_flavour() {
        let dir = tempfile::tempdir().unwrap();
        for name in ["a.ts", "b.mts", "c.cts", "d.tsx", "e.js", "f.jsx", "g.mjs", "h.cjs"] {
            write(dir.path(), &format!("utils/{name}"), "");
        }

        let scanner = Scanner::new(dir.path(), &ScanConfig::default()).unwrap();
        let result = scanner.scan(&PathFilter::empty());
        assert_eq!(result.files.len(), 8);
        assert!(result.files.iter().any(|f| f.relative_path == "utils/c.cts"));
    }

    #[test]
    fn exempt_files_are_counted_not_returned() {
        let dir = tempfile::tempdir().unwrap();
        write(dir.path(), "primitives/Button.tsx", "");
        write(dir.path(), "primitives/Button.stories.tsx", "");

        let scanner = Scanner::new(dir.path(), &ScanConfig::default()).unwrap();
        let exempt = PathFilter::new("test", &["**/*.stories.*".to_string()]).unwrap();
        let result = scanner.scan(&exempt);
        assert_eq!(result.files.len(), 1);
        assert_eq!(result.exempt, 1);
    }

    #[test]
    fn oversized_files_become_findings() {
        let dir = tempfile::tempdir().unwrap();
        write(dir.path(), "big.ts", &"x".repeat(64));
        let config = ScanConfig {
            max_file_size: Some(16),
            ..Default::default()
        };
        let result = Scanner::new(dir.path(), &config).unwrap().scan(&PathFilter::empty());
        assert!(result.files.is_empty());
        assert_eq!(result.errors.len(), 1);
        assert_eq!(result.errors[0].code, "SCAN_ERROR");
        assert_eq!(result.errors[0].file, "big.ts");
    }

    #[test]
    fn all_files_ignores_extension_filter() {
        let dir = tempfile::tempdir().unwrap();
        write(dir.path(), ".github/workflows/ci.yml", "");
        write(dir.path(), "package.json", "{}");
        let result = Scanner::all_files(dir.path(), &ScanConfig::default()).scan(&PathFilter::empty());
        let paths: Vec<_> = result.files.iter().map(|f| f.relative_path.as_str()).collect();
        assert_eq!(paths, vec![".github/workflows/ci.yml", "package.json"]);
    }
}
