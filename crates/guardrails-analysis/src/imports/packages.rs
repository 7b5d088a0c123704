//! Owning-package lookup through the nearest `package.json`.

use std::path::{Path, PathBuf};
use std::sync::Mutex;

use guardrails_core::types::collections::FxHashMap;

/// Resolves the package owning a path. Lookups are cached per directory and
/// never climb above `stop_at`.
pub struct PackageResolver {
    stop_at: PathBuf,
    cache: Mutex<FxHashMap<PathBuf, Option<String>>>,
}

impl PackageResolver {
    pub fn new(stop_at: &Path) -> Self {
        Self {
            stop_at: stop_at.to_path_buf(),
            cache: Mutex::new(FxHashMap::default()),
        }
    }

    /// Name of the nearest `package.json` at or above the file's directory.
    pub fn package_of(&self, file: &Path) -> Option<String> {
        let dir = file.parent()?;
        self.package_of_dir(dir)
    }

    fn package_of_dir(&self, dir: &Path) -> Option<String> {
        if let Some(hit) = self.cache.lock().ok()?.get(dir) {
            return hit.clone();
        }

        let name = match read_package_name(&dir.join("package.json")) {
            Some(name) => Some(name),
            None if dir == self.stop_at || !dir.starts_with(&self.stop_at) => None,
            None => dir.parent().and_then(|p| self.package_of_dir(p)),
        };

        if let Ok(mut cache) = self.cache.lock() {
            cache.insert(dir.to_path_buf(), name.clone());
        }
        name
    }
}

fn read_package_name(manifest: &Path) -> Option<String> {
    let content = std::fs::read_to_string(manifest).ok()?;
    let json: serde_json::Value = match serde_json::from_str(&content) {
        Ok(v) => v,
        Err(e) => {
            tracing::debug!(path = %manifest.display(), error = %e, "unparsable package.json");
            return None;
        }
    };
    json.get("name")?.as_str().map(str::to_string)
}

/// Package name of a bare specifier: `@scope/name/sub` → `@scope/name`,
/// `name/sub` → `name`.
pub fn package_name(specifier: &str) -> &str {
    let mut end = 0;
    let segments = if specifier.starts_with('@') { 2 } else { 1 };
    for (i, segment) in specifier.split('/').take(segments).enumerate() {
        end += segment.len() + usize::from(i > 0);
    }
    &specifier[..end]
}
