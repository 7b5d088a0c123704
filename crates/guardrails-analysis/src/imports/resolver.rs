//! Specifier resolution against the scanned source tree.

use std::path::{Path, PathBuf};

use super::packages::package_name;

/// Where an import specifier points.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    /// A bare package specifier.
    External { package: String },
    /// A file under the source root, as a `/`-separated relative path.
    /// `exists` is false when no candidate file was found on disk.
    Local { relative_path: String, exists: bool },
    /// A relative path that escapes the source root.
    OutsideRoot { path: PathBuf },
}

/// Turns raw specifiers into `Resolution`s. Relative and aliased specifiers
/// resolve against the filesystem; everything else is a package.
pub struct ImportResolver {
    src_root: PathBuf,
    /// Alias prefix and target directory, longest prefix first.
    aliases: Vec<(String, String)>,
    extensions: Vec<String>,
}

impl ImportResolver {
    pub fn new<'a>(
        src_root: &Path,
        aliases: impl IntoIterator<Item = (&'a String, &'a String)>,
        extensions: Vec<String>,
    ) -> Self {
        let mut aliases: Vec<(String, String)> = aliases
            .into_iter()
            .map(|(prefix, target)| (prefix.clone(), target.trim_matches('/').to_string()))
            .collect();
        aliases.sort_by(|a, b| b.0.len().cmp(&a.0.len()).then_with(|| a.0.cmp(&b.0)));
        Self {
            src_root: src_root.to_path_buf(),
            aliases,
            extensions,
        }
    }

    /// Resolve `specifier` as written in the file at `from_relative`.
    pub fn resolve(&self, from_relative: &str, specifier: &str) -> Resolution {
        if is_relative(specifier) {
            let mut base: Vec<&str> = from_relative.split('/').collect();
            base.pop();
            return self.resolve_segments(base, specifier);
        }

        for (prefix, target) in &self.aliases {
            if let Some(rest) = specifier.strip_prefix(prefix.as_str()) {
                let base: Vec<&str> = target
                    .split('/')
                    .filter(|s| !s.is_empty() && *s != ".")
                    .collect();
                return self.resolve_segments(base, rest);
            }
        }

        if specifier.starts_with('/') {
            return Resolution::OutsideRoot {
                path: PathBuf::from(specifier),
            };
        }

        Resolution::External {
            package: package_name(specifier).to_string(),
        }
    }

    fn resolve_segments<'a>(&self, mut base: Vec<&'a str>, rest: &'a str) -> Resolution {
        let mut escaped = 0usize;
        for segment in rest.split('/') {
            match segment {
                "" | "." => {}
                ".." => {
                    if base.pop().is_none() {
                        escaped += 1;
                    }
                }
                s => base.push(s),
            }
        }

        if escaped > 0 {
            let mut path = self.src_root.clone();
            for _ in 0..escaped {
                path.pop();
            }
            path.extend(&base);
            return Resolution::OutsideRoot { path };
        }

        let joined = base.join("/");
        match self.find_file(&joined) {
            Some(relative_path) => Resolution::Local {
                relative_path,
                exists: true,
            },
            None => Resolution::Local {
                relative_path: joined,
                exists: false,
            },
        }
    }

    /// Try the exact path, then each extension, then `index.<ext>`.
    fn find_file(&self, relative: &str) -> Option<String> {
        if relative.is_empty() {
            return self.find_index("");
        }
        if self.src_root.join(relative).is_file() {
            return Some(relative.to_string());
        }
        for ext in &self.extensions {
            let candidate = format!("{relative}.{ext}");
            if self.src_root.join(&candidate).is_file() {
                return Some(candidate);
            }
        }
        self.find_index(relative)
    }

    fn find_index(&self, dir: &str) -> Option<String> {
        for ext in &self.extensions {
            let candidate = if dir.is_empty() {
                format!("index.{ext}")
            } else {
                format!("{dir}/index.{ext}")
            };
            if self.src_root.join(&candidate).is_file() {
                return Some(candidate);
            }
        }
        None
    }

    pub fn src_root(&self) -> &Path {
        &self.src_root
    }
}

fn is_relative(specifier: &str) -> bool {
    specifier == "."
        || specifier == ".."
        || specifier.starts_with("./")
        || specifier.starts_with("../")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    fn fixture() -> (tempfile::TempDir, ImportResolver) {
        let dir = tempfile::tempdir().unwrap();
        let src = dir.path().join("src");
        for rel in ["composed/Card.tsx", "composed/Menu/index.tsx", "primitives/Button.tsx"] {
            let path = src.join(rel);
            std::fs::create_dir_all(path.parent().unwrap()).unwrap();
            std::fs::write(path, "").unwrap();
        }
        let mut aliases = BTreeMap::new();
        aliases.insert("@/".to_string(), ".".to_string());
        let exts = vec!["ts".to_string(), "tsx".to_string()];
        let resolver = ImportResolver::new(&src, &aliases, exts);
        (dir, resolver)
    }

    #[test]
    fn resolves_extension_and_index() {
        let (_dir, r) = fixture();
        assert_eq!(
            r.resolve("primitives/Button.tsx", "../composed/Card"),
            Resolution::Local {
                relative_path: "composed/Card.tsx".into(),
                exists: true
            }
        );
        assert_eq!(
            r.resolve("primitives/Button.tsx", "../composed/Menu"),
            Resolution::Local {
                relative_path: "composed/Menu/index.tsx".into(),
                exists: true
            }
        );
    }

    #[test]
    fn unresolved_local_keeps_normalized_path() {
        let (_dir, r) = fixture();
        assert_eq!(
            r.resolve("primitives/Button.tsx", "./../blocks/./Table"),
            Resolution::Local {
                relative_path: "blocks/Table".into(),
                exists: false
            }
        );
    }

    #[test]
    fn escaping_the_root_is_outside() {
        let (_dir, r) = fixture();
        assert!(matches!(
            r.resolve("primitives/Button.tsx", "../../shared/util"),
            Resolution::OutsideRoot { .. }
        ));
    }

    #[test]
    fn aliases_resolve_from_the_source_root() {
        let (_dir, r) = fixture();
        assert_eq!(
            r.resolve("primitives/Button.tsx", "@/composed/Card"),
            Resolution::Local {
                relative_path: "composed/Card.tsx".into(),
                exists: true
            }
        );
    }

    #[test]
    fn bare_specifiers_are_external() {
        let (_dir, r) = fixture();
        assert_eq!(
            r.resolve("primitives/Button.tsx", "@radix-ui/react-dialog/dist"),
            Resolution::External {
                package: "@radix-ui/react-dialog".into()
            }
        );
    }
}
