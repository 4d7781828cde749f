//! Normalized path handling for cross-platform compatibility

use std::path::{Path, PathBuf};

/// A path normalized to use forward slashes internally.
///
/// Paths are converted to platform-native form only at I/O boundaries,
/// which keeps log lines and error messages stable across platforms.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct NormalizedPath {
    inner: String,
}

impl NormalizedPath {
    /// Create a new NormalizedPath from any path-like input.
    pub fn new(path: impl AsRef<Path>) -> Self {
        let path_str = path.as_ref().to_string_lossy();
        Self {
            inner: path_str.replace('\\', "/"),
        }
    }

    /// Get the internal normalized string representation.
    pub fn as_str(&self) -> &str {
        &self.inner
    }

    /// Convert to a platform-native PathBuf for I/O operations.
    pub fn to_native(&self) -> PathBuf {
        PathBuf::from(&self.inner)
    }

    /// Join this path with a segment.
    pub fn join(&self, segment: &str) -> Self {
        let segment = segment.replace('\\', "/");
        let joined = if self.inner.is_empty() {
            segment
        } else if self.inner.ends_with('/') {
            format!("{}{}", self.inner, segment)
        } else {
            format!("{}/{}", self.inner, segment)
        };
        Self { inner: joined }
    }

    /// Resolve `target` against this path.
    ///
    /// Absolute targets are returned unchanged, relative ones are joined.
    pub fn resolve(&self, target: impl AsRef<Path>) -> Self {
        let target = target.as_ref();
        if target.is_absolute() {
            Self::new(target)
        } else {
            self.join(&target.to_string_lossy())
        }
    }

    /// Get the parent directory.
    pub fn parent(&self) -> Option<Self> {
        let trimmed = self.inner.trim_end_matches('/');
        match trimmed.rfind('/') {
            Some(idx) if idx > 0 => Some(Self {
                inner: trimmed[..idx].to_string(),
            }),
            Some(0) => Some(Self {
                inner: "/".to_string(),
            }),
            _ => None,
        }
    }

    /// Get the file name component.
    pub fn file_name(&self) -> Option<&str> {
        let trimmed = self.inner.trim_end_matches('/');
        trimmed.rsplit('/').next().filter(|name| !name.is_empty())
    }

    /// Get the extension if present.
    pub fn extension(&self) -> Option<&str> {
        self.file_name().and_then(|name| {
            let idx = name.rfind('.')?;
            if idx == 0 { None } else { Some(&name[idx + 1..]) }
        })
    }

    /// Check if this is a file.
    pub fn is_file(&self) -> bool {
        self.to_native().is_file()
    }
}

impl AsRef<Path> for NormalizedPath {
    fn as_ref(&self) -> &Path {
        Path::new(&self.inner)
    }
}

impl std::fmt::Display for NormalizedPath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.inner)
    }
}

impl From<&str> for NormalizedPath {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for NormalizedPath {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}

impl From<PathBuf> for NormalizedPath {
    fn from(p: PathBuf) -> Self {
        Self::new(p)
    }
}

impl From<&Path> for NormalizedPath {
    fn from(p: &Path) -> Self {
        Self::new(p)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn backslashes_are_normalized() {
        let path = NormalizedPath::new("work\\infra\\main.tf");
        assert_eq!(path.as_str(), "work/infra/main.tf");
    }

    #[test]
    fn join_and_extension() {
        let path = NormalizedPath::new("/work").join("onelogin.tf");
        assert_eq!(path.as_str(), "/work/onelogin.tf");
        assert_eq!(path.extension(), Some("tf"));
        assert_eq!(path.file_name(), Some("onelogin.tf"));
    }

    #[test]
    fn resolve_keeps_absolute_targets() {
        let base = NormalizedPath::new("/work");
        assert_eq!(base.resolve("/etc/state.json").as_str(), "/etc/state.json");
        assert_eq!(base.resolve("state.json").as_str(), "/work/state.json");
    }

    #[test]
    fn dotfile_has_no_extension() {
        assert_eq!(NormalizedPath::new("/work/.terraformrc").extension(), None);
    }

    #[test]
    fn parent_of_root_child() {
        assert_eq!(
            NormalizedPath::new("/main.tf").parent(),
            Some(NormalizedPath::new("/"))
        );
        assert_eq!(NormalizedPath::new("main.tf").parent(), None);
    }
}
