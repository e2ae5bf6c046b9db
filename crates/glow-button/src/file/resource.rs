//! Embedded and filesystem resources addressed by prefixed paths.
//!
//! # Resource Paths
//!
//! - `:/path/to/resource` - resource under the default (empty) prefix
//! - `prefix:/path` - resource under a registered prefix
//! - `/absolute/path` or `relative/path` - plain filesystem path
//!
//! A prefix can be backed by an embedded directory, a filesystem root, or
//! both. Embedded data wins; the filesystem root is the fallback.
//!
//! The crate's own `assets/` directory is embedded at compile time and
//! registered under the default prefix of [`ResourceManager::global`], so
//! `:/fonts/Calistoga-Regular.ttf` resolves to `assets/fonts/Calistoga-Regular.ttf`.
//!
//! ```
//! use glow_button::ResourceManager;
//!
//! let resources = ResourceManager::new();
//! resources.register_filesystem_root("tmp", std::env::temp_dir());
//!
//! assert!(resources.load("tmp:/no-such-dir/Missing.ttf").is_err());
//! assert!(resources.load("unregistered:/fonts/Missing.ttf").is_err());
//! ```

use std::borrow::Cow;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use include_dir::{Dir, DirEntry, include_dir};
use glow_core::logging::targets;
use parking_lot::RwLock;

use crate::error::ResourceLoadError;

/// The crate's `assets/` directory.
static BUILTIN_ASSETS: Dir<'_> = include_dir!("$CARGO_MANIFEST_DIR/assets");

/// Global resource manager instance.
static GLOBAL_MANAGER: OnceLock<ResourceManager> = OnceLock::new();

/// A directory embedded with `include_dir!`.
#[derive(Clone, Copy)]
pub struct EmbeddedDir {
    dir: &'static Dir<'static>,
}

impl EmbeddedDir {
    /// Wrap an embedded directory.
    ///
    /// ```ignore
    /// use include_dir::{include_dir, Dir};
    /// use glow_button::EmbeddedDir;
    ///
    /// static ASSETS: Dir<'_> = include_dir!("$CARGO_MANIFEST_DIR/assets");
    /// let embedded = EmbeddedDir::new(&ASSETS);
    /// ```
    pub const fn new(dir: &'static Dir<'static>) -> Self {
        Self { dir }
    }

    /// The assets shipped with this crate.
    pub fn builtin() -> Self {
        Self::new(&BUILTIN_ASSETS)
    }

    /// Gets a file's contents by path.
    pub fn get_file(&self, path: &str) -> Option<&'static [u8]> {
        self.dir.get_file(path).map(|f| f.contents())
    }

    /// Checks if a file exists at the given path.
    pub fn contains(&self, path: &str) -> bool {
        self.dir.get_file(path).is_some()
    }

    /// Lists all file paths in the embedded directory (recursively).
    pub fn list_files(&self) -> Vec<&'static str> {
        let mut paths = Vec::new();
        collect_files(self.dir, &mut paths);
        paths
    }
}

fn collect_files(dir: &'static Dir<'static>, paths: &mut Vec<&'static str>) {
    for entry in dir.entries() {
        match entry {
            DirEntry::Dir(subdir) => collect_files(subdir, paths),
            DirEntry::File(file) => {
                if let Some(path) = file.path().to_str() {
                    paths.push(path);
                }
            }
        }
    }
}

impl std::fmt::Debug for EmbeddedDir {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EmbeddedDir")
            .field("file_count", &self.list_files().len())
            .finish()
    }
}

/// Parsed resource path with prefix and relative path components.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourcePath<'a> {
    /// The prefix (e.g., "assets" from "assets:/path"). Empty for ":/path".
    pub prefix: Cow<'a, str>,
    /// The path within the prefix, or the whole filesystem path.
    pub path: Cow<'a, str>,
    /// Whether the path uses the `prefix:/path` syntax.
    pub is_prefixed: bool,
}

impl<'a> ResourcePath<'a> {
    /// Parses a resource path string.
    ///
    /// - `":/fonts/main.ttf"` -> prefix="", path="fonts/main.ttf", prefixed
    /// - `"assets:/fonts/main.ttf"` -> prefix="assets", path="fonts/main.ttf", prefixed
    /// - `"/usr/share/fonts/a.ttf"` -> prefix="", path unchanged, not prefixed
    pub fn parse(input: &'a str) -> Self {
        match input.find(":/") {
            Some(colon_pos) if !is_windows_drive(&input[..colon_pos]) => ResourcePath {
                prefix: Cow::Borrowed(&input[..colon_pos]),
                path: Cow::Borrowed(&input[colon_pos + 2..]),
                is_prefixed: true,
            },
            _ => ResourcePath {
                prefix: Cow::Borrowed(""),
                path: Cow::Borrowed(input),
                is_prefixed: false,
            },
        }
    }

    /// Converts to an owned version.
    pub fn into_owned(self) -> ResourcePath<'static> {
        ResourcePath {
            prefix: Cow::Owned(self.prefix.into_owned()),
            path: Cow::Owned(self.path.into_owned()),
            is_prefixed: self.is_prefixed,
        }
    }
}

/// `C:/fonts/a.ttf` is a filesystem path, not prefix "C".
fn is_windows_drive(prefix: &str) -> bool {
    prefix.len() == 1 && prefix.chars().all(|c| c.is_ascii_alphabetic())
}

/// Resolves resource paths against registered embedded directories and
/// filesystem roots.
pub struct ResourceManager {
    /// Registered embedded directories by prefix.
    embedded: RwLock<HashMap<String, EmbeddedDir>>,
    /// Registered filesystem root directories by prefix.
    filesystem_roots: RwLock<HashMap<String, PathBuf>>,
}

impl ResourceManager {
    /// Creates a resource manager with nothing registered.
    pub fn new() -> Self {
        Self {
            embedded: RwLock::new(HashMap::new()),
            filesystem_roots: RwLock::new(HashMap::new()),
        }
    }

    /// Creates a resource manager serving this crate's assets under the
    /// default prefix.
    pub fn with_builtin_assets() -> Self {
        let manager = Self::new();
        manager.register_embedded("", EmbeddedDir::builtin());
        manager
    }

    /// Gets the global resource manager instance.
    ///
    /// It starts out with this crate's assets under the default prefix.
    pub fn global() -> &'static ResourceManager {
        GLOBAL_MANAGER.get_or_init(ResourceManager::with_builtin_assets)
    }

    /// Registers an embedded directory with a prefix, replacing any previous
    /// directory under that prefix.
    pub fn register_embedded(&self, prefix: &str, dir: EmbeddedDir) {
        tracing::debug!(target: targets::RESOURCE, prefix, "registering embedded directory");
        self.embedded.write().insert(prefix.to_string(), dir);
    }

    /// Unregisters an embedded directory.
    pub fn unregister_embedded(&self, prefix: &str) -> bool {
        self.embedded.write().remove(prefix).is_some()
    }

    /// Maps a prefix to a filesystem directory.
    ///
    /// After `register_filesystem_root("data", "/app/data")`,
    /// `data:/fonts/a.ttf` reads `/app/data/fonts/a.ttf`.
    pub fn register_filesystem_root(&self, prefix: &str, root: impl Into<PathBuf>) {
        let root = root.into();
        tracing::debug!(
            target: targets::RESOURCE,
            prefix,
            root = %root.display(),
            "registering filesystem root"
        );
        self.filesystem_roots.write().insert(prefix.to_string(), root);
    }

    /// Unregisters a filesystem root.
    pub fn unregister_filesystem_root(&self, prefix: &str) -> bool {
        self.filesystem_roots.write().remove(prefix).is_some()
    }

    /// Gets an embedded resource without touching the filesystem.
    pub fn get(&self, path: &str) -> Option<&'static [u8]> {
        let parsed = ResourcePath::parse(path);
        if !parsed.is_prefixed {
            return None;
        }

        let embedded = self.embedded.read();
        embedded.get(parsed.prefix.as_ref())?.get_file(&parsed.path)
    }

    /// Checks if a resource exists.
    pub fn exists(&self, path: &str) -> bool {
        let parsed = ResourcePath::parse(path);
        if !parsed.is_prefixed {
            return Path::new(&*parsed.path).exists();
        }

        let in_embedded = self
            .embedded
            .read()
            .get(parsed.prefix.as_ref())
            .is_some_and(|dir| dir.contains(&parsed.path));

        in_embedded
            || self
                .filesystem_roots
                .read()
                .get(parsed.prefix.as_ref())
                .is_some_and(|root| root.join(&*parsed.path).is_file())
    }

    /// Loads a resource.
    ///
    /// Embedded data is borrowed; filesystem data is read synchronously.
    pub fn load(&self, path: &str) -> Result<Cow<'static, [u8]>, ResourceLoadError> {
        let parsed = ResourcePath::parse(path);

        if !parsed.is_prefixed {
            return std::fs::read(&*parsed.path)
                .map(Cow::Owned)
                .map_err(|e| ResourceLoadError::from_io(e, &*parsed.path));
        }

        if let Some(data) = self.get(path) {
            tracing::trace!(target: targets::RESOURCE, path, len = data.len(), "embedded hit");
            return Ok(Cow::Borrowed(data));
        }

        // Fall through to filesystem roots
        let full_path = self
            .filesystem_roots
            .read()
            .get(parsed.prefix.as_ref())
            .map(|root| root.join(&*parsed.path));

        match full_path {
            Some(full_path) => std::fs::read(&full_path)
                .map(Cow::Owned)
                .map_err(|e| ResourceLoadError::from_io(e, full_path)),
            None => Err(ResourceLoadError::not_found(path)),
        }
    }

    /// Returns all registered embedded prefixes.
    pub fn embedded_prefixes(&self) -> Vec<String> {
        self.embedded.read().keys().cloned().collect()
    }
}

impl Default for ResourceManager {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for ResourceManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ResourceManager")
            .field("embedded_prefixes", &self.embedded_prefixes())
            .field(
                "filesystem_roots",
                &self.filesystem_roots.read().keys().collect::<Vec<_>>(),
            )
            .finish()
    }
}

static_assertions::assert_impl_all!(ResourceManager: Send, Sync);
