//! Locating and loading the MediaInfo shared library.

use crate::ffi::Symbols;
use crate::marshal::{entry_points, EntryPoints};
use crate::types::Encoding;
use crate::{Error, Result};
use std::ffi::OsStr;
use std::fmt;
use std::path::Path;
use std::sync::{Arc, OnceLock};

/// Environment variable naming an explicit library file.
pub const LIBRARY_ENV: &str = "MEDIAINFO_LIBRARY";

/// Library file names tried, in order, for the current platform.
pub fn default_library_names() -> &'static [&'static str] {
    if cfg!(windows) {
        &["MediaInfo.dll"]
    } else if cfg!(target_os = "macos") {
        &["libmediainfo.0.dylib", "libmediainfo.dylib"]
    } else {
        &["libmediainfo.so.0", "libmediainfo.so"]
    }
}

/// A loaded libmediainfo with its resolved entry points.
///
/// Sessions hold an `Arc<Library>` so the library stays mapped while any
/// handle created from it is alive.
pub struct Library {
    symbols: Symbols,
    entry_points: &'static dyn EntryPoints,
    name: String,
    // Declared last: dropped after the copied symbols above.
    _lib: libloading::Library,
}

static SHARED: OnceLock<std::result::Result<Arc<Library>, String>> = OnceLock::new();

impl Library {
    /// Load the library from the environment override or the platform
    /// default names.
    pub fn load() -> Result<Self> {
        if let Some(path) = std::env::var_os(LIBRARY_ENV).filter(|p| !p.is_empty()) {
            return Self::load_from(path);
        }

        let mut failures = Vec::new();
        for name in default_library_names() {
            match Self::load_from(name) {
                Ok(lib) => return Ok(lib),
                Err(e) => failures.push(e.to_string()),
            }
        }

        Err(Error::library_unavailable(failures.join("; ")))
    }

    /// Load the library from an explicit file name or path.
    pub fn load_from(path: impl AsRef<OsStr>) -> Result<Self> {
        let path = path.as_ref();
        let name = path.to_string_lossy().into_owned();

        // SAFETY: loading libmediainfo runs only its own static initialisers.
        let lib = unsafe { libloading::Library::new(path) }
            .map_err(|e| Error::library_unavailable(format!("{name}: {e}")))?;
        let symbols = Symbols::resolve(&lib)?;
        let encoding = Encoding::host();

        tracing::debug!(library = %name, %encoding, "loaded MediaInfo library");

        Ok(Self {
            symbols,
            entry_points: entry_points(encoding),
            name,
            _lib: lib,
        })
    }

    /// The process-wide library, loaded on first use.
    ///
    /// A failed load is remembered; later calls return the same error without
    /// retrying.
    pub fn shared() -> Result<Arc<Library>> {
        SHARED
            .get_or_init(|| match Library::load() {
                Ok(lib) => Ok(Arc::new(lib)),
                Err(e) => {
                    tracing::warn!(error = %e, "MediaInfo library could not be loaded");
                    Err(e.to_string())
                }
            })
            .clone()
            .map_err(Error::library_unavailable)
    }

    /// Override the entry point family chosen from the host platform.
    pub fn with_encoding(mut self, encoding: Encoding) -> Self {
        self.entry_points = entry_points(encoding);
        self
    }

    /// Entry point family in use.
    pub fn encoding(&self) -> Encoding {
        self.entry_points.encoding()
    }

    /// File name or path the library was loaded from.
    pub fn name(&self) -> &str {
        &self.name
    }

    pub(crate) fn symbols(&self) -> &Symbols {
        &self.symbols
    }

    pub(crate) fn entry_points(&self) -> &'static dyn EntryPoints {
        self.entry_points
    }
}

impl fmt::Debug for Library {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Library")
            .field("name", &self.name)
            .field("encoding", &self.encoding())
            .finish()
    }
}

/// Whether a candidate path looks loadable before handing it to the loader.
///
/// Bare file names are resolved by the system loader and always pass.
pub fn is_plausible_library_path(path: &Path) -> bool {
    path.components().count() <= 1 || path.is_file()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_library_names() {
        let names = default_library_names();
        assert!(!names.is_empty());
        if cfg!(windows) {
            assert_eq!(names, &["MediaInfo.dll"]);
        } else if cfg!(target_os = "macos") {
            assert!(names.iter().all(|n| n.ends_with(".dylib")));
        } else {
            assert_eq!(names[0], "libmediainfo.so.0");
        }
    }

    #[test]
    fn test_load_from_missing_path() {
        let err = Library::load_from("/nonexistent/dir/libmediainfo-missing.so").unwrap_err();
        assert!(matches!(err, Error::LibraryUnavailable(_)));
        assert!(err.to_string().contains("libmediainfo-missing.so"));
    }

    #[test]
    fn test_plausible_library_path() {
        assert!(is_plausible_library_path(Path::new("libmediainfo.so.0")));
        assert!(!is_plausible_library_path(Path::new(
            "/nonexistent/dir/libmediainfo.so"
        )));
    }
}
