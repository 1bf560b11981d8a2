use crate::options::ParseOptions;
use mediainfo_native::Encoding;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub library: LibraryConfig,

    #[serde(default)]
    pub parse: ParseOptions,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct LibraryConfig {
    /// Explicit libmediainfo file. When unset, `MEDIAINFO_LIBRARY` and the
    /// platform default names are tried.
    #[serde(default)]
    pub path: Option<PathBuf>,

    /// Force wide or narrow entry points instead of the host default.
    #[serde(default)]
    pub encoding: Option<Encoding>,
}
