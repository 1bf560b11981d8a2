//! The [`StreamSource`] trait: anything that can answer MediaInfo-style queries.

use mediainfo_native::{InfoKind, Session, StreamKind};

/// A table of streams answering string-keyed parameter lookups.
///
/// [`Session`] is the production implementation. Mappers only depend on this
/// trait, so they can also run against recorded or synthetic field tables.
pub trait StreamSource {
    /// Look up one parameter of one stream.
    fn get(
        &self,
        kind: StreamKind,
        index: usize,
        parameter: &str,
        info: InfoKind,
        search: InfoKind,
    ) -> mediainfo_native::Result<Option<String>>;

    /// Number of streams of a kind.
    fn count(&self, kind: StreamKind) -> mediainfo_native::Result<usize>;

    /// Set or query a library option.
    fn option(&self, name: &str, value: &str) -> mediainfo_native::Result<Option<String>>;
}

impl StreamSource for Session {
    fn get(
        &self,
        kind: StreamKind,
        index: usize,
        parameter: &str,
        info: InfoKind,
        search: InfoKind,
    ) -> mediainfo_native::Result<Option<String>> {
        Session::get(self, kind, index, parameter, info, search)
    }

    fn count(&self, kind: StreamKind) -> mediainfo_native::Result<usize> {
        Session::count(self, kind)
    }

    fn option(&self, name: &str, value: &str) -> mediainfo_native::Result<Option<String>> {
        Session::option(self, name, value)
    }
}
