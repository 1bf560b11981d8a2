//! An in-memory [`StreamSource`] backed by a field table.
//!
//! Useful for replaying recorded MediaInfo output through the mappers without
//! the native library, and for tests.

use crate::source::StreamSource;
use mediainfo_native::{InfoKind, StreamKind};
use std::collections::HashMap;

/// Field values keyed by stream kind, stream index, and parameter name.
#[derive(Debug, Clone, Default)]
pub struct MemorySource {
    streams: HashMap<(StreamKind, usize), HashMap<String, String>>,
    options: HashMap<String, String>,
}

impl MemorySource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a field to the first stream of `kind`.
    pub fn with(self, kind: StreamKind, parameter: &str, value: &str) -> Self {
        self.with_stream(kind, 0, parameter, value)
    }

    /// Add a field to stream `index` of `kind`.
    pub fn with_stream(
        mut self,
        kind: StreamKind,
        index: usize,
        parameter: &str,
        value: &str,
    ) -> Self {
        self.insert(kind, index, parameter, value);
        self
    }

    /// Record the response of a query-only option.
    pub fn with_option(mut self, name: &str, value: &str) -> Self {
        self.options.insert(name.to_string(), value.to_string());
        self
    }

    pub fn insert(&mut self, kind: StreamKind, index: usize, parameter: &str, value: &str) {
        self.streams
            .entry((kind, index))
            .or_default()
            .insert(parameter.to_string(), value.to_string());
    }
}

impl StreamSource for MemorySource {
    fn get(
        &self,
        kind: StreamKind,
        index: usize,
        parameter: &str,
        info: InfoKind,
        _search: InfoKind,
    ) -> mediainfo_native::Result<Option<String>> {
        if parameter.is_empty() {
            return Err(mediainfo_native::Error::invalid_argument(
                "parameter must be non-empty",
            ));
        }
        if info != InfoKind::Text {
            return Ok(None);
        }
        Ok(self
            .streams
            .get(&(kind, index))
            .and_then(|fields| fields.get(parameter))
            .cloned())
    }

    fn count(&self, kind: StreamKind) -> mediainfo_native::Result<usize> {
        Ok(self
            .streams
            .keys()
            .filter(|(k, _)| *k == kind)
            .map(|(_, index)| index + 1)
            .max()
            .unwrap_or(0))
    }

    fn option(&self, name: &str, _value: &str) -> mediainfo_native::Result<Option<String>> {
        if name.is_empty() {
            return Err(mediainfo_native::Error::invalid_argument(
                "option must be non-empty",
            ));
        }
        Ok(Some(self.options.get(name).cloned().unwrap_or_default()))
    }
}
