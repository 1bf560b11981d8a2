//! Field accessor over a [`StreamSource`].
//!
//! This is the single place that decides what "no value" means: a null
//! native response, an empty or whitespace-only string, and a failed lookup
//! all become `None`. Numeric interpretation is left to [`crate::convert`].

use crate::source::StreamSource;
use mediainfo_native::{InfoKind, StreamKind};

/// Reads named fields from the first stream of each kind.
pub struct Fields<'a, S: StreamSource + ?Sized> {
    source: &'a S,
}

impl<'a, S: StreamSource + ?Sized> Fields<'a, S> {
    pub fn new(source: &'a S) -> Self {
        Self { source }
    }

    /// Text value of `parameter` on the first stream of `kind`.
    pub fn text(&self, kind: StreamKind, parameter: &str) -> Option<String> {
        self.text_at(kind, 0, parameter)
    }

    /// Text value of `parameter` on stream `index` of `kind`.
    pub fn text_at(&self, kind: StreamKind, index: usize, parameter: &str) -> Option<String> {
        match self
            .source
            .get(kind, index, parameter, InfoKind::Text, InfoKind::Name)
        {
            Ok(value) => {
                let value = non_blank(value);
                if value.is_none() {
                    tracing::trace!(?kind, index, parameter, "field has no value");
                }
                value
            }
            Err(e) => {
                tracing::debug!(?kind, index, parameter, error = %e, "field lookup failed");
                None
            }
        }
    }

    /// Number of streams of `kind`, zero when the lookup fails.
    pub fn count(&self, kind: StreamKind) -> usize {
        self.source.count(kind).unwrap_or_else(|e| {
            tracing::debug!(?kind, error = %e, "stream count failed");
            0
        })
    }

    /// Whether at least one stream of `kind` exists.
    pub fn has(&self, kind: StreamKind) -> bool {
        self.count(kind) > 0
    }

    /// Response of a query-only library option such as `Info_Version`.
    pub fn option(&self, name: &str) -> Option<String> {
        match self.source.option(name, "") {
            Ok(value) => non_blank(value),
            Err(e) => {
                tracing::debug!(option = name, error = %e, "option query failed");
                None
            }
        }
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}
