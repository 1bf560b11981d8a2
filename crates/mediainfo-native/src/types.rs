//! Enumerations shared with the native API.

use serde::{Deserialize, Serialize};
use std::ffi::c_int;

/// Logical stream table a query targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StreamKind {
    /// Container-level information.
    General,
    Video,
    Audio,
    /// Subtitles and other text streams.
    Text,
    Other,
    Image,
    /// Chapters.
    Menu,
}

impl StreamKind {
    /// All stream kinds in native order.
    pub const ALL: [StreamKind; 7] = [
        StreamKind::General,
        StreamKind::Video,
        StreamKind::Audio,
        StreamKind::Text,
        StreamKind::Other,
        StreamKind::Image,
        StreamKind::Menu,
    ];

    pub(crate) fn as_raw(self) -> c_int {
        match self {
            StreamKind::General => 0,
            StreamKind::Video => 1,
            StreamKind::Audio => 2,
            StreamKind::Text => 3,
            StreamKind::Other => 4,
            StreamKind::Image => 5,
            StreamKind::Menu => 6,
        }
    }
}

/// What a `Get` call returns for a parameter, and how the parameter is matched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InfoKind {
    /// Unique parameter name. Used as the search kind for name lookups.
    Name,
    /// Parameter value.
    #[default]
    Text,
    /// Unit of the value.
    Measure,
    Options,
    /// Translated parameter name.
    NameText,
    /// Translated unit.
    MeasureText,
    /// Description of the parameter.
    Info,
    HowTo,
}

impl InfoKind {
    pub(crate) fn as_raw(self) -> c_int {
        match self {
            InfoKind::Name => 0,
            InfoKind::Text => 1,
            InfoKind::Measure => 2,
            InfoKind::Options => 3,
            InfoKind::NameText => 4,
            InfoKind::MeasureText => 5,
            InfoKind::Info => 6,
            InfoKind::HowTo => 7,
        }
    }
}

/// Native entry point family used to pass strings across the boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Encoding {
    /// `wchar_t` entry points (`MediaInfo_*`).
    Wide,
    /// Single-byte entry points (`MediaInfoA_*`), UTF-8.
    Narrow,
}

impl Encoding {
    /// Encoding for the running host: wide on Windows, narrow everywhere else.
    pub fn host() -> Self {
        if cfg!(windows) {
            Encoding::Wide
        } else {
            Encoding::Narrow
        }
    }
}

impl std::fmt::Display for Encoding {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Encoding::Wide => write!(f, "wide"),
            Encoding::Narrow => write!(f, "narrow"),
        }
    }
}

/// Status bits reported while feeding a buffered session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BufferStatus(usize);

impl BufferStatus {
    pub const ACCEPTED: usize = 0x01;
    pub const FILLED: usize = 0x02;
    pub const UPDATED: usize = 0x04;
    pub const FINALIZED: usize = 0x08;

    pub fn from_bits(bits: usize) -> Self {
        Self(bits)
    }

    pub fn bits(self) -> usize {
        self.0
    }

    /// The library recognised the format.
    pub fn is_accepted(self) -> bool {
        self.0 & Self::ACCEPTED != 0
    }

    /// All needed information has been read.
    pub fn is_filled(self) -> bool {
        self.0 & Self::FILLED != 0
    }

    pub fn is_updated(self) -> bool {
        self.0 & Self::UPDATED != 0
    }

    /// Parsing is complete; no more data is wanted.
    pub fn is_finalized(self) -> bool {
        self.0 & Self::FINALIZED != 0
    }

    pub(crate) fn merge(self, other: BufferStatus) -> Self {
        Self(self.0 | other.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stream_kind_raw_values() {
        let raw: Vec<c_int> = StreamKind::ALL.iter().map(|k| k.as_raw()).collect();
        assert_eq!(raw, vec![0, 1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn test_info_kind_defaults_to_text() {
        assert_eq!(InfoKind::default(), InfoKind::Text);
        assert_eq!(InfoKind::Name.as_raw(), 0);
        assert_eq!(InfoKind::HowTo.as_raw(), 7);
    }

    #[test]
    fn test_host_encoding() {
        if cfg!(windows) {
            assert_eq!(Encoding::host(), Encoding::Wide);
        } else {
            assert_eq!(Encoding::host(), Encoding::Narrow);
        }
    }

    #[test]
    fn test_buffer_status_bits() {
        let status = BufferStatus::from_bits(BufferStatus::ACCEPTED | BufferStatus::FINALIZED);
        assert!(status.is_accepted());
        assert!(!status.is_filled());
        assert!(!status.is_updated());
        assert!(status.is_finalized());

        let merged = BufferStatus::default().merge(BufferStatus::from_bits(BufferStatus::FILLED));
        assert!(merged.is_filled());
        assert_eq!(merged.bits(), 0x02);
    }
}
