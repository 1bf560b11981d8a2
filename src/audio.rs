//! Audio record and its field mapping.

use crate::convert::{parse_int, parse_long, parse_millis};
use crate::fields::Fields;
use crate::source::StreamSource;
use mediainfo_native::StreamKind;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Metadata of the first audio stream of a file.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Audio {
    /// Bits per sample (e.g., 16, 24).
    pub bit_depth: Option<u32>,
    /// Number of channels.
    pub channels: Option<u32>,
    /// Audio format (e.g., "AAC", "MPEG Audio", "FLAC").
    pub codec: Option<String>,
    /// Codec identifier as stored in the container.
    pub codec_id: Option<String>,
    /// "Lossy" or "Lossless".
    pub compression_mode: Option<String>,
    /// Channel layout (e.g., "Front: L C R, Side: L R, LFE").
    pub channel_positions: Option<String>,
    /// Container duration. Zero when unknown.
    pub duration: Duration,
    /// Format profile (e.g., "Layer 3", "LC").
    pub format_profile: Option<String>,
    /// Language tag from the container.
    pub language: Option<String>,
    /// Bit rate in bits per second.
    pub bitrate: Option<u64>,
    /// "CBR" or "VBR".
    pub bitrate_mode: Option<String>,
    /// Sampling rate in Hz.
    pub sampling_rate: Option<u32>,
    /// Service kind (e.g., "Complete Main").
    pub service_kind: Option<String>,
    /// Title from the container.
    pub title: Option<String>,
}

/// Build an [`Audio`] record from any stream source.
pub fn map_audio<S: StreamSource + ?Sized>(source: &S) -> Audio {
    let fields = Fields::new(source);
    let audio = |parameter: &str| fields.text(StreamKind::Audio, parameter);
    let general = |parameter: &str| fields.text(StreamKind::General, parameter);

    // TODO: unknown duration falls back to zero here but is `None` on `Video`;
    // switch to `Option<Duration>` on the next breaking release.
    let duration = parse_millis(general("Duration").as_deref()).unwrap_or(Duration::ZERO);

    Audio {
        bit_depth: parse_int(audio("BitDepth").as_deref()),
        channels: audio_channels(&fields),
        codec: audio("Format"),
        codec_id: audio("CodecID"),
        compression_mode: audio("Compression_Mode"),
        channel_positions: audio("ChannelPositions"),
        duration,
        format_profile: audio("Format_Profile"),
        language: general("Language"),
        bitrate: parse_long(audio("BitRate").as_deref()),
        bitrate_mode: audio("BitRate_Mode"),
        sampling_rate: parse_int(audio("SamplingRate").as_deref()),
        service_kind: audio("Service_kind"),
        title: general("Title"),
    }
}

/// Channel count of the first audio stream, if there is one.
///
/// Older library versions name the field `Channel(s)`.
pub(crate) fn audio_channels<S: StreamSource + ?Sized>(fields: &Fields<'_, S>) -> Option<u32> {
    if !fields.has(StreamKind::Audio) {
        return None;
    }
    let raw = fields
        .text(StreamKind::Audio, "Channel(s)")
        .or_else(|| fields.text(StreamKind::Audio, "Channels"));
    parse_int(raw.as_deref())
}
