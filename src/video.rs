//! Video record, its field mapping, and the friendly resolution label.

use crate::audio::audio_channels;
use crate::convert::{parse_double, parse_encoded_date, parse_int, parse_long, parse_millis};
use crate::fields::Fields;
use crate::source::StreamSource;
use chrono::{DateTime, FixedOffset};
use mediainfo_native::StreamKind;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

/// Metadata of a video file: container, first video stream, first audio stream.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Video {
    pub aspect_ratio: Option<String>,
    /// Display aspect ratio as text (e.g., "16:9").
    pub aspect_ratio_display: Option<String>,
    pub audio_codec: Option<String>,
    pub audio_codec_id: Option<String>,
    pub audio_channels: Option<u32>,
    /// Audio sampling rate in Hz.
    pub audio_rate: Option<u32>,
    pub bit_depth: Option<u32>,
    /// Overall bit rate of the container in bits per second.
    pub bit_rate: Option<u64>,
    /// Video format (e.g., "AVC", "HEVC").
    pub codec: Option<String>,
    pub codec_id: Option<String>,
    pub color_space: Option<String>,
    pub duration: Option<Duration>,
    pub encoded_date: Option<DateTime<FixedOffset>>,
    /// Extension of the input path including the dot, e.g. `".mkv"`.
    pub file_extension: Option<String>,
    /// File size in bytes.
    pub file_size: Option<u64>,
    /// Container format (e.g., "Matroska", "MPEG-4").
    pub format: Option<String>,
    pub frame_count: Option<u64>,
    /// Frames per second.
    pub frame_rate: Option<f64>,
    /// Whether the file has at least one text stream.
    pub has_subtitles: bool,
    pub height: Option<u32>,
    pub width: Option<u32>,
    /// Audio language, or subtitle language when audio has none.
    pub language: Option<String>,
    /// Version string of the native library that produced the record.
    pub library_version: Option<String>,
    /// Resolution as reported, or "{width}x{height}".
    pub resolution: Option<String>,
    pub scan_type: Option<String>,
    pub title: Option<String>,
    /// Bit rate of the video stream in bits per second.
    pub video_bitrate: Option<u64>,
    pub video_codec: Option<String>,
}

impl Video {
    /// Coarse label derived from the height, `None` when the height is unknown.
    pub fn friendly_resolution(&self) -> Option<FriendlyResolution> {
        self.height.map(friendly_resolution)
    }
}

/// Human-readable resolution class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FriendlyResolution {
    #[serde(rename = "240p")]
    P240,
    #[serde(rename = "360p")]
    P360,
    #[serde(rename = "480p")]
    P480,
    #[serde(rename = "720p")]
    P720,
    #[serde(rename = "1080p")]
    P1080,
    #[serde(rename = "2K")]
    K2,
    #[serde(rename = "4K")]
    K4,
    #[serde(rename = "5K")]
    K5,
    #[serde(rename = "8K")]
    K8,
    Unknown,
}

impl FriendlyResolution {
    pub fn as_str(self) -> &'static str {
        match self {
            FriendlyResolution::P240 => "240p",
            FriendlyResolution::P360 => "360p",
            FriendlyResolution::P480 => "480p",
            FriendlyResolution::P720 => "720p",
            FriendlyResolution::P1080 => "1080p",
            FriendlyResolution::K2 => "2K",
            FriendlyResolution::K4 => "4K",
            FriendlyResolution::K5 => "5K",
            FriendlyResolution::K8 => "8K",
            FriendlyResolution::Unknown => "Unknown",
        }
    }
}

impl std::fmt::Display for FriendlyResolution {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Classify a pixel height. Bucket bounds are inclusive.
pub fn friendly_resolution(height: u32) -> FriendlyResolution {
    match height {
        180..=300 => FriendlyResolution::P240,
        301..=430 => FriendlyResolution::P360,
        431..=600 => FriendlyResolution::P480,
        601..=980 => FriendlyResolution::P720,
        981..=1200 => FriendlyResolution::P1080,
        1201..=2260 => FriendlyResolution::K2,
        2261..=3340 => FriendlyResolution::K4,
        3341..=4420 => FriendlyResolution::K5,
        4421..=6580 => FriendlyResolution::K8,
        _ => FriendlyResolution::Unknown,
    }
}

/// Build a [`Video`] record from any stream source.
///
/// `path` only contributes the file extension.
pub fn map_video<S: StreamSource + ?Sized>(source: &S, path: &Path) -> Video {
    let fields = Fields::new(source);
    let general = |parameter: &str| fields.text(StreamKind::General, parameter);
    let video = |parameter: &str| fields.text(StreamKind::Video, parameter);
    let audio = |parameter: &str| fields.text(StreamKind::Audio, parameter);

    let has_audio = fields.has(StreamKind::Audio);

    Video {
        aspect_ratio: video("AspectRatio"),
        aspect_ratio_display: video("DisplayAspectRatio/String"),
        audio_codec: audio("Format"),
        audio_codec_id: audio("CodecID"),
        audio_channels: audio_channels(&fields),
        audio_rate: if has_audio {
            parse_int(audio("SamplingRate").as_deref())
        } else {
            None
        },
        bit_depth: parse_int(video("BitDepth").as_deref()),
        bit_rate: parse_long(general("OverallBitRate").as_deref()),
        codec: video("Format"),
        codec_id: video("CodecID"),
        color_space: video("ColorSpace"),
        duration: parse_millis(general("Duration").as_deref()),
        encoded_date: parse_encoded_date(general("Encoded_Date").as_deref()),
        file_extension: path
            .extension()
            .map(|ext| format!(".{}", ext.to_string_lossy())),
        file_size: parse_long(general("FileSize").as_deref()),
        format: general("Format"),
        frame_count: parse_long(video("FrameCount").as_deref()),
        frame_rate: parse_double(video("FrameRate").as_deref()),
        has_subtitles: fields.has(StreamKind::Text),
        height: parse_int(video("Height").as_deref()),
        width: parse_int(video("Width").as_deref()),
        language: audio("Language").or_else(|| fields.text(StreamKind::Text, "Language")),
        library_version: fields.option("Info_Version"),
        resolution: resolution(&fields),
        scan_type: video("ScanType"),
        title: general("Title"),
        video_bitrate: parse_long(video("BitRate").as_deref()),
        video_codec: video("Format"),
    }
}

/// Reported resolution, else "{width}x{height}" when both are known.
fn resolution<S: StreamSource + ?Sized>(fields: &Fields<'_, S>) -> Option<String> {
    if let Some(reported) = fields.text(StreamKind::Video, "Resolution") {
        return Some(reported);
    }
    let width = fields.text(StreamKind::Video, "Width")?;
    let height = fields.text(StreamKind::Video, "Height")?;
    Some(format!("{width}x{height}"))
}
