//! # mediainfo-wrapper
//!
//! Typed audio and video metadata from the native MediaInfo library.
//!
//! All media analysis is done by `libmediainfo`, loaded at runtime through
//! [`mediainfo_native`]. This crate turns its string responses into typed
//! records:
//!
//! - [`Audio`]: first audio stream plus container duration, title and language
//! - [`Video`]: container, first video stream, first audio stream, subtitle
//!   presence, and a [`FriendlyResolution`] label
//!
//! Missing or unparsable fields are `None`. Only a missing input file, an
//! unavailable library, and a file the library refuses to open are errors.
//!
//! ## Example
//!
//! ```no_run
//! use mediainfo_wrapper::{video_info, Complete, ParseSpeed};
//!
//! let video = video_info("/path/to/video.mkv", ParseSpeed::Fast, Complete::Yes)?;
//! println!("Container: {:?}", video.format);
//! println!("Resolution: {:?} ({:?})", video.resolution, video.friendly_resolution());
//! # Ok::<(), mediainfo_wrapper::Error>(())
//! ```

pub mod audio;
pub mod config;
pub mod convert;
mod error;
pub mod extract;
pub mod fields;
pub mod memory;
pub mod options;
pub mod source;
pub mod video;

// Re-exports
pub use audio::{map_audio, Audio};
pub use error::{Error, Result};
pub use extract::{audio_info, video_info, Extractor};
pub use fields::Fields;
pub use memory::MemorySource;
pub use options::{Complete, ParseOptions, ParseSpeed};
pub use source::StreamSource;
pub use video::{friendly_resolution, map_video, FriendlyResolution, Video};

pub use mediainfo_native::{
    Encoding, Error as NativeError, InfoKind, Library, Session, StreamKind,
};
