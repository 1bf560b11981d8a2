//! # mediainfo-native
//!
//! Runtime-loaded bindings to the MediaInfo library.
//!
//! This crate provides:
//! - Platform-specific location and loading of `libmediainfo` ([`Library`])
//! - Owned analysis sessions that release their native handle exactly once ([`Session`])
//! - A choice of wide (`wchar_t`) or single-byte entry points, picked from the
//!   host platform at load time ([`Encoding`])
//!
//! No media parsing happens here. Every query is answered by the native library.
//!
//! ## Example
//!
//! ```no_run
//! use mediainfo_native::{InfoKind, Session, StreamKind};
//! use std::path::Path;
//!
//! let mut session = Session::new();
//! session.option("ParseSpeed", "1")?;
//! session.open(Path::new("/path/to/video.mkv"))?;
//! let format = session.get(StreamKind::General, 0, "Format", InfoKind::Text, InfoKind::Name)?;
//! println!("Container: {:?}", format);
//! # Ok::<(), mediainfo_native::Error>(())
//! ```

mod error;
mod ffi;
pub mod library;
mod marshal;
mod session;
mod types;

// Re-exports
pub use error::{Error, Result};
pub use library::{default_library_names, Library, LIBRARY_ENV};
pub use session::Session;
pub use types::{BufferStatus, Encoding, InfoKind, StreamKind};
