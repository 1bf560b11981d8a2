//! Extraction entry points: check the path, open a session, map, release.

use crate::audio::{map_audio, Audio};
use crate::config::Config;
use crate::options::{Complete, ParseOptions, ParseSpeed};
use crate::video::{map_video, Video};
use crate::{Error, Result};
use mediainfo_native::{Library, Session};
use std::path::Path;
use std::sync::Arc;

/// Reusable extraction settings: which library to use and how to parse.
///
/// Each call opens and releases its own session, so one `Extractor` can be
/// shared across threads.
#[derive(Debug, Clone, Default)]
pub struct Extractor {
    library: Option<Arc<Library>>,
    options: ParseOptions,
}

impl Extractor {
    /// Extractor on the process-wide library with default switches.
    pub fn new() -> Self {
        Self::default()
    }

    /// Extractor built from configuration.
    ///
    /// An explicitly configured library is loaded now, and a failure is
    /// reported instead of deferred.
    pub fn from_config(config: &Config) -> Result<Self> {
        let library = match (&config.library.path, config.library.encoding) {
            (None, None) => None,
            (path, encoding) => {
                let mut lib = match path {
                    Some(path) => Library::load_from(path)?,
                    None => Library::load()?,
                };
                if let Some(encoding) = encoding {
                    lib = lib.with_encoding(encoding);
                }
                Some(Arc::new(lib))
            }
        };

        Ok(Self {
            library,
            options: config.parse,
        })
    }

    /// Use a specific loaded library instead of the process-wide one.
    pub fn with_library(mut self, library: Arc<Library>) -> Self {
        self.library = Some(library);
        self
    }

    pub fn with_options(mut self, speed: ParseSpeed, complete: Complete) -> Self {
        self.options = ParseOptions::new(speed, complete);
        self
    }

    pub fn options(&self) -> ParseOptions {
        self.options
    }

    /// Extract the audio record of a file.
    pub fn audio(&self, path: impl AsRef<Path>) -> Result<Audio> {
        let path = path.as_ref();
        let session = self.open(path)?;
        Ok(map_audio(&session))
    }

    /// Extract the video record of a file.
    pub fn video(&self, path: impl AsRef<Path>) -> Result<Video> {
        let path = path.as_ref();
        let session = self.open(path)?;
        Ok(map_video(&session, path))
    }

    /// A configured session with `path` opened. Dropping it releases the handle.
    fn open(&self, path: &Path) -> Result<Session> {
        if !path.is_file() {
            return Err(Error::file_not_found(path));
        }

        let mut session = match &self.library {
            Some(library) => Session::from_library(Some(Arc::clone(library))),
            None => Session::new(),
        };

        session.option("ParseSpeed", self.options.speed.option_value())?;
        session.option("Complete", self.options.complete.option_value())?;
        session.open(path)?;

        tracing::debug!(
            path = %path.display(),
            speed = ?self.options.speed,
            complete = ?self.options.complete,
            "extracting media info"
        );
        Ok(session)
    }
}

/// Extract the audio record of a file using the process-wide library.
///
/// # Errors
///
/// [`Error::FileNotFound`] if `path` is not an existing file, or a native
/// error if the library is unavailable or cannot open the file.
///
/// # Example
///
/// ```no_run
/// use mediainfo_wrapper::{audio_info, Complete, ParseSpeed};
///
/// let audio = audio_info("/music/track.flac", ParseSpeed::Fast, Complete::No)?;
/// println!("{:?} @ {:?} Hz", audio.codec, audio.sampling_rate);
/// # Ok::<(), mediainfo_wrapper::Error>(())
/// ```
pub fn audio_info(path: impl AsRef<Path>, speed: ParseSpeed, complete: Complete) -> Result<Audio> {
    Extractor::new().with_options(speed, complete).audio(path)
}

/// Extract the video record of a file using the process-wide library.
///
/// # Example
///
/// ```no_run
/// use mediainfo_wrapper::{video_info, Complete, ParseSpeed};
///
/// let video = video_info("/movies/feature.mkv", ParseSpeed::Full, Complete::Yes)?;
/// if let Some(label) = video.friendly_resolution() {
///     println!("{label}");
/// }
/// # Ok::<(), mediainfo_wrapper::Error>(())
/// ```
pub fn video_info(path: impl AsRef<Path>, speed: ParseSpeed, complete: Complete) -> Result<Video> {
    Extractor::new().with_options(speed, complete).video(path)
}
