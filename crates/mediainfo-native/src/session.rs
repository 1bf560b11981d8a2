//! Owned native analysis sessions.
//!
//! A [`Session`] owns exactly one `MediaInfo_New` handle and deletes it once,
//! on [`Session::close`] or on drop, whichever happens first.

use crate::ffi::Handle;
use crate::library::Library;
use crate::types::{BufferStatus, Encoding, InfoKind, StreamKind};
use crate::{Error, Result};
use std::io::{Read, Seek, SeekFrom};
use std::path::Path;
use std::ptr::{self, NonNull};
use std::sync::Arc;

const BUFFER_CHUNK: usize = 64 * 1024;

/// One native MediaInfo analysis context.
///
/// Sessions can be moved to another thread but not shared between threads.
pub struct Session {
    library: Option<Arc<Library>>,
    handle: Option<NonNull<std::ffi::c_void>>,
}

// SAFETY: the handle is exclusively owned and never aliased; libmediainfo
// handles are not tied to the thread that created them.
unsafe impl Send for Session {}

impl Session {
    /// Create a session on the process-wide library.
    ///
    /// If the library cannot be loaded the session is created invalid and
    /// every operation on it fails with [`Error::InvalidHandle`].
    pub fn new() -> Self {
        Self::from_library(Library::shared().ok())
    }

    /// Create a session on a specific library, or an invalid session for `None`.
    pub fn from_library(library: Option<Arc<Library>>) -> Self {
        let Some(library) = library else {
            tracing::warn!("no MediaInfo library available; session is invalid");
            return Self {
                library: None,
                handle: None,
            };
        };

        // SAFETY: MediaInfo_New takes no arguments and returns an owned handle or null.
        let handle = NonNull::new(unsafe { (library.symbols().new)() });
        if handle.is_none() {
            tracing::warn!(library = library.name(), "MediaInfo_New returned null");
        }

        let session = Self {
            library: Some(library),
            handle,
        };

        if session.encoding() == Some(Encoding::Narrow) {
            // Single-byte entry points read and return UTF-8.
            if let Err(e) = session.option("CharSet", "UTF-8") {
                tracing::debug!(error = %e, "could not select UTF-8 for narrow entry points");
            }
        }

        tracing::debug!(valid = session.is_valid(), "created MediaInfo session");
        session
    }

    /// Whether the session holds a live native handle.
    pub fn is_valid(&self) -> bool {
        self.handle.is_some()
    }

    /// Entry point family used by this session, if it has a library.
    pub fn encoding(&self) -> Option<Encoding> {
        self.library.as_ref().map(|lib| lib.encoding())
    }

    /// The raw handle, or null once released or if never created.
    fn raw(&self) -> Handle {
        self.handle.map_or(ptr::null_mut(), NonNull::as_ptr)
    }

    fn live(&self) -> Result<(&Library, Handle)> {
        let raw = self.raw();
        match &self.library {
            Some(library) if !raw.is_null() => Ok((library, raw)),
            _ => Err(Error::InvalidHandle),
        }
    }

    /// Open a file for analysis.
    pub fn open(&mut self, path: &Path) -> Result<()> {
        let (library, handle) = self.live()?;

        // SAFETY: `handle` is live and belongs to `library`.
        let opened = unsafe {
            library
                .entry_points()
                .open(library.symbols(), handle, path)?
        };

        if !opened {
            return Err(Error::open_failed(path));
        }

        tracing::debug!(path = %path.display(), "opened media file");
        Ok(())
    }

    /// Analyse data pulled from a reader instead of a named file.
    ///
    /// The library may ask to continue from another offset; the reader is
    /// seeked accordingly.
    pub fn open_reader<R: Read + Seek>(&mut self, reader: &mut R) -> Result<BufferStatus> {
        let (library, handle) = self.live()?;
        let symbols = library.symbols();

        let size = reader.seek(SeekFrom::End(0))?;
        reader.seek(SeekFrom::Start(0))?;

        // SAFETY: `handle` is live for every call below; the buffer outlives each call.
        unsafe { (symbols.buffer_init)(handle, size, 0) };

        let mut status = BufferStatus::default();
        let mut chunk = vec![0u8; BUFFER_CHUNK];
        loop {
            let read = reader.read(&mut chunk)?;
            if read == 0 {
                break;
            }

            let bits = unsafe { (symbols.buffer_continue)(handle, chunk.as_ptr(), read) };
            status = status.merge(BufferStatus::from_bits(bits));
            if status.is_finalized() {
                break;
            }

            let goto = unsafe { (symbols.buffer_goto_get)(handle) };
            if goto != u64::MAX {
                tracing::trace!(offset = goto, "MediaInfo requested seek");
                reader.seek(SeekFrom::Start(goto))?;
                unsafe { (symbols.buffer_init)(handle, size, goto) };
            }
        }

        unsafe { (symbols.buffer_finalize)(handle) };

        if !status.is_accepted() {
            return Err(Error::BufferRejected);
        }
        Ok(status)
    }

    /// Look up a parameter of one stream.
    ///
    /// A null native response is `None`; the library reports unknown
    /// parameters as empty strings, which are returned unchanged.
    pub fn get(
        &self,
        kind: StreamKind,
        index: usize,
        parameter: &str,
        info: InfoKind,
        search: InfoKind,
    ) -> Result<Option<String>> {
        let (library, handle) = self.live()?;
        if parameter.is_empty() {
            return Err(Error::invalid_argument("parameter must be non-empty"));
        }

        // SAFETY: `handle` is live and belongs to `library`.
        unsafe {
            library.entry_points().get(
                library.symbols(),
                handle,
                kind,
                index,
                parameter,
                info,
                search,
            )
        }
    }

    /// Look up a parameter by its position within the stream.
    pub fn get_by_index(
        &self,
        kind: StreamKind,
        index: usize,
        parameter: usize,
        info: InfoKind,
    ) -> Result<Option<String>> {
        let (library, handle) = self.live()?;
        // SAFETY: `handle` is live and belongs to `library`.
        Ok(unsafe {
            library
                .entry_points()
                .get_by_index(library.symbols(), handle, kind, index, parameter, info)
        })
    }

    /// Set or query a library option such as `ParseSpeed` or `Info_Version`.
    pub fn option(&self, name: &str, value: &str) -> Result<Option<String>> {
        let (library, handle) = self.live()?;
        if name.is_empty() {
            return Err(Error::invalid_argument("option must be non-empty"));
        }

        tracing::trace!(option = name, value, "setting MediaInfo option");
        // SAFETY: `handle` is live and belongs to `library`.
        unsafe {
            library
                .entry_points()
                .option(library.symbols(), handle, name, value)
        }
    }

    /// Number of streams of a kind.
    pub fn count(&self, kind: StreamKind) -> Result<usize> {
        let (library, handle) = self.live()?;
        // SAFETY: `handle` is live; `usize::MAX` is the native "all streams" marker.
        Ok(unsafe { (library.symbols().count_get)(handle, kind.as_raw(), usize::MAX) })
    }

    /// Number of parameters available in one stream.
    pub fn field_count(&self, kind: StreamKind, index: usize) -> Result<usize> {
        let (library, handle) = self.live()?;
        // SAFETY: `handle` is live and belongs to `library`.
        Ok(unsafe { (library.symbols().count_get)(handle, kind.as_raw(), index) })
    }

    /// Text report of the opened file, formatted per the `Inform` option.
    pub fn inform(&self) -> Result<Option<String>> {
        let (library, handle) = self.live()?;
        // SAFETY: `handle` is live and belongs to `library`.
        Ok(unsafe { library.entry_points().inform(library.symbols(), handle) })
    }

    /// Parsing progress, 0 to 10000.
    pub fn state(&self) -> Result<usize> {
        let (library, handle) = self.live()?;
        // SAFETY: `handle` is live and belongs to `library`.
        Ok(unsafe { (library.symbols().state_get)(handle) })
    }

    /// Close the opened file, keeping the session usable for another open.
    pub fn close_file(&mut self) -> Result<()> {
        let (library, handle) = self.live()?;
        // SAFETY: `handle` is live and belongs to `library`.
        unsafe { (library.symbols().close)(handle) };
        Ok(())
    }

    /// Release the native handle. Later calls do nothing.
    pub fn close(&mut self) {
        self.release();
    }

    fn release(&mut self) {
        let Some(handle) = self.handle.take() else {
            return;
        };
        if let Some(library) = &self.library {
            // SAFETY: taken out of `self.handle`, so this is the only delete.
            unsafe { (library.symbols().delete)(handle.as_ptr()) };
            tracing::debug!("released MediaInfo session");
        }
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for Session {
    fn drop(&mut self) {
        self.release();
    }
}

impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session")
            .field("library", &self.library.as_ref().map(|l| l.name()))
            .field("valid", &self.is_valid())
            .finish()
    }
}
