//! String marshaling strategies for the two native entry point families.
//!
//! Every argument buffer lives only for the duration of the call it is
//! passed to. Returned pointers are owned by the library and are copied into
//! a `String` before the next call on the same handle.

use crate::ffi::{Handle, Symbols, WChar};
use crate::types::{Encoding, InfoKind, StreamKind};
use crate::{Error, Result};
use std::ffi::{c_char, CStr, CString};
use std::path::Path;

/// Capability interface over one entry point family.
///
/// # Safety
///
/// Every method requires `handle` to be a live handle produced by
/// `symbols.new` from the same library.
pub(crate) trait EntryPoints: Send + Sync {
    fn encoding(&self) -> Encoding;

    unsafe fn open(&self, symbols: &Symbols, handle: Handle, path: &Path) -> Result<bool>;

    #[allow(clippy::too_many_arguments)]
    unsafe fn get(
        &self,
        symbols: &Symbols,
        handle: Handle,
        kind: StreamKind,
        index: usize,
        parameter: &str,
        info: InfoKind,
        search: InfoKind,
    ) -> Result<Option<String>>;

    unsafe fn get_by_index(
        &self,
        symbols: &Symbols,
        handle: Handle,
        kind: StreamKind,
        index: usize,
        parameter: usize,
        info: InfoKind,
    ) -> Option<String>;

    unsafe fn option(
        &self,
        symbols: &Symbols,
        handle: Handle,
        name: &str,
        value: &str,
    ) -> Result<Option<String>>;

    unsafe fn inform(&self, symbols: &Symbols, handle: Handle) -> Option<String>;
}

/// `MediaInfo_*` entry points taking `wchar_t` strings.
pub(crate) struct Wide;

/// `MediaInfoA_*` entry points taking UTF-8 `char` strings.
pub(crate) struct Narrow;

static WIDE: Wide = Wide;
static NARROW: Narrow = Narrow;

/// Strategy for an encoding.
pub(crate) fn entry_points(encoding: Encoding) -> &'static dyn EntryPoints {
    match encoding {
        Encoding::Wide => &WIDE,
        Encoding::Narrow => &NARROW,
    }
}

impl EntryPoints for Wide {
    fn encoding(&self) -> Encoding {
        Encoding::Wide
    }

    unsafe fn open(&self, symbols: &Symbols, handle: Handle, path: &Path) -> Result<bool> {
        let path = wide_path(path)?;
        Ok((symbols.open)(handle, path.as_ptr()) != 0)
    }

    unsafe fn get(
        &self,
        symbols: &Symbols,
        handle: Handle,
        kind: StreamKind,
        index: usize,
        parameter: &str,
        info: InfoKind,
        search: InfoKind,
    ) -> Result<Option<String>> {
        let parameter = wide(parameter)?;
        let ptr = (symbols.get)(
            handle,
            kind.as_raw(),
            index,
            parameter.as_ptr(),
            info.as_raw(),
            search.as_raw(),
        );
        Ok(read_wide(ptr))
    }

    unsafe fn get_by_index(
        &self,
        symbols: &Symbols,
        handle: Handle,
        kind: StreamKind,
        index: usize,
        parameter: usize,
        info: InfoKind,
    ) -> Option<String> {
        read_wide((symbols.get_i)(handle, kind.as_raw(), index, parameter, info.as_raw()))
    }

    unsafe fn option(
        &self,
        symbols: &Symbols,
        handle: Handle,
        name: &str,
        value: &str,
    ) -> Result<Option<String>> {
        let name = wide(name)?;
        let value = wide(value)?;
        Ok(read_wide((symbols.option)(handle, name.as_ptr(), value.as_ptr())))
    }

    unsafe fn inform(&self, symbols: &Symbols, handle: Handle) -> Option<String> {
        read_wide((symbols.inform)(handle, 0))
    }
}

impl EntryPoints for Narrow {
    fn encoding(&self) -> Encoding {
        Encoding::Narrow
    }

    unsafe fn open(&self, symbols: &Symbols, handle: Handle, path: &Path) -> Result<bool> {
        let path = narrow_path(path)?;
        Ok((symbols.open_a)(handle, path.as_ptr()) != 0)
    }

    unsafe fn get(
        &self,
        symbols: &Symbols,
        handle: Handle,
        kind: StreamKind,
        index: usize,
        parameter: &str,
        info: InfoKind,
        search: InfoKind,
    ) -> Result<Option<String>> {
        let parameter = narrow(parameter)?;
        let ptr = (symbols.get_a)(
            handle,
            kind.as_raw(),
            index,
            parameter.as_ptr(),
            info.as_raw(),
            search.as_raw(),
        );
        Ok(read_narrow(ptr))
    }

    unsafe fn get_by_index(
        &self,
        symbols: &Symbols,
        handle: Handle,
        kind: StreamKind,
        index: usize,
        parameter: usize,
        info: InfoKind,
    ) -> Option<String> {
        read_narrow((symbols.get_i_a)(handle, kind.as_raw(), index, parameter, info.as_raw()))
    }

    unsafe fn option(
        &self,
        symbols: &Symbols,
        handle: Handle,
        name: &str,
        value: &str,
    ) -> Result<Option<String>> {
        let name = narrow(name)?;
        let value = narrow(value)?;
        Ok(read_narrow((symbols.option_a)(handle, name.as_ptr(), value.as_ptr())))
    }

    unsafe fn inform(&self, symbols: &Symbols, handle: Handle) -> Option<String> {
        read_narrow((symbols.inform_a)(handle, 0))
    }
}

fn nul_error(s: &str) -> Error {
    Error::invalid_argument(format!("{s:?} contains a NUL character"))
}

fn narrow(s: &str) -> Result<CString> {
    CString::new(s).map_err(|_| nul_error(s))
}

#[cfg(unix)]
fn narrow_path(path: &Path) -> Result<CString> {
    use std::os::unix::ffi::OsStrExt;
    CString::new(path.as_os_str().as_bytes())
        .map_err(|_| nul_error(&path.to_string_lossy()))
}

#[cfg(not(unix))]
fn narrow_path(path: &Path) -> Result<CString> {
    narrow(&path.to_string_lossy())
}

fn wide(s: &str) -> Result<Vec<WChar>> {
    if s.contains('\0') {
        return Err(nul_error(s));
    }
    Ok(encode_wide(s))
}

#[cfg(windows)]
fn encode_wide(s: &str) -> Vec<WChar> {
    s.encode_utf16().chain(std::iter::once(0)).collect()
}

#[cfg(not(windows))]
fn encode_wide(s: &str) -> Vec<WChar> {
    s.chars().map(|c| c as WChar).chain(std::iter::once(0)).collect()
}

#[cfg(windows)]
fn wide_path(path: &Path) -> Result<Vec<WChar>> {
    use std::os::windows::ffi::OsStrExt;
    let units: Vec<WChar> = path.as_os_str().encode_wide().collect();
    if units.contains(&0) {
        return Err(nul_error(&path.to_string_lossy()));
    }
    Ok(units.into_iter().chain(std::iter::once(0)).collect())
}

#[cfg(not(windows))]
fn wide_path(path: &Path) -> Result<Vec<WChar>> {
    wide(&path.to_string_lossy())
}

/// Copy a NUL-terminated `char` string owned by the library.
unsafe fn read_narrow(ptr: *const c_char) -> Option<String> {
    if ptr.is_null() {
        return None;
    }
    Some(CStr::from_ptr(ptr).to_string_lossy().into_owned())
}

/// Copy a NUL-terminated `wchar_t` string owned by the library.
unsafe fn read_wide(ptr: *const WChar) -> Option<String> {
    if ptr.is_null() {
        return None;
    }
    let mut len = 0;
    while *ptr.add(len) != 0 {
        len += 1;
    }
    Some(decode_wide(std::slice::from_raw_parts(ptr, len)))
}

#[cfg(windows)]
fn decode_wide(units: &[WChar]) -> String {
    String::from_utf16_lossy(units)
}

#[cfg(not(windows))]
fn decode_wide(units: &[WChar]) -> String {
    units
        .iter()
        .map(|&u| char::from_u32(u).unwrap_or(char::REPLACEMENT_CHARACTER))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::ptr;

    #[test]
    fn test_entry_points_selection() {
        assert_eq!(entry_points(Encoding::Wide).encoding(), Encoding::Wide);
        assert_eq!(entry_points(Encoding::Narrow).encoding(), Encoding::Narrow);
    }

    #[test]
    fn test_interior_nul_rejected() {
        assert!(matches!(narrow("Form\0at"), Err(Error::InvalidArgument(_))));
        assert!(matches!(wide("Form\0at"), Err(Error::InvalidArgument(_))));
    }

    #[test]
    fn test_wide_is_nul_terminated() {
        let encoded = wide("Höhe").unwrap();
        assert_eq!(encoded.len(), 5);
        assert_eq!(encoded.last(), Some(&0));
    }

    #[test]
    fn test_read_null_pointers() {
        unsafe {
            assert_eq!(read_narrow(ptr::null()), None);
            assert_eq!(read_wide(ptr::null()), None);
        }
    }

    #[test]
    fn test_read_library_strings() {
        let narrow_buf = CString::new("MPEG-4").unwrap();
        let wide_buf = encode_wide("Matroska ✓");
        unsafe {
            assert_eq!(read_narrow(narrow_buf.as_ptr()).as_deref(), Some("MPEG-4"));
            assert_eq!(read_wide(wide_buf.as_ptr()).as_deref(), Some("Matroska ✓"));
        }
    }

    #[cfg(unix)]
    #[test]
    fn test_narrow_path_keeps_raw_bytes() {
        let path = Path::new("/media/Film (2019)/film.mkv");
        let c = narrow_path(path).unwrap();
        assert_eq!(c.as_bytes(), b"/media/Film (2019)/film.mkv");
    }
}
