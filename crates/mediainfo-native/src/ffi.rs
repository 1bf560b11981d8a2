//! Raw entry point table for libmediainfo.
//!
//! Signatures follow `MediaInfoDLL.h`. Enum arguments are passed as `c_int`,
//! stream and parameter numbers as `size_t`.

use crate::{Error, Result};
use std::ffi::{c_char, c_int, c_void};

/// Platform `wchar_t`.
#[cfg(windows)]
pub(crate) type WChar = u16;
#[cfg(not(windows))]
pub(crate) type WChar = u32;

pub(crate) type Handle = *mut c_void;

type NewFn = unsafe extern "C" fn() -> Handle;
type DeleteFn = unsafe extern "C" fn(Handle);
type CloseFn = unsafe extern "C" fn(Handle);
type OpenFn = unsafe extern "C" fn(Handle, *const WChar) -> usize;
type OpenAFn = unsafe extern "C" fn(Handle, *const c_char) -> usize;
type BufferInitFn = unsafe extern "C" fn(Handle, u64, u64) -> usize;
type BufferContinueFn = unsafe extern "C" fn(Handle, *const u8, usize) -> usize;
type BufferGoToGetFn = unsafe extern "C" fn(Handle) -> u64;
type BufferFinalizeFn = unsafe extern "C" fn(Handle) -> usize;
type InformFn = unsafe extern "C" fn(Handle, usize) -> *const WChar;
type InformAFn = unsafe extern "C" fn(Handle, usize) -> *const c_char;
type GetIFn = unsafe extern "C" fn(Handle, c_int, usize, usize, c_int) -> *const WChar;
type GetIAFn = unsafe extern "C" fn(Handle, c_int, usize, usize, c_int) -> *const c_char;
type GetFn =
    unsafe extern "C" fn(Handle, c_int, usize, *const WChar, c_int, c_int) -> *const WChar;
type GetAFn =
    unsafe extern "C" fn(Handle, c_int, usize, *const c_char, c_int, c_int) -> *const c_char;
type OptionFn = unsafe extern "C" fn(Handle, *const WChar, *const WChar) -> *const WChar;
type OptionAFn = unsafe extern "C" fn(Handle, *const c_char, *const c_char) -> *const c_char;
type StateGetFn = unsafe extern "C" fn(Handle) -> usize;
type CountGetFn = unsafe extern "C" fn(Handle, c_int, usize) -> usize;

/// Resolved function pointers. Only valid while the owning
/// `libloading::Library` is alive.
#[derive(Clone, Copy)]
pub(crate) struct Symbols {
    pub new: NewFn,
    pub delete: DeleteFn,
    pub close: CloseFn,
    pub open: OpenFn,
    pub open_a: OpenAFn,
    pub buffer_init: BufferInitFn,
    pub buffer_continue: BufferContinueFn,
    pub buffer_goto_get: BufferGoToGetFn,
    pub buffer_finalize: BufferFinalizeFn,
    pub inform: InformFn,
    pub inform_a: InformAFn,
    pub get_i: GetIFn,
    pub get_i_a: GetIAFn,
    pub get: GetFn,
    pub get_a: GetAFn,
    pub option: OptionFn,
    pub option_a: OptionAFn,
    pub state_get: StateGetFn,
    pub count_get: CountGetFn,
}

impl Symbols {
    pub(crate) fn resolve(lib: &libloading::Library) -> Result<Self> {
        Ok(Self {
            new: symbol(lib, b"MediaInfo_New\0")?,
            delete: symbol(lib, b"MediaInfo_Delete\0")?,
            close: symbol(lib, b"MediaInfo_Close\0")?,
            open: symbol(lib, b"MediaInfo_Open\0")?,
            open_a: symbol(lib, b"MediaInfoA_Open\0")?,
            buffer_init: symbol(lib, b"MediaInfo_Open_Buffer_Init\0")?,
            buffer_continue: symbol(lib, b"MediaInfo_Open_Buffer_Continue\0")?,
            buffer_goto_get: symbol(lib, b"MediaInfo_Open_Buffer_Continue_GoTo_Get\0")?,
            buffer_finalize: symbol(lib, b"MediaInfo_Open_Buffer_Finalize\0")?,
            inform: symbol(lib, b"MediaInfo_Inform\0")?,
            inform_a: symbol(lib, b"MediaInfoA_Inform\0")?,
            get_i: symbol(lib, b"MediaInfo_GetI\0")?,
            get_i_a: symbol(lib, b"MediaInfoA_GetI\0")?,
            get: symbol(lib, b"MediaInfo_Get\0")?,
            get_a: symbol(lib, b"MediaInfoA_Get\0")?,
            option: symbol(lib, b"MediaInfo_Option\0")?,
            option_a: symbol(lib, b"MediaInfoA_Option\0")?,
            state_get: symbol(lib, b"MediaInfo_State_Get\0")?,
            count_get: symbol(lib, b"MediaInfo_Count_Get\0")?,
        })
    }
}

fn symbol<T: Copy>(lib: &libloading::Library, name: &[u8]) -> Result<T> {
    // SAFETY: every `T` above matches the C prototype of the named export.
    let sym = unsafe { lib.get::<T>(name) }.map_err(|e| {
        let printable = String::from_utf8_lossy(&name[..name.len() - 1]);
        Error::library_unavailable(format!("missing entry point {printable}: {e}"))
    })?;
    Ok(*sym)
}
