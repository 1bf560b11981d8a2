//! Shared helpers for tests that exercise the real native library.

#![allow(dead_code)]

use mediainfo_native::Library;
use std::io::Write;
use std::path::PathBuf;
use std::sync::Arc;

/// The process-wide library, or `None` when libmediainfo is not installed.
///
/// Tests that need native calls return early on `None`.
pub fn library() -> Option<Arc<Library>> {
    match Library::shared() {
        Ok(lib) => Some(lib),
        Err(e) => {
            eprintln!("skipping: {e}");
            None
        }
    }
}

/// Install a test log subscriber once.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// Bytes of a mono 16-bit PCM WAV file with `samples` silent samples.
pub fn wav_bytes(sample_rate: u32, samples: u32) -> Vec<u8> {
    let data_len = samples * 2;
    let mut out = Vec::with_capacity(44 + data_len as usize);
    out.extend_from_slice(b"RIFF");
    out.extend_from_slice(&(36 + data_len).to_le_bytes());
    out.extend_from_slice(b"WAVE");
    out.extend_from_slice(b"fmt ");
    out.extend_from_slice(&16u32.to_le_bytes());
    out.extend_from_slice(&1u16.to_le_bytes()); // PCM
    out.extend_from_slice(&1u16.to_le_bytes()); // mono
    out.extend_from_slice(&sample_rate.to_le_bytes());
    out.extend_from_slice(&(sample_rate * 2).to_le_bytes());
    out.extend_from_slice(&2u16.to_le_bytes());
    out.extend_from_slice(&16u16.to_le_bytes());
    out.extend_from_slice(b"data");
    out.extend_from_slice(&data_len.to_le_bytes());
    out.resize(44 + data_len as usize, 0);
    out
}

/// Write a one second 8 kHz WAV file into `dir`.
pub fn write_wav(dir: &tempfile::TempDir) -> PathBuf {
    let path = dir.path().join("tone.wav");
    let mut file = std::fs::File::create(&path).expect("create wav");
    file.write_all(&wav_bytes(8000, 8000)).expect("write wav");
    path
}
