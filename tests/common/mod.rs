//! Shared helpers for integration tests.
//!
//! Provides a WAV fixture writer and a probe for the native library so tests
//! that need it can skip cleanly when libmediainfo is not installed.

#![allow(dead_code)]

use mediainfo_wrapper::Library;
use std::io::Write;
use std::path::PathBuf;
use std::sync::Arc;

/// The process-wide library, or `None` when it cannot be loaded.
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

/// Write a mono 16-bit PCM WAV file lasting `millis` at `sample_rate`.
pub fn write_wav(dir: &tempfile::TempDir, name: &str, sample_rate: u32, millis: u32) -> PathBuf {
    let samples = sample_rate / 1000 * millis;
    let data_len = samples * 2;

    let mut bytes = Vec::with_capacity(44 + data_len as usize);
    bytes.extend_from_slice(b"RIFF");
    bytes.extend_from_slice(&(36 + data_len).to_le_bytes());
    bytes.extend_from_slice(b"WAVEfmt ");
    bytes.extend_from_slice(&16u32.to_le_bytes());
    bytes.extend_from_slice(&1u16.to_le_bytes());
    bytes.extend_from_slice(&1u16.to_le_bytes());
    bytes.extend_from_slice(&sample_rate.to_le_bytes());
    bytes.extend_from_slice(&(sample_rate * 2).to_le_bytes());
    bytes.extend_from_slice(&2u16.to_le_bytes());
    bytes.extend_from_slice(&16u16.to_le_bytes());
    bytes.extend_from_slice(b"data");
    bytes.extend_from_slice(&data_len.to_le_bytes());
    bytes.resize(44 + data_len as usize, 0);

    let path = dir.path().join(name);
    let mut file = std::fs::File::create(&path).expect("create wav");
    file.write_all(&bytes).expect("write wav");
    path
}

fn riff_chunk(id: &[u8; 4], body: &[u8]) -> Vec<u8> {
    let mut out = Vec::with_capacity(8 + body.len() + 1);
    out.extend_from_slice(id);
    out.extend_from_slice(&(body.len() as u32).to_le_bytes());
    out.extend_from_slice(body);
    if body.len() % 2 == 1 {
        out.push(0);
    }
    out
}

fn riff_list(kind: &[u8; 4], children: &[Vec<u8>]) -> Vec<u8> {
    let mut body = kind.to_vec();
    for child in children {
        body.extend_from_slice(child);
    }
    riff_chunk(b"LIST", &body)
}

fn u32s(values: &[u32]) -> Vec<u8> {
    values.iter().flat_map(|v| v.to_le_bytes()).collect()
}

/// Write an uncompressed 24-bit RGB AVI of `frames` black frames at 25 fps.
pub fn write_avi(
    dir: &tempfile::TempDir,
    name: &str,
    width: u32,
    height: u32,
    frames: u32,
) -> PathBuf {
    let frame_len = width * height * 3;

    let avih = u32s(&[
        40_000,         // microseconds per frame
        frame_len * 25, // max bytes per second
        0,
        0x10, // AVIF_HASINDEX
        frames,
        0,
        1, // streams
        frame_len,
        width,
        height,
        0,
        0,
        0,
        0,
    ]);

    let mut strh = Vec::with_capacity(56);
    strh.extend_from_slice(b"vids");
    strh.extend_from_slice(b"DIB ");
    strh.extend_from_slice(&0u32.to_le_bytes()); // flags
    strh.extend_from_slice(&0u16.to_le_bytes()); // priority
    strh.extend_from_slice(&0u16.to_le_bytes()); // language
    strh.extend_from_slice(&u32s(&[0, 1, 25, 0, frames, frame_len, u32::MAX, 0]));
    for edge in [0u16, 0, width as u16, height as u16] {
        strh.extend_from_slice(&edge.to_le_bytes());
    }

    let mut strf = Vec::with_capacity(40);
    strf.extend_from_slice(&40u32.to_le_bytes());
    strf.extend_from_slice(&(width as i32).to_le_bytes());
    strf.extend_from_slice(&(height as i32).to_le_bytes());
    strf.extend_from_slice(&1u16.to_le_bytes()); // planes
    strf.extend_from_slice(&24u16.to_le_bytes()); // bits per pixel
    strf.extend_from_slice(&u32s(&[0, frame_len, 0, 0, 0, 0]));

    let hdrl = riff_list(
        b"hdrl",
        &[
            riff_chunk(b"avih", &avih),
            riff_list(b"strl", &[riff_chunk(b"strh", &strh), riff_chunk(b"strf", &strf)]),
        ],
    );

    let frame = vec![0u8; frame_len as usize];
    let movi_frames: Vec<Vec<u8>> = (0..frames).map(|_| riff_chunk(b"00db", &frame)).collect();
    let movi = riff_list(b"movi", &movi_frames);

    // Offsets are relative to the "movi" list type.
    let mut idx1 = Vec::with_capacity(16 * frames as usize);
    let mut offset = 4u32;
    for chunk in &movi_frames {
        idx1.extend_from_slice(b"00db");
        idx1.extend_from_slice(&u32s(&[0x10, offset, frame_len]));
        offset += chunk.len() as u32;
    }

    let mut body = b"AVI ".to_vec();
    body.extend_from_slice(&hdrl);
    body.extend_from_slice(&movi);
    body.extend_from_slice(&riff_chunk(b"idx1", &idx1));

    let path = dir.path().join(name);
    std::fs::write(&path, riff_chunk(b"RIFF", &body)).expect("write avi");
    path
}
