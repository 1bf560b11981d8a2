//! Configuration loading feeding an [`Extractor`].

use assert_matches::assert_matches;
use mediainfo_wrapper::config::{load_config, load_config_or_default};
use mediainfo_wrapper::{Complete, Error, Extractor, NativeError, ParseOptions, ParseSpeed};
use mediainfo_native::LIBRARY_ENV;
use serial_test::serial;
use std::io::Write;

fn config_file(contents: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

#[test]
fn test_parse_switches_reach_extractor() {
    let file = config_file("[parse]\nspeed = \"full\"\ncomplete = \"yes\"\n");
    let config = load_config_or_default(Some(file.path())).unwrap();

    let extractor = Extractor::from_config(&config).unwrap();
    assert_eq!(
        extractor.options(),
        ParseOptions::new(ParseSpeed::Full, Complete::Yes)
    );
}

#[test]
fn test_configured_library_must_load() {
    let file = config_file("[library]\npath = \"/nonexistent/dir/libmediainfo.so.0\"\n");
    let config = load_config(file.path()).unwrap();

    let err = Extractor::from_config(&config).unwrap_err();
    assert_matches!(err, Error::Native(NativeError::LibraryUnavailable(_)));
}

#[test]
fn test_empty_file_is_default_config() {
    let file = config_file("");
    let config = load_config(file.path()).unwrap();
    assert!(config.library.path.is_none());
    assert_eq!(config.parse, ParseOptions::default());
}

#[test]
#[serial]
fn test_encoding_only_config_honours_env_override() {
    let file = config_file("[library]\nencoding = \"narrow\"\n");
    let config = load_config(file.path()).unwrap();

    let previous = std::env::var_os(LIBRARY_ENV);
    std::env::set_var(LIBRARY_ENV, "/nonexistent/dir/libmediainfo.so");

    let result = Extractor::from_config(&config);

    match previous {
        Some(v) => std::env::set_var(LIBRARY_ENV, v),
        None => std::env::remove_var(LIBRARY_ENV),
    }

    assert_matches!(
        result,
        Err(Error::Native(NativeError::LibraryUnavailable(msg))) if msg.contains("/nonexistent/dir")
    );
}
