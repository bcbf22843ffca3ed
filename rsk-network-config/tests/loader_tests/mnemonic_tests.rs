//! Tests for reading and checking the seed phrase

use crate::helpers::{memory_source, with_captured_logs, ELEVEN_WORDS, VALID_MNEMONIC};
use crate::init_logger;
use rsk_network_config::{ConfigError, LoaderConfig, SecretAndGasLoader};
use std::path::Path;

const SEED_FILE: &str = ".testnet.seed-phrase";

fn loader_with(contents: &str, strict: bool) -> SecretAndGasLoader<impl rsk_network_config::source::TextSource> {
    let config = LoaderConfig {
        strict_mnemonic: strict,
        ..LoaderConfig::default()
    };
    SecretAndGasLoader::with_source(config, memory_source(&[(SEED_FILE, contents)]))
}

#[test]
fn test_valid_mnemonic_keeps_words_in_order() {
    let loader = loader_with(&format!("  {}\n", VALID_MNEMONIC), false);

    let (mnemonic, logs) = with_captured_logs(|| loader.load_mnemonic(Path::new(SEED_FILE)));
    let mnemonic = mnemonic.unwrap();

    assert!(mnemonic.is_valid());
    assert_eq!(mnemonic.as_str(), VALID_MNEMONIC);
    let expected: Vec<&str> = VALID_MNEMONIC.split(' ').collect();
    assert_eq!(mnemonic.words(), expected.as_slice());
    assert!(!logs.contains("unable to retrieve mnemonic"), "{logs}");
}

#[test]
fn test_eleven_words_is_logged_not_raised() {
    let loader = loader_with(ELEVEN_WORDS, false);

    let (mnemonic, logs) = with_captured_logs(|| loader.load_mnemonic(Path::new(SEED_FILE)));
    let mnemonic = mnemonic.unwrap();

    assert_eq!(mnemonic.word_count(), 11);
    assert!(!mnemonic.is_valid());
    assert!(logs.contains("unable to retrieve mnemonic"), "{logs}");
    assert!(logs.contains("found 11"), "{logs}");
}

#[test]
fn test_empty_file_is_logged_not_raised() {
    let loader = loader_with(" \n\t", false);

    let (mnemonic, logs) = with_captured_logs(|| loader.load_mnemonic(Path::new(SEED_FILE)));
    let mnemonic = mnemonic.unwrap();

    assert!(mnemonic.is_empty());
    assert_eq!(mnemonic.as_str(), "");
    assert!(logs.contains("unable to retrieve mnemonic"), "{logs}");
}

#[test]
fn test_doubled_space_counts_as_a_word() {
    let phrase = VALID_MNEMONIC.replacen(' ', "  ", 1);
    let loader = loader_with(&phrase, false);

    let mnemonic = loader.load_mnemonic(Path::new(SEED_FILE)).unwrap();

    assert_eq!(mnemonic.word_count(), 13);
    assert!(!mnemonic.is_valid());
}

#[test]
fn test_strict_mode_rejects_short_phrase() {
    init_logger();
    let loader = loader_with(ELEVEN_WORDS, true);

    let err = loader.load_mnemonic(Path::new(SEED_FILE)).unwrap_err();

    assert!(matches!(err, ConfigError::InvalidMnemonic { words: 11, .. }), "{err:?}");
    assert_eq!(err.code(), "INVALID_MNEMONIC");
}

#[test]
fn test_strict_mode_accepts_valid_phrase() {
    init_logger();
    let loader = loader_with(VALID_MNEMONIC, true);

    assert!(loader.load_mnemonic(Path::new(SEED_FILE)).unwrap().is_valid());
}

#[test]
fn test_missing_file_is_fatal() {
    init_logger();
    let loader = SecretAndGasLoader::with_source(LoaderConfig::default(), memory_source(&[]));

    let err = loader.load_mnemonic(Path::new(SEED_FILE)).unwrap_err();

    assert!(matches!(err, ConfigError::Read { .. }), "{err:?}");
}

#[test]
fn test_debug_output_hides_phrase() {
    let loader = loader_with(VALID_MNEMONIC, false);
    let mnemonic = loader.load_mnemonic(Path::new(SEED_FILE)).unwrap();

    assert!(!format!("{:?}", mnemonic).contains("junk"));
}
