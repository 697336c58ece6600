//! Embedded dictionary and kanji pool
//!
//! Resources compiled into the binary at build time.

// Include generated kanji pool from build script
include!(concat!(env!("OUT_DIR"), "/kanji.rs"));

/// Gzip-compressed idiom dictionary, one idiom per line
pub const DICTIONARY_GZ: &[u8] = include_bytes!(concat!(env!("OUT_DIR"), "/idioms.txt.gz"));
