//! Idiom dictionary and kanji pool
//!
//! Provides the embedded resources compiled into the binary and the loader
//! that turns a dictionary into an `IdiomGraph`.

mod embedded;
pub mod loader;

pub use embedded::{DICTIONARY_GZ, KANJI, KANJI_COUNT};
pub use loader::{IdiomError, load_embedded, load_from_file};
