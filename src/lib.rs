//! Kanji Idiom Chain Puzzle
//!
//! Runs a daily word-chain puzzle over a chat channel: a question asks for a
//! chain of two-character idioms linking one kanji to another, replies are
//! parsed and ranked, and a breadth-first solver supplies its own answer.
//!
//! # Quick Start
//!
//! ```rust
//! use jukugo_chain::core::{Message, Timestamp};
//! use jukugo_chain::scoring::{Scoreboard, extract_question, parse_attempts};
//! use jukugo_chain::solver::{IdiomGraph, solve};
//!
//! let messages = vec![
//!     Message::plain("U1", "天寒 → 寒餅", Timestamp::from_secs(2.0)),
//!     Message::bot("B1", "今日の問題： [天]から[餅]まで繋げて下さい", Timestamp::from_secs(1.0)),
//! ];
//!
//! let question = extract_question(&messages).unwrap();
//! let scoreboard = Scoreboard::new(parse_attempts(&question, &messages));
//! assert_eq!(scoreboard.best().unwrap().user(), "U1");
//!
//! let graph = IdiomGraph::from_lines(["天寒", "寒餅"]);
//! let path = solve(&graph, question.start, question.end).unwrap();
//! assert_eq!(path.to_string(), "天寒 → 寒餅");
//! ```

// Core domain types
pub mod core;

// Dictionary resources
pub mod idioms;

// Shortest chain search
pub mod solver;

// Question extraction, attempt parsing and ranking
pub mod scoring;

// Chat platform clients
pub mod chat;

// Command implementations
pub mod commands;

// Runtime configuration
pub mod config;

// Post and terminal formatting
pub mod output;
