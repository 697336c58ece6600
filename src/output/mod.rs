//! Output formatting
//!
//! Text for channel posts and pretty-printing for the terminal.

pub mod display;
pub mod formatters;

pub use display::{print_answer_posted, print_question_posted, print_solve_result};
pub use formatters::{format_chain, format_results, format_solution};
