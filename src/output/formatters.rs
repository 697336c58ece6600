//! Text rendering for channel posts

use crate::chat::UserDirectory;
use crate::core::Idiom;
use crate::scoring::{Scoreboard, Standing};
use crate::solver::Path;

/// First line of the results post
pub const RESULTS_HEADER: &str = ":stopwatch: 回答を締め切ります。本日の結果";

const BEST_MARK: &str = ":crown:";
const FIRST_BLOOD_MARK: &str = ":zap:";
const SOLVER_MARK: &str = ":robot_face:";

/// Join idioms with arrows
#[must_use]
pub fn format_chain(idioms: &[Idiom]) -> String {
    idioms
        .iter()
        .map(Idiom::to_string)
        .collect::<Vec<_>>()
        .join(" → ")
}

/// One results line: marks, display name, then the chain
#[must_use]
pub fn format_standing(standing: &Standing<'_>, users: &UserDirectory) -> String {
    let mut line = String::from("  ");
    if standing.is_best {
        line.push_str(BEST_MARK);
    }
    if standing.is_first_blood {
        line.push_str(FIRST_BLOOD_MARK);
    }

    line.push_str(users.display_name(standing.attempt.user()));
    line.push(' ');
    line.push_str(&format_chain(standing.attempt.idioms()));
    line
}

/// The full results post
#[must_use]
pub fn format_results(scoreboard: &Scoreboard, users: &UserDirectory) -> String {
    let mut lines = vec![RESULTS_HEADER.to_string()];

    if scoreboard.is_empty() {
        lines.push("  回答なし".to_string());
    } else {
        lines.extend(
            scoreboard
                .standings()
                .map(|standing| format_standing(&standing, users)),
        );
    }

    lines.join("\n")
}

/// The solver's answer line
#[must_use]
pub fn format_solution(solution: Option<&Path>) -> String {
    match solution {
        Some(path) => format!("{SOLVER_MARK} 模範解答 {path}"),
        None => format!("{SOLVER_MARK} 模範解答なし"),
    }
}
