//! Rendering of a simulation outcome for the CLI.

use anyhow::{Context, Result};
use serde::Serialize;

use crate::core::direction::Direction;
use crate::core::driver::Outcome;

/// JSON report shape for `solve --json`.
#[derive(Debug, Serialize)]
#[serde(tag = "outcome", rename_all = "lowercase")]
enum Report<'a> {
    Finished { moves: &'a [Direction] },
    Loop,
}

/// Line protocol: the literal `LOOP`, or one direction token per line from
/// start to goal.
pub fn render_text(outcome: &Outcome) -> String {
    match outcome {
        Outcome::LoopDetected => "LOOP\n".to_string(),
        Outcome::Finished(moves) => {
            let mut out = String::new();
            for dir in moves {
                out.push_str(&dir.to_string());
                out.push('\n');
            }
            out
        }
    }
}

/// Single-line JSON report with trailing newline.
pub fn render_json(outcome: &Outcome) -> Result<String> {
    let report = match outcome {
        Outcome::Finished(moves) => Report::Finished { moves },
        Outcome::LoopDetected => Report::Loop,
    };
    let mut payload = serde_json::to_string(&report).context("serialize report")?;
    payload.push('\n');
    Ok(payload)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_prints_one_token_per_line() {
        let outcome = Outcome::Finished(vec![Direction::East, Direction::South]);
        assert_eq!(render_text(&outcome), "EAST\nSOUTH\n");
    }

    #[test]
    fn text_prints_loop_token() {
        assert_eq!(render_text(&Outcome::LoopDetected), "LOOP\n");
    }

    #[test]
    fn json_report_shapes() {
        let finished = Outcome::Finished(vec![Direction::East]);
        assert_eq!(
            render_json(&finished).expect("render"),
            "{\"outcome\":\"finished\",\"moves\":[\"EAST\"]}\n"
        );
        assert_eq!(
            render_json(&Outcome::LoopDetected).expect("render"),
            "{\"outcome\":\"loop\"}\n"
        );
    }
}
