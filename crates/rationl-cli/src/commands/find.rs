//! List the matches in an input.

use std::borrow::Cow;
use std::path::PathBuf;

use rationl_lib::{Colors, Match};
use serde::Serialize;

use super::input::load_input_or_exit;
use super::{EngineArgs, compile_or_exit};

pub struct FindArgs {
    pub pattern: String,
    pub input_path: Option<PathBuf>,
    pub input_text: Option<String>,
    pub engine: EngineArgs,
    pub json: bool,
    pub color: bool,
}

/// One match as a JSON record.
#[derive(Debug, Serialize)]
pub struct FoundMatch<'t> {
    pub start: usize,
    pub end: usize,
    pub text: Cow<'t, str>,
}

impl<'t> From<Match<'t>> for FoundMatch<'t> {
    fn from(m: Match<'t>) -> Self {
        Self {
            start: m.start(),
            end: m.end(),
            text: String::from_utf8_lossy(m.as_bytes()),
        }
    }
}

pub fn run(args: FindArgs) {
    let automaton = compile_or_exit(&args.pattern, &args.engine.builder(), args.color);
    let input = load_input_or_exit(args.input_path.as_deref(), args.input_text.as_deref());
    let colors = Colors::new(args.color);

    for m in automaton.find_matches(&input) {
        if !args.json {
            println!("{}", render_plain(&m, colors));
            continue;
        }
        match render_json(&m) {
            Ok(json) => println!("{}", json),
            Err(e) => {
                eprintln!("error: JSON serialization failed: {}", e);
                std::process::exit(1);
            }
        }
    }
}

/// `start..end text`, with control characters in the text escaped.
pub fn render_plain(m: &Match<'_>, colors: Colors) -> String {
    let text = String::from_utf8_lossy(m.as_bytes());
    format!(
        "{}{}..{}{} {}",
        colors.blue,
        m.start(),
        m.end(),
        colors.reset,
        text.escape_debug()
    )
}

pub fn render_json(m: &Match<'_>) -> serde_json::Result<String> {
    serde_json::to_string(&FoundMatch::from(*m))
}
