//! Dispatch logic: extract params from ArgMatches and convert to command args.
//!
//! `*Params` structs mirror the command `*Args` but hold what clap parsed
//! (color as a choice, verbosity as a count). The `From` impls resolve
//! those into what the command handlers run with.

use std::path::PathBuf;

use clap::ArgMatches;
use rationl_lib::{Strategy, Verbosity};

use super::ColorChoice;
use crate::commands::EngineArgs;
use crate::commands::ast::AstArgs;
use crate::commands::check::CheckArgs;
use crate::commands::find::FindArgs;
use crate::commands::matching::MatchArgs;
use crate::commands::trace::TraceArgs;

pub struct CheckParams {
    pub pattern: String,
    pub color: ColorChoice,
}

impl CheckParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            pattern: parse_pattern(m),
            color: parse_color(m),
        }
    }
}

impl From<CheckParams> for CheckArgs {
    fn from(p: CheckParams) -> Self {
        Self {
            pattern: p.pattern,
            color: p.color.should_colorize(),
        }
    }
}

pub struct AstParams {
    pub pattern: String,
    pub color: ColorChoice,
}

impl AstParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            pattern: parse_pattern(m),
            color: parse_color(m),
        }
    }
}

impl From<AstParams> for AstArgs {
    fn from(p: AstParams) -> Self {
        Self {
            pattern: p.pattern,
            color: p.color.should_colorize(),
        }
    }
}

pub struct MatchParams {
    pub pattern: String,
    pub input_path: Option<PathBuf>,
    pub input_text: Option<String>,
    pub strategy: Strategy,
    pub cache_capacity: Option<usize>,
    pub color: ColorChoice,
}

impl MatchParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            pattern: parse_pattern(m),
            input_path: m.get_one::<PathBuf>("input_path").cloned(),
            input_text: m.get_one::<String>("input_text").cloned(),
            strategy: parse_strategy(m),
            cache_capacity: m.get_one::<usize>("cache_capacity").copied(),
            color: parse_color(m),
        }
    }
}

impl From<MatchParams> for MatchArgs {
    fn from(p: MatchParams) -> Self {
        Self {
            pattern: p.pattern,
            input_path: p.input_path,
            input_text: p.input_text,
            engine: EngineArgs {
                strategy: p.strategy,
                cache_capacity: p.cache_capacity,
            },
            color: p.color.should_colorize(),
        }
    }
}

pub struct FindParams {
    pub pattern: String,
    pub input_path: Option<PathBuf>,
    pub input_text: Option<String>,
    pub strategy: Strategy,
    pub cache_capacity: Option<usize>,
    pub json: bool,
    pub color: ColorChoice,
}

impl FindParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            pattern: parse_pattern(m),
            input_path: m.get_one::<PathBuf>("input_path").cloned(),
            input_text: m.get_one::<String>("input_text").cloned(),
            strategy: parse_strategy(m),
            cache_capacity: m.get_one::<usize>("cache_capacity").copied(),
            json: m.get_flag("json"),
            color: parse_color(m),
        }
    }
}

impl From<FindParams> for FindArgs {
    fn from(p: FindParams) -> Self {
        Self {
            pattern: p.pattern,
            input_path: p.input_path,
            input_text: p.input_text,
            engine: EngineArgs {
                strategy: p.strategy,
                cache_capacity: p.cache_capacity,
            },
            json: p.json,
            color: p.color.should_colorize(),
        }
    }
}

pub struct TraceParams {
    pub pattern: String,
    pub input_path: Option<PathBuf>,
    pub input_text: Option<String>,
    pub strategy: Strategy,
    pub cache_capacity: Option<usize>,
    pub verbose: u8,
    pub whole: bool,
    pub color: ColorChoice,
}

impl TraceParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            pattern: parse_pattern(m),
            input_path: m.get_one::<PathBuf>("input_path").cloned(),
            input_text: m.get_one::<String>("input_text").cloned(),
            strategy: parse_strategy(m),
            cache_capacity: m.get_one::<usize>("cache_capacity").copied(),
            verbose: m.get_count("verbose"),
            whole: m.get_flag("whole"),
            color: parse_color(m),
        }
    }
}

impl From<TraceParams> for TraceArgs {
    fn from(p: TraceParams) -> Self {
        let verbosity = match p.verbose {
            0 => Verbosity::Default,
            1 => Verbosity::Verbose,
            _ => Verbosity::VeryVerbose,
        };

        Self {
            pattern: p.pattern,
            input_path: p.input_path,
            input_text: p.input_text,
            engine: EngineArgs {
                strategy: p.strategy,
                cache_capacity: p.cache_capacity,
            },
            verbosity,
            whole: p.whole,
            color: p.color.should_colorize(),
        }
    }
}

fn parse_pattern(m: &ArgMatches) -> String {
    m.get_one::<String>("pattern")
        .cloned()
        .expect("clap requires a pattern")
}

fn parse_strategy(m: &ArgMatches) -> Strategy {
    m.get_one::<String>("strategy")
        .and_then(|name| Strategy::from_name(name))
        .unwrap_or_default()
}

fn parse_color(m: &ArgMatches) -> ColorChoice {
    match m.get_one::<String>("color").map(|s| s.as_str()) {
        Some("always") => ColorChoice::Always,
        Some("never") => ColorChoice::Never,
        _ => ColorChoice::Auto,
    }
}
