//! Command-line surface for the verdict toolkit.
//!
//! Four subcommands mirror the pipeline stages: `prepare`, `score`,
//! `aggregate`, `chart`. Flags layer on top of `VERDICT_*` environment
//! configuration (flag > env > default).

pub mod commands;

pub use commands::{Command, Verdict, run};
