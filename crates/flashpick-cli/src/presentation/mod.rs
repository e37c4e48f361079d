//! CLI presentation: JSON reports on stdout, hints on stderr.
//!
//! Keep this module format-only; decisions belong in core services.

pub mod report;

pub use report::{
    PlanReport, PreconditionReport, print_advice, print_json, print_no_match_hints,
};
