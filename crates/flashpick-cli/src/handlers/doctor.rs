//! `doctor`: fingerprint plus advice.

use flashpick_core::{collect_fingerprint, diagnose};

use crate::bootstrap::CliContext;
use crate::error::CliError;
use crate::presentation::{print_advice, print_json};

/// Execute the doctor command.
///
/// Only a failure to write the report is an error; findings never are.
pub fn execute(ctx: &CliContext) -> Result<(), CliError> {
    let report = diagnose(collect_fingerprint(ctx.probe()));
    print_json(&report)?;
    print_advice(&report);
    Ok(())
}
