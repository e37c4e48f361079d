//! `plan`: resolve and report.

use flashpick_core::{ReleaseAsset, ResolutionPlan};
use tracing::debug;

use crate::bootstrap::CliContext;
use crate::commands::ResolveArgs;
use crate::error::CliError;
use crate::presentation::{PlanReport, PreconditionReport, print_json, print_no_match_hints};

/// Resolve, print the report, and return the selected wheel.
///
/// No match is reported as [`CliError::NoMatch`] after the hints are shown.
/// A failed precondition prints what was detected before returning
/// [`CliError::Precondition`].
pub async fn resolve_and_report(
    ctx: &CliContext,
    args: &ResolveArgs,
) -> Result<(ResolutionPlan, ReleaseAsset), CliError> {
    let plan = match ctx.resolver()?.plan(&args.to_options()).await {
        Ok(plan) => plan,
        Err(err) => {
            if let Some(report) = PreconditionReport::from_error(&err) {
                print_json(&report)?;
            }
            return Err(err.into());
        }
    };
    print_json(&PlanReport::from_plan(&plan))?;

    match plan.selected.clone() {
        Some(asset) => Ok((plan, asset)),
        None => {
            print_no_match_hints(&plan);
            Err(CliError::NoMatch(format!(
                "No wheel for {} {} matched this environment",
                ctx.artifact().package,
                plan.version
            )))
        }
    }
}

/// Execute the plan command.
pub async fn execute(ctx: &CliContext, args: &ResolveArgs) -> Result<(), CliError> {
    if args.dry_run {
        debug!("--dry-run has no effect on plan");
    }
    resolve_and_report(ctx, args).await.map(|_| ())
}
