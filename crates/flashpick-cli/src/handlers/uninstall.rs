//! `uninstall`: best-effort removal.

use tracing::warn;

use crate::bootstrap::CliContext;

/// Execute the uninstall command. Never fails.
pub fn execute(ctx: &CliContext) {
    let package = &ctx.artifact().package;
    eprintln!("Uninstalling {package}...");
    match ctx.installer().uninstall(package) {
        Ok(()) => eprintln!("Done."),
        Err(e) => warn!(error = %e, "Uninstall failed"),
    }
}
