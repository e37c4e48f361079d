//! `install`: resolve, uninstall the old package, install the new wheel.

use tracing::warn;

use crate::bootstrap::CliContext;
use crate::commands::ResolveArgs;
use crate::error::CliError;

use super::plan::resolve_and_report;

/// Execute the install command.
pub async fn execute(ctx: &CliContext, args: &ResolveArgs) -> Result<(), CliError> {
    let (_plan, asset) = resolve_and_report(ctx, args).await?;

    if args.dry_run {
        eprintln!("Dry run: would install {}", asset.name);
        println!("{}", asset.download_url);
        return Ok(());
    }

    let package = &ctx.artifact().package;
    eprintln!("Uninstalling existing {package} (if present)...");
    if let Err(e) = ctx.installer().uninstall(package) {
        warn!(error = %e, "Uninstall failed, continuing with install");
    }

    eprintln!("Installing from: {}", asset.download_url);
    ctx.installer().install_from_url(&asset.download_url)?;

    eprintln!("Done.");
    Ok(())
}
