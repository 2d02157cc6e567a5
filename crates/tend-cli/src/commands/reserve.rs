//! Reserved spot commands.

use crate::cli::{ReserveAction, ReserveArgs};
use crate::commands::resolve_group;
use crate::error::Result;
use crate::output::Formatter;
use crate::workspace::Workspace;
use tend_domain::Tier;

/// Manage reserved spot groups.
pub fn execute_reserve(
    args: ReserveArgs,
    workspace: &mut Workspace,
    formatter: &Formatter,
) -> Result<()> {
    match args.action {
        ReserveAction::Add { tier, count, note } => {
            let tier: Tier = tier.into();
            let id = workspace.roster.add_reserved_group(tier, count, note);
            let held = workspace
                .roster
                .reserved_groups(tier)
                .iter()
                .find(|g| g.id == id)
                .map(|g| g.count)
                .unwrap_or(0);
            if held < count {
                println!(
                    "{}",
                    formatter.warning(&format!(
                        "Only {} of {} spots were free in {}; reserved {}",
                        held, count, tier, held
                    ))
                );
            } else {
                println!(
                    "{}",
                    formatter.success(&format!("Reserved {} spot(s) in {} ({})", held, tier, id))
                );
            }
            workspace.save()
        }
        ReserveAction::Update { id, count } => {
            let id = resolve_group(workspace, &id)?;
            let group = workspace.roster.update_reserved_group(id, count)?;
            println!(
                "{}",
                formatter.success(&format!("Group now holds {} spot(s)", group.count))
            );
            workspace.save()
        }
        ReserveAction::Remove { id } => {
            let id = resolve_group(workspace, &id)?;
            workspace.roster.remove_reserved_group(id)?;
            println!("{}", formatter.success("Reserved spots released"));
            workspace.save()
        }
        ReserveAction::List { tier } => {
            let groups = workspace.roster.reserved_groups(tier.into());
            println!("{}", formatter.format_reserved(&groups)?);
            Ok(())
        }
    }
}
