//! Nudge commands and the priority lookup.

use crate::cli::{NudgeAction, NudgesArgs, PriorityArgs};
use crate::commands::resolve_friend;
use crate::error::{CliError, Result};
use crate::output::Formatter;
use crate::workspace::Workspace;
use chrono::Utc;
use tend_domain::{NotificationSettings, Tier};
use tend_router::{priority_for_content, priority_for_interaction};
use tend_scheduler::NudgeScheduler;

/// List, dismiss, or respond to nudges.
pub fn execute_nudges(
    args: NudgesArgs,
    workspace: &mut Workspace,
    formatter: &Formatter,
) -> Result<()> {
    let mut scheduler = NudgeScheduler::default_config();
    let now = Utc::now();

    match args.action.unwrap_or(NudgeAction::List) {
        NudgeAction::List => {
            let nudges = match args.tier {
                Some(tier) => {
                    scheduler.nudges_for_tier(tier.into(), now, &workspace.roster, &workspace.log)
                }
                None => scheduler.generate(now, &workspace.roster, &workspace.log),
            };
            println!("{}", formatter.format_nudges(&nudges)?);
            Ok(())
        }
        NudgeAction::Dismiss { id } => {
            let friend = resolve_friend(workspace, &id)?;
            let nudges = scheduler.generate(now, &workspace.roster, &workspace.log);
            let Some(nudge) = nudges.iter().find(|n| n.friend == friend) else {
                println!("{}", formatter.warning("No active nudge for that friend"));
                return Ok(());
            };
            scheduler.dismiss(&mut workspace.log, nudge, now);
            println!(
                "{}",
                formatter.success(&format!("Dismissed nudge for {}", nudge.friend_name))
            );
            workspace.save()
        }
        NudgeAction::Respond { id, response } => {
            let friend = resolve_friend(workspace, &id)?;
            let tier = workspace
                .roster
                .get_friend(friend)
                .map(|f| f.tier)
                .unwrap_or(Tier::Acquainted);
            if tier != Tier::Acquainted {
                return Err(CliError::InvalidInput(format!(
                    "'respond' is for acquainted annual reviews; {} is in {}",
                    id, tier
                )));
            }

            let log = &mut workspace.log;
            scheduler.respond_annual(&mut workspace.roster, log, friend, response.into(), now)?;
            println!("{}", formatter.success("Review recorded"));
            workspace.save()
        }
    }
}

/// Look up the notification priority for an event.
pub fn execute_priority(args: PriorityArgs, formatter: &Formatter) -> Result<()> {
    let settings = NotificationSettings::default();
    let tier: Tier = args.tier.into();

    let priority = match (args.content, args.interaction) {
        (Some(content), None) => priority_for_content(tier, content.into(), &settings),
        (None, Some(interaction)) => {
            priority_for_interaction(tier, interaction.into(), &settings)
        }
        _ => {
            return Err(CliError::InvalidInput(
                "Provide exactly one of --content or --interaction".into(),
            ))
        }
    };

    match priority {
        Some(priority) => println!("{}", format!("{:?}", priority).to_lowercase()),
        None => println!("{}", formatter.info("Not routed (tier disabled)")),
    }
    Ok(())
}
