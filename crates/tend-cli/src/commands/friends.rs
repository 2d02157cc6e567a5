//! Roster commands: add, list, update, move, remove, reorder, capacity.

use crate::cli::{AddArgs, ListArgs, TierArg, UpdateArgs};
use crate::commands::resolve_friend;
use crate::error::Result;
use crate::output::Formatter;
use crate::workspace::Workspace;
use chrono::Utc;
use tend_domain::{Friend, FriendPatch, NewFriend, Tier};

/// Add a friend to a tier.
pub fn execute_add(args: AddArgs, workspace: &mut Workspace, formatter: &Formatter) -> Result<()> {
    let tier: Tier = args.tier.into();
    let new = NewFriend {
        name: args.name,
        email: args.email,
        phone: args.phone,
        notes: args.notes,
        preferred_contact: args.contact.map(Into::into),
    };

    let friend = workspace.roster.add_friend(tier, new, Utc::now())?;
    println!(
        "{}",
        formatter.success(&format!("Added {} to {} ({})", friend.name, tier, friend.id))
    );
    workspace.save()
}

/// List friends, tier by tier or for a single tier.
pub fn execute_list(args: ListArgs, workspace: &Workspace, formatter: &Formatter) -> Result<()> {
    match args.tier {
        Some(tier) => {
            let friends = workspace.roster.friends_in_tier(tier.into());
            println!("{}", formatter.format_friends(&friends)?);
        }
        None => {
            let friends: Vec<&Friend> = Tier::ALL
                .iter()
                .flat_map(|tier| workspace.roster.friends_in_tier(*tier))
                .collect();
            println!("{}", formatter.format_friends(&friends)?);
        }
    }
    Ok(())
}

/// Update a friend's details.
pub fn execute_update(
    args: UpdateArgs,
    workspace: &mut Workspace,
    formatter: &Formatter,
) -> Result<()> {
    let id = resolve_friend(workspace, &args.id)?;
    let patch = FriendPatch {
        name: args.name,
        email: args.email,
        phone: args.phone,
        notes: args.notes,
        preferred_contact: args.contact.map(Into::into),
        last_contacted: None,
    };

    let friend = workspace.roster.update_friend(id, patch)?;
    println!("{}", formatter.success(&format!("Updated {}", friend.name)));
    workspace.save()
}

/// Record a meaningful contact right now.
pub fn execute_contacted(id: &str, workspace: &mut Workspace, formatter: &Formatter) -> Result<()> {
    let id = resolve_friend(workspace, id)?;
    workspace.roster.record_contact(id, Utc::now())?;
    let name = &workspace.roster.get_friend(id).map(|f| f.name.clone()).unwrap_or_default();
    println!("{}", formatter.success(&format!("Contact with {} recorded", name)));
    workspace.save()
}

/// Move a friend to another tier.
pub fn execute_move(
    id: &str,
    tier: TierArg,
    workspace: &mut Workspace,
    formatter: &Formatter,
) -> Result<()> {
    let id = resolve_friend(workspace, id)?;
    let target: Tier = tier.into();
    workspace.roster.move_friend(id, target)?;
    println!("{}", formatter.success(&format!("Moved to {}", target)));
    workspace.save()
}

/// Remove a friend.
pub fn execute_remove(id: &str, workspace: &mut Workspace, formatter: &Formatter) -> Result<()> {
    let id = resolve_friend(workspace, id)?;
    let removed = workspace.roster.remove_friend(id)?;
    println!("{}", formatter.success(&format!("Removed {}", removed.name)));
    workspace.save()
}

/// Reorder friends within a tier.
pub fn execute_reorder(
    tier: TierArg,
    ids: &[String],
    workspace: &mut Workspace,
    formatter: &Formatter,
) -> Result<()> {
    let resolved: Vec<_> = ids
        .iter()
        .map(|raw| resolve_friend(workspace, raw))
        .collect::<Result<_>>()?;

    workspace.roster.reorder_tier(tier.into(), &resolved);
    println!("{}", formatter.success("Order saved"));
    workspace.save()
}

/// Show capacity for one tier or all of them.
pub fn execute_capacity(
    tier: Option<TierArg>,
    workspace: &Workspace,
    formatter: &Formatter,
) -> Result<()> {
    let rows: Vec<_> = match tier {
        Some(tier) => {
            let tier: Tier = tier.into();
            vec![(tier, workspace.roster.tier_capacity(tier))]
        }
        None => Tier::ALL
            .iter()
            .map(|tier| (*tier, workspace.roster.tier_capacity(*tier)))
            .collect(),
    };

    println!("{}", formatter.format_capacity(&rows)?);
    Ok(())
}

/// Mark the roster as tended.
pub fn execute_tended(workspace: &mut Workspace, formatter: &Formatter) -> Result<()> {
    workspace.roster.mark_tended(Utc::now());
    println!("{}", formatter.success("Tending session recorded"));
    workspace.save()
}
