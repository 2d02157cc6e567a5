//! Command implementations.

mod friends;
mod graph;
mod nudges;
mod reserve;

pub use friends::{
    execute_add, execute_capacity, execute_contacted, execute_list, execute_move,
    execute_remove, execute_reorder, execute_tended, execute_update,
};
pub use graph::{execute_clear, execute_export, execute_import, execute_import_contacts};
pub use nudges::{execute_nudges, execute_priority};
pub use reserve::execute_reserve;

use crate::error::{CliError, Result};
use crate::workspace::Workspace;
use tend_domain::{FriendId, GroupId};

/// Resolve a friend by full id or unique id prefix.
pub(crate) fn resolve_friend(workspace: &Workspace, input: &str) -> Result<FriendId> {
    if let Ok(id) = FriendId::parse(input) {
        if workspace.roster.get_friend(id).is_some() {
            return Ok(id);
        }
        return Err(CliError::InvalidInput(format!("No friend with id {}", input)));
    }

    let matches: Vec<FriendId> = workspace
        .roster
        .all_friends()
        .filter(|f| f.id.to_string().starts_with(input))
        .map(|f| f.id)
        .collect();

    match matches.as_slice() {
        [id] => Ok(*id),
        [] => Err(CliError::InvalidInput(format!(
            "No friend matches '{}'",
            input
        ))),
        _ => Err(CliError::InvalidInput(format!(
            "'{}' is ambiguous ({} matches); use more of the id",
            input,
            matches.len()
        ))),
    }
}

/// Resolve a reserved group by full id or unique id prefix.
pub(crate) fn resolve_group(workspace: &Workspace, input: &str) -> Result<GroupId> {
    if let Ok(id) = GroupId::parse(input) {
        return Ok(id);
    }

    let matches: Vec<GroupId> = tend_domain::Tier::ALL
        .iter()
        .flat_map(|tier| workspace.roster.reserved_groups(*tier))
        .filter(|g| g.id.to_string().starts_with(input))
        .map(|g| g.id)
        .collect();

    match matches.as_slice() {
        [id] => Ok(*id),
        [] => Err(CliError::InvalidInput(format!(
            "No reserved group matches '{}'",
            input
        ))),
        _ => Err(CliError::InvalidInput(format!(
            "'{}' is ambiguous ({} matches); use more of the id",
            input,
            matches.len()
        ))),
    }
}
