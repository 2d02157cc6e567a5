//! Portability commands: contact intake, export, import, clear.

use crate::error::{CliError, Result};
use crate::output::Formatter;
use crate::workspace::Workspace;
use chrono::Utc;
use std::fs;
use std::io::{self, Write};
use tend_domain::{ContactRecord, NotificationSettings, PrivacySettings};
use tend_exchange::{export_graph, import_graph, ImportMode, SocialGraphExport};

/// Bulk-import normalized contacts into the acquainted tier.
pub fn execute_import_contacts(
    file: &str,
    workspace: &mut Workspace,
    formatter: &Formatter,
) -> Result<()> {
    let contents = fs::read_to_string(file)?;
    let contacts: Vec<ContactRecord> = serde_json::from_str(&contents)?;
    let count = contacts.len();

    workspace.roster.intake_contacts(contacts, Utc::now());
    println!(
        "{}",
        formatter.success(&format!(
            "Imported {} contact(s) into acquainted; they enter the review cycle after 12 months",
            count
        ))
    );
    workspace.save()
}

/// Export the social graph to JSON.
pub fn execute_export(
    out: Option<&str>,
    workspace: &Workspace,
    formatter: &Formatter,
) -> Result<()> {
    // The CLI keeps no content store; posts and interactions export empty
    let export = export_graph(
        workspace.user_id(),
        &workspace.roster,
        &[],
        &[],
        &PrivacySettings::default(),
        &NotificationSettings::default(),
        Utc::now(),
    );
    let json = export.to_json().map_err(CliError::Serialization)?;

    match out {
        Some(path) => {
            fs::write(path, &json)?;
            println!(
                "{}",
                formatter.success(&format!(
                    "Exported {} friend(s) to {}",
                    export.friends.len(),
                    path
                ))
            );
        }
        None => println!("{}", json),
    }
    Ok(())
}

/// Import a social graph export file.
pub fn execute_import(
    file: &str,
    merge: bool,
    workspace: &mut Workspace,
    formatter: &Formatter,
) -> Result<()> {
    let contents = fs::read_to_string(file)?;
    let export = SocialGraphExport::from_json(&contents).map_err(CliError::Serialization)?;

    let mode = if merge {
        ImportMode::Merge
    } else {
        ImportMode::Replace
    };
    let outcome = import_graph(&export, &mut workspace.roster, mode)?;

    println!(
        "{}",
        formatter.success(&format!(
            "Imported {} friend(s) from {}",
            outcome.friends_imported, export.user_id
        ))
    );
    if !outcome.posts.is_empty() || !outcome.interactions.is_empty() {
        println!(
            "{}",
            formatter.info(&format!(
                "{} post(s) and {} interaction(s) were present; the CLI keeps no content store",
                outcome.posts.len(),
                outcome.interactions.len()
            ))
        );
    }
    workspace.save()
}

/// Erase all local data for the active profile.
pub fn execute_clear(yes: bool, workspace: &mut Workspace, formatter: &Formatter) -> Result<()> {
    if !yes {
        print!("This erases every friend, reserved spot, and nudge record. Type 'yes' to confirm: ");
        io::stdout().flush()?;
        let mut answer = String::new();
        io::stdin().read_line(&mut answer)?;
        if answer.trim() != "yes" {
            println!("{}", formatter.warning("Aborted"));
            return Ok(());
        }
    }

    workspace.clear()?;
    println!("{}", formatter.success("All data erased"));
    Ok(())
}
