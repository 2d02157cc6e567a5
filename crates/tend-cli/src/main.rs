//! Tend CLI - keep a bounded, tiered social graph and actually tend it.

use clap::Parser;
use tend_cli::{commands, Cli, Command, Config, Formatter, Workspace};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if cli.verbose {
        tracing_subscriber::fmt()
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| "tend=debug".into()),
            )
            .init();
    }

    // Load or create config
    let mut config = Config::load().unwrap_or_else(|_| {
        let cfg = Config::default();
        cfg.save().ok();
        cfg
    });

    // Override profile if specified
    if let Some(profile_name) = cli.profile {
        config.switch_profile(profile_name)?;
    }

    // Determine output format and color
    let format = cli.format.map(Into::into).unwrap_or(config.settings.format);
    let color_enabled = !cli.no_color && config.settings.color;
    let formatter = Formatter::new(format, color_enabled);

    // Open the active profile's workspace
    let profile = config.get_active_profile()?;
    let data_dir = config.data_dir(&config.active_profile, profile)?;
    let mut workspace = Workspace::open(&profile.user_id, &data_dir)?;

    match cli.command {
        Command::Add(args) => commands::execute_add(args, &mut workspace, &formatter)?,
        Command::List(args) => commands::execute_list(args, &workspace, &formatter)?,
        Command::Update(args) => commands::execute_update(args, &mut workspace, &formatter)?,
        Command::Contacted { id } => {
            commands::execute_contacted(&id, &mut workspace, &formatter)?
        }
        Command::Move { id, tier } => {
            commands::execute_move(&id, tier, &mut workspace, &formatter)?
        }
        Command::Remove { id } => commands::execute_remove(&id, &mut workspace, &formatter)?,
        Command::Reorder { tier, ids } => {
            commands::execute_reorder(tier, &ids, &mut workspace, &formatter)?
        }
        Command::Reserve(args) => commands::execute_reserve(args, &mut workspace, &formatter)?,
        Command::Capacity { tier } => {
            commands::execute_capacity(tier, &workspace, &formatter)?
        }
        Command::Tended => commands::execute_tended(&mut workspace, &formatter)?,
        Command::Nudges(args) => commands::execute_nudges(args, &mut workspace, &formatter)?,
        Command::Priority(args) => commands::execute_priority(args, &formatter)?,
        Command::ImportContacts { file } => {
            commands::execute_import_contacts(&file, &mut workspace, &formatter)?
        }
        Command::Export { out } => {
            commands::execute_export(out.as_deref(), &workspace, &formatter)?
        }
        Command::Import { file, merge } => {
            commands::execute_import(&file, merge, &mut workspace, &formatter)?
        }
        Command::Clear { yes } => commands::execute_clear(yes, &mut workspace, &formatter)?,
    }

    Ok(())
}
