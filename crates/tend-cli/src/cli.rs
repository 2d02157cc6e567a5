//! CLI command definitions and argument parsing.

use clap::{Parser, Subcommand};

/// Tend - keep a bounded, tiered social graph and actually tend it.
#[derive(Debug, Parser)]
#[command(name = "tend")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Output format
    #[arg(short, long, value_enum, global = true)]
    pub format: Option<CliFormat>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Profile to use
    #[arg(short, long, global = true)]
    pub profile: Option<String>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Output format options.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum CliFormat {
    /// Table format (default)
    Table,
    /// JSON format
    Json,
    /// Quiet format (ids only)
    Quiet,
}

/// CLI commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Add a friend to a tier
    Add(AddArgs),

    /// List friends in a tier (or everyone)
    List(ListArgs),

    /// Update a friend's details
    Update(UpdateArgs),

    /// Record a meaningful contact with a friend
    Contacted {
        /// Friend id
        id: String,
    },

    /// Move a friend to another tier
    Move {
        /// Friend id
        id: String,
        /// Target tier
        #[arg(value_enum)]
        tier: TierArg,
    },

    /// Remove a friend
    Remove {
        /// Friend id
        id: String,
    },

    /// Reorder friends within a tier
    Reorder {
        /// Tier to reorder
        #[arg(value_enum)]
        tier: TierArg,
        /// Friend ids in the desired order
        ids: Vec<String>,
    },

    /// Manage reserved spots
    Reserve(ReserveArgs),

    /// Show tier capacity
    Capacity {
        /// Tier (all tiers when omitted)
        #[arg(value_enum)]
        tier: Option<TierArg>,
    },

    /// Mark the roster as tended (nudges reviewed)
    Tended,

    /// Work with sunset nudges
    Nudges(NudgesArgs),

    /// Look up the notification priority for an event
    Priority(PriorityArgs),

    /// Bulk-import normalized contacts into the acquainted tier
    ImportContacts {
        /// JSON file of contact records
        file: String,
    },

    /// Export the full social graph to JSON
    Export {
        /// Output file (stdout when omitted)
        #[arg(short, long)]
        out: Option<String>,
    },

    /// Import a social graph export
    Import {
        /// Export file to import
        file: String,
        /// Merge into the local roster instead of replacing it
        #[arg(long)]
        merge: bool,
    },

    /// Erase all local data for the active profile
    Clear {
        /// Skip confirmation
        #[arg(short = 'y', long)]
        yes: bool,
    },
}

/// Arguments for the add command.
#[derive(Debug, Parser)]
pub struct AddArgs {
    /// Display name
    pub name: String,

    /// Tier to add into
    #[arg(short, long, value_enum, default_value = "outer")]
    pub tier: TierArg,

    /// Email address
    #[arg(short, long)]
    pub email: Option<String>,

    /// Phone number
    #[arg(short = 'n', long)]
    pub phone: Option<String>,

    /// Notes
    #[arg(long)]
    pub notes: Option<String>,

    /// Preferred contact method
    #[arg(short = 'c', long, value_enum)]
    pub contact: Option<ContactArg>,
}

/// Arguments for the list command.
#[derive(Debug, Parser)]
pub struct ListArgs {
    /// Tier to list (everyone when omitted)
    #[arg(short, long, value_enum)]
    pub tier: Option<TierArg>,
}

/// Arguments for the update command.
#[derive(Debug, Parser)]
pub struct UpdateArgs {
    /// Friend id
    pub id: String,

    /// New display name
    #[arg(long)]
    pub name: Option<String>,

    /// New email address
    #[arg(short, long)]
    pub email: Option<String>,

    /// New phone number
    #[arg(short = 'n', long)]
    pub phone: Option<String>,

    /// New notes
    #[arg(long)]
    pub notes: Option<String>,

    /// New preferred contact method
    #[arg(short = 'c', long, value_enum)]
    pub contact: Option<ContactArg>,
}

/// Arguments for reserved spot management.
#[derive(Debug, Parser)]
pub struct ReserveArgs {
    #[command(subcommand)]
    pub action: ReserveAction,
}

/// Reserved spot actions.
#[derive(Debug, Subcommand)]
pub enum ReserveAction {
    /// Hold spots in a tier
    Add {
        /// Tier
        #[arg(value_enum)]
        tier: TierArg,
        /// Number of spots
        count: u32,
        /// Who the spots are for
        #[arg(long)]
        note: Option<String>,
    },

    /// Resize a reserved group
    Update {
        /// Group id
        id: String,
        /// New count
        count: u32,
    },

    /// Release a reserved group
    Remove {
        /// Group id
        id: String,
    },

    /// List reserved groups in a tier
    List {
        /// Tier
        #[arg(value_enum)]
        tier: TierArg,
    },
}

/// Arguments for nudge operations.
#[derive(Debug, Parser)]
pub struct NudgesArgs {
    #[command(subcommand)]
    pub action: Option<NudgeAction>,

    /// Restrict to one tier
    #[arg(short, long, value_enum)]
    pub tier: Option<TierArg>,
}

/// Nudge actions.
#[derive(Debug, Subcommand)]
pub enum NudgeAction {
    /// List nudges due today (default)
    List,

    /// Dismiss a friend's current nudge
    Dismiss {
        /// Friend id
        id: String,
    },

    /// Respond to an acquainted annual-review nudge
    Respond {
        /// Friend id
        id: String,
        /// What to do
        #[arg(value_enum)]
        response: ResponseArg,
    },
}

/// Arguments for the priority command.
#[derive(Debug, Parser)]
pub struct PriorityArgs {
    /// Tier the event originates from
    #[arg(short, long, value_enum)]
    pub tier: TierArg,

    /// Content type of a post event
    #[arg(long, value_enum, conflicts_with = "interaction")]
    pub content: Option<ContentArg>,

    /// Interaction type of an interaction event
    #[arg(long, value_enum)]
    pub interaction: Option<InteractionArg>,
}

/// Tier argument.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum TierArg {
    /// Core circle (limit 5)
    Core,
    /// Inner circle (limit 15)
    Inner,
    /// Outer circle (limit 150)
    Outer,
    /// Neighborhood relationships
    Naybor,
    /// One-directional follows
    Parasocial,
    /// Mentors and role models
    Rolemodel,
    /// Long-tail contacts
    Acquainted,
}

/// Preferred contact method argument.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum ContactArg {
    /// Phone or video call
    Call,
    /// Text message
    Text,
    /// Voice note
    VoiceNote,
    /// In person
    InPerson,
}

/// Annual-review response argument.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum ResponseArg {
    /// Keep in circles, no re-nudge this cycle
    Keep,
    /// Promote to the outer circle
    Promote,
    /// Remove from circles
    Remove,
    /// Snooze for six months
    Snooze,
}

/// Content type argument.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum ContentArg {
    /// Plain text
    Text,
    /// Photo
    Photo,
    /// Voice note
    VoiceNote,
    /// Video
    Video,
    /// Call invitation
    CallInvite,
    /// Meetup invitation
    MeetupInvite,
    /// Proximity ping
    ProximityPing,
    /// Life update
    LifeUpdate,
}

/// Interaction type argument.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum InteractionArg {
    /// Like
    Like,
    /// Comment
    Comment,
    /// Voice reply
    VoiceReply,
    /// Call accepted
    CallAccepted,
    /// Meetup RSVP
    MeetupRsvp,
    /// Share
    Share,
}

impl From<CliFormat> for crate::config::OutputFormat {
    fn from(format: CliFormat) -> Self {
        match format {
            CliFormat::Table => crate::config::OutputFormat::Table,
            CliFormat::Json => crate::config::OutputFormat::Json,
            CliFormat::Quiet => crate::config::OutputFormat::Quiet,
        }
    }
}

impl From<TierArg> for tend_domain::Tier {
    fn from(tier: TierArg) -> Self {
        match tier {
            TierArg::Core => tend_domain::Tier::Core,
            TierArg::Inner => tend_domain::Tier::Inner,
            TierArg::Outer => tend_domain::Tier::Outer,
            TierArg::Naybor => tend_domain::Tier::Naybor,
            TierArg::Parasocial => tend_domain::Tier::Parasocial,
            TierArg::Rolemodel => tend_domain::Tier::Rolemodel,
            TierArg::Acquainted => tend_domain::Tier::Acquainted,
        }
    }
}

impl From<ContactArg> for tend_domain::PreferredContact {
    fn from(contact: ContactArg) -> Self {
        match contact {
            ContactArg::Call => tend_domain::PreferredContact::Call,
            ContactArg::Text => tend_domain::PreferredContact::Text,
            ContactArg::VoiceNote => tend_domain::PreferredContact::VoiceNote,
            ContactArg::InPerson => tend_domain::PreferredContact::InPerson,
        }
    }
}

impl From<ResponseArg> for tend_domain::AnnualResponse {
    fn from(response: ResponseArg) -> Self {
        match response {
            ResponseArg::Keep => tend_domain::AnnualResponse::KeepInCircles,
            ResponseArg::Promote => tend_domain::AnnualResponse::PromoteToOuter,
            ResponseArg::Remove => tend_domain::AnnualResponse::RemoveFromCircles,
            ResponseArg::Snooze => tend_domain::AnnualResponse::SnoozeSixMonths,
        }
    }
}

impl From<ContentArg> for tend_domain::ContentType {
    fn from(content: ContentArg) -> Self {
        match content {
            ContentArg::Text => tend_domain::ContentType::Text,
            ContentArg::Photo => tend_domain::ContentType::Photo,
            ContentArg::VoiceNote => tend_domain::ContentType::VoiceNote,
            ContentArg::Video => tend_domain::ContentType::Video,
            ContentArg::CallInvite => tend_domain::ContentType::CallInvite,
            ContentArg::MeetupInvite => tend_domain::ContentType::MeetupInvite,
            ContentArg::ProximityPing => tend_domain::ContentType::ProximityPing,
            ContentArg::LifeUpdate => tend_domain::ContentType::LifeUpdate,
        }
    }
}

impl From<InteractionArg> for tend_domain::InteractionType {
    fn from(interaction: InteractionArg) -> Self {
        match interaction {
            InteractionArg::Like => tend_domain::InteractionType::Like,
            InteractionArg::Comment => tend_domain::InteractionType::Comment,
            InteractionArg::VoiceReply => tend_domain::InteractionType::VoiceReply,
            InteractionArg::CallAccepted => tend_domain::InteractionType::CallAccepted,
            InteractionArg::MeetupRsvp => tend_domain::InteractionType::MeetupRsvp,
            InteractionArg::Share => tend_domain::InteractionType::Share,
        }
    }
}
