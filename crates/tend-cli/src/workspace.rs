//! Local workspace: the roster and nudge history behind a profile.

use crate::error::Result;
use std::fs;
use std::path::{Path, PathBuf};
use tend_domain::RosterPersistence;
use tend_scheduler::NudgeLog;
use tend_store::{Roster, SqliteStore};

/// A profile's loaded state plus the storage underneath it.
pub struct Workspace {
    /// The in-memory roster (authoritative while the process runs)
    pub roster: Roster,

    /// Nudge history for this profile
    pub log: NudgeLog,

    store: SqliteStore,
    log_path: PathBuf,
    user_id: String,
}

impl Workspace {
    /// Open (or create) the workspace for a profile.
    pub fn open(user_id: &str, data_dir: &Path) -> Result<Self> {
        fs::create_dir_all(data_dir)?;

        let store = SqliteStore::new(data_dir.join("tend.db"))?;
        let roster = store
            .load(user_id)?
            .map(Roster::from_snapshot)
            .unwrap_or_default();

        let log_path = data_dir.join("nudgelog.json");
        let log = if log_path.exists() {
            serde_json::from_str(&fs::read_to_string(&log_path)?)?
        } else {
            NudgeLog::new()
        };

        Ok(Self {
            roster,
            log,
            store,
            log_path,
            user_id: user_id.to_string(),
        })
    }

    /// Persist the current roster and nudge history.
    pub fn save(&mut self) -> Result<()> {
        self.store.save(&self.user_id, &self.roster.snapshot())?;
        fs::write(&self.log_path, serde_json::to_string_pretty(&self.log)?)?;
        Ok(())
    }

    /// Erase everything for this profile.
    pub fn clear(&mut self) -> Result<()> {
        self.roster.clear_all();
        self.log = NudgeLog::new();
        self.store.clear(&self.user_id)?;
        if self.log_path.exists() {
            fs::remove_file(&self.log_path)?;
        }
        Ok(())
    }

    /// The owning user id.
    pub fn user_id(&self) -> &str {
        &self.user_id
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use tend_domain::{NewFriend, Tier};

    #[test]
    fn test_workspace_roundtrip() {
        let dir = tempfile::tempdir().unwrap();

        {
            let mut ws = Workspace::open("user-1", dir.path()).unwrap();
            ws.roster
                .add_friend(
                    Tier::Core,
                    NewFriend {
                        name: "Ada".into(),
                        ..Default::default()
                    },
                    Utc::now(),
                )
                .unwrap();
            ws.save().unwrap();
        }

        let ws = Workspace::open("user-1", dir.path()).unwrap();
        assert_eq!(ws.roster.friend_count(), 1);
    }

    #[test]
    fn test_clear_erases_data() {
        let dir = tempfile::tempdir().unwrap();

        let mut ws = Workspace::open("user-1", dir.path()).unwrap();
        ws.roster
            .add_friend(
                Tier::Core,
                NewFriend {
                    name: "Ada".into(),
                    ..Default::default()
                },
                Utc::now(),
            )
            .unwrap();
        ws.save().unwrap();
        ws.clear().unwrap();

        let ws = Workspace::open("user-1", dir.path()).unwrap();
        assert_eq!(ws.roster.friend_count(), 0);
    }
}
