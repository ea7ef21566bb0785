use super::codec::{decode, encode, SaveSnapshot};
use crate::core::config::ArenaConfig;
use crate::core::error::SaveError;
use crate::utils::persistence::app_path;
use std::fs;
use std::io::{self, BufReader, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// Reads and writes the save file.
///
/// Every call opens the file, drains or syncs it, and drops the handle
/// before returning, including when decoding fails partway.
#[derive(Debug, Clone)]
pub struct SaveManager {
    save_path: PathBuf,
}

impl SaveManager {
    /// Save manager for the configured save file.
    ///
    /// A relative `save_file` lives in `~/.battle_arena/`; an absolute one is
    /// used as is.
    pub fn new(config: &ArenaConfig) -> io::Result<Self> {
        let configured = Path::new(&config.save_file);
        let save_path = if configured.is_absolute() {
            configured.to_path_buf()
        } else {
            app_path(&config.save_file)?
        };
        Ok(Self { save_path })
    }

    pub fn with_path(save_path: impl Into<PathBuf>) -> Self {
        Self {
            save_path: save_path.into(),
        }
    }

    /// Creates a SaveManager for testing with a unique temporary directory
    #[cfg(test)]
    fn new_for_test() -> io::Result<Self> {
        use std::sync::atomic::{AtomicU64, Ordering};
        static TEST_COUNTER: AtomicU64 = AtomicU64::new(0);

        let test_id = TEST_COUNTER.fetch_add(1, Ordering::SeqCst);
        let temp_dir = std::env::temp_dir().join(format!(
            "battle-arena-save-test-{}-{}",
            std::process::id(),
            test_id
        ));
        fs::create_dir_all(&temp_dir)?;
        Ok(Self::with_path(temp_dir.join("save.txt")))
    }

    pub fn save_path(&self) -> &Path {
        &self.save_path
    }

    pub fn save_exists(&self) -> bool {
        self.save_path.exists()
    }

    /// Sibling file the next save is written to before it replaces the real one.
    fn staging_path(&self) -> PathBuf {
        let mut name = self.save_path.as_os_str().to_owned();
        name.push(".tmp");
        PathBuf::from(name)
    }

    /// Writes `snapshot`, replacing any previous save.
    ///
    /// The record is encoded in memory and written to a staging file that is
    /// renamed over the save, so a failed save leaves the old file intact.
    pub fn save(&self, snapshot: &SaveSnapshot) -> Result<(), SaveError> {
        let mut record = Vec::new();
        encode(snapshot, &mut record)?;

        if let Some(parent) = self.save_path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let staging = self.staging_path();
        let written = fs::File::create(&staging)
            .and_then(|mut file| {
                file.write_all(&record)?;
                file.sync_all()
            })
            .and_then(|()| fs::rename(&staging, &self.save_path));
        if let Err(e) = written {
            fs::remove_file(&staging).ok();
            return Err(e.into());
        }

        info!(path = %self.save_path.display(), "game saved");
        Ok(())
    }

    /// Reads and decodes the save file.
    ///
    /// Returns [`SaveError::MissingSaveFile`] when nothing has been saved yet.
    pub fn load(&self) -> Result<SaveSnapshot, SaveError> {
        let file = match fs::File::open(&self.save_path) {
            Ok(file) => file,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                debug!(path = %self.save_path.display(), "no save file");
                return Err(SaveError::MissingSaveFile(self.save_path.clone()));
            }
            Err(e) => return Err(e.into()),
        };

        let snapshot = decode(BufReader::new(file)).map_err(|e| {
            warn!(path = %self.save_path.display(), error = %e, "save file rejected");
            e
        })?;

        info!(path = %self.save_path.display(), "game loaded");
        Ok(snapshot)
    }

    /// Removes the save file. Missing files are not an error.
    pub fn delete(&self) -> io::Result<()> {
        match fs::remove_file(&self.save_path) {
            Err(e) if e.kind() != io::ErrorKind::NotFound => Err(e),
            _ => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::character::job::Job;
    use crate::character::player::Player;
    use crate::core::game_state::GameSession;

    fn knight_session() -> GameSession {
        let mut session = GameSession::new();
        let mut player = Player::new("Ada", Job::Knight);
        player.equip(1).unwrap();
        player.entity.take_damage(30.0);
        session.player = Some(player);
        session
    }

    #[test]
    fn test_save_and_load() {
        let manager = SaveManager::new_for_test().expect("Failed to create SaveManager");
        let snapshot = SaveSnapshot::capture(&knight_session()).unwrap();

        manager.save(&snapshot).expect("Failed to save");
        assert!(manager.save_exists());

        let loaded = manager.load().expect("Failed to load");
        assert_eq!(loaded, snapshot);

        manager.delete().unwrap();
    }

    #[test]
    fn test_load_nonexistent() {
        let manager = SaveManager::new_for_test().expect("Failed to create SaveManager");
        manager.delete().unwrap();

        match manager.load() {
            Err(SaveError::MissingSaveFile(path)) => assert_eq!(path, manager.save_path()),
            other => panic!("expected missing save file, got {:?}", other),
        }
    }

    #[test]
    fn test_save_overwrites_previous() {
        let manager = SaveManager::new_for_test().unwrap();
        let mut session = knight_session();
        manager.save(&SaveSnapshot::capture(&session).unwrap()).unwrap();

        session.roster.advance();
        let second = SaveSnapshot::capture(&session).unwrap();
        manager.save(&second).unwrap();

        assert_eq!(manager.load().unwrap().enemy_index, 1);
        let text = fs::read_to_string(manager.save_path()).unwrap();
        assert_eq!(text.lines().count(), 11);

        manager.delete().unwrap();
    }

    #[test]
    fn test_rejected_save_leaves_old_file() {
        let manager = SaveManager::new_for_test().unwrap();
        let good = SaveSnapshot::capture(&knight_session()).unwrap();
        manager.save(&good).unwrap();
        let before = fs::read_to_string(manager.save_path()).unwrap();

        let mut bad = good.clone();
        bad.player_name = "Bad\nName".to_string();
        assert!(manager.save(&bad).is_err());

        assert_eq!(fs::read_to_string(manager.save_path()).unwrap(), before);
        assert!(!manager.staging_path().exists());
        assert_eq!(manager.load().unwrap(), good);

        manager.delete().unwrap();
    }

    #[test]
    fn test_corrupt_file_is_malformed() {
        let manager = SaveManager::new_for_test().unwrap();
        fs::write(manager.save_path(), "not a number\n").unwrap();

        assert!(matches!(
            manager.load(),
            Err(SaveError::MalformedRecord { line: 1, .. })
        ));

        manager.delete().unwrap();
    }

    #[test]
    fn test_save_creates_parent_directory() {
        let base = SaveManager::new_for_test().unwrap();
        let nested = base
            .save_path()
            .parent()
            .unwrap()
            .join("nested")
            .join("slot.txt");
        let manager = SaveManager::with_path(&nested);

        manager
            .save(&SaveSnapshot::capture(&knight_session()).unwrap())
            .unwrap();
        assert!(nested.exists());

        manager.delete().unwrap();
    }

    #[test]
    fn test_absolute_config_path_is_used_verbatim() {
        let path = std::env::temp_dir().join("battle-arena-absolute.txt");
        let config = ArenaConfig {
            save_file: path.to_string_lossy().into_owned(),
            ..ArenaConfig::default()
        };
        let manager = SaveManager::new(&config).unwrap();
        assert_eq!(manager.save_path(), path.as_path());
    }
}
