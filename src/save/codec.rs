//! Line-oriented save format.
//!
//! One field per line, in this exact order:
//!
//! ```text
//! <current enemy index>
//! <job label>
//! <player name>
//! <player health>
//! <player attack>          (base, not effective)
//! <player defense>         (base, not effective)
//! <equipped item index>    (-1 = nothing)
//! <enemy name>
//! <enemy health>
//! <enemy attack>
//! <enemy defense>
//! ```
//!
//! Only the current enemy is stored. On restore the other roster slots come
//! back at their defaults.

use crate::character::job::Job;
use crate::character::player::Player;
use crate::core::constants::NO_ITEM_INDEX;
use crate::core::entity::Entity;
use crate::core::error::SaveError;
use crate::core::game_state::GameSession;
use crate::core::roster::EnemyRoster;
use std::io::{BufRead, Write};
use std::str::FromStr;

const LINE_ENEMY_INDEX: usize = 1;
const LINE_EQUIPPED: usize = 7;

/// Everything the save file records, decoded but not yet applied.
#[derive(Debug, Clone, PartialEq)]
pub struct SaveSnapshot {
    pub enemy_index: usize,
    pub job: Job,
    pub player_name: String,
    pub player_health: f32,
    pub player_attack: f32,
    pub player_defense: f32,
    pub equipped_index: Option<usize>,
    pub enemy_name: String,
    pub enemy_health: f32,
    pub enemy_attack: f32,
    pub enemy_defense: f32,
}

impl SaveSnapshot {
    /// Snapshot of a live session. Needs a player and a current enemy.
    pub fn capture(session: &GameSession) -> Result<Self, SaveError> {
        let player = session
            .player
            .as_ref()
            .ok_or(SaveError::NothingToSave("no character selected"))?;
        let enemy = session
            .current_enemy()
            .ok_or(SaveError::NothingToSave("no enemy left to fight"))?;

        Ok(Self {
            enemy_index: session.roster.current_index(),
            job: player.job(),
            player_name: player.name().to_string(),
            player_health: player.entity.health(),
            player_attack: player.entity.attack_power,
            player_defense: player.entity.defense_power,
            equipped_index: player.equipped_index(),
            enemy_name: enemy.name.clone(),
            enemy_health: enemy.health(),
            enemy_attack: enemy.attack_power,
            enemy_defense: enemy.defense_power,
        })
    }

    /// Rebuilds the player and a roster positioned at the saved enemy.
    ///
    /// Max health is not part of the format: the player gets the job's
    /// maximum and the enemy starts from its saved health.
    ///
    /// The equip is re-applied through [`Player::equip`] so effective stats
    /// stay derived from the base values.
    pub fn restore(self) -> Result<(Player, EnemyRoster), SaveError> {
        let mut player = Player::new(self.player_name, self.job);
        player.entity.attack_power = self.player_attack;
        player.entity.defense_power = self.player_defense;
        player.entity.restore_health(self.player_health);

        if let Some(index) = self.equipped_index {
            player.equip(index).map_err(|e| {
                SaveError::malformed(LINE_EQUIPPED, "equipped item index", e.to_string())
            })?;
        }

        let mut roster = EnemyRoster::standard();
        if !roster.set_current_index(self.enemy_index) {
            return Err(SaveError::malformed(
                LINE_ENEMY_INDEX,
                "enemy index",
                format!(
                    "index {} is outside the roster of {}",
                    self.enemy_index,
                    roster.len()
                ),
            ));
        }
        let enemy = Entity::new(
            self.enemy_name,
            self.enemy_health,
            self.enemy_attack,
            self.enemy_defense,
        );
        roster.replace_slot(self.enemy_index, enemy);

        Ok((player, roster))
    }
}

/// Writes `snapshot` in save-file order. Does not flush.
pub fn encode<W: Write>(snapshot: &SaveSnapshot, writer: &mut W) -> Result<(), SaveError> {
    let equipped = snapshot
        .equipped_index
        .map_or(NO_ITEM_INDEX, |index| index as i64);

    if snapshot.player_name.contains(['\n', '\r']) {
        return Err(SaveError::malformed(3, "player name", "contains a line break"));
    }

    writeln!(writer, "{}", snapshot.enemy_index)?;
    writeln!(writer, "{}", snapshot.job.label())?;
    writeln!(writer, "{}", snapshot.player_name)?;
    writeln!(writer, "{}", snapshot.player_health)?;
    writeln!(writer, "{}", snapshot.player_attack)?;
    writeln!(writer, "{}", snapshot.player_defense)?;
    writeln!(writer, "{}", equipped)?;
    writeln!(writer, "{}", snapshot.enemy_name)?;
    writeln!(writer, "{}", snapshot.enemy_health)?;
    writeln!(writer, "{}", snapshot.enemy_attack)?;
    writeln!(writer, "{}", snapshot.enemy_defense)?;
    Ok(())
}

/// Reads fields one line at a time, tracking line numbers for error reports.
struct FieldReader<R> {
    reader: R,
    line: usize,
}

impl<R: BufRead> FieldReader<R> {
    fn new(reader: R) -> Self {
        Self { reader, line: 0 }
    }

    fn text(&mut self, field: &'static str) -> Result<String, SaveError> {
        self.line += 1;
        let mut buf = String::new();
        if self.reader.read_line(&mut buf)? == 0 {
            return Err(SaveError::malformed(self.line, field, "missing line"));
        }
        Ok(buf.trim_end_matches(['\n', '\r']).to_string())
    }

    fn parse<T: FromStr>(&mut self, field: &'static str) -> Result<T, SaveError> {
        let raw = self.text(field)?;
        raw.trim()
            .parse()
            .map_err(|_| SaveError::malformed(self.line, field, format!("cannot parse {:?}", raw)))
    }

    /// Like `parse::<f32>` but rejects NaN and infinities.
    fn number(&mut self, field: &'static str) -> Result<f32, SaveError> {
        let value: f32 = self.parse(field)?;
        if !value.is_finite() {
            return Err(SaveError::malformed(self.line, field, "not a finite number"));
        }
        Ok(value)
    }
}

/// Parses a save file. Nothing is applied to any session here.
pub fn decode<R: BufRead>(reader: R) -> Result<SaveSnapshot, SaveError> {
    let mut fields = FieldReader::new(reader);

    let enemy_index: usize = fields.parse("enemy index")?;

    let label = fields.text("job")?;
    let job = Job::from_label(&label).ok_or_else(|| {
        SaveError::malformed(fields.line, "job", format!("unknown job {:?}", label))
    })?;

    let player_name = fields.text("player name")?;
    let player_health = fields.number("player health")?;
    let player_attack = fields.number("player attack")?;
    let player_defense = fields.number("player defense")?;

    let equipped: i64 = fields.parse("equipped item index")?;
    let equipped_index = match equipped {
        NO_ITEM_INDEX => None,
        index if index >= 0 => Some(index as usize),
        index => {
            return Err(SaveError::malformed(
                fields.line,
                "equipped item index",
                format!("negative index {}", index),
            ))
        }
    };

    let enemy_name = fields.text("enemy name")?;
    let enemy_health = fields.number("enemy health")?;
    let enemy_attack = fields.number("enemy attack")?;
    let enemy_defense = fields.number("enemy defense")?;

    Ok(SaveSnapshot {
        enemy_index,
        job,
        player_name,
        player_health,
        player_attack,
        player_defense,
        equipped_index,
        enemy_name,
        enemy_health,
        enemy_attack,
        enemy_defense,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn mid_battle_session() -> GameSession {
        let mut session = GameSession::new();
        let mut player = Player::new("Ada", Job::Knight);
        player.equip(0).unwrap();
        player.entity.take_damage(12.5);
        session.player = Some(player);
        session.roster.advance();
        session.roster.current_mut().unwrap().take_damage(3.0);
        session
    }

    fn encode_to_string(snapshot: &SaveSnapshot) -> String {
        let mut buf = Vec::new();
        encode(snapshot, &mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_encode_field_order() {
        let snapshot = SaveSnapshot::capture(&mid_battle_session()).unwrap();
        let text = encode_to_string(&snapshot);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(
            lines,
            vec!["1", "Knight", "Ada", "62.5", "20", "10", "0", "Buff Alien", "12", "30", "10"]
        );
    }

    #[test]
    fn test_unequipped_writes_minus_one() {
        let mut session = GameSession::new();
        session.player = Some(Player::new("Merl", Job::Wizard));
        let text = encode_to_string(&SaveSnapshot::capture(&session).unwrap());
        assert_eq!(text.lines().nth(6), Some("-1"));
    }

    #[test]
    fn test_decode_restores_snapshot_exactly() {
        // Buff Alien is wounded, so its health no longer matches its max
        let snapshot = SaveSnapshot::capture(&mid_battle_session()).unwrap();
        assert_eq!(snapshot.enemy_health, 12.0);
        let decoded = decode(Cursor::new(encode_to_string(&snapshot))).unwrap();
        assert_eq!(decoded, snapshot);
    }

    #[test]
    fn test_restored_enemy_max_health_is_saved_health() {
        let snapshot = SaveSnapshot::capture(&mid_battle_session()).unwrap();
        let (_, roster) = snapshot.restore().unwrap();
        let enemy = roster.current().unwrap();
        assert_eq!(enemy.health(), 12.0);
        assert_eq!(enemy.max_health(), 12.0);
    }

    #[test]
    fn test_encode_rejects_name_before_writing() {
        let mut snapshot = SaveSnapshot::capture(&mid_battle_session()).unwrap();
        snapshot.player_name = "Bad\nName".to_string();
        let mut buf = Vec::new();
        assert!(matches!(
            encode(&snapshot, &mut buf),
            Err(SaveError::MalformedRecord { line: 3, .. })
        ));
        assert!(buf.is_empty());
    }

    #[test]
    fn test_awkward_floats_survive() {
        let mut session = GameSession::new();
        let mut player = Player::new("Merl", Job::Wizard);
        player.entity.take_damage(1.0 / 3.0);
        player.entity.attack_power = 0.1;
        session.player = Some(player);
        let snapshot = SaveSnapshot::capture(&session).unwrap();
        let decoded = decode(Cursor::new(encode_to_string(&snapshot))).unwrap();
        assert_eq!(decoded.player_health, snapshot.player_health);
        assert_eq!(decoded.player_attack, 0.1);
    }

    #[test]
    fn test_restore_reapplies_equip_and_overwrites_slot() {
        let snapshot = SaveSnapshot::capture(&mid_battle_session()).unwrap();
        let (player, roster) = snapshot.restore().unwrap();
        assert_eq!(player.equipped_index(), Some(0));
        assert_eq!(player.effective_attack(), 30.0);
        assert_eq!(player.entity.attack_power, 20.0);
        assert_eq!(player.entity.health(), 62.5);
        assert_eq!(roster.current_index(), 1);
        assert_eq!(roster.current().unwrap().health(), 12.0);
        // Slots other than the saved one come back at their defaults
        assert_eq!(roster.get(0).unwrap().health(), 10.0);
    }

    #[test]
    fn test_non_integer_index_is_malformed() {
        let text = "first\nKnight\nAda\n75\n20\n10\n-1\nSkeleton\n10\n5\n0\n";
        match decode(Cursor::new(text)) {
            Err(SaveError::MalformedRecord { line, field, .. }) => {
                assert_eq!(line, 1);
                assert_eq!(field, "enemy index");
            }
            other => panic!("expected malformed record, got {:?}", other),
        }
    }

    #[test]
    fn test_unknown_job_is_malformed() {
        let text = "0\nBard\nAda\n75\n20\n10\n-1\nSkeleton\n10\n5\n0\n";
        assert!(matches!(
            decode(Cursor::new(text)),
            Err(SaveError::MalformedRecord {
                line: 2,
                field: "job",
                ..
            })
        ));
    }

    #[test]
    fn test_bad_number_is_malformed() {
        let text = "0\nKnight\nAda\nlots\n20\n10\n-1\nSkeleton\n10\n5\n0\n";
        assert!(matches!(
            decode(Cursor::new(text)),
            Err(SaveError::MalformedRecord { line: 4, .. })
        ));
        let text = "0\nKnight\nAda\nNaN\n20\n10\n-1\nSkeleton\n10\n5\n0\n";
        assert!(decode(Cursor::new(text)).is_err());
    }

    #[test]
    fn test_truncated_file_is_malformed() {
        let text = "0\nKnight\nAda\n75\n";
        assert!(matches!(
            decode(Cursor::new(text)),
            Err(SaveError::MalformedRecord {
                line: 5,
                field: "player attack",
                ..
            })
        ));
    }

    #[test]
    fn test_crlf_line_endings_accepted() {
        let text = "2\r\nWizard\r\nMerl\r\n50\r\n25\r\n5\r\n1\r\nStrange Man\r\n20\r\n15\r\n5\r\n";
        let snapshot = decode(Cursor::new(text)).unwrap();
        assert_eq!(snapshot.enemy_index, 2);
        assert_eq!(snapshot.player_name, "Merl");
        assert_eq!(snapshot.equipped_index, Some(1));
        assert_eq!(snapshot.enemy_name, "Strange Man");
    }

    #[test]
    fn test_restore_rejects_bad_indices() {
        let text = "7\nKnight\nAda\n75\n20\n10\n-1\nSkeleton\n10\n5\n0\n";
        let snapshot = decode(Cursor::new(text)).unwrap();
        assert!(matches!(
            snapshot.restore(),
            Err(SaveError::MalformedRecord {
                field: "enemy index",
                ..
            })
        ));

        let text = "0\nKnight\nAda\n75\n20\n10\n5\nSkeleton\n10\n5\n0\n";
        let snapshot = decode(Cursor::new(text)).unwrap();
        assert!(matches!(
            snapshot.restore(),
            Err(SaveError::MalformedRecord {
                field: "equipped item index",
                ..
            })
        ));

        let text = "0\nKnight\nAda\n75\n20\n10\n-4\nSkeleton\n10\n5\n0\n";
        assert!(decode(Cursor::new(text)).is_err());
    }

    #[test]
    fn test_capture_needs_player() {
        let session = GameSession::new();
        assert!(matches!(
            SaveSnapshot::capture(&session),
            Err(SaveError::NothingToSave(_))
        ));
    }
}
