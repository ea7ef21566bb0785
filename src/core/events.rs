//! Status events emitted by the game for the presentation layer.
//!
//! The core never prints. Everything the player should see is pushed through
//! an [`EventSink`], and the front end decides formatting and pacing.

use super::scene::Scene;

#[derive(Debug, Clone, PartialEq)]
pub enum GameEvent {
    /// The active scene changed
    SceneEntered(Scene),
    Welcome,
    /// Current effective stats of one combatant
    StatsSnapshot {
        name: String,
        health: f32,
        attack: f32,
        defense: f32,
    },
    EncounterStarted {
        enemy: String,
    },
    DamageDealt {
        source: String,
        target: String,
        amount: f32,
    },
    Dodged,
    ItemEquipped {
        name: String,
    },
    ItemRemoved {
        name: String,
    },
    EquipFailed {
        reason: String,
    },
    SaveSucceeded,
    SaveFailed {
        reason: String,
    },
    LoadSucceeded,
    LoadFailed {
        reason: String,
    },
    EnemyDefeated {
        enemy: String,
    },
    /// Every enemy in the roster has been defeated
    BattleWon,
    /// Player health reached 0
    BattleLost,
    GameOver,
}

/// Receives game events (the display collaborator).
pub trait EventSink {
    fn emit(&mut self, event: GameEvent);
}

impl EventSink for Vec<GameEvent> {
    fn emit(&mut self, event: GameEvent) {
        self.push(event);
    }
}
