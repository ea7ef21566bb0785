use super::entity::Entity;
use super::roster::EnemyRoster;
use super::scene::Scene;
use crate::character::player::Player;

/// Everything that makes up one play session.
#[derive(Debug, Clone, PartialEq)]
pub struct GameSession {
    pub scene: Scene,
    /// `None` until a job is picked in character selection
    pub player: Option<Player>,
    pub roster: EnemyRoster,
    /// Name exactly as the player typed it
    pub player_name: String,
    pub game_over: bool,
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new()
    }
}

impl GameSession {
    /// A fresh session on the start menu with the standard roster.
    pub fn new() -> Self {
        Self {
            scene: Scene::StartMenu,
            player: None,
            roster: EnemyRoster::standard(),
            player_name: String::new(),
            game_over: false,
        }
    }

    /// Discards all progress and returns to the start menu.
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    pub fn current_enemy(&self) -> Option<&Entity> {
        self.roster.current()
    }

    /// Installs a restored player and roster and jumps into battle.
    pub fn resume(&mut self, player: Player, roster: EnemyRoster) {
        self.player_name = player.name().to_string();
        self.player = Some(player);
        self.roster = roster;
        self.scene = Scene::Battle;
        self.game_over = false;
    }
}
