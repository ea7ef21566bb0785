//! The scene state machine.
//!
//! [`Game::step`] runs the active scene once: it asks the input collaborator
//! for a choice, applies it, and moves to the next scene. Everything the
//! player should see goes out through an [`EventSink`].

use super::constants::{LOAD_GAME, NEW_GAME, NO, YES};
use super::events::{EventSink, GameEvent};
use super::game_state::GameSession;
use super::scene::Scene;
use crate::character::job::Job;
use crate::character::player::Player;
use crate::combat::{check_battle_results, resolve_round, BattleOutcome, TurnAction};
use crate::core::entity::Entity;
use crate::input::ChoicePrompt;
use crate::save::{SaveManager, SaveSnapshot};
use std::io;
use tracing::{debug, info, warn};

/// Options offered on every battle turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BattleChoice {
    Attack,
    Dodge,
    EquipItem,
    RemoveItem,
    SaveGame,
}

impl BattleChoice {
    /// Menu order; prompt indices map onto this array.
    pub const ALL: [BattleChoice; 5] = [
        BattleChoice::Attack,
        BattleChoice::Dodge,
        BattleChoice::EquipItem,
        BattleChoice::RemoveItem,
        BattleChoice::SaveGame,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            BattleChoice::Attack => "Attack",
            BattleChoice::Dodge => "Dodge",
            BattleChoice::EquipItem => "Equip Item",
            BattleChoice::RemoveItem => "Remove Item",
            BattleChoice::SaveGame => "Save Game",
        }
    }

    pub fn labels() -> [&'static str; 5] {
        Self::ALL.map(|choice| choice.label())
    }
}

/// One play session plus the save slot it reads and writes.
pub struct Game {
    session: GameSession,
    saves: SaveManager,
}

impl Game {
    pub fn new(saves: SaveManager) -> Self {
        Self::from_session(GameSession::new(), saves)
    }

    pub fn from_session(session: GameSession, saves: SaveManager) -> Self {
        Self { session, saves }
    }

    pub fn session(&self) -> &GameSession {
        &self.session
    }

    pub fn session_mut(&mut self) -> &mut GameSession {
        &mut self.session
    }

    pub fn scene(&self) -> Scene {
        self.session.scene
    }

    pub fn is_over(&self) -> bool {
        self.session.game_over
    }

    /// Steps until the player quits. Only input errors end the loop early.
    pub fn run<I, S>(&mut self, input: &mut I, sink: &mut S) -> io::Result<()>
    where
        I: ChoicePrompt + ?Sized,
        S: EventSink + ?Sized,
    {
        while !self.session.game_over {
            self.step(input, sink)?;
        }
        Ok(())
    }

    /// Runs the active scene once and returns the scene that follows.
    pub fn step<I, S>(&mut self, input: &mut I, sink: &mut S) -> io::Result<Scene>
    where
        I: ChoicePrompt + ?Sized,
        S: EventSink + ?Sized,
    {
        let before = self.session.scene;
        let next = match before {
            Scene::StartMenu => self.start_menu(input, sink)?,
            Scene::EnterName => self.enter_name(input)?,
            Scene::CharacterSelection => self.character_selection(input, sink)?,
            Scene::Battle => self.battle(input, sink)?,
            Scene::RestartMenu => self.restart_menu(input, sink)?,
            Scene::GameOver => Scene::GameOver,
        };

        self.session.scene = next;
        if next != before {
            debug!(from = before.name(), to = next.name(), "scene transition");
            sink.emit(GameEvent::SceneEntered(next));
        }
        Ok(next)
    }

    fn start_menu<I, S>(&mut self, input: &mut I, sink: &mut S) -> io::Result<Scene>
    where
        I: ChoicePrompt + ?Sized,
        S: EventSink + ?Sized,
    {
        sink.emit(GameEvent::Welcome);
        let choice = input.choose("What would you like to do?", &[NEW_GAME, LOAD_GAME])?;
        if choice == 0 {
            return Ok(Scene::EnterName);
        }

        if self.load_game(sink) {
            Ok(Scene::Battle)
        } else {
            Ok(Scene::StartMenu)
        }
    }

    /// Restores the saved session. On any failure the current session is
    /// left exactly as it was.
    fn load_game<S: EventSink + ?Sized>(&mut self, sink: &mut S) -> bool {
        match self.saves.load().and_then(SaveSnapshot::restore) {
            Ok((player, roster)) => {
                self.session.resume(player, roster);
                sink.emit(GameEvent::LoadSucceeded);
                if let Some(enemy) = self.session.current_enemy() {
                    sink.emit(GameEvent::EncounterStarted {
                        enemy: enemy.name.clone(),
                    });
                }
                true
            }
            Err(e) => {
                warn!(error = %e, "load failed");
                sink.emit(GameEvent::LoadFailed {
                    reason: e.to_string(),
                });
                false
            }
        }
    }

    fn enter_name<I: ChoicePrompt + ?Sized>(&mut self, input: &mut I) -> io::Result<Scene> {
        let name = input.read_line("Please enter your name:")?;
        let question = format!("Hmm... Are you sure {} is your name?", name);
        if input.choose(&question, &[YES, NO])? == 0 {
            self.session.player_name = name;
            Ok(Scene::CharacterSelection)
        } else {
            Ok(Scene::EnterName)
        }
    }

    fn character_selection<I, S>(&mut self, input: &mut I, sink: &mut S) -> io::Result<Scene>
    where
        I: ChoicePrompt + ?Sized,
        S: EventSink + ?Sized,
    {
        let jobs = Job::all();
        let labels = jobs.map(|job| job.label());
        let question = format!("Okay, {}, select a class:", self.session.player_name);
        let job = pick(&jobs, input.choose(&question, &labels)?)?;

        info!(name = %self.session.player_name, job = job.label(), "new character");
        self.session.player = Some(Player::new(self.session.player_name.clone(), job));

        if let Some(enemy) = self.session.current_enemy() {
            sink.emit(GameEvent::EncounterStarted {
                enemy: enemy.name.clone(),
            });
        }
        Ok(Scene::Battle)
    }

    fn battle<I, S>(&mut self, input: &mut I, sink: &mut S) -> io::Result<Scene>
    where
        I: ChoicePrompt + ?Sized,
        S: EventSink + ?Sized,
    {
        let (player, enemy) = match (self.session.player.as_ref(), self.session.current_enemy()) {
            (Some(player), Some(enemy)) => (player, enemy),
            (None, _) => {
                warn!("battle scene reached without a character");
                return Ok(Scene::StartMenu);
            }
            (Some(_), None) => {
                sink.emit(GameEvent::BattleWon);
                return Ok(Scene::RestartMenu);
            }
        };

        sink.emit(player_stats(player));
        sink.emit(enemy_stats(enemy));

        let question = format!("A {} stands in front of you! What will you do?", enemy.name);
        let answer = input.choose(&question, &BattleChoice::labels())?;
        let choice = pick(&BattleChoice::ALL, answer)?;

        let turn = match choice {
            BattleChoice::Attack => TurnAction::Attack,
            BattleChoice::Dodge => TurnAction::Dodge,
            BattleChoice::EquipItem => {
                self.equip_item(input, sink)?;
                TurnAction::Pass
            }
            BattleChoice::RemoveItem => {
                self.remove_item(sink);
                TurnAction::Pass
            }
            BattleChoice::SaveGame => {
                self.save_game(sink);
                TurnAction::Pass
            }
        };

        self.play_round(turn, sink);
        Ok(self.after_round(sink))
    }

    fn equip_item<I, S>(&mut self, input: &mut I, sink: &mut S) -> io::Result<()>
    where
        I: ChoicePrompt + ?Sized,
        S: EventSink + ?Sized,
    {
        let Some(player) = self.session.player.as_mut() else {
            return Ok(());
        };

        let names = player.item_names();
        let index = input.choose("Which item would you like to equip?", &names)?;
        match player.equip(index) {
            Ok(item) => sink.emit(GameEvent::ItemEquipped {
                name: item.name.to_string(),
            }),
            Err(e) => sink.emit(GameEvent::EquipFailed {
                reason: e.to_string(),
            }),
        }
        Ok(())
    }

    fn remove_item<S: EventSink + ?Sized>(&mut self, sink: &mut S) {
        let Some(player) = self.session.player.as_mut() else {
            return;
        };

        match player.unequip() {
            Ok(item) => sink.emit(GameEvent::ItemRemoved {
                name: item.name.to_string(),
            }),
            Err(e) => sink.emit(GameEvent::EquipFailed {
                reason: e.to_string(),
            }),
        }
    }

    fn save_game<S: EventSink + ?Sized>(&mut self, sink: &mut S) {
        let result =
            SaveSnapshot::capture(&self.session).and_then(|snapshot| self.saves.save(&snapshot));
        match result {
            Ok(()) => sink.emit(GameEvent::SaveSucceeded),
            Err(e) => {
                warn!(error = %e, "save failed");
                sink.emit(GameEvent::SaveFailed {
                    reason: e.to_string(),
                });
            }
        }
    }

    fn play_round<S: EventSink + ?Sized>(&mut self, turn: TurnAction, sink: &mut S) {
        let GameSession { player, roster, .. } = &mut self.session;
        let (Some(player), Some(enemy)) = (player.as_mut(), roster.current_mut()) else {
            return;
        };

        let report = resolve_round(player, enemy, turn);
        match turn {
            TurnAction::Attack => {
                sink.emit(GameEvent::DamageDealt {
                    source: player.name().to_string(),
                    target: enemy.name.clone(),
                    amount: report.damage_dealt,
                });
                sink.emit(GameEvent::DamageDealt {
                    source: enemy.name.clone(),
                    target: player.name().to_string(),
                    amount: report.damage_taken,
                });
            }
            TurnAction::Dodge => sink.emit(GameEvent::Dodged),
            TurnAction::Pass => {}
        }
    }

    /// Defeat first, then victory, after every battle turn.
    fn after_round<S: EventSink + ?Sized>(&mut self, sink: &mut S) -> Scene {
        let Some(player) = self.session.player.as_ref() else {
            return Scene::StartMenu;
        };

        match check_battle_results(player, &mut self.session.roster) {
            BattleOutcome::Continue => Scene::Battle,
            BattleOutcome::Defeat => {
                info!(enemy_index = self.session.roster.current_index(), "player defeated");
                sink.emit(GameEvent::BattleLost);
                Scene::RestartMenu
            }
            BattleOutcome::EnemyDefeated { enemy, next } => {
                debug!(%enemy, %next, "enemy defeated");
                sink.emit(GameEvent::EnemyDefeated { enemy });
                sink.emit(GameEvent::EncounterStarted { enemy: next });
                Scene::Battle
            }
            BattleOutcome::Victory { enemy } => {
                if let Some(enemy) = enemy {
                    sink.emit(GameEvent::EnemyDefeated { enemy });
                }
                info!("roster cleared");
                sink.emit(GameEvent::BattleWon);
                Scene::RestartMenu
            }
        }
    }

    fn restart_menu<I, S>(&mut self, input: &mut I, sink: &mut S) -> io::Result<Scene>
    where
        I: ChoicePrompt + ?Sized,
        S: EventSink + ?Sized,
    {
        if input.choose("Would you like to restart the game?", &[YES, NO])? == 0 {
            self.session.reset();
            return Ok(Scene::StartMenu);
        }

        self.session.game_over = true;
        sink.emit(GameEvent::GameOver);
        Ok(Scene::GameOver)
    }
}

/// Maps a prompt answer onto its option. An out-of-range answer from the
/// prompt is an input error, not a panic.
fn pick<T: Copy>(options: &[T], index: usize) -> io::Result<T> {
    options.get(index).copied().ok_or_else(|| {
        io::Error::new(
            io::ErrorKind::InvalidData,
            format!("choice {} is out of range for {} options", index, options.len()),
        )
    })
}

fn player_stats(player: &Player) -> GameEvent {
    GameEvent::StatsSnapshot {
        name: player.name().to_string(),
        health: player.entity.health(),
        attack: player.effective_attack(),
        defense: player.effective_defense(),
    }
}

fn enemy_stats(enemy: &Entity) -> GameEvent {
    GameEvent::StatsSnapshot {
        name: enemy.name.clone(),
        health: enemy.health(),
        attack: enemy.attack_power,
        defense: enemy.defense_power,
    }
}
