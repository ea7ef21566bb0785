use crate::character::player::Player;
use crate::core::entity::Entity;
use crate::core::roster::EnemyRoster;
use tracing::debug;

/// Anything that can trade blows: the player or a bare enemy entity.
pub trait Combatant {
    fn combatant_name(&self) -> &str;
    /// Attack power after equipment.
    fn effective_attack(&self) -> f32;
    /// Defense power after equipment.
    fn effective_defense(&self) -> f32;
    fn entity_mut(&mut self) -> &mut Entity;
}

impl Combatant for Entity {
    fn combatant_name(&self) -> &str {
        &self.name
    }

    fn effective_attack(&self) -> f32 {
        self.attack_power
    }

    fn effective_defense(&self) -> f32 {
        self.defense_power
    }

    fn entity_mut(&mut self) -> &mut Entity {
        self
    }
}

impl Combatant for Player {
    fn combatant_name(&self) -> &str {
        self.name()
    }

    fn effective_attack(&self) -> f32 {
        Player::effective_attack(self)
    }

    fn effective_defense(&self) -> f32 {
        Player::effective_defense(self)
    }

    fn entity_mut(&mut self) -> &mut Entity {
        &mut self.entity
    }
}

/// Damage after defense. Never negative: full absorption yields 0, not healing.
pub fn calculate_damage(attack: f32, defense: f32) -> f32 {
    (attack - defense).max(0.0)
}

/// `attacker` hits `defender` once. Returns the damage applied.
pub fn attack<A, D>(attacker: &A, defender: &mut D) -> f32
where
    A: Combatant + ?Sized,
    D: Combatant + ?Sized,
{
    let damage = calculate_damage(attacker.effective_attack(), defender.effective_defense());
    let applied = defender.entity_mut().take_damage(damage);
    debug!(
        attacker = attacker.combatant_name(),
        defender = defender.combatant_name(),
        damage,
        applied,
        "attack resolved"
    );
    damage
}

/// What the player does with their turn, as far as combat is concerned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnAction {
    /// Player strikes, then the enemy strikes back
    Attack,
    /// Nobody takes damage
    Dodge,
    /// Turn spent on something else (equip, unequip, save)
    Pass,
}

/// Damage traded during one round.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct RoundReport {
    pub damage_dealt: f32,
    pub damage_taken: f32,
}

/// Resolves one battle round.
///
/// On `Attack` the enemy always counter-attacks, even if the player's blow
/// just dropped it to 0; the post-round check ends the encounter afterwards.
pub fn resolve_round(player: &mut Player, enemy: &mut Entity, action: TurnAction) -> RoundReport {
    match action {
        TurnAction::Attack => {
            let damage_dealt = attack(&*player, enemy);
            let damage_taken = attack(&*enemy, player);
            RoundReport {
                damage_dealt,
                damage_taken,
            }
        }
        TurnAction::Dodge | TurnAction::Pass => RoundReport::default(),
    }
}

/// Result of the check that runs after every battle round.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BattleOutcome {
    /// Both sides still standing
    Continue,
    /// Player health reached 0
    Defeat,
    /// Enemy slain and the next one steps up
    EnemyDefeated { enemy: String, next: String },
    /// Roster exhausted. Carries the enemy slain this round, if any.
    Victory { enemy: Option<String> },
}

/// Post-round check. Defeat is checked before victory; on an enemy kill the
/// roster advances to the next slot.
pub fn check_battle_results(player: &Player, roster: &mut EnemyRoster) -> BattleOutcome {
    if !player.entity.is_alive() {
        return BattleOutcome::Defeat;
    }

    let enemy = match roster.current() {
        Some(enemy) if !enemy.is_alive() => enemy.name.clone(),
        Some(_) => return BattleOutcome::Continue,
        None => return BattleOutcome::Victory { enemy: None },
    };

    match roster.advance() {
        Some(next) => BattleOutcome::EnemyDefeated {
            enemy,
            next: next.name.clone(),
        },
        None => BattleOutcome::Victory { enemy: Some(enemy) },
    }
}
