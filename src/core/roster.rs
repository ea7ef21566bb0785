use super::constants::ENEMY_ROSTER;
use super::entity::Entity;

/// The ordered enemies a run fights through, and which one is current.
///
/// `current_index == len()` means every enemy has been defeated.
#[derive(Debug, Clone, PartialEq)]
pub struct EnemyRoster {
    enemies: Vec<Entity>,
    current_index: usize,
}

impl Default for EnemyRoster {
    fn default() -> Self {
        Self::standard()
    }
}

impl EnemyRoster {
    pub fn new(enemies: Vec<Entity>) -> Self {
        Self {
            enemies,
            current_index: 0,
        }
    }

    /// The built-in three-enemy roster at full health.
    pub fn standard() -> Self {
        Self::new(
            ENEMY_ROSTER
                .iter()
                .map(|&(name, health, attack, defense)| Entity::new(name, health, attack, defense))
                .collect(),
        )
    }

    pub fn len(&self) -> usize {
        self.enemies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.enemies.is_empty()
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    /// Moves to `index`. Returns false, leaving the roster unchanged, when
    /// `index` is not a valid slot.
    pub fn set_current_index(&mut self, index: usize) -> bool {
        if index >= self.enemies.len() {
            return false;
        }
        self.current_index = index;
        true
    }

    pub fn current(&self) -> Option<&Entity> {
        self.enemies.get(self.current_index)
    }

    pub fn current_mut(&mut self) -> Option<&mut Entity> {
        self.enemies.get_mut(self.current_index)
    }

    pub fn get(&self, index: usize) -> Option<&Entity> {
        self.enemies.get(index)
    }

    /// Overwrites the enemy at `index`. Returns false if there is no such slot.
    pub fn replace_slot(&mut self, index: usize, enemy: Entity) -> bool {
        match self.enemies.get_mut(index) {
            Some(slot) => {
                *slot = enemy;
                true
            }
            None => false,
        }
    }

    /// Advances past the current enemy. Returns the next enemy, or `None` when
    /// the roster is exhausted.
    pub fn advance(&mut self) -> Option<&Entity> {
        if self.current_index < self.enemies.len() {
            self.current_index += 1;
        }
        self.current()
    }

    pub fn is_exhausted(&self) -> bool {
        self.current_index >= self.enemies.len()
    }
}
