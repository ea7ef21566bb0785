use super::job::Job;
use crate::core::entity::Entity;
use crate::core::error::EquipError;
use crate::items::{effective_stat, starting_items, Item, ItemCategory};

/// The player character: base stats plus an inventory and one equipped item.
///
/// Effective stats are always derived from the base entity and the equipped
/// item; the base values are never modified by equipping.
#[derive(Debug, Clone, PartialEq)]
pub struct Player {
    pub entity: Entity,
    job: Job,
    items: Vec<Item>,
    /// Always a valid index into `items` when `Some`.
    equipped: Option<usize>,
}

impl Player {
    /// Creates a player at full health with the job's base stats and items.
    pub fn new(name: impl Into<String>, job: Job) -> Self {
        let (health, attack, defense) = job.base_stats();
        Self {
            entity: Entity::new(name, health, attack, defense),
            job,
            items: starting_items(job).to_vec(),
            equipped: None,
        }
    }

    pub fn job(&self) -> Job {
        self.job
    }

    pub fn name(&self) -> &str {
        &self.entity.name
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    /// Owned item names in inventory order; equip-by-index relies on it.
    pub fn item_names(&self) -> Vec<&'static str> {
        self.items.iter().map(|item| item.name).collect()
    }

    pub fn equipped_index(&self) -> Option<usize> {
        self.equipped
    }

    /// The equipped item, or [`Item::NOTHING`].
    pub fn equipped_item(&self) -> Item {
        self.equipped
            .and_then(|index| self.items.get(index).copied())
            .unwrap_or(Item::NOTHING)
    }

    pub fn equip(&mut self, index: usize) -> Result<Item, EquipError> {
        let item = *self.items.get(index).ok_or(EquipError::InvalidIndex {
            index,
            owned: self.items.len(),
        })?;
        self.equipped = Some(index);
        Ok(item)
    }

    /// Clears the equipped slot, returning the item that was removed.
    pub fn unequip(&mut self) -> Result<Item, EquipError> {
        let item = self.equipped_item();
        if item.is_nothing() {
            return Err(EquipError::NothingEquipped);
        }
        self.equipped = None;
        Ok(item)
    }

    pub fn effective_attack(&self) -> f32 {
        let item = self.equipped_item();
        effective_stat(self.entity.attack_power, Some(&item), ItemCategory::Attack)
    }

    pub fn effective_defense(&self) -> f32 {
        let item = self.equipped_item();
        effective_stat(self.entity.defense_power, Some(&item), ItemCategory::Defense)
    }
}
