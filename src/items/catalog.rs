//! Static item catalog: two items per job.

use super::types::{Item, ItemCategory};
use crate::character::job::Job;

pub const WAND: Item = Item {
    name: "Wand",
    stat_boost: 15.0,
    category: ItemCategory::Attack,
};

pub const ROBE: Item = Item {
    name: "Robe",
    stat_boost: 10.0,
    category: ItemCategory::Defense,
};

pub const SWORD: Item = Item {
    name: "Sword",
    stat_boost: 10.0,
    category: ItemCategory::Attack,
};

pub const SHIELD: Item = Item {
    name: "Shield",
    stat_boost: 15.0,
    category: ItemCategory::Defense,
};

const WIZARD_ITEMS: [Item; 2] = [WAND, ROBE];
const KNIGHT_ITEMS: [Item; 2] = [SWORD, SHIELD];

/// Items a freshly created character of `job` owns, in inventory order.
pub fn starting_items(job: Job) -> &'static [Item] {
    match job {
        Job::Wizard => &WIZARD_ITEMS,
        Job::Knight => &KNIGHT_ITEMS,
    }
}
