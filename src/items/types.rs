/// Which stat an item boosts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemCategory {
    Attack,
    Defense,
    None,
}

/// An equippable item. Items are static catalog data and copied by value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Item {
    pub name: &'static str,
    pub stat_boost: f32,
    pub category: ItemCategory,
}

impl Item {
    /// The "no item" sentinel.
    pub const NOTHING: Item = Item {
        name: "Nothing",
        stat_boost: 0.0,
        category: ItemCategory::None,
    };

    pub fn is_nothing(&self) -> bool {
        self.category == ItemCategory::None
    }
}

/// Effective value of a stat given the base value and the equipped item.
///
/// The item's boost only counts when its category matches the stat being read.
pub fn effective_stat(base: f32, equipped: Option<&Item>, category: ItemCategory) -> f32 {
    match equipped {
        Some(item) if item.category == category && category != ItemCategory::None => {
            base + item.stat_boost
        }
        _ => base,
    }
}
