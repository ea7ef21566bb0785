//! Combat stats shared by the player and every enemy.

/// A combatant's mutable stats.
///
/// Health always stays within `[0, max_health]`; the maximum is fixed when the
/// entity is created.
#[derive(Debug, Clone, PartialEq)]
pub struct Entity {
    pub name: String,
    health: f32,
    max_health: f32,
    pub attack_power: f32,
    pub defense_power: f32,
}

impl Entity {
    /// Creates an entity at full health. Negative health is floored to 0.
    pub fn new(name: impl Into<String>, health: f32, attack_power: f32, defense_power: f32) -> Self {
        let health = health.max(0.0);
        Self {
            name: name.into(),
            health,
            max_health: health,
            attack_power,
            defense_power,
        }
    }

    pub fn health(&self) -> f32 {
        self.health
    }

    pub fn max_health(&self) -> f32 {
        self.max_health
    }

    pub fn is_alive(&self) -> bool {
        self.health > 0.0
    }

    /// Subtracts `amount` from health, flooring at 0. Negative amounts are
    /// ignored so damage can never heal. Returns the damage actually applied.
    pub fn take_damage(&mut self, amount: f32) -> f32 {
        let amount = amount.max(0.0);
        let before = self.health;
        self.health = (self.health - amount).max(0.0);
        before - self.health
    }

    /// Sets health to a restored value, clamped into `[0, max_health]`.
    pub fn restore_health(&mut self, health: f32) {
        self.health = health.clamp(0.0, self.max_health);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entity_creation() {
        let skeleton = Entity::new("Skeleton", 10.0, 5.0, 0.0);
        assert_eq!(skeleton.name, "Skeleton");
        assert_eq!(skeleton.health(), 10.0);
        assert_eq!(skeleton.max_health(), 10.0);
        assert_eq!(skeleton.attack_power, 5.0);
        assert_eq!(skeleton.defense_power, 0.0);
        assert!(skeleton.is_alive());
    }

    #[test]
    fn test_take_damage_floors_at_zero() {
        let mut skeleton = Entity::new("Skeleton", 10.0, 5.0, 0.0);
        let applied = skeleton.take_damage(20.0);
        assert_eq!(skeleton.health(), 0.0);
        assert_eq!(applied, 10.0);
        assert!(!skeleton.is_alive());
    }

    #[test]
    fn test_negative_damage_does_not_heal() {
        let mut knight = Entity::new("Knight", 75.0, 20.0, 10.0);
        knight.take_damage(5.0);
        let applied = knight.take_damage(-30.0);
        assert_eq!(applied, 0.0);
        assert_eq!(knight.health(), 70.0);
    }

    #[test]
    fn test_damage_on_dead_entity_is_idempotent() {
        let mut skeleton = Entity::new("Skeleton", 10.0, 5.0, 0.0);
        skeleton.take_damage(10.0);
        assert_eq!(skeleton.take_damage(4.0), 0.0);
        assert_eq!(skeleton.health(), 0.0);
    }

    #[test]
    fn test_restore_health_clamps() {
        let mut wizard = Entity::new("Wizard", 50.0, 25.0, 5.0);
        wizard.restore_health(80.0);
        assert_eq!(wizard.health(), 50.0);
        wizard.restore_health(-3.0);
        assert_eq!(wizard.health(), 0.0);
        wizard.restore_health(12.5);
        assert_eq!(wizard.health(), 12.5);
    }
}
