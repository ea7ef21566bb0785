// Job base stats: (health, attack, defense)
pub const WIZARD_BASE_STATS: (f32, f32, f32) = (50.0, 25.0, 5.0);
pub const KNIGHT_BASE_STATS: (f32, f32, f32) = (75.0, 20.0, 10.0);

// Default enemy roster: (name, health, attack, defense)
pub const ENEMY_ROSTER: [(&str, f32, f32, f32); 3] = [
    ("Skeleton", 10.0, 5.0, 0.0),
    ("Buff Alien", 15.0, 30.0, 10.0),
    ("Strange Man", 20.0, 15.0, 5.0),
];

// Persistence
pub const SAVE_FILE_NAME: &str = "save.txt";
pub const CONFIG_FILE_NAME: &str = "config.json";
pub const APP_DIR_NAME: &str = ".battle_arena";
/// Equipped-item index written when nothing is equipped.
pub const NO_ITEM_INDEX: i64 = -1;

// Logging
pub const DEFAULT_LOG_FILTER: &str = "warn";

// Menu labels
pub const YES: &str = "Yes";
pub const NO: &str = "No";
pub const NEW_GAME: &str = "New Game";
pub const LOAD_GAME: &str = "Load Game";
