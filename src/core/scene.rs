/// Which screen the game is on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Scene {
    StartMenu,
    EnterName,
    CharacterSelection,
    Battle,
    RestartMenu,
    /// Terminal: the player chose to quit
    GameOver,
}

impl Scene {
    pub fn name(&self) -> &'static str {
        match self {
            Scene::StartMenu => "Start Menu",
            Scene::EnterName => "Enter Name",
            Scene::CharacterSelection => "Character Selection",
            Scene::Battle => "Battle",
            Scene::RestartMenu => "Restart Menu",
            Scene::GameOver => "Game Over",
        }
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, Scene::GameOver)
    }
}
