use crate::core::constants::{KNIGHT_BASE_STATS, WIZARD_BASE_STATS};

/// Character class. Decides base stats and the starting item set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Job {
    Wizard,
    Knight,
}

impl Job {
    /// Jobs in the order the selection menu lists them.
    pub fn all() -> [Job; 2] {
        [Job::Wizard, Job::Knight]
    }

    /// Label written to save files and shown in menus.
    pub fn label(&self) -> &'static str {
        match self {
            Job::Wizard => "Wizard",
            Job::Knight => "Knight",
        }
    }

    pub fn from_label(label: &str) -> Option<Job> {
        Job::all().into_iter().find(|job| job.label() == label)
    }

    /// Returns (health, attack, defense).
    pub fn base_stats(&self) -> (f32, f32, f32) {
        match self {
            Job::Wizard => WIZARD_BASE_STATS,
            Job::Knight => KNIGHT_BASE_STATS,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_label_round_trips() {
        for job in Job::all() {
            assert_eq!(Job::from_label(job.label()), Some(job));
        }
    }

    #[test]
    fn test_unknown_label() {
        assert_eq!(Job::from_label("Bard"), None);
        // Labels are exact; the save format never lowercases them
        assert_eq!(Job::from_label("knight"), None);
    }

    #[test]
    fn test_base_stats() {
        assert_eq!(Job::Wizard.base_stats(), (50.0, 25.0, 5.0));
        assert_eq!(Job::Knight.base_stats(), (75.0, 20.0, 10.0));
    }
}
