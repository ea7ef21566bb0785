//! Plain terminal front end: numbered prompts on stdin, styled event text on stdout.

use battle_arena::core::events::{EventSink, GameEvent};
use battle_arena::input::ChoicePrompt;
use crossterm::cursor::MoveTo;
use crossterm::queue;
use crossterm::style::Stylize;
use crossterm::terminal::{Clear, ClearType};
use std::io::{self, BufRead, StdinLock, Stdout, Write};

/// Matches a typed answer against the options: a 1-based number or the
/// option label, ignoring case.
pub fn parse_choice(answer: &str, options: &[&str]) -> Option<usize> {
    let answer = answer.trim();
    if let Ok(number) = answer.parse::<usize>() {
        return (1..=options.len()).contains(&number).then(|| number - 1);
    }
    options
        .iter()
        .position(|option| option.eq_ignore_ascii_case(answer))
}

pub struct ConsolePrompt<R, W> {
    reader: R,
    writer: W,
}

impl ConsolePrompt<StdinLock<'static>, Stdout> {
    pub fn stdin() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> ConsolePrompt<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }

    fn read_answer(&mut self) -> io::Result<String> {
        write!(self.writer, "> ")?;
        self.writer.flush()?;
        let mut line = String::new();
        if self.reader.read_line(&mut line)? == 0 {
            return Err(io::Error::new(io::ErrorKind::UnexpectedEof, "input closed"));
        }
        Ok(line.trim_end_matches(['\n', '\r']).to_string())
    }
}

impl<R: BufRead, W: Write> ChoicePrompt for ConsolePrompt<R, W> {
    fn choose(&mut self, description: &str, options: &[&str]) -> io::Result<usize> {
        loop {
            writeln!(self.writer, "{}", description)?;
            for (i, option) in options.iter().enumerate() {
                writeln!(self.writer, "{}. {}", i + 1, option)?;
            }
            let answer = self.read_answer()?;
            if let Some(index) = parse_choice(&answer, options) {
                return Ok(index);
            }
            writeln!(self.writer, "{}", "Invalid Input".yellow())?;
        }
    }

    fn read_line(&mut self, description: &str) -> io::Result<String> {
        writeln!(self.writer, "{}", description)?;
        self.read_answer()
    }
}

/// Text for an event, or `None` if the event has nothing to show.
pub fn describe(event: &GameEvent) -> Option<String> {
    let text = match event {
        GameEvent::SceneEntered(_) => return None,
        GameEvent::Welcome => {
            "Hello, welcome to Battle Arena, where you will fight enemies to the death!".to_string()
        }
        GameEvent::StatsSnapshot {
            name,
            health,
            attack,
            defense,
        } => format!(
            "Name: {}\nHealth: {}\nAttack Power: {}\nDefense Power: {}\n",
            name, health, attack, defense
        ),
        GameEvent::EncounterStarted { enemy } => format!("A {} approaches!", enemy),
        GameEvent::DamageDealt {
            source,
            target,
            amount,
        } => format!("{} dealt {} damage to {}!", source, amount, target),
        GameEvent::Dodged => "You dodged the enemy's attack!".to_string(),
        GameEvent::ItemEquipped { name } => format!("You equipped the {}.", name),
        GameEvent::ItemRemoved { name } => format!("You put away the {}.", name),
        GameEvent::EquipFailed { reason } => format!("Could not change equipment: {}", reason),
        GameEvent::SaveSucceeded => "Game saved.".to_string(),
        GameEvent::SaveFailed { reason } => format!("Save failed: {}", reason),
        GameEvent::LoadSucceeded => "Save loaded.".to_string(),
        GameEvent::LoadFailed { reason } => format!("Could not load the game: {}", reason),
        GameEvent::EnemyDefeated { enemy } => format!("You slayed the {}!", enemy),
        GameEvent::BattleWon => {
            "Congratulations, you have reached the end of the game.".to_string()
        }
        GameEvent::BattleLost => "You died! Game over!".to_string(),
        GameEvent::GameOver => "Thanks for playing.".to_string(),
    };
    Some(text)
}

/// Renders events to a terminal.
pub struct ConsoleRenderer<W: Write> {
    out: W,
    clear_screen: bool,
}

impl ConsoleRenderer<Stdout> {
    pub fn stdout(clear_screen: bool) -> Self {
        Self::new(io::stdout(), clear_screen)
    }
}

impl<W: Write> ConsoleRenderer<W> {
    pub fn new(out: W, clear_screen: bool) -> Self {
        Self { out, clear_screen }
    }

    fn render(&mut self, event: &GameEvent) -> io::Result<()> {
        if let GameEvent::SceneEntered(_) = event {
            if self.clear_screen {
                queue!(self.out, Clear(ClearType::All), MoveTo(0, 0))?;
            }
            return self.out.flush();
        }

        let Some(text) = describe(event) else {
            return Ok(());
        };
        match event {
            GameEvent::DamageDealt { .. } | GameEvent::BattleLost => {
                writeln!(self.out, "{}", text.red())?
            }
            GameEvent::EnemyDefeated { .. } | GameEvent::BattleWon => {
                writeln!(self.out, "{}", text.green())?
            }
            GameEvent::EquipFailed { .. }
            | GameEvent::SaveFailed { .. }
            | GameEvent::LoadFailed { .. } => writeln!(self.out, "{}", text.yellow())?,
            _ => writeln!(self.out, "{}", text)?,
        }
        self.out.flush()
    }
}

impl<W: Write> EventSink for ConsoleRenderer<W> {
    fn emit(&mut self, event: GameEvent) {
        if let Err(e) = self.render(&event) {
            tracing::warn!(error = %e, "failed to render event");
        }
    }
}
