mod ui;

use battle_arena::build_info;
use battle_arena::core::config::ArenaConfig;
use battle_arena::{Game, SaveManager};
use std::io;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;
use ui::console::{ConsolePrompt, ConsoleRenderer};

fn print_help() {
    println!("Battle Arena - Turn-Based Text Combat\n");
    println!("Usage: battle-arena [options]\n");
    println!("Options:");
    println!("  --save <path>  Read and write the save file at <path>");
    println!("  --init-config  Write the current settings to the config file");
    println!("  --version      Show version information");
    println!("  --help         Show this help message");
}

/// Logs go to stderr so they never interleave with prompts on stdout.
fn init_tracing(config: &ArenaConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_filter));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

fn main() -> io::Result<()> {
    let mut save_override: Option<PathBuf> = None;
    let mut init_config = false;

    let mut args = std::env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--version" | "-v" => {
                println!("{}", build_info::version_line());
                std::process::exit(0);
            }
            "--help" | "-h" => {
                print_help();
                std::process::exit(0);
            }
            "--init-config" => init_config = true,
            "--save" => match args.next() {
                Some(path) => save_override = Some(PathBuf::from(path)),
                None => {
                    eprintln!("--save needs a path");
                    std::process::exit(1);
                }
            },
            other => {
                eprintln!("Unknown argument: {}", other);
                eprintln!("Run 'battle-arena --help' for usage.");
                std::process::exit(1);
            }
        }
    }

    let config = ArenaConfig::load();
    init_tracing(&config);

    if init_config {
        config.save()?;
        println!("Config written.");
        return Ok(());
    }

    let saves = match save_override {
        Some(path) => SaveManager::with_path(path),
        None => SaveManager::new(&config)?,
    };
    tracing::debug!(path = %saves.save_path().display(), "using save file");

    let mut game = Game::new(saves);
    let mut prompt = ConsolePrompt::stdin();
    let mut renderer = ConsoleRenderer::stdout(config.clear_screen);

    match game.run(&mut prompt, &mut renderer) {
        Ok(()) => {}
        // Closed stdin ends the session like quitting does
        Err(e) if e.kind() == io::ErrorKind::UnexpectedEof => {
            tracing::info!("input closed, exiting");
        }
        Err(e) => return Err(e),
    }

    println!("Goodbye!");
    Ok(())
}
