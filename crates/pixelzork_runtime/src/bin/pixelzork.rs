//! Pixel Zork CLI entry point.

use pixelzork_engine::stdlib::BANNER;
use pixelzork_engine::{EngineConfig, WinPolicy};
use pixelzork_runtime::{Renderer, Repl, WorldFile};
use pixelzork_world::World;
use std::env;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// CLI configuration parsed from arguments.
#[derive(Default)]
struct CliConfig {
    scripts: Vec<PathBuf>,
    world: Option<PathBuf>,
    batch_mode: bool,
    halt_on_win: bool,
    no_color: bool,
    show_help: bool,
    show_version: bool,
    trace: bool,
    dump_world: bool,
}

fn main() -> ExitCode {
    let args: Vec<String> = env::args().collect();
    // Scanned before parsing so argument errors also honour --no-color
    let renderer = Renderer::new(!args.iter().skip(1).any(|a| a == "--no-color"));

    match parse_args(args).and_then(run) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{}", renderer.error(&format!("Error: {e}")));
            ExitCode::FAILURE
        }
    }
}

fn parse_args(args: Vec<String>) -> Result<CliConfig, Box<dyn std::error::Error>> {
    let mut config = CliConfig::default();

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "-h" | "--help" => config.show_help = true,
            "-V" | "--version" => config.show_version = true,
            "-b" | "--batch" => config.batch_mode = true,
            "--halt-on-win" => config.halt_on_win = true,
            "--no-color" => config.no_color = true,
            "--trace" => config.trace = true,
            "--dump-world" => config.dump_world = true,
            "-w" | "--world" => {
                i += 1;
                if i >= args.len() {
                    return Err("--world requires a path".into());
                }
                config.world = Some(PathBuf::from(&args[i]));
            }
            arg if arg.starts_with('-') => {
                return Err(format!("unknown option: {arg}").into());
            }
            path => config.scripts.push(PathBuf::from(path)),
        }
        i += 1;
    }

    Ok(config)
}

/// Picks the log filter: `--trace` wins, then `RUST_LOG`, then warnings only.
fn log_directives(trace: bool, rust_log: Option<String>) -> String {
    if trace {
        return "debug".to_string();
    }
    rust_log
        .filter(|directives| !directives.trim().is_empty())
        .unwrap_or_else(|| "warn".to_string())
}

fn init_logging(trace: bool) {
    let directives = log_directives(trace, env::var(EnvFilter::DEFAULT_ENV).ok());
    let filter = EnvFilter::try_new(&directives).unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .init();
}

fn run(config: CliConfig) -> Result<(), Box<dyn std::error::Error>> {
    let renderer = Renderer::new(!config.no_color);

    if config.show_help {
        println!("{}", help_text(&renderer));
        return Ok(());
    }

    if config.show_version {
        println!("pixelzork {}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }

    init_logging(config.trace);

    let world_file = match &config.world {
        Some(path) => WorldFile::load(path)?,
        None => WorldFile::house(),
    };

    let policy = if config.halt_on_win {
        WinPolicy::Halt
    } else {
        WinPolicy::Continue
    };
    let game = world_file.into_game(
        EngineConfig::new()
            .with_banner(BANNER)
            .with_win_policy(policy),
    )?;
    info!(rooms = game.world().room_count(), ?policy, "session ready");

    if config.dump_world {
        println!("{}", dump_world(game.world(), &renderer));
    }

    let mut repl = Repl::new(game, renderer)?;

    for script in &config.scripts {
        repl.run_script(script)?;
    }

    if config.batch_mode {
        return Ok(());
    }

    // Scripts already showed where the player is
    if !config.scripts.is_empty() {
        repl = repl.without_banner();
    }

    repl.run()?;
    Ok(())
}

fn dump_world(world: &World, renderer: &Renderer) -> String {
    let mut out = vec![
        renderer.heading("=== World ==="),
        format!("Start: {}", world.start_room()),
        format!("Rooms: {}", world.room_count()),
    ];

    for room in world.rooms() {
        let exits: Vec<String> = room
            .exits()
            .map(|(direction, target)| {
                if room.is_locked(direction) {
                    format!("{direction}->{target} (locked)")
                } else {
                    format!("{direction}->{target}")
                }
            })
            .collect();
        let items: Vec<&str> = room.items().collect();

        out.push(format!("  - {} ({})", room.id(), room.name()));
        out.push(format!("      exits: {}", exits.join(", ")));
        if !items.is_empty() {
            out.push(format!("      items: {}", items.join(", ")));
        }
    }

    out.push(String::new());
    out.join("\n")
}

fn help_text(renderer: &Renderer) -> String {
    let h = |text: &str| renderer.heading(text);
    format!(
        "{title} - A tiny text adventure

{usage}
    pixelzork [OPTIONS] [SCRIPTS...]

{arguments}
    [SCRIPTS...]    Command scripts to play before the prompt, one command per line

{options}
    -h, --help         Print help information
    -V, --version      Print version information
    -b, --batch        Play scripts and exit (no prompt)
    -w, --world PATH   Load a JSON world file instead of the house
    --halt-on-win      Refuse moves after the game is won
    --no-color         Plain text output

{debug}
    --trace            Log every command at debug level (stderr)
    --dump-world       Print the room table after loading

{examples}
    pixelzork                         Play the house
    pixelzork -w castle.json          Play another world
    pixelzork -b walkthrough.txt      Play a script and exit

{commands}
    go <direction>, n/s/e/w/u/d, look, take <item>, drop <item>,
    inventory (i), use <item>, help, restart
    Ctrl+D               Quit
    Ctrl+C               Cancel current input

RUST_LOG sets the log filter unless --trace is given.",
        title = h("Pixel Zork"),
        usage = h("USAGE:"),
        arguments = h("ARGUMENTS:"),
        options = h("OPTIONS:"),
        debug = h("DEBUG OPTIONS:"),
        examples = h("EXAMPLES:"),
        commands = h("COMMANDS:"),
    )
}
