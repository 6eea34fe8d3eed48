//! Folio - a personal portfolio in the terminal

use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};
use folio::app::{App, ViewStateController};
use folio::catalog::{BLOG_POSTS, PROFILE, PROJECTS};
use folio::config::Config;
use folio::storage::{FileThemeStore, MemoryThemeStore, ThemeStore};
use folio::theme::{EnvColorScheme, ThemeMode};

/// Personal portfolio in the terminal
#[derive(Parser)]
#[command(name = "folio")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Start with this theme for one session without saving it
    #[arg(long, value_name = "light|dark")]
    theme: Option<ThemeMode>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Print projects and blog posts as plain text
    List,
    /// Forget the saved theme preference
    Reset {
        /// Skip confirmation
        #[arg(long)]
        force: bool,
    },
}

fn main() -> Result<()> {
    init_logging();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            // Let --help and --version exit normally
            if e.kind() == clap::error::ErrorKind::DisplayHelp
                || e.kind() == clap::error::ErrorKind::DisplayVersion
            {
                e.exit();
            }
            // For actual errors, show error + help
            eprintln!("error: {}\n", e.kind());
            Cli::command().print_help()?;
            std::process::exit(1);
        }
    };

    match cli.command {
        Some(Commands::List) => {
            cmd_list();
            Ok(())
        }
        Some(Commands::Reset { force }) => cmd_reset(force),
        None => {
            let config = Config::load().unwrap_or_else(|e| {
                eprintln!("Warning: Failed to load config, using defaults: {e:#}");
                Config::default()
            });

            let store: Box<dyn ThemeStore> = match cli.theme {
                Some(theme) => Box::new(MemoryThemeStore::new(Some(theme))),
                None => Box::new(FileThemeStore::new()),
            };
            let view = ViewStateController::initialize(store, &EnvColorScheme);

            folio::tui::run(App::new(config, view))
        }
    }
}

fn init_logging() {
    let log_path = folio::paths::log_path();

    // Clear the log file on startup
    if let Err(e) = std::fs::write(&log_path, "") {
        eprintln!("Warning: Failed to clear log file: {e}");
    }

    // Tail with: tail -f $TMPDIR/folio.log
    // Set DEBUG=0-3 to control verbosity (0=off, 1=warn, 2=info, 3=debug)
    let debug_level = std::env::var("DEBUG")
        .ok()
        .and_then(|v| v.parse::<u8>().ok())
        .unwrap_or(0);

    if debug_level == 0 {
        return;
    }
    let level = match debug_level {
        1 => tracing::Level::WARN,
        2 => tracing::Level::INFO,
        _ => tracing::Level::DEBUG,
    };

    let dir = log_path
        .parent()
        .map_or_else(std::env::temp_dir, std::path::Path::to_path_buf);
    let file_appender = tracing_appender::rolling::never(dir, "folio.log");
    tracing_subscriber::fmt()
        .with_writer(file_appender)
        .with_max_level(level)
        .with_ansi(false)
        .init();
}

fn cmd_list() {
    println!("{} - {}\n", PROFILE.name, PROFILE.tagline);

    println!("Projects:\n");
    for project in PROJECTS {
        println!("  {}", project.title);
        println!("    {}", project.description);
        if project.has_links() {
            for (label, url) in project.links() {
                println!("    {label}: {url}");
            }
        } else {
            println!("    Gallery: {}", project.images.join(", "));
        }
        println!();
    }

    println!("Blog:\n");
    for post in BLOG_POSTS {
        println!("  {} ({})", post.title, post.date);
        println!("    {}", post.preview);
    }
}

fn cmd_reset(force: bool) -> Result<()> {
    use std::io::{self, Write};

    let store = FileThemeStore::new();
    let stored = match store.load() {
        Ok(stored) => stored,
        Err(e) => {
            eprintln!("Warning: {e}");
            None
        }
    };

    if stored.is_none() && !store.path().exists() {
        println!("No saved theme preference.");
        return Ok(());
    }

    match stored {
        Some(theme) => println!("Saved theme: {theme} ({})\n", store.path().display()),
        None => println!("Settings file: {}\n", store.path().display()),
    }

    if !force {
        print!("Continue? [y/N] ");
        io::stdout().flush()?;

        let mut input = String::new();
        io::stdin().read_line(&mut input)?;

        if !input.trim().eq_ignore_ascii_case("y") {
            println!("Aborted.");
            return Ok(());
        }
    }

    store.clear()?;
    println!("Reset complete.");
    Ok(())
}
