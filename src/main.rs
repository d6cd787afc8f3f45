// model = "claude-opus-4-5"
// created = "2026-10-19"
// modified = "2026-10-19"

//! Interactive playlist shell.

use std::io;
use std::io::BufRead;
use std::io::Write;

use anyhow::Context;
use anyhow::Result;
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use cadence::Notice;
use cadence::Notify;
use cadence::Playlist;

/// Command-line arguments for the playlist shell.
#[derive(Parser, Debug)]
#[command(name = "cadence")]
#[command(about = "Manage a playlist from the terminal")]
#[command(version)]
struct Args {
    /// Seed for shuffling; fresh entropy when absent
    #[arg(long, env = "CADENCE_SEED")]
    seed: Option<u64>,

    /// Log filter, e.g. "cadence=debug"; falls back to RUST_LOG
    #[arg(long, env = "CADENCE_LOG")]
    log: Option<String>,
}

/// Prints every notice to stdout.
struct Console;

impl Notify for Console {
    fn notify(&mut self, notice: Notice) {
        println!();
        println!("{}", notice);
    }
}

const MENU: &str = "\
Menu:
1. Add a track
2. Remove a track
3. Play the next track
4. Play the previous track
5. Show the current track
6. List the playlist with durations
7. Search for a track
8. Sort the playlist by title
9. Shuffle the playlist
10. Exit";

/// Print `label` and read one line. `None` on end of input.
fn prompt(input: &mut impl BufRead, label: &str) -> Result<Option<String>> {
    print!("{}", label);
    io::stdout().flush().context("flush stdout")?;

    let mut line = String::new();
    if input.read_line(&mut line).context("read stdin")? == 0 {
        return Ok(None);
    }
    return Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()));
}

fn init_tracing(args: &Args) -> Result<()> {
    let filter = match &args.log {
        Some(filter) => EnvFilter::try_new(filter).context("invalid log filter")?,
        None => EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new("cadence=warn")),
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
    return Ok(());
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_tracing(&args)?;

    let mut playlist = Playlist::with_sink(Console);
    if let Some(seed) = args.seed {
        info!(seed, "seeded shuffle generator");
        playlist = playlist.with_seed(seed);
    }

    let stdin = io::stdin();
    let mut input = stdin.lock();

    println!("Welcome to cadence!");
    println!();
    println!("{}", MENU);

    loop {
        println!();
        let Some(choice) = prompt(&mut input, "Choose an option: ")? else {
            break;
        };

        match choice.trim().parse::<u32>() {
            Ok(1) => {
                let Some(title) = prompt(&mut input, "Enter track title: ")? else {
                    break;
                };
                let Some(duration) = prompt(&mut input, "Enter track duration (in seconds): ")?
                else {
                    break;
                };
                match duration.trim().parse::<u32>() {
                    Ok(duration) => playlist.add_track(title, duration),
                    Err(_) => {
                        println!();
                        println!("Invalid duration. Please enter a whole number of seconds.");
                    }
                }
            }
            Ok(2) => {
                let Some(title) = prompt(&mut input, "Enter track title to remove: ")? else {
                    break;
                };
                playlist.remove_track(&title);
            }
            Ok(3) => {
                playlist.play_next();
            }
            Ok(4) => {
                playlist.play_previous();
            }
            Ok(5) => {
                playlist.current_track();
            }
            Ok(6) => playlist.display_all(),
            Ok(7) => {
                let Some(title) = prompt(&mut input, "Enter track title to search for: ")? else {
                    break;
                };
                playlist.search(&title);
            }
            Ok(8) => playlist.sort(),
            Ok(9) => playlist.shuffle(),
            Ok(10) => break,
            _ => {
                println!();
                println!("Invalid option. Please choose a valid option.");
            }
        }
    }

    println!();
    println!("Thank you for using cadence!");
    playlist.clear();
    return Ok(());
}
