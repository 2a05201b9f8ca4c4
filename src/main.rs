//! praxis CLI entry point.
//!
//! Parses command-line arguments into actions and dispatches them to the
//! router. Each invocation is one user event; the tool re-renders the
//! current view after every mutation.

use std::io::{self, Write};
use std::path::PathBuf;

use clap::{CommandFactory, Parser, Subcommand};

use praxis::actions::{Action, QuickAction};
use praxis::completion::{print_completion_script, ShellType, SUPPORTED_SHELLS};
use praxis::error::PraxisError;
use praxis::log::Logbook;
use praxis::nav;
use praxis::output::print_error;
use praxis::state::{Mode, PlanLane, Route};
use praxis::timer::{countdown, CancelFlag, TimerOutcome};
use praxis::views;
use praxis::{Config, Result, Router, Store};

#[derive(Parser)]
#[command(name = "praxis")]
#[command(
    version,
    about = "Local-first self-help flow: steps, continue tracking, and a win log",
    after_help = "EXAMPLES:
    # Show the current view (home on first run)
    praxis

    # Walk the flow
    praxis go calm
    praxis go forward

    # Pick up where you left off
    praxis continue

    # Move Forward
    praxis do walk --note \"around the block\"
    praxis do sprint --timer
    praxis plan body
    praxis clarify 3
    praxis win --note \"opened the file\"

    # Housekeeping
    praxis log
    praxis export
    praxis clear --yes"
)]
struct Cli {
    /// Deep link (`route` or `route/sub`, e.g. `forward/plan`); invalid
    /// links land on home
    fragment: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Go to a step (home, reset, calm, urge, forward)
    Go {
        /// Route token; unknown tokens land on home
        route: String,
    },

    /// Open a deep link (`route` or `route/sub`)
    Open { fragment: String },

    /// Resume where you left off, down to the exact sub-view
    #[command(name = "continue")]
    Continue,

    /// Show the current position and preferences
    Status,

    /// Set the Move Forward mode
    Mode {
        /// movement, productivity, or balanced
        mode: String,
    },

    /// Plan Today: list lanes, or choose one (body, task, people)
    Plan {
        lane: Option<String>,

        /// One-sentence note appended to the log entry
        #[arg(short, long)]
        note: Option<String>,
    },

    /// Clarify the next move: list suggestions, or pick one by number
    Clarify {
        number: Option<usize>,

        #[arg(short, long)]
        note: Option<String>,
    },

    /// Complete a quick action (shift, walk, tidy, sprint)
    #[command(after_help = "EXAMPLES:
    praxis do shift                 # Log the 60-second body shift
    praxis do walk --timer          # Run the 3-minute countdown first
    praxis do tidy --note \"desk\"    # Log with a note")]
    Do {
        action: String,

        #[arg(short, long)]
        note: Option<String>,

        /// Run the action's countdown before logging; Ctrl-C cancels
        /// without logging
        #[arg(short, long)]
        timer: bool,
    },

    /// Log a free-form win
    Win {
        #[arg(short, long)]
        note: Option<String>,
    },

    /// Show the activity log, newest first
    Log {
        /// Show only the newest N entries
        #[arg(short, long)]
        limit: Option<usize>,
    },

    /// Export the full log as a JSON snapshot
    Export {
        /// Target file (default: praxis-log-<date>.json)
        #[arg(short, long)]
        out: Option<PathBuf>,
    },

    /// Clear all local data and start fresh
    Clear {
        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },

    /// Generate a shell completion script
    Completions {
        /// One of: bash, zsh, fish
        shell: String,
    },
}

fn main() {
    let cli = Cli::parse();
    if let Err(e) = run(cli) {
        print_error(&e.to_string());
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    // Completions need no store or config.
    if let Some(Commands::Completions { shell }) = &cli.command {
        let shell = ShellType::from_name(shell).map_err(|e| {
            PraxisError::Config(format!(
                "{e}\nSupported shells: {}",
                SUPPORTED_SHELLS.join(", ")
            ))
        })?;
        print_completion_script(shell, &mut Cli::command());
        return Ok(());
    }

    let config = Config::load()?;
    let store = match &config.data_dir {
        Some(dir) => Store::with_dir(dir.clone()),
        None => Store::new()?,
    };
    let router = Router::new(&store, config.log_preview);

    match (cli.fragment, cli.command) {
        // Positional deep link takes precedence: `praxis forward/plan`.
        (Some(fragment), _) => router.dispatch(Action::Open(nav::parse_fragment(&fragment))),

        (None, None) => router.boot(),

        (None, Some(command)) => match command {
            Commands::Go { route } => {
                // Unknown tokens coerce to home, same as a bad deep link.
                let route = Route::parse(&route).unwrap_or(Route::Home);
                router.dispatch(Action::Go(route))
            }

            Commands::Open { fragment } => {
                router.dispatch(Action::Open(nav::parse_fragment(&fragment)))
            }

            Commands::Continue => router.dispatch(Action::Continue),

            Commands::Status => {
                print!("{}", views::status(&store.load_state()));
                Ok(())
            }

            Commands::Mode { mode } => {
                let mode = Mode::parse(&mode).ok_or(PraxisError::UnknownMode(mode))?;
                router.dispatch(Action::SetMode(mode))
            }

            Commands::Plan { lane: None, .. } => router.dispatch(Action::OpenPlan),
            Commands::Plan {
                lane: Some(lane),
                note,
            } => {
                let lane = PlanLane::parse(&lane).ok_or(PraxisError::UnknownPlanLane(lane))?;
                router.dispatch(Action::ChoosePlan {
                    lane,
                    note: note.unwrap_or_default(),
                })
            }

            Commands::Clarify { number: None, .. } => router.dispatch(Action::OpenClarify),
            Commands::Clarify {
                number: Some(number),
                note,
            } => {
                let index = number
                    .checked_sub(1)
                    .ok_or(PraxisError::UnknownSuggestion(number))?;
                router.dispatch(Action::ChooseSuggestion {
                    index,
                    note: note.unwrap_or_default(),
                })
            }

            Commands::Do {
                action,
                note,
                timer,
            } => {
                let action = QuickAction::parse(&action)
                    .ok_or(PraxisError::UnknownQuickAction(action))?;
                if timer {
                    let cancel = CancelFlag::install()?;
                    if countdown(action.title(), action.duration(), &cancel)?
                        == TimerOutcome::Cancelled
                    {
                        println!("Cancelled. Nothing logged.");
                        return Ok(());
                    }
                }
                router.dispatch(Action::Quick {
                    action,
                    note: note.unwrap_or_default(),
                })
            }

            Commands::Win { note } => router.dispatch(Action::Win {
                note: note.unwrap_or_default(),
            }),

            Commands::Log { limit } => {
                let logbook = Logbook::new(&store);
                let entries = match limit {
                    Some(n) => logbook.recent(n),
                    None => logbook.all(),
                };
                print!("{}", views::log_list(&entries));
                Ok(())
            }

            Commands::Export { out } => {
                let logbook = Logbook::new(&store);
                let count = logbook.all().len();
                let path = logbook.export(out)?;
                println!("Exported {} entries to {}", count, path.display());
                Ok(())
            }

            Commands::Clear { yes } => {
                if !yes && !confirm("This clears all local praxis data. Continue?")? {
                    println!("Aborted.");
                    return Ok(());
                }
                router.dispatch(Action::Clear)
            }

            Commands::Completions { .. } => unreachable!("handled above"),
        },
    }
}

/// y/N prompt on stdin; anything but an explicit yes declines.
fn confirm(question: &str) -> Result<bool> {
    print!("{question} [y/N] ");
    io::stdout().flush()?;
    let mut answer = String::new();
    io::stdin().read_line(&mut answer)?;
    let answer = answer.trim().to_ascii_lowercase();
    Ok(answer == "y" || answer == "yes")
}
