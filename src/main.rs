use std::io::{self, IsTerminal, Write};
use std::path::PathBuf;
use std::process;
use std::time::Duration;

use anyhow::{Context, Result};
use bst::animator::{Animator, AnimatorError, Frame, Player};
use bst::config::{ConfigError, Settings};
use bst::handoff::{Handoff, HandoffError};
use bst::input::{self, InputError};
use bst::layout::{self, Layout, Style};
use bst::traversal::Order;
use bst::tree::Tree;
use clap::{Args, Parser, Subcommand};
use colored::Colorize;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter, Layer};

/// sysexits(3) codes.
mod exitcode {
    pub const DATAERR: i32 = 65;
    pub const NOINPUT: i32 = 66;
    pub const SOFTWARE: i32 = 70;
    pub const CONFIG: i32 = 78;
}

#[derive(Parser, Debug)]
#[command(
    name = "bst-viz",
    version,
    about = "Build a balanced binary search tree from numbers and watch its traversals"
)]
struct Cli {
    /// Turn on debug output (repeat for more).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    debug: u8,

    /// Settings file to use instead of the global one.
    #[arg(long, global = true, env = "BSTVIZ_CONFIG")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Validate numbers and hand them off for `show` and `traverse`.
    Generate {
        /// Comma or whitespace separated numbers, e.g. "5, 3, 9, 1".
        numbers: String,
    },
    /// Draw the tree built from the handed off numbers.
    Show(BuildArgs),
    /// Play traversals of the tree built from the handed off numbers.
    Traverse {
        /// pre, in or post. Several orders are played one after another.
        #[arg(required = true)]
        orders: Vec<Order>,
        #[command(flatten)]
        build: BuildArgs,
        #[command(flatten)]
        play: PlayArgs,
    },
    /// Validate, draw and optionally traverse numbers without a handoff.
    Run {
        /// Comma or whitespace separated numbers.
        numbers: String,
        /// Traversals to play after drawing.
        #[arg(long = "order", short = 'o')]
        orders: Vec<Order>,
        #[command(flatten)]
        build: BuildArgs,
        #[command(flatten)]
        play: PlayArgs,
    },
    /// Forget the handed off numbers.
    Reset,
}

#[derive(Args, Debug)]
struct BuildArgs {
    /// Insert the numbers one by one in the order given instead of building a balanced tree.
    #[arg(long)]
    unbalanced: bool,
}

#[derive(Args, Debug)]
struct PlayArgs {
    /// Milliseconds each node stays highlighted (overrides settings).
    #[arg(long)]
    interval_ms: Option<u64>,
}

/// Failures the user can fix, each with its own exit code.
fn exit_code(err: &anyhow::Error) -> i32 {
    if err.downcast_ref::<InputError>().is_some() {
        exitcode::DATAERR
    } else if let Some(e) = err.downcast_ref::<HandoffError>() {
        match e {
            HandoffError::Missing { .. } => exitcode::NOINPUT,
            HandoffError::Malformed { .. } => exitcode::DATAERR,
            HandoffError::Io { .. } => exitcode::SOFTWARE,
        }
    } else if err.downcast_ref::<ConfigError>().is_some() {
        exitcode::CONFIG
    } else {
        exitcode::SOFTWARE
    }
}

fn main() {
    let cli = Cli::parse();
    setup_logging(cli.debug);

    if let Err(e) = execute(&cli) {
        eprintln!("{}", format!("Error: {e:#}").red());
        process::exit(exit_code(&e));
    }
}

fn execute(cli: &Cli) -> Result<()> {
    let settings = Settings::load(cli.config.as_deref())?;
    let handoff = Handoff::new(&settings.handoff_path);

    match &cli.command {
        Commands::Generate { numbers } => {
            let values = input::parse_values(numbers)?;
            handoff.store(&values)?;
            println!(
                "Stored {} numbers: {}",
                values.len(),
                join(&values).bold()
            );
            println!("Run `bst-viz show` to see the tree.");
        }
        Commands::Show(build) => {
            let tree = build_tree(handoff.load()?, build);
            draw(&tree, &settings, None)?;
        }
        Commands::Traverse {
            orders,
            build,
            play,
        } => {
            let tree = build_tree(handoff.load()?, build);
            draw(&tree, &settings, None)?;
            play_all(&tree, orders, &settings, play)?;
        }
        Commands::Run {
            numbers,
            orders,
            build,
            play,
        } => {
            let values = input::parse_values(numbers)?;
            let tree = build_tree(values, build);
            draw(&tree, &settings, None)?;
            play_all(&tree, orders, &settings, play)?;
        }
        Commands::Reset => {
            handoff.clear()?;
            println!("Cleared {}", handoff.path().display());
        }
    }

    Ok(())
}

fn build_tree(values: Vec<i64>, args: &BuildArgs) -> Tree<i64> {
    if args.unbalanced {
        let mut tree = Tree::new();
        for value in values {
            tree.insert(value);
        }
        tree
    } else {
        Tree::from_values(values)
    }
}

fn join(values: &[i64]) -> String {
    values
        .iter()
        .map(i64::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Prints the level rows and the diagram of `tree`, highlighting `highlight` if given.
fn draw(tree: &Tree<i64>, settings: &Settings, highlight: Option<&i64>) -> Result<()> {
    let style = Style {
        highlight,
        color: settings.highlight(),
    };
    let mut out = io::stdout().lock();

    write!(out, "{}", Layout::of(tree))?;
    writeln!(out)?;
    write!(out, "{}", layout::diagram(tree, &style))?;
    out.flush().context("failed to write tree")?;
    Ok(())
}

fn play_all(
    tree: &Tree<i64>,
    orders: &[Order],
    settings: &Settings,
    args: &PlayArgs,
) -> Result<()> {
    let interval = args
        .interval_ms
        .map(Duration::from_millis)
        .unwrap_or_else(|| settings.step_interval());
    let player = Player::new(interval);
    let mut animator = Animator::new();
    let redraw = io::stdout().is_terminal();

    for &order in orders {
        let traversal = order.traverse(tree);
        let result = player.play(&mut animator, traversal, |animator, frame| {
            if let Err(e) = show_frame(tree, settings, animator, frame, redraw) {
                tracing::warn!(error = %e, "Failed to draw frame");
            }
        });

        match result {
            Ok(()) => println!("{}: {}", order.label().bold(), join(&order.values(tree))),
            Err(e @ AnimatorError::Busy { .. }) => {
                eprintln!("{}", e.to_string().yellow());
            }
        }
    }

    Ok(())
}

fn show_frame(
    tree: &Tree<i64>,
    settings: &Settings,
    animator: &Animator<i64>,
    frame: &Frame<i64>,
    redraw: bool,
) -> Result<()> {
    match frame {
        Frame::Highlight { step, value } => {
            if redraw {
                print!("\x1B[2J\x1B[H");
            } else {
                println!();
            }
            if let Some(status) = animator.status() {
                println!("{status}");
            }
            println!("step {}: {}", step + 1, value);
            draw(tree, settings, animator.highlighted())
        }
        Frame::Finished => {
            if redraw {
                print!("\x1B[2J\x1B[H");
                draw(tree, settings, None)?;
            }
            Ok(())
        }
    }
}

fn setup_logging(verbosity: u8) {
    let filter = match verbosity {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        3 => LevelFilter::TRACE,
        _ => {
            eprintln!("Don't be crazy, max is -d -d -d");
            LevelFilter::TRACE
        }
    };

    // RUST_LOG wins when set so single modules can be turned up.
    let env_filter = EnvFilter::builder()
        .with_default_directive(filter.into())
        .from_env_lossy();

    let fmt_layer = fmt::layer()
        .with_writer(io::stderr)
        .with_target(true)
        .with_thread_names(false);

    tracing_subscriber::registry()
        .with(fmt_layer.with_filter(env_filter))
        .init();

    tracing::debug!(?filter, "Logging initialized");
}
