//! kiosk-inject: replays commands against a simulated kiosk screen.
//!
//! Loads a UI-tree fixture into the [`SimulatedHost`], installs an engine
//! session, then reads one command per line from stdin and prints what the
//! engine did with it.
//!
//! # Usage
//!
//! ```text
//! kiosk-inject --tree fixtures/launcher.json [--config kiosk-input.toml] [--level 30] [--allow-shell]
//!
//! key 20            # DPAD_DOWN
//! remote select
//! text hello
//! action back
//! ```
//!
//! # Architecture
//!
//! ```text
//! main()
//!  └─ load config + fixture
//!  └─ registry().install(SimulatedHost, standard dispatcher)
//!  └─ stdin loop (tokio)
//!       └─ parse_line → spawn_blocking(registry().send) → UI thread → strategies
//! ```
//!
//! The dispatch call blocks its caller until the UI thread answers, so the
//! async loop hands it to `spawn_blocking` instead of stalling the runtime.
//!
//! The screen is simulated but the shell fallback would run the real `input`
//! tool on this machine, so it stays off unless `--allow-shell` is given.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use kiosk_input_engine::application::dispatcher::{DispatchOptions, InjectionDispatcher};
use kiosk_input_engine::application::session::registry;
use kiosk_input_engine::infrastructure::host::simulated::{SimulatedHost, UiFixture};
use kiosk_input_engine::infrastructure::script::parse_line;
use kiosk_input_engine::infrastructure::shell::ProcessRunner;
use kiosk_input_engine::infrastructure::storage::config::{load_config, EngineConfig};

// ── CLI argument definitions ──────────────────────────────────────────────────

/// Replays kiosk input commands against a UI-tree fixture.
#[derive(Debug, Parser)]
#[command(
    name = "kiosk-inject",
    about = "Replay key, text, and action commands through the kiosk input engine",
    version
)]
struct Cli {
    /// UI-tree fixture (JSON) to load into the simulated host.
    #[arg(long, env = "KIOSK_TREE")]
    tree: PathBuf,

    /// Engine configuration file.  A missing file means defaults.
    #[arg(long, default_value = "kiosk-input.toml", env = "KIOSK_CONFIG")]
    config: PathBuf,

    /// Overrides the fixture's capability level.
    #[arg(long, env = "KIOSK_LEVEL")]
    level: Option<u32>,

    /// Lets the shell fallback spawn the configured program on this machine.
    #[arg(long)]
    allow_shell: bool,
}

/// Dispatcher settings for the console: the config's, minus the shell
/// fallback unless explicitly allowed.
fn console_options(config: &EngineConfig, allow_shell: bool) -> DispatchOptions {
    let mut options = config.dispatch_options();
    if !allow_shell && options.shell_program.take().is_some() {
        info!("shell fallback disabled; pass --allow-shell to enable it");
    }
    options
}

// ── Entry point ───────────────────────────────────────────────────────────────

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = load_config(&cli.config)
        .with_context(|| format!("loading config {}", cli.config.display()))?;

    // RUST_LOG wins over the configured level.
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&config.engine.log_level)),
        )
        .init();

    let mut fixture = UiFixture::load(&cli.tree)
        .with_context(|| format!("loading fixture {}", cli.tree.display()))?;
    if let Some(level) = cli.level {
        fixture.capability_level = level;
    }
    let host = Arc::new(SimulatedHost::from_fixture(&fixture)?);

    let options = console_options(&config, cli.allow_shell);
    let dispatcher = InjectionDispatcher::standard(&options, Arc::new(ProcessRunner));
    let session = registry().install(host.clone(), dispatcher)?;
    info!(session = %session.id(), tree = %cli.tree.display(), "kiosk-inject ready");
    drop(session);

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut line_no = 0usize;
    loop {
        let line = tokio::select! {
            line = lines.next_line() => line?,
            _ = tokio::signal::ctrl_c() => {
                info!("received Ctrl+C; stopping");
                None
            }
        };
        let Some(line) = line else { break };
        line_no += 1;

        let command = match parse_line(&line) {
            Ok(Some(command)) => command,
            Ok(None) => continue,
            Err(e) => {
                warn!(line = line_no, error = %e, "skipping line");
                println!("{line_no}: error: {e}");
                continue;
            }
        };

        host.clear_records();
        let shown = format!("{command:?}");
        let delivered = tokio::task::spawn_blocking(move || registry().send(command)).await?;
        println!(
            "{line_no}: {shown} -> {}",
            if delivered { "delivered" } else { "not delivered" }
        );
        report_effects(&host);
    }

    registry().revoke();
    Ok(())
}

/// Prints what the last command did to the simulated screen.
fn report_effects(host: &SimulatedHost) {
    for action in host.global_actions() {
        println!("    global action {action:?}");
    }
    for (node, action) in host.node_actions() {
        println!("    node {} {action:?}", node.0);
    }
    for stroke in host.gestures() {
        let kind = if stroke.is_tap() { "tap" } else { "swipe" };
        println!(
            "    {kind} ({}, {}) -> ({}, {}) over {} ms",
            stroke.from.x, stroke.from.y, stroke.to.x, stroke.to.y, stroke.duration_ms
        );
    }
    if let Some(channel) = host.recording_channel() {
        for event in channel.key_events() {
            println!("    key event {:?} {} meta={:#x}", event.action, event.code, event.meta.0);
        }
        for text in channel.texts() {
            println!("    committed {text:?}");
        }
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
