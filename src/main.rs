//! Rock-paper-scissors rig (default binary).
//!
//! Drives a game session from a keyboard contact panel, shows the state in
//! the terminal and serves the browser scoreboard. The session is owned by
//! this loop alone; scoreboard requests are answered between ticks.

use std::fs::OpenOptions;
use std::sync::Mutex;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::event::{self, Event, KeyEventKind};
use tracing::info;
use tracing_subscriber::EnvFilter;

use rps_rig::adapter::{check_tcp_listen_available, Adapter, ServerConfig, ServerState};
use rps_rig::config::RigConfig;
use rps_rig::core::{GameSession, UnknownGesturePolicy};
use rps_rig::input::{handle_key_event, should_quit};
use rps_rig::rig::{LoggedServos, Rig};
use rps_rig::term::{ServerStatusView, StatusView, TerminalRenderer};
use rps_rig::types::TICK_MS;

#[derive(Parser, Debug)]
#[command(name = "rps-rig")]
#[command(about = "Touch-sensed rock-paper-scissors against a servo hand", long_about = None)]
#[command(version)]
struct Cli {
    /// Scoreboard bind address (overrides RPS_HTTP_HOST)
    #[arg(long)]
    host: Option<String>,

    /// Scoreboard port (overrides RPS_HTTP_PORT)
    #[arg(long)]
    port: Option<u16>,

    /// Seed for the machine's gestures (overrides RPS_SEED)
    #[arg(long)]
    seed: Option<u32>,

    /// What an unreadable human gesture does: forfeit or replay
    #[arg(long, value_parser = parse_policy)]
    unknown_policy: Option<UnknownGesturePolicy>,

    /// Run without the scoreboard server
    #[arg(long)]
    no_http: bool,

    /// Hide the key legend under the status screen
    #[arg(long)]
    no_legend: bool,
}

fn parse_policy(s: &str) -> Result<UnknownGesturePolicy, String> {
    UnknownGesturePolicy::from_str(s).ok_or_else(|| format!("expected forfeit or replay, got {s}"))
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut settings = RigConfig::from_env();
    if let Some(seed) = cli.seed {
        settings.seed = seed;
    }
    if let Some(policy) = cli.unknown_policy {
        settings.unknown_policy = policy;
    }

    init_logging(&settings)?;

    let mut server = ServerConfig::from_env();
    if let Some(host) = cli.host {
        server.host = host;
    }
    if let Some(port) = cli.port {
        server.port = port;
    }

    let http_enabled = !cli.no_http && !ServerState::is_disabled();
    let mut adapter = if http_enabled {
        check_tcp_listen_available(&server.host, server.port)
            .with_context(|| format!("cannot listen on {}:{}", server.host, server.port))?;
        Some(Adapter::start(server)?)
    } else {
        info!("scoreboard disabled");
        None
    };

    let server_view = ServerStatusView {
        enabled: adapter.is_some(),
        url: adapter
            .as_ref()
            .map(|a| format!("http://{}", a.local_addr()))
            .unwrap_or_default(),
    };

    info!(
        seed = settings.seed,
        unknown_policy = settings.unknown_policy.as_str(),
        "rig starting"
    );
    let session = GameSession::new(settings.seed).with_unknown_policy(settings.unknown_policy);
    let mut rig = Rig::new(session, LoggedServos::default());
    let view = StatusView::new().with_legend(!cli.no_legend);

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &mut rig, adapter.as_mut(), &view, &server_view);

    // Always try to restore terminal state.
    let _ = term.exit();
    info!(
        rounds = rig.session().rounds_played(),
        servo_commands = rig.actuator().bank().commands(),
        "rig stopped"
    );
    result
}

fn init_logging(settings: &RigConfig) -> Result<()> {
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&settings.log_path)
        .with_context(|| format!("cannot open log file {}", settings.log_path.display()))?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_ansi(false)
        .with_writer(Mutex::new(file))
        .init();
    Ok(())
}

fn run(
    term: &mut TerminalRenderer,
    rig: &mut Rig<LoggedServos>,
    mut adapter: Option<&mut Adapter>,
    view: &StatusView,
    server_view: &ServerStatusView,
) -> Result<()> {
    let tick_duration = Duration::from_millis(TICK_MS as u64);
    let mut last_tick = Instant::now();

    loop {
        // Render.
        term.draw(&rig.render(view, Some(server_view)))?;

        // Input with timeout until next tick.
        let timeout = tick_duration
            .checked_sub(last_tick.elapsed())
            .unwrap_or(Duration::ZERO);

        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    if should_quit(key) {
                        return Ok(());
                    }
                    if let Some(action) = handle_key_event(key) {
                        rig.on_action(action);
                    }
                }
                Event::Resize(..) => term.invalidate(),
                _ => {}
            }
        }

        // Scoreboard requests.
        if let Some(adapter) = adapter.as_deref_mut() {
            while let Some(cmd) = adapter.try_recv() {
                rig.on_command(cmd);
            }
        }

        // Tick.
        let now = Instant::now();
        let elapsed = now.duration_since(last_tick);
        if elapsed >= tick_duration {
            last_tick = now;
            let elapsed_ms = u32::try_from(elapsed.as_millis()).unwrap_or(u32::MAX);
            rig.advance(elapsed_ms);
        }
    }
}
