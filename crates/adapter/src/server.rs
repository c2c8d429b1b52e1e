//! HTTP server for the scoreboard
//!
//! Serves the page and two JSON/text endpoints with axum. Every request that
//! needs game state is forwarded to the game loop over a bounded channel.

use std::io;
use std::net::{SocketAddr, ToSocketAddrs};
use std::time::Duration;

use anyhow::Context;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use derive_more::{Display, Error};
use tokio::net::TcpListener;
use tokio::sync::mpsc::error::TrySendError;
use tokio::sync::{mpsc, oneshot};
use tracing::{debug, info, warn};

use crate::page::index_html;
use crate::protocol::{create_error, ErrorCode, StatusMessage};
use crate::runtime::InboundCommand;

/// How long a handler waits for the game loop to answer.
///
/// A command whose handler has given up is skipped by the loop, so a 503
/// timeout normally means the reset was not applied.
pub const REPLY_TIMEOUT: Duration = Duration::from_secs(2);

/// Server configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub max_pending_commands: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
            max_pending_commands: 16,
        }
    }
}

impl ServerConfig {
    /// Create from environment variables
    pub fn from_env() -> Self {
        use std::env;

        let defaults = Self::default();

        let host = env::var("RPS_HTTP_HOST")
            .ok()
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .unwrap_or(defaults.host);
        let port = env::var("RPS_HTTP_PORT")
            .ok()
            .and_then(|s| s.trim().parse().ok())
            .unwrap_or(defaults.port);
        let max_pending_commands = env::var("RPS_MAX_PENDING")
            .ok()
            .and_then(|s| s.trim().parse().ok())
            .unwrap_or(defaults.max_pending_commands);

        Self {
            host,
            port,
            max_pending_commands,
        }
    }

    pub fn socket_addr(&self) -> anyhow::Result<SocketAddr> {
        (self.host.as_str(), self.port)
            .to_socket_addrs()
            .with_context(|| format!("invalid listen address {}:{}", self.host, self.port))?
            .next()
            .with_context(|| format!("{}:{} resolved to no address", self.host, self.port))
    }
}

/// Process-wide server switches
pub struct ServerState;

impl ServerState {
    /// `RPS_HTTP_DISABLED` set to `1` or `true` turns the server off.
    pub fn is_disabled() -> bool {
        std::env::var("RPS_HTTP_DISABLED")
            .map(|v| matches!(v.trim().to_ascii_lowercase().as_str(), "1" | "true"))
            .unwrap_or(false)
    }
}

/// Fail fast if `host:port` cannot be bound.
pub fn check_tcp_listen_available(host: &str, port: u16) -> io::Result<()> {
    let listener = std::net::TcpListener::bind((host, port))?;
    drop(listener);
    Ok(())
}

/// A request the game loop could not answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum RequestError {
    #[display("command queue is full")]
    Backpressure,
    #[display("game loop is not running")]
    LoopClosed,
    #[display("game loop did not answer in time")]
    Timeout,
}

impl RequestError {
    fn code(&self) -> ErrorCode {
        match self {
            RequestError::Backpressure => ErrorCode::Backpressure,
            RequestError::LoopClosed => ErrorCode::Unavailable,
            RequestError::Timeout => ErrorCode::Timeout,
        }
    }
}

impl IntoResponse for RequestError {
    fn into_response(self) -> Response {
        warn!(error = %self, "request not served");
        let body = create_error(self.code(), &self.to_string());
        (StatusCode::SERVICE_UNAVAILABLE, Json(body)).into_response()
    }
}

#[derive(Clone)]
struct AppState {
    command_tx: mpsc::Sender<InboundCommand>,
}

impl AppState {
    async fn request<T>(
        &self,
        make: impl FnOnce(oneshot::Sender<T>) -> InboundCommand,
    ) -> Result<T, RequestError> {
        let (reply_tx, reply_rx) = oneshot::channel();
        self.command_tx
            .try_send(make(reply_tx))
            .map_err(|e| match e {
                TrySendError::Full(_) => RequestError::Backpressure,
                TrySendError::Closed(_) => RequestError::LoopClosed,
            })?;

        match tokio::time::timeout(REPLY_TIMEOUT, reply_rx).await {
            Ok(Ok(value)) => Ok(value),
            Ok(Err(_)) => Err(RequestError::LoopClosed),
            Err(_) => Err(RequestError::Timeout),
        }
    }
}

/// Routes served by the rig
pub fn router(command_tx: mpsc::Sender<InboundCommand>) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/game-status", get(game_status))
        .route("/start-game", get(start_game).post(start_game))
        .fallback(not_found)
        .with_state(AppState { command_tx })
}

async fn index() -> Html<String> {
    Html(index_html())
}

async fn game_status(State(state): State<AppState>) -> Result<Json<StatusMessage>, RequestError> {
    let snap = state
        .request(|reply| InboundCommand::Status { reply })
        .await?;
    debug!(
        human = snap.human_score,
        robot = snap.machine_score,
        countdown = snap.countdown,
        game_over = snap.game_over,
        "status served"
    );
    Ok(Json(StatusMessage::from(&snap)))
}

async fn start_game(State(state): State<AppState>) -> Result<&'static str, RequestError> {
    state.request(|reply| InboundCommand::Reset { reply }).await?;
    info!("new game started from scoreboard");
    Ok("Game Started")
}

async fn not_found() -> StatusCode {
    StatusCode::NOT_FOUND
}

/// Bind and serve until the task is dropped.
///
/// `ready_tx` receives the bound address once the listener is up, which lets
/// callers use port 0.
pub async fn run_server(
    config: ServerConfig,
    command_tx: mpsc::Sender<InboundCommand>,
    ready_tx: Option<oneshot::Sender<SocketAddr>>,
) -> anyhow::Result<()> {
    let addr = config.socket_addr()?;
    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    let bound = listener.local_addr()?;
    info!(addr = %bound, "scoreboard listening");
    if let Some(tx) = ready_tx {
        let _ = tx.send(bound);
    }

    axum::serve(listener, router(command_tx))
        .await
        .context("http server stopped")?;
    Ok(())
}
