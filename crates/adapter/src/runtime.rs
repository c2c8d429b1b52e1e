//! Adapter runtime integration.
//!
//! Bridges the sync game loop with the async HTTP server. Handlers never touch
//! the session; they queue an [`InboundCommand`] and wait for the loop to
//! answer it between ticks.

use std::net::SocketAddr;

use anyhow::Context;
use tokio::runtime::Runtime;
use tokio::sync::{mpsc, oneshot};

use crate::core::{GameSession, StatusSnapshot};
use crate::server::{run_server, ServerConfig};

/// Command delivered to the game loop.
#[derive(Debug)]
pub enum InboundCommand {
    /// Read the current status.
    Status { reply: oneshot::Sender<StatusSnapshot> },
    /// Start a new game, then acknowledge.
    Reset { reply: oneshot::Sender<()> },
}

/// Which kind of command the loop just answered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Handled {
    Status,
    Reset,
    /// The handler had already given up; nothing was applied.
    Abandoned,
}

impl InboundCommand {
    /// Apply the command to the session and answer the waiting handler.
    ///
    /// A handler that timed out has dropped its receiver and already answered
    /// 503, so its command is skipped rather than applied unseen.
    pub fn apply(self, session: &mut GameSession) -> Handled {
        match self {
            InboundCommand::Status { reply } if reply.is_closed() => Handled::Abandoned,
            InboundCommand::Reset { reply } if reply.is_closed() => Handled::Abandoned,
            InboundCommand::Status { reply } => {
                let _ = reply.send(session.snapshot());
                Handled::Status
            }
            InboundCommand::Reset { reply } => {
                session.reset();
                let _ = reply.send(());
                Handled::Reset
            }
        }
    }
}

/// Running adapter instance.
pub struct Adapter {
    _rt: Runtime,
    cmd_rx: mpsc::Receiver<InboundCommand>,
    addr: SocketAddr,
}

impl Adapter {
    /// Start the HTTP server on its own runtime and wait until it is bound.
    pub fn start(config: ServerConfig) -> anyhow::Result<Self> {
        let max_pending = config.max_pending_commands.max(1);
        let (cmd_tx, cmd_rx) = mpsc::channel::<InboundCommand>(max_pending);
        let (ready_tx, ready_rx) = oneshot::channel();

        let rt = Runtime::new().context("failed to create tokio runtime")?;
        let server = rt.spawn(async move { run_server(config, cmd_tx, Some(ready_tx)).await });

        let addr = match rt.block_on(ready_rx) {
            Ok(addr) => addr,
            Err(_) => {
                // Server task ended before binding; surface its error.
                return match rt.block_on(server) {
                    Ok(Err(e)) => Err(e),
                    Ok(Ok(())) => Err(anyhow::anyhow!("http server exited before binding")),
                    Err(join) => Err(anyhow::anyhow!("http server task failed: {join}")),
                };
            }
        };

        Ok(Self {
            _rt: rt,
            cmd_rx,
            addr,
        })
    }

    pub fn local_addr(&self) -> SocketAddr {
        self.addr
    }

    pub fn try_recv(&mut self) -> Option<InboundCommand> {
        self.cmd_rx.try_recv().ok()
    }
}
