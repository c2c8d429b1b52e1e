//! The rig's per-tick work, independent of the terminal.
//!
//! [`Rig`] owns the session, the contact panel and the second pacer. The
//! binary feeds it key actions, scoreboard commands and elapsed time; tests
//! drive it the same way without a TTY.

use tracing::{debug, info, warn};

use crate::adapter::{Handled, InboundCommand};
use crate::core::{GameSession, GestureActuator, RoundReport, SecondPacer, ServoBank};
use crate::input::{ContactPanel, PanelAction};
use crate::term::{ServerStatusView, StatusView};
use crate::types::{ServoAngles, PWM_FREQUENCY_HZ};

/// Servo bank that logs every command it executes.
#[derive(Debug, Default)]
pub struct LoggedServos {
    bank: ServoBank,
}

impl LoggedServos {
    pub fn bank(&self) -> &ServoBank {
        &self.bank
    }
}

impl GestureActuator for LoggedServos {
    fn actuate(&mut self, angles: ServoAngles) {
        self.bank.actuate(angles);
        info!(
            angles = ?angles.angles(),
            duties = ?ServoBank::duties(angles),
            pwm_hz = PWM_FREQUENCY_HZ,
            "servos commanded"
        );
    }
}

pub struct Rig<A> {
    session: GameSession,
    panel: ContactPanel,
    pacer: SecondPacer,
    actuator: A,
}

impl<A: GestureActuator> Rig<A> {
    pub fn new(session: GameSession, actuator: A) -> Self {
        Self {
            session,
            panel: ContactPanel::new(),
            pacer: SecondPacer::new(),
            actuator,
        }
    }

    pub fn session(&self) -> &GameSession {
        &self.session
    }

    pub fn panel(&self) -> &ContactPanel {
        &self.panel
    }

    pub fn actuator(&self) -> &A {
        &self.actuator
    }

    /// Start a new game; the partial second carried so far is dropped.
    pub fn new_game(&mut self) {
        self.session.reset();
        self.pacer.clear();
    }

    pub fn on_action(&mut self, action: PanelAction) {
        match action {
            PanelAction::Toggle(finger) => self.panel.toggle(finger),
            PanelAction::ClearContacts => self.panel.clear(),
            PanelAction::NewGame => {
                self.new_game();
                info!("new game started from console");
            }
        }
    }

    /// Answer one scoreboard command.
    pub fn on_command(&mut self, cmd: InboundCommand) -> Handled {
        let handled = cmd.apply(&mut self.session);
        if handled == Handled::Reset {
            self.pacer.clear();
        }
        handled
    }

    /// Feed wall time into the session.
    ///
    /// Logs each countdown second at debug level and every resolved round.
    pub fn advance(&mut self, elapsed_ms: u32) -> Option<RoundReport> {
        let seconds = self.pacer.advance(elapsed_ms);
        if seconds == 0 {
            return None;
        }

        let report = self
            .session
            .tick(seconds, &mut self.panel, &mut self.actuator);
        match &report {
            Some(report) => log_round(report),
            None if !self.session.game_over() => {
                debug!(countdown = self.session.countdown(), "countdown");
            }
            None => {}
        }
        report
    }

    pub fn render(&self, view: &StatusView, server: Option<&ServerStatusView>) -> Vec<String> {
        view.render(
            &self.session.snapshot(),
            self.session.last_outcome(),
            self.panel.contacts(),
            server,
        )
    }
}

fn log_round(report: &RoundReport) {
    match report.outcome {
        Some(outcome) => info!(
            round = report.round,
            human = report.human.as_str(),
            machine = report.machine.as_str(),
            outcome = outcome.as_str(),
            human_score = report.human_score,
            machine_score = report.machine_score,
            "round resolved"
        ),
        None => warn!(
            round = report.round,
            machine = report.machine.as_str(),
            "human gesture unreadable, round voided"
        ),
    }
    if report.game_over {
        info!(
            human_score = report.human_score,
            machine_score = report.machine_score,
            "game over"
        );
    }
}
