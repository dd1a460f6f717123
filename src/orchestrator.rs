//! Turn orchestration.
//!
//! The orchestrator owns the whole session state and is driven by discrete
//! [`Event`]s. It never sleeps: when the computer opponent is due it returns
//! an [`Effect`] asking the caller to fire [`Event::OpponentTimerFired`]
//! after a delay, and when that request goes stale it returns another effect
//! cancelling it. Each request carries a [`Ticket`], so a timer that fires
//! after it was cancelled is recognised and ignored.
//!
//! Invalid input (occupied square, won board, click while the opponent is
//! thinking, out-of-range jump) is ignored without telling the caller.

use crate::config::GameConfig;
use crate::games::tictactoe::{
    Board, FirstEmpty, GameStatus, Mark, MoveSelector, Position, Timeline, current_turn,
    evaluate_winner,
};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{debug, info, instrument, warn};

/// Who plays O.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, derive_more::Display,
)]
pub enum GameMode {
    /// No mode chosen yet; the board does not accept moves.
    #[default]
    #[display("Unselected")]
    Unselected,
    /// Two humans share the board.
    #[display("Player vs Player")]
    PlayerVsPlayer,
    /// The human plays X, the computer plays O.
    #[display("Player vs AI")]
    PlayerVsAi,
}

/// Where the session is in its turn cycle. Always derived, never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
pub enum Phase {
    /// Waiting for a mode to be chosen.
    #[display("Awaiting mode")]
    AwaitingMode,
    /// A human may place a mark.
    #[display("Human turn")]
    HumanTurn,
    /// The computer opponent's move is scheduled.
    #[display("Opponent pending")]
    OpponentPending,
    /// The current board has a winner. History navigation still works.
    #[display("Game over")]
    GameOver,
}

/// Identifies one scheduled opponent move.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    derive_more::Display,
)]
#[display("#{_0}")]
pub struct Ticket(u64);

/// Inputs from the presentation layer and the timer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    /// Choose who plays O.
    SelectMode(GameMode),
    /// Click the square at this index (0-8).
    ClickCell(usize),
    /// View the history entry at this index.
    JumpTo(usize),
    /// The delay for this ticket has elapsed.
    OpponentTimerFired(Ticket),
}

/// Requests the orchestrator makes of whoever drives it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    /// Send [`Event::OpponentTimerFired`] with `ticket` after `delay`.
    ScheduleOpponent {
        /// Ticket to fire.
        ticket: Ticket,
        /// How long to wait.
        delay: Duration,
    },
    /// The timer for `ticket` must not fire; drop it.
    CancelOpponent {
        /// Ticket to drop.
        ticket: Ticket,
    },
}

/// A scheduled opponent move and the board it was scheduled for.
#[derive(Debug, Clone, PartialEq, Eq)]
struct PendingMove {
    ticket: Ticket,
    move_index: usize,
    board: Board,
}

/// All mutable state of one game session.
#[derive(Debug, Clone, Default)]
struct Session {
    mode: GameMode,
    timeline: Timeline,
    pending: Option<PendingMove>,
    // Index where the opponent last found no empty square, so it is not
    // rescheduled for the same full board.
    passed_at: Option<usize>,
}

/// Everything the presentation layer needs to draw one frame.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize)]
pub struct Snapshot {
    /// Selected mode.
    mode: GameMode,
    /// Derived phase.
    phase: Phase,
    /// Board at the current index.
    board: Board,
    /// `"Winner: X"` or `"Next player: O"`.
    status: String,
    /// Every board in the timeline.
    history: Vec<Board>,
    /// One label per history entry.
    move_labels: Vec<String>,
    /// Index of the board being viewed.
    current_index: usize,
    /// True while the opponent is thinking; input should be disabled.
    opponent_pending: bool,
    /// Passed through from configuration untouched.
    image_url: String,
}

/// Drives one tic-tac-toe session.
#[derive(Debug)]
pub struct Orchestrator<S = FirstEmpty> {
    session: Session,
    selector: S,
    delay: Duration,
    image_url: String,
    next_ticket: u64,
}

impl Orchestrator<FirstEmpty> {
    /// Creates an orchestrator with the first-empty-square opponent.
    pub fn new(config: &GameConfig) -> Self {
        Self::with_selector(config, FirstEmpty)
    }
}

impl<S: MoveSelector> Orchestrator<S> {
    /// Creates an orchestrator with a custom opponent.
    #[instrument(skip(config, selector), fields(selector = selector.name()))]
    pub fn with_selector(config: &GameConfig, selector: S) -> Self {
        Self {
            session: Session::default(),
            selector,
            delay: config.opponent_delay(),
            image_url: config.info_image_url().clone(),
            next_ticket: 0,
        }
    }

    /// Applies one event and returns the timer effects it caused.
    pub fn handle(&mut self, event: Event) -> Vec<Effect> {
        match event {
            Event::SelectMode(mode) => self.select_mode(mode),
            Event::ClickCell(index) => self.click_cell(index),
            Event::JumpTo(index) => self.jump_to(index),
            Event::OpponentTimerFired(ticket) => self.opponent_timer_fired(ticket),
        }
    }

    /// Chooses the game mode. Only the first real selection counts.
    #[instrument(skip(self))]
    pub fn select_mode(&mut self, mode: GameMode) -> Vec<Effect> {
        if mode == GameMode::Unselected {
            debug!("Ignoring selection of no mode");
            return Vec::new();
        }
        if self.session.mode != GameMode::Unselected {
            debug!(current = %self.session.mode, "Mode already selected; ignoring");
            return Vec::new();
        }

        info!(%mode, "Game mode selected");
        self.session.mode = mode;
        self.reconcile()
    }

    /// Places the mark on turn at `index`, if the move is allowed.
    #[instrument(skip(self), fields(current = self.session.timeline.current_index()))]
    pub fn click_cell(&mut self, index: usize) -> Vec<Effect> {
        let Some(position) = Position::from_index(index) else {
            debug!("Ignoring click outside the board");
            return Vec::new();
        };
        if self.session.mode == GameMode::Unselected {
            debug!("Ignoring click before a mode is selected");
            return Vec::new();
        }
        if self.session.pending.is_some() {
            debug!("Ignoring click while the opponent is thinking");
            return Vec::new();
        }

        let board = self.session.timeline.current_board();
        if let Some(winner) = evaluate_winner(board) {
            debug!(%winner, "Ignoring click on a won board");
            return Vec::new();
        }
        if !board.is_empty(position) {
            debug!(%position, "Ignoring click on an occupied square");
            return Vec::new();
        }

        let mark = self.turn();
        let next = board.with_mark(position, mark);
        if let Err(e) = self.session.timeline.record(next) {
            warn!(error = %e, "Human move was not recorded");
            return Vec::new();
        }
        info!(%mark, %position, "Human move recorded");
        self.reconcile()
    }

    /// Views history entry `index`.
    ///
    /// Any scheduled opponent move is cancelled first. The opponent may then
    /// be scheduled again for the board being jumped to.
    #[instrument(skip(self), fields(current = self.session.timeline.current_index()))]
    pub fn jump_to(&mut self, index: usize) -> Vec<Effect> {
        if index >= self.session.timeline.len() {
            debug!("Ignoring jump past the end of the timeline");
            return Vec::new();
        }

        let mut effects = self.cancel_pending();
        if index != self.session.timeline.current_index() {
            self.session.passed_at = None;
        }
        self.session.timeline.jump(index);
        debug!(index, "Jumped");
        effects.extend(self.reconcile());
        effects
    }

    /// Runs the opponent for `ticket`, unless the ticket is stale.
    #[instrument(skip(self))]
    pub fn opponent_timer_fired(&mut self, ticket: Ticket) -> Vec<Effect> {
        let pending = match self.session.pending.take() {
            Some(pending) if pending.ticket == ticket => pending,
            other => {
                debug!("Ignoring stale opponent timer");
                self.session.pending = other;
                return Vec::new();
            }
        };

        let board = self.session.timeline.current_board().clone();
        if board != pending.board {
            warn!("Board changed under a live opponent timer; rescheduling");
            return self.reconcile();
        }

        match self.selector.select_move(&board) {
            Some(position) => {
                let mark = self.turn();
                match self.session.timeline.record(board.with_mark(position, mark)) {
                    Ok(_) => info!(
                        %mark,
                        %position,
                        selector = self.selector.name(),
                        "Opponent move recorded"
                    ),
                    Err(e) => warn!(error = %e, %position, "Opponent chose an illegal move"),
                }
            }
            None => {
                debug!("Opponent found no empty square");
                self.session.passed_at = Some(self.session.timeline.current_index());
            }
        }
        self.reconcile()
    }

    /// Whether the opponent should move on the current board.
    fn opponent_due(&self) -> bool {
        let timeline = &self.session.timeline;
        self.session.mode == GameMode::PlayerVsAi
            && timeline.turn() == Mark::O
            && evaluate_winner(timeline.current_board()).is_none()
            && self.session.passed_at != Some(timeline.current_index())
    }

    /// Brings the scheduled opponent move in line with the current state.
    ///
    /// Called after every transition. A pending move that still matches the
    /// current board is kept; anything else is cancelled before a new one is
    /// scheduled, so at most one ticket is ever live.
    fn reconcile(&mut self) -> Vec<Effect> {
        let index = self.session.timeline.current_index();
        let due = self.opponent_due();

        let up_to_date = self.session.pending.as_ref().is_some_and(|p| {
            p.move_index == index && &p.board == self.session.timeline.current_board()
        });
        if due && up_to_date {
            return Vec::new();
        }

        let mut effects = self.cancel_pending();
        if due {
            let ticket = self.issue_ticket();
            self.session.pending = Some(PendingMove {
                ticket,
                move_index: index,
                board: self.session.timeline.current_board().clone(),
            });
            debug!(%ticket, index, "Opponent move scheduled");
            effects.push(Effect::ScheduleOpponent {
                ticket,
                delay: self.delay,
            });
        }
        effects
    }

    fn cancel_pending(&mut self) -> Vec<Effect> {
        match self.session.pending.take() {
            Some(pending) => {
                debug!(ticket = %pending.ticket, "Opponent move cancelled");
                vec![Effect::CancelOpponent {
                    ticket: pending.ticket,
                }]
            }
            None => Vec::new(),
        }
    }

    fn issue_ticket(&mut self) -> Ticket {
        self.next_ticket += 1;
        Ticket(self.next_ticket)
    }

    /// Selected mode.
    pub fn mode(&self) -> GameMode {
        self.session.mode
    }

    /// Derived phase.
    pub fn phase(&self) -> Phase {
        if self.session.mode == GameMode::Unselected {
            Phase::AwaitingMode
        } else if self.session.pending.is_some() {
            Phase::OpponentPending
        } else if self.status().winner().is_some() {
            Phase::GameOver
        } else {
            Phase::HumanTurn
        }
    }

    /// Mark on turn, derived from the current index.
    pub fn turn(&self) -> Mark {
        current_turn(self.session.timeline.current_index())
    }

    /// Board at the current index.
    pub fn current_board(&self) -> &Board {
        self.session.timeline.current_board()
    }

    /// Index of the board being viewed.
    pub fn current_index(&self) -> usize {
        self.session.timeline.current_index()
    }

    /// Index of the newest board, which may be ahead of the one being viewed.
    pub fn latest_index(&self) -> usize {
        self.session.timeline.latest_index()
    }

    /// Every board in the timeline.
    pub fn history(&self) -> &[Board] {
        self.session.timeline.entries()
    }

    /// Status of the current board.
    pub fn status(&self) -> GameStatus {
        GameStatus::of(self.current_board(), self.current_index())
    }

    /// Whether an opponent move is scheduled.
    pub fn is_opponent_pending(&self) -> bool {
        self.session.pending.is_some()
    }

    /// Ticket of the scheduled opponent move, if any.
    pub fn pending_ticket(&self) -> Option<Ticket> {
        self.session.pending.as_ref().map(|p| p.ticket)
    }

    /// Image URL for the info panel.
    pub fn image_url(&self) -> &str {
        &self.image_url
    }

    /// Captures everything the presentation layer draws.
    pub fn snapshot(&self) -> Snapshot {
        let timeline = &self.session.timeline;
        Snapshot {
            mode: self.session.mode,
            phase: self.phase(),
            board: timeline.current_board().clone(),
            status: self.status().to_string(),
            history: timeline.entries().to_vec(),
            move_labels: timeline.move_labels(),
            current_index: timeline.current_index(),
            opponent_pending: self.is_opponent_pending(),
            image_url: self.image_url.clone(),
        }
    }
}
