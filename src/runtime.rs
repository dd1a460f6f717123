//! Tokio driver for the orchestrator.
//!
//! Turns [`Effect`]s into real timers. A scheduled opponent move is a spawned
//! task that sleeps and then posts [`Event::OpponentTimerFired`] on a channel
//! the runtime owns. At most one timer task is alive; scheduling or
//! cancelling aborts the previous one.

use crate::config::GameConfig;
use crate::games::tictactoe::{FirstEmpty, MoveSelector};
use crate::orchestrator::{Effect, Event, GameMode, Orchestrator, Snapshot, Ticket};
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::{debug, instrument, trace};

struct ActiveTimer {
    ticket: Ticket,
    handle: JoinHandle<()>,
}

/// Owns an [`Orchestrator`] and the timer that wakes its opponent.
///
/// Must be used from inside a tokio runtime.
pub struct GameRuntime<S = FirstEmpty> {
    orchestrator: Orchestrator<S>,
    timer: Option<ActiveTimer>,
    timer_tx: mpsc::UnboundedSender<Event>,
    timer_rx: mpsc::UnboundedReceiver<Event>,
}

impl GameRuntime<FirstEmpty> {
    /// Creates a runtime with the first-empty-square opponent.
    pub fn new(config: &GameConfig) -> Self {
        Self::with_orchestrator(Orchestrator::new(config))
    }
}

impl<S: MoveSelector> GameRuntime<S> {
    /// Wraps an existing orchestrator.
    pub fn with_orchestrator(orchestrator: Orchestrator<S>) -> Self {
        let (timer_tx, timer_rx) = mpsc::unbounded_channel();
        Self {
            orchestrator,
            timer: None,
            timer_tx,
            timer_rx,
        }
    }

    /// The orchestrator being driven.
    pub fn orchestrator(&self) -> &Orchestrator<S> {
        &self.orchestrator
    }

    /// Current view for the presentation layer.
    pub fn snapshot(&self) -> Snapshot {
        self.orchestrator.snapshot()
    }

    /// Chooses the game mode.
    pub fn select_mode(&mut self, mode: GameMode) {
        self.dispatch(Event::SelectMode(mode));
    }

    /// Clicks a square.
    pub fn click_cell(&mut self, index: usize) {
        self.dispatch(Event::ClickCell(index));
    }

    /// Jumps to a history entry.
    pub fn jump_to(&mut self, index: usize) {
        self.dispatch(Event::JumpTo(index));
    }

    /// Applies one event and carries out the effects it returns.
    #[instrument(skip(self))]
    pub fn dispatch(&mut self, event: Event) {
        if let Event::OpponentTimerFired(ticket) = event
            && self.timer.as_ref().is_some_and(|t| t.ticket == ticket)
        {
            self.timer = None;
        }

        let effects = self.orchestrator.handle(event);
        for effect in effects {
            self.apply(effect);
        }
    }

    fn apply(&mut self, effect: Effect) {
        match effect {
            Effect::ScheduleOpponent { ticket, delay } => {
                self.abort_timer();
                let tx = self.timer_tx.clone();
                let handle = tokio::spawn(async move {
                    tokio::time::sleep(delay).await;
                    if tx.send(Event::OpponentTimerFired(ticket)).is_err() {
                        trace!(%ticket, "Runtime dropped before the opponent timer fired");
                    }
                });
                debug!(%ticket, ?delay, "Opponent timer started");
                self.timer = Some(ActiveTimer { ticket, handle });
            }
            Effect::CancelOpponent { ticket } => {
                if self.timer.as_ref().is_some_and(|t| t.ticket == ticket) {
                    self.abort_timer();
                }
            }
        }
    }

    fn abort_timer(&mut self) {
        if let Some(timer) = self.timer.take() {
            debug!(ticket = %timer.ticket, "Opponent timer aborted");
            timer.handle.abort();
        }
    }

    /// Waits for the next timer event without applying it.
    pub async fn next_timer_event(&mut self) -> Option<Event> {
        self.timer_rx.recv().await
    }

    /// Returns a timer event that has already arrived, if any.
    pub fn try_next_timer_event(&mut self) -> Option<Event> {
        self.timer_rx.try_recv().ok()
    }

    /// Lets pending opponent moves play out.
    ///
    /// Returns once no opponent move is scheduled.
    #[instrument(skip(self))]
    pub async fn settle(&mut self) {
        while self.orchestrator.is_opponent_pending() {
            match self.timer_rx.recv().await {
                Some(event) => self.dispatch(event),
                None => break,
            }
        }
    }
}

impl<S> Drop for GameRuntime<S> {
    fn drop(&mut self) {
        if let Some(timer) = self.timer.take() {
            timer.handle.abort();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[tokio::test(start_paused = true)]
    async fn test_cancelled_timer_never_fires() {
        let mut runtime = GameRuntime::new(&GameConfig::default());
        runtime.select_mode(GameMode::PlayerVsAi);
        runtime.click_cell(0);
        assert!(runtime.orchestrator().is_opponent_pending());

        runtime.jump_to(0);
        assert!(!runtime.orchestrator().is_opponent_pending());

        tokio::time::sleep(Duration::from_secs(2)).await;
        assert_eq!(runtime.try_next_timer_event(), None);
        assert_eq!(runtime.orchestrator().history().len(), 2);
    }
}
