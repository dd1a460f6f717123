//! Headless play-through of a scripted game.

use crate::config::GameConfig;
use crate::games::tictactoe::{Board, Move, Position, is_full};
use crate::orchestrator::{GameMode, Snapshot};
use crate::runtime::GameRuntime;
use tracing::{info, instrument};

/// A scripted game: a mode, the human clicks, and jumps made afterwards.
#[derive(Debug, Clone, PartialEq, Eq, derive_new::new)]
pub struct Script {
    /// Mode to select before the first click.
    pub mode: GameMode,
    /// Squares clicked, in order.
    pub moves: Vec<Position>,
    /// History entries jumped to after the clicks.
    pub jumps: Vec<usize>,
}

/// Plays `script` and returns the final view.
///
/// In player-vs-AI mode every pending opponent move is allowed to finish
/// before the next click, so the opponent's replies land between the
/// scripted moves.
#[instrument(skip(config))]
pub async fn run(config: &GameConfig, script: &Script) -> Snapshot {
    let mut runtime = GameRuntime::new(config);
    runtime.select_mode(script.mode);

    for position in &script.moves {
        runtime.click_cell(position.to_index());
        runtime.settle().await;
    }
    for &index in &script.jumps {
        runtime.jump_to(index);
        runtime.settle().await;
    }

    let snapshot = runtime.snapshot();
    info!(status = %snapshot.status(), moves = snapshot.history().len() - 1, "Replay finished");
    snapshot
}

/// Renders a snapshot as plain text.
pub fn render_text(snapshot: &Snapshot) -> String {
    let mut out = String::new();
    out.push_str(&format!("Mode: {}\n", snapshot.mode()));
    out.push_str(&snapshot.board().display());
    out.push_str("\n\n");
    out.push_str(snapshot.status());
    if is_full(snapshot.board()) && snapshot.status().starts_with("Next") {
        out.push_str(" (board full)");
    }
    out.push_str("\n\nHistory:\n");

    for (index, label) in snapshot.move_labels().iter().enumerate() {
        let marker = if index == *snapshot.current_index() { '>' } else { ' ' };
        let played = describe_step(snapshot.history(), index);
        out.push_str(&format!("{marker} {index:>2}. {label}{played}\n"));
    }
    out
}

fn describe_step(history: &[Board], index: usize) -> String {
    index
        .checked_sub(1)
        .and_then(|prev| Move::between(&history[prev], &history[index]).ok())
        .map(|mv| format!(" ({mv})"))
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn test_ai_replay_interleaves_opponent_moves() {
        let script = Script::new(
            GameMode::PlayerVsAi,
            vec![Position::Center, Position::BottomRight],
            vec![],
        );
        let snapshot = run(&GameConfig::default(), &script).await;

        // X center, O top-left, X bottom-right, O top-center.
        assert_eq!(snapshot.history().len(), 5);
        assert_eq!(snapshot.status(), "Next player: X");
        assert!(!*snapshot.opponent_pending());
    }

    #[tokio::test(start_paused = true)]
    async fn test_render_text_marks_current_entry() {
        let script = Script::new(
            GameMode::PlayerVsPlayer,
            vec![Position::TopLeft, Position::Center],
            vec![1],
        );
        let text = render_text(&run(&GameConfig::default(), &script).await);

        assert!(text.contains("Next player: O"));
        assert!(text.contains(">  1. Go to move #1 (X -> Top-left)"));
        assert!(text.contains("   2. Go to move #2 (O -> Center)"));
    }
}
