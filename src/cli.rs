//! Command-line interface for tictactoe_timeline.

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use tictactoe_timeline::{GameMode, Position};

/// Tic-tac-toe with a browsable move timeline
#[derive(Parser, Debug)]
#[command(name = "tictactoe_timeline")]
#[command(about = "Tic-tac-toe with time travel and a simple computer opponent", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML config file
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Subcommand to run (defaults to the terminal UI)
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play in the terminal
    Tui,

    /// Play a scripted game without a UI and print the result
    Replay {
        /// Who plays O
        #[arg(long, value_enum, default_value_t = ModeArg::Pvp)]
        mode: ModeArg,

        /// Squares clicked, comma separated: indices 0-8 or labels like "center"
        #[arg(long, value_delimiter = ',', value_parser = parse_position)]
        moves: Vec<Position>,

        /// History entries to jump to after the moves
        #[arg(long, value_delimiter = ',')]
        jump: Vec<usize>,

        /// Skip the opponent delay
        #[arg(long)]
        instant: bool,

        /// Print the final state as JSON
        #[arg(long)]
        json: bool,
    },
}

/// Game mode as accepted on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ModeArg {
    /// Player vs player
    Pvp,
    /// Player vs computer
    Ai,
}

impl From<ModeArg> for GameMode {
    fn from(mode: ModeArg) -> Self {
        match mode {
            ModeArg::Pvp => GameMode::PlayerVsPlayer,
            ModeArg::Ai => GameMode::PlayerVsAi,
        }
    }
}

fn parse_position(s: &str) -> Result<Position, String> {
    Position::from_label_or_number(s).ok_or_else(|| format!("Invalid position: {}", s))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_replay_arguments() {
        let cli = Cli::try_parse_from([
            "tictactoe_timeline",
            "replay",
            "--mode",
            "ai",
            "--moves",
            "0,center,8",
            "--jump",
            "1",
            "--json",
        ])
        .expect("valid arguments");

        match cli.command {
            Some(Command::Replay {
                mode,
                moves,
                jump,
                json,
                instant,
            }) => {
                assert_eq!(GameMode::from(mode), GameMode::PlayerVsAi);
                assert_eq!(moves, vec![Position::TopLeft, Position::Center, Position::BottomRight]);
                assert_eq!(jump, vec![1]);
                assert!(json);
                assert!(!instant);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_bad_position_is_rejected() {
        assert!(Cli::try_parse_from(["tictactoe_timeline", "replay", "--moves", "10"]).is_err());
    }

    #[test]
    fn test_no_subcommand_means_tui() {
        let cli = Cli::try_parse_from(["tictactoe_timeline", "--config", "game.toml"])
            .expect("valid arguments");
        assert!(cli.command.is_none());
        assert_eq!(cli.config, Some(PathBuf::from("game.toml")));
    }
}
