//! Interactive terminal session
//!
//! Drives a [`Game`] from line-based input: prints the board, reads human
//! moves and promotion choices, lets AI seats reply and reports check,
//! checkmate and stalemate from the game's notification queue.
//!
//! The session is generic over its reader and writer so it can be scripted.

use crate::input::{parse_command, parse_promotion, Command, InputError, HELP};
use anyhow::{Context, Result};
use chess_engine::{
    Game, GameEvent, GameState, Move, MoveOutcome, MoveRecord, PendingPromotion, Player,
};
use std::io::{BufRead, Write};
use tracing::debug;

/// Why a session stopped
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEnd {
    Finished(GameState),
    Quit,
    /// Input reached end of file
    InputClosed,
    /// The configured ply limit was hit
    PlyLimit,
}

pub struct Session<R, W> {
    game: Game,
    input: R,
    output: W,
    max_plies: Option<u32>,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(game: Game, input: R, output: W) -> Self {
        Self {
            game,
            input,
            output,
            max_plies: None,
        }
    }

    pub fn with_max_plies(mut self, max_plies: Option<u32>) -> Self {
        self.max_plies = max_plies;
        self
    }

    pub fn game(&self) -> &Game {
        &self.game
    }

    pub fn into_parts(self) -> (Game, W) {
        (self.game, self.output)
    }

    /// Play until the game ends, the user quits or input runs out
    pub fn run(&mut self) -> Result<SessionEnd> {
        writeln!(self.output, "{}\n", self.game.board())?;

        loop {
            self.report_events()?;

            let state = self.game.state();
            if state.is_over() {
                return Ok(SessionEnd::Finished(state));
            }

            if let Some(limit) = self.max_plies {
                if self.game.ply() >= limit {
                    writeln!(self.output, "Stopped after {} plies.", limit)?;
                    return Ok(SessionEnd::PlyLimit);
                }
            }

            if let Some(pending) = self.game.pending_promotion() {
                if !self.prompt_promotion(pending)? {
                    return Ok(SessionEnd::InputClosed);
                }
                continue;
            }

            if self.game.current_player().is_ai() {
                self.play_ai()?;
                continue;
            }

            if let Some(end) = self.prompt_move()? {
                return Ok(end);
            }
        }
    }

    /// Print the notifications that matter at a terminal
    fn report_events(&mut self) -> Result<()> {
        for event in self.game.drain_events() {
            debug!(?event, "notification");
            match event {
                GameEvent::TurnChanged { color } => {
                    if self.game.state().is_check_for(color) {
                        writeln!(self.output, "Check! {} king is under attack.", color.name())?;
                    }
                }
                GameEvent::Won { winner } => {
                    writeln!(self.output, "Checkmate. {} wins.", capitalize(winner.name()))?;
                }
                GameEvent::Stalemate => {
                    writeln!(self.output, "Stalemate. The game is drawn.")?;
                }
                _ => {}
            }
        }
        Ok(())
    }

    fn play_ai(&mut self) -> Result<()> {
        let color = self.game.side_to_move();
        writeln!(self.output, "{} is thinking...", capitalize(color.name()))?;
        self.output.flush()?;

        let outcome = self
            .game
            .play_ai_turn()
            .with_context(|| format!("AI playing {} failed to move", color.name()))?;
        if outcome.is_some() {
            self.announce_last_move()?;
        }
        Ok(())
    }

    /// Read and act on one line; `Some` ends the session
    fn prompt_move(&mut self) -> Result<Option<SessionEnd>> {
        let color = self.game.side_to_move();
        write!(self.output, "{} to move> ", color.name())?;
        self.output.flush()?;

        let Some(line) = self.read_line()? else {
            return Ok(Some(SessionEnd::InputClosed));
        };

        match parse_command(&line) {
            Ok(Command::Quit) => return Ok(Some(SessionEnd::Quit)),
            Ok(Command::Help) => writeln!(self.output, "{}", HELP)?,
            Ok(Command::Board) => writeln!(self.output, "{}\n", self.game.board())?,
            Ok(Command::Moves(None)) => {
                let moves = self.game.legal_moves();
                writeln!(self.output, "{}", join(&moves))?;
            }
            Ok(Command::Moves(Some(from))) => {
                let targets = self.game.legal_destinations(from);
                if targets.is_empty() {
                    writeln!(self.output, "No legal moves from {}", from)?;
                } else {
                    writeln!(self.output, "{}: {}", from, join(&targets))?;
                }
            }
            Ok(Command::Move(mv)) => self.submit(mv)?,
            Ok(Command::Coordinates { from, to }) => self.submit_coordinates(from, to)?,
            Err(InputError::Empty) => {}
            Err(err) => writeln!(self.output, "{}", err)?,
        }
        Ok(None)
    }

    fn submit(&mut self, mv: Move) -> Result<()> {
        let Player::Human(human) = self.game.current_player().clone() else {
            return Ok(());
        };

        match human.play(&mut self.game, mv) {
            Ok(outcome) => self.after_submit(outcome),
            Err(err) => Ok(writeln!(self.output, "Illegal move: {}", err)?),
        }
    }

    fn submit_coordinates(&mut self, from: (i32, i32), to: (i32, i32)) -> Result<()> {
        let Player::Human(human) = self.game.current_player().clone() else {
            return Ok(());
        };

        match human.move_coordinates(&mut self.game, from, to) {
            Ok(outcome) => self.after_submit(outcome),
            Err(err) => Ok(writeln!(self.output, "Illegal move: {}", err)?),
        }
    }

    fn after_submit(&mut self, outcome: MoveOutcome) -> Result<()> {
        match outcome {
            MoveOutcome::Completed(_) => self.announce_last_move(),
            MoveOutcome::PromotionPending(_) => Ok(()),
        }
    }

    /// Ask for a promotion piece; `false` when input ran out
    fn prompt_promotion(&mut self, pending: PendingPromotion) -> Result<bool> {
        write!(
            self.output,
            "Choose a piece for the pawn on {} (q, r, b, n)> ",
            pending.location
        )?;
        self.output.flush()?;

        let Some(line) = self.read_line()? else {
            return Ok(false);
        };

        let piece_type = match parse_promotion(&line) {
            Ok(piece_type) => piece_type,
            Err(err) => {
                writeln!(self.output, "{}", err)?;
                return Ok(true);
            }
        };

        let Player::Human(human) = self.game.player(pending.color).clone() else {
            return Ok(true);
        };
        match human.choose_promotion(&mut self.game, piece_type) {
            Ok(_) => self.announce_last_move()?,
            Err(err) => writeln!(self.output, "{}", err)?,
        }
        Ok(true)
    }

    fn announce_last_move(&mut self) -> Result<()> {
        if let Some(record) = self.game.history().last().copied() {
            writeln!(self.output, "{}", describe(&record))?;
        }
        writeln!(self.output, "{}\n", self.game.board())?;
        Ok(())
    }

    fn read_line(&mut self) -> Result<Option<String>> {
        let mut line = String::new();
        let read = self
            .input
            .read_line(&mut line)
            .context("Failed to read from input")?;
        Ok((read > 0).then_some(line))
    }
}

/// One-line summary of a completed move, e.g. `white: N g1-f3` or `black: P d4xe3 e.p.`
pub fn describe(record: &MoveRecord) -> String {
    let mut text = format!("{}: ", record.color.name());

    if record.is_castling {
        let side = if record.to.x() > record.from.x() { "O-O" } else { "O-O-O" };
        text.push_str(side);
    } else {
        let separator = if record.captured.is_some() { 'x' } else { '-' };
        text.push_str(&format!(
            "{} {}{}{}",
            record.piece_type.symbol(),
            record.from,
            separator,
            record.to
        ));
        if let Some(piece_type) = record.promotion {
            text.push('=');
            text.push(piece_type.symbol());
        }
        if record.is_en_passant {
            text.push_str(" e.p.");
        }
    }

    if record.is_checkmate {
        text.push('#');
    } else if record.is_check {
        text.push('+');
    }
    text
}

fn join<T: std::fmt::Display>(items: &[T]) -> String {
    items
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}

fn capitalize(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
