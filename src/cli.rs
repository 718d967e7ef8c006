//! Command line arguments

use crate::config::GameMode;
use chess_engine::{AiDifficulty, Color};
use clap::Parser;
use std::path::PathBuf;

/// Play chess in the terminal against the computer or another person
#[derive(Parser, Debug, Default)]
#[command(name = "chessplay", version, about)]
pub struct Args {
    /// JSON settings file; flags given here take precedence
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Who plays whom
    #[arg(short, long, value_parser = parse_mode)]
    pub mode: Option<GameMode>,

    /// Color played by the computer in human-vs-ai mode
    #[arg(long, value_parser = parse_color)]
    pub ai_color: Option<Color>,

    /// Search strength: easy, medium or hard
    #[arg(short, long, value_parser = parse_difficulty)]
    pub difficulty: Option<AiDifficulty>,

    /// Explicit search depth in plies, overrides the difficulty
    #[arg(long, value_parser = clap::value_parser!(u8).range(1..=8))]
    pub depth: Option<u8>,

    /// Stop an ai-vs-ai game after this many plies
    #[arg(long)]
    pub max_plies: Option<u32>,

    /// Log filter such as `info` or `chess_engine=debug`
    #[arg(long, value_name = "FILTER")]
    pub log: Option<String>,
}

fn parse_mode(text: &str) -> Result<GameMode, String> {
    match text.to_ascii_lowercase().as_str() {
        "human-vs-ai" | "hva" => Ok(GameMode::HumanVsAi),
        "ai-vs-ai" | "ava" => Ok(GameMode::AiVsAi),
        "human-vs-human" | "hvh" => Ok(GameMode::HumanVsHuman),
        other => Err(format!(
            "unknown mode '{other}' (expected human-vs-ai, ai-vs-ai or human-vs-human)"
        )),
    }
}

fn parse_color(text: &str) -> Result<Color, String> {
    match text.to_ascii_lowercase().as_str() {
        "white" | "w" => Ok(Color::White),
        "black" | "b" => Ok(Color::Black),
        other => Err(format!("unknown color '{other}' (expected white or black)")),
    }
}

fn parse_difficulty(text: &str) -> Result<AiDifficulty, String> {
    match text.to_ascii_lowercase().as_str() {
        "easy" => Ok(AiDifficulty::Easy),
        "medium" => Ok(AiDifficulty::Medium),
        "hard" => Ok(AiDifficulty::Hard),
        other => Err(format!("unknown difficulty '{other}' (expected easy, medium or hard)")),
    }
}
