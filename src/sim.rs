//! Headless self-play host.
//!
//! Drives one field with an AI: decide, play the move, resolve, repeat until the field
//! tops out or the turn limit is reached.

use anyhow::{Context, Result};
use serde::Serialize;

use crate::core::{Field, FieldSnapshot};
use crate::engine::ai::{create_ai, Ai, AiKind, DecideError, RuleBasedAi};
use crate::engine::place::apply_move;
use crate::types::{DEFAULT_HEIGHT, DEFAULT_WIDTH, MAX_HEIGHT, MAX_WIDTH, MIN_HEIGHT, MIN_WIDTH};

/// Runner configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SimConfig {
    pub seed: u32,
    pub ai: AiKind,
    pub max_turns: u32,
    pub height: u8,
    pub width: u8,
    /// Queued pairs the rule-based AI plays ahead
    pub lookahead: usize,
    /// Print the final report as JSON
    pub json: bool,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            seed: 1,
            ai: AiKind::RuleBased,
            max_turns: 200,
            height: DEFAULT_HEIGHT,
            width: DEFAULT_WIDTH,
            lookahead: 0,
            json: false,
        }
    }
}

impl SimConfig {
    /// Create from environment variables
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`SimConfig::from_env`] with a custom variable source
    pub fn from_lookup(get: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        let seed = get("PUYO_SEED")
            .and_then(|s| s.trim().parse().ok())
            .unwrap_or(defaults.seed);

        let ai = get("PUYO_AI")
            .and_then(|s| AiKind::from_str(s.trim()))
            .unwrap_or(defaults.ai);

        let max_turns = get("PUYO_MAX_TURNS")
            .and_then(|s| s.trim().parse().ok())
            .unwrap_or(defaults.max_turns);

        let height = get("PUYO_HEIGHT")
            .and_then(|s| s.trim().parse().ok())
            .unwrap_or(defaults.height)
            .clamp(MIN_HEIGHT, MAX_HEIGHT);

        let width = get("PUYO_WIDTH")
            .and_then(|s| s.trim().parse().ok())
            .unwrap_or(defaults.width)
            .clamp(MIN_WIDTH, MAX_WIDTH);

        let lookahead = get("PUYO_LOOKAHEAD")
            .and_then(|s| s.trim().parse().ok())
            .unwrap_or(defaults.lookahead);

        let json = get("PUYO_JSON")
            .map(|s| matches!(s.trim().to_ascii_lowercase().as_str(), "1" | "true" | "yes"))
            .unwrap_or(defaults.json);

        Self {
            seed,
            ai,
            max_turns,
            height,
            width,
            lookahead,
            json,
        }
    }

    fn build_ai(&self) -> Box<dyn Ai> {
        match self.ai {
            AiKind::RuleBased => Box::new(RuleBasedAi::default().with_lookahead(self.lookahead)),
            kind => create_ai(kind, self.seed as u64),
        }
    }
}

/// Outcome of one self-play run
#[derive(Debug, Clone, Serialize)]
pub struct SimReport {
    pub turns: u32,
    pub score: u32,
    pub longest_chain: u32,
    pub erased_total: usize,
    pub game_over: bool,
    pub field: FieldSnapshot,
}

/// Play until game over or `config.max_turns` placements
pub fn run_self_play(config: &SimConfig) -> Result<SimReport> {
    let mut field = Field::with_seed(config.height, config.width, config.seed);
    field.start();
    let mut ai = config.build_ai();

    let mut turns = 0;
    let mut longest_chain = 0;
    let mut erased_total = 0;

    while turns < config.max_turns && !field.is_game_over() {
        let mv = match ai.decide(&field) {
            Ok(mv) => mv,
            Err(DecideError::NoLegalMove) => {
                eprintln!("[Sim] Turn {}: no legal move, field is lost", turns + 1);
                break;
            }
        };

        let summary = apply_move(&mut field, mv)
            .with_context(|| format!("turn {}: AI move {:?} could not be played", turns + 1, mv))?;
        turns += 1;

        if summary.chain_length > 0 {
            eprintln!(
                "[Sim] Turn {}: {}-chain, {} erased, +{} (score {})",
                turns,
                summary.chain_length,
                summary.erased_total,
                summary.score_gained,
                field.score()
            );
        }
        longest_chain = longest_chain.max(summary.chain_length);
        erased_total += summary.erased_total;
    }

    // Stopping early means the field topped out or had no legal move.
    let game_over = field.is_game_over() || turns < config.max_turns;
    Ok(SimReport {
        turns,
        score: field.score(),
        longest_chain,
        erased_total,
        game_over,
        field: field.snapshot(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn config_defaults_without_variables() {
        let config = SimConfig::from_lookup(|_| None);
        assert_eq!(config, SimConfig::default());
    }

    #[test]
    fn config_reads_variables() {
        let config = SimConfig::from_lookup(lookup(&[
            ("PUYO_SEED", "42"),
            ("PUYO_AI", "random"),
            ("PUYO_MAX_TURNS", "10"),
            ("PUYO_WIDTH", "8"),
            ("PUYO_JSON", "true"),
        ]));
        assert_eq!(config.seed, 42);
        assert_eq!(config.ai, AiKind::Random);
        assert_eq!(config.max_turns, 10);
        assert_eq!(config.width, 8);
        assert_eq!(config.height, DEFAULT_HEIGHT);
        assert!(config.json);
    }

    #[test]
    fn config_ignores_garbage_and_clamps_dimensions() {
        let config = SimConfig::from_lookup(lookup(&[
            ("PUYO_SEED", "abc"),
            ("PUYO_AI", "minimax"),
            ("PUYO_HEIGHT", "1"),
            ("PUYO_WIDTH", "0"),
        ]));
        assert_eq!(config.seed, 1);
        assert_eq!(config.ai, AiKind::RuleBased);
        assert_eq!(config.height, MIN_HEIGHT);
        assert_eq!(config.width, MIN_WIDTH);
    }

    #[test]
    fn config_clamps_oversized_dimensions() {
        let config = SimConfig::from_lookup(lookup(&[("PUYO_HEIGHT", "200"), ("PUYO_WIDTH", "255")]));
        assert_eq!(config.height, MAX_HEIGHT);
        assert_eq!(config.width, MAX_WIDTH);
    }

    #[test]
    fn self_play_respects_turn_limit() {
        let config = SimConfig {
            max_turns: 15,
            ..SimConfig::default()
        };
        let report = run_self_play(&config).unwrap();
        assert!(report.turns <= 15);
        assert_eq!(report.score, report.field.score);
    }

    #[test]
    fn self_play_is_deterministic() {
        let config = SimConfig {
            seed: 77,
            ai: AiKind::Random,
            max_turns: 40,
            ..SimConfig::default()
        };
        let a = run_self_play(&config).unwrap();
        let b = run_self_play(&config).unwrap();
        assert_eq!(a.turns, b.turns);
        assert_eq!(a.score, b.score);
        assert_eq!(a.field.board_hash, b.field.board_hash);
    }
}
