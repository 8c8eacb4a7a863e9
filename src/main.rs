//! Headless self-play runner (default binary).
//!
//! Plays one field with the configured AI and prints the final board.
//! Configuration comes from `PUYO_*` environment variables (see [`SimConfig::from_env`]).

use anyhow::Result;

use puyo::sim::{run_self_play, SimConfig};

fn main() -> Result<()> {
    let config = SimConfig::from_env();
    eprintln!(
        "[Sim] seed {} ai {} field {}x{} max turns {}",
        config.seed,
        config.ai.as_str(),
        config.width,
        config.height,
        config.max_turns
    );

    let report = run_self_play(&config)?;
    eprintln!(
        "[Sim] {} after {} turns: score {}, longest chain {}, {} erased",
        if report.game_over { "Game over" } else { "Stopped" },
        report.turns,
        report.score,
        report.longest_chain,
        report.erased_total
    );

    if config.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        for row in report.field.rows() {
            println!("{}", row);
        }
        println!("score {}", report.score);
    }
    Ok(())
}
