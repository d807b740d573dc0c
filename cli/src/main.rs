//! Terminal renderer for Skydome damage reports
//!
//! Loads an encounter snapshot (JSON) and prints the ranked player table,
//! optionally expanded into per-skill breakdowns. All figures come from
//! skydome-core; this binary owns layout only.

use std::error::Error;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;

use skydome_core::{
    StaticTranslations, character_display_name, load_report, skill_rows, summarize,
    ComputedPlayerData,
};

#[derive(Parser)]
#[command(version, about = "Print a damage report from an encounter snapshot")]
struct Cli {
    /// Path to the encounter snapshot (JSON)
    snapshot: PathBuf,

    /// Expand every player's skill breakdown
    #[arg(short, long)]
    expand: bool,

    /// Expand only the player with this display index
    #[arg(short, long)]
    player: Option<u32>,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let report = match load_report(&cli.snapshot) {
        Ok(report) => report,
        Err(err) => {
            eprint!("error: {err}");
            let mut source = err.source();
            while let Some(cause) = source {
                eprint!(": {cause}");
                source = cause.source();
            }
            eprintln!();
            return ExitCode::FAILURE;
        }
    };

    let table = StaticTranslations;
    for player in &report.players {
        print_player(player, &table);
        if cli.expand || cli.player == Some(player.index) {
            print_breakdown(player, &table);
        }
    }

    ExitCode::SUCCESS
}

fn print_player(player: &ComputedPlayerData, table: &StaticTranslations) {
    let summary = summarize(player);
    let name = character_display_name(table, player.character_type);
    println!(
        "{} - {:<12} {:>8}  {:>8}/s  {:>6}%",
        summary.index,
        name,
        summary.total_damage.to_string(),
        summary.dps.to_string(),
        summary.percentage
    );
}

fn print_breakdown(player: &ComputedPlayerData, table: &StaticTranslations) {
    println!(
        "    {:<24} {:>5} {:>8} {:>8} {:>8} {:>8} {:>7}",
        "Skill Name", "Hits", "Total", "Min", "Max", "Avg", "%"
    );
    for row in skill_rows(table, player.character_type, &player.skills) {
        let min = row.min_damage.map(|h| h.to_string()).unwrap_or_default();
        let max = row.max_damage.map(|h| h.to_string()).unwrap_or_default();
        println!(
            "    {:<24} {:>5} {:>8} {:>8} {:>8} {:>8} {:>6}%",
            row.name,
            row.hits,
            row.total_damage.to_string(),
            min,
            max,
            row.avg_damage.to_string(),
            row.percentage
        );
    }
}
