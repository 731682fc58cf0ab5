//! Fairway CLI — tier schedule inspection, status, and quote commands.
//!
//! Commands:
//! - `tiers` — print the full tier schedule and its fingerprint
//! - `status` — tier status report from `--rank`/`--score` or a TOML snapshot
//! - `quote` — settlement quote for a sale (fee breakdown, payout date)

use anyhow::{bail, Result};
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use fairway_core::domain::{terrain_list, MemberSnapshot};
use fairway_core::engine::TierStatus;
use fairway_core::money::format_price;
use fairway_core::schedule::{
    schedule_fingerprint, validate_schedule, SCHEDULE, SCHEDULE_VERSION,
};
use fairway_core::settlement::SettlementQuote;

#[derive(Parser)]
#[command(
    name = "fairway",
    about = "Fairway CLI — marketplace tier and settlement engine"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the full tier schedule and its fingerprint.
    Tiers {
        /// Emit JSON instead of a table.
        #[arg(long, default_value_t = false)]
        json: bool,
    },
    /// Tier status report for a member.
    Status {
        /// Prestige rank (0-3). Required unless --snapshot is given.
        #[arg(long)]
        rank: Option<i64>,

        /// Handicap score (0.0-18.0). Required unless --snapshot is given.
        #[arg(long)]
        score: Option<f64>,

        /// Path to a TOML member snapshot.
        #[arg(long)]
        snapshot: Option<PathBuf>,

        /// Emit JSON instead of a report.
        #[arg(long, default_value_t = false)]
        json: bool,
    },
    /// Settlement quote for a sale.
    Quote {
        /// Seller prestige rank (0-3).
        #[arg(long)]
        rank: i64,

        /// Sale price in cents.
        #[arg(long)]
        price_cents: i64,

        /// Delivery confirmation date (YYYY-MM-DD). Defaults to today.
        #[arg(long)]
        delivered: Option<String>,

        /// Emit JSON instead of a report.
        #[arg(long, default_value_t = false)]
        json: bool,
    },
}

fn main() -> Result<()> {
    // A schedule that violates its own monotonicity invariants must never
    // serve quotes.
    validate_schedule()?;

    let cli = Cli::parse();
    match cli.command {
        Commands::Tiers { json } => run_tiers(json),
        Commands::Status {
            rank,
            score,
            snapshot,
            json,
        } => run_status(rank, score, snapshot, json),
        Commands::Quote {
            rank,
            price_cents,
            delivered,
            json,
        } => run_quote(rank, price_cents, delivered, json),
    }
}

fn run_tiers(json: bool) -> Result<()> {
    if json {
        let payload = serde_json::json!({
            "version": SCHEDULE_VERSION,
            "fingerprint": schedule_fingerprint(),
            "tiers": SCHEDULE,
        });
        println!("{}", serde_json::to_string_pretty(&payload)?);
        return Ok(());
    }

    println!("# Fairway Tier Schedule (v{SCHEDULE_VERSION})\n");
    println!("Fingerprint: `{}`\n", schedule_fingerprint());
    println!("| Rank | Tier | Fee | Payout | Early Drop | Boost | Terrains |");
    println!("|------|------|-----|--------|------------|-------|----------|");
    for def in &SCHEDULE {
        println!(
            "| {} | {} {} | {:.1}% | {} day{} | {} h | +{}% | {} |",
            def.prestige_rank,
            def.emoji,
            def.name,
            def.platform_fee_rate() * 100.0,
            def.payout_delay_days,
            if def.payout_delay_days == 1 { "" } else { "s" },
            def.early_drop_access_hours,
            def.visibility_boost_percent,
            terrain_list(def.unlocked_terrains),
        );
    }
    Ok(())
}

fn run_status(
    rank: Option<i64>,
    score: Option<f64>,
    snapshot: Option<PathBuf>,
    json: bool,
) -> Result<()> {
    let (rank, score, label) = match snapshot {
        Some(path) => {
            let snap = MemberSnapshot::from_toml_file(&path)?;
            (snap.prestige_rank, snap.handicap_score, snap.member_id)
        }
        None => match (rank, score) {
            (Some(rank), Some(score)) => (rank, score, "member".to_string()),
            _ => bail!("--rank and --score are required without --snapshot"),
        },
    };

    let status = TierStatus::derive(rank, score);
    if json {
        println!("{}", serde_json::to_string_pretty(&status)?);
        return Ok(());
    }

    println!("# Tier Status — {label}\n");
    println!(
        "Tier: {} {} (rank {})",
        status.current.emoji, status.current.name, status.current.prestige_rank
    );
    println!("Handicap: {:.1}", status.score);
    if status.tier.is_terminal() {
        println!("Progress: terminal tier — nothing above {}", status.current.name);
    } else {
        println!(
            "Progress to {}: {} {:.1}%",
            status.next.name,
            progress_bar(status.progress_percent),
            status.progress_percent
        );
        println!("Points until next tier: {:.1}", status.points_until_next);
    }
    println!("Platform fee: {:.1}%", status.current.platform_fee_rate() * 100.0);
    println!(
        "Payout delay: {} day{}",
        status.current.payout_delay_days,
        if status.current.payout_delay_days == 1 { "" } else { "s" }
    );
    println!("Early drop access: {} h", status.current.early_drop_access_hours);
    println!("Visibility boost: +{}%", status.current.visibility_boost_percent);
    println!("Terrains: {}", terrain_list(status.current.unlocked_terrains));
    println!("\nBenefits:");
    for benefit in status.current.benefits {
        println!("- {benefit}");
    }
    Ok(())
}

fn run_quote(rank: i64, price_cents: i64, delivered: Option<String>, json: bool) -> Result<()> {
    let delivered_on = match delivered {
        Some(raw) => NaiveDate::parse_from_str(&raw, "%Y-%m-%d")?,
        None => chrono::Local::now().date_naive(),
    };

    let quote = SettlementQuote::compute(rank, price_cents, delivered_on);
    if json {
        println!("{}", serde_json::to_string_pretty(&quote)?);
        return Ok(());
    }

    println!("# Settlement Quote\n");
    println!("Tier: {}", quote.tier);
    println!("Sale price: {}", format_price(quote.sale_price_cents));
    println!(
        "Platform fee ({:.1}%): {}",
        fairway_core::engine::platform_fee_rate(rank) * 100.0,
        format_price(quote.platform_fee_cents)
    );
    println!("Seller net: {}", format_price(quote.seller_net_cents));
    println!(
        "Payout available: {} ({} day{} after delivery)",
        quote.payout_available_on,
        quote.payout_delay_days,
        if quote.payout_delay_days == 1 { "" } else { "s" }
    );
    Ok(())
}

/// Ten-segment text progress bar.
fn progress_bar(percent: f64) -> String {
    let filled = ((percent / 10.0).round() as usize).min(10);
    format!("[{}{}]", "█".repeat(filled), "░".repeat(10 - filled))
}
