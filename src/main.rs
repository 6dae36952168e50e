//! polly-tts-rs CLI entry point.

use anyhow::{Context, Result};
use chrono::{NaiveDate, Utc};
use clap::Parser;
use polly_tts_rs::backend::{AwsBackend, BillingQuery, IdentityCheck, VoiceListing};
use polly_tts_rs::cli::{Args, Command, format_table_row, group_thousands};
use polly_tts_rs::engines::{self, Engine};
use polly_tts_rs::{billing, voices};

fn main() -> Result<()> {
    let args = Args::parse();

    match args.command {
        Command::ListEngines => list_engines(),
        Command::Pricing => pricing(),
        Command::ListVoices {
            engine,
            language,
            gender,
            region,
        } => {
            let backend = AwsBackend::new(region).context("Failed to initialize AWS client")?;
            list_voices(
                &backend,
                engine.as_deref(),
                language.as_deref(),
                gender.as_deref(),
            )
        }
        Command::Billing {
            days,
            start_date,
            end_date,
            region,
        } => {
            let backend = AwsBackend::new(region).context("Failed to initialize AWS client")?;
            billing_report(&backend, days, start_date, end_date)
        }
        Command::Info { region } => {
            let backend = AwsBackend::new(region).context("Failed to initialize AWS client")?;
            info(&backend)
        }
    }
}

fn list_engines() -> Result<()> {
    let engines = engines::list_all_engines();

    let widths = [12, 22, 10, 12, 44];
    println!(
        "{}",
        format_table_row(
            &["Engine", "Technology", "Price/1M", "Char Limit", "Best For"],
            &widths,
        )
    );
    println!("{}", "=".repeat(widths.iter().sum()));

    for (_, info) in &engines {
        println!(
            "{}",
            format_table_row(
                &[
                    info.name,
                    info.technology,
                    &format!("${:.2}", info.pricing_per_million),
                    &group_thousands(info.char_limit),
                    info.best_for,
                ],
                &widths,
            )
        );
    }

    println!("\nTotal: {} engines available", engines.len());
    println!("\nUse 'polly-tts-rs pricing' for detailed pricing information.");

    Ok(())
}

fn pricing() -> Result<()> {
    println!("AWS Polly Pricing (Per 1 Million Characters)");
    println!("{}", "=".repeat(80));

    for (_, info) in engines::list_all_engines() {
        println!(
            "\n{} Engine (${:.2}/1M characters)",
            info.name, info.pricing_per_million
        );
        println!("  Technology: {}", info.technology);
        println!("  Quality: {}", info.quality);
        println!(
            "  Character Limit: {} chars per request",
            group_thousands(info.char_limit)
        );
        println!("  Concurrent Requests: {}", info.concurrent_requests);
        if info.free_tier != "N/A" {
            println!("  Free Tier: {}", info.free_tier);
        }
        println!("  Best For: {}", info.best_for);
    }

    println!("\n{}", "=".repeat(80));
    println!("\nCost Examples:");
    println!("  1,000 words (~5,000 chars) with Standard:  $0.02");
    println!("  1,000 words (~5,000 chars) with Neural:    $0.08");
    println!("  50,000 word audiobook with Neural:         $4.00");
    println!("  50,000 word audiobook with Long-form:     $25.00");

    Ok(())
}

fn list_voices<B: VoiceListing>(
    backend: &B,
    engine: Option<&str>,
    language: Option<&str>,
    gender: Option<&str>,
) -> Result<()> {
    let records = backend.describe_voices().context("Failed to list voices")?;
    let voices = voices::list_voices(records, engine, language, gender)?;

    if voices.is_empty() {
        eprintln!("No voices found matching filters.");
        std::process::exit(1);
    }

    let widths = [15, 10, 12, 38, 25];
    println!(
        "{}",
        format_table_row(
            &["Voice", "Gender", "Language", "Engines", "Description"],
            &widths,
        )
    );
    println!("{}", "=".repeat(widths.iter().sum()));

    for (_, profile) in &voices {
        let engines: Vec<&str> = profile.supported_engines.iter().map(Engine::as_str).collect();
        println!(
            "{}",
            format_table_row(
                &[
                    &profile.name,
                    &profile.gender,
                    &profile.language_code,
                    &engines.join(", "),
                    &profile.description,
                ],
                &widths,
            )
        );
    }

    println!("\nTotal: {} voices", voices.len());

    Ok(())
}

fn billing_report<B: BillingQuery>(
    backend: &B,
    days: u32,
    start_date: Option<NaiveDate>,
    end_date: Option<NaiveDate>,
) -> Result<()> {
    let today = Utc::now().date_naive();
    let (start, end) = billing::resolve_range(days, start_date, end_date, today)?;

    eprintln!("Querying AWS Cost Explorer...");
    let items = backend
        .polly_costs(start, end)
        .context("Failed to query Cost Explorer")?;
    let summary = billing::aggregate_costs(&items, start, end, &Engine::ALL)?;

    println!("\nPolly Costs ({} to {})", summary.start_date, summary.end_date);
    println!("{}", "=".repeat(60));
    println!("Total Cost: ${:.2} {}", summary.total_cost, summary.currency);

    println!("\nBy Engine:");
    for (engine, cost) in &summary.by_engine {
        if *cost > 0.0 {
            println!("  {:12} ${:.2}", engine.as_str(), cost);
        }
    }
    if summary.unattributed_cost > 0.0 {
        println!("  {:12} ${:.2}", "other", summary.unattributed_cost);
    }

    Ok(())
}

fn info<B: IdentityCheck>(backend: &B) -> Result<()> {
    println!("AWS Polly TTS Tool - Configuration");
    println!("{}", "=".repeat(60));

    let identity = backend
        .caller_identity()
        .context("Failed to verify AWS credentials")?;
    println!("\nAWS Credentials: valid");
    println!("  Account: {}", identity.account);
    println!("  User ID: {}", identity.user_id);
    println!("  ARN: {}", identity.arn);

    println!("\nAvailable Engines:");
    for (engine, info) in engines::list_all_engines() {
        println!("  - {} (${:.2}/1M chars)", engine, info.pricing_per_million);
    }

    println!("\nUseful Commands:");
    println!("  polly-tts-rs list-voices       # Show all voices");
    println!("  polly-tts-rs list-engines      # Show all engines");
    println!("  polly-tts-rs pricing           # Show pricing");
    println!("  polly-tts-rs billing           # Query AWS costs");

    Ok(())
}
