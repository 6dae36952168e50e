//! CLI argument definitions and parsing.

use chrono::NaiveDate;
use clap::{Parser, Subcommand};

/// AWS Polly voice catalog, pricing, and billing CLI.
#[derive(Parser, Debug)]
#[command(name = "polly-tts-rs")]
#[command(about = "Explore AWS Polly voices, engine pricing, and billing")]
#[command(version)]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// List available Polly voices
    ListVoices {
        /// Filter by engine (standard, neural, generative, long-form)
        #[arg(short, long)]
        engine: Option<String>,

        /// Filter by language code prefix (e.g. en, en-US)
        #[arg(short, long)]
        language: Option<String>,

        /// Filter by gender (Female, Male)
        #[arg(short, long)]
        gender: Option<String>,

        /// AWS region (default: from AWS config)
        #[arg(short, long)]
        region: Option<String>,
    },

    /// List all Polly voice engines
    ListEngines,

    /// Show Polly pricing information
    Pricing,

    /// Query AWS billing data for Polly usage
    Billing {
        /// Number of days to query
        #[arg(short, long, default_value_t = 30)]
        days: u32,

        /// Custom start date (YYYY-MM-DD)
        #[arg(long)]
        start_date: Option<NaiveDate>,

        /// Custom end date (YYYY-MM-DD)
        #[arg(long)]
        end_date: Option<NaiveDate>,

        /// AWS region for Cost Explorer
        #[arg(short, long)]
        region: Option<String>,
    },

    /// Show AWS configuration and credential status
    Info {
        /// AWS region (default: from AWS config)
        #[arg(short, long)]
        region: Option<String>,
    },
}
