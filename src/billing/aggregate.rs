//! Cost aggregation over billing line items.

use std::collections::BTreeMap;

use chrono::{Days, NaiveDate};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::engines::Engine;

/// Errors that can occur during cost aggregation.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BillingError {
    #[error("Invalid date range: start {start} is after end {end}")]
    InvalidDateRange { start: NaiveDate, end: NaiveDate },

    #[error("Mixed currencies in billing data: {0} and {1}")]
    MixedCurrency(String, String),
}

/// One billing line item, attributed to an engine or unattributed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineItem {
    /// Engine this charge bills for, if the usage type names one.
    pub engine: Option<Engine>,
    pub amount: f64,
    pub currency: String,
}

/// Aggregated Polly costs over a date range (start inclusive, end exclusive).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CostSummary {
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    /// Sum of every line item, attributed or not.
    pub total_cost: f64,
    /// Charges not mapped to any engine. Total cost exceeds the sum of
    /// the engine buckets by exactly this amount.
    pub unattributed_cost: f64,
    pub currency: String,
    /// Per-engine totals; every known engine is present, even at zero.
    pub by_engine: BTreeMap<Engine, f64>,
}

/// Resolve a days count and optional explicit dates into a concrete range.
///
/// Defaults are `end = today` and `start = end - days`; explicit dates
/// win. The billing collaborator calls this before querying, so the
/// aggregator itself only ever receives concrete dates.
pub fn resolve_range(
    days: u32,
    start: Option<NaiveDate>,
    end: Option<NaiveDate>,
    today: NaiveDate,
) -> Result<(NaiveDate, NaiveDate), BillingError> {
    let end = end.unwrap_or(today);
    let start = start.unwrap_or_else(|| {
        end.checked_sub_days(Days::new(u64::from(days)))
            .unwrap_or(NaiveDate::MIN)
    });

    if start > end {
        return Err(BillingError::InvalidDateRange { start, end });
    }

    Ok((start, end))
}

/// Bucket line items by engine and sum amounts over the date range.
///
/// Every engine in `known_engines` gets a bucket, zero-valued if nothing
/// billed against it. Unattributed charges accumulate separately rather
/// than being dropped or merged into an engine bucket.
pub fn aggregate_costs(
    line_items: &[LineItem],
    start_date: NaiveDate,
    end_date: NaiveDate,
    known_engines: &[Engine],
) -> Result<CostSummary, BillingError> {
    if start_date > end_date {
        return Err(BillingError::InvalidDateRange {
            start: start_date,
            end: end_date,
        });
    }

    let mut by_engine: BTreeMap<Engine, f64> =
        known_engines.iter().map(|engine| (*engine, 0.0)).collect();
    let mut total_cost = 0.0;
    let mut unattributed_cost = 0.0;
    let mut currency: Option<String> = None;

    for item in line_items {
        match &currency {
            None => currency = Some(item.currency.clone()),
            Some(seen) if *seen != item.currency => {
                return Err(BillingError::MixedCurrency(
                    seen.clone(),
                    item.currency.clone(),
                ));
            }
            Some(_) => {}
        }

        total_cost += item.amount;
        match item.engine {
            Some(engine) => *by_engine.entry(engine).or_insert(0.0) += item.amount,
            None => unattributed_cost += item.amount,
        }
    }

    Ok(CostSummary {
        start_date,
        end_date,
        total_cost,
        unattributed_cost,
        currency: currency.unwrap_or_else(|| "USD".to_string()),
        by_engine,
    })
}
