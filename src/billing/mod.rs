//! Cost aggregation for Polly billing data.
//!
//! Pure computation over already-fetched line items; the Cost Explorer
//! collaborator in `backend` supplies them and resolves `--days` into
//! concrete dates.

mod aggregate;

pub use aggregate::{BillingError, CostSummary, LineItem, aggregate_costs, resolve_range};
