//! AWS collaborators that fetch raw voice and billing data.
//!
//! The catalog, filter, and aggregation code is pure and never talks to
//! the network; these traits supply already-fetched records and allow
//! mock implementations in tests.

mod client;
mod types;

pub use client::{AwsBackend, engine_for_usage_type};
pub use types::{BackendError, CallerIdentity};

use chrono::NaiveDate;

use crate::billing::LineItem;
use crate::voices::VoiceProfile;

/// Supplies raw voice records from the Polly DescribeVoices API.
#[cfg_attr(test, mockall::automock)]
pub trait VoiceListing {
    fn describe_voices(&self) -> Result<Vec<VoiceProfile>, BackendError>;
}

/// Supplies raw Polly billing line items from Cost Explorer.
#[cfg_attr(test, mockall::automock)]
pub trait BillingQuery {
    /// Line items for the range (start inclusive, end exclusive).
    fn polly_costs(&self, start: NaiveDate, end: NaiveDate) -> Result<Vec<LineItem>, BackendError>;
}

/// Verifies AWS credentials via STS.
#[cfg_attr(test, mockall::automock)]
pub trait IdentityCheck {
    fn caller_identity(&self) -> Result<CallerIdentity, BackendError>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engines::Engine;
    use crate::{billing, voices};
    use std::collections::BTreeSet;

    fn profile(name: &str, language: &str, engines: &[Engine]) -> VoiceProfile {
        VoiceProfile {
            name: name.to_string(),
            gender: "Female".to_string(),
            language_code: language.to_string(),
            supported_engines: engines.iter().copied().collect::<BTreeSet<_>>(),
            description: "US English".to_string(),
        }
    }

    // ===========================================
    // Usage-type attribution tests
    // ===========================================

    #[test]
    fn test_usage_type_standard() {
        assert_eq!(
            engine_for_usage_type("USE1-SynthesizeSpeech-chars"),
            Some(Engine::Standard)
        );
    }

    #[test]
    fn test_usage_type_neural() {
        assert_eq!(
            engine_for_usage_type("EUW1-NeuralSynthesizeSpeech-chars"),
            Some(Engine::Neural)
        );
    }

    #[test]
    fn test_usage_type_generative() {
        assert_eq!(
            engine_for_usage_type("USE1-GenerativeSynthesizeSpeech-chars"),
            Some(Engine::Generative)
        );
    }

    #[test]
    fn test_usage_type_long_form() {
        assert_eq!(
            engine_for_usage_type("USE1-LongFormSynthesizeSpeech-chars"),
            Some(Engine::LongForm)
        );
    }

    #[test]
    fn test_usage_type_unrelated_is_unattributed() {
        assert_eq!(engine_for_usage_type("USE1-TtsRequest"), None);
        assert_eq!(engine_for_usage_type(""), None);
    }

    // ===========================================
    // Collaborator trait tests with mocks
    // ===========================================

    #[test]
    fn test_mock_voice_listing_feeds_filter() {
        let mut mock = MockVoiceListing::new();

        mock.expect_describe_voices().times(1).returning(|| {
            Ok(vec![
                profile("Joanna", "en-US", &[Engine::Standard, Engine::Neural]),
                profile("Celine", "fr-FR", &[Engine::Standard]),
            ])
        });

        let records = mock.describe_voices().unwrap();
        let voices = voices::list_voices(records, Some("neural"), None, None).unwrap();

        assert_eq!(voices.len(), 1);
        assert_eq!(voices[0].0, "Joanna");
    }

    #[test]
    fn test_mock_voice_listing_failure() {
        let mut mock = MockVoiceListing::new();

        mock.expect_describe_voices()
            .times(1)
            .returning(|| Err(BackendError::Request("connection refused".to_string())));

        let result = mock.describe_voices();
        assert!(matches!(result.unwrap_err(), BackendError::Request(_)));
    }

    #[test]
    fn test_mock_billing_query_feeds_aggregator() {
        let start = chrono::NaiveDate::from_ymd_opt(2025, 1, 1).unwrap();
        let end = chrono::NaiveDate::from_ymd_opt(2025, 1, 31).unwrap();

        let mut mock = MockBillingQuery::new();
        mock.expect_polly_costs()
            .withf(move |s, e| *s == start && *e == end)
            .times(1)
            .returning(|_, _| {
                Ok(vec![
                    LineItem {
                        engine: Some(Engine::Neural),
                        amount: 10.00,
                        currency: "USD".to_string(),
                    },
                    LineItem {
                        engine: None,
                        amount: 1.50,
                        currency: "USD".to_string(),
                    },
                ])
            });

        let items = mock.polly_costs(start, end).unwrap();
        let summary = billing::aggregate_costs(&items, start, end, &Engine::ALL).unwrap();

        assert_eq!(summary.total_cost, 11.50);
        assert_eq!(summary.by_engine[&Engine::Neural], 10.00);
        assert_eq!(summary.unattributed_cost, 1.50);
    }

    #[test]
    fn test_mock_identity_check() {
        let mut mock = MockIdentityCheck::new();

        mock.expect_caller_identity().times(1).returning(|| {
            Ok(CallerIdentity {
                account: "123456789012".to_string(),
                user_id: "AIDAEXAMPLE".to_string(),
                arn: "arn:aws:iam::123456789012:user/dev".to_string(),
            })
        });

        let identity = mock.caller_identity().unwrap();
        assert_eq!(identity.account, "123456789012");
    }
}
