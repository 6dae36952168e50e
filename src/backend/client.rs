//! AWS SDK clients behind the collaborator traits.

use std::collections::BTreeSet;

use aws_config::{BehaviorVersion, Region};
use aws_sdk_costexplorer::types::{
    DateInterval, Dimension, DimensionValues, Expression, Granularity, GroupDefinition,
    GroupDefinitionType,
};
use chrono::NaiveDate;

use crate::billing::LineItem;
use crate::engines::Engine;
use crate::voices::VoiceProfile;

use super::types::{BackendError, CallerIdentity};
use super::{BillingQuery, IdentityCheck, VoiceListing};

/// Blocking facade over the async AWS SDK clients.
///
/// Region and credentials are resolved once at construction; the pure
/// catalog code never sees this configuration.
pub struct AwsBackend {
    runtime: tokio::runtime::Runtime,
    polly: aws_sdk_polly::Client,
    cost_explorer: aws_sdk_costexplorer::Client,
    sts: aws_sdk_sts::Client,
}

impl AwsBackend {
    /// Create a backend, using the given region or falling back to the
    /// AWS config chain (env, profile, instance metadata).
    pub fn new(region: Option<String>) -> Result<Self, BackendError> {
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()?;

        let config = runtime.block_on(async {
            let mut loader = aws_config::defaults(BehaviorVersion::latest());
            if let Some(region) = region {
                loader = loader.region(Region::new(region));
            }
            loader.load().await
        });

        Ok(Self {
            polly: aws_sdk_polly::Client::new(&config),
            cost_explorer: aws_sdk_costexplorer::Client::new(&config),
            sts: aws_sdk_sts::Client::new(&config),
            runtime,
        })
    }
}

/// Map a Cost Explorer usage type to the engine it bills for.
///
/// Polly usage types look like "USE1-NeuralSynthesizeSpeech-chars".
/// Anything that does not name a synthesis engine (request fees,
/// speech-marks usage) stays unattributed.
pub fn engine_for_usage_type(usage_type: &str) -> Option<Engine> {
    let usage = usage_type.to_ascii_lowercase();
    if usage.contains("generative") {
        Some(Engine::Generative)
    } else if usage.contains("longform") || usage.contains("long-form") {
        Some(Engine::LongForm)
    } else if usage.contains("neural") {
        Some(Engine::Neural)
    } else if usage.contains("synthesizespeech") {
        Some(Engine::Standard)
    } else {
        None
    }
}

impl VoiceListing for AwsBackend {
    fn describe_voices(&self) -> Result<Vec<VoiceProfile>, BackendError> {
        let mut profiles = Vec::new();
        let mut next_token: Option<String> = None;

        loop {
            let response = self
                .runtime
                .block_on(
                    self.polly
                        .describe_voices()
                        .set_next_token(next_token.clone())
                        .send(),
                )
                .map_err(|e| BackendError::Request(e.to_string()))?;

            for voice in response.voices() {
                let Some(id) = voice.id() else { continue };

                let supported_engines: BTreeSet<Engine> = voice
                    .supported_engines()
                    .iter()
                    .filter_map(|engine| engine.as_str().parse().ok())
                    .collect();

                profiles.push(VoiceProfile {
                    name: id.as_str().to_string(),
                    gender: voice
                        .gender()
                        .map(|gender| gender.as_str().to_string())
                        .unwrap_or_default(),
                    language_code: voice
                        .language_code()
                        .map(|code| code.as_str().to_string())
                        .unwrap_or_default(),
                    supported_engines,
                    description: voice.language_name().unwrap_or_default().to_string(),
                });
            }

            next_token = response.next_token().map(str::to_string);
            if next_token.is_none() {
                break;
            }
        }

        Ok(profiles)
    }
}

impl BillingQuery for AwsBackend {
    fn polly_costs(&self, start: NaiveDate, end: NaiveDate) -> Result<Vec<LineItem>, BackendError> {
        let period = DateInterval::builder()
            .start(start.format("%Y-%m-%d").to_string())
            .end(end.format("%Y-%m-%d").to_string())
            .build()
            .map_err(|e| BackendError::InvalidResponse(e.to_string()))?;

        let service_filter = Expression::builder()
            .dimensions(
                DimensionValues::builder()
                    .key(Dimension::Service)
                    .values("Amazon Polly")
                    .build(),
            )
            .build();

        let mut items = Vec::new();
        let mut next_token: Option<String> = None;

        loop {
            let response = self
                .runtime
                .block_on(
                    self.cost_explorer
                        .get_cost_and_usage()
                        .time_period(period.clone())
                        .granularity(Granularity::Monthly)
                        .metrics("UnblendedCost")
                        .filter(service_filter.clone())
                        .group_by(
                            GroupDefinition::builder()
                                .r#type(GroupDefinitionType::Dimension)
                                .key("USAGE_TYPE")
                                .build(),
                        )
                        .set_next_page_token(next_token.clone())
                        .send(),
                )
                .map_err(|e| BackendError::Request(e.to_string()))?;

            for result in response.results_by_time() {
                for group in result.groups() {
                    let usage_type = group.keys().first().map(String::as_str).unwrap_or_default();
                    let Some(metric) = group.metrics().and_then(|m| m.get("UnblendedCost")) else {
                        continue;
                    };

                    let amount = metric
                        .amount()
                        .unwrap_or("0")
                        .parse::<f64>()
                        .map_err(|e| {
                            BackendError::InvalidResponse(format!("Bad cost amount: {e}"))
                        })?;

                    items.push(LineItem {
                        engine: engine_for_usage_type(usage_type),
                        amount,
                        currency: metric.unit().unwrap_or("USD").to_string(),
                    });
                }
            }

            next_token = response.next_page_token().map(str::to_string);
            if next_token.is_none() {
                break;
            }
        }

        Ok(items)
    }
}

impl IdentityCheck for AwsBackend {
    fn caller_identity(&self) -> Result<CallerIdentity, BackendError> {
        let response = self
            .runtime
            .block_on(self.sts.get_caller_identity().send())
            .map_err(|e| BackendError::Request(e.to_string()))?;

        Ok(CallerIdentity {
            account: response.account().unwrap_or_default().to_string(),
            user_id: response.user_id().unwrap_or_default().to_string(),
            arn: response.arn().unwrap_or_default().to_string(),
        })
    }
}
