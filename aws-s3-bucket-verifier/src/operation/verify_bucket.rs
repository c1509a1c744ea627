/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

/// Operation builders
pub mod builders;

mod input;
/// Input type for verifying a bucket against an expectation
pub use input::{VerifyBucketInput, VerifyBucketInputBuilder};
mod output;
/// Output type for verifying a bucket against an expectation
pub use output::VerificationReport;

use crate::conventions::BucketExpectation;
use crate::error;
use crate::operation::bucket_exists::{BucketExists, BucketExistsInput};
use crate::operation::bucket_tags::{BucketTags, BucketTagsInput};
use crate::operation::bucket_versioning::{BucketVersioning, BucketVersioningInput};
use crate::types::{CheckOutcome, CheckResult, VersioningStatus};
use std::sync::Arc;

/// Placeholder reported for a required tag the bucket does not carry
const MISSING_TAG: &str = "<missing>";

/// Operation struct for verifying a bucket against an expectation
#[derive(Clone, Default, Debug)]
pub(crate) struct VerifyBucket;

impl VerifyBucket {
    /// Execute a single `VerifyBucket` operation.
    ///
    /// Every check runs regardless of the outcome of the checks before it.
    pub(crate) async fn orchestrate(
        handle: Arc<crate::client::Handle>,
        expectation: BucketExpectation,
    ) -> Result<VerificationReport, error::Error> {
        if expectation.bucket().is_empty() {
            return Err(error::invalid_input("expectation has an empty bucket name"));
        }

        let label = expectation.label();
        let mut checks = Vec::with_capacity(4);

        checks.push(CheckResult::new(
            format!("{label}BucketExists"),
            check_exists(&handle, &expectation).await,
        ));
        checks.push(CheckResult::new(
            format!("{label}BucketTags"),
            check_tags(&handle, &expectation).await,
        ));
        if let Some(required) = expectation.versioning() {
            checks.push(CheckResult::new(
                format!("{label}BucketVersioning"),
                check_versioning(&handle, &expectation, required).await,
            ));
        }
        checks.push(CheckResult::new(
            format!("{label}BucketNaming"),
            check_naming(&expectation),
        ));

        let report = VerificationReport::new(expectation.bucket(), checks);
        tracing::info!(
            "verified bucket {}: {} of {} checks passed",
            report.bucket(),
            report.checks().iter().filter(|c| c.is_passed()).count(),
            report.checks().len()
        );
        Ok(report)
    }
}

async fn check_exists(
    handle: &Arc<crate::client::Handle>,
    expectation: &BucketExpectation,
) -> CheckOutcome {
    let input = BucketExistsInput {
        bucket: Some(expectation.bucket().to_owned()),
        region: expectation.region().map(str::to_owned),
    };

    match BucketExists::orchestrate(handle.clone(), input).await {
        Ok(output) if output.exists() => CheckOutcome::Passed,
        Ok(_) => CheckOutcome::Failed {
            expected: "bucket exists".to_owned(),
            actual: "bucket not found".to_owned(),
        },
        Err(err) => CheckOutcome::from_error(&err),
    }
}

async fn check_tags(
    handle: &Arc<crate::client::Handle>,
    expectation: &BucketExpectation,
) -> CheckOutcome {
    let input = BucketTagsInput {
        bucket: Some(expectation.bucket().to_owned()),
        region: expectation.region().map(str::to_owned),
    };

    let actual = match BucketTags::orchestrate(handle.clone(), input).await {
        Ok(output) => output.into_tags(),
        Err(err) => return CheckOutcome::from_error(&err),
    };

    let (expected, found): (Vec<_>, Vec<_>) = expectation
        .required_tags()
        .iter()
        // an absent tag reads as the empty string
        .filter_map(|(key, value)| match actual.get(key) {
            actual_value if actual_value.unwrap_or_default() == value => None,
            actual_value => Some((
                format!("{key}={value}"),
                format!("{key}={}", actual_value.unwrap_or(MISSING_TAG)),
            )),
        })
        .unzip();

    if expected.is_empty() {
        CheckOutcome::Passed
    } else {
        CheckOutcome::Failed {
            expected: expected.join(", "),
            actual: found.join(", "),
        }
    }
}

async fn check_versioning(
    handle: &Arc<crate::client::Handle>,
    expectation: &BucketExpectation,
    required: VersioningStatus,
) -> CheckOutcome {
    let input = BucketVersioningInput {
        bucket: Some(expectation.bucket().to_owned()),
        region: expectation.region().map(str::to_owned),
    };

    match BucketVersioning::orchestrate(handle.clone(), input).await {
        Ok(output) => CheckOutcome::compare(required.to_string(), output.status().to_string()),
        Err(err) => CheckOutcome::from_error(&err),
    }
}

fn check_naming(expectation: &BucketExpectation) -> CheckOutcome {
    let bucket = expectation.bucket();
    let missing: Vec<&str> = expectation
        .name_must_contain()
        .iter()
        .map(String::as_str)
        .filter(|needle| !bucket.contains(needle))
        .collect();

    if missing.is_empty() {
        CheckOutcome::Passed
    } else {
        CheckOutcome::Failed {
            expected: format!("name containing {}", missing.join(", ")),
            actual: bucket.to_owned(),
        }
    }
}
