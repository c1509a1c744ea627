/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use crate::error::{self, BoxError};

/// The deployment environment a bucket belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Environment {
    /// Development environment
    Dev,

    /// Production environment
    Prod,
}

impl Environment {
    /// All known environments, in deployment order.
    pub const ALL: [Environment; 2] = [Environment::Dev, Environment::Prod];

    /// The lowercase identifier used in bucket names and tag values (e.g. `dev`)
    pub fn as_str(&self) -> &'static str {
        match self {
            Environment::Dev => "dev",
            Environment::Prod => "prod",
        }
    }

    /// The capitalized name used to prefix check names (e.g. `Dev`)
    pub fn display_name(&self) -> &'static str {
        match self {
            Environment::Dev => "Dev",
            Environment::Prod => "Prod",
        }
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Environment {
    type Err = error::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "dev" => Ok(Environment::Dev),
            "prod" => Ok(Environment::Prod),
            other => Err(error::invalid_input(format!(
                "unknown environment `{other}`, expected one of: dev, prod"
            ))),
        }
    }
}

/// Versioning state of a bucket as reported by `GetBucketVersioning`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VersioningStatus {
    /// Versioning is enabled
    Enabled,

    /// Versioning was enabled at some point and has since been suspended
    Suspended,

    /// Versioning has never been configured for the bucket
    Disabled,
}

impl VersioningStatus {
    /// The raw status string returned by Amazon S3.
    ///
    /// A bucket that never had versioning configured reports no status at all, which maps to
    /// the empty string.
    pub fn as_str(&self) -> &'static str {
        match self {
            VersioningStatus::Enabled => "Enabled",
            VersioningStatus::Suspended => "Suspended",
            VersioningStatus::Disabled => "",
        }
    }
}

impl fmt::Display for VersioningStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VersioningStatus::Disabled => f.write_str("<unset>"),
            status => f.write_str(status.as_str()),
        }
    }
}

impl From<Option<&aws_sdk_s3::types::BucketVersioningStatus>> for VersioningStatus {
    fn from(value: Option<&aws_sdk_s3::types::BucketVersioningStatus>) -> Self {
        use aws_sdk_s3::types::BucketVersioningStatus;
        match value {
            Some(BucketVersioningStatus::Enabled) => VersioningStatus::Enabled,
            Some(BucketVersioningStatus::Suspended) => VersioningStatus::Suspended,
            Some(other) => {
                tracing::trace!("unrecognized versioning status {other:?}; treating as disabled");
                VersioningStatus::Disabled
            }
            None => VersioningStatus::Disabled,
        }
    }
}

/// Tags attached to a bucket, keyed by tag key.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BucketTags(BTreeMap<String, String>);

impl BucketTags {
    /// Create an empty tag set
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up the value for a tag key
    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    /// Insert a tag, returning the previous value for the key if any
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) -> Option<String> {
        self.0.insert(key.into(), value.into())
    }

    /// Number of tags
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true when the bucket has no tags
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate tags in key order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl<K, V> FromIterator<(K, V)> for BucketTags
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        BucketTags(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

impl From<BucketTags> for BTreeMap<String, String> {
    fn from(value: BucketTags) -> Self {
        value.0
    }
}

/// The result of evaluating a single named check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CheckOutcome {
    /// The live state matched the expectation
    Passed,

    /// The live state did not match the expectation
    Failed {
        /// What the check expected
        expected: String,
        /// What was observed
        actual: String,
    },

    /// The live state could not be fetched
    Errored(String),
}

impl CheckOutcome {
    /// Returns true if the check passed
    pub fn is_passed(&self) -> bool {
        matches!(self, CheckOutcome::Passed)
    }

    /// Build an outcome from an error, capturing the full cause chain.
    pub(crate) fn from_error(err: &error::Error) -> Self {
        let context = aws_smithy_types::error::display::DisplayErrorContext(err);
        CheckOutcome::Errored(context.to_string())
    }

    /// Compare an expected and actual value, producing `Passed` when they match.
    pub(crate) fn compare(expected: impl Into<String>, actual: impl Into<String>) -> Self {
        let (expected, actual) = (expected.into(), actual.into());
        if expected == actual {
            CheckOutcome::Passed
        } else {
            CheckOutcome::Failed { expected, actual }
        }
    }
}

impl fmt::Display for CheckOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CheckOutcome::Passed => write!(f, "PASS"),
            CheckOutcome::Failed { expected, actual } => {
                write!(f, "FAIL (expected: {expected}; actual: {actual})")
            }
            CheckOutcome::Errored(msg) => write!(f, "ERROR ({msg})"),
        }
    }
}

/// A named check and its outcome.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckResult {
    name: String,
    outcome: CheckOutcome,
}

impl CheckResult {
    pub(crate) fn new(name: impl Into<String>, outcome: CheckOutcome) -> Self {
        Self {
            name: name.into(),
            outcome,
        }
    }

    /// The name of the check (e.g. `ProdBucketVersioning`)
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The outcome of the check
    pub fn outcome(&self) -> &CheckOutcome {
        &self.outcome
    }

    /// Returns true if the check passed
    pub fn is_passed(&self) -> bool {
        self.outcome.is_passed()
    }
}

impl fmt::Display for CheckResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.name, self.outcome)
    }
}

/// Parse a tag given as `key=value`.
pub fn parse_tag(s: &str) -> Result<(String, String), BoxError> {
    match s.split_once('=') {
        Some((key, value)) if !key.is_empty() => Ok((key.to_owned(), value.to_owned())),
        _ => Err(format!("invalid tag `{s}`, expected KEY=VALUE").into()),
    }
}
