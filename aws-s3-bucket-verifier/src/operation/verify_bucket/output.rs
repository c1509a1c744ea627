/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use crate::types::CheckResult;

/// The named checks evaluated for one bucket, in evaluation order.
#[non_exhaustive]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct VerificationReport {
    /// The bucket that was verified
    pub bucket: String,

    /// Results of every check that ran
    pub checks: Vec<CheckResult>,
}

impl VerificationReport {
    pub(crate) fn new(bucket: impl Into<String>, checks: Vec<CheckResult>) -> Self {
        Self {
            bucket: bucket.into(),
            checks,
        }
    }

    /// The bucket that was verified
    pub fn bucket(&self) -> &str {
        &self.bucket
    }

    /// Results of every check that ran
    pub fn checks(&self) -> &[CheckResult] {
        &self.checks
    }

    /// Look up a check by name
    pub fn check(&self, name: &str) -> Option<&CheckResult> {
        self.checks.iter().find(|c| c.name() == name)
    }

    /// Checks that failed or could not be evaluated
    pub fn failures(&self) -> impl Iterator<Item = &CheckResult> {
        self.checks.iter().filter(|c| !c.is_passed())
    }

    /// Returns true when every check passed
    pub fn is_success(&self) -> bool {
        self.checks.iter().all(CheckResult::is_passed)
    }
}
