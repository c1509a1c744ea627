/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use crate::conventions::BucketExpectation;
use aws_smithy_types::error::operation::BuildError;

/// Input type for verifying a bucket against an expectation
#[non_exhaustive]
#[derive(Clone, Debug, PartialEq)]
pub struct VerifyBucketInput {
    /// What the bucket is expected to look like
    pub expectation: Option<BucketExpectation>,
}

impl VerifyBucketInput {
    /// Creates a new builder-style object to manufacture [`VerifyBucketInput`](crate::operation::verify_bucket::VerifyBucketInput).
    pub fn builder() -> VerifyBucketInputBuilder {
        VerifyBucketInputBuilder::default()
    }

    /// What the bucket is expected to look like
    pub fn expectation(&self) -> Option<&BucketExpectation> {
        self.expectation.as_ref()
    }
}

/// A builder for [`VerifyBucketInput`](crate::operation::verify_bucket::VerifyBucketInput).
#[non_exhaustive]
#[derive(Clone, Debug, Default, PartialEq)]
pub struct VerifyBucketInputBuilder {
    pub(crate) expectation: Option<BucketExpectation>,
}

impl VerifyBucketInputBuilder {
    /// Set what the bucket is expected to look like.
    ///
    /// NOTE: An expectation is required.
    pub fn expectation(mut self, input: BucketExpectation) -> Self {
        self.expectation = Some(input);
        self
    }

    /// Set what the bucket is expected to look like.
    pub fn set_expectation(mut self, input: Option<BucketExpectation>) -> Self {
        self.expectation = input;
        self
    }

    /// What the bucket is expected to look like
    pub fn get_expectation(&self) -> &Option<BucketExpectation> {
        &self.expectation
    }

    /// Consumes the builder and constructs a [`VerifyBucketInput`](crate::operation::verify_bucket::VerifyBucketInput).
    pub fn build(self) -> Result<VerifyBucketInput, BuildError> {
        if self.expectation.is_none() {
            return Err(BuildError::missing_field(
                "expectation",
                "A bucket expectation is required",
            ));
        }

        Ok(VerifyBucketInput {
            expectation: self.expectation,
        })
    }
}
