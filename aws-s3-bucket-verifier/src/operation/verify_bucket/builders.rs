/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use std::sync::Arc;

use crate::conventions::BucketExpectation;
use crate::error;
use crate::types::Environment;

use super::{VerificationReport, VerifyBucketInputBuilder};

/// Fluent builder for verifying a bucket against an expectation
#[derive(Debug)]
pub struct VerifyBucketFluentBuilder {
    handle: Arc<crate::client::Handle>,
    inner: VerifyBucketInputBuilder,
}

impl VerifyBucketFluentBuilder {
    pub(crate) fn new(handle: Arc<crate::client::Handle>) -> Self {
        Self {
            handle,
            inner: ::std::default::Default::default(),
        }
    }

    /// Evaluate every check of the expectation
    pub async fn send(self) -> Result<VerificationReport, error::Error> {
        let input = self.inner.build()?;
        let expectation = input
            .expectation
            .ok_or_else(|| error::invalid_input("A bucket expectation is required"))?;
        crate::operation::verify_bucket::VerifyBucket::orchestrate(self.handle, expectation).await
    }

    /// Set what the bucket is expected to look like.
    pub fn expectation(mut self, input: BucketExpectation) -> Self {
        self.inner = self.inner.expectation(input);
        self
    }

    /// Set what the bucket is expected to look like.
    pub fn set_expectation(mut self, input: Option<BucketExpectation>) -> Self {
        self.inner = self.inner.set_expectation(input);
        self
    }

    /// What the bucket is expected to look like
    pub fn get_expectation(&self) -> &Option<BucketExpectation> {
        self.inner.get_expectation()
    }

    /// Verify the bucket the client's project conventions define for `env`.
    pub fn environment(self, env: Environment) -> Self {
        let expectation = self.handle.config.conventions().expectation(env);
        self.expectation(expectation)
    }
}

impl crate::operation::verify_bucket::input::VerifyBucketInputBuilder {
    /// Verify a bucket with this input using the given client.
    pub async fn send_with(self, client: &crate::Client) -> Result<VerificationReport, error::Error> {
        let mut fluent_builder = client.verify_bucket();
        fluent_builder.inner = self;
        fluent_builder.send().await
    }
}
