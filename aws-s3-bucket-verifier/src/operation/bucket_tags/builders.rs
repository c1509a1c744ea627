/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use std::sync::Arc;

use crate::error;

use super::{BucketTagsInputBuilder, BucketTagsOutput};

/// Fluent builder for fetching the tags of a bucket
#[derive(Debug)]
pub struct BucketTagsFluentBuilder {
    handle: Arc<crate::client::Handle>,
    inner: BucketTagsInputBuilder,
}

impl BucketTagsFluentBuilder {
    pub(crate) fn new(handle: Arc<crate::client::Handle>) -> Self {
        Self {
            handle,
            inner: ::std::default::Default::default(),
        }
    }

    /// Fetch the tags of the bucket
    pub async fn send(self) -> Result<BucketTagsOutput, error::Error> {
        let input = self.inner.build()?;
        crate::operation::bucket_tags::BucketTags::orchestrate(self.handle, input).await
    }

    /// Set the bucket name.
    pub fn bucket(mut self, input: impl Into<String>) -> Self {
        self.inner = self.inner.bucket(input);
        self
    }

    /// Set the bucket name.
    pub fn set_bucket(mut self, input: Option<String>) -> Self {
        self.inner = self.inner.set_bucket(input);
        self
    }

    /// The bucket name
    pub fn get_bucket(&self) -> &Option<String> {
        self.inner.get_bucket()
    }

    /// Set the region the bucket lives in. Defaults to the client's region.
    pub fn region(mut self, input: impl Into<String>) -> Self {
        self.inner = self.inner.region(input);
        self
    }

    /// Set the region the bucket lives in. Defaults to the client's region.
    pub fn set_region(mut self, input: Option<String>) -> Self {
        self.inner = self.inner.set_region(input);
        self
    }

    /// The region the bucket lives in
    pub fn get_region(&self) -> &Option<String> {
        self.inner.get_region()
    }
}

impl crate::operation::bucket_tags::input::BucketTagsInputBuilder {
    /// Fetch the tags of the bucket with this input using the given client.
    pub async fn send_with(self, client: &crate::Client) -> Result<BucketTagsOutput, error::Error> {
        let mut fluent_builder = client.bucket_tags();
        fluent_builder.inner = self;
        fluent_builder.send().await
    }
}
