/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use aws_smithy_types::error::operation::BuildError;

/// Input type for fetching the versioning status of a bucket
#[non_exhaustive]
#[derive(Clone, Debug, PartialEq)]
pub struct BucketVersioningInput {
    /// The bucket name
    pub bucket: Option<String>,

    /// The region the bucket lives in
    pub region: Option<String>,
}

impl BucketVersioningInput {
    /// Creates a new builder-style object to manufacture [`BucketVersioningInput`](crate::operation::bucket_versioning::BucketVersioningInput).
    pub fn builder() -> BucketVersioningInputBuilder {
        BucketVersioningInputBuilder::default()
    }

    /// The bucket name
    pub fn bucket(&self) -> Option<&str> {
        self.bucket.as_deref()
    }

    /// The region the bucket lives in
    pub fn region(&self) -> Option<&str> {
        self.region.as_deref()
    }
}

/// A builder for [`BucketVersioningInput`](crate::operation::bucket_versioning::BucketVersioningInput).
#[non_exhaustive]
#[derive(Clone, Debug, Default, PartialEq)]
pub struct BucketVersioningInputBuilder {
    pub(crate) bucket: Option<String>,
    pub(crate) region: Option<String>,
}

impl BucketVersioningInputBuilder {
    /// Set the bucket name.
    ///
    /// NOTE: A bucket name is required.
    pub fn bucket(mut self, input: impl Into<String>) -> Self {
        self.bucket = Some(input.into());
        self
    }

    /// Set the bucket name.
    ///
    /// NOTE: A bucket name is required.
    pub fn set_bucket(mut self, input: Option<String>) -> Self {
        self.bucket = input;
        self
    }

    /// The bucket name
    pub fn get_bucket(&self) -> &Option<String> {
        &self.bucket
    }

    /// Set the region the bucket lives in. Defaults to the client's region.
    pub fn region(mut self, input: impl Into<String>) -> Self {
        self.region = Some(input.into());
        self
    }

    /// Set the region the bucket lives in. Defaults to the client's region.
    pub fn set_region(mut self, input: Option<String>) -> Self {
        self.region = input;
        self
    }

    /// The region the bucket lives in
    pub fn get_region(&self) -> &Option<String> {
        &self.region
    }

    /// Consumes the builder and constructs a [`BucketVersioningInput`](crate::operation::bucket_versioning::BucketVersioningInput).
    pub fn build(self) -> Result<BucketVersioningInput, BuildError> {
        if self.bucket.as_deref().map_or(true, str::is_empty) {
            return Err(BuildError::missing_field("bucket", "A bucket is required"));
        }

        Ok(BucketVersioningInput {
            bucket: self.bucket,
            region: self.region,
        })
    }
}
