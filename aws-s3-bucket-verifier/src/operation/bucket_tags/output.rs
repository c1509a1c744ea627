/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use crate::types::BucketTags;

/// Output type for fetching bucket tags
#[non_exhaustive]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BucketTagsOutput {
    /// Tags attached to the bucket. Empty when the bucket has no tags.
    pub tags: BucketTags,
}

impl BucketTagsOutput {
    pub(crate) fn new(tags: BucketTags) -> Self {
        Self { tags }
    }

    /// Tags attached to the bucket
    pub fn tags(&self) -> &BucketTags {
        &self.tags
    }

    /// Consume the output, returning the tags
    pub fn into_tags(self) -> BucketTags {
        self.tags
    }
}
