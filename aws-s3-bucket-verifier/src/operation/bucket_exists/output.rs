/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

/// Output type for checking whether a bucket exists
#[non_exhaustive]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BucketExistsOutput {
    /// Whether the bucket exists
    pub exists: bool,
}

impl BucketExistsOutput {
    pub(crate) fn new(exists: bool) -> Self {
        Self { exists }
    }

    /// Whether the bucket exists
    pub fn exists(&self) -> bool {
        self.exists
    }
}
