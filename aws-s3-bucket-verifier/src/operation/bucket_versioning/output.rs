/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use crate::types::VersioningStatus;

/// Output type for fetching the versioning status of a bucket
#[non_exhaustive]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BucketVersioningOutput {
    /// The versioning status of the bucket
    pub status: VersioningStatus,

    /// Whether MFA delete is enabled. Only reported when it was ever configured.
    pub mfa_delete: bool,
}

impl BucketVersioningOutput {
    pub(crate) fn new(status: VersioningStatus, mfa_delete: bool) -> Self {
        Self { status, mfa_delete }
    }

    /// The versioning status of the bucket
    pub fn status(&self) -> VersioningStatus {
        self.status
    }

    /// Whether MFA delete is enabled
    pub fn mfa_delete(&self) -> bool {
        self.mfa_delete
    }
}
