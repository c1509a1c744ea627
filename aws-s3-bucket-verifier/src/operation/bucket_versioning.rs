/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

/// Operation builders
pub mod builders;

mod input;
/// Input type for fetching the versioning status of a bucket
pub use input::{BucketVersioningInput, BucketVersioningInputBuilder};
mod output;
/// Output type for fetching the versioning status of a bucket
pub use output::BucketVersioningOutput;

use crate::error;
use crate::types::VersioningStatus;
use aws_sdk_s3::types::MfaDeleteStatus;
use std::sync::Arc;

/// Operation struct for fetching bucket versioning status
#[derive(Clone, Default, Debug)]
pub(crate) struct BucketVersioning;

impl BucketVersioning {
    /// Execute a single `BucketVersioning` operation
    pub(crate) async fn orchestrate(
        handle: Arc<crate::client::Handle>,
        input: BucketVersioningInput,
    ) -> Result<BucketVersioningOutput, error::Error> {
        let client = handle.client_for(input.region());
        tracing::debug!("sending GetBucketVersioning for bucket {:?}", input.bucket());

        let resp = client
            .get_bucket_versioning()
            .set_bucket(input.bucket.clone())
            .send()
            .await?;

        let status = VersioningStatus::from(resp.status());
        let mfa_delete = matches!(resp.mfa_delete(), Some(MfaDeleteStatus::Enabled));
        Ok(BucketVersioningOutput::new(status, mfa_delete))
    }
}
