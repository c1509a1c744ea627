/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

/// Operation builders
pub mod builders;

mod input;
/// Input type for checking whether a bucket exists
pub use input::{BucketExistsInput, BucketExistsInputBuilder};
mod output;
/// Output type for checking whether a bucket exists
pub use output::BucketExistsOutput;

use crate::error;
use aws_sdk_s3::error::{ProvideErrorMetadata, SdkError};
use aws_sdk_s3::operation::head_bucket::HeadBucketError;
use aws_smithy_runtime_api::client::orchestrator::HttpResponse;
use std::sync::Arc;

/// Operation struct for checking bucket existence
#[derive(Clone, Default, Debug)]
pub(crate) struct BucketExists;

impl BucketExists {
    /// Execute a single `BucketExists` operation
    pub(crate) async fn orchestrate(
        handle: Arc<crate::client::Handle>,
        input: BucketExistsInput,
    ) -> Result<BucketExistsOutput, error::Error> {
        let client = handle.client_for(input.region());
        tracing::debug!("sending HeadBucket for bucket {:?}", input.bucket());

        let result = client
            .head_bucket()
            .set_bucket(input.bucket.clone())
            .send()
            .await;

        match result {
            Ok(_) => Ok(BucketExistsOutput::new(true)),
            Err(err) if is_missing_bucket(&err) => {
                tracing::trace!("HeadBucket reported bucket {:?} as missing", input.bucket());
                Ok(BucketExistsOutput::new(false))
            }
            Err(err) => Err(err.into()),
        }
    }
}

/// `HeadBucket` has no response body, a missing bucket may only be visible through the status code.
fn is_missing_bucket(err: &SdkError<HeadBucketError, HttpResponse>) -> bool {
    if err
        .as_service_error()
        .is_some_and(HeadBucketError::is_not_found)
    {
        return true;
    }

    matches!(err.code(), Some("NotFound" | "NoSuchBucket"))
        || err.raw_response().map(|resp| resp.status().as_u16()) == Some(404)
}

#[cfg(test)]
mod test {
    use crate::error::ErrorKind;
    use aws_sdk_s3::operation::head_bucket::{HeadBucketError, HeadBucketOutput};
    use aws_sdk_s3::types::error::NotFound;
    use aws_smithy_mocks_experimental::mock;
    use test_common::mock_client_with_stubbed_http_client;
    use aws_smithy_types::error::ErrorMetadata;

    fn test_client(client: aws_sdk_s3::Client) -> crate::Client {
        let config = crate::Config::builder().client(client).build();
        crate::Client::new(config)
    }

    #[tokio::test]
    async fn test_bucket_exists() {
        let head_bucket = mock!(aws_sdk_s3::Client::head_bucket)
            .match_requests(|r| r.bucket() == Some("test-bucket"))
            .then_output(|| HeadBucketOutput::builder().build());
        let client = mock_client_with_stubbed_http_client!(aws_sdk_s3, &[&head_bucket]);

        let output = test_client(client)
            .bucket_exists()
            .bucket("test-bucket")
            .send()
            .await
            .unwrap();
        assert!(output.exists());
    }

    #[tokio::test]
    async fn test_bucket_not_found() {
        let head_bucket = mock!(aws_sdk_s3::Client::head_bucket)
            .then_error(|| HeadBucketError::NotFound(NotFound::builder().build()));
        let client = mock_client_with_stubbed_http_client!(aws_sdk_s3, &[&head_bucket]);

        let output = test_client(client)
            .bucket_exists()
            .bucket("missing-bucket")
            .send()
            .await
            .unwrap();
        assert!(!output.exists());
    }

    #[tokio::test]
    async fn test_access_denied_propagates() {
        let head_bucket = mock!(aws_sdk_s3::Client::head_bucket).then_error(|| {
            HeadBucketError::generic(ErrorMetadata::builder().code("AccessDenied").build())
        });
        let client = mock_client_with_stubbed_http_client!(aws_sdk_s3, &[&head_bucket]);

        let err = test_client(client)
            .bucket_exists()
            .bucket("someone-elses-bucket")
            .send()
            .await
            .unwrap_err();
        assert_eq!(&ErrorKind::AccessDenied, err.kind());
    }

    #[tokio::test]
    async fn test_bucket_required() {
        let head_bucket = mock!(aws_sdk_s3::Client::head_bucket)
            .then_output(|| HeadBucketOutput::builder().build());
        let client = mock_client_with_stubbed_http_client!(aws_sdk_s3, &[&head_bucket]);
        let err = test_client(client).bucket_exists().send().await.unwrap_err();
        assert_eq!(&ErrorKind::InputInvalid, err.kind());
    }
}
