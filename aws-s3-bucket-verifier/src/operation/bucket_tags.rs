/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

/// Operation builders
pub mod builders;

mod input;
/// Input type for fetching bucket tags
pub use input::{BucketTagsInput, BucketTagsInputBuilder};
mod output;
/// Output type for fetching bucket tags
pub use output::BucketTagsOutput;

use crate::error;
use crate::types::BucketTags as Tags;
use aws_sdk_s3::error::ProvideErrorMetadata;
use std::sync::Arc;

/// Error code returned by `GetBucketTagging` when a bucket has no tags at all
const NO_SUCH_TAG_SET: &str = "NoSuchTagSet";

/// Operation struct for fetching bucket tags
#[derive(Clone, Default, Debug)]
pub(crate) struct BucketTags;

impl BucketTags {
    /// Execute a single `BucketTags` operation
    pub(crate) async fn orchestrate(
        handle: Arc<crate::client::Handle>,
        input: BucketTagsInput,
    ) -> Result<BucketTagsOutput, error::Error> {
        let client = handle.client_for(input.region());
        tracing::debug!("sending GetBucketTagging for bucket {:?}", input.bucket());

        let result = client
            .get_bucket_tagging()
            .set_bucket(input.bucket.clone())
            .send()
            .await;

        let tags = match result {
            Ok(resp) => resp
                .tag_set()
                .iter()
                .map(|tag| (tag.key(), tag.value()))
                .collect(),
            Err(err) if err.code() == Some(NO_SUCH_TAG_SET) => {
                tracing::trace!("bucket {:?} has no tag set", input.bucket());
                Tags::new()
            }
            Err(err) => return Err(err.into()),
        };

        Ok(BucketTagsOutput::new(tags))
    }
}

#[cfg(test)]
mod test {
    use crate::error::ErrorKind;
    use aws_sdk_s3::operation::get_bucket_tagging::{GetBucketTaggingError, GetBucketTaggingOutput};
    use aws_sdk_s3::types::Tag;
    use aws_smithy_mocks_experimental::mock;
    use test_common::mock_client_with_stubbed_http_client;
    use aws_smithy_types::error::ErrorMetadata;

    fn test_client(client: aws_sdk_s3::Client) -> crate::Client {
        let config = crate::Config::builder().client(client).build();
        crate::Client::new(config)
    }

    fn tag(key: &str, value: &str) -> Tag {
        Tag::builder().key(key).value(value).build().unwrap()
    }

    #[tokio::test]
    async fn test_bucket_tags() {
        let get_tagging = mock!(aws_sdk_s3::Client::get_bucket_tagging)
            .match_requests(|r| r.bucket() == Some("test-bucket"))
            .then_output(|| {
                GetBucketTaggingOutput::builder()
                    .tag_set(tag("Environment", "dev"))
                    .tag_set(tag("Project", "terraform-cicd-demo"))
                    .build()
                    .unwrap()
            });
        let client = mock_client_with_stubbed_http_client!(aws_sdk_s3, &[&get_tagging]);

        let output = test_client(client)
            .bucket_tags()
            .bucket("test-bucket")
            .send()
            .await
            .unwrap();

        let tags = output.tags();
        assert_eq!(2, tags.len());
        assert_eq!(Some("dev"), tags.get("Environment"));
        assert_eq!(Some("terraform-cicd-demo"), tags.get("Project"));
        assert_eq!(None, tags.get("Purpose"));
    }

    #[tokio::test]
    async fn test_no_tag_set_is_empty() {
        let get_tagging = mock!(aws_sdk_s3::Client::get_bucket_tagging).then_error(|| {
            GetBucketTaggingError::generic(ErrorMetadata::builder().code("NoSuchTagSet").build())
        });
        let client = mock_client_with_stubbed_http_client!(aws_sdk_s3, &[&get_tagging]);

        let output = test_client(client)
            .bucket_tags()
            .bucket("untagged-bucket")
            .send()
            .await
            .unwrap();
        assert!(output.tags().is_empty());
    }

    #[tokio::test]
    async fn test_missing_bucket_is_error() {
        let get_tagging = mock!(aws_sdk_s3::Client::get_bucket_tagging).then_error(|| {
            GetBucketTaggingError::generic(ErrorMetadata::builder().code("NoSuchBucket").build())
        });
        let client = mock_client_with_stubbed_http_client!(aws_sdk_s3, &[&get_tagging]);

        let err = test_client(client)
            .bucket_tags()
            .bucket("missing-bucket")
            .send()
            .await
            .unwrap_err();
        assert_eq!(&ErrorKind::NotFound, err.kind());
    }
}
