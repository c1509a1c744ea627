/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use aws_s3_bucket_verifier::conventions::ProjectConventions;
use aws_sdk_s3::operation::get_bucket_tagging::{GetBucketTaggingError, GetBucketTaggingOutput};
use aws_sdk_s3::operation::get_bucket_versioning::{
    GetBucketVersioningError, GetBucketVersioningOutput,
};
use aws_sdk_s3::operation::head_bucket::{HeadBucketError, HeadBucketOutput};
use aws_sdk_s3::types::error::NotFound;
use aws_sdk_s3::types::{BucketVersioningStatus, Tag};
use aws_smithy_mocks_experimental::{mock, Rule, RuleMode};
use aws_smithy_types::error::ErrorMetadata;

pub use aws_smithy_http_client::test_util::infallible_client_fn;
pub use aws_smithy_mocks_experimental;
pub use http;

/// Create a mocked SDK client whose HTTP layer always answers `200 OK` with an empty body.
///
/// Mock rules returning errors (`then_error`) are only applied once a response has been
/// received, so a plain `mock_client!` cannot be used to exercise error paths.
#[macro_export]
macro_rules! mock_client_with_stubbed_http_client {
    ($aws_crate: ident, $rules: expr) => {
        $crate::mock_client_with_stubbed_http_client!(
            $aws_crate,
            $crate::aws_smithy_mocks_experimental::RuleMode::Sequential,
            $rules
        )
    };
    ($aws_crate: ident, $rule_mode: expr, $rules: expr) => {{
        let client = $crate::aws_smithy_mocks_experimental::mock_client!($aws_crate, $rule_mode, $rules);
        $aws_crate::Client::from_conf(
            client
                .config()
                .to_builder()
                .http_client($crate::infallible_client_fn(|_req| {
                    $crate::http::Response::builder()
                        .status(200)
                        .body("")
                        .unwrap()
                }))
                .build(),
        )
    }};
}

/// Live state of a single mocked bucket
#[derive(Debug, Clone, Default)]
pub struct BucketFixture {
    name: String,
    tags: Vec<(String, String)>,
    versioning: Option<BucketVersioningStatus>,
}

impl BucketFixture {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    pub fn tag(mut self, key: &str, value: &str) -> Self {
        self.tags.push((key.to_owned(), value.to_owned()));
        self
    }

    pub fn versioning(mut self, status: BucketVersioningStatus) -> Self {
        self.versioning = Some(status);
        self
    }

    /// Mock rules answering `HeadBucket`, `GetBucketTagging` and `GetBucketVersioning`
    /// for this bucket.
    pub fn rules(&self) -> Vec<Rule> {
        let name = self.name.clone();
        let head_bucket = mock!(aws_sdk_s3::Client::head_bucket)
            .match_requests(move |r| r.bucket() == Some(name.as_str()))
            .then_output(|| HeadBucketOutput::builder().build());

        let name = self.name.clone();
        let tags = self.tags.clone();
        let get_tagging = mock!(aws_sdk_s3::Client::get_bucket_tagging)
            .match_requests(move |r| r.bucket() == Some(name.as_str()))
            .then_output(move || {
                let tag_set = tags
                    .iter()
                    .map(|(k, v)| Tag::builder().key(k).value(v).build().unwrap())
                    .collect();
                GetBucketTaggingOutput::builder()
                    .set_tag_set(Some(tag_set))
                    .build()
                    .unwrap()
            });

        let name = self.name.clone();
        let versioning = self.versioning.clone();
        let get_versioning = mock!(aws_sdk_s3::Client::get_bucket_versioning)
            .match_requests(move |r| r.bucket() == Some(name.as_str()))
            .then_output(move || {
                GetBucketVersioningOutput::builder()
                    .set_status(versioning.clone())
                    .build()
            });

        vec![head_bucket, get_tagging, get_versioning]
    }
}

/// Mock rules for a bucket that does not exist
pub fn missing_bucket_rules(name: &str) -> Vec<Rule> {
    let bucket = name.to_owned();
    let head_bucket = mock!(aws_sdk_s3::Client::head_bucket)
        .match_requests(move |r| r.bucket() == Some(bucket.as_str()))
        .then_error(|| HeadBucketError::NotFound(NotFound::builder().build()));

    let bucket = name.to_owned();
    let get_tagging = mock!(aws_sdk_s3::Client::get_bucket_tagging)
        .match_requests(move |r| r.bucket() == Some(bucket.as_str()))
        .then_error(|| {
            GetBucketTaggingError::generic(ErrorMetadata::builder().code("NoSuchBucket").build())
        });

    let bucket = name.to_owned();
    let get_versioning = mock!(aws_sdk_s3::Client::get_bucket_versioning)
        .match_requests(move |r| r.bucket() == Some(bucket.as_str()))
        .then_error(|| {
            GetBucketVersioningError::generic(
                ErrorMetadata::builder().code("NoSuchBucket").build(),
            )
        });

    vec![head_bucket, get_tagging, get_versioning]
}

/// A correctly provisioned bucket for the given environment of the default project
pub fn conforming_bucket(env: &str) -> BucketFixture {
    let conventions = ProjectConventions::default();
    let env = env.parse().unwrap();
    let mut fixture = BucketFixture::new(conventions.bucket_name(env))
        .versioning(BucketVersioningStatus::Enabled);
    for (key, value) in conventions.required_tags(env).iter() {
        fixture = fixture.tag(key, value);
    }
    fixture
}

/// Create a verifier client whose S3 requests are answered by `rules`
pub fn verifier_client(rules: &[Rule]) -> aws_s3_bucket_verifier::Client {
    let rules: Vec<&Rule> = rules.iter().collect();
    let s3_client = mock_client_with_stubbed_http_client!(aws_sdk_s3, RuleMode::MatchAny, &rules);
    let config = aws_s3_bucket_verifier::Config::builder()
        .client(s3_client)
        .build();
    aws_s3_bucket_verifier::Client::new(config)
}
