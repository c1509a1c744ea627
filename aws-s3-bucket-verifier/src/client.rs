/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use crate::conventions::{BucketExpectation, ProjectConventions};
use crate::error;
use crate::operation::verify_bucket::VerificationReport;
use crate::Config;
use aws_config::Region;
use std::sync::Arc;

/// Bucket verifier client for Amazon Simple Storage Service.
#[derive(Debug, Clone)]
pub struct Client {
    pub(crate) handle: Arc<Handle>,
}

/// Whatever is needed to carry out operations, e.g. config, env details, etc
#[derive(Debug)]
pub(crate) struct Handle {
    pub(crate) config: crate::Config,
}

impl Handle {
    /// Get the S3 client to use for a request targeting `region`.
    ///
    /// Requests without an explicit region, or for the client's own region, reuse the configured
    /// client. Otherwise the configured client is rebuilt for the requested region.
    pub(crate) fn client_for(&self, region: Option<&str>) -> aws_sdk_s3::Client {
        let client = self.config.client();
        match region {
            Some(region) if !client.config().region().is_some_and(|r| r.to_string() == region) => {
                tracing::trace!("using S3 client re-configured for region {region}");
                let conf = client
                    .config()
                    .to_builder()
                    .region(Region::new(region.to_owned()))
                    .build();
                aws_sdk_s3::Client::from_conf(conf)
            }
            _ => client.clone(),
        }
    }
}

impl Client {
    /// Creates a new client from a verifier config.
    pub fn new(config: Config) -> Client {
        let handle = Arc::new(Handle { config });
        Client { handle }
    }

    /// Returns the client's configuration
    pub fn config(&self) -> &Config {
        &self.handle.config
    }

    /// Returns the project conventions the client was configured with
    pub fn conventions(&self) -> &ProjectConventions {
        self.handle.config.conventions()
    }

    /// Check whether a bucket exists.
    ///
    /// Constructs a fluent builder for the
    /// [`BucketExists`](crate::operation::bucket_exists::builders::BucketExistsFluentBuilder) operation.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// async fn exists(client: &aws_s3_bucket_verifier::Client) -> Result<bool, aws_s3_bucket_verifier::error::Error> {
    ///     let output = client
    ///         .bucket_exists()
    ///         .bucket("my-bucket")
    ///         .region("us-east-1")
    ///         .send()
    ///         .await?;
    ///     Ok(output.exists())
    /// }
    /// ```
    pub fn bucket_exists(&self) -> crate::operation::bucket_exists::builders::BucketExistsFluentBuilder {
        crate::operation::bucket_exists::builders::BucketExistsFluentBuilder::new(self.handle.clone())
    }

    /// Fetch the tags attached to a bucket.
    ///
    /// Constructs a fluent builder for the
    /// [`BucketTags`](crate::operation::bucket_tags::builders::BucketTagsFluentBuilder) operation.
    ///
    /// A bucket without any tags yields an empty tag set rather than an error.
    pub fn bucket_tags(&self) -> crate::operation::bucket_tags::builders::BucketTagsFluentBuilder {
        crate::operation::bucket_tags::builders::BucketTagsFluentBuilder::new(self.handle.clone())
    }

    /// Fetch the versioning status of a bucket.
    ///
    /// Constructs a fluent builder for the
    /// [`BucketVersioning`](crate::operation::bucket_versioning::builders::BucketVersioningFluentBuilder) operation.
    pub fn bucket_versioning(
        &self,
    ) -> crate::operation::bucket_versioning::builders::BucketVersioningFluentBuilder {
        crate::operation::bucket_versioning::builders::BucketVersioningFluentBuilder::new(
            self.handle.clone(),
        )
    }

    /// Evaluate a [`BucketExpectation`] against the live state of a bucket.
    ///
    /// Constructs a fluent builder for the
    /// [`VerifyBucket`](crate::operation::verify_bucket::builders::VerifyBucketFluentBuilder) operation.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use aws_s3_bucket_verifier::types::VersioningStatus;
    /// use aws_s3_bucket_verifier::conventions::BucketExpectation;
    ///
    /// async fn verify(client: &aws_s3_bucket_verifier::Client) -> Result<bool, aws_s3_bucket_verifier::error::Error> {
    ///     let expectation = BucketExpectation::builder()
    ///         .bucket("my-bucket")
    ///         .label("Audit")
    ///         .required_tag("Owner", "platform")
    ///         .versioning(VersioningStatus::Enabled)
    ///         .build();
    ///
    ///     let report = client
    ///         .verify_bucket()
    ///         .expectation(expectation)
    ///         .send()
    ///         .await?;
    ///     Ok(report.is_success())
    /// }
    /// ```
    pub fn verify_bucket(&self) -> crate::operation::verify_bucket::builders::VerifyBucketFluentBuilder {
        crate::operation::verify_bucket::builders::VerifyBucketFluentBuilder::new(self.handle.clone())
    }

    /// Evaluate several expectations concurrently.
    ///
    /// Reports are returned in the same order as the given expectations.
    pub async fn verify_buckets(
        &self,
        expectations: impl IntoIterator<Item = BucketExpectation>,
    ) -> Result<Vec<VerificationReport>, error::Error> {
        let tasks = expectations.into_iter().map(|expectation| {
            let handle = self.handle.clone();
            tokio::spawn(crate::operation::verify_bucket::VerifyBucket::orchestrate(
                handle,
                expectation,
            ))
        });

        futures_util::future::join_all(tasks)
            .await
            .into_iter()
            .map(|joined| joined?)
            .collect()
    }
}
