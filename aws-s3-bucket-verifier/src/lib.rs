/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

/* Automatically managed default lints */
#![cfg_attr(docsrs, feature(doc_auto_cfg))]
/* End of automatically managed default lints */
#![warn(
    missing_debug_implementations,
    missing_docs,
    rustdoc::missing_crate_level_docs,
    unreachable_pub,
    rust_2018_idioms
)]

//! Acceptance checks for provisioned Amazon S3 buckets.
//!
//! Buckets created by an infrastructure pipeline are expected to follow a set of conventions:
//! they exist, carry a known set of tags, follow a naming convention and (for production)
//! have versioning enabled. This crate fetches the live state of a bucket from the Amazon S3
//! [service API] and compares it against a [`BucketExpectation`](crate::conventions::BucketExpectation),
//! producing a report of named checks.
//!
//! [service API]: https://docs.aws.amazon.com/AmazonS3/latest/API/API_Operations_Amazon_Simple_Storage_Service.html
//!
//! # Examples
//!
//! Verify the development bucket of a project:
//!
//! ```no_run
//! # async fn example() -> Result<(), aws_s3_bucket_verifier::error::Error> {
//! use aws_s3_bucket_verifier::types::Environment;
//!
//! let config = aws_s3_bucket_verifier::from_env().load().await;
//! let client = aws_s3_bucket_verifier::Client::new(config);
//!
//! let expectation = client.conventions().expectation(Environment::Dev);
//! let report = client
//!     .verify_bucket()
//!     .expectation(expectation)
//!     .send()
//!     .await?;
//!
//! for check in report.checks() {
//!     println!("{}: {}", check.name(), check.outcome());
//! }
//! # Ok(())
//! # }
//! ```
//!
//! See the documentation for each client operation for more information:
//!
//! * [`bucket_exists`](crate::Client::bucket_exists) - check whether a bucket exists
//! * [`bucket_tags`](crate::Client::bucket_tags) - fetch the tags of a bucket
//! * [`bucket_versioning`](crate::Client::bucket_versioning) - fetch the versioning status of a bucket
//! * [`verify_bucket`](crate::Client::verify_bucket) - evaluate an expectation against a bucket

/// Error types emitted by `aws-s3-bucket-verifier`
pub mod error;

/// Common types used by `aws-s3-bucket-verifier`
pub mod types;

/// Naming and tagging conventions for project buckets
pub mod conventions;

/// Bucket verifier client
pub mod client;

/// Bucket verifier operations
pub mod operation;

/// Bucket verifier configuration
pub mod config;

pub use self::client::Client;
use self::config::loader::ConfigLoader;
pub use self::config::Config;

/// Create a config loader
pub fn from_env() -> ConfigLoader {
    ConfigLoader::default()
}
