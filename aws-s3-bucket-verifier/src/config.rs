/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use crate::conventions::ProjectConventions;

/// Configuration loader
pub mod loader;

/// Configuration for a [`Client`](crate::client::Client)
#[derive(Debug, Clone)]
pub struct Config {
    conventions: ProjectConventions,
    client: aws_sdk_s3::client::Client,
}

impl Config {
    /// Create a new `Config` builder
    pub fn builder() -> Builder {
        Builder::default()
    }

    /// Returns the naming and tagging conventions used to build bucket expectations
    pub fn conventions(&self) -> &ProjectConventions {
        &self.conventions
    }

    /// The Amazon S3 client instance that will be used to send requests to S3.
    pub fn client(&self) -> &aws_sdk_s3::Client {
        &self.client
    }
}

/// Fluent style builder for [Config]
#[derive(Debug, Clone, Default)]
pub struct Builder {
    conventions: ProjectConventions,
    client: Option<aws_sdk_s3::Client>,
}

impl Builder {
    /// Set the naming and tagging conventions of the project under verification.
    ///
    /// Default is [`ProjectConventions::default`].
    pub fn conventions(mut self, conventions: ProjectConventions) -> Self {
        self.conventions = conventions;
        self
    }

    /// Set an explicit S3 client to use.
    pub fn client(mut self, client: aws_sdk_s3::Client) -> Self {
        self.client = Some(client);
        self
    }

    /// Consumes the builder and constructs a [`Config`](crate::config::Config)
    ///
    /// # Panics
    ///
    /// Panics if no S3 client was set.
    pub fn build(self) -> Config {
        Config {
            conventions: self.conventions,
            client: self.client.expect("client set"),
        }
    }
}
