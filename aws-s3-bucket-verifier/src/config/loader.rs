/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use aws_config::Region;

use crate::config::Builder;
use crate::conventions::ProjectConventions;
use crate::Config;

/// Load verifier [`Config`] from the environment.
#[derive(Default, Debug)]
pub struct ConfigLoader {
    builder: Builder,
    conventions: Option<ProjectConventions>,
    region: Option<String>,
}

impl ConfigLoader {
    /// Set the naming and tagging conventions of the project under verification.
    ///
    /// Unless overridden with [`region`](Self::region), the conventions' region is also used
    /// as the region of the underlying S3 client.
    pub fn conventions(mut self, conventions: ProjectConventions) -> Self {
        self.conventions = Some(conventions);
        self
    }

    /// Override the region of the underlying S3 client.
    pub fn region(mut self, region: impl Into<String>) -> Self {
        self.region = Some(region.into());
        self
    }

    /// Load the default configuration
    ///
    /// If fields have been overridden during builder construction, the override values will be
    /// used. Otherwise, the default values for each field will be provided.
    pub async fn load(self) -> Config {
        let conventions = self.conventions.unwrap_or_default();
        let region = self
            .region
            .unwrap_or_else(|| conventions.region_name().to_owned());
        tracing::debug!("loading shared AWS config for region {region}");

        let shared_config = aws_config::from_env()
            .region(Region::new(region))
            .load()
            .await;
        let s3_client = aws_sdk_s3::Client::new(&shared_config);
        self.builder
            .conventions(conventions)
            .client(s3_client)
            .build()
    }
}
