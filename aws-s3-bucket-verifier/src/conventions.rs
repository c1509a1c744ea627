/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use crate::types::{BucketTags, Environment, VersioningStatus};

const DEFAULT_PROJECT: &str = "terraform-cicd-demo";
const DEFAULT_PURPOSE: &str = "CI/CD Demo";
const DEFAULT_MANAGED_BY: &str = "Terraform";
const DEFAULT_REGION: &str = "us-east-1";

/// Conventions the infrastructure pipeline applies to every bucket of a project.
///
/// Bucket names are derived as `{project}-{environment}-bucket` and every bucket is tagged
/// with its environment, project, purpose and the tool managing it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectConventions {
    project: String,
    purpose: String,
    managed_by: String,
    region: String,
}

impl Default for ProjectConventions {
    fn default() -> Self {
        Self {
            project: DEFAULT_PROJECT.to_owned(),
            purpose: DEFAULT_PURPOSE.to_owned(),
            managed_by: DEFAULT_MANAGED_BY.to_owned(),
            region: DEFAULT_REGION.to_owned(),
        }
    }
}

impl ProjectConventions {
    /// Create conventions for the given project using the default purpose, owner and region
    pub fn new(project: impl Into<String>) -> Self {
        Self {
            project: project.into(),
            ..Default::default()
        }
    }

    /// Set the value expected in the `Purpose` tag
    pub fn purpose(mut self, purpose: impl Into<String>) -> Self {
        self.purpose = purpose.into();
        self
    }

    /// Set the value expected in the `ManagedBy` tag
    pub fn managed_by(mut self, managed_by: impl Into<String>) -> Self {
        self.managed_by = managed_by.into();
        self
    }

    /// Set the region the project's buckets live in
    pub fn region(mut self, region: impl Into<String>) -> Self {
        self.region = region.into();
        self
    }

    /// The project name
    pub fn project_name(&self) -> &str {
        &self.project
    }

    /// The region the project's buckets live in
    pub fn region_name(&self) -> &str {
        &self.region
    }

    /// The bucket name the pipeline provisions for `env`
    pub fn bucket_name(&self, env: Environment) -> String {
        format!("{}-{}-bucket", self.project, env.as_str())
    }

    /// Tags every bucket of this project must carry in `env`
    pub fn required_tags(&self, env: Environment) -> BucketTags {
        let mut tags = BucketTags::new();
        tags.insert("Environment", env.as_str());
        tags.insert("Project", self.project.as_str());
        tags.insert("Purpose", self.purpose.as_str());
        tags.insert("ManagedBy", self.managed_by.as_str());
        if env == Environment::Prod {
            tags.insert("Criticality", "High");
        }
        tags
    }

    /// Build the full expectation for the bucket provisioned in `env`.
    ///
    /// Production buckets additionally require versioning to be enabled.
    pub fn expectation(&self, env: Environment) -> BucketExpectation {
        let versioning = match env {
            Environment::Prod => Some(VersioningStatus::Enabled),
            Environment::Dev => None,
        };

        BucketExpectation::builder()
            .bucket(self.bucket_name(env))
            .region(self.region.as_str())
            .label(env.display_name())
            .set_required_tags(self.required_tags(env))
            .set_versioning(versioning)
            .name_must_contain(env.as_str())
            .name_must_contain(self.project.as_str())
            .build()
    }
}

/// Everything a bucket is expected to look like.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BucketExpectation {
    bucket: String,
    region: Option<String>,
    label: String,
    required_tags: BucketTags,
    versioning: Option<VersioningStatus>,
    name_must_contain: Vec<String>,
}

impl BucketExpectation {
    /// Creates a new builder-style object to manufacture [`BucketExpectation`]
    pub fn builder() -> BucketExpectationBuilder {
        BucketExpectationBuilder::default()
    }

    /// Create a builder pre-populated with this expectation
    pub fn to_builder(&self) -> BucketExpectationBuilder {
        BucketExpectationBuilder {
            bucket: self.bucket.clone(),
            region: self.region.clone(),
            label: Some(self.label.clone()),
            required_tags: self.required_tags.clone(),
            versioning: self.versioning,
            name_must_contain: self.name_must_contain.clone(),
        }
    }

    /// The bucket name
    pub fn bucket(&self) -> &str {
        &self.bucket
    }

    /// The region the bucket lives in, if different from the client's region
    pub fn region(&self) -> Option<&str> {
        self.region.as_deref()
    }

    /// Prefix used when naming checks (e.g. `Dev` produces `DevBucketExists`)
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Tags that must be present with exactly these values
    pub fn required_tags(&self) -> &BucketTags {
        &self.required_tags
    }

    /// Required versioning status, if versioning is checked at all
    pub fn versioning(&self) -> Option<VersioningStatus> {
        self.versioning
    }

    /// Substrings the bucket name must contain
    pub fn name_must_contain(&self) -> &[String] {
        &self.name_must_contain
    }
}

/// A builder for [`BucketExpectation`]
#[derive(Debug, Clone, Default)]
pub struct BucketExpectationBuilder {
    bucket: String,
    region: Option<String>,
    label: Option<String>,
    required_tags: BucketTags,
    versioning: Option<VersioningStatus>,
    name_must_contain: Vec<String>,
}

impl BucketExpectationBuilder {
    /// Set the bucket name
    pub fn bucket(mut self, input: impl Into<String>) -> Self {
        self.bucket = input.into();
        self
    }

    /// Set the region the bucket lives in
    pub fn region(mut self, input: impl Into<String>) -> Self {
        self.region = Some(input.into());
        self
    }

    /// Set the region the bucket lives in
    pub fn set_region(mut self, input: Option<String>) -> Self {
        self.region = input;
        self
    }

    /// Set the prefix used for check names. Defaults to the bucket name.
    pub fn label(mut self, input: impl Into<String>) -> Self {
        self.label = Some(input.into());
        self
    }

    /// Require a tag with the given value
    pub fn required_tag(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.required_tags.insert(key, value);
        self
    }

    /// Replace the set of required tags
    pub fn set_required_tags(mut self, input: BucketTags) -> Self {
        self.required_tags = input;
        self
    }

    /// Require the given versioning status
    pub fn versioning(mut self, input: VersioningStatus) -> Self {
        self.versioning = Some(input);
        self
    }

    /// Require the given versioning status, or skip the versioning check with `None`
    pub fn set_versioning(mut self, input: Option<VersioningStatus>) -> Self {
        self.versioning = input;
        self
    }

    /// Require the bucket name to contain `input`
    pub fn name_must_contain(mut self, input: impl Into<String>) -> Self {
        self.name_must_contain.push(input.into());
        self
    }

    /// Consumes the builder and constructs a [`BucketExpectation`]
    pub fn build(self) -> BucketExpectation {
        let label = self.label.unwrap_or_else(|| self.bucket.clone());
        BucketExpectation {
            bucket: self.bucket,
            region: self.region,
            label,
            required_tags: self.required_tags,
            versioning: self.versioning,
            name_must_contain: self.name_must_contain,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::ProjectConventions;
    use crate::types::{Environment, VersioningStatus};

    #[test]
    fn test_bucket_names() {
        let conventions = ProjectConventions::default();
        assert_eq!(
            "terraform-cicd-demo-dev-bucket",
            conventions.bucket_name(Environment::Dev)
        );
        assert_eq!(
            "terraform-cicd-demo-prod-bucket",
            conventions.bucket_name(Environment::Prod)
        );
    }

    #[test]
    fn test_dev_expectation() {
        let expectation = ProjectConventions::default().expectation(Environment::Dev);
        assert_eq!("terraform-cicd-demo-dev-bucket", expectation.bucket());
        assert_eq!(Some("us-east-1"), expectation.region());
        assert_eq!("Dev", expectation.label());
        assert_eq!(None, expectation.versioning());

        let tags = expectation.required_tags();
        assert_eq!(4, tags.len());
        assert_eq!(Some("dev"), tags.get("Environment"));
        assert_eq!(Some("terraform-cicd-demo"), tags.get("Project"));
        assert_eq!(Some("CI/CD Demo"), tags.get("Purpose"));
        assert_eq!(Some("Terraform"), tags.get("ManagedBy"));
        assert_eq!(None, tags.get("Criticality"));

        assert_eq!(
            &["dev".to_owned(), "terraform-cicd-demo".to_owned()],
            expectation.name_must_contain()
        );
    }

    #[test]
    fn test_prod_expectation() {
        let expectation = ProjectConventions::new("billing")
            .purpose("Invoices")
            .managed_by("OpenTofu")
            .expectation(Environment::Prod);
        assert_eq!("billing-prod-bucket", expectation.bucket());
        assert_eq!("Prod", expectation.label());
        assert_eq!(Some(VersioningStatus::Enabled), expectation.versioning());

        let tags = expectation.required_tags();
        assert_eq!(5, tags.len());
        assert_eq!(Some("prod"), tags.get("Environment"));
        assert_eq!(Some("billing"), tags.get("Project"));
        assert_eq!(Some("Invoices"), tags.get("Purpose"));
        assert_eq!(Some("OpenTofu"), tags.get("ManagedBy"));
        assert_eq!(Some("High"), tags.get("Criticality"));
    }

    #[test]
    fn test_to_builder_keeps_label() {
        let expectation = ProjectConventions::default()
            .expectation(Environment::Dev)
            .to_builder()
            .bucket("renamed-dev-bucket")
            .required_tag("Owner", "platform")
            .build();
        assert_eq!("renamed-dev-bucket", expectation.bucket());
        assert_eq!("Dev", expectation.label());
        assert_eq!(Some("platform"), expectation.required_tags().get("Owner"));
        assert_eq!(5, expectation.required_tags().len());
    }
}
