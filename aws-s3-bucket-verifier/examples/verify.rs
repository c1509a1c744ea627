/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */
use std::error::Error;
use std::process::ExitCode;

use aws_s3_bucket_verifier::conventions::{BucketExpectation, ProjectConventions};
use aws_s3_bucket_verifier::operation::verify_bucket::VerificationReport;
use aws_s3_bucket_verifier::types::{parse_tag, Environment};
use aws_sdk_s3::error::DisplayErrorContext;
use clap::{CommandFactory, Parser};

type BoxError = Box<dyn Error + Send + Sync>;

#[derive(Debug, Clone, clap::Parser)]
#[command(name = "verify")]
#[command(about = "Verifies that the S3 buckets provisioned for a project follow its conventions.")]
pub struct Args {
    /// Environment(s) to verify <dev | prod>. Defaults to all environments.
    #[arg(long = "environment", short = 'e')]
    environments: Vec<Environment>,

    /// Project name used in bucket names and the `Project` tag
    #[arg(long, default_value = "terraform-cicd-demo")]
    project: String,

    /// Expected value of the `Purpose` tag
    #[arg(long, default_value = "CI/CD Demo")]
    purpose: String,

    /// Expected value of the `ManagedBy` tag
    #[arg(long, default_value = "Terraform")]
    managed_by: String,

    /// Region the buckets live in
    #[arg(long, default_value = "us-east-1")]
    region: String,

    /// Verify this bucket instead of the conventional name (requires a single environment)
    #[arg(long)]
    bucket: Option<String>,

    /// Additional tag the buckets must carry <KEY=VALUE>
    #[arg(long = "tag", value_parser = parse_tag)]
    extra_tags: Vec<(String, String)>,
}

impl Args {
    fn conventions(&self) -> ProjectConventions {
        ProjectConventions::new(self.project.as_str())
            .purpose(self.purpose.as_str())
            .managed_by(self.managed_by.as_str())
            .region(self.region.as_str())
    }

    fn environments(&self) -> Vec<Environment> {
        if self.environments.is_empty() {
            Environment::ALL.to_vec()
        } else {
            self.environments.clone()
        }
    }

    fn expectations(&self, conventions: &ProjectConventions) -> Vec<BucketExpectation> {
        self.environments()
            .into_iter()
            .map(|env| {
                let mut builder = conventions.expectation(env).to_builder();
                if let Some(bucket) = &self.bucket {
                    builder = builder.bucket(bucket.as_str());
                }
                for (key, value) in &self.extra_tags {
                    builder = builder.required_tag(key.as_str(), value.as_str());
                }
                builder.build()
            })
            .collect()
    }
}

fn invalid_arg(message: &str) -> ! {
    Args::command()
        .error(clap::error::ErrorKind::InvalidValue, message)
        .exit()
}

fn print_report(report: &VerificationReport) {
    println!("{}", report.bucket());
    for check in report.checks() {
        println!("  {check}");
    }
}

#[tokio::main]
async fn main() -> Result<ExitCode, BoxError> {
    let args = Args::parse();
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_thread_ids(true)
        .init();

    if args.bucket.is_some() && args.environments().len() != 1 {
        invalid_arg("--bucket requires exactly one --environment");
    }

    let conventions = args.conventions();
    let config = aws_s3_bucket_verifier::from_env()
        .conventions(conventions.clone())
        .load()
        .await;
    let client = aws_s3_bucket_verifier::Client::new(config);

    let reports = match client.verify_buckets(args.expectations(&conventions)).await {
        Ok(reports) => reports,
        Err(err) => {
            tracing::error!("verification failed: {}", DisplayErrorContext(&err));
            return Ok(ExitCode::FAILURE);
        }
    };

    let mut success = true;
    for report in &reports {
        print_report(report);
        success &= report.is_success();
    }

    if success {
        Ok(ExitCode::SUCCESS)
    } else {
        Ok(ExitCode::FAILURE)
    }
}
