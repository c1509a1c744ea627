/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use aws_s3_bucket_verifier::conventions::BucketExpectation;
use aws_s3_bucket_verifier::error::ErrorKind;
use aws_s3_bucket_verifier::operation::bucket_exists::BucketExistsInput;
use aws_s3_bucket_verifier::operation::bucket_tags::BucketTagsInput;
use aws_s3_bucket_verifier::operation::bucket_versioning::BucketVersioningInput;
use aws_s3_bucket_verifier::operation::verify_bucket::VerifyBucketInput;
use aws_s3_bucket_verifier::types::{CheckOutcome, Environment, VersioningStatus};
use aws_sdk_s3::types::BucketVersioningStatus;
use test_common::{conforming_bucket, missing_bucket_rules, verifier_client, BucketFixture};

fn check_names(report: &aws_s3_bucket_verifier::operation::verify_bucket::VerificationReport) -> Vec<&str> {
    report.checks().iter().map(|c| c.name()).collect()
}

#[tokio::test]
async fn test_dev_bucket_conforms() {
    let client = verifier_client(&conforming_bucket("dev").rules());

    let report = client
        .verify_bucket()
        .environment(Environment::Dev)
        .send()
        .await
        .unwrap();

    assert_eq!("terraform-cicd-demo-dev-bucket", report.bucket());
    assert_eq!(
        vec!["DevBucketExists", "DevBucketTags", "DevBucketNaming"],
        check_names(&report)
    );
    assert!(report.is_success(), "{report:?}");
}

#[tokio::test]
async fn test_prod_bucket_conforms() {
    let client = verifier_client(&conforming_bucket("prod").rules());

    let report = client
        .verify_bucket()
        .environment(Environment::Prod)
        .send()
        .await
        .unwrap();

    assert_eq!(
        vec![
            "ProdBucketExists",
            "ProdBucketTags",
            "ProdBucketVersioning",
            "ProdBucketNaming"
        ],
        check_names(&report)
    );
    assert!(report.is_success(), "{report:?}");
}

#[tokio::test]
async fn test_prod_bucket_with_suspended_versioning() {
    let fixture = conforming_bucket("prod").versioning(BucketVersioningStatus::Suspended);
    let client = verifier_client(&fixture.rules());

    let report = client
        .verify_bucket()
        .environment(Environment::Prod)
        .send()
        .await
        .unwrap();

    assert!(!report.is_success());
    let failures: Vec<_> = report.failures().map(|c| c.name()).collect();
    assert_eq!(vec!["ProdBucketVersioning"], failures);
    assert_eq!(
        &CheckOutcome::Failed {
            expected: "Enabled".to_owned(),
            actual: "Suspended".to_owned(),
        },
        report.check("ProdBucketVersioning").unwrap().outcome()
    );
}

#[tokio::test]
async fn test_wrong_and_missing_tags_reported_together() {
    let fixture = BucketFixture::new("terraform-cicd-demo-prod-bucket")
        .tag("Environment", "dev")
        .tag("Project", "terraform-cicd-demo")
        .tag("Purpose", "CI/CD Demo")
        .tag("ManagedBy", "Terraform")
        .versioning(BucketVersioningStatus::Enabled);
    let client = verifier_client(&fixture.rules());

    let report = client
        .verify_bucket()
        .environment(Environment::Prod)
        .send()
        .await
        .unwrap();

    // required tags are compared in key order
    assert_eq!(
        &CheckOutcome::Failed {
            expected: "Criticality=High, Environment=prod".to_owned(),
            actual: "Criticality=<missing>, Environment=dev".to_owned(),
        },
        report.check("ProdBucketTags").unwrap().outcome()
    );
    assert!(report.check("ProdBucketExists").unwrap().is_passed());
    assert!(report.check("ProdBucketVersioning").unwrap().is_passed());
}

#[tokio::test]
async fn test_missing_bucket_fails_every_remote_check() {
    let client = verifier_client(&missing_bucket_rules("terraform-cicd-demo-prod-bucket"));

    let report = client
        .verify_bucket()
        .environment(Environment::Prod)
        .send()
        .await
        .unwrap();

    assert_eq!(4, report.checks().len());
    assert_eq!(
        &CheckOutcome::Failed {
            expected: "bucket exists".to_owned(),
            actual: "bucket not found".to_owned(),
        },
        report.check("ProdBucketExists").unwrap().outcome()
    );
    assert!(matches!(
        report.check("ProdBucketTags").unwrap().outcome(),
        CheckOutcome::Errored(_)
    ));
    assert!(matches!(
        report.check("ProdBucketVersioning").unwrap().outcome(),
        CheckOutcome::Errored(_)
    ));
    // naming is evaluated locally
    assert!(report.check("ProdBucketNaming").unwrap().is_passed());
}

#[tokio::test]
async fn test_custom_expectation() {
    let fixture = BucketFixture::new("audit-logs")
        .tag("Owner", "platform")
        .versioning(BucketVersioningStatus::Enabled);
    let client = verifier_client(&fixture.rules());

    let expectation = BucketExpectation::builder()
        .bucket("audit-logs")
        .required_tag("Owner", "platform")
        .versioning(VersioningStatus::Enabled)
        .name_must_contain("audit")
        .build();

    let report = client
        .verify_bucket()
        .expectation(expectation)
        .send()
        .await
        .unwrap();

    assert_eq!(
        vec![
            "audit-logsBucketExists",
            "audit-logsBucketTags",
            "audit-logsBucketVersioning",
            "audit-logsBucketNaming"
        ],
        check_names(&report)
    );
    assert!(report.is_success(), "{report:?}");
}

#[tokio::test]
async fn test_verify_buckets_preserves_order() {
    let mut rules = conforming_bucket("dev").rules();
    rules.extend(missing_bucket_rules("terraform-cicd-demo-prod-bucket"));
    let client = verifier_client(&rules);

    let expectations = Environment::ALL.map(|env| client.conventions().expectation(env));
    let reports = client.verify_buckets(expectations).await.unwrap();

    assert_eq!(2, reports.len());
    assert_eq!("terraform-cicd-demo-dev-bucket", reports[0].bucket());
    assert!(reports[0].is_success());
    assert_eq!("terraform-cicd-demo-prod-bucket", reports[1].bucket());
    assert!(!reports[1].is_success());
}

#[tokio::test]
async fn test_expectation_required() {
    let client = verifier_client(&conforming_bucket("dev").rules());
    let err = client.verify_bucket().send().await.unwrap_err();
    assert_eq!(&ErrorKind::InputInvalid, err.kind());
}

#[tokio::test]
async fn test_empty_bucket_name_rejected() {
    let client = verifier_client(&conforming_bucket("dev").rules());
    let err = client
        .verify_bucket()
        .expectation(BucketExpectation::builder().build())
        .send()
        .await
        .unwrap_err();
    assert_eq!(&ErrorKind::InputInvalid, err.kind());
}

#[tokio::test]
async fn test_absent_tag_matches_empty_value() {
    let fixture = BucketFixture::new("scratch").tag("Owner", "platform");
    let client = verifier_client(&fixture.rules());

    let expectation = BucketExpectation::builder()
        .bucket("scratch")
        .label("Scratch")
        .required_tag("Owner", "platform")
        .required_tag("CostCenter", "")
        .build();
    let report = client
        .verify_bucket()
        .expectation(expectation.clone())
        .send()
        .await
        .unwrap();
    assert!(report.check("ScratchBucketTags").unwrap().is_passed(), "{report:?}");

    let report = client
        .verify_bucket()
        .expectation(expectation.to_builder().required_tag("Team", "storage").build())
        .send()
        .await
        .unwrap();
    assert_eq!(
        &CheckOutcome::Failed {
            expected: "Team=storage".to_owned(),
            actual: "Team=<missing>".to_owned(),
        },
        report.check("ScratchBucketTags").unwrap().outcome()
    );
}

#[tokio::test]
async fn test_bucket_in_other_region() {
    let fixture = BucketFixture::new("eu-bucket")
        .tag("Environment", "dev")
        .versioning(BucketVersioningStatus::Enabled);
    let client = verifier_client(&fixture.rules());

    let exists = client
        .bucket_exists()
        .bucket("eu-bucket")
        .region("eu-west-1")
        .send()
        .await
        .unwrap();
    assert!(exists.exists());

    let expectation = BucketExpectation::builder()
        .bucket("eu-bucket")
        .region("eu-west-1")
        .label("Eu")
        .required_tag("Environment", "dev")
        .versioning(VersioningStatus::Enabled)
        .build();
    let report = client
        .verify_bucket()
        .expectation(expectation)
        .send()
        .await
        .unwrap();
    assert!(report.is_success(), "{report:?}");
}

#[tokio::test]
async fn test_send_with_input_builders() {
    let client = verifier_client(&conforming_bucket("prod").rules());
    let bucket = "terraform-cicd-demo-prod-bucket";

    let exists = BucketExistsInput::builder()
        .bucket(bucket)
        .send_with(&client)
        .await
        .unwrap();
    assert!(exists.exists());

    let tags = BucketTagsInput::builder()
        .bucket(bucket)
        .send_with(&client)
        .await
        .unwrap();
    assert_eq!(Some("High"), tags.tags().get("Criticality"));

    let versioning = BucketVersioningInput::builder()
        .bucket(bucket)
        .send_with(&client)
        .await
        .unwrap();
    assert_eq!(VersioningStatus::Enabled, versioning.status());

    let report = VerifyBucketInput::builder()
        .expectation(client.conventions().expectation(Environment::Prod))
        .send_with(&client)
        .await
        .unwrap();
    assert!(report.is_success(), "{report:?}");

    let err = BucketTagsInput::builder().send_with(&client).await.unwrap_err();
    assert_eq!(&ErrorKind::InputInvalid, err.kind());
}
