/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

/// Types for the bucket existence check
pub mod bucket_exists;

/// Types for fetching bucket tags
pub mod bucket_tags;

/// Types for fetching bucket versioning status
pub mod bucket_versioning;

/// Types for verifying a bucket against an expectation
pub mod verify_bucket;
