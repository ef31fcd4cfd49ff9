// Copyright 2025 Google LLC
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     https://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! The storage operations needed to reconcile a bucket lifecycle.
//!
//! [LifecycleReconciler][crate::LifecycleReconciler] only needs to read and
//! write bucket metadata. This trait narrows [StorageControl] to those two
//! calls, which lets applications and tests supply their own implementation.

use crate::Result;
use google_cloud_storage::client::StorageControl;
use google_cloud_storage::model::Bucket;
use wkt::FieldMask;

/// Read and write bucket metadata.
///
/// Implementations return errors from the service unchanged: the bucket is
/// missing (`NotFound`), the caller lacks permissions (`PermissionDenied`),
/// the bucket changed concurrently (`FailedPrecondition` or `Aborted`), or
/// the request failed in transit.
#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait BucketOperations: Send + Sync {
    /// Fetches the bucket metadata.
    ///
    /// # Arguments
    /// * `name` - The resource name (e.g., "projects/_/buckets/my-bucket")
    async fn get_bucket(&self, name: &str) -> Result<Bucket>;

    /// Replaces the lifecycle configuration of `bucket`.
    ///
    /// The bucket must come from [get_bucket][BucketOperations::get_bucket]
    /// so its name and metageneration are set.
    async fn update_bucket(&self, bucket: Bucket) -> Result<Bucket>;
}

/// Implementation of [BucketOperations] for [StorageControl].
///
/// Updates only touch the `lifecycle` field, and they are conditional on the
/// metageneration returned by `get_bucket`.
#[async_trait::async_trait]
impl BucketOperations for StorageControl {
    async fn get_bucket(&self, name: &str) -> Result<Bucket> {
        self.get_bucket().set_name(name).send().await
    }

    async fn update_bucket(&self, bucket: Bucket) -> Result<Bucket> {
        let metageneration = bucket.metageneration;
        self.update_bucket()
            .set_bucket(bucket)
            .set_if_metageneration_match(metageneration)
            .set_update_mask(FieldMask::default().set_paths(["lifecycle"]))
            .send()
            .await
    }
}
