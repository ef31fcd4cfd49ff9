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

//! Google Cloud Client Libraries for Rust - Storage bucket expiration
//!
//! This crate keeps the lifecycle configuration of a [Google Cloud Storage]
//! bucket in a single, well-known state: exactly one rule that deletes objects
//! older than a given number of days.
//!
//! The main entry point is [LifecycleReconciler][reconciler::LifecycleReconciler].
//! It fetches the bucket, checks whether the lifecycle already holds the
//! expected rule, and only replaces the lifecycle when it does not.
//!
//! ```no_run
//! # use google_cloud_storage::client::StorageControl;
//! # async fn example() -> anyhow::Result<()> {
//! use google_cloud_storage_lifecycle::{BucketRef, LifecycleReconciler, Ttl};
//!
//! let client = StorageControl::builder().build().await?;
//! let reconciler = LifecycleReconciler::new(client);
//! let outcome = reconciler
//!     .apply(&BucketRef::parse("gs://my-bucket")?, Ttl::new(30)?)
//!     .await?;
//! println!("lifecycle updated: {}", outcome.is_updated());
//! # Ok(())
//! # }
//! ```
//!
//! [Google Cloud Storage]: https://cloud.google.com/storage

pub use gax::Result;
pub use gax::error::Error;

pub mod bucket_ref;
pub mod config;
pub mod operations;
pub mod reconciler;
pub mod rules;
pub mod ttl;

pub use bucket_ref::BucketRef;
pub use config::{LifecycleSettings, ResolvedSettings};
pub use operations::BucketOperations;
pub use reconciler::{LifecycleReconciler, Reconciliation};
pub use ttl::Ttl;
