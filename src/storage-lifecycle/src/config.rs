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

//! Resolve the bucket and TTL from primary and legacy settings.
//!
//! Older configurations name the bucket `bucketNameWithPrefix` and the TTL
//! `bucketObjectTTL`. Newer configurations use `bucket` and `ttl`. Exactly one
//! of each pair is expected to be set, if both are set the newer field wins.

use crate::bucket_ref::{BucketRef, BucketRefError};
use crate::ttl::{Ttl, TtlError};

/// Returns `primary` if it is set, otherwise `legacy`.
pub fn resolve<T>(primary: Option<T>, legacy: Option<T>) -> Option<T> {
    primary.or(legacy)
}

/// Like [resolve], treating empty strings as unset.
pub fn resolve_str<'a>(primary: Option<&'a str>, legacy: Option<&'a str>) -> Option<&'a str> {
    resolve(
        primary.filter(|s| !s.is_empty()),
        legacy.filter(|s| !s.is_empty()),
    )
}

/// The settings consumed by the lifecycle reconciler, as loaded by the host.
///
/// # Example
/// ```
/// # use google_cloud_storage_lifecycle::LifecycleSettings;
/// let settings = LifecycleSettings::default()
///     .set_legacy_bucket("gs://my-bucket")
///     .set_legacy_ttl(7);
/// let resolved = settings.resolve()?;
/// assert_eq!(resolved.bucket.name(), "my-bucket");
/// assert_eq!(resolved.ttl.days(), 7);
/// # Ok::<(), google_cloud_storage_lifecycle::config::ConfigError>(())
/// ```
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct LifecycleSettings {
    /// The bucket, as a name or a `gs://` URI.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bucket: Option<String>,

    /// The number of days objects are kept.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ttl: Option<i32>,

    /// Deprecated, use `bucket`.
    #[serde(rename = "bucketNameWithPrefix", skip_serializing_if = "Option::is_none")]
    pub legacy_bucket: Option<String>,

    /// Deprecated, use `ttl`.
    #[serde(rename = "bucketObjectTTL", skip_serializing_if = "Option::is_none")]
    pub legacy_ttl: Option<i32>,
}

impl LifecycleSettings {
    pub fn set_bucket<T: Into<String>>(mut self, v: T) -> Self {
        self.bucket = Some(v.into());
        self
    }

    pub fn set_ttl<T: Into<i32>>(mut self, v: T) -> Self {
        self.ttl = Some(v.into());
        self
    }

    pub fn set_legacy_bucket<T: Into<String>>(mut self, v: T) -> Self {
        self.legacy_bucket = Some(v.into());
        self
    }

    pub fn set_legacy_ttl<T: Into<i32>>(mut self, v: T) -> Self {
        self.legacy_ttl = Some(v.into());
        self
    }

    /// The effective bucket reference, before validation.
    pub fn effective_bucket(&self) -> Option<&str> {
        resolve_str(self.bucket.as_deref(), self.legacy_bucket.as_deref())
    }

    /// The effective TTL, before validation.
    pub fn effective_ttl(&self) -> Option<i32> {
        resolve(self.ttl, self.legacy_ttl)
    }

    /// Picks the effective values and validates them.
    pub fn resolve(&self) -> Result<ResolvedSettings, ConfigError> {
        let bucket = self.effective_bucket().ok_or(ConfigError::MissingBucket)?;
        let ttl = self.effective_ttl().ok_or(ConfigError::MissingTtl)?;
        Ok(ResolvedSettings {
            bucket: BucketRef::parse(bucket)?,
            ttl: Ttl::new(ttl)?,
        })
    }
}

/// Validated settings, ready to use with
/// [LifecycleReconciler::apply_settings][crate::LifecycleReconciler::apply_settings].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResolvedSettings {
    pub bucket: BucketRef,
    pub ttl: Ttl,
}

/// Errors returned by [LifecycleSettings::resolve].
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ConfigError {
    #[error("neither `bucket` nor `bucketNameWithPrefix` is set")]
    MissingBucket,
    #[error("neither `ttl` nor `bucketObjectTTL` is set")]
    MissingTtl,
    #[error(transparent)]
    InvalidBucket(#[from] BucketRefError),
    #[error(transparent)]
    InvalidTtl(#[from] TtlError),
}
