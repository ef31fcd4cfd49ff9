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

//! Identify the bucket whose lifecycle is managed.
//!
//! Bucket references are usually written as `gs://` URIs, possibly with an
//! object prefix, e.g. `gs://my-bucket/logs/`. Lifecycle rules apply to the
//! whole bucket, so the prefix is kept only to render the reference back.

use std::fmt;
use std::str::FromStr;

const SCHEME: &str = "gs://";

/// A validated reference to a Cloud Storage bucket.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct BucketRef {
    name: String,
    prefix: Option<String>,
}

/// Errors returned by [BucketRef::parse].
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum BucketRefError {
    /// The input was empty.
    #[error("the bucket reference is empty")]
    Empty,
    /// The input had a scheme but no bucket name.
    #[error("the bucket reference `{0}` does not contain a bucket name")]
    MissingName(String),
    /// The input used a scheme other than `gs://`.
    #[error("the bucket reference `{0}` uses an unsupported scheme, expected `gs://`")]
    UnsupportedScheme(String),
}

impl BucketRef {
    /// Parses a bucket name (`my-bucket`) or a `gs://` URI
    /// (`gs://my-bucket`, `gs://my-bucket/prefix`).
    ///
    /// # Example
    /// ```
    /// # use google_cloud_storage_lifecycle::BucketRef;
    /// let bucket = BucketRef::parse("gs://my-bucket/logs")?;
    /// assert_eq!(bucket.name(), "my-bucket");
    /// assert_eq!(bucket.resource_name(), "projects/_/buckets/my-bucket");
    /// # Ok::<(), google_cloud_storage_lifecycle::bucket_ref::BucketRefError>(())
    /// ```
    pub fn parse(input: &str) -> Result<Self, BucketRefError> {
        let input = input.trim();
        if input.is_empty() {
            return Err(BucketRefError::Empty);
        }
        let path = match input.strip_prefix(SCHEME) {
            Some(path) => path,
            None if input.contains("://") => {
                return Err(BucketRefError::UnsupportedScheme(input.to_string()));
            }
            None => input,
        };
        let (name, prefix) = match path.split_once('/') {
            Some((name, prefix)) => (name, Some(prefix).filter(|p| !p.is_empty())),
            None => (path, None),
        };
        if name.is_empty() {
            return Err(BucketRefError::MissingName(input.to_string()));
        }
        Ok(Self {
            name: name.to_string(),
            prefix: prefix.map(str::to_string),
        })
    }

    /// The bucket id, without scheme or prefix.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The object prefix following the bucket name, if any.
    pub fn prefix(&self) -> Option<&str> {
        self.prefix.as_deref()
    }

    /// The full resource name used by [StorageControl][google_cloud_storage::client::StorageControl].
    pub fn resource_name(&self) -> String {
        format!("projects/_/buckets/{}", self.name)
    }
}

impl fmt::Display for BucketRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{SCHEME}{}", self.name)?;
        if let Some(prefix) = &self.prefix {
            write!(f, "/{prefix}")?;
        }
        Ok(())
    }
}

impl FromStr for BucketRef {
    type Err = BucketRefError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}
