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

//! The time-to-live, in days, of objects in a managed bucket.

/// A positive number of days after which objects are deleted.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Ttl(i32);

/// Errors returned by [Ttl::new].
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum TtlError {
    /// The value was zero or negative.
    #[error("the TTL must be a positive number of days, got {0}")]
    NotPositive(i32),
}

impl Ttl {
    /// Creates a new TTL, rejecting values that are not positive.
    pub fn new(days: i32) -> Result<Self, TtlError> {
        if days <= 0 {
            return Err(TtlError::NotPositive(days));
        }
        Ok(Self(days))
    }

    pub fn days(&self) -> i32 {
        self.0
    }
}

impl TryFrom<i32> for Ttl {
    type Error = TtlError;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl std::fmt::Display for Ttl {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} days", self.0)
    }
}
