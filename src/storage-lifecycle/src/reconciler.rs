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

//! Reconcile the lifecycle of a bucket with an expiration TTL.
//!
//! # Algorithm
//!
//! 1. Get the current bucket metadata (`get_bucket`)
//! 2. If the lifecycle holds exactly one rule, deleting objects older than the
//!    TTL, stop: there is nothing to do
//! 3. Otherwise replace the whole lifecycle with that single rule
//!    (`update_bucket`)
//!
//! Errors from either call are returned as-is. The reconciler does not retry,
//! callers that need retries should configure them on the client or wrap
//! [LifecycleReconciler::apply].

use crate::Result;
use crate::bucket_ref::BucketRef;
use crate::config::ResolvedSettings;
use crate::operations::BucketOperations;
use crate::rules::{expiration_lifecycle, has_expected_lifecycle};
use crate::ttl::Ttl;
use google_cloud_storage::model::Bucket;

/// The result of [LifecycleReconciler::apply].
#[derive(Clone, Debug, PartialEq)]
#[non_exhaustive]
pub enum Reconciliation {
    /// The lifecycle already matched, no update was sent.
    Unchanged(Bucket),
    /// The lifecycle was replaced. Contains the bucket returned by the update.
    Updated(Bucket),
}

impl Reconciliation {
    pub fn is_updated(&self) -> bool {
        matches!(self, Self::Updated(_))
    }

    /// The most recent bucket metadata known after reconciling.
    pub fn bucket(&self) -> &Bucket {
        match self {
            Self::Unchanged(b) | Self::Updated(b) => b,
        }
    }
}

/// Ensures a bucket deletes objects after a fixed number of days.
///
/// # Example
/// ```no_run
/// # use google_cloud_storage::client::StorageControl;
/// # async fn example(client: StorageControl) -> anyhow::Result<()> {
/// use google_cloud_storage_lifecycle::{LifecycleReconciler, LifecycleSettings};
///
/// let settings = LifecycleSettings::default()
///     .set_bucket("gs://my-bucket")
///     .set_ttl(30)
///     .resolve()?;
/// let outcome = LifecycleReconciler::new(client)
///     .apply_settings(&settings)
///     .await?;
/// # Ok(())
/// # }
/// ```
#[derive(Clone, Debug)]
pub struct LifecycleReconciler<C> {
    client: C,
}

impl<C> LifecycleReconciler<C>
where
    C: BucketOperations,
{
    pub fn new(client: C) -> Self {
        Self { client }
    }

    pub fn client(&self) -> &C {
        &self.client
    }

    /// Makes `bucket` hold exactly one lifecycle rule, deleting objects older
    /// than `ttl`.
    ///
    /// Sends at most one update. Any rule set other than the single expected
    /// rule is discarded, including duplicates of the expected rule.
    pub async fn apply(&self, bucket: &BucketRef, ttl: Ttl) -> Result<Reconciliation> {
        let current = self.client.get_bucket(&bucket.resource_name()).await?;

        let rule_count = current.lifecycle.as_ref().map_or(0, |l| l.rule.len());
        if has_expected_lifecycle(current.lifecycle.as_ref(), ttl) {
            tracing::debug!(
                bucket = %bucket,
                ttl_days = ttl.days(),
                "bucket lifecycle already up to date"
            );
            return Ok(Reconciliation::Unchanged(current));
        }

        tracing::debug!(
            bucket = %bucket,
            ttl_days = ttl.days(),
            rule_count,
            "replacing bucket lifecycle"
        );
        let desired = current.set_lifecycle(expiration_lifecycle(ttl));
        let updated = self.client.update_bucket(desired).await?;
        tracing::info!(
            bucket = %bucket,
            ttl_days = ttl.days(),
            "bucket lifecycle set to delete objects older than the TTL"
        );
        Ok(Reconciliation::Updated(updated))
    }

    /// Calls [apply][LifecycleReconciler::apply] with resolved settings.
    pub async fn apply_settings(&self, settings: &ResolvedSettings) -> Result<Reconciliation> {
        self.apply(&settings.bucket, settings.ttl).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;
    use crate::operations::MockBucketOperations;
    use crate::rules::expiration_rule;
    use gax::error::rpc::{Code, Status};
    use google_cloud_storage::model::bucket::Lifecycle;
    use google_cloud_storage::model::bucket::lifecycle::{
        Rule,
        rule::{Action, Condition},
    };
    use pretty_assertions::assert_eq;
    use test_case::test_case;

    const BUCKET_URI: &str = "gs://ma-bucket";
    const RESOURCE: &str = "projects/_/buckets/ma-bucket";
    const TTL: i32 = 42;
    const BAD_TTL: i32 = 420;

    fn bucket_ref() -> BucketRef {
        BucketRef::parse(BUCKET_URI).unwrap()
    }

    fn ttl() -> Ttl {
        Ttl::new(TTL).unwrap()
    }

    fn bucket_with_rules<I: IntoIterator<Item = Rule>>(rules: I) -> Bucket {
        Bucket::new()
            .set_name(RESOURCE)
            .set_metageneration(7)
            .set_lifecycle(Lifecycle::new().set_rule(rules))
    }

    fn delete_rule(condition: Condition, action_type: &str) -> Rule {
        Rule::new()
            .set_condition(condition)
            .set_action(Action::new().set_type(action_type))
    }

    fn expect_single_rule_update(mock: &mut MockBucketOperations, current: Bucket) {
        mock.expect_get_bucket()
            .times(1)
            .withf(|name| name == RESOURCE)
            .return_once(move |_| Ok(current));
        mock.expect_update_bucket()
            .times(1)
            .withf(|bucket| {
                bucket.name == RESOURCE
                    && bucket.metageneration == 7
                    && bucket.lifecycle == Some(Lifecycle::new().set_rule([expiration_rule(ttl())]))
            })
            .returning(|b| Ok(b));
    }

    #[tokio::test]
    async fn no_lifecycle() -> anyhow::Result<()> {
        let current = Bucket::new().set_name(RESOURCE).set_metageneration(7);
        let mut mock = MockBucketOperations::new();
        expect_single_rule_update(&mut mock, current);

        let got = LifecycleReconciler::new(mock).apply(&bucket_ref(), ttl()).await?;
        assert!(got.is_updated(), "{got:?}");
        let rules = &got.bucket().lifecycle.as_ref().unwrap().rule;
        assert_eq!(rules, &vec![expiration_rule(ttl())]);
        Ok(())
    }

    #[test_case(vec![]; "empty rules")]
    #[test_case(vec![delete_rule(Condition::new().set_age_days(BAD_TTL), "Delete")]; "bad ttl")]
    #[test_case(vec![expiration_rule(ttl()), expiration_rule(ttl())]; "duplicate good rules")]
    #[test_case(vec![delete_rule(Condition::new().set_age_days(TTL), "Unknown")]; "bad action")]
    #[test_case(vec![delete_rule(Condition::new().set_num_newer_versions(3), "Delete")]; "bad condition")]
    #[test_case(vec![delete_rule(Condition::new().set_age_days(TTL).set_num_newer_versions(3), "Delete")]; "bad complex condition")]
    #[tokio::test]
    async fn replaces_lifecycle(rules: Vec<Rule>) -> anyhow::Result<()> {
        let mut mock = MockBucketOperations::new();
        expect_single_rule_update(&mut mock, bucket_with_rules(rules));

        let got = LifecycleReconciler::new(mock).apply(&bucket_ref(), ttl()).await?;
        assert!(got.is_updated(), "{got:?}");
        Ok(())
    }

    #[test_case("Delete")]
    #[test_case("dElEtE")]
    #[tokio::test]
    async fn already_correct(action_type: &str) -> anyhow::Result<()> {
        let current = bucket_with_rules([delete_rule(
            Condition::new().set_age_days(TTL),
            action_type,
        )]);
        let mut mock = MockBucketOperations::new();
        mock.expect_get_bucket().times(1).return_once({
            let current = current.clone();
            move |_| Ok(current)
        });
        mock.expect_update_bucket().never();

        let got = LifecycleReconciler::new(mock).apply(&bucket_ref(), ttl()).await?;
        assert_eq!(got, Reconciliation::Unchanged(current));
        Ok(())
    }

    #[test_case(Code::NotFound)]
    #[test_case(Code::PermissionDenied)]
    #[test_case(Code::Unavailable)]
    #[tokio::test]
    async fn get_error_propagates(code: Code) {
        let mut mock = MockBucketOperations::new();
        mock.expect_get_bucket()
            .times(1)
            .returning(move |_| Err(Error::service(Status::default().set_code(code))));
        mock.expect_update_bucket().never();

        let err = LifecycleReconciler::new(mock)
            .apply(&bucket_ref(), ttl())
            .await
            .unwrap_err();
        assert!(err.status().map(|s| s.code == code).unwrap_or(false), "{err:?}");
    }

    #[test_case(Code::FailedPrecondition)]
    #[test_case(Code::Aborted)]
    #[test_case(Code::PermissionDenied)]
    #[test_case(Code::NotFound)]
    #[tokio::test]
    async fn update_error_propagates(code: Code) {
        let mut mock = MockBucketOperations::new();
        mock.expect_get_bucket()
            .times(1)
            .returning(|_| Ok(bucket_with_rules([])));
        mock.expect_update_bucket().times(1).returning(move |_| {
            Err(Error::service(
                Status::default()
                    .set_code(code)
                    .set_message("update failed"),
            ))
        });

        let err = LifecycleReconciler::new(mock)
            .apply(&bucket_ref(), ttl())
            .await
            .unwrap_err();
        assert!(err.status().map(|s| s.code == code).unwrap_or(false), "{err:?}");
    }

    #[tokio::test]
    async fn apply_settings() -> anyhow::Result<()> {
        let settings = crate::LifecycleSettings::default()
            .set_legacy_bucket(BUCKET_URI)
            .set_legacy_ttl(TTL)
            .resolve()?;
        let mut mock = MockBucketOperations::new();
        expect_single_rule_update(&mut mock, bucket_with_rules([]));

        let got = LifecycleReconciler::new(mock)
            .apply_settings(&settings)
            .await?;
        assert!(got.is_updated(), "{got:?}");
        Ok(())
    }
}
