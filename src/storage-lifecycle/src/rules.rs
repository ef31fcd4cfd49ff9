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

//! Build and recognize the expiration lifecycle rule.
//!
//! The only rule this crate writes deletes objects older than a number of
//! days. A bucket is considered up to date only when its lifecycle holds
//! exactly one such rule. Any other rule set is replaced, even one made of
//! several copies of the expected rule.

use crate::ttl::Ttl;
use google_cloud_storage::model::bucket::Lifecycle;
use google_cloud_storage::model::bucket::lifecycle::{
    Rule,
    rule::{Action, Condition},
};

/// The action type written by [expiration_rule].
pub const DELETE_ACTION: &str = "Delete";

/// Returns the rule deleting objects older than `ttl`.
pub fn expiration_rule(ttl: Ttl) -> Rule {
    Rule::new()
        .set_action(Action::new().set_type(DELETE_ACTION))
        .set_condition(expiration_condition(ttl))
}

/// Returns a lifecycle made of the single [expiration_rule].
pub fn expiration_lifecycle(ttl: Ttl) -> Lifecycle {
    Lifecycle::new().set_rule([expiration_rule(ttl)])
}

fn expiration_condition(ttl: Ttl) -> Condition {
    Condition::new().set_age_days(ttl.days())
}

/// Returns true if `rule` deletes objects older than `ttl` and nothing else.
///
/// The condition must set the age and no other field. The action type is
/// compared ignoring ASCII case.
pub fn is_expiration_rule(rule: &Rule, ttl: Ttl) -> bool {
    let action_matches = rule
        .action
        .as_ref()
        .is_some_and(|a| a.r#type.eq_ignore_ascii_case(DELETE_ACTION));
    // Comparing against a condition with only the age set rejects any
    // additional field, including fields unknown to this crate.
    let condition_matches = rule
        .condition
        .as_ref()
        .is_some_and(|c| *c == expiration_condition(ttl));
    action_matches && condition_matches
}

/// Returns true if `lifecycle` holds exactly one rule and that rule is the
/// [expiration_rule] for `ttl`.
pub fn has_expected_lifecycle(lifecycle: Option<&Lifecycle>, ttl: Ttl) -> bool {
    match lifecycle.map(|l| l.rule.as_slice()) {
        Some([rule]) => is_expiration_rule(rule, ttl),
        _ => false,
    }
}
