//! Order-preserving list projection with stable keys.
//!
//! Keys are derived from a natural identifier of each record, never from
//! its position, so a re-render after upstream filtering or reordering
//! does not spuriously rebuild unrelated items.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::error::ContractViolation;

/// Stable identity of a projected view item, used for re-render diffing.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ViewKey(String);

impl ViewKey {
    /// Key for a staking-pool position, derived from the pool title.
    ///
    /// The title is carried verbatim: any lossy normalization would make
    /// distinct records collide and fail the pass as a duplicate.
    pub fn stake(pool_title: &str) -> Self {
        Self(format!("stake-{pool_title}"))
    }

    /// Key for a governance vote, derived from the proposal id.
    pub fn vote(proposal_id: u32) -> Self {
        Self(format!("vote-{proposal_id}"))
    }

    /// Key for an activity entry, derived from the event title.
    pub fn activity(title: &str) -> Self {
        Self(format!("activity-{title}"))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ViewKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// A view item paired with its stable key.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Keyed<T> {
    pub key: ViewKey,
    pub item: T,
}

/// Project an ordered sequence of records into keyed view items.
///
/// The output has the same length and order as the input. A duplicate
/// derived key is a contract violation (two records claiming the same
/// identity within one list) and fails the whole projection.
pub fn project<R, V>(
    section: &'static str,
    records: &[R],
    map: impl Fn(&R) -> (ViewKey, V),
) -> Result<Vec<Keyed<V>>, ContractViolation> {
    let mut seen = HashSet::with_capacity(records.len());
    let mut out = Vec::with_capacity(records.len());
    for record in records {
        let (key, item) = map(record);
        if !seen.insert(key.clone()) {
            return Err(ContractViolation::DuplicateKey {
                section,
                key: key.to_string(),
            });
        }
        out.push(Keyed { key, item });
    }
    Ok(out)
}
