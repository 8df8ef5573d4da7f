//! View-model tree handed to the presentation layer.
//!
//! These types are the composer's output: a fixed-order description of
//! what the page shows. Field values are carried through from the domain
//! records verbatim; formatting helpers exist for frontends but never
//! alter the stored values.

use serde::{Deserialize, Serialize};

use crate::project::Keyed;
use crate::types::{AccountIdentity, ItemAction, StatDetail, VoteChoice};

/// The whole dashboard, sections in display order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardView {
    pub header: HeaderSection,
    pub activity: Section<ActivityView>,
    pub stakes: Section<StakeView>,
    pub votes: Section<VoteView>,
}

/// Identity block plus summary figures at the top of the page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HeaderSection {
    pub identity: AccountIdentity,
    pub figures: Vec<StatDetail>,
}

/// One visually delimited group of related items.
///
/// An empty `items` list is a valid state (e.g. an account with no
/// stakes); the composer never invents placeholder entries for it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Section<T> {
    pub title: String,
    /// Navigation action shown beside the section title, if any.
    pub nav: Option<ItemAction>,
    /// Prompt shown when the frontend decides the section needs one.
    pub call_to_action: Option<CallToAction>,
    pub items: Vec<Keyed<T>>,
}

impl<T> Section<T> {
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }
}

/// A prompt with actions, e.g. "You haven't staked ZRX" / "Start staking".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CallToAction {
    pub title: String,
    pub description: String,
    pub actions: Vec<ItemAction>,
}

/// Projected activity entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActivityView {
    pub title: String,
    pub subtitle: String,
    pub avatar_url: String,
    pub detail: Option<StatDetail>,
    pub action: Option<ItemAction>,
}

/// Projected staking-pool position.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StakeView {
    pub pool_title: String,
    pub pool_url: String,
    pub avatar_url: String,
    pub rewards_ratio: f64,
    pub fee_amount: String,
    pub staked_ratio: f64,
    pub user_staked_amount: f64,
    pub user_rewards_amount: f64,
    pub time_remaining: String,
}

impl StakeView {
    /// Rewards share as a display string, e.g. "95%".
    pub fn rewards_label(&self) -> String {
        format!("{:.0}%", self.rewards_ratio)
    }

    /// Staked share as a display string, e.g. "52%".
    pub fn staked_label(&self) -> String {
        format!("{:.0}%", self.staked_ratio)
    }
}

/// Projected governance vote.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VoteView {
    pub proposal_title: String,
    pub proposal_id: u32,
    pub vote_choice: VoteChoice,
    pub summary: String,
}

impl VoteView {
    /// Proposal reference as displayed, e.g. "ZEIP-39".
    pub fn proposal_label(&self) -> String {
        format!("ZEIP-{}", self.proposal_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stake_view_labels() {
        let v = StakeView {
            pool_title: "Pool".to_string(),
            pool_url: String::new(),
            avatar_url: String::new(),
            rewards_ratio: 95.0,
            fee_amount: "0.03212 ETH".to_string(),
            staked_ratio: 52.0,
            user_staked_amount: 0.0,
            user_rewards_amount: 0.0,
            time_remaining: "5 days".to_string(),
        };
        assert_eq!(v.rewards_label(), "95%");
        assert_eq!(v.staked_label(), "52%");
        // Labels are derived; the stored values stay untouched.
        assert_eq!(v.rewards_ratio, 95.0);
        assert_eq!(v.fee_amount, "0.03212 ETH");
    }

    #[test]
    fn test_vote_view_proposal_label() {
        let v = VoteView {
            proposal_title: "StaticCallAssetProxy".to_string(),
            proposal_id: 39,
            vote_choice: VoteChoice::Yes,
            summary: String::new(),
        };
        assert_eq!(v.proposal_label(), "ZEIP-39");
    }

    #[test]
    fn test_section_len_and_empty() {
        let s: Section<VoteView> = Section {
            title: "Your voting history".to_string(),
            nav: None,
            call_to_action: None,
            items: vec![],
        };
        assert!(s.is_empty());
        assert_eq!(s.len(), 0);
    }

    #[test]
    fn test_view_tree_serialization_round_trip() {
        use crate::source::DashboardSource;
        let view = crate::compose::compose(&crate::source::SampleSource.load()).unwrap();
        let json = serde_json::to_string(&view).unwrap();
        let back: DashboardView = serde_json::from_str(&json).unwrap();
        assert_eq!(view, back);
    }
}
