//! Data-source seam.
//!
//! The composer is defined only over already-resolved in-memory data; a
//! source hides wherever that data comes from. A production source would
//! wrap a query client and resolve asynchronously before handing over a
//! snapshot; [`SampleSource`] carries fixed records for demos and tests.

use crate::compose::DashboardData;
use crate::types::{
    AccountIdentity, ActionKind, ActivityItem, ItemAction, StakePosition, StatDetail, VoteChoice,
    VoteRecord,
};

/// Supplies one immutable snapshot of account-scoped dashboard data.
pub trait DashboardSource {
    fn load(&self) -> DashboardData;
}

/// Fixed sample account used by the demo binary and tests.
#[derive(Debug, Clone, Copy, Default)]
pub struct SampleSource;

const AVATAR: &str = "https://static.cryptotips.eu/wp-content/uploads/2019/05/binance-bnb-logo.png";
const ZEIP_SUMMARY: &str = "This ZEIP adds support for trading arbitrary bundles of assets \
     to 0x protocol. Historically, only a single asset could be traded per each....";

impl DashboardSource for SampleSource {
    fn load(&self) -> DashboardData {
        let stakes = vec![
            StakePosition {
                pool_title: "Binance Staking Pool".to_string(),
                pool_url: "https://binance.com".to_string(),
                avatar_url: AVATAR.to_string(),
                rewards_ratio: 95.0,
                fee_amount: "0.03212 ETH".to_string(),
                staked_ratio: 52.0,
                user_staked_amount: 213_425.0,
                user_rewards_amount: 0.0342,
                time_remaining: "5 days".to_string(),
            },
            StakePosition {
                pool_title: "Coinbase Staking Pool".to_string(),
                pool_url: "https://coinbase.com".to_string(),
                avatar_url: AVATAR.to_string(),
                rewards_ratio: 23.0,
                fee_amount: "0.00236 ETH".to_string(),
                staked_ratio: 12.0,
                user_staked_amount: 12_345.0,
                user_rewards_amount: 0.01134,
                time_remaining: "14 days".to_string(),
            },
        ];

        let total_staked: f64 = stakes.iter().map(|s| s.user_staked_amount).sum();
        let total_rewards: f64 = stakes.iter().map(|s| s.user_rewards_amount).sum();

        DashboardData {
            identity: AccountIdentity {
                address: "0x123451234512345".to_string(),
                avatar_url: AVATAR.to_string(),
            },
            figures: vec![
                StatDetail::new("Staked balance", format!("{total_staked} ZRX")),
                StatDetail::new("Rewards collected", format!("{total_rewards:.5} ETH")),
                StatDetail::new("Staking pools", stakes.len().to_string()),
            ],
            activity: vec![
                ActivityItem {
                    title: "500 ZRX will be removed from Binance Pool in 10 days".to_string(),
                    subtitle: "Your tokens will need to be manually withdrawn once they are removed "
                        .to_string(),
                    avatar_url: AVATAR.to_string(),
                    detail: Some(StatDetail::new("Withdraw date", "9/19/29")),
                    action: None,
                },
                ActivityItem {
                    title: "Your ZRX is unlocked and ready for withdrawal".to_string(),
                    subtitle: "6,000 ZRX  →  0x12345...12345".to_string(),
                    avatar_url: AVATAR.to_string(),
                    detail: None,
                    action: Some(ItemAction::new("Withdraw ZRX", ActionKind::WithdrawTokens)),
                },
            ],
            stakes,
            votes: vec![
                VoteRecord {
                    proposal_title: "StaticCallAssetProxy".to_string(),
                    proposal_id: 39,
                    vote_choice: VoteChoice::Yes,
                    summary: ZEIP_SUMMARY.to_string(),
                },
                VoteRecord {
                    proposal_title: "AssetProxy".to_string(),
                    proposal_id: 40,
                    vote_choice: VoteChoice::No,
                    summary: ZEIP_SUMMARY.to_string(),
                },
                VoteRecord {
                    proposal_title: "TestVoteTitle".to_string(),
                    proposal_id: 41,
                    vote_choice: VoteChoice::Yes,
                    summary: ZEIP_SUMMARY.to_string(),
                },
            ],
        }
    }
}
