//! Domain records supplied by the data source.
//!
//! All records are immutable snapshots constructed upstream. The composer
//! only reads and projects them; list order as supplied is display order
//! and is never re-sorted here.

use serde::{Deserialize, Serialize};

use crate::error::ContractViolation;

/// The account whose dashboard is being rendered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountIdentity {
    pub address: String,
    pub avatar_url: String,
}

impl AccountIdentity {
    pub(crate) fn validate(&self) -> Result<(), ContractViolation> {
        if self.address.is_empty() {
            return Err(ContractViolation::EmptyField {
                entity: "AccountIdentity",
                field: "address",
            });
        }
        Ok(())
    }

    /// Address shortened for narrow layouts (`0x1234…2345`).
    pub fn short_address(&self) -> String {
        let chars: Vec<char> = self.address.chars().collect();
        if chars.len() <= 12 {
            self.address.clone()
        } else {
            let head: String = chars[..6].iter().collect();
            let tail: String = chars[chars.len() - 4..].iter().collect();
            format!("{head}…{tail}")
        }
    }
}

/// A labelled figure, e.g. "Withdraw date" / "9/19/29".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatDetail {
    pub label: String,
    pub value: String,
}

impl StatDetail {
    pub fn new(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
        }
    }
}

/// What an interactive action does when triggered.
///
/// The composer carries these through unexamined; interpreting them (and
/// deciding what happens after, e.g. re-fetch vs. optimistic update) is
/// entirely the presentation layer's concern.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ActionKind {
    /// Begin staking into a pool.
    StartStaking,
    /// Withdraw unlocked tokens.
    WithdrawTokens,
    /// Apply to create a new staking pool.
    CreatePool,
    /// Navigate to another page.
    Navigate { route: String },
}

/// An interactive action forwarded to the presentation layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemAction {
    pub label: String,
    pub kind: ActionKind,
}

impl ItemAction {
    pub fn new(label: impl Into<String>, kind: ActionKind) -> Self {
        Self {
            label: label.into(),
            kind,
        }
    }
}

/// One noteworthy account event, e.g. an upcoming forced withdrawal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActivityItem {
    pub title: String,
    pub subtitle: String,
    pub avatar_url: String,
    /// Optional labelled figure shown with the event (e.g. withdrawal date).
    pub detail: Option<StatDetail>,
    /// Optional action the event offers (e.g. "Withdraw ZRX").
    pub action: Option<ItemAction>,
}

impl ActivityItem {
    pub(crate) fn validate(&self) -> Result<(), ContractViolation> {
        if self.title.is_empty() {
            return Err(ContractViolation::EmptyField {
                entity: "ActivityItem",
                field: "title",
            });
        }
        Ok(())
    }
}

/// One pool the account has staked into, with derived metrics.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StakePosition {
    pub pool_title: String,
    pub pool_url: String,
    pub avatar_url: String,
    /// Share of rewards passed on to stakers, in percent (0 to 100).
    pub rewards_ratio: f64,
    /// Pool fees, already formatted upstream (e.g. "0.03212 ETH").
    pub fee_amount: String,
    /// Share of the pool's capacity currently staked, in percent (0 to 100).
    pub staked_ratio: f64,
    /// Amount this account has staked into the pool.
    pub user_staked_amount: f64,
    /// Rewards this account has earned from the pool.
    pub user_rewards_amount: f64,
    /// Time until the position unlocks, already formatted (e.g. "5 days").
    pub time_remaining: String,
}

impl StakePosition {
    pub(crate) fn validate(&self) -> Result<(), ContractViolation> {
        if self.pool_title.is_empty() {
            return Err(ContractViolation::EmptyField {
                entity: "StakePosition",
                field: "pool_title",
            });
        }
        check_ratio("StakePosition", "rewards_ratio", self.rewards_ratio)?;
        check_ratio("StakePosition", "staked_ratio", self.staked_ratio)?;
        check_amount("StakePosition", "user_staked_amount", self.user_staked_amount)?;
        check_amount(
            "StakePosition",
            "user_rewards_amount",
            self.user_rewards_amount,
        )?;
        Ok(())
    }
}

/// Yes/no choice on a governance proposal - exhaustive match required.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VoteChoice {
    Yes,
    No,
}

impl VoteChoice {
    /// Get display label for UI.
    pub fn label(&self) -> &'static str {
        match self {
            VoteChoice::Yes => "Yes",
            VoteChoice::No => "No",
        }
    }
}

impl std::fmt::Display for VoteChoice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// A historical yes/no vote on a numbered governance proposal (ZEIP).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VoteRecord {
    pub proposal_title: String,
    pub proposal_id: u32,
    pub vote_choice: VoteChoice,
    pub summary: String,
}

impl VoteRecord {
    pub(crate) fn validate(&self) -> Result<(), ContractViolation> {
        if self.proposal_title.is_empty() {
            return Err(ContractViolation::EmptyField {
                entity: "VoteRecord",
                field: "proposal_title",
            });
        }
        Ok(())
    }
}

fn check_ratio(
    entity: &'static str,
    field: &'static str,
    value: f64,
) -> Result<(), ContractViolation> {
    if !value.is_finite() || !(0.0..=100.0).contains(&value) {
        return Err(ContractViolation::RatioOutOfRange {
            entity,
            field,
            value,
        });
    }
    Ok(())
}

fn check_amount(
    entity: &'static str,
    field: &'static str,
    value: f64,
) -> Result<(), ContractViolation> {
    if !value.is_finite() || value < 0.0 {
        return Err(ContractViolation::InvalidAmount {
            entity,
            field,
            value,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stake() -> StakePosition {
        StakePosition {
            pool_title: "Binance Staking Pool".to_string(),
            pool_url: "https://binance.com".to_string(),
            avatar_url: "https://example.com/binance.png".to_string(),
            rewards_ratio: 95.0,
            fee_amount: "0.03212 ETH".to_string(),
            staked_ratio: 52.0,
            user_staked_amount: 213_425.0,
            user_rewards_amount: 0.0342,
            time_remaining: "5 days".to_string(),
        }
    }

    #[test]
    fn test_vote_choice_labels() {
        assert_eq!(VoteChoice::Yes.label(), "Yes");
        assert_eq!(VoteChoice::No.label(), "No");
    }

    #[test]
    fn test_vote_choice_display() {
        assert_eq!(format!("{}", VoteChoice::Yes), "Yes");
        assert_eq!(format!("{}", VoteChoice::No), "No");
    }

    #[test]
    fn test_identity_short_address() {
        let id = AccountIdentity {
            address: "0x123451234512345".to_string(),
            avatar_url: String::new(),
        };
        assert_eq!(id.short_address(), "0x1234…2345");
    }

    #[test]
    fn test_identity_short_address_multibyte() {
        let id = AccountIdentity {
            address: "aααααααααααααα".to_string(),
            avatar_url: String::new(),
        };
        assert_eq!(id.short_address(), "aααααα…αααα");
    }

    #[test]
    fn test_identity_short_address_already_short() {
        let id = AccountIdentity {
            address: "0x1234".to_string(),
            avatar_url: String::new(),
        };
        assert_eq!(id.short_address(), "0x1234");
    }

    #[test]
    fn test_identity_empty_address_rejected() {
        let id = AccountIdentity {
            address: String::new(),
            avatar_url: "https://example.com/a.png".to_string(),
        };
        assert_eq!(
            id.validate(),
            Err(ContractViolation::EmptyField {
                entity: "AccountIdentity",
                field: "address",
            })
        );
    }

    #[test]
    fn test_stake_valid() {
        assert!(stake().validate().is_ok());
    }

    #[test]
    fn test_stake_ratio_boundaries_accepted() {
        let mut s = stake();
        s.rewards_ratio = 0.0;
        s.staked_ratio = 100.0;
        assert!(s.validate().is_ok());
    }

    #[test]
    fn test_stake_ratio_above_hundred_rejected() {
        let mut s = stake();
        s.rewards_ratio = 100.5;
        assert_eq!(
            s.validate(),
            Err(ContractViolation::RatioOutOfRange {
                entity: "StakePosition",
                field: "rewards_ratio",
                value: 100.5,
            })
        );
    }

    #[test]
    fn test_stake_negative_ratio_rejected() {
        let mut s = stake();
        s.staked_ratio = -1.0;
        assert!(matches!(
            s.validate(),
            Err(ContractViolation::RatioOutOfRange { field: "staked_ratio", .. })
        ));
    }

    #[test]
    fn test_stake_nan_ratio_rejected() {
        let mut s = stake();
        s.rewards_ratio = f64::NAN;
        assert!(matches!(
            s.validate(),
            Err(ContractViolation::RatioOutOfRange { .. })
        ));
    }

    #[test]
    fn test_stake_negative_amount_rejected() {
        let mut s = stake();
        s.user_staked_amount = -5.0;
        assert!(matches!(
            s.validate(),
            Err(ContractViolation::InvalidAmount { field: "user_staked_amount", .. })
        ));
    }

    #[test]
    fn test_stake_empty_title_rejected() {
        let mut s = stake();
        s.pool_title.clear();
        assert!(matches!(
            s.validate(),
            Err(ContractViolation::EmptyField { field: "pool_title", .. })
        ));
    }

    #[test]
    fn test_vote_record_empty_title_rejected() {
        let v = VoteRecord {
            proposal_title: String::new(),
            proposal_id: 39,
            vote_choice: VoteChoice::Yes,
            summary: "summary".to_string(),
        };
        assert!(matches!(
            v.validate(),
            Err(ContractViolation::EmptyField { field: "proposal_title", .. })
        ));
    }

    #[test]
    fn test_activity_item_empty_title_rejected() {
        let a = ActivityItem {
            title: String::new(),
            subtitle: "sub".to_string(),
            avatar_url: String::new(),
            detail: None,
            action: None,
        };
        assert!(a.validate().is_err());
    }

    #[test]
    fn test_vote_choice_serde_lowercase() {
        let json = serde_json::to_string(&VoteChoice::Yes).unwrap();
        assert_eq!(json, "\"yes\"");
        let back: VoteChoice = serde_json::from_str("\"no\"").unwrap();
        assert_eq!(back, VoteChoice::No);
    }
}
