//! Section assembly: domain records in, renderable tree out.

use crate::error::ContractViolation;
use crate::project::{ViewKey, project};
use crate::types::{
    AccountIdentity, ActionKind, ActivityItem, ItemAction, StakePosition, StatDetail, VoteRecord,
};
use crate::view::{
    ActivityView, CallToAction, DashboardView, HeaderSection, Section, StakeView, VoteView,
};

/// Everything the composer needs for one render pass, already resolved
/// in memory. Produced by a [`crate::source::DashboardSource`].
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardData {
    pub identity: AccountIdentity,
    /// Summary figures for the page header, in display order.
    pub figures: Vec<StatDetail>,
    pub activity: Vec<ActivityItem>,
    pub stakes: Vec<StakePosition>,
    pub votes: Vec<VoteRecord>,
}

/// Assemble the dashboard tree in its fixed section order: header,
/// activity, staking pools, voting history.
///
/// Pure and deterministic: identical input produces a structurally
/// identical tree, the input is never mutated, and supplied list order is
/// preserved. Empty input lists yield sections with zero items. The only
/// failure mode is a contract violation in the supplied records, which
/// fails the whole pass rather than dropping the offending record.
pub fn compose(data: &DashboardData) -> Result<DashboardView, ContractViolation> {
    data.identity.validate()?;
    for item in &data.activity {
        item.validate()?;
    }
    for stake in &data.stakes {
        stake.validate()?;
    }
    for vote in &data.votes {
        vote.validate()?;
    }

    let activity = Section {
        title: "Activity".to_string(),
        nav: Some(ItemAction::new(
            "Show all activity",
            ActionKind::Navigate {
                route: "/account/activity".to_string(),
            },
        )),
        call_to_action: None,
        items: project("activity", &data.activity, |a| {
            (ViewKey::activity(&a.title), project_activity(a))
        })?,
    };

    let stakes = Section {
        title: "Your staking pools".to_string(),
        nav: Some(ItemAction::new(
            "Apply to create a staking pool",
            ActionKind::CreatePool,
        )),
        call_to_action: data.stakes.is_empty().then(|| CallToAction {
            title: "You haven't staked ZRX".to_string(),
            description: "Start staking your ZRX and getting interest.".to_string(),
            actions: vec![ItemAction::new("Start staking", ActionKind::StartStaking)],
        }),
        items: project("stakes", &data.stakes, |s| {
            (ViewKey::stake(&s.pool_title), project_stake(s))
        })?,
    };

    let votes = Section {
        title: "Your voting history".to_string(),
        nav: None,
        call_to_action: None,
        items: project("votes", &data.votes, |v| {
            (ViewKey::vote(v.proposal_id), project_vote(v))
        })?,
    };

    Ok(DashboardView {
        header: HeaderSection {
            identity: data.identity.clone(),
            figures: data.figures.clone(),
        },
        activity,
        stakes,
        votes,
    })
}

fn project_activity(a: &ActivityItem) -> ActivityView {
    ActivityView {
        title: a.title.clone(),
        subtitle: a.subtitle.clone(),
        avatar_url: a.avatar_url.clone(),
        detail: a.detail.clone(),
        action: a.action.clone(),
    }
}

fn project_stake(s: &StakePosition) -> StakeView {
    StakeView {
        pool_title: s.pool_title.clone(),
        pool_url: s.pool_url.clone(),
        avatar_url: s.avatar_url.clone(),
        rewards_ratio: s.rewards_ratio,
        fee_amount: s.fee_amount.clone(),
        staked_ratio: s.staked_ratio,
        user_staked_amount: s.user_staked_amount,
        user_rewards_amount: s.user_rewards_amount,
        time_remaining: s.time_remaining.clone(),
    }
}

fn project_vote(v: &VoteRecord) -> VoteView {
    VoteView {
        proposal_title: v.proposal_title.clone(),
        proposal_id: v.proposal_id,
        vote_choice: v.vote_choice,
        summary: v.summary.clone(),
    }
}
