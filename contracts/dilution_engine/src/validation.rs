use crate::error::Error;
use crate::storage::{
    RoundInput, StakeholderClass, MAX_DESCRIPTION_LEN, MAX_NAME_LEN, PERCENT_100,
};
use soroban_sdk::{String, Vec};

/// Check the numeric terms of a round
///
/// A zero pre-money valuation is rejected rather than priced off the
/// previous post-money.
pub fn validate_round_terms(
    pre_money_valuation: i128,
    investment_amount: i128,
    option_pool_increase_pct: i128,
) -> Result<(), Error> {
    if investment_amount <= 0 {
        return Err(Error::InvalidRound);
    }

    if !(0..=PERCENT_100).contains(&option_pool_increase_pct) {
        return Err(Error::InvalidRound);
    }

    if pre_money_valuation <= 0 {
        return Err(Error::InvalidRound);
    }

    Ok(())
}

pub fn validate_round_input(round: &RoundInput) -> Result<(), Error> {
    if round.round_name.is_empty() || round.round_name.len() > MAX_NAME_LEN {
        return Err(Error::InvalidRound);
    }

    validate_round_terms(
        round.pre_money_valuation,
        round.investment_amount,
        round.option_pool_increase_pct,
    )
}

pub fn validate_scenario_params(
    name: &String,
    description: &String,
    base_valuation: i128,
    base_shares_outstanding: u64,
) -> Result<(), Error> {
    if name.is_empty() || name.len() > MAX_NAME_LEN {
        return Err(Error::InvalidScenario);
    }

    if description.len() > MAX_DESCRIPTION_LEN {
        return Err(Error::InvalidScenario);
    }

    if base_valuation <= 0 || base_shares_outstanding == 0 {
        return Err(Error::InvalidScenario);
    }

    Ok(())
}

/// Validate a base ownership table and return its share total
///
/// Names must be non-empty and unique; the total must be positive.
pub fn validate_base_table(table: &Vec<StakeholderClass>) -> Result<u64, Error> {
    if table.is_empty() {
        return Err(Error::InvalidScenario);
    }

    let mut total: u64 = 0;
    for (i, class) in table.iter().enumerate() {
        if class.name.is_empty() || class.name.len() > MAX_NAME_LEN {
            return Err(Error::InvalidScenario);
        }

        if table
            .iter()
            .skip(i + 1)
            .any(|other| other.name == class.name)
        {
            return Err(Error::InvalidScenario);
        }

        total = total
            .checked_add(class.shares)
            .ok_or(Error::ArithmeticOverflow)?;
    }

    if total == 0 {
        return Err(Error::InvalidScenario);
    }

    Ok(total)
}

/// Reject an investor class that would merge into a pre-existing base class
///
/// A round's shares only ever land in classes the rounds themselves created,
/// so base classes keep a meaningful starting percentage.
pub fn validate_investor_class(
    base_table: &Vec<StakeholderClass>,
    investor_class: &String,
) -> Result<(), Error> {
    if base_table.iter().any(|class| class.name == *investor_class) {
        return Err(Error::InvalidRound);
    }

    Ok(())
}

pub fn validate_limits(max_rounds: u32, max_scenarios: u32) -> Result<(), Error> {
    if max_rounds == 0 || max_scenarios == 0 {
        return Err(Error::InvalidLimits);
    }

    Ok(())
}
