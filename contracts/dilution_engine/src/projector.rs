use crate::error::Error;
use crate::math::percentage_of;
use crate::round_calc::calculate_round;
use crate::storage::{
    AnalysisResult, AnalysisSummary, Holding, OwnershipEntry, RoundSnapshot, Scenario,
    StakeholderClass, EXISTING_SHAREHOLDERS, INVESTOR_SUFFIX, MAX_NAME_LEN, OPTION_POOL,
    PERCENT_100,
};
use soroban_sdk::{Env, Map, String, Vec};

const CLASS_NAME_CAP: usize = MAX_NAME_LEN as usize + INVESTOR_SUFFIX.len();

/// Shares outstanding after every stored round of the scenario
pub fn shares_outstanding(scenario: &Scenario) -> Result<u64, Error> {
    let mut total = scenario.base_shares_outstanding;
    for round in scenario.rounds.iter() {
        total = calculate_round(
            total,
            round.pre_money_valuation,
            round.investment_amount,
            round.option_pool_increase_pct,
        )?
        .total_shares_after;
    }
    Ok(total)
}

/// Fold the scenario's rounds, in stored order, onto its base table
///
/// Every round is re-priced from its inputs so the result never depends on
/// previously computed outputs.
pub fn project(env: &Env, scenario: &Scenario) -> Result<AnalysisResult, Error> {
    let opening = opening_ledger(env, scenario);
    let base_classes = opening.len();
    let mut ledger = opening.clone();

    let base_shares = ledger_total(&ledger)?;
    if base_shares == 0 {
        return Err(Error::DivisionByZero);
    }

    let mut starting_pcts: Vec<i128> = Vec::new(env);
    for class in ledger.iter() {
        starting_pcts.push_back(percentage_of(class.shares, base_shares)?);
    }

    let option_pool = String::from_str(env, OPTION_POOL);
    let mut round_snapshots = Vec::new(env);
    let mut total_shares = base_shares;
    let mut total_capital_raised: i128 = 0;
    let mut final_valuation = scenario.base_valuation;

    for round in scenario.rounds.iter() {
        let outcome = calculate_round(
            total_shares,
            round.pre_money_valuation,
            round.investment_amount,
            round.option_pool_increase_pct,
        )?;

        if outcome.pool_shares_added > 0 {
            top_up(&mut ledger, &option_pool, outcome.pool_shares_added)?;
        }
        let investor_class = investor_class_name(env, &round.round_name)?;
        top_up(&mut ledger, &investor_class, outcome.new_shares_issued)?;

        total_shares = outcome.total_shares_after;
        total_capital_raised = total_capital_raised
            .checked_add(round.investment_amount)
            .ok_or(Error::ArithmeticOverflow)?;
        final_valuation = outcome.post_money_valuation;

        round_snapshots.push_back(RoundSnapshot {
            round_index: round.round_index,
            round_name: round.round_name.clone(),
            pool_shares_added: outcome.pool_shares_added,
            new_shares_issued: outcome.new_shares_issued,
            total_shares,
            cumulative_dilution_pct: PERCENT_100 - percentage_of(base_shares, total_shares)?,
            holdings: holdings(env, &ledger, total_shares)?,
        });
    }

    let mut final_ownership = Map::new(env);
    for (i, class) in ledger.iter().enumerate() {
        let i = i as u32;
        let percentage = percentage_of(class.shares, total_shares)?;
        // Pre-existing classes are measured on their opening block, so a
        // topped-up pool still reports the dilution of what it started with
        let total_dilution = if i < base_classes {
            let opening_shares = opening.get_unchecked(i).shares;
            starting_pcts.get_unchecked(i) - percentage_of(opening_shares, total_shares)?
        } else {
            0
        };

        final_ownership.set(
            class.name,
            OwnershipEntry {
                shares: class.shares,
                percentage,
                total_dilution,
            },
        );
    }

    Ok(AnalysisResult {
        scenario_id: scenario.scenario_id,
        summary: AnalysisSummary {
            total_rounds: scenario.rounds.len(),
            total_capital_raised,
            final_valuation,
            total_dilution_pct: PERCENT_100 - percentage_of(base_shares, total_shares)?,
            final_shares_outstanding: total_shares,
        },
        final_ownership,
        round_snapshots,
    })
}

/// Class that receives a round's new shares, e.g. "Series A Investors"
pub fn investor_class_name(env: &Env, round_name: &String) -> Result<String, Error> {
    let len = round_name.len() as usize;
    if len == 0 || len > MAX_NAME_LEN as usize {
        return Err(Error::InvalidRound);
    }

    let suffix = INVESTOR_SUFFIX.as_bytes();
    let mut buf = [0u8; CLASS_NAME_CAP];
    round_name.copy_into_slice(&mut buf[..len]);
    buf[len..len + suffix.len()].copy_from_slice(suffix);

    let name =
        core::str::from_utf8(&buf[..len + suffix.len()]).map_err(|_| Error::InvalidRound)?;
    Ok(String::from_str(env, name))
}

fn opening_ledger(env: &Env, scenario: &Scenario) -> Vec<StakeholderClass> {
    if !scenario.base_table.is_empty() {
        return scenario.base_table.clone();
    }

    let mut ledger = Vec::new(env);
    ledger.push_back(StakeholderClass {
        name: String::from_str(env, EXISTING_SHAREHOLDERS),
        shares: scenario.base_shares_outstanding,
    });
    ledger
}

fn ledger_total(ledger: &Vec<StakeholderClass>) -> Result<u64, Error> {
    ledger.iter().try_fold(0u64, |acc, class| {
        acc.checked_add(class.shares).ok_or(Error::ArithmeticOverflow)
    })
}

fn top_up(ledger: &mut Vec<StakeholderClass>, name: &String, shares: u64) -> Result<(), Error> {
    for i in 0..ledger.len() {
        let mut class = ledger.get_unchecked(i);
        if class.name == *name {
            class.shares = class
                .shares
                .checked_add(shares)
                .ok_or(Error::ArithmeticOverflow)?;
            ledger.set(i, class);
            return Ok(());
        }
    }

    ledger.push_back(StakeholderClass {
        name: name.clone(),
        shares,
    });
    Ok(())
}

fn holdings(
    env: &Env,
    ledger: &Vec<StakeholderClass>,
    total_shares: u64,
) -> Result<Vec<Holding>, Error> {
    let mut out = Vec::new(env);
    for class in ledger.iter() {
        out.push_back(Holding {
            percentage: percentage_of(class.shares, total_shares)?,
            name: class.name,
            shares: class.shares,
        });
    }
    Ok(out)
}
