use crate::storage::{
    RoundInput, RoundType, ScenarioTemplate, StakeholderClass, OPTION_POOL, SCALE,
};
use soroban_sdk::{vec, Env, String, Vec};

/// Base table and rounds a template scenario starts from
pub struct TemplateSeed {
    pub name: String,
    pub description: String,
    pub base_valuation: i128,
    pub base_table: Vec<StakeholderClass>,
    pub rounds: Vec<RoundInput>,
}

pub fn template_seed(env: &Env, template: ScenarioTemplate) -> TemplateSeed {
    match template {
        ScenarioTemplate::SeedToSeriesA => TemplateSeed {
            name: String::from_str(env, "Seed to Series A"),
            description: String::from_str(
                env,
                "Founders and pool through a priced seed and a Series A with a pool top-up",
            ),
            base_valuation: 8_000_000 * SCALE,
            base_table: vec![
                env,
                class(env, "Founders", 8_000_000),
                class(env, OPTION_POOL, 1_000_000),
            ],
            rounds: vec![
                env,
                round(env, "Seed", RoundType::Seed, 8_000_000, 2_000_000, 0),
                round(env, "Series A", RoundType::SeriesA, 30_000_000, 10_000_000, 10),
            ],
        },
        ScenarioTemplate::SeriesAToSeriesC => TemplateSeed {
            name: String::from_str(env, "Series A to Series C"),
            description: String::from_str(
                env,
                "Post-seed table raising three priced rounds",
            ),
            base_valuation: 20_000_000 * SCALE,
            base_table: vec![
                env,
                class(env, "Founders", 6_000_000),
                class(env, "Seed Investors", 2_000_000),
                class(env, OPTION_POOL, 2_000_000),
            ],
            rounds: vec![
                env,
                round(env, "Series A", RoundType::SeriesA, 20_000_000, 5_000_000, 5),
                round(env, "Series B", RoundType::SeriesB, 80_000_000, 20_000_000, 5),
                round(env, "Series C", RoundType::SeriesC, 300_000_000, 60_000_000, 0),
            ],
        },
    }
}

fn class(env: &Env, name: &str, shares: u64) -> StakeholderClass {
    StakeholderClass {
        name: String::from_str(env, name),
        shares,
    }
}

// Valuations in whole currency units, pool in whole percent
fn round(
    env: &Env,
    name: &str,
    round_type: RoundType,
    pre_money: i128,
    investment: i128,
    pool_pct: i128,
) -> RoundInput {
    RoundInput {
        round_name: String::from_str(env, name),
        round_type,
        pre_money_valuation: pre_money * SCALE,
        investment_amount: investment * SCALE,
        option_pool_increase_pct: pool_pct * SCALE,
    }
}
