use soroban_sdk::{contracttype, Address, Env, Map, String, Vec};

// Constants
pub const SCALE: i128 = 10_000_000; // 7 decimals
pub const PERCENT_100: i128 = 100 * SCALE; // 100.0000000%

pub const DEFAULT_MAX_ROUNDS: u32 = 20;
pub const DEFAULT_MAX_SCENARIOS: u32 = 100;

pub const MAX_NAME_LEN: u32 = 48;
pub const MAX_DESCRIPTION_LEN: u32 = 256;

pub const EXISTING_SHAREHOLDERS: &str = "Existing Shareholders";
pub const OPTION_POOL: &str = "Option Pool";
pub const INVESTOR_SUFFIX: &str = " Investors";

/// Descriptive label of a round, has no effect on the math
#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum RoundType {
    PreSeed = 0,
    Seed = 1,
    SeriesA = 2,
    SeriesB = 3,
    SeriesC = 4,
    Bridge = 5,
}

/// Preset scenarios for `create_from_template`
#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ScenarioTemplate {
    /// Founders plus pool, priced seed then Series A with a pool top-up
    SeedToSeriesA = 0,
    /// Post-seed table raising Series A through Series C
    SeriesAToSeriesC = 1,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct StakeholderClass {
    /// Unique within a scenario
    pub name: String,
    pub shares: u64,
}

/// A stakeholder class at a point in time
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Holding {
    pub name: String,
    pub shares: u64,
    /// Percentage points scaled by SCALE
    pub percentage: i128,
}

/// Caller-supplied round parameters
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RoundInput {
    pub round_name: String,
    pub round_type: RoundType,
    /// Scaled currency, must be positive
    pub pre_money_valuation: i128,
    /// Scaled currency, must be positive
    pub investment_amount: i128,
    /// Percentage points scaled by SCALE, 0..=PERCENT_100
    pub option_pool_increase_pct: i128,
}

/// A priced round as stored on its scenario
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct FundingRound {
    /// Zero-based position in the scenario
    pub round_index: u32,
    pub round_name: String,
    pub round_type: RoundType,
    pub pre_money_valuation: i128,
    pub investment_amount: i128,
    pub option_pool_increase_pct: i128,
    pub post_money_valuation: i128,
    pub price_per_share: i128,
    pub pool_shares_added: u64,
    pub new_shares_issued: u64,
    pub new_investor_ownership_pct: i128,
    pub existing_ownership_pct: i128,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Scenario {
    pub scenario_id: u64,
    pub name: String,
    pub description: String,
    pub base_valuation: i128,
    pub base_shares_outstanding: u64,
    /// Empty means a single "Existing Shareholders" class
    pub base_table: Vec<StakeholderClass>,
    /// Append-only, insertion order is authoritative
    pub rounds: Vec<FundingRound>,
    pub created_at: u64,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ScenarioSummary {
    pub scenario_id: u64,
    pub name: String,
    pub description: String,
    pub base_valuation: i128,
    pub base_shares_outstanding: u64,
    pub round_count: u32,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct QuickSimulation {
    pub current_shares: u64,
    pub current_valuation: i128,
    pub pre_money_valuation: i128,
    pub investment_amount: i128,
    pub option_pool_increase_pct: i128,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct QuickSimulationResult {
    pub price_per_share: i128,
    pub new_shares_issued: u64,
    pub pool_shares_added: u64,
    pub post_money_valuation: i128,
    /// Ownership lost by pre-round holders, in percentage points
    pub dilution_percentage: i128,
    pub new_investor_ownership_pct: i128,
    pub existing_ownership_pct: i128,
    /// Pre-money below the current valuation
    pub is_down_round: bool,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct OwnershipEntry {
    pub shares: u64,
    pub percentage: i128,
    /// Percentage points lost since the base table, 0 for round-created classes
    pub total_dilution: i128,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RoundSnapshot {
    pub round_index: u32,
    pub round_name: String,
    pub pool_shares_added: u64,
    pub new_shares_issued: u64,
    pub total_shares: u64,
    /// Ownership lost by the base shares so far
    pub cumulative_dilution_pct: i128,
    pub holdings: Vec<Holding>,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AnalysisSummary {
    pub total_rounds: u32,
    pub total_capital_raised: i128,
    pub final_valuation: i128,
    pub total_dilution_pct: i128,
    pub final_shares_outstanding: u64,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AnalysisResult {
    pub scenario_id: u64,
    pub summary: AnalysisSummary,
    pub final_ownership: Map<String, OwnershipEntry>,
    pub round_snapshots: Vec<RoundSnapshot>,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Limits {
    pub max_rounds: u32,
    pub max_scenarios: u32,
}

#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    Admin,
    Initialized,
    Paused,
    MaxRounds,
    MaxScenarios,
    ScenarioCounter,
    ScenarioIds,       // Vec<u64> in creation order
    Scenario(u64),     // Scenario ID → Scenario
}

pub fn get_admin(env: &Env) -> Option<Address> {
    env.storage().instance().get(&DataKey::Admin)
}

pub fn is_initialized(env: &Env) -> bool {
    env.storage().instance().has(&DataKey::Initialized)
}

pub fn is_paused(env: &Env) -> bool {
    env.storage()
        .instance()
        .get::<DataKey, bool>(&DataKey::Paused)
        .unwrap_or(false)
}

pub fn set_paused(env: &Env, paused: bool) {
    env.storage().instance().set(&DataKey::Paused, &paused);
}

pub fn get_limits(env: &Env) -> Limits {
    Limits {
        max_rounds: env
            .storage()
            .instance()
            .get(&DataKey::MaxRounds)
            .unwrap_or(DEFAULT_MAX_ROUNDS),
        max_scenarios: env
            .storage()
            .instance()
            .get(&DataKey::MaxScenarios)
            .unwrap_or(DEFAULT_MAX_SCENARIOS),
    }
}

pub fn set_limits(env: &Env, limits: &Limits) {
    env.storage()
        .instance()
        .set(&DataKey::MaxRounds, &limits.max_rounds);
    env.storage()
        .instance()
        .set(&DataKey::MaxScenarios, &limits.max_scenarios);
}

pub fn next_scenario_id(env: &Env) -> u64 {
    let counter: u64 = env
        .storage()
        .instance()
        .get(&DataKey::ScenarioCounter)
        .unwrap_or(0);
    let next = counter + 1;
    env.storage().instance().set(&DataKey::ScenarioCounter, &next);
    next
}

pub fn get_scenario_ids(env: &Env) -> Vec<u64> {
    env.storage()
        .persistent()
        .get(&DataKey::ScenarioIds)
        .unwrap_or(Vec::new(env))
}

pub fn set_scenario_ids(env: &Env, ids: &Vec<u64>) {
    env.storage().persistent().set(&DataKey::ScenarioIds, ids);
}

pub fn get_scenario(env: &Env, scenario_id: u64) -> Option<Scenario> {
    env.storage()
        .persistent()
        .get(&DataKey::Scenario(scenario_id))
}

pub fn set_scenario(env: &Env, scenario: &Scenario) {
    env.storage()
        .persistent()
        .set(&DataKey::Scenario(scenario.scenario_id), scenario);
}

pub fn remove_scenario(env: &Env, scenario_id: u64) {
    env.storage()
        .persistent()
        .remove(&DataKey::Scenario(scenario_id));
}
