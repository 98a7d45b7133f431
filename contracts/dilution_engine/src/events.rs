use soroban_sdk::{contracttype, Address, String};

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ScenarioCreatedEvent {
    pub scenario_id: u64,
    pub name: String,
    pub base_valuation: i128,
    pub base_shares_outstanding: u64,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RoundAddedEvent {
    pub scenario_id: u64,
    pub round_index: u32,
    pub investment_amount: i128,
    pub post_money_valuation: i128,
    pub price_per_share: i128,
    pub new_shares_issued: u64,
    pub pool_shares_added: u64,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ScenarioDeletedEvent {
    pub scenario_id: u64,
    pub round_count: u32,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PauseChangedEvent {
    pub admin: Address,
    pub paused: bool,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct LimitsUpdatedEvent {
    pub max_rounds: u32,
    pub max_scenarios: u32,
}
