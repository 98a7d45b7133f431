#![no_std]

mod error;
mod events;
mod math;
mod option_pool;
mod projector;
mod round_calc;
mod storage;
mod templates;
mod validation;


pub use error::Error;
pub use storage::{
    AnalysisResult, AnalysisSummary, FundingRound, Holding, Limits, OwnershipEntry,
    QuickSimulation, QuickSimulationResult, RoundInput, RoundSnapshot, RoundType, Scenario,
    ScenarioSummary, ScenarioTemplate, StakeholderClass, PERCENT_100, SCALE,
};

use events::*;
use round_calc::calculate_round;
use storage::DataKey;
use templates::template_seed;
use validation::{
    validate_base_table, validate_investor_class, validate_limits, validate_round_input,
    validate_scenario_params,
};

use soroban_sdk::{contract, contractimpl, log, Address, Env, String, Symbol, Vec};

#[contract]
pub struct DilutionEngine;

#[contractimpl]
impl DilutionEngine {
    // ============================================
    // INITIALIZATION & ADMIN
    // ============================================

    /// Initialize the engine
    ///
    /// # Errors
    /// - `AlreadyInitialized`: Contract already initialized
    /// - `InvalidLimits`: Either limit is zero
    pub fn initialize(
        env: Env,
        admin: Address,
        max_rounds: u32,
        max_scenarios: u32,
    ) -> Result<(), Error> {
        if storage::is_initialized(&env) {
            return Err(Error::AlreadyInitialized);
        }
        validate_limits(max_rounds, max_scenarios)?;

        admin.require_auth();

        env.storage().instance().set(&DataKey::Initialized, &true);
        env.storage().instance().set(&DataKey::Admin, &admin);
        env.storage().instance().set(&DataKey::ScenarioCounter, &0u64);
        storage::set_paused(&env, false);
        storage::set_limits(
            &env,
            &Limits {
                max_rounds,
                max_scenarios,
            },
        );

        Ok(())
    }

    /// Pause scenario mutations
    ///
    /// # Errors
    /// - `NotInitialized`: Contract not initialized
    pub fn pause(env: Env) -> Result<(), Error> {
        Self::set_pause_flag(&env, true)
    }

    /// Resume scenario mutations
    ///
    /// # Errors
    /// - `NotInitialized`: Contract not initialized
    pub fn unpause(env: Env) -> Result<(), Error> {
        Self::set_pause_flag(&env, false)
    }

    /// Update the per-scenario round limit and the scenario limit
    ///
    /// Lowering a limit does not touch scenarios already over it; they only
    /// stop accepting new rounds.
    ///
    /// # Errors
    /// - `NotInitialized`: Contract not initialized
    /// - `InvalidLimits`: Either limit is zero
    pub fn set_limits(env: Env, max_rounds: u32, max_scenarios: u32) -> Result<(), Error> {
        let admin = storage::get_admin(&env).ok_or(Error::NotInitialized)?;
        admin.require_auth();
        validate_limits(max_rounds, max_scenarios)?;

        storage::set_limits(
            &env,
            &Limits {
                max_rounds,
                max_scenarios,
            },
        );

        env.events().publish(
            (Symbol::new(&env, "limits_updated"),),
            LimitsUpdatedEvent {
                max_rounds,
                max_scenarios,
            },
        );

        Ok(())
    }

    pub fn get_limits(env: Env) -> Limits {
        storage::get_limits(&env)
    }

    pub fn is_paused(env: Env) -> bool {
        storage::is_paused(&env)
    }

    // ============================================
    // SCENARIO LIFECYCLE
    // ============================================

    /// Create a scenario whose base shares form one "Existing Shareholders" class
    ///
    /// # Errors
    /// - `NotInitialized`: Contract not initialized
    /// - `ContractPaused`: Contract is paused
    /// - `InvalidScenario`: Empty or long name, long description, non-positive base values
    /// - `TooManyScenarios`: Store is at its scenario limit
    pub fn create_scenario(
        env: Env,
        name: String,
        description: String,
        base_valuation: i128,
        base_shares_outstanding: u64,
    ) -> Result<Scenario, Error> {
        Self::check_active(&env)?;

        Self::insert_scenario(
            &env,
            name,
            description,
            base_valuation,
            base_shares_outstanding,
            Vec::new(&env),
        )
    }

    /// Create a scenario from an explicit base ownership table
    ///
    /// Base shares outstanding are the sum of the table.
    ///
    /// # Errors
    /// - `NotInitialized`: Contract not initialized
    /// - `ContractPaused`: Contract is paused
    /// - `InvalidScenario`: Bad name, empty table, duplicate class names, zero total
    /// - `TooManyScenarios`: Store is at its scenario limit
    pub fn create_scenario_with_table(
        env: Env,
        name: String,
        description: String,
        base_valuation: i128,
        base_table: Vec<StakeholderClass>,
    ) -> Result<Scenario, Error> {
        Self::check_active(&env)?;

        let base_shares_outstanding = validate_base_table(&base_table)?;
        Self::insert_scenario(
            &env,
            name,
            description,
            base_valuation,
            base_shares_outstanding,
            base_table,
        )
    }

    /// Create a scenario seeded with a preset base table and rounds
    ///
    /// # Errors
    /// - `NotInitialized`: Contract not initialized
    /// - `ContractPaused`: Contract is paused
    /// - `TooManyScenarios`: Store is at its scenario limit
    /// - `TooManyRounds`: Template has more rounds than the configured limit
    pub fn create_from_template(env: Env, template: ScenarioTemplate) -> Result<Scenario, Error> {
        Self::check_active(&env)?;

        let seed = template_seed(&env, template);
        let base_shares_outstanding = validate_base_table(&seed.base_table)?;
        let mut scenario = Self::insert_scenario(
            &env,
            seed.name,
            seed.description,
            seed.base_valuation,
            base_shares_outstanding,
            seed.base_table,
        )?;

        for round in seed.rounds.iter() {
            Self::append_round(&env, &mut scenario, round)?;
        }
        storage::set_scenario(&env, &scenario);

        Ok(scenario)
    }

    /// Price a round against the scenario's current shares and append it
    ///
    /// Rounds are append-only: there is no operation to edit or remove a
    /// single round. A rejected round leaves the stored list unchanged.
    ///
    /// # Errors
    /// - `NotInitialized`: Contract not initialized
    /// - `ContractPaused`: Contract is paused
    /// - `ScenarioNotFound`: Unknown scenario ID
    /// - `TooManyRounds`: Scenario is at its round limit
    /// - `InvalidRound`: Bad name, non-positive investment or pre-money, pool outside 0-100%,
    ///   or the round's investor class would merge into a base-table class
    /// - `DivisionByZero`: No shares outstanding
    pub fn add_round(env: Env, scenario_id: u64, round: RoundInput) -> Result<FundingRound, Error> {
        Self::check_active(&env)?;

        let mut scenario =
            storage::get_scenario(&env, scenario_id).ok_or(Error::ScenarioNotFound)?;

        let funding_round = Self::append_round(&env, &mut scenario, round)?;
        storage::set_scenario(&env, &scenario);

        Ok(funding_round)
    }

    /// Project every round of the scenario onto its base table
    ///
    /// Recomputed on each call; nothing is cached or written.
    ///
    /// # Errors
    /// - `ScenarioNotFound`: Unknown scenario ID
    pub fn analyze(env: Env, scenario_id: u64) -> Result<AnalysisResult, Error> {
        let scenario = storage::get_scenario(&env, scenario_id).ok_or(Error::ScenarioNotFound)?;

        let result = projector::project(&env, &scenario)?;
        log!(
            &env,
            "analyzed scenario",
            scenario_id,
            result.summary.total_rounds,
            result.summary.total_dilution_pct
        );

        Ok(result)
    }

    /// Delete a scenario together with all of its rounds
    ///
    /// # Errors
    /// - `NotInitialized`: Contract not initialized
    /// - `ContractPaused`: Contract is paused
    /// - `ScenarioNotFound`: Unknown scenario ID
    pub fn delete_scenario(env: Env, scenario_id: u64) -> Result<(), Error> {
        Self::check_active(&env)?;

        let scenario = storage::get_scenario(&env, scenario_id).ok_or(Error::ScenarioNotFound)?;

        storage::remove_scenario(&env, scenario_id);

        let mut ids = storage::get_scenario_ids(&env);
        if let Some(position) = ids.first_index_of(scenario_id) {
            ids.remove(position);
        }
        storage::set_scenario_ids(&env, &ids);

        env.events().publish(
            (Symbol::new(&env, "scenario_deleted"), scenario_id),
            ScenarioDeletedEvent {
                scenario_id,
                round_count: scenario.rounds.len(),
            },
        );

        Ok(())
    }

    // ============================================
    // VIEW FUNCTIONS
    // ============================================

    /// List scenarios in creation order, without their rounds
    pub fn list_scenarios(env: Env) -> Vec<ScenarioSummary> {
        let mut summaries = Vec::new(&env);
        for scenario_id in storage::get_scenario_ids(&env).iter() {
            if let Some(scenario) = storage::get_scenario(&env, scenario_id) {
                summaries.push_back(ScenarioSummary {
                    scenario_id,
                    round_count: scenario.rounds.len(),
                    name: scenario.name,
                    description: scenario.description,
                    base_valuation: scenario.base_valuation,
                    base_shares_outstanding: scenario.base_shares_outstanding,
                });
            }
        }
        summaries
    }

    /// Get a scenario with its full round list
    pub fn get_scenario(env: Env, scenario_id: u64) -> Result<Scenario, Error> {
        storage::get_scenario(&env, scenario_id).ok_or(Error::ScenarioNotFound)
    }

    /// Price one round without touching storage
    ///
    /// # Errors
    /// - `InvalidRound`: Non-positive investment or pre-money, pool outside 0-100%
    /// - `DivisionByZero`: `current_shares` is zero
    pub fn simulate_quick(
        _env: Env,
        simulation: QuickSimulation,
    ) -> Result<QuickSimulationResult, Error> {
        let outcome = calculate_round(
            simulation.current_shares,
            simulation.pre_money_valuation,
            simulation.investment_amount,
            simulation.option_pool_increase_pct,
        )?;

        Ok(QuickSimulationResult {
            price_per_share: outcome.price_per_share,
            new_shares_issued: outcome.new_shares_issued,
            pool_shares_added: outcome.pool_shares_added,
            post_money_valuation: outcome.post_money_valuation,
            dilution_percentage: outcome.dilution_pct,
            new_investor_ownership_pct: outcome.new_investor_ownership_pct,
            existing_ownership_pct: outcome.existing_ownership_pct,
            is_down_round: simulation.pre_money_valuation < simulation.current_valuation,
        })
    }

    // ============================================
    // INTERNAL HELPERS
    // ============================================

    fn check_active(env: &Env) -> Result<(), Error> {
        if !storage::is_initialized(env) {
            return Err(Error::NotInitialized);
        }

        if storage::is_paused(env) {
            return Err(Error::ContractPaused);
        }
        Ok(())
    }

    fn set_pause_flag(env: &Env, paused: bool) -> Result<(), Error> {
        let admin = storage::get_admin(env).ok_or(Error::NotInitialized)?;
        admin.require_auth();

        storage::set_paused(env, paused);

        let topic = if paused { "paused" } else { "unpaused" };
        env.events().publish(
            (Symbol::new(env, topic),),
            PauseChangedEvent { admin, paused },
        );

        Ok(())
    }

    fn insert_scenario(
        env: &Env,
        name: String,
        description: String,
        base_valuation: i128,
        base_shares_outstanding: u64,
        base_table: Vec<StakeholderClass>,
    ) -> Result<Scenario, Error> {
        validate_scenario_params(&name, &description, base_valuation, base_shares_outstanding)?;

        let mut ids = storage::get_scenario_ids(env);
        if ids.len() >= storage::get_limits(env).max_scenarios {
            return Err(Error::TooManyScenarios);
        }

        let scenario = Scenario {
            scenario_id: storage::next_scenario_id(env),
            name,
            description,
            base_valuation,
            base_shares_outstanding,
            base_table,
            rounds: Vec::new(env),
            created_at: env.ledger().timestamp(),
        };

        storage::set_scenario(env, &scenario);
        ids.push_back(scenario.scenario_id);
        storage::set_scenario_ids(env, &ids);

        env.events().publish(
            (Symbol::new(env, "scenario_created"), scenario.scenario_id),
            ScenarioCreatedEvent {
                scenario_id: scenario.scenario_id,
                name: scenario.name.clone(),
                base_valuation,
                base_shares_outstanding,
            },
        );

        Ok(scenario)
    }

    // Mutates the in-memory scenario only; callers persist it
    fn append_round(
        env: &Env,
        scenario: &mut Scenario,
        round: RoundInput,
    ) -> Result<FundingRound, Error> {
        if scenario.rounds.len() >= storage::get_limits(env).max_rounds {
            return Err(Error::TooManyRounds);
        }

        validate_round_input(&round)?;
        let investor_class = projector::investor_class_name(env, &round.round_name)?;
        validate_investor_class(&scenario.base_table, &investor_class)?;

        let current_shares = projector::shares_outstanding(scenario)?;
        let outcome = calculate_round(
            current_shares,
            round.pre_money_valuation,
            round.investment_amount,
            round.option_pool_increase_pct,
        )?;

        let funding_round = FundingRound {
            round_index: scenario.rounds.len(),
            round_name: round.round_name,
            round_type: round.round_type,
            pre_money_valuation: round.pre_money_valuation,
            investment_amount: round.investment_amount,
            option_pool_increase_pct: round.option_pool_increase_pct,
            post_money_valuation: outcome.post_money_valuation,
            price_per_share: outcome.price_per_share,
            pool_shares_added: outcome.pool_shares_added,
            new_shares_issued: outcome.new_shares_issued,
            new_investor_ownership_pct: outcome.new_investor_ownership_pct,
            existing_ownership_pct: outcome.existing_ownership_pct,
        };
        scenario.rounds.push_back(funding_round.clone());

        log!(
            env,
            "round priced",
            scenario.scenario_id,
            current_shares,
            outcome.new_shares_issued
        );

        env.events().publish(
            (Symbol::new(env, "round_added"), scenario.scenario_id),
            RoundAddedEvent {
                scenario_id: scenario.scenario_id,
                round_index: funding_round.round_index,
                investment_amount: funding_round.investment_amount,
                post_money_valuation: funding_round.post_money_valuation,
                price_per_share: funding_round.price_per_share,
                new_shares_issued: funding_round.new_shares_issued,
                pool_shares_added: funding_round.pool_shares_added,
            },
        );

        Ok(funding_round)
    }
}
