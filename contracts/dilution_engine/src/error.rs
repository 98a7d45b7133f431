use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Error {
    // ============================================
    // INITIALIZATION ERRORS (1-5)
    // ============================================
    /// Contract already initialized
    AlreadyInitialized = 1,
    /// Contract not initialized
    NotInitialized = 2,
    /// Round or scenario limit of zero
    InvalidLimits = 3,

    // ============================================
    // SCENARIO ERRORS (20-29)
    // ============================================
    /// Scenario not found
    ScenarioNotFound = 20,
    /// Base valuation, base shares, name or base table rejected
    InvalidScenario = 21,
    /// Scenario already holds the configured maximum number of rounds
    TooManyRounds = 22,
    /// Store already holds the configured maximum number of scenarios
    TooManyScenarios = 23,

    // ============================================
    // ROUND ERRORS (30-39)
    // ============================================
    /// Non-positive investment or pre-money, pool percentage out of range
    InvalidRound = 30,
    /// Zero shares outstanding when the round is priced
    DivisionByZero = 31,

    // ============================================
    // ARITHMETIC ERRORS (40-49)
    // ============================================
    /// Fixed-point intermediate exceeded i128 or a share count exceeded u64
    ArithmeticOverflow = 40,

    // ============================================
    // OPERATIONAL ERRORS (50-59)
    // ============================================
    /// Contract is paused
    ContractPaused = 50,
}
