//! Fixed planning assumptions behind the corpus calculation and the
//! suggestion thresholds

/// Fraction of pre-retirement income needed after retirement
pub const REPLACEMENT_RATIO: f64 = 0.7;

/// Real annual return once retired, used to capitalise the income need
pub const POST_RETIREMENT_RETURN_RATE: f64 = 0.04;

/// Expected length of retirement in years.
///
/// Not used by the corpus formula, which capitalises the income need as a
/// perpetuity. A finite-horizon annuity over this many years was probably
/// intended; kept for reference so the figures stay comparable with
/// earlier assessments.
pub const YEARS_OF_RETIREMENT: u32 = 30;

/// Annual spend above this share of income counts as expense pressure
pub const EXPENSE_PRESSURE_RATIO: f64 = 0.8;

/// Fewer years than this to retirement is a short horizon
pub const SHORT_HORIZON_YEARS: i32 = 10;

/// More years than this to retirement is a long horizon
pub const LONG_HORIZON_YEARS: i32 = 25;

/// Below this age, early-start advice applies
pub const EARLY_SAVER_AGE: i32 = 40;

/// Above this age, capital preservation advice applies
pub const PRESERVATION_AGE: i32 = 50;

/// Container for the planning assumptions
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlanningAssumptions {
    pub replacement_ratio: f64,
    pub post_retirement_return_rate: f64,
    pub expense_pressure_ratio: f64,
    pub short_horizon_years: i32,
    pub long_horizon_years: i32,
    pub early_saver_age: i32,
    pub preservation_age: i32,
}

impl PlanningAssumptions {
    /// The standard assumption set used for every evaluation
    pub const fn standard() -> Self {
        Self {
            replacement_ratio: REPLACEMENT_RATIO,
            post_retirement_return_rate: POST_RETIREMENT_RETURN_RATE,
            expense_pressure_ratio: EXPENSE_PRESSURE_RATIO,
            short_horizon_years: SHORT_HORIZON_YEARS,
            long_horizon_years: LONG_HORIZON_YEARS,
            early_saver_age: EARLY_SAVER_AGE,
            preservation_age: PRESERVATION_AGE,
        }
    }

    /// Annual spend above the pressure share of income
    pub fn under_expense_pressure(&self, annual_spend: f64, income: f64) -> bool {
        annual_spend > income * self.expense_pressure_ratio
    }

    /// Compound inflation over the accumulation horizon: (1 + i)^n
    pub fn inflation_factor(&self, inflation_rate: f64, years: i32) -> f64 {
        (1.0 + inflation_rate).powi(years)
    }

    /// Income needed in the first year of retirement, in future money
    pub fn required_income(&self, income: f64, inflation_factor: f64) -> f64 {
        income * self.replacement_ratio * inflation_factor
    }

    /// Lump sum that sustains `annual_income` indefinitely at the post-retirement return
    pub fn capitalise(&self, annual_income: f64) -> f64 {
        annual_income / self.post_retirement_return_rate
    }
}

impl Default for PlanningAssumptions {
    fn default() -> Self {
        Self::standard()
    }
}
