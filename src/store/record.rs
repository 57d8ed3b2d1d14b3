//! One persisted row per evaluation

use crate::evaluation::EvaluationResult;
use crate::profile::{flag_token, EvaluationInput};
use serde::{Deserialize, Serialize};

/// Flattened input + result, column names as they appear in the store header
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvaluationRecord {
    #[serde(rename = "Country")]
    pub country: String,
    #[serde(rename = "Age")]
    pub age: i32,
    #[serde(rename = "Gender")]
    pub gender: String,
    #[serde(rename = "Income")]
    pub income: f64,
    #[serde(rename = "Annual Expenses")]
    pub expenses: f64,
    #[serde(rename = "Assets Cars")]
    pub assets_cars: f64,
    #[serde(rename = "Assets Land")]
    pub assets_land: f64,
    #[serde(rename = "Assets Others")]
    pub assets_others: f64,
    #[serde(rename = "Owns House")]
    pub owns_house: String,
    #[serde(rename = "On Rent")]
    pub on_rent: String,
    #[serde(rename = "Loans/Debts Amount")]
    pub loans_debts_amount: f64,
    #[serde(rename = "Family Members Count")]
    pub family_members_count: u32,
    #[serde(rename = "Dependents Parents")]
    pub dependents_parents: u32,
    #[serde(rename = "Dependents Spouse")]
    pub dependents_spouse: String,
    #[serde(rename = "Dependents Children")]
    pub dependents_children: u32,
    #[serde(rename = "Dependent Health Problems YN")]
    pub dependent_health_problems: String,
    #[serde(rename = "Dependent Health Problems Details")]
    pub dependent_health_problems_details: String,
    #[serde(rename = "Upcoming Big Goals")]
    pub upcoming_big_goals: String,
    #[serde(rename = "Any Health Issues")]
    pub health_issues: String,
    #[serde(rename = "Health Insurance")]
    pub health_insurance: String,
    #[serde(rename = "Health Insurance Amount")]
    pub health_insurance_amount: f64,
    #[serde(rename = "Life Insurance")]
    pub life_insurance: String,
    #[serde(rename = "Life Insurance Amount Total")]
    pub life_insurance_amount_total: f64,
    #[serde(rename = "Monthly Expenses")]
    pub monthly_expenses: f64,
    #[serde(rename = "Pension Contributions")]
    pub pension_contributions: String,
    #[serde(rename = "Pension Contributions Amount")]
    pub pension_contributions_amount: f64,
    #[serde(rename = "Expected Inflation Rate")]
    pub expected_inflation_rate: f64,
    #[serde(rename = "Target Retirement Age")]
    pub retirement_age_target: i32,
    #[serde(rename = "Only Source of Income")]
    pub only_source_of_income: String,

    // Results
    #[serde(rename = "Results Verdict")]
    pub verdict: String,
    #[serde(rename = "Corpus Needed")]
    pub corpus_needed: f64,
    #[serde(rename = "Corpus Available")]
    pub corpus_available: f64,
    #[serde(rename = "Ready")]
    pub ready: bool,
}

/// Column order of the store
pub const HEADER: [&str; 33] = [
    "Country",
    "Age",
    "Gender",
    "Income",
    "Annual Expenses",
    "Assets Cars",
    "Assets Land",
    "Assets Others",
    "Owns House",
    "On Rent",
    "Loans/Debts Amount",
    "Family Members Count",
    "Dependents Parents",
    "Dependents Spouse",
    "Dependents Children",
    "Dependent Health Problems YN",
    "Dependent Health Problems Details",
    "Upcoming Big Goals",
    "Any Health Issues",
    "Health Insurance",
    "Health Insurance Amount",
    "Life Insurance",
    "Life Insurance Amount Total",
    "Monthly Expenses",
    "Pension Contributions",
    "Pension Contributions Amount",
    "Expected Inflation Rate",
    "Target Retirement Age",
    "Only Source of Income",
    "Results Verdict",
    "Corpus Needed",
    "Corpus Available",
    "Ready",
];

impl EvaluationRecord {
    pub fn new(input: &EvaluationInput, result: &EvaluationResult) -> Self {
        Self {
            country: input.country.clone(),
            age: input.age,
            gender: input.gender.as_str().to_string(),
            income: input.income,
            expenses: input.expenses,
            assets_cars: input.assets_cars,
            assets_land: input.assets_land,
            assets_others: input.assets_others,
            owns_house: flag_token(input.owns_house).to_string(),
            on_rent: flag_token(input.on_rent).to_string(),
            loans_debts_amount: input.loans_debts_amount,
            family_members_count: input.family_members_count,
            dependents_parents: input.dependents_parents,
            dependents_spouse: flag_token(input.dependents_spouse).to_string(),
            dependents_children: input.dependents_children,
            dependent_health_problems: flag_token(input.dependent_health_problems).to_string(),
            dependent_health_problems_details: input.dependent_health_problems_details.clone(),
            upcoming_big_goals: input.upcoming_big_goals.clone(),
            health_issues: flag_token(input.health_issues).to_string(),
            health_insurance: flag_token(input.health_insurance).to_string(),
            health_insurance_amount: input.health_insurance_amount,
            life_insurance: flag_token(input.life_insurance).to_string(),
            life_insurance_amount_total: input.life_insurance_amount_total,
            monthly_expenses: input.monthly_expenses,
            pension_contributions: flag_token(input.pension_contributions).to_string(),
            pension_contributions_amount: input.pension_contributions_amount,
            expected_inflation_rate: input.expected_inflation_rate,
            retirement_age_target: input.retirement_age_target,
            only_source_of_income: flag_token(input.only_source_of_income).to_string(),
            verdict: result.verdict.clone(),
            corpus_needed: result.corpus_needed,
            corpus_available: result.corpus_available,
            ready: result.ready,
        }
    }
}
