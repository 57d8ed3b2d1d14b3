//! Profile data structures matching the intake form

use serde::{Deserialize, Serialize};

/// Gender as captured on the intake form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Gender {
    Male,
    Female,
    Other,
}

impl Gender {
    /// Parse a form label; anything that is not "Male" or "Female" is `Other`
    pub fn from_label(label: &str) -> Self {
        match label {
            "Male" => Gender::Male,
            "Female" => Gender::Female,
            _ => Gender::Other,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Gender::Male => "Male",
            Gender::Female => "Female",
            Gender::Other => "Other",
        }
    }
}

/// Yes/no fields that arrive as "Y"/"N" tokens from the outside world
///
/// Declaration order is the order in which tokens are validated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Flag {
    OwnsHouse,
    OnRent,
    DependentHealthProblems,
    HealthIssues,
    HealthInsurance,
    LifeInsurance,
    PensionContributions,
    OnlySourceOfIncome,
    DependentsSpouse,
}

impl Flag {
    /// Validation order for submitted tokens
    pub const ALL: [Flag; 9] = [
        Flag::OwnsHouse,
        Flag::OnRent,
        Flag::DependentHealthProblems,
        Flag::HealthIssues,
        Flag::HealthInsurance,
        Flag::LifeInsurance,
        Flag::PensionContributions,
        Flag::OnlySourceOfIncome,
        Flag::DependentsSpouse,
    ];

    /// Human-readable field label used in error messages
    pub fn label(&self) -> &'static str {
        match self {
            Flag::OwnsHouse => "Owns a House",
            Flag::OnRent => "On Rent",
            Flag::DependentHealthProblems => "Dependent Health Problems",
            Flag::HealthIssues => "Health Issues",
            Flag::HealthInsurance => "Health Insurance",
            Flag::LifeInsurance => "Life Insurance",
            Flag::PensionContributions => "Pension Contributions",
            Flag::OnlySourceOfIncome => "Only Source of Income",
            Flag::DependentsSpouse => "Dependents Spouse",
        }
    }
}

/// Render a boolean as the external "Y"/"N" token
pub fn flag_token(value: bool) -> &'static str {
    if value {
        "Y"
    } else {
        "N"
    }
}

/// Parse an external token; only the exact strings "Y" and "N" are accepted
pub fn parse_flag_token(token: &str) -> Option<bool> {
    match token {
        "Y" => Some(true),
        "N" => Some(false),
        _ => None,
    }
}

/// A validated-type personal finance profile, one per user submission
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvaluationInput {
    // Demographics
    pub age: i32,
    pub gender: Gender,
    pub country: String,

    // Cash flow
    pub income: f64,
    pub expenses: f64,
    pub monthly_expenses: f64,

    // Assets and liabilities
    pub assets_cars: f64,
    pub assets_land: f64,
    pub assets_others: f64,
    pub loans_debts_amount: f64,

    // Housing
    pub owns_house: bool,
    pub on_rent: bool,

    // Household
    pub family_members_count: u32,
    pub dependents_parents: u32,
    pub dependents_spouse: bool,
    pub dependents_children: u32,
    pub dependent_health_problems: bool,
    pub dependent_health_problems_details: String,
    pub upcoming_big_goals: String,

    // Insurance and pension
    pub health_issues: bool,
    pub health_insurance: bool,
    pub health_insurance_amount: f64,
    pub life_insurance: bool,
    pub life_insurance_amount_total: f64,
    pub pension_contributions: bool,
    pub pension_contributions_amount: f64,

    // Planning parameters
    /// Annual inflation as a fraction (0.06 = 6%)
    pub expected_inflation_rate: f64,
    pub retirement_age_target: i32,
    pub only_source_of_income: bool,
}

impl EvaluationInput {
    /// Cars + land + other assets
    pub fn total_assets(&self) -> f64 {
        self.assets_cars + self.assets_land + self.assets_others
    }

    /// Net liquidable worth today: assets minus debts, not grown forward
    pub fn net_worth(&self) -> f64 {
        self.total_assets() - self.loans_debts_amount
    }

    /// Years between current age and the target retirement age
    pub fn years_to_retirement(&self) -> i32 {
        self.retirement_age_target.saturating_sub(self.age)
    }

    /// Current state of a yes/no field
    pub fn flag(&self, flag: Flag) -> bool {
        match flag {
            Flag::OwnsHouse => self.owns_house,
            Flag::OnRent => self.on_rent,
            Flag::DependentHealthProblems => self.dependent_health_problems,
            Flag::HealthIssues => self.health_issues,
            Flag::HealthInsurance => self.health_insurance,
            Flag::LifeInsurance => self.life_insurance,
            Flag::PensionContributions => self.pension_contributions,
            Flag::OnlySourceOfIncome => self.only_source_of_income,
            Flag::DependentsSpouse => self.dependents_spouse,
        }
    }
}

/// Defaults mirror the initial values of the intake form
impl Default for EvaluationInput {
    fn default() -> Self {
        Self {
            age: 40,
            gender: Gender::Male,
            country: "USA".to_string(),
            income: 500_000.0,
            expenses: 300_000.0,
            monthly_expenses: 25_000.0,
            assets_cars: 100_000.0,
            assets_land: 200_000.0,
            assets_others: 300_000.0,
            loans_debts_amount: 100_000.0,
            owns_house: true,
            on_rent: true,
            family_members_count: 4,
            dependents_parents: 0,
            dependents_spouse: true,
            dependents_children: 2,
            dependent_health_problems: true,
            dependent_health_problems_details: String::new(),
            upcoming_big_goals: "Children's Education".to_string(),
            health_issues: true,
            health_insurance: true,
            health_insurance_amount: 10_000.0,
            life_insurance: true,
            life_insurance_amount_total: 500_000.0,
            pension_contributions: true,
            pension_contributions_amount: 5_000.0,
            expected_inflation_rate: 0.06,
            retirement_age_target: 60,
            only_source_of_income: true,
        }
    }
}

fn default_no() -> String {
    "N".to_string()
}

/// A submission as received from a form, CSV file or JSON body
///
/// Yes/no fields are kept as raw tokens; they become booleans only after
/// validation turns the submission into an [`EvaluationInput`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Submission {
    pub age: i32,
    pub gender: String,
    pub country: String,
    pub income: f64,
    pub expenses: f64,
    pub monthly_expenses: f64,
    pub assets_cars: f64,
    pub assets_land: f64,
    pub assets_others: f64,
    pub loans_debts_amount: f64,
    pub owns_house: String,
    pub on_rent: String,
    pub family_members_count: u32,
    pub dependents_parents: u32,
    pub dependents_spouse: String,
    pub dependents_children: u32,
    pub dependent_health_problems: String,
    #[serde(default)]
    pub dependent_health_problems_details: String,
    #[serde(default)]
    pub upcoming_big_goals: String,
    pub health_issues: String,
    pub health_insurance: String,
    #[serde(default)]
    pub health_insurance_amount: f64,
    pub life_insurance: String,
    #[serde(default)]
    pub life_insurance_amount_total: f64,
    pub pension_contributions: String,
    #[serde(default)]
    pub pension_contributions_amount: f64,
    pub expected_inflation_rate: f64,
    pub retirement_age_target: i32,
    /// Absent in older submissions; treated as "N"
    #[serde(default = "default_no")]
    pub only_source_of_income: String,
}

impl Submission {
    /// Raw token for a yes/no field
    pub fn token(&self, flag: Flag) -> &str {
        match flag {
            Flag::OwnsHouse => &self.owns_house,
            Flag::OnRent => &self.on_rent,
            Flag::DependentHealthProblems => &self.dependent_health_problems,
            Flag::HealthIssues => &self.health_issues,
            Flag::HealthInsurance => &self.health_insurance,
            Flag::LifeInsurance => &self.life_insurance,
            Flag::PensionContributions => &self.pension_contributions,
            Flag::OnlySourceOfIncome => &self.only_source_of_income,
            Flag::DependentsSpouse => &self.dependents_spouse,
        }
    }
}

impl From<&EvaluationInput> for Submission {
    fn from(input: &EvaluationInput) -> Self {
        Self {
            age: input.age,
            gender: input.gender.as_str().to_string(),
            country: input.country.clone(),
            income: input.income,
            expenses: input.expenses,
            monthly_expenses: input.monthly_expenses,
            assets_cars: input.assets_cars,
            assets_land: input.assets_land,
            assets_others: input.assets_others,
            loans_debts_amount: input.loans_debts_amount,
            owns_house: flag_token(input.owns_house).to_string(),
            on_rent: flag_token(input.on_rent).to_string(),
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
            pension_contributions: flag_token(input.pension_contributions).to_string(),
            pension_contributions_amount: input.pension_contributions_amount,
            expected_inflation_rate: input.expected_inflation_rate,
            retirement_age_target: input.retirement_age_target,
            only_source_of_income: flag_token(input.only_source_of_income).to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flag_tokens() {
        assert_eq!(parse_flag_token("Y"), Some(true));
        assert_eq!(parse_flag_token("N"), Some(false));
        assert_eq!(parse_flag_token("y"), None);
        assert_eq!(parse_flag_token(" Y"), None);
        assert_eq!(parse_flag_token("Yes"), None);
        assert_eq!(flag_token(true), "Y");
        assert_eq!(flag_token(false), "N");
    }

    #[test]
    fn test_gender_labels() {
        assert_eq!(Gender::from_label("Female"), Gender::Female);
        assert_eq!(Gender::from_label("Male"), Gender::Male);
        assert_eq!(Gender::from_label("Non-binary"), Gender::Other);
    }

    #[test]
    fn test_net_worth_and_horizon() {
        let input = EvaluationInput::default();
        assert_eq!(input.total_assets(), 600_000.0);
        assert_eq!(input.net_worth(), 500_000.0);
        assert_eq!(input.years_to_retirement(), 20);
    }

    #[test]
    fn test_submission_tokens_follow_input() {
        let input = EvaluationInput {
            owns_house: false,
            pension_contributions: false,
            ..EvaluationInput::default()
        };
        let submission = Submission::from(&input);

        for flag in Flag::ALL {
            let expected = flag_token(input.flag(flag));
            assert_eq!(submission.token(flag), expected, "{:?}", flag);
        }
        assert_eq!(submission.owns_house, "N");
        assert_eq!(submission.on_rent, "Y");
    }
}
