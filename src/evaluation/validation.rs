//! Input validation
//!
//! Checks run in a fixed order and the first failure wins:
//! negative figures, then age against target, then yes/no tokens.

use crate::profile::{parse_flag_token, EvaluationInput, Flag, Gender, Submission};
use thiserror::Error;

/// Why an input could not be evaluated
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InputError {
    #[error("Please ensure all financial inputs are non-negative.")]
    NegativeValue,

    #[error("Target retirement age should be greater than current age.")]
    RetirementAgeNotAfterCurrent,

    #[error("{} should be Y or N", .0.label())]
    InvalidFlag(Flag),
}

impl InputError {
    /// The single follow-up suggestion shown with a validation failure
    pub fn remedy(&self) -> String {
        match self {
            InputError::NegativeValue => "Please check your input values.".to_string(),
            InputError::RetirementAgeNotAfterCurrent => {
                "Please check your age and target retirement age.".to_string()
            }
            // One template for all nine flags, Dependents Spouse included
            InputError::InvalidFlag(flag) => format!("Please check the {} value.", flag.label()),
        }
    }
}

/// The figures covered by the sign and age checks
#[derive(Debug, Clone, Copy)]
pub(crate) struct Figures {
    pub age: i32,
    pub income: f64,
    pub expenses: f64,
    pub assets_cars: f64,
    pub assets_land: f64,
    pub assets_others: f64,
    pub loans_debts_amount: f64,
    pub retirement_age_target: i32,
}

impl Figures {
    pub fn of_input(input: &EvaluationInput) -> Self {
        Self {
            age: input.age,
            income: input.income,
            expenses: input.expenses,
            assets_cars: input.assets_cars,
            assets_land: input.assets_land,
            assets_others: input.assets_others,
            loans_debts_amount: input.loans_debts_amount,
            retirement_age_target: input.retirement_age_target,
        }
    }

    pub fn of_submission(submission: &Submission) -> Self {
        Self {
            age: submission.age,
            income: submission.income,
            expenses: submission.expenses,
            assets_cars: submission.assets_cars,
            assets_land: submission.assets_land,
            assets_others: submission.assets_others,
            loans_debts_amount: submission.loans_debts_amount,
            retirement_age_target: submission.retirement_age_target,
        }
    }
}

/// Sign check then age check
pub(crate) fn check_figures(figures: &Figures) -> Result<(), InputError> {
    let amounts = [
        figures.income,
        figures.expenses,
        figures.assets_cars,
        figures.assets_land,
        figures.assets_others,
        figures.loans_debts_amount,
    ];
    if figures.age < 0 || amounts.iter().any(|v| *v < 0.0) {
        return Err(InputError::NegativeValue);
    }

    if figures.age >= figures.retirement_age_target {
        return Err(InputError::RetirementAgeNotAfterCurrent);
    }

    Ok(())
}

/// Validate a raw submission and convert its tokens to booleans
pub fn parse_submission(submission: &Submission) -> Result<EvaluationInput, InputError> {
    check_figures(&Figures::of_submission(submission))?;

    let mut flags = [false; 9];
    for (slot, flag) in flags.iter_mut().zip(Flag::ALL) {
        *slot = parse_flag_token(submission.token(flag)).ok_or(InputError::InvalidFlag(flag))?;
    }
    let [owns_house, on_rent, dependent_health_problems, health_issues, health_insurance, life_insurance, pension_contributions, only_source_of_income, dependents_spouse] =
        flags;

    Ok(EvaluationInput {
        age: submission.age,
        gender: Gender::from_label(&submission.gender),
        country: submission.country.clone(),
        income: submission.income,
        expenses: submission.expenses,
        monthly_expenses: submission.monthly_expenses,
        assets_cars: submission.assets_cars,
        assets_land: submission.assets_land,
        assets_others: submission.assets_others,
        loans_debts_amount: submission.loans_debts_amount,
        owns_house,
        on_rent,
        family_members_count: submission.family_members_count,
        dependents_parents: submission.dependents_parents,
        dependents_spouse,
        dependents_children: submission.dependents_children,
        dependent_health_problems,
        dependent_health_problems_details: submission.dependent_health_problems_details.clone(),
        upcoming_big_goals: submission.upcoming_big_goals.clone(),
        health_issues,
        health_insurance,
        health_insurance_amount: submission.health_insurance_amount,
        life_insurance,
        life_insurance_amount_total: submission.life_insurance_amount_total,
        pension_contributions,
        pension_contributions_amount: submission.pension_contributions_amount,
        expected_inflation_rate: submission.expected_inflation_rate,
        retirement_age_target: submission.retirement_age_target,
        only_source_of_income,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn submission() -> Submission {
        Submission::from(&EvaluationInput::default())
    }

    #[test]
    fn test_valid_submission_round_trips() {
        let input = EvaluationInput {
            on_rent: false,
            ..EvaluationInput::default()
        };
        let parsed = parse_submission(&Submission::from(&input)).unwrap();
        assert_eq!(parsed, input);
    }

    #[test]
    fn test_negative_checked_before_age() {
        let mut s = submission();
        s.loans_debts_amount = -1.0;
        s.retirement_age_target = 10;
        assert_eq!(parse_submission(&s), Err(InputError::NegativeValue));
    }

    #[test]
    fn test_negative_age() {
        let mut s = submission();
        s.age = -3;
        assert_eq!(parse_submission(&s), Err(InputError::NegativeValue));
    }

    #[test]
    fn test_age_checked_before_tokens() {
        let mut s = submission();
        s.age = 60;
        s.retirement_age_target = 60;
        s.owns_house = "maybe".to_string();
        assert_eq!(parse_submission(&s), Err(InputError::RetirementAgeNotAfterCurrent));
    }

    #[test]
    fn test_first_bad_token_wins() {
        let mut s = submission();
        s.dependents_spouse = "yes".to_string();
        s.health_insurance = "".to_string();
        assert_eq!(
            parse_submission(&s),
            Err(InputError::InvalidFlag(Flag::HealthInsurance))
        );

        s.health_insurance = "N".to_string();
        assert_eq!(
            parse_submission(&s),
            Err(InputError::InvalidFlag(Flag::DependentsSpouse))
        );
    }

    #[test]
    fn test_error_messages() {
        let err = InputError::InvalidFlag(Flag::OnlySourceOfIncome);
        assert_eq!(err.to_string(), "Only Source of Income should be Y or N");
        assert_eq!(err.remedy(), "Please check the Only Source of Income value.");
        assert_eq!(
            InputError::RetirementAgeNotAfterCurrent.to_string(),
            "Target retirement age should be greater than current age."
        );
    }

    #[test]
    fn test_every_flag_remedy_ends_with_period() {
        for flag in Flag::ALL {
            let remedy = InputError::InvalidFlag(flag).remedy();
            assert_eq!(remedy, format!("Please check the {} value.", flag.label()));
        }
        assert_eq!(
            InputError::InvalidFlag(Flag::DependentsSpouse).remedy(),
            "Please check the Dependents Spouse value."
        );
    }
}
