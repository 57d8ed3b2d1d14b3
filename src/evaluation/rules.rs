//! Suggestion rules
//!
//! An ordered table of (predicate, message) pairs. Every matching rule adds
//! one line; lines are neither deduplicated nor re-sorted.

use crate::assumptions::PlanningAssumptions;
use crate::currency::format_money;
use crate::profile::EvaluationInput;
use serde::Serialize;

/// What a suggestion is about
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum SuggestionTopic {
    Shortfall,
    SavingsRate,
    ReduceExpenses,
    ShortHorizon,
    LongHorizon,
    DebtPayoff,
    StartEarly,
    CapitalPreservation,
    HealthCover,
    LargeFamily,
    ChildrenCosts,
    RentVersusOwn,
    PensionPlan,
    IncomeDiversification,
    SpousalPlanning,
    EducationFund,
}

/// Everything a rule may look at
#[derive(Debug, Clone, Copy)]
pub struct RuleContext<'a> {
    pub input: &'a EvaluationInput,
    /// Thresholds the predicates compare against
    pub assumptions: &'a PlanningAssumptions,
    pub corpus_needed: f64,
    pub corpus_available: f64,
    pub ready: bool,
    pub years_to_retirement: i32,
    /// Display symbol for amounts, may be empty
    pub currency_symbol: &'a str,
}

impl RuleContext<'_> {
    pub fn shortfall(&self) -> f64 {
        self.corpus_needed - self.corpus_available
    }
}

#[derive(Clone, Copy)]
pub enum SuggestionText {
    Fixed(&'static str),
    Computed(fn(&RuleContext) -> String),
}

/// A single row of the rule table
#[derive(Clone, Copy)]
pub struct SuggestionRule {
    pub topic: SuggestionTopic,
    pub applies: fn(&RuleContext) -> bool,
    pub text: SuggestionText,
}

impl SuggestionRule {
    fn render(&self, ctx: &RuleContext) -> String {
        match self.text {
            SuggestionText::Fixed(text) => text.to_string(),
            SuggestionText::Computed(build) => build(ctx),
        }
    }
}

/// A suggestion emitted for one evaluation
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Suggestion {
    pub topic: SuggestionTopic,
    pub text: String,
}

fn not_ready(ctx: &RuleContext) -> bool {
    !ctx.ready
}

fn expenses_too_high(ctx: &RuleContext) -> bool {
    !ctx.ready
        && ctx
            .assumptions
            .under_expense_pressure(ctx.input.monthly_expenses * 12.0, ctx.input.income)
}

fn short_horizon(ctx: &RuleContext) -> bool {
    !ctx.ready && ctx.years_to_retirement < ctx.assumptions.short_horizon_years
}

fn long_horizon(ctx: &RuleContext) -> bool {
    !ctx.ready && ctx.years_to_retirement > ctx.assumptions.long_horizon_years
}

fn has_debt(ctx: &RuleContext) -> bool {
    ctx.input.loans_debts_amount > 0.0
}

fn early_saver(ctx: &RuleContext) -> bool {
    ctx.input.age < ctx.assumptions.early_saver_age
}

fn near_retirement(ctx: &RuleContext) -> bool {
    ctx.input.age > ctx.assumptions.preservation_age
}

fn health_issues(ctx: &RuleContext) -> bool {
    ctx.input.health_issues
}

fn large_family(ctx: &RuleContext) -> bool {
    ctx.input.family_members_count > 2
}

fn has_children(ctx: &RuleContext) -> bool {
    ctx.input.dependents_children > 0
}

fn renting(ctx: &RuleContext) -> bool {
    !ctx.input.owns_house && ctx.input.on_rent
}

fn no_pension(ctx: &RuleContext) -> bool {
    !ctx.input.pension_contributions
}

fn single_income(ctx: &RuleContext) -> bool {
    ctx.input.only_source_of_income
}

fn dependent_spouse(ctx: &RuleContext) -> bool {
    ctx.input.dependents_spouse
}

fn education_goal(ctx: &RuleContext) -> bool {
    ctx.input.upcoming_big_goals.contains("Children's Education")
}

/// Shortfall in the country's currency symbol; no symbol for unsupported countries
fn shortfall_text(ctx: &RuleContext) -> String {
    format!(
        "Increase your retirement savings by {}.",
        format_money(ctx.currency_symbol, ctx.shortfall())
    )
}

/// Rules in evaluation order
pub const SUGGESTION_RULES: &[SuggestionRule] = &[
    SuggestionRule {
        topic: SuggestionTopic::Shortfall,
        applies: not_ready,
        text: SuggestionText::Computed(shortfall_text),
    },
    SuggestionRule {
        topic: SuggestionTopic::SavingsRate,
        applies: not_ready,
        text: SuggestionText::Fixed("Consider increasing your savings rate."),
    },
    SuggestionRule {
        topic: SuggestionTopic::ReduceExpenses,
        applies: expenses_too_high,
        text: SuggestionText::Fixed("Reduce your expenses. Review your budget carefully."),
    },
    SuggestionRule {
        topic: SuggestionTopic::ShortHorizon,
        applies: short_horizon,
        text: SuggestionText::Fixed(
            "You have a short time to prepare. Aggressively increase savings and consider delaying retirement.",
        ),
    },
    SuggestionRule {
        topic: SuggestionTopic::LongHorizon,
        applies: long_horizon,
        text: SuggestionText::Fixed(
            "You have time to grow your retirement nest egg. Invest consistently and consider higher-growth investments.",
        ),
    },
    SuggestionRule {
        topic: SuggestionTopic::DebtPayoff,
        applies: has_debt,
        text: SuggestionText::Fixed("Prioritize paying down high-interest debts."),
    },
    SuggestionRule {
        topic: SuggestionTopic::StartEarly,
        applies: early_saver,
        text: SuggestionText::Fixed(
            "Start saving for retirement as early as possible to take advantage of compounding.",
        ),
    },
    SuggestionRule {
        topic: SuggestionTopic::CapitalPreservation,
        applies: near_retirement,
        text: SuggestionText::Fixed(
            "Focus on preserving your capital and reducing risk as you approach retirement.",
        ),
    },
    SuggestionRule {
        topic: SuggestionTopic::HealthCover,
        applies: health_issues,
        text: SuggestionText::Fixed(
            "Ensure you have adequate health insurance and consider long-term care planning.",
        ),
    },
    SuggestionRule {
        topic: SuggestionTopic::LargeFamily,
        applies: large_family,
        text: SuggestionText::Fixed(
            "Consider the financial impact of supporting a larger family in retirement.",
        ),
    },
    SuggestionRule {
        topic: SuggestionTopic::ChildrenCosts,
        applies: has_children,
        text: SuggestionText::Fixed("Factor in future education and marriage expenses for your children."),
    },
    SuggestionRule {
        topic: SuggestionTopic::RentVersusOwn,
        applies: renting,
        text: SuggestionText::Fixed(
            "Consider the impact of rent on your retirement expenses. Evaluate if owning a home is feasible before retirement.",
        ),
    },
    SuggestionRule {
        topic: SuggestionTopic::PensionPlan,
        applies: no_pension,
        text: SuggestionText::Fixed("Start contributing to a pension plan to build a retirement corpus."),
    },
    SuggestionRule {
        topic: SuggestionTopic::IncomeDiversification,
        applies: single_income,
        text: SuggestionText::Fixed("Consider diversifying your income sources to reduce risk."),
    },
    SuggestionRule {
        topic: SuggestionTopic::SpousalPlanning,
        applies: dependent_spouse,
        text: SuggestionText::Fixed(
            "Ensure adequate financial planning for your spouse's needs in retirement.",
        ),
    },
    SuggestionRule {
        topic: SuggestionTopic::EducationFund,
        applies: education_goal,
        text: SuggestionText::Fixed("Start a dedicated investment plan for your children's education."),
    },
];

/// Run every rule in table order
pub fn suggest(ctx: &RuleContext) -> Vec<Suggestion> {
    SUGGESTION_RULES
        .iter()
        .filter(|rule| (rule.applies)(ctx))
        .map(|rule| Suggestion {
            topic: rule.topic,
            text: rule.render(ctx),
        })
        .collect()
}
