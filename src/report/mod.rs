//! Retirement readiness report
//!
//! Renders an input and its evaluation into a paginated plain-text document:
//! user information, key results, a corpus comparison chart, the suggestions
//! verbatim and the methodology disclaimer.

mod chart;
mod layout;

pub use chart::corpus_comparison;
pub use layout::{paginate, wrap};

use crate::assumptions::{POST_RETIREMENT_RETURN_RATE, REPLACEMENT_RATIO};
use crate::currency::{format_money, symbol_for_country};
use crate::evaluation::EvaluationResult;
use crate::profile::{flag_token, EvaluationInput};
use chrono::NaiveDate;
use layout::wrap_hanging;
use std::path::Path;

pub const REPORT_TITLE: &str = "Retirement Readiness Report";

pub const DISCLAIMER: &str = "The calculations in this report are based on standard financial planning principles. It's essential to consult with a qualified financial advisor for personalized advice.";

/// A rendered report, one `Vec<String>` of lines per page
#[derive(Debug, Clone, PartialEq)]
pub struct ReportDocument {
    pub pages: Vec<Vec<String>>,
}

impl ReportDocument {
    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    /// Pages separated by form feeds, each closed by a "Page i of n" footer
    pub fn to_text(&self) -> String {
        let total = self.pages.len();
        self.pages
            .iter()
            .enumerate()
            .map(|(i, page)| {
                let mut text = page.join("\n");
                text.push_str(&format!("\n\nPage {} of {}\n", i + 1, total));
                text
            })
            .collect::<Vec<_>>()
            .join("\x0c\n")
    }

    pub fn save<P: AsRef<Path>>(&self, path: P) -> std::io::Result<()> {
        std::fs::write(path, self.to_text())
    }
}

/// Builds report documents
#[derive(Debug, Clone)]
pub struct ReportBuilder {
    generated_on: NaiveDate,
    lines_per_page: usize,
    width: usize,
    bar_width: usize,
}

impl ReportBuilder {
    pub fn new(generated_on: NaiveDate) -> Self {
        Self {
            generated_on,
            lines_per_page: 50,
            width: 90,
            bar_width: 40,
        }
    }

    pub fn lines_per_page(mut self, lines: usize) -> Self {
        self.lines_per_page = lines.max(1);
        self
    }

    pub fn width(mut self, width: usize) -> Self {
        self.width = width.max(20);
        self
    }

    pub fn build(&self, input: &EvaluationInput, result: &EvaluationResult) -> ReportDocument {
        let symbol = symbol_for_country(&input.country);
        let mut lines = Vec::new();

        lines.push(REPORT_TITLE.to_string());
        lines.push("=".repeat(REPORT_TITLE.len()));
        lines.push(format!("Generated: {}", self.generated_on.format("%Y-%m-%d")));
        lines.push(String::new());
        lines.extend(wrap("This report assesses your retirement readiness.", self.width));
        lines.push(String::new());

        self.heading(&mut lines, "Your Information");
        for (label, value) in information(input, symbol) {
            let wrapped = wrap_hanging(&format!("{}: ", label), &value, self.width);
            if wrapped.is_empty() {
                lines.push(format!("{}:", label));
            } else {
                lines.extend(wrapped);
            }
        }
        lines.push(String::new());

        self.heading(&mut lines, "Key Results");
        lines.push(format!("Verdict: {}", result.verdict));
        lines.push(format!("Corpus Needed: {}", format_money(symbol, result.corpus_needed)));
        lines.push(format!("Corpus Available: {}", format_money(symbol, result.corpus_available)));
        lines.push(String::new());
        lines.extend(corpus_comparison(
            result.corpus_available,
            result.corpus_needed,
            symbol,
            self.bar_width,
        ));
        lines.push(String::new());

        self.heading(&mut lines, "Recommendations");
        for suggestion in &result.suggestions {
            lines.extend(wrap_hanging("- ", suggestion, self.width));
        }
        lines.push(String::new());

        self.heading(&mut lines, "Assumptions and Methodology");
        lines.extend(wrap(&methodology(), self.width));
        lines.push(String::new());
        lines.extend(wrap(DISCLAIMER, self.width));

        ReportDocument {
            pages: paginate(lines, self.lines_per_page),
        }
    }

    fn heading(&self, lines: &mut Vec<String>, title: &str) {
        lines.push(title.to_string());
        lines.push("-".repeat(title.len()));
    }
}

fn methodology() -> String {
    format!(
        "Corpus needed assumes {:.0}% of your current income is required each year after retirement, \
         grown at your expected inflation rate until your target retirement age and capitalised at a \
         {:.0}% annual return. Corpus available is your current assets less loans and debts.",
        REPLACEMENT_RATIO * 100.0,
        POST_RETIREMENT_RETURN_RATE * 100.0,
    )
}

fn information(input: &EvaluationInput, symbol: &str) -> Vec<(&'static str, String)> {
    let money = |amount: f64| format_money(symbol, amount);
    vec![
        ("Age", input.age.to_string()),
        ("Gender", input.gender.as_str().to_string()),
        ("Country", input.country.clone()),
        ("Net Annual Income", money(input.income)),
        ("Annual Expenses", money(input.expenses)),
        ("Monthly Expenses", money(input.monthly_expenses)),
        ("Assets (Cars)", money(input.assets_cars)),
        ("Assets (Land)", money(input.assets_land)),
        ("Assets (Others)", money(input.assets_others)),
        ("Owns a House", flag_token(input.owns_house).to_string()),
        ("On Rent", flag_token(input.on_rent).to_string()),
        ("Loans/Debts Amount", money(input.loans_debts_amount)),
        ("Family Members Count", input.family_members_count.to_string()),
        ("Dependents (Parents)", input.dependents_parents.to_string()),
        ("Dependents (Spouse)", flag_token(input.dependents_spouse).to_string()),
        ("Dependents (Children)", input.dependents_children.to_string()),
        ("Dependent Health Problems", flag_token(input.dependent_health_problems).to_string()),
        ("Dependent Health Problems Details", input.dependent_health_problems_details.clone()),
        ("Upcoming Big Goals", input.upcoming_big_goals.clone()),
        ("Any Health Issues", flag_token(input.health_issues).to_string()),
        ("Health Insurance", flag_token(input.health_insurance).to_string()),
        ("Health Insurance Amount", money(input.health_insurance_amount)),
        ("Life Insurance", flag_token(input.life_insurance).to_string()),
        ("Life Insurance Amount (Total)", money(input.life_insurance_amount_total)),
        ("Pension Contributions", flag_token(input.pension_contributions).to_string()),
        ("Pension Contributions Amount", money(input.pension_contributions_amount)),
        ("Expected Inflation Rate", format!("{:.2}%", input.expected_inflation_rate * 100.0)),
        ("Target Retirement Age", input.retirement_age_target.to_string()),
        ("Only Source of Income", flag_token(input.only_source_of_income).to_string()),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::evaluation::RetirementEvaluator;

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, 1).unwrap()
    }

    fn evaluated() -> (EvaluationInput, EvaluationResult) {
        let input = EvaluationInput {
            country: "UK".to_string(),
            ..EvaluationInput::default()
        };
        let result = RetirementEvaluator::new().evaluate(&input);
        (input, result)
    }

    #[test]
    fn test_report_sections() {
        let (input, result) = evaluated();
        let text = ReportBuilder::new(date()).build(&input, &result).to_text();

        assert!(text.starts_with(REPORT_TITLE));
        assert!(text.contains("Generated: 2024-03-01"));
        assert!(text.contains("Net Annual Income: £500,000.00"));
        assert!(text.contains("Expected Inflation Rate: 6.00%"));
        assert!(text.contains("Verdict: Not Ready to Retire ❌"));
        assert!(text.contains("Corpus Available: £500,000.00"));
        assert!(text.contains("Corpus Needed    |========================================| £"));
        assert!(text.contains("Dependent Health Problems Details:\n"));
        assert!(text.contains("70% of your current income"));
        assert!(text.contains("consult with a qualified financial advisor"));
    }

    #[test]
    fn test_suggestions_listed_verbatim_in_order() {
        let (input, result) = evaluated();
        let doc = ReportBuilder::new(date()).width(400).build(&input, &result);
        let lines: Vec<String> = doc.pages.concat();

        let listed: Vec<&str> = lines
            .iter()
            .filter_map(|l| l.strip_prefix("- "))
            .collect();
        let expected: Vec<&str> = result.suggestions.iter().map(String::as_str).collect();
        assert_eq!(listed, expected);
    }

    #[test]
    fn test_pagination() {
        let (input, result) = evaluated();
        let doc = ReportBuilder::new(date()).lines_per_page(10).build(&input, &result);
        assert!(doc.page_count() > 1);
        assert!(doc.pages.iter().all(|p| p.len() <= 10));

        let text = doc.to_text();
        let total = doc.page_count();
        assert!(text.contains(&format!("Page 1 of {}", total)));
        assert!(text.contains(&format!("Page {} of {}", total, total)));
        assert_eq!(text.matches('\x0c').count(), total - 1);
    }

    #[test]
    fn test_rejected_result_still_renders() {
        let input = EvaluationInput { age: 70, ..EvaluationInput::default() };
        let result = RetirementEvaluator::new().evaluate(&input);
        let text = ReportBuilder::new(date()).build(&input, &result).to_text();
        assert!(text.contains("Verdict: Error: Target retirement age should be greater than current age."));
        assert!(text.contains("- Please check your age and target retirement age."));
    }
}
