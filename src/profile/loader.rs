//! Load submissions from CSV batches or JSON request bodies

use super::Submission;
use csv::Reader;
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("cannot read submissions: {0}")]
    Io(#[from] std::io::Error),

    #[error("malformed CSV submission: {0}")]
    Csv(#[from] csv::Error),

    #[error("malformed JSON submission: {0}")]
    Json(#[from] serde_json::Error),
}

/// Load all submissions from a CSV file with snake_case headers
pub fn load_submissions<P: AsRef<Path>>(path: P) -> Result<Vec<Submission>, LoadError> {
    let mut reader = Reader::from_path(path)?;
    collect_rows(&mut reader)
}

/// Load submissions from any reader (e.g., string buffer, network stream)
pub fn load_submissions_from_reader<R: std::io::Read>(reader: R) -> Result<Vec<Submission>, LoadError> {
    let mut csv_reader = Reader::from_reader(reader);
    collect_rows(&mut csv_reader)
}

fn collect_rows<R: std::io::Read>(reader: &mut Reader<R>) -> Result<Vec<Submission>, LoadError> {
    let mut submissions = Vec::new();
    for result in reader.deserialize() {
        let row: Submission = result?;
        submissions.push(row);
    }
    Ok(submissions)
}

/// Parse a single submission from a JSON document
pub fn submission_from_json(body: &str) -> Result<Submission, LoadError> {
    Ok(serde_json::from_str(body)?)
}

/// Load a single JSON submission from disk
pub fn load_submission_json<P: AsRef<Path>>(path: P) -> Result<Submission, LoadError> {
    let body = std::fs::read_to_string(path)?;
    submission_from_json(&body)
}

#[cfg(test)]
mod tests {
    use super::*;

    const HEADER: &str = "age,gender,country,income,expenses,monthly_expenses,assets_cars,assets_land,assets_others,loans_debts_amount,owns_house,on_rent,family_members_count,dependents_parents,dependents_spouse,dependents_children,dependent_health_problems,dependent_health_problems_details,upcoming_big_goals,health_issues,health_insurance,health_insurance_amount,life_insurance,life_insurance_amount_total,pension_contributions,pension_contributions_amount,expected_inflation_rate,retirement_age_target,only_source_of_income";

    #[test]
    fn test_load_submissions_from_reader() {
        let data = format!(
            "{}\n{}\n{}\n",
            HEADER,
            "40,Male,India,500000,300000,25000,100000,200000,300000,100000,Y,Y,4,0,Y,2,N,,Children's Education,N,Y,10000,Y,500000,N,0,0.06,60,Y",
            "55,Female,UK,80000,40000,3000,0,250000,150000,0,N,N,2,1,N,0,N,,,Y,Y,2000,N,0,Y,400,0.03,65,N",
        );

        let submissions = load_submissions_from_reader(data.as_bytes()).expect("Failed to load submissions");
        assert_eq!(submissions.len(), 2);

        let first = &submissions[0];
        assert_eq!(first.age, 40);
        assert_eq!(first.country, "India");
        assert_eq!(first.pension_contributions, "N");
        assert_eq!(first.upcoming_big_goals, "Children's Education");

        let second = &submissions[1];
        assert_eq!(second.gender, "Female");
        assert_eq!(second.retirement_age_target, 65);
        assert!((second.expected_inflation_rate - 0.03).abs() < 1e-12);
    }

    #[test]
    fn test_bad_token_still_loads() {
        // Token validation belongs to the evaluator, not the loader
        let data = format!(
            "{}\n{}\n",
            HEADER,
            "40,Male,USA,1,1,1,1,1,1,0,maybe,Y,1,0,N,0,N,,,N,N,0,N,0,N,0,0.05,60,N",
        );
        let submissions = load_submissions_from_reader(data.as_bytes()).unwrap();
        assert_eq!(submissions[0].owns_house, "maybe");
    }

    #[test]
    fn test_json_submission_defaults_only_source_to_no() {
        let body = r#"{
            "age": 35, "gender": "Other", "country": "Japan",
            "income": 6000000, "expenses": 3000000, "monthly_expenses": 250000,
            "assets_cars": 0, "assets_land": 0, "assets_others": 1000000,
            "loans_debts_amount": 0, "owns_house": "N", "on_rent": "Y",
            "family_members_count": 1, "dependents_parents": 0,
            "dependents_spouse": "N", "dependents_children": 0,
            "dependent_health_problems": "N", "health_issues": "N",
            "health_insurance": "Y", "life_insurance": "N",
            "pension_contributions": "Y", "expected_inflation_rate": 0.02,
            "retirement_age_target": 65
        }"#;

        let submission = submission_from_json(body).unwrap();
        assert_eq!(submission.only_source_of_income, "N");
        assert_eq!(submission.upcoming_big_goals, "");
        assert_eq!(submission.health_insurance_amount, 0.0);
    }

    #[test]
    fn test_malformed_json_is_an_error() {
        let err = submission_from_json("{\"age\": \"forty\"}").unwrap_err();
        assert!(matches!(err, LoadError::Json(_)));
    }
}
