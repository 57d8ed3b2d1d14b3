//! AWS Lambda handler for retirement readiness evaluations
//!
//! Accepts a JSON submission through a Lambda Function URL and returns the
//! evaluation result. Set RETIREMENT_STORE_PATH (e.g. /tmp/user_data.csv) to
//! append every valid evaluation to a CSV store.

use aws_lambda_events::event::lambda_function_urls::LambdaFunctionUrlRequest;
use lambda_runtime::{run, service_fn, Error, LambdaEvent};
use retirement_readiness::profile::submission_from_json;
use retirement_readiness::{AssessmentService, CsvEvaluationStore, EvaluationResult, EvaluationStore};
use serde::Serialize;
use serde_json::{json, Value};
use std::env;

/// Response body
#[derive(Debug, Serialize)]
pub struct EvaluationResponse {
    #[serde(flatten)]
    pub result: EvaluationResult,
    pub saved: bool,
    pub execution_time_ms: u64,
}

fn http_response(status: u16, body: String) -> Value {
    json!({
        "statusCode": status,
        "headers": {
            "Content-Type": "application/json",
            "Access-Control-Allow-Origin": "*",
            "Access-Control-Allow-Methods": "POST, OPTIONS",
            "Access-Control-Allow-Headers": "Content-Type",
        },
        "body": body,
    })
}

fn error_response(status: u16, message: &str) -> Value {
    http_response(status, json!({ "error": message }).to_string())
}

fn open_store() -> Option<CsvEvaluationStore> {
    let path = env::var("RETIREMENT_STORE_PATH").ok()?;
    match CsvEvaluationStore::open(&path) {
        Ok(store) => Some(store),
        Err(err) => {
            log::warn!("Store unavailable at {}: {}", path, err);
            None
        }
    }
}

/// Lambda handler function
async fn handler(event: LambdaEvent<LambdaFunctionUrlRequest>) -> Result<Value, Error> {
    let start = std::time::Instant::now();
    let request = event.payload;

    if request.is_base64_encoded {
        return Ok(error_response(400, "Binary request bodies are not supported"));
    }

    let body = request.body.unwrap_or_default();
    let submission = match submission_from_json(&body) {
        Ok(s) => s,
        Err(e) => return Ok(error_response(400, &format!("Invalid JSON: {}", e))),
    };

    let mut store = open_store();
    let assessment = AssessmentService::new().assess(
        &submission,
        store.as_mut().map(|s| s as &mut dyn EvaluationStore),
    );

    let response = EvaluationResponse {
        result: assessment.result,
        saved: assessment.saved,
        execution_time_ms: start.elapsed().as_millis() as u64,
    };

    // Validation failures are still a 200: the verdict carries the message
    Ok(http_response(200, serde_json::to_string(&response)?))
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    env_logger::init();
    run(service_fn(handler)).await
}
