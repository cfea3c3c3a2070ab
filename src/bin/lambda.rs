//! AWS Lambda HTTP entry point
//!
//! POST a JSON `ProjectionInputs` body (missing fields take the defaults, an
//! empty body projects the defaults) and receive the full projection.

use first_million::display::million_headline;
use first_million::inputs::{ProjectionInputs, DEFAULT_MAX_MONTHS};
use first_million::projection::{MonthlySnapshot, SummaryStats};
use lambda_http::{run, service_fn, Body, Error, Request, Response};
use serde::Serialize;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ProjectionResponse<'a> {
    inputs: ProjectionInputs,
    snapshots: &'a [MonthlySnapshot],
    stats: SummaryStats,
    yearly: Vec<&'a MonthlySnapshot>,
    chart: Vec<&'a MonthlySnapshot>,
    headline: String,
    roi_pct: f64,
    interest_share: f64,
}

#[derive(Serialize)]
struct ErrorResponse {
    error: String,
}

fn json_response<T: Serialize>(status: u16, value: &T) -> Result<Response<Body>, Error> {
    let payload = serde_json::to_string(value)?;
    let response = Response::builder()
        .status(status)
        .header("content-type", "application/json")
        .body(Body::from(payload))?;
    Ok(response)
}

fn bad_request(message: String) -> Result<Response<Body>, Error> {
    log::warn!("Rejected request: {}", message);
    json_response(400, &ErrorResponse { error: message })
}

/// Turn a request body into the projection response
fn respond(body: &[u8]) -> Result<Response<Body>, Error> {
    let inputs = if body.iter().all(u8::is_ascii_whitespace) {
        ProjectionInputs::default()
    } else {
        match serde_json::from_slice::<ProjectionInputs>(body) {
            Ok(inputs) => inputs,
            Err(e) => return bad_request(format!("Invalid JSON body: {e}")),
        }
    };

    if let Err(e) = inputs.validate(DEFAULT_MAX_MONTHS) {
        return bad_request(e.to_string());
    }

    let result = inputs.project();
    let response = ProjectionResponse {
        inputs,
        snapshots: &result.snapshots,
        stats: result.stats,
        yearly: result.yearly_rows(),
        chart: result.chart_points(),
        headline: million_headline(&result.stats),
        roi_pct: result.stats.return_on_investment_pct(),
        interest_share: result.stats.interest_share(),
    };
    json_response(200, &response)
}

async fn handler(event: Request) -> Result<Response<Body>, Error> {
    respond(event.body().as_ref())
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    env_logger::init();
    run(service_fn(handler)).await
}
