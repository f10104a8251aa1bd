use crate::analysis::{self, AnalysisResult, CurvePoint};
use crate::errors::{AnalyzerError, AnalyzerResult};
use crate::models::Contract;
use crate::server::validate::validate_portfolio;
use crate::state::{AppState, CountersSnapshot};
use axum::body::Bytes;
use axum::extract::State;
use axum::response::Json;
use std::sync::Arc;

#[derive(Debug, Clone, Copy, serde::Serialize, serde::Deserialize)]
pub struct XyValue {
    pub x: f64,
    pub y: f64,
}

impl From<&CurvePoint> for XyValue {
    fn from(p: &CurvePoint) -> Self {
        Self {
            x: p.underlying_price,
            y: p.profit_loss,
        }
    }
}

/// Response body for POST /analyze.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct GraphResponse {
    pub graph_data: Vec<XyValue>,
    pub max_profit: f64,
    pub max_loss: f64,
    pub break_even_points: Vec<f64>,
}

/// Response body for POST /api/analysis. Same content as GraphResponse,
/// curve field named `xy_values`.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct XyResponse {
    pub xy_values: Vec<XyValue>,
    pub max_profit: f64,
    pub max_loss: f64,
    pub break_even_points: Vec<f64>,
}

impl From<AnalysisResult> for GraphResponse {
    fn from(r: AnalysisResult) -> Self {
        Self {
            graph_data: r.curve.iter().map(XyValue::from).collect(),
            max_profit: r.max_profit,
            max_loss: r.max_loss,
            break_even_points: r.break_even_points,
        }
    }
}

impl From<AnalysisResult> for XyResponse {
    fn from(r: AnalysisResult) -> Self {
        Self {
            xy_values: r.curve.iter().map(XyValue::from).collect(),
            max_profit: r.max_profit,
            max_loss: r.max_loss,
            break_even_points: r.break_even_points,
        }
    }
}

#[derive(Debug, serde::Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
}

/// POST /analyze -- payoff profile with the `graph_data` schema
pub async fn analyze_graph(
    State(state): State<Arc<AppState>>,
    body: Bytes,
) -> AnalyzerResult<Json<GraphResponse>> {
    let result = run_analysis(&state, &body)?;
    Ok(Json(result.into()))
}

/// POST /api/analysis -- payoff profile with the `xy_values` schema
pub async fn analyze_xy(
    State(state): State<Arc<AppState>>,
    body: Bytes,
) -> AnalyzerResult<Json<XyResponse>> {
    let result = run_analysis(&state, &body)?;
    Ok(Json(result.into()))
}

/// GET /api/counters -- request counters (lock-free reads)
pub async fn get_counters(State(state): State<Arc<AppState>>) -> Json<CountersSnapshot> {
    Json(state.counters.snapshot())
}

/// GET /health
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// Decode, validate, analyze. Content-Type is not required; any body that
/// fails to decode as a contract array is a bad request.
fn run_analysis(state: &AppState, body: &[u8]) -> AnalyzerResult<AnalysisResult> {
    let portfolio = match serde_json::from_slice::<Vec<Contract>>(body)
        .map_err(AnalyzerError::from)
        .and_then(|contracts| validate_portfolio(contracts, state.config.max_strike_price))
    {
        Ok(p) => p,
        Err(e) => {
            tracing::warn!(error = %e, "analysis request rejected");
            state.record_rejection();
            return Err(e);
        }
    };

    let result = analysis::analyze(&portfolio);
    state.record_analysis(result.curve.len());
    Ok(result)
}
