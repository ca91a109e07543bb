use serde_json::{json, Value};

use crate::plan_engine::models::QualityGateResult;

/// Map a gate result to the flat JSON event shape the app's telemetry sink
/// ingests. Success and failure produce the same field set so downstream
/// dashboards can aggregate without special-casing.
pub fn gate_event(result: &QualityGateResult) -> Value {
    let (diversity_score, diversity_threshold) = result
        .diversity
        .map(|d| (json!(d.score), json!(d.threshold)))
        .unwrap_or((Value::Null, Value::Null));

    let (unique_fraction, repeated_count) = result
        .exercise_diversity
        .as_ref()
        .map(|e| (json!(e.unique_fraction), json!(e.repeated_ids.len())))
        .unwrap_or((Value::Null, Value::Null));

    json!({
        "event": "plan_quality_gate",
        "status": result.status.to_string(),
        "accepted": result.status.is_success(),
        "plan_id": result.final_plan.as_ref().map(|p| p.id.to_string()),
        "validation_issues": result.validation.issues.len(),
        "diversity_score": diversity_score,
        "diversity_threshold": diversity_threshold,
        "exercise_unique_fraction": unique_fraction,
        "repeated_exercise_count": repeated_count,
    })
}
