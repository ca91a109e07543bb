//! Multi-stage acceptance pipeline for a composed plan:
//! validate → normalize → structural diversity → exercise diversity.
//!
//! Every stage is a possible terminal exit and every outcome is a status
//! value — nothing here panics or returns an error type. The retry loop
//! (regenerate with a fresh seed, bounded attempts) belongs to the caller;
//! [`retry_feedback`] produces the corrective instruction that loop replays
//! to the upstream AI composer.

use crate::plan_engine::diversity::{analyze_plan_diversity, exercise_diversity};
use crate::plan_engine::models::{
    QualityGateResult, QualityGateStatus, ValidationIssue, ValidationResult, WorkoutBlueprint,
    WorkoutPlan,
};
use crate::plan_engine::normalizer::normalize;

/// Run the full gate. `history` is the recent plan history the diversity
/// stages score against, newest or oldest first — order does not matter.
pub fn evaluate(
    plan: &WorkoutPlan,
    blueprint: &WorkoutBlueprint,
    history: &[WorkoutPlan],
) -> QualityGateResult {
    // Stage 1: structural validation. Critical failures halt the pipeline
    // before any diversity work happens.
    let validation = validate(plan, blueprint);
    if validation.has_critical_issues {
        return QualityGateResult {
            status: QualityGateStatus::FailedValidation,
            final_plan: None,
            validation,
            diversity: None,
            exercise_diversity: None,
        };
    }

    // Stage 2: normalization. Total — always yields a usable plan.
    let outcome = normalize(plan, blueprint);

    // Stage 3: structural diversity against history.
    let diversity = analyze_plan_diversity(&outcome.plan, history);
    if !diversity.is_diverse {
        return QualityGateResult {
            status: QualityGateStatus::FailedDiversity,
            final_plan: None,
            validation,
            diversity: Some(diversity),
            exercise_diversity: None,
        };
    }

    // Stage 4: exercise-identity uniqueness (the 80% rule).
    let identity = exercise_diversity(&outcome.plan, history);
    if !identity.is_valid {
        return QualityGateResult {
            status: QualityGateStatus::FailedExerciseDiversity,
            final_plan: None,
            validation,
            diversity: Some(diversity),
            exercise_diversity: Some(identity),
        };
    }

    // Stage 5: success. Both diversity results stay populated for telemetry.
    let status = if outcome.adjusted() {
        QualityGateStatus::NormalizedAndPassed
    } else {
        QualityGateStatus::Passed
    };
    QualityGateResult {
        status,
        final_plan: Some(outcome.plan),
        validation,
        diversity: Some(diversity),
        exercise_diversity: Some(identity),
    }
}

/// Every prescribed exercise's equipment must be a subset of the blueprint's
/// allowed set. Degenerate data — a blueprint with no blocks, a plan with no
/// exercises — is a critical issue too, never a crash.
fn validate(plan: &WorkoutPlan, blueprint: &WorkoutBlueprint) -> ValidationResult {
    let mut issues = Vec::new();

    if blueprint.blocks.is_empty() {
        issues.push(ValidationIssue {
            exercise_id: String::new(),
            message: "blueprint has no blocks".to_string(),
        });
    }
    if plan.exercises().next().is_none() {
        issues.push(ValidationIssue {
            exercise_id: String::new(),
            message: "plan contains no exercises".to_string(),
        });
    }

    for exercise in plan.exercises() {
        for equipment in &exercise.equipment {
            if !blueprint.equipment_constraints.permits(*equipment) {
                issues.push(ValidationIssue {
                    exercise_id: exercise.exercise_id.clone(),
                    message: format!(
                        "'{}' requires {}, which the {} structure does not allow",
                        exercise.name, equipment, blueprint.structure
                    ),
                });
            }
        }
    }

    let has_critical_issues = !issues.is_empty();
    ValidationResult { issues, has_critical_issues }
}

/// Corrective instruction for the upstream AI composer. `None` on success.
///
/// The text is an opaque, fixed-wording Portuguese instruction replayed to
/// the composer on retry — it is not end-user copy and is not localized.
pub fn retry_feedback(result: &QualityGateResult) -> Option<String> {
    match result.status {
        QualityGateStatus::Passed | QualityGateStatus::NormalizedAndPassed => None,

        QualityGateStatus::FailedValidation => {
            let offending: Vec<&str> = result
                .validation
                .issues
                .iter()
                .filter(|i| !i.exercise_id.is_empty())
                .map(|i| i.exercise_id.as_str())
                .collect();
            let detail = if offending.is_empty() {
                String::new()
            } else {
                format!(" Exercícios incompatíveis: {}.", offending.join(", "))
            };
            Some(format!(
                "O plano gerado é incompatível com a estrutura de equipamentos \
                 disponível.{detail} Gere um novo plano usando somente os \
                 equipamentos permitidos pela estrutura do usuário."
            ))
        }

        QualityGateStatus::FailedDiversity => Some(
            "O plano gerado é muito similar aos treinos recentes do usuário. \
             Gere um novo plano variando os exercícios, a ordem das fases e a \
             distribuição de volume."
                .to_string(),
        ),

        QualityGateStatus::FailedExerciseDiversity => {
            let repeated = result
                .exercise_diversity
                .as_ref()
                .map(|r| r.repeated_ids.join(", "))
                .unwrap_or_default();
            Some(format!(
                "ATENÇÃO: pelo menos 80% dos exercícios do novo plano devem ser \
                 diferentes dos treinos anteriores. Substitua os exercícios \
                 repetidos ({repeated}) por alternativas equivalentes para os \
                 mesmos grupos musculares."
            ))
        }
    }
}
