//! Similarity scoring: blueprint-vs-blueprint, plan-vs-history, and the
//! exercise-identity 80% uniqueness rule.
//!
//! All scores are in [0,1] where LOWER means MORE similar. Blueprint and
//! plan comparisons look at structure only — concrete exercise identity is
//! the exclusive concern of [`exercise_diversity`].

use std::collections::{BTreeSet, HashSet};

use crate::plan_engine::models::{
    DiversityResult, ExerciseDiversityResult, WorkoutBlueprint, WorkoutPlan,
};

/// Two blueprints are considered diverse when their score strictly exceeds
/// this.
pub const MIN_BLUEPRINT_DIVERSITY: f64 = 0.2;

/// A plan passes the structural gate when its score against history is at
/// least this.
pub const MIN_PLAN_DIVERSITY: f64 = 0.3;

/// Minimum fraction of never-seen exercise IDs a new plan must carry.
pub const EXERCISE_UNIQUENESS_MINIMUM: f64 = 0.80;

// ---------------------------------------------------------------------------
// Blueprint diversity
// ---------------------------------------------------------------------------

/// Structural distance between two blueprints, in [0,1].
///
/// Weighted over goal, structure, level, focus, intensity, recovery flag and
/// block composition. Seed-driven fields (title, target-muscle selection)
/// are deliberately ignored: two blueprints from the same input that differ
/// only by seed score 0.0.
pub fn blueprint_diversity_score(a: &WorkoutBlueprint, b: &WorkoutBlueprint) -> f64 {
    let mut score = 0.0;
    if a.goal != b.goal {
        score += 0.30;
    }
    if a.structure != b.structure {
        score += 0.30;
    }
    if a.level != b.level {
        score += 0.25;
    }
    if a.focus != b.focus {
        score += 0.25;
    }
    if a.intensity != b.intensity {
        score += 0.15;
    }
    if a.is_recovery_mode != b.is_recovery_mode {
        score += 0.15;
    }
    score += 0.20 * block_composition_distance(a, b);
    score.min(1.0)
}

/// True exactly when the score strictly exceeds [`MIN_BLUEPRINT_DIVERSITY`].
pub fn blueprints_are_diverse(a: &WorkoutBlueprint, b: &WorkoutBlueprint) -> bool {
    blueprint_diversity_score(a, b) > MIN_BLUEPRINT_DIVERSITY
}

/// Fraction of structurally differing blocks, position by position.
/// Differing block counts are maximally distant.
fn block_composition_distance(a: &WorkoutBlueprint, b: &WorkoutBlueprint) -> f64 {
    if a.blocks.len() != b.blocks.len() {
        return 1.0;
    }
    if a.blocks.is_empty() {
        return 0.0;
    }
    let differing = a
        .blocks
        .iter()
        .zip(b.blocks.iter())
        .filter(|(x, y)| {
            x.phase_kind != y.phase_kind
                || x.exercise_count != y.exercise_count
                || x.sets_range != y.sets_range
                || x.reps_range != y.reps_range
                || x.rest_seconds != y.rest_seconds
                || x.rpe_target != y.rpe_target
        })
        .count();
    differing as f64 / a.blocks.len() as f64
}

// ---------------------------------------------------------------------------
// Plan structural diversity
// ---------------------------------------------------------------------------

/// Score a new plan's structural distance from history.
///
/// Empty history scores 1.0 and always passes. Otherwise the score is
/// `1 - max similarity` against any single history entry, so one
/// near-duplicate is enough to fail the gate.
pub fn analyze_plan_diversity(new_plan: &WorkoutPlan, history: &[WorkoutPlan]) -> DiversityResult {
    let score = if history.is_empty() {
        1.0
    } else {
        let max_similarity = history
            .iter()
            .map(|prev| plan_similarity(new_plan, prev))
            .fold(0.0_f64, f64::max);
        1.0 - max_similarity
    };
    DiversityResult {
        score,
        threshold: MIN_PLAN_DIVERSITY,
        is_diverse: score >= MIN_PLAN_DIVERSITY,
    }
}

/// Structural similarity of two plans, in [0,1]. Exercise identity is NOT
/// considered here.
fn plan_similarity(a: &WorkoutPlan, b: &WorkoutPlan) -> f64 {
    let mut similarity = 0.0;
    if a.focus == b.focus {
        similarity += 0.20;
    }
    if a.intensity == b.intensity {
        similarity += 0.15;
    }
    if a.title == b.title {
        similarity += 0.10;
    }
    similarity += 0.25 * phase_sequence_overlap(a, b);
    similarity += 0.20 * item_count_overlap(a, b);
    similarity += 0.10 * duration_proximity(a, b);
    similarity
}

/// Fraction of positions where both plans run the same phase kind.
fn phase_sequence_overlap(a: &WorkoutPlan, b: &WorkoutPlan) -> f64 {
    let longest = a.phases.len().max(b.phases.len());
    if longest == 0 {
        return 1.0;
    }
    let matching = a
        .phases
        .iter()
        .zip(b.phases.iter())
        .filter(|(x, y)| x.kind == y.kind)
        .count();
    matching as f64 / longest as f64
}

/// Fraction of positions where both plans carry the same item count.
fn item_count_overlap(a: &WorkoutPlan, b: &WorkoutPlan) -> f64 {
    let longest = a.phases.len().max(b.phases.len());
    if longest == 0 {
        return 1.0;
    }
    let matching = a
        .phases
        .iter()
        .zip(b.phases.iter())
        .filter(|(x, y)| x.items.len() == y.items.len())
        .count();
    matching as f64 / longest as f64
}

fn duration_proximity(a: &WorkoutPlan, b: &WorkoutPlan) -> f64 {
    let (da, db) = (
        f64::from(a.estimated_duration_minutes),
        f64::from(b.estimated_duration_minutes),
    );
    let longest = da.max(db).max(1.0);
    1.0 - (da - db).abs() / longest
}

// ---------------------------------------------------------------------------
// Exercise-identity diversity (80% rule)
// ---------------------------------------------------------------------------

/// Fraction of the new plan's distinct exercise IDs that never appear in any
/// previous plan. Vacuously 1.0 with no history or no exercises; valid when
/// the fraction reaches [`EXERCISE_UNIQUENESS_MINIMUM`].
pub fn exercise_diversity(
    new_plan: &WorkoutPlan,
    history: &[WorkoutPlan],
) -> ExerciseDiversityResult {
    let new_ids: BTreeSet<&str> = new_plan
        .exercises()
        .map(|e| e.exercise_id.as_str())
        .collect();
    let seen: HashSet<&str> = history
        .iter()
        .flat_map(|plan| plan.exercises().map(|e| e.exercise_id.as_str()))
        .collect();

    if new_ids.is_empty() {
        return ExerciseDiversityResult {
            unique_fraction: 1.0,
            is_valid: true,
            repeated_ids: Vec::new(),
        };
    }

    let repeated_ids: Vec<String> = new_ids
        .iter()
        .filter(|id| seen.contains(**id))
        .map(|id| (*id).to_string())
        .collect();
    let unique = new_ids.len() - repeated_ids.len();
    let unique_fraction = unique as f64 / new_ids.len() as f64;

    ExerciseDiversityResult {
        unique_fraction,
        is_valid: unique_fraction >= EXERCISE_UNIQUENESS_MINIMUM,
        repeated_ids,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::plan_engine::engine::blueprint_from_input;
    use crate::plan_engine::input::BlueprintInput;
    use crate::plan_engine::models::*;
    use chrono::Utc;
    use uuid::Uuid;

    fn profile(goal: FitnessGoal) -> UserProfile {
        UserProfile {
            goal,
            structure: EquipmentStructure::FullGym,
            level: TrainingLevel::Intermediate,
            weekly_frequency: 3,
            health_conditions: vec![],
        }
    }

    fn check_in() -> DailyCheckIn {
        DailyCheckIn {
            focus: WorkoutFocus::FullBody,
            soreness_level: SorenessLevel::None,
            soreness_areas: vec![],
            energy_level: EnergyLevel::Moderate,
        }
    }

    fn blueprint(goal: FitnessGoal, seed: u64) -> WorkoutBlueprint {
        blueprint_from_input(&BlueprintInput::with_seed(&profile(goal), &check_in(), seed))
    }

    fn bare_plan(ids: &[&str]) -> WorkoutPlan {
        WorkoutPlan {
            id: Uuid::new_v4(),
            title: "Session".to_string(),
            focus: WorkoutFocus::FullBody,
            estimated_duration_minutes: 40,
            intensity: IntensityTier::Moderate,
            phases: vec![WorkoutPhase {
                kind: PhaseKind::Strength,
                items: ids
                    .iter()
                    .map(|id| {
                        PhaseItem::Exercise(ExercisePrescription {
                            exercise_id: (*id).to_string(),
                            name: (*id).to_string(),
                            sets: 3,
                            reps: 10,
                            rest_seconds: 60,
                            equipment: vec![Equipment::Bodyweight],
                        })
                    })
                    .collect(),
            }],
            created_at: Utc::now(),
        }
    }

    #[test]
    fn seed_only_difference_scores_zero() {
        let a = blueprint(FitnessGoal::Hypertrophy, 1);
        let b = blueprint(FitnessGoal::Hypertrophy, 2);
        let score = blueprint_diversity_score(&a, &b);
        assert!(score < 0.5, "seed-only pair scored {score}");
        assert!(!blueprints_are_diverse(&a, &b));
    }

    #[test]
    fn goal_difference_is_diverse() {
        let a = blueprint(FitnessGoal::Hypertrophy, 1);
        let b = blueprint(FitnessGoal::Endurance, 1);
        assert!(blueprints_are_diverse(&a, &b));
    }

    #[test]
    fn soreness_difference_is_diverse() {
        let a = blueprint(FitnessGoal::Hypertrophy, 1);
        let mut sore = check_in();
        sore.soreness_level = SorenessLevel::Strong;
        let b = blueprint_from_input(&BlueprintInput::with_seed(
            &profile(FitnessGoal::Hypertrophy),
            &sore,
            1,
        ));
        assert!(blueprints_are_diverse(&a, &b));
    }

    #[test]
    fn empty_history_scores_one() {
        let plan = bare_plan(&["squat"]);
        let result = analyze_plan_diversity(&plan, &[]);
        assert_eq!(result.score, 1.0);
        assert!(result.is_diverse);
    }

    #[test]
    fn identical_plan_fails_structural_gate() {
        let plan = bare_plan(&["squat", "bench"]);
        let result = analyze_plan_diversity(&plan, std::slice::from_ref(&plan));
        assert!(result.score < MIN_PLAN_DIVERSITY, "score was {}", result.score);
        assert!(!result.is_diverse);
    }

    #[test]
    fn disjoint_exercise_ids_score_one() {
        let new_plan = bare_plan(&["a", "b", "c"]);
        let old = bare_plan(&["x", "y"]);
        let result = exercise_diversity(&new_plan, &[old]);
        assert_eq!(result.unique_fraction, 1.0);
        assert!(result.is_valid);
        assert!(result.repeated_ids.is_empty());
    }

    #[test]
    fn full_overlap_fails_eighty_percent_rule() {
        let new_plan = bare_plan(&["a", "b", "c"]);
        let old = bare_plan(&["a", "b", "c"]);
        let result = exercise_diversity(&new_plan, &[old]);
        assert_eq!(result.unique_fraction, 0.0);
        assert!(!result.is_valid);
        assert_eq!(result.repeated_ids.len(), 3);
    }

    #[test]
    fn no_exercises_is_vacuously_unique() {
        let mut empty = bare_plan(&[]);
        empty.phases[0].items.clear();
        let result = exercise_diversity(&empty, &[bare_plan(&["a"])]);
        assert_eq!(result.unique_fraction, 1.0);
        assert!(result.is_valid);
    }
}
