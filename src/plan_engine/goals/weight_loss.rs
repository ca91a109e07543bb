use crate::plan_engine::helpers::{aerobic_block, select_targets, sets_range_for_level};
use crate::plan_engine::models::{
    GuidedActivityKind, MuscleGroup, PhaseKind, TrainingLevel, ValueRange,
    WorkoutBlockBlueprint, WorkoutFocus,
};
use crate::plan_engine::rng::SeededRandomGenerator;

pub const TITLES: &[&str] = &["Burn Circuit", "Metabolic Drive", "Calorie Crusher"];

/// Weight loss: one high-rep circuit with short rest (density over load) plus
/// a mandatory aerobic interval block.
pub fn blocks(
    rng: &mut SeededRandomGenerator,
    level: TrainingLevel,
    focus: WorkoutFocus,
    sore_areas: &[MuscleGroup],
) -> Vec<WorkoutBlockBlueprint> {
    vec![
        WorkoutBlockBlueprint {
            phase_kind: PhaseKind::Strength,
            title: "Density Circuit".to_string(),
            exercise_count: 4,
            sets_range: sets_range_for_level(level),
            reps_range: ValueRange::new(12, 15),
            rest_seconds: 45,
            rpe_target: 7,
            target_muscles: select_targets(rng, focus, 4, sore_areas),
            guided_activity: None,
        },
        aerobic_block(GuidedActivityKind::Hiit, 12, 8),
    ]
}
