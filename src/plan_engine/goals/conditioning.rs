use crate::plan_engine::helpers::{aerobic_block, select_targets, sets_range_for_level};
use crate::plan_engine::models::{
    GuidedActivityKind, MuscleGroup, PhaseKind, TrainingLevel, ValueRange,
    WorkoutBlockBlueprint, WorkoutFocus,
};
use crate::plan_engine::rng::SeededRandomGenerator;

pub const TITLES: &[&str] = &["Conditioning Mix", "Work Capacity", "Sweat Equity"];

/// Conditioning: one balanced strength block at moderate rest plus a short
/// high-intensity interval segment.
pub fn blocks(
    rng: &mut SeededRandomGenerator,
    level: TrainingLevel,
    focus: WorkoutFocus,
    sore_areas: &[MuscleGroup],
) -> Vec<WorkoutBlockBlueprint> {
    vec![
        WorkoutBlockBlueprint {
            phase_kind: PhaseKind::Strength,
            title: "Mixed Modal Strength".to_string(),
            exercise_count: 3,
            sets_range: sets_range_for_level(level),
            reps_range: ValueRange::new(10, 15),
            rest_seconds: 60,
            rpe_target: 7,
            target_muscles: select_targets(rng, focus, 3, sore_areas),
            guided_activity: None,
        },
        aerobic_block(GuidedActivityKind::Hiit, 10, 8),
    ]
}
