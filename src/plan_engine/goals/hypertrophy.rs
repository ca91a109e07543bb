use crate::plan_engine::helpers::{select_targets, sets_range_for_level};
use crate::plan_engine::models::{
    MuscleGroup, PhaseKind, TrainingLevel, ValueRange, WorkoutBlockBlueprint, WorkoutFocus,
};
use crate::plan_engine::rng::SeededRandomGenerator;

pub const TITLES: &[&str] = &["Mass Builder", "Volume Day", "Growth Session"];

/// Hypertrophy: two strength blocks in the classic 8-12 rep window, both at
/// or above RPE 7, with full inter-set rest.
pub fn blocks(
    rng: &mut SeededRandomGenerator,
    level: TrainingLevel,
    focus: WorkoutFocus,
    sore_areas: &[MuscleGroup],
) -> Vec<WorkoutBlockBlueprint> {
    let sets_range = sets_range_for_level(level);
    vec![
        WorkoutBlockBlueprint {
            phase_kind: PhaseKind::Strength,
            title: "Primary Compounds".to_string(),
            exercise_count: 3,
            sets_range,
            reps_range: ValueRange::new(8, 12),
            rest_seconds: 90,
            rpe_target: 8,
            target_muscles: select_targets(rng, focus, 3, sore_areas),
            guided_activity: None,
        },
        WorkoutBlockBlueprint {
            phase_kind: PhaseKind::Strength,
            title: "Isolation Volume".to_string(),
            exercise_count: 2,
            sets_range,
            reps_range: ValueRange::new(10, 12),
            rest_seconds: 75,
            rpe_target: 7,
            target_muscles: select_targets(rng, focus, 2, sore_areas),
            guided_activity: None,
        },
    ]
}
