use crate::plan_engine::helpers::{select_targets, sets_range_for_level};
use crate::plan_engine::models::{
    MuscleGroup, PhaseKind, TrainingLevel, ValueRange, WorkoutBlockBlueprint, WorkoutFocus,
};
use crate::plan_engine::rng::SeededRandomGenerator;

pub const TITLES: &[&str] = &["Power Session", "Athlete Day", "Force Output"];

/// Performance: balanced strength blocks at moderate rest, closed with a
/// short explosive finisher.
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
            title: "Explosive Strength".to_string(),
            exercise_count: 3,
            sets_range,
            reps_range: ValueRange::new(5, 8),
            rest_seconds: 75,
            rpe_target: 7,
            target_muscles: select_targets(rng, focus, 3, sore_areas),
            guided_activity: None,
        },
        WorkoutBlockBlueprint {
            phase_kind: PhaseKind::Strength,
            title: "Accessory Strength".to_string(),
            exercise_count: 2,
            sets_range,
            reps_range: ValueRange::new(8, 10),
            rest_seconds: 75,
            rpe_target: 7,
            target_muscles: select_targets(rng, focus, 2, sore_areas),
            guided_activity: None,
        },
        WorkoutBlockBlueprint {
            phase_kind: PhaseKind::Finisher,
            title: "Power Finisher".to_string(),
            exercise_count: 1,
            sets_range: ValueRange::new(2, 3),
            reps_range: ValueRange::new(6, 10),
            rest_seconds: 60,
            rpe_target: 8,
            target_muscles: select_targets(rng, focus, 1, sore_areas),
            guided_activity: None,
        },
    ]
}
