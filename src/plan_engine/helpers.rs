//! Shared builder functions used by every goal module.
//!
//! Each goal generator assembles the same pieces: a warmup, one or more
//! strength blocks, optional aerobic/finisher work, and a cooldown. These
//! helpers centralise ranges, rest values, muscle pools and duration math so
//! goal files focus on goal-specific structure only.
//!
//! ## RNG ordering
//!
//! Target-muscle selection draws from the seeded generator in block order.
//! Structural values (block count, exercise counts, ranges) never touch the
//! RNG — the variation seed must only influence selection and ordering,
//! never structure.

use std::collections::BTreeSet;

use crate::plan_engine::models::{
    Equipment, EquipmentConstraints, EquipmentStructure, GuidedActivityBlueprint,
    GuidedActivityKind, MuscleGroup, PhaseKind, TrainingLevel, ValueRange,
    WorkoutBlockBlueprint, WorkoutFocus,
};
use crate::plan_engine::rng::SeededRandomGenerator;

/// Warmup rest between movements outside recovery mode.
pub const BASE_WARMUP_REST_SECONDS: u16 = 20;

/// Warmup rest when recovery mode is active. Must stay >= the base value.
pub const RECOVERY_WARMUP_REST_SECONDS: u16 = 40;

/// Extra rest injected into every non-warmup block in recovery mode.
pub const RECOVERY_EXTRA_REST_SECONDS: u16 = 30;

/// Set ranges widen with experience; the upper bound is monotone
/// non-decreasing from beginner to advanced.
pub fn sets_range_for_level(level: TrainingLevel) -> ValueRange {
    match level {
        TrainingLevel::Beginner     => ValueRange::new(2, 3),
        TrainingLevel::Intermediate => ValueRange::new(3, 4),
        TrainingLevel::Advanced     => ValueRange::new(3, 5),
    }
}

/// Muscle pool a focus is allowed to target.
pub fn muscles_for_focus(focus: WorkoutFocus) -> &'static [MuscleGroup] {
    match focus {
        WorkoutFocus::FullBody => &[
            MuscleGroup::Chest, MuscleGroup::Back, MuscleGroup::Shoulders,
            MuscleGroup::Quads, MuscleGroup::Hamstrings, MuscleGroup::Glutes,
            MuscleGroup::Core,
        ],
        WorkoutFocus::UpperBody => &[
            MuscleGroup::Chest, MuscleGroup::Back, MuscleGroup::Shoulders,
            MuscleGroup::Biceps, MuscleGroup::Triceps,
        ],
        WorkoutFocus::LowerBody => &[
            MuscleGroup::Quads, MuscleGroup::Hamstrings, MuscleGroup::Glutes,
            MuscleGroup::Calves,
        ],
        WorkoutFocus::Push => &[
            MuscleGroup::Chest, MuscleGroup::Shoulders, MuscleGroup::Triceps,
        ],
        WorkoutFocus::Pull => &[
            MuscleGroup::Back, MuscleGroup::Biceps, MuscleGroup::Shoulders,
        ],
        WorkoutFocus::Core => &[
            MuscleGroup::Core, MuscleGroup::Glutes,
        ],
    }
}

/// Pick `count` target muscles for a block. Sore areas are dropped from the
/// pool when enough non-sore muscles remain for the focus; otherwise the
/// full pool is used so the block is never under-targeted.
pub fn select_targets(
    rng: &mut SeededRandomGenerator,
    focus: WorkoutFocus,
    count: usize,
    sore_areas: &[MuscleGroup],
) -> Vec<MuscleGroup> {
    let pool = muscles_for_focus(focus);
    let rested: Vec<MuscleGroup> = pool
        .iter()
        .copied()
        .filter(|m| !sore_areas.contains(m))
        .collect();
    if rested.len() >= count {
        rng.select_elements(&rested, count)
    } else {
        rng.select_elements(pool, count)
    }
}

/// Equipment constraints derived deterministically from the structure.
pub fn equipment_for_structure(structure: EquipmentStructure) -> EquipmentConstraints {
    let home_set = [
        Equipment::Bodyweight,
        Equipment::Dumbbell,
        Equipment::Kettlebell,
        Equipment::ResistanceBand,
        Equipment::PullUpBar,
    ];
    match structure {
        EquipmentStructure::Bodyweight => EquipmentConstraints {
            allowed: BTreeSet::from([Equipment::Bodyweight]),
            forbidden: BTreeSet::new(),
        },
        EquipmentStructure::HomeBasic => {
            let allowed: BTreeSet<Equipment> = home_set.into_iter().collect();
            let forbidden = Equipment::ALL
                .iter()
                .copied()
                .filter(|e| !allowed.contains(e))
                .collect();
            EquipmentConstraints { allowed, forbidden }
        }
        EquipmentStructure::FullGym => EquipmentConstraints {
            allowed: Equipment::ALL.iter().copied().collect(),
            forbidden: BTreeSet::new(),
        },
    }
}

/// Standard warmup block shared by every goal.
pub fn warmup_block(
    rng: &mut SeededRandomGenerator,
    focus: WorkoutFocus,
    sore_areas: &[MuscleGroup],
    recovery: bool,
) -> WorkoutBlockBlueprint {
    WorkoutBlockBlueprint {
        phase_kind: PhaseKind::Warmup,
        title: "Activation & Mobility".to_string(),
        exercise_count: 3,
        sets_range: ValueRange::new(1, 2),
        reps_range: ValueRange::new(10, 15),
        rest_seconds: if recovery {
            RECOVERY_WARMUP_REST_SECONDS
        } else {
            BASE_WARMUP_REST_SECONDS
        },
        rpe_target: 3,
        target_muscles: select_targets(rng, focus, 3, sore_areas),
        guided_activity: None,
    }
}

/// Standard cooldown block shared by every goal: a short guided breathing
/// segment plus light stretching targets.
pub fn cooldown_block(
    rng: &mut SeededRandomGenerator,
    focus: WorkoutFocus,
    sore_areas: &[MuscleGroup],
) -> WorkoutBlockBlueprint {
    WorkoutBlockBlueprint {
        phase_kind: PhaseKind::Cooldown,
        title: "Stretch & Breathe".to_string(),
        exercise_count: 2,
        sets_range: ValueRange::new(1, 1),
        reps_range: ValueRange::new(8, 12),
        rest_seconds: 15,
        rpe_target: 2,
        target_muscles: select_targets(rng, focus, 2, sore_areas),
        guided_activity: Some(GuidedActivityBlueprint {
            kind: GuidedActivityKind::BreathingCooldown,
            minutes: 3,
        }),
    }
}

/// Aerobic block carrying a guided activity.
pub fn aerobic_block(kind: GuidedActivityKind, minutes: u16, rpe_target: u8) -> WorkoutBlockBlueprint {
    WorkoutBlockBlueprint {
        phase_kind: PhaseKind::Aerobic,
        title: format!("{} Session", kind),
        exercise_count: 0,
        sets_range: ValueRange::new(1, 1),
        reps_range: ValueRange::new(1, 1),
        rest_seconds: 0,
        rpe_target,
        target_muscles: Vec::new(),
        guided_activity: Some(GuidedActivityBlueprint { kind, minutes }),
    }
}

/// Add recovery rest on top of every non-warmup block. The warmup already
/// carries its own recovery rest value.
pub fn inject_recovery_rest(blocks: &mut [WorkoutBlockBlueprint]) {
    for block in blocks.iter_mut() {
        if block.phase_kind != PhaseKind::Warmup {
            block.rest_seconds += RECOVERY_EXTRA_REST_SECONDS;
        }
    }
}

/// Seed-independent duration estimate: guided minutes as-is, plus roughly
/// 45 seconds of work + the block's rest per set per exercise.
pub fn estimate_duration_minutes(blocks: &[WorkoutBlockBlueprint]) -> u16 {
    let mut seconds: u32 = 0;
    for block in blocks {
        if let Some(guided) = block.guided_activity {
            seconds += u32::from(guided.minutes) * 60;
        }
        let mid_sets = u32::from(block.sets_range.lower) + u32::from(block.sets_range.upper);
        let sets = mid_sets.div_ceil(2);
        seconds +=
            u32::from(block.exercise_count) * sets * (45 + u32::from(block.rest_seconds));
    }
    (seconds.div_ceil(60)) as u16
}

/// Pick a session title from a per-goal pool. Seed-driven: titles vary
/// across seeds while the structure does not.
pub fn pick_title(
    rng: &mut SeededRandomGenerator,
    pool: &[&str],
    focus: WorkoutFocus,
) -> String {
    format!("{} — {}", rng.pick(pool), focus)
}
