use crate::plan_engine::models::{PhaseItem, WorkoutBlueprint, WorkoutPlan};

/// Result of normalizing a plan against its blueprint. `adjustments` counts
/// individual values changed (clamped sets + phases moved), so the gate can
/// distinguish `Passed` from `NormalizedAndPassed`.
#[derive(Debug, Clone, PartialEq)]
pub struct NormalizationOutcome {
    pub plan: WorkoutPlan,
    pub adjustments: usize,
}

impl NormalizationOutcome {
    pub fn adjusted(&self) -> bool {
        self.adjustments > 0
    }
}

/// Clamp every prescription's sets into its phase's blueprint range and
/// reorder phases into canonical order. Total: never drops an item, never
/// fails. Phases with no matching blueprint block are left as-is.
pub fn normalize(plan: &WorkoutPlan, blueprint: &WorkoutBlueprint) -> NormalizationOutcome {
    let mut normalized = plan.clone();
    let mut adjustments = 0usize;

    for phase in &mut normalized.phases {
        let Some(block) = blueprint.block_for(phase.kind) else {
            continue;
        };
        for item in &mut phase.items {
            if let PhaseItem::Exercise(exercise) = item {
                let clamped = block.sets_range.clamp(exercise.sets);
                if clamped != exercise.sets {
                    exercise.sets = clamped;
                    adjustments += 1;
                }
            }
        }
    }

    let before: Vec<_> = normalized.phases.iter().map(|p| p.kind).collect();
    // Stable sort keeps intra-phase item order and the relative order of
    // same-kind phases.
    normalized
        .phases
        .sort_by_key(|p| p.kind.canonical_order());
    let after: Vec<_> = normalized.phases.iter().map(|p| p.kind).collect();
    if before != after {
        adjustments += 1;
    }

    NormalizationOutcome { plan: normalized, adjustments }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::plan_engine::engine::blueprint_from_input;
    use crate::plan_engine::input::BlueprintInput;
    use crate::plan_engine::models::*;
    use chrono::Utc;
    use uuid::Uuid;

    fn blueprint() -> WorkoutBlueprint {
        let profile = UserProfile {
            goal: FitnessGoal::Hypertrophy,
            structure: EquipmentStructure::FullGym,
            level: TrainingLevel::Intermediate,
            weekly_frequency: 3,
            health_conditions: vec![],
        };
        let check_in = DailyCheckIn {
            focus: WorkoutFocus::FullBody,
            soreness_level: SorenessLevel::None,
            soreness_areas: vec![],
            energy_level: EnergyLevel::Moderate,
        };
        blueprint_from_input(&BlueprintInput::with_seed(&profile, &check_in, 42))
    }

    fn exercise(id: &str, sets: u8) -> PhaseItem {
        PhaseItem::Exercise(ExercisePrescription {
            exercise_id: id.to_string(),
            name: id.to_string(),
            sets,
            reps: 10,
            rest_seconds: 60,
            equipment: vec![Equipment::Dumbbell],
        })
    }

    fn plan(phases: Vec<WorkoutPhase>) -> WorkoutPlan {
        WorkoutPlan {
            id: Uuid::new_v4(),
            title: "Session".to_string(),
            focus: WorkoutFocus::FullBody,
            estimated_duration_minutes: 45,
            intensity: IntensityTier::Moderate,
            phases,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn oversized_sets_are_clamped_into_range() {
        let bp = blueprint();
        let strength_range = bp.block_for(PhaseKind::Strength).unwrap().sets_range;
        let p = plan(vec![WorkoutPhase {
            kind: PhaseKind::Strength,
            items: vec![exercise("squat", 10), exercise("bench", 1)],
        }]);

        let outcome = normalize(&p, &bp);
        assert!(outcome.adjusted());
        for e in outcome.plan.exercises() {
            assert!(
                strength_range.contains(e.sets),
                "sets {} outside {strength_range} for {}",
                e.sets,
                e.exercise_id
            );
        }
    }

    #[test]
    fn phases_are_reordered_canonically() {
        let bp = blueprint();
        let p = plan(vec![
            WorkoutPhase { kind: PhaseKind::Strength, items: vec![exercise("squat", 3)] },
            WorkoutPhase { kind: PhaseKind::Warmup, items: vec![exercise("jumping-jacks", 1)] },
        ]);

        let outcome = normalize(&p, &bp);
        let kinds: Vec<_> = outcome.plan.phases.iter().map(|p| p.kind).collect();
        assert_eq!(kinds, vec![PhaseKind::Warmup, PhaseKind::Strength]);
        assert!(outcome.adjusted());
    }

    #[test]
    fn intra_phase_order_is_preserved() {
        let bp = blueprint();
        let p = plan(vec![WorkoutPhase {
            kind: PhaseKind::Strength,
            items: vec![exercise("squat", 3), exercise("bench", 3), exercise("row", 3)],
        }]);

        let outcome = normalize(&p, &bp);
        let ids: Vec<_> = outcome.plan.exercises().map(|e| e.exercise_id.as_str()).collect();
        assert_eq!(ids, vec!["squat", "bench", "row"]);
    }

    #[test]
    fn conforming_plan_needs_no_adjustment() {
        let bp = blueprint();
        let in_range = bp.block_for(PhaseKind::Strength).unwrap().sets_range.lower;
        let p = plan(vec![
            WorkoutPhase { kind: PhaseKind::Warmup, items: vec![exercise("arm-circles", 1)] },
            WorkoutPhase { kind: PhaseKind::Strength, items: vec![exercise("squat", in_range)] },
        ]);

        let outcome = normalize(&p, &bp);
        assert_eq!(outcome.adjustments, 0);
        assert_eq!(outcome.plan, p);
    }

    #[test]
    fn normalization_is_idempotent() {
        let bp = blueprint();
        let p = plan(vec![
            WorkoutPhase { kind: PhaseKind::Strength, items: vec![exercise("squat", 10)] },
            WorkoutPhase { kind: PhaseKind::Warmup, items: vec![exercise("inchworm", 9)] },
        ]);

        let once = normalize(&p, &bp);
        let twice = normalize(&once.plan, &bp);
        assert_eq!(twice.adjustments, 0);
        assert_eq!(twice.plan, once.plan);
    }
}
