//! End-to-end walkthrough of blueprint generation and the quality gate.
//!
//! Run with: `cargo run --example demo`
//!
//! 1. **Blueprints per goal** — one deterministic blueprint for each fitness
//!    goal with fixed seeds, showing how goal/level/energy/soreness shape
//!    the block structure.
//! 2. **Quality gate** — a conforming plan is composed from a blueprint and
//!    pushed through the gate three times: against empty history (passes),
//!    against itself (structural diversity failure), and with out-of-range
//!    sets (normalized and passed). Failure paths print the retry feedback
//!    that would be replayed to the AI composer.

use chrono::Utc;
use uuid::Uuid;
use workout_plan_gen::plan_engine::quality_gate::{evaluate, retry_feedback};
use workout_plan_gen::telemetry::gate_event;
use workout_plan_gen::{
    blueprint_from_input, BlueprintInput, DailyCheckIn, EnergyLevel, EquipmentStructure,
    ExercisePrescription, FitnessGoal, GuidedActivity, PhaseItem, SorenessLevel, TrainingLevel,
    UserProfile, WorkoutBlueprint, WorkoutFocus, WorkoutPhase, WorkoutPlan,
};

fn print_blueprint(bp: &WorkoutBlueprint) {
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    println!(
        "  [{} — {}]  Intensity: {}  Recovery: {}  ~{} min  seed={:#x}",
        bp.goal, bp.focus, bp.intensity, bp.is_recovery_mode,
        bp.estimated_duration_minutes, bp.variation_seed
    );
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    for block in &bp.blocks {
        let guided = block
            .guided_activity
            .map(|g| format!("  [guided: {} {}min]", g.kind, g.minutes))
            .unwrap_or_default();
        println!(
            "  {:<9} {:<20} {}x ex, sets {}, reps {}, rest {}s, RPE {}{}",
            block.phase_kind.to_string(),
            block.title,
            block.exercise_count,
            block.sets_range,
            block.reps_range,
            block.rest_seconds,
            block.rpe_target,
            guided
        );
    }
}

/// Compose a plan the way the upstream AI composer would: one phase per
/// block, conforming sets, allowed equipment.
fn compose(bp: &WorkoutBlueprint, prefix: &str) -> WorkoutPlan {
    let gear = *bp.equipment_constraints.allowed.iter().next().unwrap();
    let phases = bp
        .blocks
        .iter()
        .enumerate()
        .map(|(idx, block)| {
            let mut items = Vec::new();
            if let Some(g) = block.guided_activity {
                items.push(PhaseItem::Guided(GuidedActivity { kind: g.kind, minutes: g.minutes }));
            }
            for i in 0..block.exercise_count {
                items.push(PhaseItem::Exercise(ExercisePrescription {
                    exercise_id: format!("{prefix}-{idx}-{i}"),
                    name: format!("Exercise {idx}.{i}"),
                    sets: block.sets_range.lower,
                    reps: block.reps_range.lower,
                    rest_seconds: block.rest_seconds,
                    equipment: vec![gear],
                }));
            }
            WorkoutPhase { kind: block.phase_kind, items }
        })
        .collect();
    WorkoutPlan {
        id: Uuid::new_v4(),
        title: bp.title.clone(),
        focus: bp.focus,
        estimated_duration_minutes: bp.estimated_duration_minutes,
        intensity: bp.intensity,
        phases,
        created_at: Utc::now(),
    }
}

fn main() {
    let profile = UserProfile {
        goal: FitnessGoal::Hypertrophy,
        structure: EquipmentStructure::FullGym,
        level: TrainingLevel::Intermediate,
        weekly_frequency: 4,
        health_conditions: vec![],
    };
    let check_in = DailyCheckIn {
        focus: WorkoutFocus::UpperBody,
        soreness_level: SorenessLevel::Mild,
        soreness_areas: vec![],
        energy_level: EnergyLevel::High,
    };

    println!("\n=== 1. One blueprint per goal (fixed seeds) ===\n");
    for (i, goal) in [
        FitnessGoal::Hypertrophy,
        FitnessGoal::WeightLoss,
        FitnessGoal::Endurance,
        FitnessGoal::Performance,
        FitnessGoal::Conditioning,
    ]
    .into_iter()
    .enumerate()
    {
        let mut p = profile.clone();
        p.goal = goal;
        let input = BlueprintInput::with_seed(&p, &check_in, 100 + i as u64);
        print_blueprint(&blueprint_from_input(&input));
    }

    println!("\n=== 2. Quality gate ===\n");
    let input = BlueprintInput::with_seed(&profile, &check_in, 42);
    let blueprint = blueprint_from_input(&input);
    let plan = compose(&blueprint, "demo");

    let accepted = evaluate(&plan, &blueprint, &[]);
    println!("empty history     → {}", accepted.status);
    println!("telemetry         → {}", gate_event(&accepted));

    let repeated = evaluate(&plan, &blueprint, std::slice::from_ref(&plan));
    println!("identical history → {}", repeated.status);
    if let Some(feedback) = retry_feedback(&repeated) {
        println!("retry feedback    → {feedback}");
    }

    let mut oversized = plan.clone();
    for phase in &mut oversized.phases {
        for item in &mut phase.items {
            if let PhaseItem::Exercise(e) = item {
                e.sets = 9;
            }
        }
    }
    let normalized = evaluate(&oversized, &blueprint, &[]);
    println!("oversized sets    → {}", normalized.status);
}
