//! # workout_plan_gen
//!
//! A fully offline, deterministic workout blueprint generator and plan
//! quality gate.
//!
//! The crate has two halves:
//!
//! 1. **Blueprint generation** — turn a user profile + daily check-in into a
//!    [`WorkoutBlueprint`]: a structural template (phases, exercise counts,
//!    set/rep ranges, rest, RPE targets, equipment constraints) with no
//!    concrete exercises bound yet. Goal, level, energy and soreness drive
//!    the structure; a per-call variation seed drives selection and naming
//!    only.
//! 2. **Quality gate** — once an upstream composer binds real exercises into
//!    a [`WorkoutPlan`], run it through
//!    [`quality_gate::evaluate`](plan_engine::quality_gate::evaluate):
//!    validate equipment against the blueprint, normalize sets and phase
//!    order, and score the plan against recent history for structural and
//!    exercise-identity diversity. Failures produce a corrective instruction
//!    via [`quality_gate::retry_feedback`](plan_engine::quality_gate::retry_feedback)
//!    meant to be replayed to the composer on retry.
//!
//! ## Key properties
//!
//! - **Deterministic**: pin the seed with [`BlueprintInput::with_seed`] and
//!   [`blueprint_from_input`] reproduces the exact same blueprint every
//!   time. [`generate_blueprint`] draws a fresh seed per call, so repeated
//!   calls vary in selection while agreeing on structure.
//! - **Total**: the gate never panics and never throws — every outcome is a
//!   [`QualityGateStatus`], including defensive handling of malformed input.
//! - **Pure**: no I/O, no globals, no clocks inside the pipeline (plan
//!   timestamps are supplied by the caller's plan, not read here).
//!
//! ## Quick start
//!
//! ```rust
//! use workout_plan_gen::{
//!     blueprint_from_input, BlueprintInput, DailyCheckIn, EnergyLevel, EquipmentStructure,
//!     FitnessGoal, SorenessLevel, TrainingLevel, UserProfile, WorkoutFocus,
//! };
//!
//! let profile = UserProfile {
//!     goal: FitnessGoal::Hypertrophy,
//!     structure: EquipmentStructure::FullGym,
//!     level: TrainingLevel::Intermediate,
//!     weekly_frequency: 4,
//!     health_conditions: vec![],
//! };
//! let check_in = DailyCheckIn {
//!     focus: WorkoutFocus::UpperBody,
//!     soreness_level: SorenessLevel::Mild,
//!     soreness_areas: vec![],
//!     energy_level: EnergyLevel::High,
//! };
//!
//! // Deterministic path: pin the variation seed.
//! let input = BlueprintInput::with_seed(&profile, &check_in, 42);
//! let blueprint = blueprint_from_input(&input);
//!
//! println!("{} — {} blocks, ~{} min", blueprint.title,
//!     blueprint.blocks.len(), blueprint.estimated_duration_minutes);
//! assert_eq!(blueprint, blueprint_from_input(&input));
//! ```

pub mod plan_engine;
pub mod telemetry;

// Convenience re-exports so callers can use `workout_plan_gen::generate_blueprint`
// directly without reaching into `plan_engine::`.
pub use plan_engine::{
    blueprint_from_input, generate_blueprint, BlueprintInput, DailyCheckIn, EnergyLevel,
    Equipment, EquipmentConstraints, EquipmentStructure, ExerciseDiversityResult,
    ExercisePrescription, FitnessGoal, GuidedActivity, GuidedActivityKind, IntensityTier,
    MuscleGroup, PhaseItem, PhaseKind, QualityGateResult, QualityGateStatus,
    SeededRandomGenerator, SorenessLevel, TrainingLevel, UserProfile, ValidationResult,
    ValueRange, WorkoutBlockBlueprint, WorkoutBlueprint, WorkoutFocus, WorkoutPhase,
    WorkoutPlan,
};
