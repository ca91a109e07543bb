//! Core pipeline — blueprint generation, normalization, and the quality gate.
//!
//! ## Module overview
//!
//! | Module         | Purpose |
//! |----------------|---------|
//! | `models`       | All shared value types: profile, check-in, blueprint, plan, gate results |
//! | `rng`          | Seeded deterministic generator with reproducible sampling |
//! | `input`        | `BlueprintInput` factory: fresh seed per call, stable cache key |
//! | `helpers`      | Shared block builders, ranges, muscle pools, duration math |
//! | `engine`       | `generate_blueprint()` entry point — dispatches to goal modules |
//! | `goals`        | Per-goal block generators (hypertrophy, weight loss, ...) |
//! | `diversity`    | Blueprint/plan similarity scoring and the 80% exercise rule |
//! | `normalizer`   | Clamps and reorders a composed plan to fit its blueprint |
//! | `quality_gate` | Validate → normalize → diversity state machine + retry feedback |

pub mod diversity;
pub mod engine;
pub mod goals;
pub mod helpers;
pub mod input;
pub mod models;
pub mod normalizer;
pub mod quality_gate;
pub mod rng;

// Re-export the public API surface so callers can use
// `plan_engine::generate_blueprint` without reaching into sub-modules.
pub use engine::{blueprint_from_input, generate_blueprint};
pub use input::BlueprintInput;
pub use models::{
    DailyCheckIn, EnergyLevel, Equipment, EquipmentConstraints, EquipmentStructure,
    ExerciseDiversityResult, ExercisePrescription, FitnessGoal, GuidedActivity,
    GuidedActivityKind, IntensityTier, MuscleGroup, PhaseItem, PhaseKind, QualityGateResult,
    QualityGateStatus, SorenessLevel, TrainingLevel, UserProfile, ValidationResult, ValueRange,
    WorkoutBlockBlueprint, WorkoutBlueprint, WorkoutFocus, WorkoutPhase, WorkoutPlan,
};
pub use rng::SeededRandomGenerator;
