use std::collections::BTreeSet;
use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// ---------------------------------------------------------------------------
// Profile / check-in primitives
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FitnessGoal {
    Hypertrophy,
    WeightLoss,
    Endurance,
    Performance,
    Conditioning,
}

impl fmt::Display for FitnessGoal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            FitnessGoal::Hypertrophy  => "Hypertrophy",
            FitnessGoal::WeightLoss   => "Weight Loss",
            FitnessGoal::Endurance    => "Endurance",
            FitnessGoal::Performance  => "Performance",
            FitnessGoal::Conditioning => "Conditioning",
        };
        write!(f, "{}", s)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EquipmentStructure {
    Bodyweight,
    HomeBasic,
    FullGym,
}

impl fmt::Display for EquipmentStructure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            EquipmentStructure::Bodyweight => "Bodyweight",
            EquipmentStructure::HomeBasic  => "Home Basic",
            EquipmentStructure::FullGym    => "Full Gym",
        };
        write!(f, "{}", s)
    }
}

/// Declaration order is training-experience order: Beginner < Advanced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum TrainingLevel {
    Beginner,
    Intermediate,
    Advanced,
}

impl fmt::Display for TrainingLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TrainingLevel::Beginner     => write!(f, "Beginner"),
            TrainingLevel::Intermediate => write!(f, "Intermediate"),
            TrainingLevel::Advanced     => write!(f, "Advanced"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WorkoutFocus {
    FullBody,
    UpperBody,
    LowerBody,
    Push,
    Pull,
    Core,
}

impl fmt::Display for WorkoutFocus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            WorkoutFocus::FullBody  => "Full Body",
            WorkoutFocus::UpperBody => "Upper Body",
            WorkoutFocus::LowerBody => "Lower Body",
            WorkoutFocus::Push      => "Push",
            WorkoutFocus::Pull      => "Pull",
            WorkoutFocus::Core      => "Core",
        };
        write!(f, "{}", s)
    }
}

/// Declaration order is severity order: None < Strong.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum SorenessLevel {
    None,
    Mild,
    Moderate,
    Strong,
}

/// Declaration order is energy order: Low < High.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum EnergyLevel {
    Low,
    Moderate,
    High,
}

/// Declaration order is intensity order: Low < High.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum IntensityTier {
    Low,
    Moderate,
    High,
}

impl fmt::Display for IntensityTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IntensityTier::Low      => write!(f, "Low"),
            IntensityTier::Moderate => write!(f, "Moderate"),
            IntensityTier::High     => write!(f, "High"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum MuscleGroup {
    Chest,
    Back,
    Shoulders,
    Biceps,
    Triceps,
    Quads,
    Hamstrings,
    Glutes,
    Calves,
    Core,
}

impl fmt::Display for MuscleGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            MuscleGroup::Chest      => "Chest",
            MuscleGroup::Back       => "Back",
            MuscleGroup::Shoulders  => "Shoulders",
            MuscleGroup::Biceps     => "Biceps",
            MuscleGroup::Triceps    => "Triceps",
            MuscleGroup::Quads      => "Quads",
            MuscleGroup::Hamstrings => "Hamstrings",
            MuscleGroup::Glutes     => "Glutes",
            MuscleGroup::Calves     => "Calves",
            MuscleGroup::Core       => "Core",
        };
        write!(f, "{}", s)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Equipment {
    Bodyweight,
    Dumbbell,
    Barbell,
    Kettlebell,
    ResistanceBand,
    PullUpBar,
    Bench,
    Machine,
    Cable,
}

impl Equipment {
    /// The complete equipment catalogue, in canonical order.
    pub const ALL: &'static [Equipment] = &[
        Equipment::Bodyweight,
        Equipment::Dumbbell,
        Equipment::Barbell,
        Equipment::Kettlebell,
        Equipment::ResistanceBand,
        Equipment::PullUpBar,
        Equipment::Bench,
        Equipment::Machine,
        Equipment::Cable,
    ];
}

impl fmt::Display for Equipment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Equipment::Bodyweight     => "Bodyweight",
            Equipment::Dumbbell       => "Dumbbell",
            Equipment::Barbell        => "Barbell",
            Equipment::Kettlebell     => "Kettlebell",
            Equipment::ResistanceBand => "Resistance Band",
            Equipment::PullUpBar      => "Pull-up Bar",
            Equipment::Bench          => "Bench",
            Equipment::Machine        => "Machine",
            Equipment::Cable          => "Cable",
        };
        write!(f, "{}", s)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    pub goal: FitnessGoal,
    pub structure: EquipmentStructure,
    pub level: TrainingLevel,
    pub weekly_frequency: u8,
    pub health_conditions: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyCheckIn {
    pub focus: WorkoutFocus,
    pub soreness_level: SorenessLevel,
    pub soreness_areas: Vec<MuscleGroup>,
    pub energy_level: EnergyLevel,
}

// ---------------------------------------------------------------------------
// Blueprint types
// ---------------------------------------------------------------------------

/// Inclusive `lower..=upper` bounds for sets or reps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValueRange {
    pub lower: u8,
    pub upper: u8,
}

impl ValueRange {
    pub fn new(lower: u8, upper: u8) -> Self {
        debug_assert!(lower <= upper, "ValueRange lower must not exceed upper");
        ValueRange { lower, upper }
    }

    pub fn contains(self, value: u8) -> bool {
        value >= self.lower && value <= self.upper
    }

    /// Clamp `value` into the inclusive range.
    pub fn clamp(self, value: u8) -> u8 {
        value.max(self.lower).min(self.upper)
    }
}

impl fmt::Display for ValueRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.lower, self.upper)
    }
}

/// Workout phase categories. Declaration order IS the canonical phase order
/// used by blueprint assembly and plan normalization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PhaseKind {
    Warmup,
    Strength,
    Aerobic,
    Finisher,
    Cooldown,
}

impl PhaseKind {
    /// Position in the canonical warmup → cooldown sequence.
    pub fn canonical_order(self) -> u8 {
        match self {
            PhaseKind::Warmup   => 0,
            PhaseKind::Strength => 1,
            PhaseKind::Aerobic  => 2,
            PhaseKind::Finisher => 3,
            PhaseKind::Cooldown => 4,
        }
    }
}

impl fmt::Display for PhaseKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            PhaseKind::Warmup   => "Warmup",
            PhaseKind::Strength => "Strength",
            PhaseKind::Aerobic  => "Aerobic",
            PhaseKind::Finisher => "Finisher",
            PhaseKind::Cooldown => "Cooldown",
        };
        write!(f, "{}", s)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GuidedActivityKind {
    AerobicZone2,
    Hiit,
    MobilityFlow,
    BreathingCooldown,
}

impl fmt::Display for GuidedActivityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            GuidedActivityKind::AerobicZone2      => "Zone 2 Aerobic",
            GuidedActivityKind::Hiit              => "HIIT",
            GuidedActivityKind::MobilityFlow      => "Mobility Flow",
            GuidedActivityKind::BreathingCooldown => "Breathing Cooldown",
        };
        write!(f, "{}", s)
    }
}

/// Guided (timed, exercise-free) segment attached to a blueprint block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GuidedActivityBlueprint {
    pub kind: GuidedActivityKind,
    pub minutes: u16,
}

/// One phase-level block of the structural template: how many exercises,
/// which set/rep ranges, how much rest, which muscles — no concrete
/// exercises yet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkoutBlockBlueprint {
    pub phase_kind: PhaseKind,
    pub title: String,
    pub exercise_count: u8,
    pub sets_range: ValueRange,
    pub reps_range: ValueRange,
    pub rest_seconds: u16,
    /// Rate of Perceived Exertion target, 1-10.
    pub rpe_target: u8,
    pub target_muscles: Vec<MuscleGroup>,
    pub guided_activity: Option<GuidedActivityBlueprint>,
}

/// Equipment the bound plan may and may not use. `allowed` is never empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EquipmentConstraints {
    pub allowed: BTreeSet<Equipment>,
    pub forbidden: BTreeSet<Equipment>,
}

impl EquipmentConstraints {
    pub fn permits(&self, equipment: Equipment) -> bool {
        self.allowed.contains(&equipment)
    }
}

/// Blueprint schema version stamped on every generated blueprint.
pub const BLUEPRINT_VERSION: u8 = 1;

/// Structural workout template produced by the engine. Immutable once
/// generated; consumed by the normalizer and the quality gate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkoutBlueprint {
    pub variation_seed: u64,
    pub title: String,
    pub focus: WorkoutFocus,
    pub goal: FitnessGoal,
    pub structure: EquipmentStructure,
    pub level: TrainingLevel,
    pub intensity: IntensityTier,
    pub estimated_duration_minutes: u16,
    pub blocks: Vec<WorkoutBlockBlueprint>,
    pub equipment_constraints: EquipmentConstraints,
    pub is_recovery_mode: bool,
    pub version: u8,
}

impl WorkoutBlueprint {
    /// First block of the given phase kind, if any.
    pub fn block_for(&self, kind: PhaseKind) -> Option<&WorkoutBlockBlueprint> {
        self.blocks.iter().find(|b| b.phase_kind == kind)
    }
}

// ---------------------------------------------------------------------------
// Concrete plan types
// ---------------------------------------------------------------------------

/// A concrete exercise bound to a prescription by the upstream composer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExercisePrescription {
    pub exercise_id: String,
    pub name: String,
    pub sets: u8,
    pub reps: u8,
    pub rest_seconds: u16,
    pub equipment: Vec<Equipment>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GuidedActivity {
    pub kind: GuidedActivityKind,
    pub minutes: u16,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum PhaseItem {
    Exercise(ExercisePrescription),
    Guided(GuidedActivity),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkoutPhase {
    pub kind: PhaseKind,
    pub items: Vec<PhaseItem>,
}

/// Finished workout: real exercises bound to a blueprint's prescriptions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkoutPlan {
    pub id: Uuid,
    pub title: String,
    pub focus: WorkoutFocus,
    pub estimated_duration_minutes: u16,
    pub intensity: IntensityTier,
    pub phases: Vec<WorkoutPhase>,
    pub created_at: DateTime<Utc>,
}

impl WorkoutPlan {
    /// Iterate over every exercise prescription across all phases.
    pub fn exercises(&self) -> impl Iterator<Item = &ExercisePrescription> {
        self.phases.iter().flat_map(|p| {
            p.items.iter().filter_map(|item| match item {
                PhaseItem::Exercise(e) => Some(e),
                PhaseItem::Guided(_) => None,
            })
        })
    }
}

// ---------------------------------------------------------------------------
// Quality-gate result types
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationIssue {
    pub exercise_id: String,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationResult {
    pub issues: Vec<ValidationIssue>,
    pub has_critical_issues: bool,
}

impl ValidationResult {
    pub fn clean() -> Self {
        ValidationResult { issues: Vec::new(), has_critical_issues: false }
    }
}

/// Outcome of a structural or blueprint diversity comparison.
/// `score` is in [0,1]; LOWER means MORE similar.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DiversityResult {
    pub score: f64,
    pub threshold: f64,
    pub is_diverse: bool,
}

/// Outcome of the exercise-identity 80% uniqueness rule.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExerciseDiversityResult {
    /// Fraction of the new plan's exercise IDs never seen in history.
    pub unique_fraction: f64,
    pub is_valid: bool,
    /// Exercise IDs that also appear in a previous plan.
    pub repeated_ids: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum QualityGateStatus {
    Passed,
    NormalizedAndPassed,
    FailedValidation,
    FailedDiversity,
    FailedExerciseDiversity,
}

impl QualityGateStatus {
    pub fn is_success(self) -> bool {
        matches!(self, QualityGateStatus::Passed | QualityGateStatus::NormalizedAndPassed)
    }
}

impl fmt::Display for QualityGateStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            QualityGateStatus::Passed                  => "passed",
            QualityGateStatus::NormalizedAndPassed     => "normalized_and_passed",
            QualityGateStatus::FailedValidation        => "failed_validation",
            QualityGateStatus::FailedDiversity         => "failed_diversity",
            QualityGateStatus::FailedExerciseDiversity => "failed_exercise_diversity",
        };
        write!(f, "{}", s)
    }
}

/// Terminal outcome of the quality-gate pipeline. `final_plan` is present
/// only when `status.is_success()`; the diversity fields are populated for
/// every stage actually reached, success included, for telemetry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QualityGateResult {
    pub status: QualityGateStatus,
    pub final_plan: Option<WorkoutPlan>,
    pub validation: ValidationResult,
    pub diversity: Option<DiversityResult>,
    pub exercise_diversity: Option<ExerciseDiversityResult>,
}
