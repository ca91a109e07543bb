use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};
use serde::{Deserialize, Serialize};

use crate::plan_engine::models::{
    DailyCheckIn, EnergyLevel, EquipmentStructure, FitnessGoal, MuscleGroup, SorenessLevel,
    TrainingLevel, UserProfile, WorkoutFocus,
};

/// Immutable bundle of everything blueprint generation depends on:
/// the semantic fields from profile + check-in, plus the variation seed.
///
/// `cache_key` hashes ALL fields including the seed, and the factory draws a
/// fresh seed per call, so two inputs built from identical profile/check-in
/// never collide. Semantic-level caching is therefore defeated on purpose —
/// see DESIGN.md before changing this.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlueprintInput {
    pub goal: FitnessGoal,
    pub structure: EquipmentStructure,
    pub level: TrainingLevel,
    pub focus: WorkoutFocus,
    pub soreness_level: SorenessLevel,
    pub soreness_areas: Vec<MuscleGroup>,
    pub energy_level: EnergyLevel,
    pub variation_seed: u64,
    pub cache_key: u64,
}

impl BlueprintInput {
    /// Build an input with a fresh entropy-drawn variation seed.
    /// Successive calls with the same profile/check-in yield different
    /// seeds and therefore different cache keys.
    pub fn from_check_in(profile: &UserProfile, check_in: &DailyCheckIn) -> Self {
        let seed = StdRng::from_entropy().next_u64();
        Self::with_seed(profile, check_in, seed)
    }

    /// Build an input with a pinned seed — the deterministic path used by
    /// tests and by retry orchestrators that manage seeds themselves.
    pub fn with_seed(profile: &UserProfile, check_in: &DailyCheckIn, seed: u64) -> Self {
        let mut input = BlueprintInput {
            goal: profile.goal,
            structure: profile.structure,
            level: profile.level,
            focus: check_in.focus,
            soreness_level: check_in.soreness_level,
            soreness_areas: check_in.soreness_areas.clone(),
            energy_level: check_in.energy_level,
            variation_seed: seed,
            cache_key: 0,
        };
        input.cache_key = input.compute_cache_key();
        input
    }

    /// Stable FNV-1a 64 hash over the canonical encoding of every field.
    fn compute_cache_key(&self) -> u64 {
        let mut h = Fnv1a::new();
        h.write_u8(self.goal as u8);
        h.write_u8(self.structure as u8);
        h.write_u8(self.level as u8);
        h.write_u8(self.focus as u8);
        h.write_u8(self.soreness_level as u8);
        for area in &self.soreness_areas {
            h.write_u8(*area as u8);
        }
        h.write_u8(self.energy_level as u8);
        h.write_u64(self.variation_seed);
        h.finish()
    }
}

/// Minimal FNV-1a 64-bit hasher. `std::hash` hashers are not guaranteed
/// stable across releases, and the cache key must be.
struct Fnv1a(u64);

impl Fnv1a {
    const OFFSET: u64 = 0xcbf2_9ce4_8422_2325;
    const PRIME: u64 = 0x0000_0100_0000_01b3;

    fn new() -> Self {
        Fnv1a(Self::OFFSET)
    }

    fn write_u8(&mut self, byte: u8) {
        self.0 ^= u64::from(byte);
        self.0 = self.0.wrapping_mul(Self::PRIME);
    }

    fn write_u64(&mut self, value: u64) {
        for byte in value.to_le_bytes() {
            self.write_u8(byte);
        }
    }

    fn finish(&self) -> u64 {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn profile() -> UserProfile {
        UserProfile {
            goal: FitnessGoal::Hypertrophy,
            structure: EquipmentStructure::FullGym,
            level: TrainingLevel::Intermediate,
            weekly_frequency: 4,
            health_conditions: vec![],
        }
    }

    fn check_in() -> DailyCheckIn {
        DailyCheckIn {
            focus: WorkoutFocus::UpperBody,
            soreness_level: SorenessLevel::Mild,
            soreness_areas: vec![MuscleGroup::Quads],
            energy_level: EnergyLevel::High,
        }
    }

    #[test]
    fn fresh_seed_per_factory_call() {
        let a = BlueprintInput::from_check_in(&profile(), &check_in());
        let b = BlueprintInput::from_check_in(&profile(), &check_in());
        assert_ne!(a.variation_seed, b.variation_seed);
        assert_ne!(a.cache_key, b.cache_key);
    }

    #[test]
    fn pinned_seed_gives_stable_cache_key() {
        let a = BlueprintInput::with_seed(&profile(), &check_in(), 42);
        let b = BlueprintInput::with_seed(&profile(), &check_in(), 42);
        assert_eq!(a.cache_key, b.cache_key);
        assert_eq!(a, b);
    }

    #[test]
    fn cache_key_covers_semantic_fields() {
        let base = BlueprintInput::with_seed(&profile(), &check_in(), 42);

        let mut other_profile = profile();
        other_profile.goal = FitnessGoal::Endurance;
        let changed_goal = BlueprintInput::with_seed(&other_profile, &check_in(), 42);
        assert_ne!(base.cache_key, changed_goal.cache_key);

        let mut other_check_in = check_in();
        other_check_in.energy_level = EnergyLevel::Low;
        let changed_energy = BlueprintInput::with_seed(&profile(), &other_check_in, 42);
        assert_ne!(base.cache_key, changed_energy.cache_key);
    }

    #[test]
    fn cache_key_covers_the_seed() {
        let a = BlueprintInput::with_seed(&profile(), &check_in(), 1);
        let b = BlueprintInput::with_seed(&profile(), &check_in(), 2);
        assert_ne!(a.cache_key, b.cache_key);
    }
}
