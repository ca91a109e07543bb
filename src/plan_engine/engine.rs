use crate::plan_engine::{
    goals,
    helpers::{
        cooldown_block, equipment_for_structure, estimate_duration_minutes,
        inject_recovery_rest, pick_title, warmup_block,
    },
    input::BlueprintInput,
    models::{
        DailyCheckIn, EnergyLevel, FitnessGoal, IntensityTier, SorenessLevel, UserProfile,
        WorkoutBlueprint, BLUEPRINT_VERSION,
    },
    rng::SeededRandomGenerator,
};

/// Monotone energy → intensity mapping: less energy never yields a higher
/// tier.
fn intensity_for_energy(energy: EnergyLevel) -> IntensityTier {
    match energy {
        EnergyLevel::Low      => IntensityTier::Low,
        EnergyLevel::Moderate => IntensityTier::Moderate,
        EnergyLevel::High     => IntensityTier::High,
    }
}

/// Generate a structural workout template from today's profile + check-in.
///
/// Draws a fresh variation seed internally (via [`BlueprintInput::from_check_in`]),
/// so two calls with identical inputs agree on goal, focus and block count but
/// differ in seed, cache key, and seed-driven selection.
pub fn generate_blueprint(profile: &UserProfile, check_in: &DailyCheckIn) -> WorkoutBlueprint {
    let input = BlueprintInput::from_check_in(profile, check_in);
    blueprint_from_input(&input)
}

/// Deterministic core: the blueprint is a pure function of the input,
/// including its `variation_seed`. Tests and retry orchestrators pin the
/// seed through [`BlueprintInput::with_seed`] and call this directly.
pub fn blueprint_from_input(input: &BlueprintInput) -> WorkoutBlueprint {
    let mut rng = SeededRandomGenerator::new(input.variation_seed);
    let is_recovery_mode = input.soreness_level == SorenessLevel::Strong;
    let intensity = if is_recovery_mode {
        IntensityTier::Low
    } else {
        intensity_for_energy(input.energy_level)
    };

    let mut blocks = vec![warmup_block(
        &mut rng,
        input.focus,
        &input.soreness_areas,
        is_recovery_mode,
    )];

    let titles = match input.goal {
        FitnessGoal::Hypertrophy => {
            blocks.extend(goals::hypertrophy::blocks(
                &mut rng, input.level, input.focus, &input.soreness_areas,
            ));
            goals::hypertrophy::TITLES
        }
        FitnessGoal::WeightLoss => {
            blocks.extend(goals::weight_loss::blocks(
                &mut rng, input.level, input.focus, &input.soreness_areas,
            ));
            goals::weight_loss::TITLES
        }
        FitnessGoal::Endurance => {
            blocks.extend(goals::endurance::blocks(
                &mut rng, input.level, input.focus, &input.soreness_areas,
            ));
            goals::endurance::TITLES
        }
        FitnessGoal::Performance => {
            blocks.extend(goals::performance::blocks(
                &mut rng, input.level, input.focus, &input.soreness_areas,
            ));
            goals::performance::TITLES
        }
        FitnessGoal::Conditioning => {
            blocks.extend(goals::conditioning::blocks(
                &mut rng, input.level, input.focus, &input.soreness_areas,
            ));
            goals::conditioning::TITLES
        }
    };

    blocks.push(cooldown_block(&mut rng, input.focus, &input.soreness_areas));

    if is_recovery_mode {
        inject_recovery_rest(&mut blocks);
    }

    // Goal modules emit blocks in canonical order already; the stable sort
    // enforces the invariant without reordering same-phase blocks.
    blocks.sort_by_key(|b| b.phase_kind.canonical_order());

    let title = pick_title(&mut rng, titles, input.focus);
    let estimated_duration_minutes = estimate_duration_minutes(&blocks);

    WorkoutBlueprint {
        variation_seed: input.variation_seed,
        title,
        focus: input.focus,
        goal: input.goal,
        structure: input.structure,
        level: input.level,
        intensity,
        estimated_duration_minutes,
        blocks,
        equipment_constraints: equipment_for_structure(input.structure),
        is_recovery_mode,
        version: BLUEPRINT_VERSION,
    }
}
