//! Per-goal block generators.
//!
//! Each module builds the middle of the session — strength, aerobic and
//! finisher blocks — for one [`FitnessGoal`]. Warmup and cooldown are shared
//! and added by the engine. Every module exposes:
//!
//! - `TITLES`: the seed-driven session title pool;
//! - `blocks(rng, level, focus, sore_areas)`: the goal-specific blocks.
//!
//! [`FitnessGoal`]: crate::plan_engine::models::FitnessGoal

pub mod conditioning;
pub mod endurance;
pub mod hypertrophy;
pub mod performance;
pub mod weight_loss;
