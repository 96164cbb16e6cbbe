//! Rule-based opponent: trap layouts, staged heuristics, and the tiered
//! move selector.

pub mod engine;
pub mod strategy;
pub mod trap;

pub use engine::{Decision, Tier, critical_move, decide, random_move, strategic_move};
pub use strategy::{ConditionalMove, Response, STAGES, stage_rules};
pub use trap::{TRAP_CONFIGS, TrapConfig};
