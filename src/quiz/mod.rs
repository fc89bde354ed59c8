pub mod engine;
pub mod generator;
pub mod stats;
pub mod timer;

pub use engine::{QuizEngine, QuizEvent, QuizSession};
pub use generator::{GeneratorOptions, generate, generate_with, prompt_for};
pub use stats::{PerformanceStats, PerformanceSummary, Tally, compute_summary};
pub use timer::{Fired, Scheduler, TimerHandle, TimerKind};
