pub mod assembler;
pub mod builder;
pub mod catalog;

// Re-export primary plugin & data types for convenience
pub use assembler::{assemble, LevelPlan, SegmentSpec};
pub use builder::{LevelBuilderPlugin, RegenerateLevel};
pub use catalog::{ObstacleKind, PITCH};
