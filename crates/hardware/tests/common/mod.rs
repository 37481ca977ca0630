/// Instruction word encoders.
pub mod builder;

/// Simulator harness.
pub mod harness;

pub use builder::instruction::asm;
pub use harness::TestContext;
