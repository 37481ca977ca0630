/// Fluent encoder for 32-bit instruction words.
pub mod instruction;
