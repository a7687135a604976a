use thiserror::Error;

/// Validation failures raised while building an [`crate::OpcodeTable`].
///
/// Both variants are data-authoring bugs in the input timing list, not
/// transient conditions; callers should report and abort.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TableError {
    /// The same opcode was listed twice. Any redefinition fails the
    /// build, even when both values agree; a later entry never
    /// silently wins.
    #[error("opcode {opcode:#04X} defined twice: {first} and {second} cycles")]
    DuplicateOpcode { opcode: u8, first: u32, second: u32 },

    /// A cycle count that cannot occupy a table slot: zero, or too
    /// large for the `i32` slot type.
    #[error("opcode {opcode:#04X} has invalid cycle count {cycles}")]
    InvalidCycles { opcode: u8, cycles: u32 },
}
