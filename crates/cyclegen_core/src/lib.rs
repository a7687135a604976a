mod error;
mod render;
mod table;

pub use error::TableError;
pub use render::render;
pub use table::{OpcodeEntry, OpcodeTable};

/// One slot per possible opcode byte.
pub const TABLE_SIZE: usize = 256;

/// Slot value meaning "no defined instruction at this opcode".
///
/// This is a magic value of the rendered output contract: consumers of
/// the generated table test for `-1` to detect illegal opcodes. A
/// defined instruction always takes at least one cycle, so the two
/// meanings cannot collide.
pub const UNDEFINED: i32 = -1;
