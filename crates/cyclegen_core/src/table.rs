use crate::error::TableError;
use crate::{TABLE_SIZE, UNDEFINED};

/// One line of a published instruction-timing reference: an opcode
/// byte and the base number of clock cycles it consumes.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub struct OpcodeEntry {
    pub opcode: u8,
    pub cycles: u32,
}

impl OpcodeEntry {
    #[inline]
    pub const fn new(opcode: u8, cycles: u32) -> Self {
        OpcodeEntry { opcode, cycles }
    }
}

/// Dense cycle table: one `i32` slot per opcode byte, [`UNDEFINED`]
/// for opcodes the input list does not define.
///
/// Built once from a sparse entry list, immutable afterwards. Index
/// arithmetic is total over `u8`, so reads never need an existence
/// check; all validation happens in [`OpcodeTable::build`].
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct OpcodeTable {
    slots: [i32; TABLE_SIZE],
}

impl OpcodeTable {
    /// Expand a sparse entry list into the dense table.
    ///
    /// Fails with [`TableError::DuplicateOpcode`] if any opcode is
    /// listed twice, and with [`TableError::InvalidCycles`] if a cycle
    /// count is zero or does not fit a slot. No partial table is
    /// returned on error. For valid input the result does not depend
    /// on the order of `entries`.
    pub fn build(entries: &[OpcodeEntry]) -> Result<OpcodeTable, TableError> {
        let mut slots = [UNDEFINED; TABLE_SIZE];
        for entry in entries {
            let cycles = i32::try_from(entry.cycles)
                .ok()
                .filter(|&c| c > 0)
                .ok_or(TableError::InvalidCycles {
                    opcode: entry.opcode,
                    cycles: entry.cycles,
                })?;
            let slot = &mut slots[entry.opcode as usize];
            if *slot != UNDEFINED {
                return Err(TableError::DuplicateOpcode {
                    opcode: entry.opcode,
                    first: *slot as u32,
                    second: entry.cycles,
                });
            }
            *slot = cycles;
        }
        Ok(OpcodeTable { slots })
    }

    /// Cycle count at `opcode`, or [`UNDEFINED`].
    #[inline]
    pub fn cycles(&self, opcode: u8) -> i32 {
        self.slots[opcode as usize]
    }

    #[inline]
    pub fn slots(&self) -> &[i32; TABLE_SIZE] {
        &self.slots
    }
}
