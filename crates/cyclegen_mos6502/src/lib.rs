use cyclegen_core::{OpcodeEntry, OpcodeTable, TableError};

const fn e(opcode: u8, cycles: u32) -> OpcodeEntry {
    OpcodeEntry::new(opcode, cycles)
}

/// Base cycle counts for the 151 documented NMOS 6502 opcodes, in
/// ascending opcode order. Page-cross and taken-branch penalties are
/// not part of this table; a dispatcher adds those at runtime.
#[rustfmt::skip]
pub const OPCODES: [OpcodeEntry; 151] = [
    e(0x00, 7), e(0x01, 6), e(0x05, 3), e(0x06, 5),
    e(0x08, 3), e(0x09, 2), e(0x0A, 2), e(0x0D, 4),
    e(0x0E, 6), e(0x10, 2), e(0x11, 5), e(0x15, 4),
    e(0x16, 6), e(0x18, 2), e(0x19, 4), e(0x1D, 4),
    e(0x1E, 7), e(0x20, 6), e(0x21, 6), e(0x24, 3),
    e(0x25, 3), e(0x26, 5), e(0x28, 4), e(0x29, 2),
    e(0x2A, 2), e(0x2C, 4), e(0x2D, 4), e(0x2E, 6),
    e(0x30, 2), e(0x31, 5), e(0x35, 4), e(0x36, 6),
    e(0x38, 2), e(0x39, 4), e(0x3D, 4), e(0x3E, 7),
    e(0x40, 6), e(0x41, 6), e(0x45, 3), e(0x46, 5),
    e(0x48, 3), e(0x49, 2), e(0x4A, 2), e(0x4C, 3),
    e(0x4D, 4), e(0x4E, 6), e(0x50, 2), e(0x51, 5),
    e(0x55, 4), e(0x56, 6), e(0x58, 2), e(0x59, 4),
    e(0x5D, 4), e(0x5E, 7), e(0x60, 6), e(0x61, 6),
    e(0x65, 3), e(0x66, 5), e(0x68, 4), e(0x69, 2),
    e(0x6A, 2), e(0x6C, 5), e(0x6D, 4), e(0x6E, 6),
    e(0x70, 2), e(0x71, 5), e(0x75, 4), e(0x76, 6),
    e(0x78, 2), e(0x79, 4), e(0x7D, 4), e(0x7E, 7),
    e(0x81, 6), e(0x84, 3), e(0x85, 3), e(0x86, 3),
    e(0x88, 2), e(0x8A, 2), e(0x8C, 4), e(0x8D, 4),
    e(0x8E, 4), e(0x90, 2), e(0x91, 6), e(0x94, 4),
    e(0x95, 4), e(0x96, 4), e(0x98, 2), e(0x99, 5),
    e(0x9A, 2), e(0x9D, 5), e(0xA0, 2), e(0xA1, 6),
    e(0xA2, 2), e(0xA4, 3), e(0xA5, 3), e(0xA6, 3),
    e(0xA8, 2), e(0xA9, 2), e(0xAA, 2), e(0xAC, 4),
    e(0xAD, 4), e(0xAE, 4), e(0xB0, 2), e(0xB1, 5),
    e(0xB4, 4), e(0xB5, 4), e(0xB6, 4), e(0xB8, 2),
    e(0xB9, 4), e(0xBA, 2), e(0xBC, 4), e(0xBD, 4),
    e(0xBE, 4), e(0xC0, 2), e(0xC1, 6), e(0xC4, 3),
    e(0xC5, 3), e(0xC6, 5), e(0xC8, 2), e(0xC9, 2),
    e(0xCA, 2), e(0xCC, 4), e(0xCD, 4), e(0xCE, 3),
    e(0xD0, 2), e(0xD1, 5), e(0xD5, 4), e(0xD6, 6),
    e(0xD8, 2), e(0xD9, 4), e(0xDD, 4), e(0xDE, 7),
    e(0xE0, 2), e(0xE1, 6), e(0xE4, 3), e(0xE5, 3),
    e(0xE6, 5), e(0xE8, 2), e(0xE9, 2), e(0xEA, 2),
    e(0xEC, 4), e(0xED, 4), e(0xEE, 6), e(0xF0, 2),
    e(0xF1, 5), e(0xF5, 4), e(0xF6, 6), e(0xF8, 2),
    e(0xF9, 4), e(0xFD, 4), e(0xFE, 7),
];

/// Dense 256-slot table for the documented NMOS 6502 opcode set.
///
/// The dataset is static and duplicate-free, so this only fails if the
/// table above is edited into an inconsistent state.
pub fn cycle_table() -> Result<OpcodeTable, TableError> {
    OpcodeTable::build(&OPCODES)
}

#[cfg(test)]
mod tests {
    use super::{cycle_table, OPCODES};
    use cyclegen_core::UNDEFINED;

    #[test]
    fn dataset_covers_the_documented_opcode_set() {
        assert_eq!(OPCODES.len(), 151);
        let table = cycle_table().unwrap();
        let defined = table.slots().iter().filter(|&&s| s != UNDEFINED).count();
        assert_eq!(defined, 151);
    }

    #[test]
    fn dataset_is_sorted_by_opcode() {
        assert!(OPCODES.windows(2).all(|w| w[0].opcode < w[1].opcode));
    }

    #[test]
    fn known_timings() {
        let table = cycle_table().unwrap();
        // BRK, JSR, LDA #imm, INC abs,X
        assert_eq!(table.cycles(0x00), 7);
        assert_eq!(table.cycles(0x20), 6);
        assert_eq!(table.cycles(0xA9), 2);
        assert_eq!(table.cycles(0xFE), 7);
    }

    #[test]
    fn undocumented_opcodes_stay_undefined() {
        let table = cycle_table().unwrap();
        for opcode in [0x02, 0x03, 0x1F, 0x80, 0xFF] {
            assert_eq!(table.cycles(opcode), UNDEFINED);
        }
    }
}
