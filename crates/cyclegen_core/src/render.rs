use std::fmt::Write;

use crate::OpcodeTable;

/// Serialize a built table as a C array-initializer literal: `{`, one
/// four-space-indented `value,` line per slot in opcode order, `};`.
/// 258 lines, trailing newline, byte-for-byte reproducible.
pub fn render(table: &OpcodeTable) -> String {
    let mut out = String::with_capacity(8 * crate::TABLE_SIZE);
    out.push_str("{\n");
    for value in table.slots() {
        let _ = writeln!(out, "    {},", value);
    }
    out.push_str("};\n");
    out
}
