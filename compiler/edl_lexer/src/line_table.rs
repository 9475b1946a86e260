//! Byte offset to line/column conversion.

/// Pre-computed line-start offsets for one source string.
///
/// Built once per file so every token's position is an O(log L) lookup
/// instead of a rescan.
pub(crate) struct LineTable {
    /// Byte offset of each line start; `starts[0] == 0`.
    starts: Vec<usize>,
}

impl LineTable {
    pub(crate) fn build(source: &str) -> Self {
        let mut starts = vec![0];
        for (offset, byte) in source.bytes().enumerate() {
            if byte == b'\n' {
                starts.push(offset + 1);
            }
        }
        LineTable { starts }
    }

    /// 1-based `(line, column)` of a byte offset.
    ///
    /// The column counts characters from the line start, so multi-byte
    /// UTF-8 sequences in comments don't skew positions after them.
    pub(crate) fn position(&self, source: &str, offset: usize) -> (u32, u32) {
        let line_index = match self.starts.binary_search(&offset) {
            Ok(exact) => exact,
            Err(insert) => insert - 1,
        };
        let line_start = self.starts[line_index];
        let column = source[line_start..offset].chars().count() + 1;
        (line_index as u32 + 1, column as u32)
    }
}
