/// Maps byte offsets of CSV records back to one-based physical line numbers.
///
/// Offsets reported by the csv reader can sit before the `\n` of a `\r\n` ending, so
/// line breaks at the offset are skipped before counting. Offsets must not decrease.
pub struct LineCounter<'a> {
    input: &'a [u8],
    offset: usize,
    line: u64
}

impl<'a> LineCounter<'a> {
    pub fn new(input: &'a [u8]) -> Self {
        Self {
            input,
            offset: 0,
            line: 1
        }
    }

    /// Line on which the first record at or after `byte` begins.
    pub fn line_at(&mut self, byte: u64) -> u64 {
        let mut start = usize::try_from(byte).map_or(self.input.len(), |byte| byte.min(self.input.len()));

        while start < self.input.len() && matches!(self.input[start], b'\r' | b'\n') {
            start += 1;
        }

        if start > self.offset {
            let breaks = self.input[self.offset..start].iter().filter(|byte| **byte == b'\n').count();
            self.line += breaks as u64;
            self.offset = start;
        }

        self.line
    }
}
