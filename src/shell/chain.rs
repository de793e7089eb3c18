/// Operator separating two commands on one line. `None` is the reset state
/// after a line is fully consumed or carries no operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChainOp {
    None,
    Or,
    And,
    Sequence,
}

/// One raw input line holding a chain of commands, consumed segment by
/// segment across loop iterations.
///
/// The operator recorded when a segment is split off governs whether the
/// *next* segment runs: `&&` after a failure or `||` after a success
/// abandons everything left on the line.
#[derive(Debug, Default)]
pub struct ChainBuffer {
    buf: String,
    cursor: usize,
    pending: ChainOp,
}

impl Default for ChainOp {
    fn default() -> Self {
        ChainOp::None
    }
}

impl ChainBuffer {
    pub fn new() -> Self {
        ChainBuffer {
            buf: String::new(),
            cursor: 0,
            pending: ChainOp::None,
        }
    }

    /// Replaces the buffer with a fresh line. Any state from the previous
    /// line is discarded.
    pub fn load(&mut self, line: String) {
        self.buf = line;
        self.cursor = 0;
        self.pending = ChainOp::None;
    }

    pub fn is_consumed(&self) -> bool {
        self.cursor >= self.buf.len()
    }

    pub fn pending(&self) -> ChainOp {
        self.pending
    }

    /// Splits off the next command segment, first applying the short-circuit
    /// decision for the previously recorded operator against `last_status`.
    ///
    /// Returns `None` when the buffer is consumed or the rest of the line was
    /// just abandoned. Segments may be empty (consecutive or trailing
    /// operators); callers tolerate that through tokenization.
    pub fn next_segment(&mut self, last_status: i32) -> Option<String> {
        if self.is_consumed() {
            return None;
        }

        if self.short_circuits(last_status) {
            self.buf.clear();
            self.cursor = 0;
            self.pending = ChainOp::None;
            return None;
        }

        let bytes = self.buf.as_bytes();
        let mut end = self.buf.len();
        let mut advance = self.buf.len();
        let mut op = ChainOp::None;

        let mut index = self.cursor;
        while index < bytes.len() {
            match bytes[index] {
                b'|' if index + 1 < bytes.len() && bytes[index + 1] == b'|' => {
                    end = index;
                    advance = index + 2;
                    op = ChainOp::Or;
                    break;
                }
                b'&' if index + 1 < bytes.len() && bytes[index + 1] == b'&' => {
                    end = index;
                    advance = index + 2;
                    op = ChainOp::And;
                    break;
                }
                b';' => {
                    end = index;
                    advance = index + 1;
                    op = ChainOp::Sequence;
                    break;
                }
                _ => index += 1,
            }
        }

        let segment = self.buf[self.cursor..end].to_string();
        self.cursor = advance;
        self.pending = op;
        if self.is_consumed() {
            // a trailing operator never governs the next line
            self.pending = ChainOp::None;
        }
        Some(segment)
    }

    fn short_circuits(&self, last_status: i32) -> bool {
        match self.pending {
            ChainOp::And => last_status != 0,
            ChainOp::Or => last_status == 0,
            ChainOp::None | ChainOp::Sequence => false,
        }
    }
}
