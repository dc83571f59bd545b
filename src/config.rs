/// Deepest nesting level decoded by default; the root tree is level 0.
pub const MAX_DEPTH: usize = 30;

/// Options controlling how bytes are turned back into trees.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DecodeConfig {
    /// Trees found deeper than this are inserted empty and their bytes skipped.
    pub max_depth: usize,
    /// Accept input that continues past the root tree terminator.
    pub allow_trailing_data: bool,
}

impl Default for DecodeConfig {
    fn default() -> Self {
        Self {
            max_depth: MAX_DEPTH,
            allow_trailing_data: false,
        }
    }
}

impl DecodeConfig {
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    pub fn with_trailing_data(mut self, allow: bool) -> Self {
        self.allow_trailing_data = allow;
        self
    }
}
