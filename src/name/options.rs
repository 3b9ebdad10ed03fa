/// How [`NameToken::render`](super::NameToken::render) prints a name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NameOptions {
    /// Keep module paths (`alloc::vec::Vec`) rather than last segments (`Vec`).
    pub qualified: bool,

    /// Collapse generic argument lists nested deeper than this to `<..>`.
    /// `Some(0)` collapses every list.
    pub max_depth: Option<usize>,
}

impl Default for NameOptions {
    fn default() -> Self {
        Self {
            qualified: true,
            max_depth: None,
        }
    }
}

impl NameOptions {
    pub fn short_paths(mut self) -> Self {
        self.qualified = false;
        self
    }

    pub fn with_max_depth(mut self, depth: usize) -> Self {
        self.max_depth = Some(depth);
        self
    }
}
