//! Zero-width assertions.

/// Input boundary an epsilon edge is conditioned on.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Look {
    /// `^`: the search began at offset 0.
    Start,
    /// `$`: no input remains.
    End,
}

impl Look {
    pub fn as_char(self) -> char {
        match self {
            Look::Start => '^',
            Look::End => '$',
        }
    }
}
