/// Chirality of a traversal: selects which of the two mirrored visiting orders
/// is used at one level of subdivision.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Default)]
pub enum Orientation {
    #[default]
    Clockwise,
    CounterClockwise,
}

impl Orientation {
    #[must_use]
    pub const fn opposite(self) -> Self {
        match self {
            Self::Clockwise => Self::CounterClockwise,
            Self::CounterClockwise => Self::Clockwise,
        }
    }
}
