// Game action and axis definitions

/// Digital buttons the character reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    Jump,
    Attack,
    /// Crouch while grounded, dive while airborne
    Crouch,
    /// Sprint modifier
    Run,
}

/// Analog axes, each reported in [-1, 1]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    MoveHorizontal,
    MoveVertical,
}

impl Axis {
    pub(crate) fn index(&self) -> usize {
        match self {
            Self::MoveHorizontal => 0,
            Self::MoveVertical => 1,
        }
    }
}
