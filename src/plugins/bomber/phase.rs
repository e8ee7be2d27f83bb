//! Bomber phases, in the only order they can occur.

/// Variant order is the lifecycle order; `Ord` follows it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum BomberPhase {
    /// Flying into the arena and slowing to a stop.
    Anticipation,
    /// Homing on the target.
    Seeking,
    /// Braking and swelling before detonation.
    PreExploding,
    /// Terminal: the burst has been spawned and the bomber destroyed.
    Exploding,
}

impl BomberPhase {
    /// The only phase this one may hand over to.
    pub const fn next(self) -> Option<Self> {
        match self {
            Self::Anticipation => Some(Self::Seeking),
            Self::Seeking => Some(Self::PreExploding),
            Self::PreExploding => Some(Self::Exploding),
            Self::Exploding => None,
        }
    }

    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Exploding)
    }
}
