use std::fmt;

/// Edge weight type
pub type Weight = u64;

/// Best known distance from the start node of a search.
///
/// `Reached` is declared first so that the derived ordering puts every
/// reached distance strictly below `Unreached`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Distance {
    Reached(Weight),
    Unreached,
}

impl Distance {
    pub fn is_reached(&self) -> bool {
        matches!(self, Distance::Reached(_))
    }

    /// Returns the weight if the node was reached
    pub fn weight(&self) -> Option<Weight> {
        match self {
            Distance::Reached(weight) => Some(*weight),
            Distance::Unreached => None,
        }
    }
}

impl Default for Distance {
    fn default() -> Self {
        Distance::Unreached
    }
}

impl From<Weight> for Distance {
    fn from(weight: Weight) -> Self {
        Distance::Reached(weight)
    }
}

impl fmt::Display for Distance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Distance::Reached(weight) => write!(f, "{}", weight),
            Distance::Unreached => write!(f, "∞"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unreached_is_greater_than_any_weight() {
        assert!(Distance::Reached(Weight::MAX) < Distance::Unreached);
        assert!(Distance::Reached(0) < Distance::Reached(1));
        assert_eq!(Distance::default(), Distance::Unreached);
    }

    #[test]
    fn display() {
        assert_eq!(Distance::Reached(25).to_string(), "25");
        assert_eq!(Distance::Unreached.to_string(), "∞");
        assert_eq!(Distance::Unreached.weight(), None);
    }
}
