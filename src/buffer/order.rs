//! Target ordering for the working buffer

use std::fmt;

/// The total order every algorithm sorts toward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Order {
    #[default]
    Ascending,
    Descending,
}

impl Order {
    /// Strict "must come before" relation: `true` when `a` belongs strictly
    /// ahead of `b` under this order. Equal values never precede each other.
    #[inline]
    pub fn precedes(self, a: u32, b: u32) -> bool {
        match self {
            Order::Ascending => a < b,
            Order::Descending => a > b,
        }
    }

    /// Check whether an adjacent pair is already in order (ties are in order).
    #[inline]
    pub fn in_order(self, a: u32, b: u32) -> bool {
        !self.precedes(b, a)
    }

    pub fn name(self) -> &'static str {
        match self {
            Order::Ascending => "Ascending",
            Order::Descending => "Descending",
        }
    }
}

impl fmt::Display for Order {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_precedes_inverts_with_order() {
        assert!(Order::Ascending.precedes(1, 2));
        assert!(!Order::Ascending.precedes(2, 1));
        assert!(Order::Descending.precedes(2, 1));
        assert!(!Order::Descending.precedes(1, 2));
    }

    #[test]
    fn test_ties_never_precede() {
        for order in [Order::Ascending, Order::Descending] {
            assert!(!order.precedes(7, 7));
            assert!(order.in_order(7, 7));
        }
    }
}
