//! Strongly typed identifier wrappers.
//!
//! Ids are 1-based because they are printed in the trace exactly as stored:
//! the first customer is `1`, the first server is `server 1`.  Use
//! [`from_index`](CustomerId::from_index) / `.index()` to convert to and
//! from 0-based `Vec` positions.

use std::fmt;

/// Generate a typed 1-based ID wrapper around a primitive integer.
macro_rules! typed_id {
    ($(#[$attr:meta])* $vis:vis struct $name:ident($inner:ty);) => {
        $(#[$attr])*
        #[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        $vis struct $name(pub $inner);

        impl $name {
            /// The id assigned to the element at 0-based position `index`.
            #[inline(always)]
            pub fn from_index(index: usize) -> Self {
                $name(index as $inner + 1)
            }

            /// 0-based position for direct `Vec` indexing.
            ///
            /// # Panics
            /// Panics in debug mode on the (never assigned) id `0`.
            #[inline(always)]
            pub fn index(self) -> usize {
                (self.0 - 1) as usize
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

typed_id! {
    /// Identity of a customer, assigned in creation (arrival) order.
    pub struct CustomerId(u32);
}

typed_id! {
    /// Identity of a server.  Human servers are numbered first, then
    /// self-checkout counters, all from one sequence.
    pub struct ServerId(u32);
}
