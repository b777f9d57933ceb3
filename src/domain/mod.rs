//! Domain types for tours and ratings with strong typing.
//!
//! Identifiers follow the Newtype pattern so a tour id can never be passed
//! where a customer id is expected.

pub mod classification;
pub mod paging;

pub use classification::{Difficulty, Region};
pub use paging::{Page, PageRequest, RatingSort, SortField, TourSort};

use serde::{Deserialize, Serialize};
use std::fmt;

macro_rules! entity_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(
            Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
        )]
        #[serde(transparent)]
        pub struct $name(i32);

        impl $name {
            #[must_use]
            pub const fn new(id: i32) -> Self {
                Self(id)
            }

            /// Returns the underlying i32 value.
            #[must_use]
            pub const fn value(&self) -> i32 {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<$name> for i32 {
            fn from(id: $name) -> Self {
                id.0
            }
        }

        impl From<i32> for $name {
            fn from(id: i32) -> Self {
                Self::new(id)
            }
        }
    };
}

entity_id!(
    /// Generated identifier of a tour.
    ///
    /// ```rust
    /// use booktour::domain::TourId;
    ///
    /// let id = TourId::new(42);
    /// assert_eq!(id.value(), 42);
    /// assert_eq!(id.to_string(), "42");
    /// ```
    TourId
);

entity_id!(
    /// Generated identifier of a single rating row.
    RatingId
);

entity_id!(
    /// Customer identifier. There is no customer entity; the number is
    /// whatever the caller supplies.
    CustomerId
);

/// Sort order enumeration to replace boolean blindness.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    #[default]
    Ascending,
    Descending,
}

impl SortOrder {
    #[must_use]
    pub const fn is_ascending(&self) -> bool {
        matches!(self, Self::Ascending)
    }

    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Ascending => "asc",
            Self::Descending => "desc",
        }
    }

    /// Parses `asc`/`desc` in any case.
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        if s.eq_ignore_ascii_case("asc") {
            Some(Self::Ascending)
        } else if s.eq_ignore_ascii_case("desc") {
            Some(Self::Descending)
        } else {
            None
        }
    }
}
