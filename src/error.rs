use core::fmt::{Display, Formatter};
use thiserror::Error;

/// Errors returned by [`BitSet`](crate::BitSet) operations.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// A member was negative or, on construction, did not fit into the
    /// underlying word.
    #[error("invalid member {member}{}", at_position(.position))]
    InvalidMember {
        /// The rejected value.
        member: i128,
        /// Index of the value in the input sequence, if it came from one.
        position: Option<usize>,
    },

    /// The set has too many members to enumerate its power set.
    #[error("power set of {members} members exceeds the limit of {limit} members")]
    PowerSetTooLarge {
        /// Number of members in the set.
        members: usize,
        /// The limit that was in effect.
        limit: usize,
    },
}

fn at_position(position: &Option<usize>) -> AtPosition {
    AtPosition(*position)
}

struct AtPosition(Option<usize>);

impl Display for AtPosition {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        match self.0 {
            Some(idx) => write!(f, " at index {idx}"),
            None => Ok(()),
        }
    }
}

/// Shorthand for results carrying this crate's [`Error`].
pub type Result<T> = core::result::Result<T, Error>;
