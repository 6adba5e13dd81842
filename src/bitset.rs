use alloc::vec::Vec;
use core::fmt::{Debug, Display, Formatter};
use core::iter::{FusedIterator, Iterator};
use core::ops::{BitAnd, BitAndAssign, BitOr, BitOrAssign};
use tracing::{debug, trace, warn};

use crate::error::{Error, Result};

/// Largest member count for which [`BitSet::power_set`] enumerates subsets.
///
/// A set of `n` members has `2^n` subsets, so this keeps the output at about
/// a million sets. Use [`BitSet::power_set_with_limit`] to pick another
/// bound.
pub const MAX_POWER_SET_MEMBERS: usize = 20;

/// Integer types that can be passed as set members.
///
/// Signed types are accepted so that negative values can be reported as
/// [`Error::InvalidMember`] instead of being wrapped by a cast at the call
/// site.
pub trait Member: Copy {
    /// Returns the value widened to `i128`.
    fn to_i128(self) -> i128;
}

macro_rules! impl_member {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl Member for $ty {
                #[inline]
                fn to_i128(self) -> i128 {
                    self as i128
                }
            }
        )+
    };
}

impl_member!(u8, u16, u32, u64, usize, i8, i16, i32, i64, isize, i128);

fn invalid(member: i128, position: Option<usize>) -> Error {
    trace!(member, ?position, "rejected set member");
    Error::InvalidMember { member, position }
}

/// Rejects negative members and returns the single-bit mask for the rest.
///
/// `None` means the member is valid but lies beyond the word width.
fn member_bit<M: Member>(member: M, position: Option<usize>) -> Result<Option<u64>> {
    let value = member.to_i128();
    if value < 0 {
        return Err(invalid(value, position));
    }
    Ok(u32::try_from(value)
        .ok()
        .and_then(|shift| 1u64.checked_shl(shift)))
}

/// Builds the subset of `members` picked by the set bits of `mask`, where
/// bit `q` of the mask selects `members[q]`.
pub(crate) fn apply_mask(members: &[usize], mask: u64) -> BitSet {
    let mut bits = 0u64;
    for (pos, &member) in members.iter().enumerate().take(BitSet::BITS as usize) {
        if mask & 1 << pos != 0 {
            bits |= 1 << member;
        }
    }
    BitSet(bits)
}

/// A set of integers in `0..64`, stored as the bits of a single `u64`.
///
/// Bit `i` is set if and only if `i` is a member. Values are immutable:
/// operations such as [`remove_member`] return a new set.
///
/// [`remove_member`]: BitSet::remove_member
#[derive(PartialEq, Eq, Hash, Clone, Copy, Default)]
pub struct BitSet(pub(crate) u64);

impl BitSet {
    /// Number of representable members.
    pub const BITS: u32 = u64::BITS;

    /// Creates an empty set.
    ///
    /// # Examples
    /// ```
    /// use tiny_bitset::BitSet;
    ///
    /// let set = BitSet::new();
    /// assert!(set.is_empty());
    /// assert_eq!(set.bits(), 0);
    /// ```
    #[inline]
    pub const fn new() -> Self {
        Self(0)
    }

    /// Wraps a raw bit pattern.
    ///
    /// # Examples
    /// ```
    /// use tiny_bitset::BitSet;
    ///
    /// assert_eq!(BitSet::from_bits(7).to_vec(), [0, 1, 2]);
    /// ```
    #[inline]
    pub const fn from_bits(bits: u64) -> Self {
        Self(bits)
    }

    /// Returns the underlying bit pattern.
    #[inline]
    pub const fn bits(&self) -> u64 {
        self.0
    }

    /// Constructs a set from a slice of members. Duplicates collapse into a
    /// single member.
    ///
    /// # Errors
    /// Returns [`Error::InvalidMember`] for the first value that is negative
    /// or `>= BitSet::BITS`.
    ///
    /// # Examples
    /// ```
    /// use tiny_bitset::{BitSet, Error};
    ///
    /// let set = BitSet::from_slice(&[1, 4, 10])?;
    /// assert_eq!(set.bits(), 1042);
    ///
    /// assert_eq!(
    ///     BitSet::from_slice(&[3, -1]),
    ///     Err(Error::InvalidMember { member: -1, position: Some(1) })
    /// );
    /// # Ok::<(), Error>(())
    /// ```
    #[inline]
    pub fn from_slice<M: Member>(members: &[M]) -> Result<Self> {
        Self::from_members(members.iter().copied())
    }

    /// Constructs a set from any sequence of members.
    ///
    /// # Errors
    /// Same as [`from_slice`](BitSet::from_slice).
    ///
    /// # Examples
    /// ```
    /// use tiny_bitset::BitSet;
    ///
    /// let evens = BitSet::from_members((0u8..10).step_by(2))?;
    /// assert_eq!(evens.to_vec(), [0, 2, 4, 6, 8]);
    /// # Ok::<(), tiny_bitset::Error>(())
    /// ```
    pub fn from_members<M: Member, I: IntoIterator<Item = M>>(members: I) -> Result<Self> {
        let mut bits = 0u64;
        for (position, member) in members.into_iter().enumerate() {
            match member_bit(member, Some(position))? {
                Some(bit) => bits |= bit,
                None => return Err(invalid(member.to_i128(), Some(position))),
            }
        }
        Ok(Self(bits))
    }

    /// Constructs a set in `const` contexts.
    ///
    /// # Panics
    /// Panics if any member is `>= BitSet::BITS`. In a `const` item this is
    /// a compile-time error.
    ///
    /// # Examples
    /// ```
    /// use tiny_bitset::BitSet;
    ///
    /// const PRIMES: BitSet = BitSet::const_from_members(&[2, 3, 5, 7]);
    /// assert_eq!(PRIMES.len(), 4);
    /// ```
    pub const fn const_from_members(members: &[usize]) -> Self {
        let mut bits = 0u64;
        let mut i = 0;
        while i < members.len() {
            assert!(
                members[i] < Self::BITS as usize,
                "member does not fit into a BitSet"
            );
            bits |= 1 << members[i];
            i += 1;
        }
        Self(bits)
    }

    /// Returns the members in ascending order.
    ///
    /// # Examples
    /// ```
    /// use tiny_bitset::BitSet;
    ///
    /// let set = BitSet::from_slice(&[10, 1, 4, 1])?;
    /// assert_eq!(set.to_vec(), [1, 4, 10]);
    /// assert!(BitSet::new().to_vec().is_empty());
    /// # Ok::<(), tiny_bitset::Error>(())
    /// ```
    pub fn to_vec(&self) -> Vec<usize> {
        self.iter().collect()
    }

    /// Returns an iterator over the members in ascending order.
    #[inline]
    pub fn iter(&self) -> Members {
        Members { remaining: self.0 }
    }

    /// Returns the number of members.
    #[inline]
    pub const fn len(&self) -> usize {
        self.0.count_ones() as usize
    }

    /// Returns `true` if the set has no members.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.0 == 0
    }

    /// Returns `true` if `member` is in the set. Values `>= BitSet::BITS` are
    /// never members.
    ///
    /// # Errors
    /// Returns [`Error::InvalidMember`] if `member` is negative.
    ///
    /// # Examples
    /// ```
    /// use tiny_bitset::BitSet;
    ///
    /// let set = BitSet::from_slice(&[0, 2, 4, 5, 7, 24])?;
    /// assert!(set.contains(24)?);
    /// assert!(!set.contains(15)?);
    /// assert!(!set.contains(200)?);
    /// assert!(set.contains(-3).is_err());
    /// # Ok::<(), tiny_bitset::Error>(())
    /// ```
    pub fn contains<M: Member>(&self, member: M) -> Result<bool> {
        Ok(member_bit(member, None)?.is_some_and(|bit| self.0 & bit != 0))
    }

    /// Returns a copy of the set without `member`. If `member` is not in
    /// the set the result equals `self`.
    ///
    /// # Errors
    /// Returns [`Error::InvalidMember`] if `member` is negative.
    ///
    /// # Examples
    /// ```
    /// use tiny_bitset::BitSet;
    ///
    /// let set = BitSet::from_slice(&[1, 4, 10])?;
    /// assert_eq!(set.remove_member(10)?.to_vec(), [1, 4]);
    /// assert_eq!(set.remove_member(3)?, set);
    /// # Ok::<(), tiny_bitset::Error>(())
    /// ```
    pub fn remove_member<M: Member>(&self, member: M) -> Result<Self> {
        Ok(match member_bit(member, None)? {
            Some(bit) => Self(self.0 & !bit),
            None => *self,
        })
    }

    /// Returns the set of values that are members of either set.
    ///
    /// # Examples
    /// ```
    /// use tiny_bitset::BitSet;
    ///
    /// let a = BitSet::from_slice(&[1, 2])?;
    /// let b = BitSet::from_slice(&[2, 3])?;
    /// assert_eq!(a.union(&b).to_vec(), [1, 2, 3]);
    /// # Ok::<(), tiny_bitset::Error>(())
    /// ```
    #[inline]
    pub const fn union(&self, other: &Self) -> Self {
        Self(self.0 | other.0)
    }

    /// Returns the set of values that are members of both sets.
    ///
    /// # Examples
    /// ```
    /// use tiny_bitset::BitSet;
    ///
    /// let a = BitSet::from_slice(&[1, 2])?;
    /// let b = BitSet::from_slice(&[2, 3])?;
    /// assert_eq!(a.intersection(&b).to_vec(), [2]);
    /// # Ok::<(), tiny_bitset::Error>(())
    /// ```
    #[inline]
    pub const fn intersection(&self, other: &Self) -> Self {
        Self(self.0 & other.0)
    }

    /// Enumerates every subset, grouped by cardinality.
    ///
    /// Index `k` of the result holds all subsets with exactly `k` members,
    /// so a set of `n` members yields `n + 1` buckets and `2^n` subsets in
    /// total. Subsets are generated by counting a selection mask down from
    /// `2^n - 1` to `0`, where bit `q` of the mask picks the `q`-th smallest
    /// member; each bucket keeps that generation order.
    ///
    /// The cost is exponential in the member count, so sets with more than
    /// [`MAX_POWER_SET_MEMBERS`] members are rejected.
    ///
    /// # Errors
    /// Returns [`Error::PowerSetTooLarge`] if the set has more than
    /// [`MAX_POWER_SET_MEMBERS`] members.
    ///
    /// # Examples
    /// ```
    /// use tiny_bitset::BitSet;
    ///
    /// let set = BitSet::from_slice(&[1, 2, 3])?;
    /// let buckets = set.power_set()?;
    /// assert_eq!(buckets.len(), 4);
    /// assert_eq!(buckets[0], [BitSet::new()]);
    /// assert_eq!(buckets[2].len(), 3);
    /// assert_eq!(buckets[3], [set]);
    /// # Ok::<(), tiny_bitset::Error>(())
    /// ```
    pub fn power_set(&self) -> Result<Vec<Vec<BitSet>>> {
        self.power_set_with_limit(MAX_POWER_SET_MEMBERS)
    }

    /// Same as [`power_set`](BitSet::power_set) with a caller-chosen member
    /// limit.
    ///
    /// A full set of `BitSet::BITS` members is rejected regardless of
    /// `limit`, since its mask count does not fit into a `u64`.
    ///
    /// # Errors
    /// Returns [`Error::PowerSetTooLarge`] if the set has more than `limit`
    /// members.
    pub fn power_set_with_limit(&self, limit: usize) -> Result<Vec<Vec<BitSet>>> {
        let members = self.to_vec();
        let n = members.len();
        if n > limit || n >= Self::BITS as usize {
            warn!(members = n, limit, "refusing to enumerate power set");
            return Err(Error::PowerSetTooLarge { members: n, limit });
        }

        let mut buckets: Vec<Vec<BitSet>> = (0..=n).map(|_| Vec::new()).collect();
        for mask in (0..1u64 << n).rev() {
            let subset = apply_mask(&members, mask);
            buckets[subset.len()].push(subset);
        }
        debug!(members = n, subsets = 1u64 << n, "enumerated power set");
        Ok(buckets)
    }
}

impl IntoIterator for BitSet {
    type Item = usize;
    type IntoIter = Members;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl IntoIterator for &BitSet {
    type Item = usize;
    type IntoIter = Members;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl Debug for BitSet {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        write!(f, "BitSet ")?;
        f.debug_set().entries(self.iter()).finish()
    }
}

impl Display for BitSet {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        write!(f, "{{")?;
        for (i, member) in self.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{member}")?;
        }
        write!(f, "}}")
    }
}

impl BitOr for BitSet {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self::Output {
        self.union(&rhs)
    }
}

impl BitOrAssign for BitSet {
    fn bitor_assign(&mut self, rhs: Self) {
        *self = self.union(&rhs);
    }
}

impl BitAnd for BitSet {
    type Output = Self;

    fn bitand(self, rhs: Self) -> Self::Output {
        self.intersection(&rhs)
    }
}

impl BitAndAssign for BitSet {
    fn bitand_assign(&mut self, rhs: Self) {
        *self = self.intersection(&rhs);
    }
}

/// Iterator over the members of a [`BitSet`].
///
/// Yields members in ascending order from the front and descending order
/// from the back.
///
/// Returned by [`BitSet::iter()`].
#[derive(Clone, Copy, Debug)]
pub struct Members {
    remaining: u64,
}

impl Iterator for Members {
    type Item = usize;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let idx = self.remaining.trailing_zeros() as usize;
        self.remaining &= self.remaining - 1; // unset LSB
        Some(idx)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.remaining.count_ones() as usize;
        (len, Some(len))
    }
}

impl DoubleEndedIterator for Members {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let idx = (u64::BITS - 1 - self.remaining.leading_zeros()) as usize;
        self.remaining &= !(1 << idx);
        Some(idx)
    }
}

impl ExactSizeIterator for Members {}

impl FusedIterator for Members {}
