//! Demand model types.

use core::{
  fmt,
  ops::{Add, AddAssign, Sub, SubAssign},
};


/// How many more values a subscriber is willing to receive.
///
/// A `Demand` is an immutable snapshot; running counters belong to subscriptions and operators.
/// Arithmetic saturates instead of wrapping: a finite sum that would overflow `u64` becomes
/// [`Demand::Unbounded`], subtraction never goes below zero, and `Unbounded` absorbs both.
///
/// Ordering places every finite demand below `Unbounded`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Demand {
  /// Finite demand with remaining count.
  Finite(u64),
  /// Unbounded demand.
  Unbounded,
}

impl Demand {
  /// Zero demand.
  pub const NONE: Self = Self::Finite(0);

  /// Returns unbounded demand.
  #[must_use]
  pub const fn unbounded() -> Self {
    Self::Unbounded
  }

  /// Returns a finite demand of `count` values.
  #[must_use]
  pub const fn finite(count: u64) -> Self {
    Self::Finite(count)
  }

  /// Returns `true` if the demand is unbounded.
  #[must_use]
  pub const fn is_unbounded(&self) -> bool {
    matches!(self, Self::Unbounded)
  }

  /// Returns `true` if there is remaining demand.
  #[must_use]
  pub const fn has_demand(&self) -> bool {
    matches!(self, Self::Unbounded) || matches!(self, Self::Finite(remaining) if *remaining > 0)
  }

  /// Returns the remaining finite demand, if any.
  #[must_use]
  pub const fn remaining(&self) -> Option<u64> {
    match self {
      | Self::Finite(value) => Some(*value),
      | Self::Unbounded => None,
    }
  }

  /// Adds two demands, saturating to [`Demand::Unbounded`] on overflow.
  #[must_use]
  pub const fn saturating_add(self, other: Self) -> Self {
    match (self, other) {
      | (Self::Finite(left), Self::Finite(right)) => match left.checked_add(right) {
        | Some(total) => Self::Finite(total),
        | None => Self::Unbounded,
      },
      | _ => Self::Unbounded,
    }
  }

  /// Subtracts `other`, clamping at zero.
  #[must_use]
  pub const fn saturating_sub(self, other: Self) -> Self {
    match (self, other) {
      | (Self::Unbounded, _) => Self::Unbounded,
      | (Self::Finite(_), Self::Unbounded) => Self::NONE,
      | (Self::Finite(left), Self::Finite(right)) => Self::Finite(left.saturating_sub(right)),
    }
  }
}

impl Default for Demand {
  fn default() -> Self {
    Self::NONE
  }
}

impl From<u64> for Demand {
  fn from(count: u64) -> Self {
    Self::Finite(count)
  }
}

impl Add for Demand {
  type Output = Self;

  fn add(self, rhs: Self) -> Self::Output {
    self.saturating_add(rhs)
  }
}

impl Add<u64> for Demand {
  type Output = Self;

  fn add(self, rhs: u64) -> Self::Output {
    self.saturating_add(Self::Finite(rhs))
  }
}

impl AddAssign for Demand {
  fn add_assign(&mut self, rhs: Self) {
    *self = self.saturating_add(rhs);
  }
}

impl AddAssign<u64> for Demand {
  fn add_assign(&mut self, rhs: u64) {
    *self = self.saturating_add(Self::Finite(rhs));
  }
}

impl Sub for Demand {
  type Output = Self;

  fn sub(self, rhs: Self) -> Self::Output {
    self.saturating_sub(rhs)
  }
}

impl Sub<u64> for Demand {
  type Output = Self;

  fn sub(self, rhs: u64) -> Self::Output {
    self.saturating_sub(Self::Finite(rhs))
  }
}

impl SubAssign for Demand {
  fn sub_assign(&mut self, rhs: Self) {
    *self = self.saturating_sub(rhs);
  }
}

impl SubAssign<u64> for Demand {
  fn sub_assign(&mut self, rhs: u64) {
    *self = self.saturating_sub(Self::Finite(rhs));
  }
}

impl PartialEq<u64> for Demand {
  fn eq(&self, other: &u64) -> bool {
    matches!(self, Self::Finite(value) if value == other)
  }
}

impl PartialOrd<u64> for Demand {
  fn partial_cmp(&self, other: &u64) -> Option<core::cmp::Ordering> {
    match self {
      | Self::Finite(value) => value.partial_cmp(other),
      | Self::Unbounded => Some(core::cmp::Ordering::Greater),
    }
  }
}

impl fmt::Display for Demand {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      | Self::Finite(value) => write!(f, "max({value})"),
      | Self::Unbounded => f.write_str("unbounded"),
    }
  }
}
