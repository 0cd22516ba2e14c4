//! Three-valued logic for Rust.
//!
//! A [`Tribool`] is a boolean extended with an explicit indeterminate state,
//! [`Maybe`](Tribool::Maybe). It models answers that are neither true nor
//! false: whether an HTTP POST succeeded when the connection dropped after
//! the request went out but before the response came back, say.
//!
//! Every boolean operator has a three-valued counterpart, and the two
//! collapse methods ([`with_maybe_as_true`](Tribool::with_maybe_as_true),
//! [`with_maybe_as_false`](Tribool::with_maybe_as_false)) turn a `Tribool`
//! back into a `bool` by resolving `Maybe` in the direction the caller
//! chooses.
//!
//! The lenient parser makes this handy for flags that need a default:
//!
//! ```
//! use tribool::Tribool;
//!
//! let raw = ""; // from somewhere: env var, config field, query param
//! let verbose = Tribool::parse(raw).with_maybe_as_false();
//! assert!(!verbose);
//!
//! assert!(Tribool::parse("YES").with_maybe_as_true());
//! ```
//!
//! This crate contains pure value types with no IO, no async, and no
//! failure channel: parsing and decoding are total and degrade to `Maybe`
//! instead of erroring.

mod parse;
mod serde_impl;

use std::fmt;
use std::ops::{BitAnd, BitOr, BitXor, Not};

// ============================================================================
// Tribool
// ============================================================================

/// A tri-state boolean where the extra state is indeterminate.
///
/// The default value is [`False`](Tribool::False), just like a boolean: an
/// unset `Tribool` behaves as "false", never as "don't know". The variants
/// are declared in the order `False < Maybe < True`, and `and`/`or` are the
/// min/max of that order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum Tribool {
    /// Equivalent to boolean `false`.
    #[default]
    False,
    /// A value that is either true or false, but we don't know which.
    Maybe,
    /// Equivalent to boolean `true`.
    True,
}

// ============================================================================
// Conversions & Collapses
// ============================================================================

impl Tribool {
    /// Convert a `bool` to the equivalent `Tribool`. Never produces `Maybe`.
    #[must_use]
    pub const fn from_bool(b: bool) -> Self {
        if b { Tribool::True } else { Tribool::False }
    }

    /// Collapse to a `bool`, coercing `Maybe` to `true`.
    ///
    /// ```text
    /// a | a.with_maybe_as_true()
    /// --+----------------------
    /// F | false
    /// ? | true
    /// T | true
    /// ```
    #[must_use]
    pub const fn with_maybe_as_true(self) -> bool {
        !matches!(self, Tribool::False)
    }

    /// Collapse to a `bool`, coercing `Maybe` to `false`.
    ///
    /// ```text
    /// a | a.with_maybe_as_false()
    /// --+-----------------------
    /// F | false
    /// ? | false
    /// T | true
    /// ```
    #[must_use]
    pub const fn with_maybe_as_false(self) -> bool {
        matches!(self, Tribool::True)
    }

    /// The canonical lowercase token for this state.
    ///
    /// Round-trips through [`Tribool::parse`]: for every state `s`,
    /// `Tribool::parse(s.as_str()) == s`.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Tribool::False => "no",
            Tribool::Maybe => "maybe",
            Tribool::True => "yes",
        }
    }
}

// ============================================================================
// Unary Operators
// ============================================================================

impl Tribool {
    /// Logical not.
    ///
    /// ```text
    /// a | a.not()
    /// --+--------
    /// F | T
    /// ? | ?
    /// T | F
    /// ```
    #[must_use]
    pub const fn not(self) -> Self {
        match self {
            Tribool::False => Tribool::True,
            Tribool::Maybe => Tribool::Maybe,
            Tribool::True => Tribool::False,
        }
    }

    /// Resolve `Maybe` optimistically, staying in `Tribool`.
    ///
    /// Equivalent to `Tribool::from_bool(self.with_maybe_as_true())`.
    ///
    /// ```text
    /// a | a.upgrade()
    /// --+------------
    /// F | F
    /// ? | T
    /// T | T
    /// ```
    #[must_use]
    pub const fn upgrade(self) -> Self {
        Self::from_bool(self.with_maybe_as_true())
    }

    /// Resolve `Maybe` pessimistically, staying in `Tribool`.
    ///
    /// Equivalent to `Tribool::from_bool(self.with_maybe_as_false())`.
    ///
    /// ```text
    /// a | a.downgrade()
    /// --+--------------
    /// F | F
    /// ? | F
    /// T | T
    /// ```
    #[must_use]
    pub const fn downgrade(self) -> Self {
        Self::from_bool(self.with_maybe_as_false())
    }
}

// ============================================================================
// Binary Operators
// ============================================================================

impl Tribool {
    /// Logical and: the minimum of the two states.
    ///
    /// ```text
    /// a b | a.and(b)
    /// ----+---------
    /// F F | F
    /// F ? | F
    /// F T | F
    /// ? ? | ?
    /// ? T | ?
    /// T T | T
    /// ```
    #[must_use]
    pub fn and(self, b: Self) -> Self {
        self.min(b)
    }

    /// Logical inclusive or: the maximum of the two states.
    ///
    /// ```text
    /// a b | a.or(b)
    /// ----+--------
    /// F F | F
    /// F ? | ?
    /// F T | T
    /// ? ? | ?
    /// ? T | T
    /// T T | T
    /// ```
    #[must_use]
    pub fn or(self, b: Self) -> Self {
        self.max(b)
    }

    /// Logical nand: `a.and(b).not()`.
    ///
    /// ```text
    /// a b | a.nand(b)
    /// ----+----------
    /// F F | T
    /// F ? | T
    /// F T | T
    /// ? ? | ?
    /// ? T | ?
    /// T T | F
    /// ```
    #[must_use]
    pub fn nand(self, b: Self) -> Self {
        self.and(b).not()
    }

    /// Logical nor: `a.or(b).not()`.
    ///
    /// ```text
    /// a b | a.nor(b)
    /// ----+---------
    /// F F | T
    /// F ? | ?
    /// F T | F
    /// ? ? | ?
    /// ? T | F
    /// T T | F
    /// ```
    #[must_use]
    pub fn nor(self, b: Self) -> Self {
        self.or(b).not()
    }

    /// Logical exclusive or: `a.or(b).and(a.nand(b))`.
    ///
    /// ```text
    /// a b | a.xor(b)
    /// ----+---------
    /// F F | F
    /// F ? | ?
    /// F T | T
    /// ? ? | ?
    /// ? T | ?
    /// T T | F
    /// ```
    #[must_use]
    pub fn xor(self, b: Self) -> Self {
        self.or(b).and(self.nand(b))
    }

    /// Logical equivalence: `a.and(b).or(a.nor(b))`.
    ///
    /// ```text
    /// a b | a.equiv(b)
    /// ----+-----------
    /// F F | T
    /// F ? | ?
    /// F T | F
    /// ? ? | ?
    /// ? T | ?
    /// T T | T
    /// ```
    #[must_use]
    pub fn equiv(self, b: Self) -> Self {
        self.and(b).or(self.nor(b))
    }

    /// Logical implication, `a ⇒ b`, defined as `b.or(a.not())`.
    ///
    /// Implication is not commutative: `True.imply(False)` is `False`, but
    /// `False.imply(True)` is `True`.
    ///
    /// ```text
    /// a b | a.imply(b)
    /// ----+-----------
    /// F F | T
    /// F ? | T
    /// F T | T
    /// ? F | ?
    /// ? ? | ?
    /// ? T | T
    /// T F | F
    /// T ? | ?
    /// T T | T
    /// ```
    #[must_use]
    pub fn imply(self, b: Self) -> Self {
        b.or(self.not())
    }
}

// ============================================================================
// Mixed-bool Siblings
// ============================================================================

impl Tribool {
    /// Equivalent to `self.and(Tribool::from_bool(b))`.
    #[must_use]
    pub fn and_bool(self, b: bool) -> Self {
        self.and(Self::from_bool(b))
    }

    /// Equivalent to `self.or(Tribool::from_bool(b))`.
    #[must_use]
    pub fn or_bool(self, b: bool) -> Self {
        self.or(Self::from_bool(b))
    }

    /// Equivalent to `self.nand(Tribool::from_bool(b))`.
    #[must_use]
    pub fn nand_bool(self, b: bool) -> Self {
        self.nand(Self::from_bool(b))
    }

    /// Equivalent to `self.nor(Tribool::from_bool(b))`.
    #[must_use]
    pub fn nor_bool(self, b: bool) -> Self {
        self.nor(Self::from_bool(b))
    }

    /// Equivalent to `self.xor(Tribool::from_bool(b))`.
    #[must_use]
    pub fn xor_bool(self, b: bool) -> Self {
        self.xor(Self::from_bool(b))
    }

    /// Equivalent to `self.equiv(Tribool::from_bool(b))`.
    #[must_use]
    pub fn equiv_bool(self, b: bool) -> Self {
        self.equiv(Self::from_bool(b))
    }

    /// Equivalent to `self.imply(Tribool::from_bool(b))`.
    #[must_use]
    pub fn imply_bool(self, b: bool) -> Self {
        self.imply(Self::from_bool(b))
    }
}

// ============================================================================
// Std Trait Impls
// ============================================================================

impl From<bool> for Tribool {
    fn from(b: bool) -> Self {
        Self::from_bool(b)
    }
}

impl fmt::Display for Tribool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Not for Tribool {
    type Output = Tribool;

    fn not(self) -> Tribool {
        Tribool::not(self)
    }
}

impl BitAnd for Tribool {
    type Output = Tribool;

    fn bitand(self, rhs: Tribool) -> Tribool {
        self.and(rhs)
    }
}

impl BitAnd<bool> for Tribool {
    type Output = Tribool;

    fn bitand(self, rhs: bool) -> Tribool {
        self.and_bool(rhs)
    }
}

impl BitOr for Tribool {
    type Output = Tribool;

    fn bitor(self, rhs: Tribool) -> Tribool {
        self.or(rhs)
    }
}

impl BitOr<bool> for Tribool {
    type Output = Tribool;

    fn bitor(self, rhs: bool) -> Tribool {
        self.or_bool(rhs)
    }
}

impl BitXor for Tribool {
    type Output = Tribool;

    fn bitxor(self, rhs: Tribool) -> Tribool {
        self.xor(rhs)
    }
}

impl BitXor<bool> for Tribool {
    type Output = Tribool;

    fn bitxor(self, rhs: bool) -> Tribool {
        self.xor_bool(rhs)
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::Tribool::{False, Maybe, True};
    use super::*;

    #[test]
    fn default_is_false() {
        assert_eq!(Tribool::default(), False);
    }

    #[test]
    fn states_are_ordered() {
        assert!(False < Maybe);
        assert!(Maybe < True);
    }

    #[test]
    fn from_bool_never_produces_maybe() {
        assert_eq!(Tribool::from_bool(true), True);
        assert_eq!(Tribool::from_bool(false), False);
        assert_eq!(Tribool::from(true), True);
        assert_eq!(Tribool::from(false), False);
    }

    #[test]
    fn collapse_with_maybe_as_true() {
        assert!(!False.with_maybe_as_true());
        assert!(Maybe.with_maybe_as_true());
        assert!(True.with_maybe_as_true());
    }

    #[test]
    fn collapse_with_maybe_as_false() {
        assert!(!False.with_maybe_as_false());
        assert!(!Maybe.with_maybe_as_false());
        assert!(True.with_maybe_as_false());
    }

    #[test]
    fn not_flips_known_states_only() {
        assert_eq!(False.not(), True);
        assert_eq!(Maybe.not(), Maybe);
        assert_eq!(True.not(), False);
    }

    #[test]
    fn upgrade_resolves_maybe_to_true() {
        assert_eq!(False.upgrade(), False);
        assert_eq!(Maybe.upgrade(), True);
        assert_eq!(True.upgrade(), True);
    }

    #[test]
    fn downgrade_resolves_maybe_to_false() {
        assert_eq!(False.downgrade(), False);
        assert_eq!(Maybe.downgrade(), False);
        assert_eq!(True.downgrade(), True);
    }

    #[test]
    fn imply_is_not_commutative() {
        assert_eq!(True.imply(False), False);
        assert_eq!(False.imply(True), True);
    }

    #[test]
    fn and_of_maybe_and_true_is_maybe() {
        assert_eq!(Maybe.and(True), Maybe);
    }

    #[test]
    fn display_renders_canonical_tokens() {
        assert_eq!(False.to_string(), "no");
        assert_eq!(Maybe.to_string(), "maybe");
        assert_eq!(True.to_string(), "yes");
    }

    #[test]
    fn bool_siblings_match_conversion_then_op() {
        for a in [False, Maybe, True] {
            for b in [false, true] {
                let t = Tribool::from_bool(b);
                assert_eq!(a.and_bool(b), a.and(t));
                assert_eq!(a.or_bool(b), a.or(t));
                assert_eq!(a.nand_bool(b), a.nand(t));
                assert_eq!(a.nor_bool(b), a.nor(t));
                assert_eq!(a.xor_bool(b), a.xor(t));
                assert_eq!(a.equiv_bool(b), a.equiv(t));
                assert_eq!(a.imply_bool(b), a.imply(t));
            }
        }
    }

    #[test]
    fn operator_sugar_matches_named_methods() {
        for a in [False, Maybe, True] {
            assert_eq!(!a, a.not());
            for b in [False, Maybe, True] {
                assert_eq!(a & b, a.and(b));
                assert_eq!(a | b, a.or(b));
                assert_eq!(a ^ b, a.xor(b));
            }
            for b in [false, true] {
                assert_eq!(a & b, a.and_bool(b));
                assert_eq!(a | b, a.or_bool(b));
                assert_eq!(a ^ b, a.xor_bool(b));
            }
        }
    }

    #[test]
    fn chained_flag_resolution() {
        // The headline use case: fold several partially-known conditions
        // down to a concrete decision.
        let older_than_18 = Maybe; // age not provided
        let is_dev = true;
        let is_judge = false;

        let can_vote = older_than_18
            .or_bool(is_dev)
            .and_bool(!is_judge)
            .with_maybe_as_false();
        assert!(can_vote);
    }
}
