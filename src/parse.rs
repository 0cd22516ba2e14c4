//! Lenient token parsing for [`Tribool`].
//!
//! Parsing is total: every input maps to one of the three states, with
//! anything unrecognized degrading to `Maybe`. The recognized tokens are
//! checked case-insensitively:
//!
//! ```text
//! token (any case)      | result
//! ----------------------+-------
//! t, y, 1, on, yes, true | True
//! f, n, 0, no, off, false | False
//! <anything else>        | Maybe
//! ```

use std::convert::Infallible;
use std::str::FromStr;

use crate::Tribool;

impl Tribool {
    /// Parse a string into a `Tribool`. Never fails.
    ///
    /// Dispatches on input length, then compares bytes case-insensitively;
    /// no allocation, no case-fold normalization. A mismatch at any single
    /// position degrades the whole token to `Maybe` - there is no partial
    /// credit, and the empty string is `Maybe` too.
    ///
    /// ```
    /// use tribool::Tribool;
    ///
    /// assert_eq!(Tribool::parse("oN"), Tribool::True);
    /// assert_eq!(Tribool::parse("FALSE"), Tribool::False);
    /// assert_eq!(Tribool::parse("Nx"), Tribool::Maybe);
    /// assert_eq!(Tribool::parse(""), Tribool::Maybe);
    /// ```
    #[must_use]
    pub fn parse(s: &str) -> Self {
        // Most flags in the wild are spelled exactly "true"; skip the
        // length dispatch for them.
        if s == "true" {
            return Tribool::True;
        }

        let bytes = s.as_bytes();
        match bytes.len() {
            1 => match bytes[0] {
                b't' | b'T' | b'y' | b'Y' | b'1' => Tribool::True,
                b'f' | b'F' | b'n' | b'N' | b'0' => Tribool::False,
                _ => Tribool::Maybe,
            },
            2 if bytes.eq_ignore_ascii_case(b"on") => Tribool::True,
            2 if bytes.eq_ignore_ascii_case(b"no") => Tribool::False,
            3 if bytes.eq_ignore_ascii_case(b"yes") => Tribool::True,
            3 if bytes.eq_ignore_ascii_case(b"off") => Tribool::False,
            4 if bytes.eq_ignore_ascii_case(b"true") => Tribool::True,
            5 if bytes.eq_ignore_ascii_case(b"false") => Tribool::False,
            _ => Tribool::Maybe,
        }
    }
}

impl FromStr for Tribool {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::parse(s))
    }
}
