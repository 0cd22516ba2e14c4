//! Serde encoding for [`Tribool`].
//!
//! A `Tribool` encodes as its canonical token string (`"no"` / `"maybe"` /
//! `"yes"`). Decoding accepts a string (through the lenient parser), a
//! native boolean, and any other shape at all - numbers, nulls, arrays,
//! objects - which decode to `Maybe` rather than erroring. Like parsing,
//! decoding is total over well-formed input; only a malformed document can
//! make the underlying format error.

use serde::de::IgnoredAny;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::Tribool;

impl Serialize for Tribool {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Tribool {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        /// Raw shapes accepted at the decode boundary. The trailing
        /// `IgnoredAny` arm consumes anything the first two don't match.
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Encoded {
            Bool(bool),
            Text(String),
            Other(IgnoredAny),
        }

        Ok(match Encoded::deserialize(deserializer)? {
            Encoded::Bool(b) => Tribool::from_bool(b),
            Encoded::Text(s) => Tribool::parse(&s),
            Encoded::Other(IgnoredAny) => Tribool::Maybe,
        })
    }
}
