//! Fully-qualified domain names in textual form.
//!
//! This is a private module. Its public types are re-exported by the parent.

use crate::config::Config;
use crate::label::{Label, LabelError, Labels};
use core::str::FromStr;
use core::{cmp, fmt, hash};
use tracing::trace;

//------------ Fqdn ----------------------------------------------------------

/// A domain name as given in its textual form.
///
/// The type keeps the text exactly as it was given together with the
/// [`Config`] it was checked against. Whether the text is a valid name is
/// decided once upon creation, so a value that fails the check can still be
/// created, displayed, and compared. Only the conversions into absolute or
/// relative form require validity.
///
/// A name is valid if
///
/// * it is at most 253 octets long, not counting a trailing dot,
/// * it has at least as many labels as the config requires,
/// * each label is in the preferred form checked by [`Label::check`], and
/// * the last label, the top-level domain, is not all digits.
///
/// Two names compare equal if their text is equal ignoring case and a
/// single trailing dot. So `example.com` and `EXAMPLE.com.` are the same
/// name. The config does not take part in comparison or hashing.
#[derive(Clone)]
pub struct Fqdn {
    /// The text of the name as given.
    raw: String,

    /// The policy the name was checked against.
    config: Config,

    /// The number of labels in the name.
    labels_count: usize,

    /// The outcome of checking the name.
    checked: Result<(), SyntaxError>,
}

/// # Creation
///
impl Fqdn {
    /// Domain names have a maximum length of 253 octets.
    ///
    /// In wire format, a name is limited to 255 octets. This includes a
    /// length octet before the first label and the final empty root label.
    /// Neither of these appear in the textual form, while the trailing dot
    /// of an absolute name is not counted.
    pub const MAX_LEN: usize = 253;

    /// Creates a domain name from text using the default config.
    pub fn new(raw: impl Into<String>) -> Result<Self, InvalidInputError> {
        Self::with_config(raw, Config::new())
    }

    /// Creates a domain name from text using the given config.
    ///
    /// This fails only if `raw` is empty. A non-empty string that isn’t a
    /// valid name results in a value for which [`is_valid`] returns
    /// `false`.
    ///
    /// [`is_valid`]: Self::is_valid
    pub fn with_config(
        raw: impl Into<String>,
        config: Config,
    ) -> Result<Self, InvalidInputError> {
        let raw = raw.into();
        if raw.is_empty() {
            return Err(InvalidInputError::Empty);
        }
        let labels_count = Labels::new(&raw).count();
        let checked = check_name(&raw, labels_count, &config);
        if let Err(err) = checked {
            trace!(name = %raw, %err, "invalid domain name");
        }
        Ok(Fqdn {
            raw,
            config,
            labels_count,
            checked,
        })
    }
}

/// # Properties
///
impl Fqdn {
    /// Returns the text of the name exactly as it was given.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// Returns the config the name was checked against.
    #[must_use]
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Returns whether the name ends with a dot.
    ///
    /// This says nothing about validity.
    #[must_use]
    pub fn is_absolute(&self) -> bool {
        self.raw.ends_with('.')
    }

    /// Returns whether the name does not end with a dot.
    #[must_use]
    pub fn is_relative(&self) -> bool {
        !self.is_absolute()
    }

    /// Returns the number of labels in the name.
    ///
    /// These are the dot-separated parts of the name with one trailing dot
    /// removed. Empty parts are counted, too, so `"a..b"` has three labels
    /// and `"."` has one.
    #[must_use]
    pub fn labels_count(&self) -> usize {
        self.labels_count
    }

    /// Returns an iterator over the labels of the name.
    pub fn labels(&self) -> Labels<'_> {
        Labels::new(&self.raw)
    }

    /// Returns the top-level domain, the last label of the name.
    #[must_use]
    pub fn tld(&self) -> &Label {
        // A split always produces at least one item.
        self.labels().next_back().unwrap_or_else(|| Label::new(""))
    }
}

/// # Validity
///
impl Fqdn {
    /// Returns the reason why the name is invalid, if it is.
    pub fn check(&self) -> Result<(), SyntaxError> {
        self.checked
    }

    /// Returns whether the name is valid.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.checked.is_ok()
    }

    /// Returns whether the name is valid and ends with a dot.
    ///
    /// Absolute names are not subject to having the host’s domain name or
    /// search domains appended during lookup.
    #[must_use]
    pub fn is_valid_absolute(&self) -> bool {
        self.is_absolute() && self.is_valid()
    }

    /// Returns whether the name is valid and does not end with a dot.
    #[must_use]
    pub fn is_valid_relative(&self) -> bool {
        self.is_relative() && self.is_valid()
    }
}

/// # Conversion
///
impl Fqdn {
    /// Returns the absolute form of the name, ending with a dot.
    pub fn absolute(&self) -> Result<String, InvalidFormatError> {
        self.checked.map_err(InvalidFormatError)?;
        if self.is_absolute() {
            Ok(self.raw.clone())
        } else {
            Ok(format!("{}.", self.raw))
        }
    }

    /// Returns the relative form of the name, without a trailing dot.
    pub fn relative(&self) -> Result<&str, InvalidFormatError> {
        self.checked.map_err(InvalidFormatError)?;
        Ok(self.body())
    }

    /// Returns the canonical form of the name.
    ///
    /// This is the lowercase text of the name without a trailing dot. Two
    /// names are equal exactly if their canonical forms are. Unlike the
    /// absolute and relative forms, this is available for invalid names.
    #[must_use]
    pub fn to_canonical(&self) -> String {
        self.folded().collect()
    }

    /// Returns the text without a trailing dot regardless of validity.
    fn body(&self) -> &str {
        self.raw.strip_suffix('.').unwrap_or(&self.raw)
    }

    /// Returns the characters of the canonical form.
    fn folded(&self) -> impl Iterator<Item = char> + '_ {
        self.body().chars().flat_map(char::to_lowercase)
    }
}

//--- FromStr and TryFrom

impl FromStr for Fqdn {
    type Err = InvalidInputError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl<'a> TryFrom<&'a str> for Fqdn {
    type Error = InvalidInputError;

    fn try_from(s: &'a str) -> Result<Self, Self::Error> {
        Self::new(s)
    }
}

impl TryFrom<String> for Fqdn {
    type Error = InvalidInputError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::new(s)
    }
}

//--- AsRef

impl AsRef<str> for Fqdn {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

//--- PartialEq and Eq

impl PartialEq for Fqdn {
    fn eq(&self, other: &Self) -> bool {
        self.folded().eq(other.folded())
    }
}

impl Eq for Fqdn {}

//--- PartialOrd and Ord

impl PartialOrd for Fqdn {
    fn partial_cmp(&self, other: &Self) -> Option<cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Fqdn {
    fn cmp(&self, other: &Self) -> cmp::Ordering {
        self.folded().cmp(other.folded())
    }
}

//--- Hash

impl hash::Hash for Fqdn {
    fn hash<H: hash::Hasher>(&self, state: &mut H) {
        for ch in self.folded() {
            ch.hash(state)
        }
        // Terminate like `str` does so tuples of names hash apart.
        state.write_u8(0xff)
    }
}

//--- Display and Debug

impl fmt::Display for Fqdn {
    /// Formats the absolute form of a valid name or the raw text otherwise.
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(&self.raw)?;
        if self.is_valid() && self.is_relative() {
            f.write_str(".")?;
        }
        Ok(())
    }
}

impl fmt::Debug for Fqdn {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_tuple("Fqdn").field(&self.raw).finish()
    }
}

//--- Serialize and Deserialize

#[cfg(feature = "serde")]
impl serde::Serialize for Fqdn {
    fn serialize<S: serde::Serializer>(
        &self,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        serializer.serialize_newtype_struct("Fqdn", self.as_str())
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Fqdn {
    fn deserialize<D: serde::Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Self, D::Error> {
        use serde::de::Error;

        struct InnerVisitor;

        impl<'de> serde::de::Visitor<'de> for InnerVisitor {
            type Value = Fqdn;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a domain name")
            }

            fn visit_str<E: Error>(self, v: &str) -> Result<Self::Value, E> {
                Fqdn::new(v).map_err(E::custom)
            }

            fn visit_string<E: Error>(
                self,
                v: String,
            ) -> Result<Self::Value, E> {
                Fqdn::new(v).map_err(E::custom)
            }

            fn visit_bytes<E: Error>(
                self,
                _: &[u8],
            ) -> Result<Self::Value, E> {
                Err(E::custom(InvalidInputError::NotText))
            }
        }

        struct NewtypeVisitor;

        impl<'de> serde::de::Visitor<'de> for NewtypeVisitor {
            type Value = Fqdn;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a domain name")
            }

            fn visit_newtype_struct<D: serde::Deserializer<'de>>(
                self,
                deserializer: D,
            ) -> Result<Self::Value, D::Error> {
                deserializer.deserialize_str(InnerVisitor)
            }
        }

        deserializer.deserialize_newtype_struct("Fqdn", NewtypeVisitor)
    }
}

//------------ Helper Functions ----------------------------------------------

/// Checks the text of a name against the config.
fn check_name(
    name: &str,
    labels_count: usize,
    config: &Config,
) -> Result<(), SyntaxError> {
    let body = name.strip_suffix('.').unwrap_or(name);
    if body.len() > Fqdn::MAX_LEN {
        return Err(SyntaxError::LongName);
    }
    if labels_count < config.min_labels() {
        return Err(SyntaxError::TooFewLabels);
    }
    for label in Labels::new(name) {
        label.check(config)?;
    }
    if Labels::new(name).next_back().map_or(false, Label::is_numeric) {
        return Err(SyntaxError::NumericTld);
    }
    Ok(())
}

//============ Error Types ===================================================

//------------ SyntaxError ---------------------------------------------------

/// A domain name is not valid.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum SyntaxError {
    /// The name was longer than 253 octets.
    LongName,

    /// The name had fewer labels than required by the config.
    TooFewLabels,

    /// A label was not in preferred form.
    BadLabel(LabelError),

    /// The top-level domain consisted of digits only.
    NumericTld,
}

//--- From

impl From<LabelError> for SyntaxError {
    fn from(err: LabelError) -> Self {
        SyntaxError::BadLabel(err)
    }
}

//--- Display and Error

impl fmt::Display for SyntaxError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            SyntaxError::LongName => f.write_str("long domain name"),
            SyntaxError::TooFewLabels => f.write_str("too few labels"),
            SyntaxError::BadLabel(ref err) => err.fmt(f),
            SyntaxError::NumericTld => {
                f.write_str("all-numeric top-level domain")
            }
        }
    }
}

impl std::error::Error for SyntaxError {}

//------------ InvalidInputError ---------------------------------------------

/// A value could not be used as the text of a domain name at all.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum InvalidInputError {
    /// The text was empty.
    Empty,

    /// The value was not text but, for instance, a byte sequence.
    NotText,
}

//--- Display and Error

impl fmt::Display for InvalidInputError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            InvalidInputError::Empty => f.write_str("empty domain name"),
            InvalidInputError::NotText => {
                f.write_str("domain name must be text")
            }
        }
    }
}

impl std::error::Error for InvalidInputError {}

//------------ InvalidFormatError --------------------------------------------

/// An invalid domain name was converted into absolute or relative form.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct InvalidFormatError(SyntaxError);

impl InvalidFormatError {
    /// Returns the reason why the name is invalid.
    #[must_use]
    pub fn reason(&self) -> SyntaxError {
        self.0
    }
}

//--- Display and Error

impl fmt::Display for InvalidFormatError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "invalid domain name: {}", self.0)
    }
}

impl std::error::Error for InvalidFormatError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.0)
    }
}

//============ Testing =======================================================
