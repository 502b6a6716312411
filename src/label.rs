//! Domain name labels.
//!
//! This is a private module. Its public types are re-exported by the parent
//! module.

use crate::config::Config;
use core::{cmp, fmt, hash, str};

//------------ Label ---------------------------------------------------------

/// A string slice with the content of a domain name label.
///
/// This is an unsized type wrapping a single dot-separated segment of a
/// domain name in its textual form. It does not guarantee that the content
/// is a valid label: the empty label produced by consecutive dots is just
/// as much a label as `www`. Use [`check`][Self::check] to find out whether
/// the label is acceptable.
///
/// As labels are to be case-insensitive, the comparison traits as well as
/// `Hash` are implemented ignoring ASCII-case.
#[repr(transparent)]
pub struct Label(str);

/// # Creation
///
impl Label {
    /// Domain name labels have a maximum length of 63 octets.
    pub const MAX_LEN: usize = 63;

    /// Creates a label reference from a string slice.
    ///
    /// The slice should not contain a dot, but this isn’t checked.
    #[must_use]
    pub fn new(s: &str) -> &Self {
        // SAFETY: Label has repr(transparent)
        unsafe { &*(s as *const str as *const Label) }
    }
}

/// # Content
///
impl Label {
    /// Returns the label’s content as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns the length of the label in octets.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns whether the label is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns whether the label consists of ASCII digits only.
    ///
    /// The empty label is not numeric.
    #[must_use]
    pub fn is_numeric(&self) -> bool {
        !self.is_empty() && self.0.bytes().all(|ch| ch.is_ascii_digit())
    }

    /// Checks that the label is in preferred form.
    ///
    /// A label must be between 1 and 63 octets long and consist of ASCII
    /// letters, digits, and hyphens only. It must neither start nor end
    /// with a hyphen. If the config is not strict, underscores are allowed
    /// as well. If the config disallows it, the label must not start with
    /// a digit either.
    pub fn check(&self, config: &Config) -> Result<(), LabelError> {
        let first = match self.0.chars().next() {
            Some(ch) => ch,
            None => return Err(LabelError::Empty),
        };
        if self.len() > Label::MAX_LEN {
            return Err(LabelError::Long);
        }
        for ch in self.0.chars() {
            let ok = match ch {
                'a'..='z' | 'A'..='Z' | '0'..='9' | '-' => true,
                '_' => !config.strict(),
                _ => false,
            };
            if !ok {
                return Err(LabelError::IllegalCharacter(ch));
            }
        }
        if first == '-' {
            return Err(LabelError::LeadingHyphen);
        }
        if self.0.ends_with('-') {
            return Err(LabelError::TrailingHyphen);
        }
        if first.is_ascii_digit() && !config.leading_digit() {
            return Err(LabelError::LeadingDigit);
        }
        Ok(())
    }
}

//--- AsRef

impl AsRef<str> for Label {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

//--- PartialEq and Eq

impl PartialEq for Label {
    fn eq(&self, other: &Self) -> bool {
        self.0.eq_ignore_ascii_case(&other.0)
    }
}

impl PartialEq<str> for Label {
    fn eq(&self, other: &str) -> bool {
        self.0.eq_ignore_ascii_case(other)
    }
}

impl Eq for Label {}

//--- PartialOrd and Ord

impl PartialOrd for Label {
    fn partial_cmp(&self, other: &Self) -> Option<cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Label {
    fn cmp(&self, other: &Self) -> cmp::Ordering {
        self.0
            .bytes()
            .map(|ch| ch.to_ascii_lowercase())
            .cmp(other.0.bytes().map(|ch| ch.to_ascii_lowercase()))
    }
}

//--- Hash

impl hash::Hash for Label {
    fn hash<H: hash::Hasher>(&self, state: &mut H) {
        self.len().hash(state);
        for ch in self.0.bytes() {
            ch.to_ascii_lowercase().hash(state)
        }
    }
}

//--- Display and Debug

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl fmt::Debug for Label {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("Label(")?;
        fmt::Display::fmt(self, f)?;
        f.write_str(")")
    }
}

//------------ Labels --------------------------------------------------------

/// An iterator over the labels of a domain name.
///
/// The trailing root label of an absolute name is not included. Empty
/// labels, such as the one between two consecutive dots, are.
#[derive(Clone, Debug)]
pub struct Labels<'a> {
    /// The remaining labels.
    inner: str::Split<'a, char>,
}

impl<'a> Labels<'a> {
    /// Creates an iterator over the labels of a name in textual form.
    pub(crate) fn new(name: &'a str) -> Self {
        let body = name.strip_suffix('.').unwrap_or(name);
        Labels {
            inner: body.split('.'),
        }
    }
}

impl<'a> Iterator for Labels<'a> {
    type Item = &'a Label;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(Label::new)
    }
}

impl<'a> DoubleEndedIterator for Labels<'a> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back().map(Label::new)
    }
}

//============ Error Types ===================================================

//------------ LabelError ----------------------------------------------------

/// A label is not in preferred form.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum LabelError {
    /// The label was empty.
    Empty,

    /// The label was longer than 63 octets.
    Long,

    /// The label contained a character outside the allowed set.
    IllegalCharacter(char),

    /// The label started with a hyphen.
    LeadingHyphen,

    /// The label ended with a hyphen.
    TrailingHyphen,

    /// The label started with a digit while this was disallowed.
    LeadingDigit,
}

//--- Display and Error

impl fmt::Display for LabelError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            LabelError::Empty => f.write_str("empty label"),
            LabelError::Long => f.write_str("long label"),
            LabelError::IllegalCharacter(ch) => {
                write!(f, "illegal character '{}'", ch.escape_debug())
            }
            LabelError::LeadingHyphen => {
                f.write_str("label starts with a hyphen")
            }
            LabelError::TrailingHyphen => {
                f.write_str("label ends with a hyphen")
            }
            LabelError::LeadingDigit => {
                f.write_str("label starts with a digit")
            }
        }
    }
}

impl std::error::Error for LabelError {}

//============ Testing =======================================================
