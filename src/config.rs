//! Validation policy for domain names.

//------------ Config --------------------------------------------------------

/// Default for the minimum number of labels.
const DEF_MIN_LABELS: usize = 2;

/// Policy applied when checking a domain name.
///
/// The defaults describe the RFC 3696 “preferred form” of a host name with
/// at least one label below the top-level domain.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Config {
    /// Whether underscores are forbidden in labels.
    strict: bool,

    /// The minimum number of labels a name must have.
    min_labels: usize,

    /// Whether labels may start with a digit.
    leading_digit: bool,
}

impl Config {
    /// Creates a new config with default values.
    #[must_use]
    pub fn new() -> Self {
        Default::default()
    }

    /// Creates a config that allows underscores in labels.
    ///
    /// All other values are the defaults.
    #[must_use]
    pub fn lax() -> Self {
        let mut res = Self::new();
        res.set_strict(false);
        res
    }

    /// Returns whether strict mode is enabled.
    ///
    /// In strict mode, labels may only contain ASCII letters, digits, and
    /// the hyphen. Otherwise the underscore is accepted as well, since it
    /// is commonly found in real-world names such as `_dmarc.example.com`.
    #[must_use]
    pub fn strict(&self) -> bool {
        self.strict
    }

    /// Sets whether strict mode is enabled.
    pub fn set_strict(&mut self, value: bool) {
        self.strict = value
    }

    /// Returns the minimum number of labels.
    ///
    /// The trailing root label of an absolute name is not counted.
    #[must_use]
    pub fn min_labels(&self) -> usize {
        self.min_labels
    }

    /// Sets the minimum number of labels.
    pub fn set_min_labels(&mut self, value: usize) {
        self.min_labels = value
    }

    /// Returns whether labels may start with a digit.
    ///
    /// RFC 1123 relaxed the original rule of RFC 1035 that labels must
    /// start with a letter, so this is allowed by default.
    #[must_use]
    pub fn leading_digit(&self) -> bool {
        self.leading_digit
    }

    /// Sets whether labels may start with a digit.
    pub fn set_leading_digit(&mut self, value: bool) {
        self.leading_digit = value
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            strict: true,
            min_labels: DEF_MIN_LABELS,
            leading_digit: true,
        }
    }
}

//============ Testing =======================================================
