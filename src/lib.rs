//! Validation of fully-qualified domain names.
//!
//! This crate checks whether a string is a syntactically valid domain name
//! as defined by [RFC 1035] for the length of names and labels, and by the
//! “preferred form” of [RFC 3696] section 2 and [RFC 1123] for the
//! characters allowed in labels. It does not resolve names or talk to
//! the DNS in any way, nor does it transcode internationalized names:
//! text that isn’t plain ASCII is simply not a valid name.
//!
//! The main type is [`Fqdn`]. It keeps the text of a name as given and
//! knows whether it is valid under a [`Config`]. A valid name can be
//! converted into its absolute form, ending in a dot, or its relative form,
//! without one. Names compare equal ignoring case and a trailing dot. Case
//! is folded with full Unicode lowercasing, which for valid names is the
//! same as ignoring ASCII case.
//!
//! ```
//! use fqdn::{Config, Fqdn};
//!
//! let name = Fqdn::new("www.Example.com")?;
//! assert!(name.is_valid_relative());
//! assert_eq!(name.absolute()?, "www.Example.com.");
//! assert_eq!(name, Fqdn::new("www.example.com.")?);
//!
//! assert!(!Fqdn::new("_dmarc.example.com")?.is_valid());
//! let lax = Config::lax();
//! assert!(Fqdn::with_config("_dmarc.example.com", lax)?.is_valid());
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! # Reference of Feature Flags
//!
//! * `logging`: adds the [tracing-subscriber] crate as a dependency and
//!   provides `init_logging` to print the events emitted by this crate.
//! * `serde`: enables serializing and deserializing [`Fqdn`] via
//!   [serde](https://serde.rs/). Deserializing from bytes rather than a
//!   string fails with [`InvalidInputError::NotText`]. The tests for this
//!   live in `tests/ser_de.rs` and only run with `--features serde`.
//!
//! [RFC 1035]: https://tools.ietf.org/html/rfc1035
//! [RFC 1123]: https://tools.ietf.org/html/rfc1123
//! [RFC 3696]: https://tools.ietf.org/html/rfc3696
//! [tracing-subscriber]: https://github.com/tokio-rs/tracing

#![cfg_attr(docsrs, feature(doc_cfg))]

pub use self::config::Config;
pub use self::fqdn::{
    Fqdn, InvalidFormatError, InvalidInputError, SyntaxError,
};
pub use self::label::{Label, LabelError, Labels};
#[cfg(feature = "logging")]
pub use self::logging::init_logging;

mod config;
mod fqdn;
mod label;
#[cfg(feature = "logging")]
mod logging;
