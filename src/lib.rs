//! Algerian phone numbers as an immutable, comparable value type.
//!
//! ```rust
//! use dz_phone_number::DzPhoneNumber;
//!
//! let local = DzPhoneNumber::parse("0512345678").unwrap();
//! let international = DzPhoneNumber::parse("+213 5 12 34 56 78").unwrap();
//!
//! assert!(local.is_mobile());
//! assert!(local.is_ooredoo());
//! assert_eq!(local, international);
//! assert_eq!(international.to_string(), "+213512345678");
//! ```
#![forbid(unsafe_code)]

mod dz_phone_number;
pub(crate) mod regex_util;
pub(crate) mod string_util;

/// Boilerplate that would otherwise be repeated for every code table entry
/// and every per-name query lives here as macros, the name of which
/// describes what is happening more clearly than the expanded code.
mod macros;


pub use dz_phone_number::{
    Result,
    dz_phone_number::DzPhoneNumber,
    enums::{CodeName, Indicative, LandlineCode, LandlineRegion, MobileOperator, OperatorOrRegion},
    errors::{InvalidFormatReason, InvalidPhoneNumberError, UnknownNameError},
};
