mod helper_constants;
mod normalizer;
mod phone_number_regexps;
pub mod enums;
pub mod errors;
pub mod dz_phone_number;

use std::sync::LazyLock;

use crate::dz_phone_number::phone_number_regexps::PhoneNumberRegExps;

// Helper type for Result
pub type Result<T> = std::result::Result<T, errors::InvalidPhoneNumberError>;

/// Grammar compiled once from the code tables and shared by every parse.
static PHONE_NUMBER_REGEXPS: LazyLock<PhoneNumberRegExps> = LazyLock::new(|| {
    match PhoneNumberRegExps::new() {
        Ok(regexps) => regexps,
        Err(err) => {
            let err_message = format!("Could not compile phone number grammar: {:?}", err);
            log::error!("{}", err_message);
            panic!("{}", err_message);
        }
    }
});
