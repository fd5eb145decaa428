// Copyright (C) 2025 Kashin Vladislav (Rust adaptation author)
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
// http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use log::trace;
use regex::Regex;
use strum::IntoEnumIterator;

use super::{
    enums::{Indicative, LandlineCode, MobileOperator},
    helper_constants::{LANDLINE_SUFFIX_LENGTH, MOBILE_SUFFIX_LENGTH},
};
use crate::regex_util::RegexFullMatch;

/// The three digit groups a valid number is made of.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) struct NumberParts<'a> {
    pub indicative: &'a str,
    pub operator_or_region: &'a str,
    pub suffix: &'a str,
}

pub(super) struct PhoneNumberRegExps {
    /// Indicative, a two-digit code from the wilaya table and a 6-digit suffix.
    ///
    /// Corresponds to `(00213|\+213|0)(21|23|..|49)([0-9]{6})`, matched
    /// against the whole number.
    landline_pattern: Regex,

    /// Indicative, a one-digit code from the operator table and an 8-digit
    /// suffix.
    ///
    /// Corresponds to `(00213|\+213|0)(5|6|7)([0-9]{8})`, matched against
    /// the whole number.
    mobile_pattern: Regex,
}

impl PhoneNumberRegExps {
    pub fn new() -> Result<Self, regex::Error> {
        let mut indicatives = Indicative::iter()
            .map(|indicative| regex::escape(indicative.as_str()))
            .collect::<Vec<_>>();
        // longest first, `0` is a prefix of `00213`
        indicatives.sort_by_key(|indicative| std::cmp::Reverse(indicative.len()));
        let indicatives = indicatives.join("|");

        let landline_codes = LandlineCode::all()
            .map(|code| itoa::Buffer::new().format(code.value()).to_owned())
            .collect::<Vec<_>>()
            .join("|");
        let mobile_codes = MobileOperator::codes()
            .map(|code| itoa::Buffer::new().format(code).to_owned())
            .collect::<Vec<_>>()
            .join("|");

        // it'll be initialized only once, so we can use slow format!
        let landline_pattern = format!(
            r"({})({})([0-9]{{{}}})",
            indicatives, landline_codes, LANDLINE_SUFFIX_LENGTH
        );
        let mobile_pattern = format!(
            r"({})({})([0-9]{{{}}})",
            indicatives, mobile_codes, MOBILE_SUFFIX_LENGTH
        );
        trace!("Landline grammar: {}", landline_pattern);
        trace!("Mobile grammar: {}", mobile_pattern);

        Ok(Self {
            landline_pattern: Regex::new(&landline_pattern)?,
            mobile_pattern: Regex::new(&mobile_pattern)?,
        })
    }

    /// Splits a normalized number into its indicative, operator or region
    /// code and suffix.
    ///
    /// The landline shape is tried first and the mobile shape only when it
    /// fails. Both shapes draw their code from the matching table, so a
    /// well-shaped number with an unknown code is not decomposed.
    pub fn decompose<'a>(&self, number: &'a str) -> Option<NumberParts<'a>> {
        let captures = self
            .landline_pattern
            .full_captures(number)
            .or_else(|| self.mobile_pattern.full_captures(number))?;

        Some(NumberParts {
            indicative: captures.get(1)?.as_str(),
            operator_or_region: captures.get(2)?.as_str(),
            suffix: captures.get(3)?.as_str(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::{NumberParts, PhoneNumberRegExps};

    fn parts<'a>(indicative: &'a str, operator_or_region: &'a str, suffix: &'a str) -> NumberParts<'a> {
        NumberParts { indicative, operator_or_region, suffix }
    }

    #[test]
    fn check_regexps_are_compiling() {
        PhoneNumberRegExps::new().unwrap();
    }

    #[test]
    fn decomposes_mobile_numbers() {
        let regexps = PhoneNumberRegExps::new().unwrap();
        assert_eq!(regexps.decompose("0512345678"), Some(parts("0", "5", "12345678")));
        assert_eq!(regexps.decompose("00213612345678"), Some(parts("00213", "6", "12345678")));
        assert_eq!(regexps.decompose("+213712345678"), Some(parts("+213", "7", "12345678")));
    }

    #[test]
    fn decomposes_landline_numbers() {
        let regexps = PhoneNumberRegExps::new().unwrap();
        assert_eq!(regexps.decompose("038123456"), Some(parts("0", "38", "123456")));
        assert_eq!(regexps.decompose("0021321123456"), Some(parts("00213", "21", "123456")));
        assert_eq!(regexps.decompose("+21349123456"), Some(parts("+213", "49", "123456")));
    }

    #[test]
    fn rejects_codes_absent_from_tables() {
        let regexps = PhoneNumberRegExps::new().unwrap();
        // mobile shaped, 8 is no operator
        assert_eq!(regexps.decompose("0812345678"), None);
        // landline shaped, 22 is no wilaya
        assert_eq!(regexps.decompose("022123456"), None);
    }

    #[test]
    fn rejects_wrong_lengths_and_foreign_prefixes() {
        let regexps = PhoneNumberRegExps::new().unwrap();
        // mobile code with a landline-length suffix and the other way around
        assert_eq!(regexps.decompose("0512345"), None);
        assert_eq!(regexps.decompose("03812345678"), None);
        assert_eq!(regexps.decompose("+216512345678"), None);
        assert_eq!(regexps.decompose("00216512345678"), None);
        assert_eq!(regexps.decompose("512345678"), None);
        assert_eq!(regexps.decompose(""), None);
        assert_eq!(regexps.decompose("+213(5)12345678"), None);
        // a valid number with leading or trailing garbage
        assert_eq!(regexps.decompose("x0512345678"), None);
        assert_eq!(regexps.decompose("05123456789"), None);
        assert_eq!(regexps.decompose("1038123456"), None);
    }
}
