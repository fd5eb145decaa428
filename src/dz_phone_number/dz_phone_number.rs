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

use std::{
    fmt,
    hash::{Hash, Hasher},
    str::FromStr,
};

use log::{debug, trace};

use super::{
    PHONE_NUMBER_REGEXPS, Result,
    enums::{CodeName, Indicative, LandlineRegion, MobileOperator, OperatorOrRegion},
    errors::{InvalidFormatReason, InvalidPhoneNumberError, UnknownNameError},
    normalizer::normalize,
};
use crate::macros::name_queries;

/// A valid Algerian phone number.
///
/// Values are only created by parsing, and are never modified afterwards:
/// [`DzPhoneNumber::replace`] hands out a new, re-validated number.
///
/// Two numbers are equal when their operator or region code and suffix are,
/// whatever indicative they were written with. The hash follows the same
/// rule, so `0512345678` and `+213 5 12 34 56 78` land in the same
/// `HashSet` slot.
///
/// Comparing against anything that is not a `DzPhoneNumber` does not compile.
#[derive(Clone)]
pub struct DzPhoneNumber {
    /// Normalized digits, indicative included.
    number: String,
    indicative: Indicative,
    operator_or_region: OperatorOrRegion,
    suffix: String,
    /// Input exactly as given, kept for diagnostics.
    raw_number: String,
}

impl DzPhoneNumber {
    /// Parses a number written with an optional amount of formatting, e.g.
    /// `"(+213) 38-12-34-56"`.
    pub fn parse(number: impl Into<String>) -> Result<Self> {
        let raw_number = number.into();
        match Self::split(&raw_number) {
            Ok((number, indicative, operator_or_region, suffix)) => {
                trace!(
                    "Parsed {:?} as {} - {} - {}",
                    raw_number,
                    indicative.as_str(),
                    operator_or_region.describe(),
                    suffix
                );
                Ok(Self {
                    number,
                    indicative,
                    operator_or_region,
                    suffix,
                    raw_number,
                })
            }
            Err(reason) => Err(Self::invalid(raw_number, reason)),
        }
    }

    /// Parses raw bytes, refusing anything that is not UTF-8 text.
    pub fn parse_bytes(number: &[u8]) -> Result<Self> {
        match std::str::from_utf8(number) {
            Ok(number) => Self::parse(number),
            Err(_) => Err(Self::invalid(
                String::from_utf8_lossy(number),
                InvalidFormatReason::NotText,
            )),
        }
    }

    /// Builds a number from its three parts, e.g. `("+213", "7", "12345678")`.
    ///
    /// The parts are joined and go through [`DzPhoneNumber::parse`], so they
    /// are validated exactly like a whole number would be.
    pub fn from_parts(indicative: &str, operator_or_region: &str, suffix: &str) -> Result<Self> {
        Self::parse(fast_cat::concat_str!(indicative, operator_or_region, suffix))
    }

    /// Parses another number. Named counterpart of [`DzPhoneNumber::parse`]
    /// for call chains starting from an existing value.
    pub fn with_number(&self, number: impl Into<String>) -> Result<Self> {
        Self::parse(number)
    }

    /// Returns a new number with the given parts swapped in and the others
    /// taken from `self`.
    ///
    /// The combination is validated again, so replacing only the suffix of a
    /// mobile number with six digits fails.
    pub fn replace(
        &self,
        indicative: Option<&str>,
        operator_or_region: Option<&str>,
        suffix: Option<&str>,
    ) -> Result<Self> {
        let mut buf = itoa::Buffer::new();
        let indicative = indicative.unwrap_or(self.indicative.as_str());
        let operator_or_region = match operator_or_region {
            Some(operator_or_region) => operator_or_region,
            None => buf.format(self.operator_or_region.code()),
        };
        let suffix = suffix.unwrap_or(self.suffix.as_str());
        Self::from_parts(indicative, operator_or_region, suffix)
    }

    pub fn is_mobile(&self) -> bool {
        matches!(self.operator_or_region, OperatorOrRegion::Mobile(_))
    }

    pub fn is_landline(&self) -> bool {
        matches!(self.operator_or_region, OperatorOrRegion::Landline(_))
    }

    /// Whether the number belongs to the operator or wilaya called `name`.
    ///
    /// Names are compared by code, `is("BISKRA")` holds for a `BATNA` number.
    /// Asking for a name neither table knows is a usage error.
    pub fn is(&self, name: &str) -> std::result::Result<bool, UnknownNameError> {
        self.operator_or_region.is_of_equal_value(name)
    }

    name_queries! {
        is_ooredoo => MobileOperator::Ooredoo,
        is_mobilis => MobileOperator::Mobilis,
        is_djezzy => MobileOperator::Djezzy,
    }

    name_queries! {
        is_adrar => LandlineRegion::Adrar,
        is_chlef => LandlineRegion::Chlef,
        is_laghouat => LandlineRegion::Laghouat,
        is_oum_el_bouaghi => LandlineRegion::OumElBouaghi,
        is_batna => LandlineRegion::Batna,
        is_bejaia => LandlineRegion::Bejaia,
        is_biskra => LandlineRegion::Biskra,
        is_bechar => LandlineRegion::Bechar,
        is_blida => LandlineRegion::Blida,
        is_bouira => LandlineRegion::Bouira,
        is_tamanrasset => LandlineRegion::Tamanrasset,
        is_tebessa => LandlineRegion::Tebessa,
        is_tlemcen => LandlineRegion::Tlemcen,
        is_tiaret => LandlineRegion::Tiaret,
        is_tizi_ouzou => LandlineRegion::TiziOuzou,
        is_algiers => LandlineRegion::Algiers,
        is_algiers_2 => LandlineRegion::Algiers2,
        is_djelfa => LandlineRegion::Djelfa,
        is_jijel => LandlineRegion::Jijel,
        is_setif => LandlineRegion::Setif,
        is_saida => LandlineRegion::Saida,
        is_skikda => LandlineRegion::Skikda,
        is_sidi_bel_abbes => LandlineRegion::SidiBelAbbes,
        is_annaba => LandlineRegion::Annaba,
        is_guelma => LandlineRegion::Guelma,
        is_constantine => LandlineRegion::Constantine,
        is_medea => LandlineRegion::Medea,
        is_mostaganem => LandlineRegion::Mostaganem,
        is_msila => LandlineRegion::Msila,
        is_mascara => LandlineRegion::Mascara,
        is_ouargla => LandlineRegion::Ouargla,
        is_oran => LandlineRegion::Oran,
        is_el_bayadh => LandlineRegion::ElBayadh,
        is_ilizi => LandlineRegion::Ilizi,
        is_bordj_bou_arreridj => LandlineRegion::BordjBouArreridj,
        is_boumerdes => LandlineRegion::Boumerdes,
        is_el_taref => LandlineRegion::ElTaref,
        is_tindouf => LandlineRegion::Tindouf,
        is_tissemsilt => LandlineRegion::Tissemsilt,
        is_el_oued => LandlineRegion::ElOued,
        is_khenchela => LandlineRegion::Khenchela,
        is_souk_ahras => LandlineRegion::SoukAhras,
        is_tipaza => LandlineRegion::Tipaza,
        is_mila => LandlineRegion::Mila,
        is_ain_defla => LandlineRegion::AinDefla,
        is_naama => LandlineRegion::Naama,
        is_ain_temouchent => LandlineRegion::AinTemouchent,
        is_ghardaia => LandlineRegion::Ghardaia,
        is_relizane => LandlineRegion::Relizane,
    }

    pub fn indicative(&self) -> Indicative {
        self.indicative
    }

    pub fn operator_or_region(&self) -> OperatorOrRegion {
        self.operator_or_region
    }

    pub fn suffix(&self) -> &str {
        &self.suffix
    }

    /// Input as it was given, for diagnostics only.
    pub fn raw_input(&self) -> &str {
        &self.raw_number
    }

    /// Normalized number: the indicative followed by digits only.
    pub fn as_str(&self) -> &str {
        &self.number
    }

    /// Normalizes and decomposes a raw number into the normalized string,
    /// indicative, code and suffix.
    fn split(
        raw_number: &str,
    ) -> std::result::Result<(String, Indicative, OperatorOrRegion, String), InvalidFormatReason> {
        let normalized = normalize(raw_number)?;
        let parts = PHONE_NUMBER_REGEXPS
            .decompose(&normalized)
            .ok_or(InvalidFormatReason::NotMatched)?;

        let indicative = Indicative::from_prefix(parts.indicative)
            .ok_or(InvalidFormatReason::NotMatched)?;
        let operator_or_region = parts
            .operator_or_region
            .parse::<u8>()
            .ok()
            .and_then(OperatorOrRegion::from_code)
            .ok_or(InvalidFormatReason::NotMatched)?;
        let suffix = parts.suffix.to_owned();

        Ok((normalized.into_owned(), indicative, operator_or_region, suffix))
    }

    fn invalid(raw_number: impl Into<String>, reason: InvalidFormatReason) -> InvalidPhoneNumberError {
        let err = InvalidPhoneNumberError::new(raw_number, reason);
        debug!("{}", err);
        err
    }
}

impl PartialEq for DzPhoneNumber {
    fn eq(&self, other: &Self) -> bool {
        self.operator_or_region.code() == other.operator_or_region.code()
            && self.suffix == other.suffix
    }
}

impl Eq for DzPhoneNumber {}

impl Hash for DzPhoneNumber {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.operator_or_region.code().hash(state);
        self.suffix.hash(state);
    }
}

impl fmt::Debug for DzPhoneNumber {
    /// Renders the parts, e.g. `DzPhoneNumber(0 - LandlineRegion: BATNA|BISKRA - 123456)`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "DzPhoneNumber({} - {} - {})",
            self.indicative.as_str(),
            self.operator_or_region.describe(),
            self.suffix
        )
    }
}

impl fmt::Display for DzPhoneNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.number)
    }
}

impl AsRef<str> for DzPhoneNumber {
    fn as_ref(&self) -> &str {
        &self.number
    }
}

impl FromStr for DzPhoneNumber {
    type Err = InvalidPhoneNumberError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl TryFrom<&str> for DzPhoneNumber {
    type Error = InvalidPhoneNumberError;

    fn try_from(value: &str) -> Result<Self> {
        Self::parse(value)
    }
}

impl TryFrom<String> for DzPhoneNumber {
    type Error = InvalidPhoneNumberError;

    fn try_from(value: String) -> Result<Self> {
        Self::parse(value)
    }
}

impl TryFrom<Option<&str>> for DzPhoneNumber {
    type Error = InvalidPhoneNumberError;

    /// A missing number is as invalid as a malformed one.
    fn try_from(value: Option<&str>) -> Result<Self> {
        match value {
            Some(value) => Self::parse(value),
            None => Err(Self::invalid(String::new(), InvalidFormatReason::Absent)),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::hash_map::DefaultHasher;
    use std::hash::{Hash, Hasher};

    use super::DzPhoneNumber;
    use crate::{InvalidFormatReason, LandlineCode, MobileOperator, OperatorOrRegion};

    fn hash_of(number: &DzPhoneNumber) -> u64 {
        let mut hasher = DefaultHasher::new();
        number.hash(&mut hasher);
        hasher.finish()
    }

    #[test]
    fn keeps_parts_and_raw_input() {
        let number = DzPhoneNumber::parse("(+213) 38-12-34-56").unwrap();
        assert_eq!(number.as_str(), "+21338123456");
        assert_eq!(number.raw_input(), "(+213) 38-12-34-56");
        assert_eq!(number.suffix(), "123456");
        assert_eq!(
            number.operator_or_region(),
            OperatorOrRegion::Landline(LandlineCode::new(38).unwrap())
        );
    }

    #[test]
    fn debug_shows_parts_not_raw_input() {
        let number = DzPhoneNumber::parse("0 33-12-34-56").unwrap();
        assert_eq!(
            format!("{:?}", number),
            "DzPhoneNumber(0 - LandlineRegion: BATNA|BISKRA - 123456)"
        );

        let number = DzPhoneNumber::parse("+213 7 12 34 56 78").unwrap();
        assert_eq!(
            format!("{:?}", number),
            "DzPhoneNumber(+213 - MobileOperator: DJEZZY - 12345678)"
        );
    }

    #[test]
    fn hash_ignores_indicative() {
        let local = DzPhoneNumber::parse("0550123456").unwrap();
        let global = DzPhoneNumber::parse("00213 550123456").unwrap();
        assert_eq!(local, global);
        assert_eq!(hash_of(&local), hash_of(&global));
        assert_ne!(local.as_str(), global.as_str());
    }

    #[test]
    fn replace_keeps_unspecified_parts() {
        let number = DzPhoneNumber::parse("0512345678").unwrap();

        let djezzy = number.replace(None, Some("7"), None).unwrap();
        assert_eq!(djezzy.as_str(), "0712345678");
        assert_eq!(djezzy.operator_or_region(), OperatorOrRegion::Mobile(MobileOperator::Djezzy));

        let international = number.replace(Some("+213"), None, None).unwrap();
        assert_eq!(international.as_str(), "+213512345678");
        assert_eq!(international, number);

        // the source number is untouched
        assert_eq!(number.as_str(), "0512345678");
    }

    #[test]
    fn replace_is_validated_again() {
        let number = DzPhoneNumber::parse("0512345678").unwrap();
        let err = number.replace(None, None, Some("123456")).unwrap_err();
        assert_eq!(err.reason(), InvalidFormatReason::NotMatched);
        assert_eq!(err.raw(), "05123456");

        // a landline code needs a six-digit suffix
        assert!(number.replace(None, Some("38"), None).is_err());
        assert!(number.replace(None, Some("38"), Some("123456")).is_ok());
    }

    #[test]
    fn absent_and_non_text_input_is_invalid() {
        let err = DzPhoneNumber::try_from(None::<&str>).unwrap_err();
        assert_eq!(err.reason(), InvalidFormatReason::Absent);

        let err = DzPhoneNumber::parse_bytes(&[0x30, 0x35, 0xff, 0xfe]).unwrap_err();
        assert_eq!(err.reason(), InvalidFormatReason::NotText);

        assert!(DzPhoneNumber::parse_bytes(b"0512345678").is_ok());
        assert!(DzPhoneNumber::try_from(Some("0512345678")).is_ok());
    }
}
