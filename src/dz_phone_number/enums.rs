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

use std::{collections::BTreeSet, str::FromStr};

use strum::{EnumIter, EnumString, IntoEnumIterator, IntoStaticStr};

use super::{
    errors::UnknownNameError,
    helper_constants::{GLOBAL_00_INDICATIVE, GLOBAL_PLUS_INDICATIVE, LOCAL_INDICATIVE},
};
use crate::macros::code_table;

/// The leading dialing prefix a number was written with.
///
/// It only records how the number was entered: `0512345678` and
/// `+213512345678` are the same number.
#[derive(Debug, EnumIter, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Indicative {
    /// **Local dialing**, the trunk prefix `0`.
    Local,
    /// **International dialing** through the `00` exit code: `00213`.
    Global00,
    /// **International dialing** in `+` notation: `+213`.
    GlobalPlus,
}

impl Indicative {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Local => LOCAL_INDICATIVE,
            Self::Global00 => GLOBAL_00_INDICATIVE,
            Self::GlobalPlus => GLOBAL_PLUS_INDICATIVE,
        }
    }

    /// Looks up the indicative written exactly as `prefix`.
    pub fn from_prefix(prefix: &str) -> Option<Self> {
        Self::iter().find(|indicative| indicative.as_str() == prefix)
    }
}

code_table! {
    /// Mobile network operators, identified by the single digit following
    /// the indicative.
    #[derive(Debug, EnumIter, EnumString, IntoStaticStr, Clone, Copy, PartialEq, Eq, Hash)]
    #[strum(serialize_all = "SCREAMING_SNAKE_CASE", ascii_case_insensitive)]
    pub enum MobileOperator {
        Ooredoo = 5,
        Mobilis = 6,
        Djezzy = 7,
    }
}

impl MobileOperator {
    pub fn from_code(code: u8) -> Option<Self> {
        Self::iter().find(|operator| operator.code() == code)
    }

    /// Every valid mobile operator code.
    pub fn codes() -> impl Iterator<Item = u8> {
        Self::iter().map(Self::code)
    }

    pub fn name(self) -> &'static str {
        self.into()
    }
}

code_table! {
    /// Wilayas and the two-digit landline code they are dialed with.
    ///
    /// Several wilayas share a code, `BATNA` and `BISKRA` are both `33`.
    /// The first name declared for a code is the one reported when a number
    /// has to be described by a single name.
    #[derive(Debug, EnumIter, EnumString, IntoStaticStr, Clone, Copy, PartialEq, Eq, Hash)]
    #[strum(serialize_all = "SCREAMING_SNAKE_CASE", ascii_case_insensitive)]
    pub enum LandlineRegion {
        Adrar = 49,
        Chlef = 27,
        Laghouat = 29,
        OumElBouaghi = 32,
        Batna = 33,
        Bejaia = 34,
        Biskra = 33,
        Bechar = 49,
        Blida = 25,
        Bouira = 26,
        Tamanrasset = 29,
        Tebessa = 37,
        Tlemcen = 43,
        Tiaret = 46,
        TiziOuzou = 26,
        Algiers = 21,
        #[strum(serialize = "ALGIERS_2")]
        Algiers2 = 23,
        Djelfa = 27,
        Jijel = 34,
        Setif = 36,
        Saida = 48,
        Skikda = 38,
        SidiBelAbbes = 48,
        Annaba = 38,
        Guelma = 37,
        Constantine = 31,
        Medea = 25,
        Mostaganem = 45,
        Msila = 35,
        Mascara = 45,
        Ouargla = 29,
        Oran = 41,
        ElBayadh = 49,
        Ilizi = 29,
        BordjBouArreridj = 35,
        Boumerdes = 24,
        ElTaref = 38,
        Tindouf = 49,
        Tissemsilt = 46,
        ElOued = 32,
        Khenchela = 32,
        SoukAhras = 37,
        Tipaza = 24,
        Mila = 31,
        AinDefla = 27,
        Naama = 49,
        AinTemouchent = 43,
        Ghardaia = 29,
        Relizane = 46,
    }
}

impl LandlineRegion {
    pub fn name(self) -> &'static str {
        self.into()
    }
}

/// A two-digit landline code known to the wilaya table.
///
/// One code stands for every wilaya sharing it, see [`LandlineCode::regions`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct LandlineCode(u8);

impl LandlineCode {
    /// Returns `None` when no wilaya is dialed with `code`.
    pub fn new(code: u8) -> Option<Self> {
        LandlineRegion::iter()
            .any(|region| region.code() == code)
            .then_some(Self(code))
    }

    pub fn value(self) -> u8 {
        self.0
    }

    /// Every distinct landline code in ascending order.
    pub fn all() -> impl Iterator<Item = LandlineCode> {
        LandlineRegion::iter()
            .map(LandlineRegion::code)
            .collect::<BTreeSet<_>>()
            .into_iter()
            .map(Self)
    }

    /// Every wilaya dialed with this code, in declaration order.
    pub fn regions(self) -> impl Iterator<Item = LandlineRegion> {
        LandlineRegion::iter().filter(move |region| region.code() == self.0)
    }
}

impl From<LandlineRegion> for LandlineCode {
    fn from(region: LandlineRegion) -> Self {
        Self(region.code())
    }
}

/// A symbolic name from either code table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CodeName {
    Mobile(MobileOperator),
    Landline(LandlineRegion),
}

impl CodeName {
    /// Resolves a name such as `"DJEZZY"` or `"tizi_ouzou"`, ignoring ASCII case.
    pub fn resolve(name: &str) -> Result<Self, UnknownNameError> {
        if let Ok(operator) = MobileOperator::from_str(name) {
            return Ok(Self::Mobile(operator));
        }
        LandlineRegion::from_str(name)
            .map(Self::Landline)
            .map_err(|_| UnknownNameError { name: name.to_owned() })
    }
}

impl From<MobileOperator> for CodeName {
    fn from(operator: MobileOperator) -> Self {
        Self::Mobile(operator)
    }
}

impl From<LandlineRegion> for CodeName {
    fn from(region: LandlineRegion) -> Self {
        Self::Landline(region)
    }
}

/// The digit group right after the indicative. Its table decides whether
/// the number is a mobile or a landline one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OperatorOrRegion {
    /// One digit, followed by an 8-digit suffix.
    Mobile(MobileOperator),
    /// Two digits, followed by a 6-digit suffix.
    Landline(LandlineCode),
}

impl OperatorOrRegion {
    /// Classifies a numeric code. Mobile codes are checked first, the two
    /// tables never share a code.
    pub fn from_code(code: u8) -> Option<Self> {
        MobileOperator::from_code(code)
            .map(Self::Mobile)
            .or_else(|| LandlineCode::new(code).map(Self::Landline))
    }

    pub fn code(self) -> u8 {
        match self {
            Self::Mobile(operator) => operator.code(),
            Self::Landline(code) => code.value(),
        }
    }

    /// Whether `name` stands for the same code as `self`. Names of the other
    /// table never do.
    pub fn denotes(self, name: CodeName) -> bool {
        match (self, name) {
            (Self::Mobile(operator), CodeName::Mobile(other)) => operator.code() == other.code(),
            (Self::Landline(code), CodeName::Landline(region)) => code.value() == region.code(),
            _ => false,
        }
    }

    /// Alias-aware name comparison: a number dialed with `33` is both
    /// `BATNA` and `BISKRA`.
    pub fn is_of_equal_value(self, name: &str) -> Result<bool, UnknownNameError> {
        CodeName::resolve(name).map(|name| self.denotes(name))
    }

    /// All names sharing this code.
    pub fn names(self) -> Vec<&'static str> {
        match self {
            Self::Mobile(operator) => vec![operator.name()],
            Self::Landline(code) => code.regions().map(LandlineRegion::name).collect(),
        }
    }

    /// Table and names of this code, e.g. `LandlineRegion: BATNA|BISKRA`.
    pub fn describe(self) -> String {
        let table = match self {
            Self::Mobile(_) => "MobileOperator",
            Self::Landline(_) => "LandlineRegion",
        };
        format!("{}: {}", table, self.names().join("|"))
    }
}
