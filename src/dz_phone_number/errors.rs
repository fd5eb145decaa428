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

use thiserror::Error;

/// Why an input was refused as an Algerian phone number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum InvalidFormatReason {
    /// No input was given at all.
    #[error("no input given")]
    Absent,
    /// The input is not valid UTF-8 text.
    #[error("input is not text")]
    NotText,
    /// The trimmed input starts or ends with a dash.
    #[error("starts or ends with a dash")]
    DashAtBoundary,
    /// The normalized input does not follow the numbering plan, this includes
    /// well-shaped numbers whose operator or region code is unknown.
    #[error("does not match any mobile or landline number shape")]
    NotMatched,
}

/// The input is not a valid Algerian phone number.
///
/// Always carries the input exactly as it was given.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{raw} is invalid Algerian phone number")]
pub struct InvalidPhoneNumberError {
    raw: String,
    reason: InvalidFormatReason,
}

impl InvalidPhoneNumberError {
    pub(crate) fn new(raw: impl Into<String>, reason: InvalidFormatReason) -> Self {
        Self { raw: raw.into(), reason }
    }

    /// Input as it was handed to the parser.
    pub fn raw(&self) -> &str {
        &self.raw
    }

    pub fn reason(&self) -> InvalidFormatReason {
        self.reason
    }
}

/// A name was queried that is neither a mobile operator nor a landline region.
///
/// This is a usage error on the caller side and never the result of parsing
/// user input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown operator or region name: {name}")]
pub struct UnknownNameError {
    pub name: String,
}
