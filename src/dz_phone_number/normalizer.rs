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

use std::borrow::Cow;

use super::{
    errors::InvalidFormatReason,
    helper_constants::{DASH, FORMATTING_CHAR_BUDGET},
};
use crate::string_util::remove_up_to;

/// Strips surrounding whitespace and a bounded amount of formatting
/// characters (dashes, spaces, parentheses and periods) from a raw number.
///
/// The result is not validated yet. Input that is over-formatted keeps its
/// surplus characters and fails the grammar later on.
pub(super) fn normalize(raw: &str) -> Result<Cow<'_, str>, InvalidFormatReason> {
    let number = raw.trim();
    if number.starts_with(DASH) || number.ends_with(DASH) {
        return Err(InvalidFormatReason::DashAtBoundary);
    }

    let mut number = Cow::Borrowed(number);
    for (ch, limit) in FORMATTING_CHAR_BUDGET {
        number = remove_up_to(number, ch, limit);
    }
    Ok(number)
}
