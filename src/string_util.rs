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

/// Removes at most `limit` occurrences of `ch`, scanning from the start
/// of the string.
///
/// Returns the given cow untouched if there is nothing to remove, so borrowed
/// input stays borrowed unless it really has to change.
pub fn remove_up_to<'a>(cow: Cow<'a, str>, ch: char, limit: usize) -> Cow<'a, str> {
    if limit == 0 || !cow.contains(ch) {
        return cow;
    }

    let mut removed = 0;
    let mut result = String::with_capacity(cow.len());
    for c in cow.chars() {
        if c == ch && removed < limit {
            removed += 1;
            continue;
        }
        result.push(c);
    }
    Cow::Owned(result)
}
