// Copyright 2023 Jeremy Wall
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
pub mod actions;
pub mod card;
pub mod detail;
pub mod summary;
pub mod view;

use chrono::{DateTime, NaiveDateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};

pub use actions::*;
pub use card::*;
pub use detail::*;
pub use summary::*;
pub use view::*;

/// Display values the backend may precompute for an entry. Anything missing
/// is derived locally when a card is built.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct DisplayFields {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub formatted_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub formatted_time: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub word_count: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub step_count: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reading_time: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub preview: Option<String>,
}

/// One past recipe generation: the ingredients that were asked for and the
/// recipe text that came back.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct HistoryEntry {
    /// Position in the currently loaded list. Only meaningful until the list
    /// is replaced.
    #[serde(skip)]
    pub id: usize,
    pub ingredients: String,
    pub recipe: String,
    #[serde(with = "timestamp")]
    pub created_at: DateTime<Utc>,
    #[serde(flatten)]
    pub display: DisplayFields,
}

impl HistoryEntry {
    pub fn new<IS: Into<String>, RS: Into<String>>(
        ingredients: IS,
        recipe: RS,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id: 0,
            ingredients: ingredients.into(),
            recipe: recipe.into(),
            created_at,
            display: DisplayFields::default(),
        }
    }

    pub fn with_display(mut self, display: DisplayFields) -> Self {
        self.display = display;
        self
    }

    /// An entry needs both an ingredients list and a recipe body to be shown.
    pub fn is_valid(&self) -> bool {
        !self.ingredients.trim().is_empty() && !self.recipe.trim().is_empty()
    }

    pub fn recipe_lines(&self) -> std::str::Lines<'_> {
        self.recipe.lines()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct TimestampError(String);

impl std::fmt::Display for TimestampError {
    fn fmt(&self, w: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(w, "Unparseable timestamp: {}", self.0)
    }
}

impl std::error::Error for TimestampError {}

const NAIVE_FORMATS: [&'static str; 2] = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"];

/// Parse a creation timestamp. RFC 3339 values keep their offset. Values
/// without an offset, which is what the backend emits, are taken as UTC.
pub fn parse_timestamp(raw: &str) -> Result<DateTime<Utc>, TimestampError> {
    let raw = raw.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Ok(dt.with_timezone(&Utc));
    }
    for fmt in NAIVE_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(raw, fmt) {
            return Ok(Utc.from_utc_datetime(&naive));
        }
    }
    Err(TimestampError(raw.to_owned()))
}

mod timestamp {
    use chrono::{DateTime, SecondsFormat, Utc};
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(dt: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&dt.to_rfc3339_opts(SecondsFormat::AutoSi, true))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        super::parse_timestamp(&raw).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod test;
