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
use chrono::{DateTime, Datelike, TimeZone};

use crate::HistoryEntry;

/// Headline numbers shown above the history list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct HistorySummary {
    pub total: usize,
    pub this_month: usize,
    /// Half a kilogram of food saved per recipe, rounded half up.
    pub food_saved_kg: usize,
}

impl HistorySummary {
    /// `now` decides both the current month and the zone the entries are
    /// read in.
    pub fn compute<Tz: TimeZone>(entries: &[HistoryEntry], now: &DateTime<Tz>) -> Self {
        let tz = now.timezone();
        let this_month = entries
            .iter()
            .map(|e| e.created_at.with_timezone(&tz))
            .filter(|created| created.month() == now.month() && created.year() == now.year())
            .count();
        Self {
            total: entries.len(),
            this_month,
            food_saved_kg: (entries.len() + 1) / 2,
        }
    }
}
