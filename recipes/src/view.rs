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
use std::cmp::Ordering;
use std::fmt::Display;
use std::str::FromStr;

use chrono::{DateTime, Duration, TimeZone, Utc};
use inflector::Inflector;

use crate::{card::RecipeCard, HistoryEntry};

pub const RECENT_WINDOW_DAYS: i64 = 7;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TimeFilter {
    #[default]
    All,
    Recent,
    // NOTE(jwall): Favorites are not persisted anywhere yet so this filter
    // keeps everything.
    Favorite,
}

impl TimeFilter {
    pub fn all() -> Vec<Self> {
        vec![Self::All, Self::Recent, Self::Favorite]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Recent => "recent",
            Self::Favorite => "favorite",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::All => "All Recipes",
            Self::Recent => "This Week",
            Self::Favorite => "Favorites",
        }
    }

    fn keeps(&self, entry: &HistoryEntry, now: DateTime<Utc>) -> bool {
        match self {
            Self::All | Self::Favorite => true,
            Self::Recent => entry.created_at > now - Duration::days(RECENT_WINDOW_DAYS),
        }
    }
}

impl FromStr for TimeFilter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "all" => Ok(Self::All),
            "recent" => Ok(Self::Recent),
            "favorite" => Ok(Self::Favorite),
            _ => Err(format!("Unknown filter: {}", s)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortMode {
    #[default]
    Newest,
    Oldest,
    Ingredients,
}

impl SortMode {
    pub fn all() -> Vec<Self> {
        vec![Self::Newest, Self::Oldest, Self::Ingredients]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Newest => "newest",
            Self::Oldest => "oldest",
            Self::Ingredients => "ingredients",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Newest => "Newest First",
            Self::Oldest => "Oldest First",
            Self::Ingredients => "By Ingredients",
        }
    }

    fn compare(&self, left: &HistoryEntry, right: &HistoryEntry) -> Ordering {
        match self {
            Self::Newest => right.created_at.cmp(&left.created_at),
            Self::Oldest => left.created_at.cmp(&right.created_at),
            Self::Ingredients => compare_ingredients(&left.ingredients, &right.ingredients),
        }
    }
}

impl FromStr for SortMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "newest" => Ok(Self::Newest),
            "oldest" => Ok(Self::Oldest),
            "ingredients" => Ok(Self::Ingredients),
            _ => Err(format!("Unknown sort: {}", s)),
        }
    }
}

// Case is ignored first so that "apple" and "Banana" order the way a reader
// expects. Raw comparison only breaks ties between differently cased strings.
fn compare_ingredients(left: &str, right: &str) -> Ordering {
    left.to_lowercase()
        .cmp(&right.to_lowercase())
        .then_with(|| left.cmp(right))
}

pub fn matches_search(entry: &HistoryEntry, needle: &str) -> bool {
    if needle.is_empty() {
        return true;
    }
    let needle = needle.to_lowercase();
    entry.ingredients.to_lowercase().contains(&needle)
        || entry.recipe.to_lowercase().contains(&needle)
}

/// Search, then filter, then sort. The input slice is never reordered.
pub fn apply_pipeline<'a>(
    entries: &'a [HistoryEntry],
    search: &str,
    filter: TimeFilter,
    sort: SortMode,
    now: DateTime<Utc>,
) -> Vec<&'a HistoryEntry> {
    let mut visible: Vec<&HistoryEntry> = entries
        .iter()
        .filter(|e| matches_search(e, search))
        .filter(|e| filter.keeps(e, now))
        .collect();
    visible.sort_by(|l, r| sort.compare(l, r));
    visible
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmptyState {
    /// Nothing has ever been generated.
    NoHistory,
    /// There is history but the current search and filter hide all of it.
    NoMatches,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Listing {
    Empty(EmptyState),
    Cards {
        summary: String,
        cards: Vec<RecipeCard>,
    },
}

pub fn results_summary(count: usize) -> String {
    let noun = if count == 1 {
        "recipe".to_owned()
    } else {
        "recipe".to_plural()
    };
    format!("{} {} found", count, noun)
}

/// The history page state: the loaded list plus the search, filter and sort
/// the user has picked.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct HistoryView {
    entries: Vec<HistoryEntry>,
    search: String,
    filter: TimeFilter,
    sort: SortMode,
}

impl HistoryView {
    pub fn new() -> Self {
        Self::default()
    }

    /// Swap in a freshly loaded list. Invalid entries are dropped and the
    /// survivors are numbered in order. Returns how many were dropped.
    pub fn replace_entries(&mut self, mut entries: Vec<HistoryEntry>) -> usize {
        let before = entries.len();
        entries.retain(HistoryEntry::is_valid);
        let dropped = before - entries.len();
        for (idx, entry) in entries.iter_mut().enumerate() {
            entry.id = idx;
        }
        self.entries = entries;
        dropped
    }

    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }

    pub fn entry(&self, id: usize) -> Option<&HistoryEntry> {
        self.entries.get(id)
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn search(&self) -> &str {
        &self.search
    }

    pub fn set_search<S: Into<String>>(&mut self, search: S) {
        self.search = search.into();
    }

    pub fn clear_search(&mut self) {
        self.search.clear();
    }

    pub fn filter(&self) -> TimeFilter {
        self.filter
    }

    pub fn set_filter(&mut self, filter: TimeFilter) {
        self.filter = filter;
    }

    pub fn sort(&self) -> SortMode {
        self.sort
    }

    pub fn set_sort(&mut self, sort: SortMode) {
        self.sort = sort;
    }

    pub fn clear_filters(&mut self) {
        self.search.clear();
        self.filter = TimeFilter::default();
        self.sort = SortMode::default();
    }

    pub fn visible(&self, now: DateTime<Utc>) -> Vec<&HistoryEntry> {
        apply_pipeline(&self.entries, &self.search, self.filter, self.sort, now)
    }

    pub fn listing<Tz>(&self, now: DateTime<Utc>, tz: &Tz) -> Listing
    where
        Tz: TimeZone,
        Tz::Offset: Display,
    {
        let visible = self.visible(now);
        if visible.is_empty() {
            return Listing::Empty(if self.entries.is_empty() {
                EmptyState::NoHistory
            } else {
                EmptyState::NoMatches
            });
        }
        Listing::Cards {
            summary: results_summary(visible.len()),
            cards: visible.into_iter().map(|e| RecipeCard::new(e, tz)).collect(),
        }
    }
}
