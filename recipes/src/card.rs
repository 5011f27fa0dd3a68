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
use std::fmt::Display;

use chrono::TimeZone;
use inflector::Inflector;

use crate::{detail, HistoryEntry};

pub const DEFAULT_TITLE: &'static str = "Delicious Creation";
pub const DEFAULT_SUBTITLE: &'static str = "A wonderful recipe made with your ingredients";
pub const MAX_PREVIEW_TAGS: usize = 4;
pub const PREVIEW_CHARS: usize = 140;
pub const WORDS_PER_MINUTE: usize = 200;

const DATE_FORMAT: &'static str = "%B %-d, %Y";
const TIME_FORMAT: &'static str = "%I:%M %p";

const PROTEIN_KEYWORDS: [&'static str; 4] = ["chicken", "beef", "fish", "pork"];
const CARB_KEYWORDS: [&'static str; 4] = ["pasta", "rice", "bread", "potato"];
const DESSERT_KEYWORDS: [&'static str; 4] = ["chocolate", "sugar", "honey", "fruit"];

/// Coarse dish category guessed from the ingredients.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    Protein,
    Carbs,
    Dessert,
    Vegetable,
}

impl Category {
    /// Keyword groups are checked in priority order so "chicken, rice" is a
    /// protein dish.
    pub fn classify(ingredients: &str) -> Self {
        let ingredients = ingredients.to_lowercase();
        let has_any = |keywords: &[&str]| keywords.iter().any(|k| ingredients.contains(k));
        if has_any(&PROTEIN_KEYWORDS) {
            Self::Protein
        } else if has_any(&CARB_KEYWORDS) {
            Self::Carbs
        } else if has_any(&DESSERT_KEYWORDS) {
            Self::Dessert
        } else {
            Self::Vegetable
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Protein => "protein",
            Self::Carbs => "carbs",
            Self::Dessert => "dessert",
            Self::Vegetable => "vegetable",
        }
    }

    pub fn label(&self) -> String {
        self.as_str().to_title_case()
    }
}

pub(crate) fn nth_line_or(recipe: &str, n: usize, fallback: &str) -> String {
    match recipe.lines().nth(n).map(str::trim) {
        Some(line) if !line.is_empty() => line.to_owned(),
        _ => fallback.to_owned(),
    }
}

pub fn title(recipe: &str) -> String {
    nth_line_or(recipe, 0, DEFAULT_TITLE)
}

pub fn subtitle(recipe: &str) -> String {
    nth_line_or(recipe, 1, DEFAULT_SUBTITLE)
}

/// The first few ingredients for the card preview. The full list stays on
/// the entry.
pub fn ingredient_tags(ingredients: &str) -> Vec<String> {
    detail::ingredient_lines(ingredients)
        .into_iter()
        .take(MAX_PREVIEW_TAGS)
        .collect()
}

pub fn word_count(recipe: &str) -> usize {
    recipe.split_whitespace().count()
}

pub fn step_count(recipe: &str) -> usize {
    detail::format_recipe_body(recipe)
        .iter()
        .filter(|b| b.is_step())
        .count()
}

pub fn reading_minutes(words: usize) -> usize {
    std::cmp::max(1, (words + WORDS_PER_MINUTE - 1) / WORDS_PER_MINUTE)
}

/// Body text after the title and subtitle, flattened to one line and cut to
/// `PREVIEW_CHARS`.
pub fn preview(recipe: &str) -> String {
    let flat = recipe
        .lines()
        .skip(2)
        .map(|l| l.trim().replace("**", ""))
        .filter(|l| !l.is_empty())
        .collect::<Vec<String>>()
        .join(" ");
    if flat.chars().count() <= PREVIEW_CHARS {
        return flat;
    }
    let mut cut: String = flat.chars().take(PREVIEW_CHARS).collect();
    cut.truncate(cut.trim_end().len());
    cut.push('…');
    cut
}

/// Everything a history card shows for one entry.
#[derive(Debug, Clone, PartialEq)]
pub struct RecipeCard {
    pub id: usize,
    pub title: String,
    pub subtitle: String,
    pub category: Category,
    pub tags: Vec<String>,
    pub date: String,
    pub time: String,
    pub word_count: usize,
    pub step_count: usize,
    pub reading_minutes: usize,
    pub preview: String,
}

impl RecipeCard {
    /// Build the card with dates rendered in `tz`. Values the backend already
    /// formatted are used as is.
    pub fn new<Tz>(entry: &HistoryEntry, tz: &Tz) -> Self
    where
        Tz: TimeZone,
        Tz::Offset: Display,
    {
        let local = entry.created_at.with_timezone(tz);
        let display = &entry.display;
        let words = display
            .word_count
            .unwrap_or_else(|| word_count(&entry.recipe));
        Self {
            id: entry.id,
            title: title(&entry.recipe),
            subtitle: subtitle(&entry.recipe),
            category: Category::classify(&entry.ingredients),
            tags: ingredient_tags(&entry.ingredients),
            date: display
                .formatted_date
                .clone()
                .unwrap_or_else(|| local.format(DATE_FORMAT).to_string()),
            time: display
                .formatted_time
                .clone()
                .unwrap_or_else(|| local.format(TIME_FORMAT).to_string()),
            word_count: words,
            step_count: display
                .step_count
                .unwrap_or_else(|| step_count(&entry.recipe)),
            reading_minutes: display
                .reading_time
                .unwrap_or_else(|| reading_minutes(words)),
            preview: display
                .preview
                .clone()
                .unwrap_or_else(|| preview(&entry.recipe)),
        }
    }
}
