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
use crate::{card, HistoryEntry};

pub const DETAIL_TITLE: &'static str = "Delicious Recipe";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StepMarker {
    Bullet,
    Numbered(String),
}

/// A formatted line of recipe text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Block {
    Heading(String),
    Step { marker: StepMarker, text: String },
    Paragraph(String),
}

impl Block {
    pub fn is_step(&self) -> bool {
        matches!(self, Self::Step { .. })
    }

    pub fn text(&self) -> String {
        match self {
            Self::Heading(text) | Self::Paragraph(text) => text.clone(),
            Self::Step {
                marker: StepMarker::Bullet,
                text,
            } => text.clone(),
            Self::Step {
                marker: StepMarker::Numbered(n),
                text,
            } => format!("{}. {}", n, text),
        }
    }
}

fn numbered_prefix(line: &str) -> Option<(&str, &str)> {
    let digits = line.len() - line.trim_start_matches(|c: char| c.is_ascii_digit()).len();
    if digits == 0 {
        return None;
    }
    let (number, rest) = line.split_at(digits);
    rest.strip_prefix('.').map(|rest| (number, rest.trim()))
}

pub fn classify_line(line: &str) -> Option<Block> {
    let line = line.trim();
    if line.is_empty() {
        return None;
    }
    if line.starts_with("**") && line.ends_with("**") {
        let heading = line.replace("**", "").trim().to_owned();
        return if heading.is_empty() {
            None
        } else {
            Some(Block::Heading(heading))
        };
    }
    if let Some(rest) = line.strip_prefix('-') {
        let text = rest.trim();
        return if text.is_empty() {
            None
        } else {
            Some(Block::Step {
                marker: StepMarker::Bullet,
                text: text.to_owned(),
            })
        };
    }
    if let Some((number, text)) = numbered_prefix(line) {
        return Some(Block::Step {
            marker: StepMarker::Numbered(number.to_owned()),
            text: text.to_owned(),
        });
    }
    Some(Block::Paragraph(line.to_owned()))
}

pub fn format_recipe_body(recipe: &str) -> Vec<Block> {
    recipe.lines().filter_map(classify_line).collect()
}

/// Comma separated ingredients, trimmed, one per item. Empty items are
/// skipped.
pub fn ingredient_lines(ingredients: &str) -> Vec<String> {
    ingredients
        .split(',')
        .map(str::trim)
        .filter(|i| !i.is_empty())
        .map(str::to_owned)
        .collect()
}

/// The expanded view of a single entry.
#[derive(Debug, Clone, PartialEq)]
pub struct RecipeDetail {
    pub id: usize,
    pub title: String,
    pub ingredients: Vec<String>,
    pub blocks: Vec<Block>,
}

impl RecipeDetail {
    pub fn new(entry: &HistoryEntry) -> Self {
        Self {
            id: entry.id,
            title: card::nth_line_or(&entry.recipe, 0, DETAIL_TITLE),
            ingredients: ingredient_lines(&entry.ingredients),
            blocks: format_recipe_body(&entry.recipe),
        }
    }
}
