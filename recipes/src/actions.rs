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
use crate::HistoryEntry;

pub const APP_NAME: &'static str = "Zero Hunger Chef";
pub const INGREDIENTS_PARAM: &'static str = "ingredients";

/// Plain text handed to the clipboard for an entry.
pub fn copy_text(entry: &HistoryEntry) -> String {
    format!(
        "Ingredients: {}\n\nRecipe:\n{}",
        entry.ingredients, entry.recipe
    )
}

#[derive(Debug, Clone, PartialEq)]
pub struct SharePayload {
    pub title: String,
    pub text: String,
}

impl SharePayload {
    pub fn for_entry(entry: &HistoryEntry, app_name: &str) -> Self {
        Self {
            title: format!("My {} Recipe", app_name),
            text: format!(
                "Check out this recipe I made with {}!\n\nIngredients: {}\n\n{}",
                app_name, entry.ingredients, entry.recipe
            ),
        }
    }
}

/// Link to the generation page with the ingredients prefilled. The caller
/// supplies the already percent-encoded ingredients.
pub fn regenerate_href(create_page: &str, encoded_ingredients: &str) -> String {
    format!(
        "{}?{}={}",
        create_page, INGREDIENTS_PARAM, encoded_ingredients
    )
}
