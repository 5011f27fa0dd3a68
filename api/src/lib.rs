// Copyright 2023 Jeremy Wall (Jeremy@marzhilsltudios.com)
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
use serde::{Deserialize, Serialize};

use recipes::HistoryEntry;

/// Why a well formed response still can not be used.
#[derive(Debug, Clone, PartialEq)]
pub enum ResponseError {
    /// The backend said no, with its own message.
    Rejected(String),
    /// A field the client needs is not there.
    MissingField(&'static str),
}

impl std::fmt::Display for ResponseError {
    fn fmt(&self, w: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Rejected(msg) => write!(w, "{}", msg),
            Self::MissingField(field) => write!(w, "Response is missing the {} field", field),
        }
    }
}

impl std::error::Error for ResponseError {}

pub const UNSUCCESSFUL: &'static str = "The server could not complete the request";

/// Body of `GET /history`.
///
/// The canonical shape is `{"history": [...]}`. A `success` flag is honored
/// when the backend sends one.
#[derive(Serialize, Deserialize, Debug, Default)]
pub struct HistoryResponse {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub success: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub history: Option<Vec<HistoryEntry>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl HistoryResponse {
    pub fn success(history: Vec<HistoryEntry>) -> Self {
        Self {
            history: Some(history),
            ..Self::default()
        }
    }

    pub fn into_entries(self) -> Result<Vec<HistoryEntry>, ResponseError> {
        if self.success == Some(false) {
            return Err(ResponseError::Rejected(
                self.error.unwrap_or_else(|| UNSUCCESSFUL.to_owned()),
            ));
        }
        self.history.ok_or(ResponseError::MissingField("history"))
    }
}

/// Body of `POST /generate_recipe`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct GenerateRequest {
    pub ingredients: String,
}

impl GenerateRequest {
    pub fn new<S: Into<String>>(ingredients: S) -> Self {
        Self {
            ingredients: ingredients.into(),
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Default)]
pub struct GenerateResponse {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recipe: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// A freshly generated recipe with the optional note the backend attaches.
#[derive(Debug, Clone, PartialEq)]
pub struct GeneratedRecipe {
    pub recipe: String,
    pub note: Option<String>,
}

impl GenerateResponse {
    pub fn into_result(self) -> Result<GeneratedRecipe, ResponseError> {
        if let Some(err) = self.error {
            return Err(ResponseError::Rejected(err));
        }
        match self.recipe {
            Some(recipe) => Ok(GeneratedRecipe {
                recipe,
                note: self.note,
            }),
            None => Err(ResponseError::MissingField("recipe")),
        }
    }
}
