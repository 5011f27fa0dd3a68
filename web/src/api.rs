// Copyright 2022 Jeremy Wall (Jeremy@marzhilsltudios.com)
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
use std::rc::Rc;

use async_trait::async_trait;
use gloo_net::http::{Request, Response};
use serde::de::DeserializeOwned;
use serde_json::from_str;
use tracing::{debug, error, instrument, warn};

use client_api::*;
use recipes::HistoryEntry;

use crate::js_lib;

#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    /// No token, or the backend refused the one we sent.
    Unauthenticated,
    Transport(String),
    Status(u16),
    Malformed(String),
    Rejected(String),
}

impl std::fmt::Display for Error {
    fn fmt(&self, w: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Unauthenticated => write!(w, "Please log in to continue"),
            Self::Transport(msg) => write!(w, "Network error: {}", msg),
            Self::Status(code) => write!(w, "Server responded with status {}", code),
            Self::Malformed(msg) => write!(w, "Unreadable response: {}", msg),
            Self::Rejected(msg) => write!(w, "{}", msg),
        }
    }
}

impl std::error::Error for Error {}

impl From<gloo_net::Error> for Error {
    fn from(item: gloo_net::Error) -> Self {
        match item {
            gloo_net::Error::SerdeError(e) => Error::Malformed(e.to_string()),
            gloo_net::Error::JsError(e) => Error::Transport(e.to_string()),
            gloo_net::Error::GlooError(msg) => Error::Transport(msg),
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(item: serde_json::Error) -> Self {
        Error::Malformed(item.to_string())
    }
}

impl From<ResponseError> for Error {
    fn from(item: ResponseError) -> Self {
        match item {
            ResponseError::Rejected(msg) => Error::Rejected(msg),
            ResponseError::MissingField(_) => Error::Malformed(item.to_string()),
        }
    }
}

/// Where the bearer token for the backend comes from.
#[async_trait(?Send)]
pub trait TokenSource {
    async fn current_token(&self) -> Option<String>;
}

/// Reads the token the identity provider leaves in local storage.
#[derive(Debug, Clone)]
pub struct StorageTokenSource {
    key: String,
}

impl StorageTokenSource {
    pub fn new<S: Into<String>>(key: S) -> Self {
        Self { key: key.into() }
    }
}

#[async_trait(?Send)]
impl TokenSource for StorageTokenSource {
    async fn current_token(&self) -> Option<String> {
        let storage = js_lib::get_storage()?;
        match storage.get_item(&self.key) {
            Ok(Some(token)) if !token.trim().is_empty() => Some(token),
            Ok(_) => None,
            Err(err) => {
                warn!(?err, key = %self.key, "Unable to read token from storage");
                None
            }
        }
    }
}

#[derive(Clone)]
pub struct HttpStore {
    root: String,
    tokens: Rc<dyn TokenSource>,
}

impl std::fmt::Debug for HttpStore {
    fn fmt(&self, w: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        w.debug_struct("HttpStore").field("root", &self.root).finish()
    }
}

fn bearer(token: &str) -> String {
    format!("Bearer {}", token)
}

async fn read_body<T: DeserializeOwned>(resp: Response) -> Result<T, Error> {
    let text = resp.text().await?;
    Ok(from_str::<T>(&text)?)
}

impl HttpStore {
    pub fn new<S: Into<String>>(root: S, tokens: Rc<dyn TokenSource>) -> Self {
        Self {
            root: root.into(),
            tokens,
        }
    }

    fn path(&self, endpoint: &str) -> String {
        let mut path = self.root.clone();
        path.push('/');
        path.push_str(endpoint);
        path
    }

    async fn token(&self) -> Result<String, Error> {
        self.tokens.current_token().await.ok_or_else(|| {
            debug!("No token available");
            Error::Unauthenticated
        })
    }

    #[instrument(skip(self))]
    pub async fn get_history(&self) -> Result<Vec<HistoryEntry>, Error> {
        let token = self.token().await?;
        let path = self.path("history");
        debug!(%path, "Fetching history");
        let resp = Request::get(&path)
            .header("Authorization", &bearer(&token))
            .send()
            .await?;
        match resp.status() {
            401 | 403 => return Err(Error::Unauthenticated),
            status if !resp.ok() => {
                error!(status, "History request failed");
                return Err(Error::Status(status));
            }
            _ => (),
        }
        Ok(read_body::<HistoryResponse>(resp).await?.into_entries()?)
    }

    #[instrument(skip(self))]
    pub async fn generate_recipe(&self, ingredients: String) -> Result<GeneratedRecipe, Error> {
        let token = self.token().await?;
        let path = self.path("generate_recipe");
        let resp = Request::post(&path)
            .header("Authorization", &bearer(&token))
            .json(&GenerateRequest::new(ingredients))?
            .send()
            .await?;
        let status = resp.status();
        match status {
            401 | 403 => return Err(Error::Unauthenticated),
            // Client errors still carry an `error` message worth showing.
            400..=499 => (),
            _ if !resp.ok() => {
                error!(status, "Generate request failed");
                return Err(Error::Status(status));
            }
            _ => (),
        }
        match read_body::<GenerateResponse>(resp).await {
            Ok(body) => Ok(body.into_result()?),
            Err(_) if !(200..300).contains(&status) => Err(Error::Status(status)),
            Err(err) => Err(err),
        }
    }
}
