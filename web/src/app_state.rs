// Copyright 2022 Jeremy Wall
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
use std::collections::BTreeSet;
use std::rc::Rc;

use chrono::{FixedOffset, Local, Offset};
use client_api::GeneratedRecipe;
use recipes::{
    copy_text, regenerate_href, HistoryEntry, HistorySummary, HistoryView, SharePayload, SortMode,
    TimeFilter,
};
use sycamore::futures::spawn_local_scoped;
use sycamore::prelude::*;
use sycamore_state::{Handler, MessageMapper};
use tracing::{debug, error, info, instrument, warn};

use crate::api::{Error, HttpStore};
use crate::components::toast;
use crate::config::AppConfig;
use crate::js_lib;

const REGENERATE_DELAY_MS: i32 = 1000;

#[derive(Debug, Clone, PartialEq)]
pub enum LoadStatus {
    Idle,
    Loading,
    Loaded,
    Unauthenticated,
    Failed(String),
}

#[derive(Debug, Clone, PartialEq)]
pub enum GenerateStatus {
    Idle,
    Working,
    Done(GeneratedRecipe),
    Failed(String),
    Unauthenticated,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AppState {
    pub history: HistoryView,
    pub load: LoadStatus,
    pub summary: HistorySummary,
    /// Ids into the currently loaded list. Never persisted.
    pub favorites: BTreeSet<usize>,
    pub detail: Option<usize>,
    pub generation: GenerateStatus,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            history: HistoryView::new(),
            load: LoadStatus::Idle,
            summary: HistorySummary::default(),
            favorites: BTreeSet::new(),
            detail: None,
            generation: GenerateStatus::Idle,
        }
    }

    pub fn detail_entry(&self) -> Option<&HistoryEntry> {
        self.detail.and_then(|id| self.history.entry(id))
    }
}

/// The viewer's current UTC offset.
pub fn viewer_offset() -> FixedOffset {
    Local::now().offset().fix()
}

#[derive(Debug)]
pub enum Message {
    LoadHistory,
    SetSearch(String),
    ClearSearch,
    SetFilter(TimeFilter),
    SetSort(SortMode),
    ClearFilters,
    ToggleFavorite(usize),
    ShowDetail(usize),
    CloseDetail,
    CopyRecipe(usize),
    ShareRecipe(usize),
    Regenerate(usize),
    GenerateRecipe(String),
    ExportHistory,
}

pub struct StateMachine {
    store: HttpStore,
    config: Rc<AppConfig>,
}

async fn copy_with_toast<'ctx>(cx: Scope<'ctx>, text: String) {
    match js_lib::copy_to_clipboard(&text).await {
        Ok(_) => toast::message(cx, "Recipe copied to clipboard!", None),
        Err(err) => {
            error!(%err, "Failed to copy recipe");
            toast::error_message(cx, "Failed to copy recipe", None);
        }
    }
}

impl StateMachine {
    #[instrument(skip_all)]
    async fn load_history(store: HttpStore, original: &Signal<AppState>) {
        info!("Synchronizing history");
        let result = store.get_history().await;
        let mut state = original.get().as_ref().clone();
        match result {
            Ok(entries) => {
                let dropped = state.history.replace_entries(entries);
                if dropped > 0 {
                    warn!(dropped, "Skipped history entries without ingredients or recipe");
                }
                state.favorites.clear();
                state.detail = None;
                state.summary = HistorySummary::compute(state.history.entries(), &Local::now());
                state.load = LoadStatus::Loaded;
                debug!(total = state.summary.total, "History loaded");
            }
            Err(Error::Unauthenticated) => {
                info!("No authenticated user");
                state.load = LoadStatus::Unauthenticated;
            }
            Err(err) => {
                error!(?err, "Unable to load history");
                state.load = LoadStatus::Failed(err.to_string());
            }
        }
        original.set(state);
    }

    async fn generate(store: HttpStore, ingredients: String, original: &Signal<AppState>) {
        let result = store.generate_recipe(ingredients).await;
        let mut state = original.get().as_ref().clone();
        let reload = result.is_ok();
        state.generation = match result {
            Ok(generated) => GenerateStatus::Done(generated),
            Err(Error::Unauthenticated) => GenerateStatus::Unauthenticated,
            Err(err) => {
                error!(?err, "Recipe generation failed");
                GenerateStatus::Failed(err.to_string())
            }
        };
        original.set(state);
        if reload {
            Self::load_history(store, original).await;
        }
    }
}

impl MessageMapper<Message, AppState> for StateMachine {
    #[instrument(skip_all, fields(?msg))]
    fn map<'ctx>(&self, cx: Scope<'ctx>, msg: Message, original: &'ctx Signal<AppState>) {
        let mut original_copy = original.get().as_ref().clone();
        match msg {
            Message::LoadHistory => {
                // Spawn first. Setting the state can dispose the scope that
                // dispatched this message.
                let store = self.store.clone();
                spawn_local_scoped(cx, async move {
                    Self::load_history(store, original).await;
                });
                original_copy.load = LoadStatus::Loading;
            }
            Message::SetSearch(search) => {
                original_copy.history.set_search(search);
            }
            Message::ClearSearch => {
                original_copy.history.clear_search();
            }
            Message::SetFilter(filter) => {
                original_copy.history.set_filter(filter);
            }
            Message::SetSort(sort) => {
                original_copy.history.set_sort(sort);
            }
            Message::ClearFilters => {
                original_copy.history.clear_filters();
                toast::message(cx, "Filters cleared", None);
            }
            Message::ToggleFavorite(id) => {
                if !original_copy.favorites.remove(&id) {
                    original_copy.favorites.insert(id);
                }
            }
            Message::ShowDetail(id) => {
                if original_copy.history.entry(id).is_none() {
                    warn!(id, "No history entry to show");
                    return;
                }
                original_copy.detail = Some(id);
            }
            Message::CloseDetail => {
                original_copy.detail = None;
            }
            Message::CopyRecipe(id) => {
                if let Some(entry) = original_copy.history.entry(id) {
                    let text = copy_text(entry);
                    spawn_local_scoped(cx, copy_with_toast(cx, text));
                }
                return;
            }
            Message::ShareRecipe(id) => {
                if let Some(entry) = original_copy.history.entry(id) {
                    let payload = SharePayload::for_entry(entry, &self.config.app_name);
                    let fallback = copy_text(entry);
                    spawn_local_scoped(cx, async move {
                        if js_lib::can_share() {
                            match js_lib::share(&payload.title, &payload.text).await {
                                Ok(_) => return,
                                Err(err) => debug!(%err, "Share did not complete"),
                            }
                        }
                        copy_with_toast(cx, fallback).await;
                    });
                }
                return;
            }
            Message::Regenerate(id) => {
                if let Some(entry) = original_copy.history.entry(id) {
                    let href = regenerate_href(
                        &self.config.dashboard_path,
                        &js_lib::encode_uri_component(&entry.ingredients),
                    );
                    toast::message(cx, "Taking you to the kitchen...", None);
                    spawn_local_scoped(cx, async move {
                        js_lib::sleep(REGENERATE_DELAY_MS).await;
                        if let Err(err) = js_lib::navigate_to_href(&href) {
                            error!(?err, %href, "Unable to navigate");
                        }
                    });
                }
                return;
            }
            Message::GenerateRecipe(ingredients) => {
                let ingredients = ingredients.trim().to_owned();
                if ingredients.is_empty() {
                    toast::error_message(cx, "Please provide ingredients", None);
                    return;
                }
                let store = self.store.clone();
                spawn_local_scoped(cx, async move {
                    Self::generate(store, ingredients, original).await;
                });
                original_copy.generation = GenerateStatus::Working;
            }
            Message::ExportHistory => {
                toast::message(cx, "Export feature coming soon!", None);
                return;
            }
        }
        original.set(original_copy);
    }
}

pub type StateHandler<'ctx> = &'ctx Handler<'ctx, StateMachine, AppState, Message>;

pub fn get_state_handler<'ctx>(
    cx: Scope<'ctx>,
    initial: AppState,
    store: HttpStore,
    config: Rc<AppConfig>,
) -> StateHandler<'ctx> {
    Handler::new(cx, initial, StateMachine { store, config })
}
