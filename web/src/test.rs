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
use std::cell::{Cell, RefCell};
use std::rc::Rc;

use async_trait::async_trait;
use chrono::Utc;
use recipes::HistoryEntry;
use sycamore::prelude::*;
use tokio::task::{yield_now, LocalSet};

use crate::api::{HttpStore, TokenSource};
use crate::app_state::{get_state_handler, AppState, GenerateStatus, LoadStatus, Message};
use crate::components::{CompactHistory, HistoryList};
use crate::config::AppConfig;

/// A visitor nobody has logged in as.
struct NoToken;

#[async_trait(?Send)]
impl TokenSource for NoToken {
    async fn current_token(&self) -> Option<String> {
        None
    }
}

fn anonymous_store() -> HttpStore {
    HttpStore::new("/api", Rc::new(NoToken))
}

fn state_with(load: LoadStatus, entries: Vec<HistoryEntry>) -> AppState {
    let mut state = AppState::new();
    state.history.replace_entries(entries);
    state.load = load;
    state
}

fn fried_rice() -> Vec<HistoryEntry> {
    vec![HistoryEntry::new(
        "egg, rice",
        "Fried Rice\n1. Stir fry everything",
        Utc::now(),
    )]
}

async fn settle<F: Fn() -> bool>(done: F) {
    for _ in 0..20 {
        if done() {
            return;
        }
        yield_now().await;
    }
}

#[tokio::test]
async fn test_retry_outlives_the_error_panel_it_replaces() {
    LocalSet::new()
        .run_until(async {
            let observed = Rc::new(RefCell::new(LoadStatus::Idle));
            let panel_disposed = Rc::new(Cell::new(false));
            let disposer = create_scope({
                let observed = observed.clone();
                let panel_disposed = panel_disposed.clone();
                move |cx| {
                    let sh = get_state_handler(
                        cx,
                        state_with(LoadStatus::Failed("offline".to_owned()), Vec::new()),
                        anonymous_store(),
                        Rc::new(AppConfig::default()),
                    );
                    let load = sh.get_selector(cx, |state| state.get().load.clone());
                    create_effect(cx, move || {
                        *observed.borrow_mut() = load.get().as_ref().clone();
                    });
                    // The error panel only exists while the load has failed.
                    create_effect_scoped(cx, move |panel| {
                        if let LoadStatus::Failed(_) = load.get().as_ref() {
                            let panel_disposed = panel_disposed.clone();
                            on_cleanup(panel, move || panel_disposed.set(true));
                        }
                    });
                    // Retry dispatches on the list scope, not the panel's.
                    sh.dispatch(cx, Message::LoadHistory);
                }
            });
            assert!(panel_disposed.get());
            settle(|| *observed.borrow() == LoadStatus::Unauthenticated).await;
            assert_eq!(*observed.borrow(), LoadStatus::Unauthenticated);
            unsafe { disposer.dispose() };
        })
        .await;
}

#[tokio::test]
async fn test_generate_without_login_reports_unauthenticated() {
    LocalSet::new()
        .run_until(async {
            let observed = Rc::new(RefCell::new(GenerateStatus::Idle));
            let disposer = create_scope({
                let observed = observed.clone();
                move |cx| {
                    let sh = get_state_handler(
                        cx,
                        state_with(LoadStatus::Loaded, Vec::new()),
                        anonymous_store(),
                        Rc::new(AppConfig::default()),
                    );
                    let generation = sh.get_selector(cx, |state| state.get().generation.clone());
                    create_effect(cx, move || {
                        *observed.borrow_mut() = generation.get().as_ref().clone();
                    });
                    sh.dispatch(cx, Message::GenerateRecipe("egg, rice".to_owned()));
                }
            });
            assert_eq!(*observed.borrow(), GenerateStatus::Working);
            settle(|| *observed.borrow() == GenerateStatus::Unauthenticated).await;
            assert_eq!(*observed.borrow(), GenerateStatus::Unauthenticated);
            unsafe { disposer.dispose() };
        })
        .await;
}

fn render_compact_history(load: LoadStatus, entries: Vec<HistoryEntry>) -> String {
    sycamore::render_to_string(move |cx| {
        let sh = get_state_handler(
            cx,
            state_with(load, entries),
            anonymous_store(),
            Rc::new(AppConfig::default()),
        );
        view! {cx, CompactHistory(sh=sh) }
    })
}

fn render_history_list(load: LoadStatus, entries: Vec<HistoryEntry>) -> String {
    sycamore::render_to_string(move |cx| {
        let config = Rc::new(AppConfig::default());
        AppConfig::provide_context(cx, config.clone());
        let sh = get_state_handler(cx, state_with(load, entries), anonymous_store(), config);
        view! {cx, HistoryList(sh=sh) }
    })
}

#[test]
fn test_compact_history_asks_for_login() {
    let html = render_compact_history(LoadStatus::Unauthenticated, Vec::new());
    assert!(html.contains("Please login first."));
    assert!(!html.contains("No history yet."));
}

#[test]
fn test_compact_history_while_loading() {
    let html = render_compact_history(LoadStatus::Loading, fried_rice());
    assert!(html.contains("Loading history..."));
    assert!(!html.contains("egg, rice"));
    assert!(!html.contains("No history yet."));
}

#[test]
fn test_compact_history_failure_offers_retry() {
    let html = render_compact_history(LoadStatus::Failed("offline".to_owned()), Vec::new());
    assert!(html.contains("offline"));
    assert!(html.contains("Try Again"));
    assert!(!html.contains("No history yet."));
}

#[test]
fn test_compact_history_loaded() {
    let html = render_compact_history(LoadStatus::Loaded, Vec::new());
    assert!(html.contains("No history yet."));

    let html = render_compact_history(LoadStatus::Loaded, fried_rice());
    assert!(html.contains("egg, rice"));
    assert!(!html.contains("No history yet."));
}

#[test]
fn test_history_list_cards_only_when_loaded() {
    let html = render_history_list(LoadStatus::Loading, fried_rice());
    assert!(html.contains("Loading your recipe history..."));
    assert!(!html.contains("recipe-card"));

    let html = render_history_list(LoadStatus::Loaded, fried_rice());
    assert!(html.contains("recipe-card"));
    assert!(!html.contains("Loading your recipe history..."));
}

#[test]
fn test_history_list_failure_offers_retry() {
    let html = render_history_list(LoadStatus::Failed("offline".to_owned()), Vec::new());
    assert!(html.contains("Error loading history"));
    assert!(html.contains("Try Again"));
}
