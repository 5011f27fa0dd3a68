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
use chrono::Utc;
use recipes::{apply_pipeline, RecipeCard, SortMode, TimeFilter};
use sycamore::prelude::*;
use tracing::debug;

use crate::app_state::{viewer_offset, LoadStatus, Message, StateHandler};

#[derive(Prop)]
pub struct CompactHistoryProps<'ctx> {
    sh: StateHandler<'ctx>,
}

/// Newest first list of everything generated so far.
#[component]
pub fn CompactHistory<'ctx, G: Html>(cx: Scope<'ctx>, props: CompactHistoryProps<'ctx>) -> View<G> {
    let CompactHistoryProps { sh } = props;
    let load = sh.get_selector(cx, |state| state.get().load.clone());
    let rows = sh.get_selector(cx, |state| {
        let state = state.get();
        if state.load != LoadStatus::Loaded {
            return Vec::new();
        }
        let offset = viewer_offset();
        apply_pipeline(
            state.history.entries(),
            "",
            TimeFilter::All,
            SortMode::Newest,
            Utc::now(),
        )
        .into_iter()
        .map(|entry| {
            let card = RecipeCard::new(entry, &offset);
            (
                format!("{} {}", card.date, card.time),
                entry.ingredients.clone(),
                entry.recipe.clone(),
            )
        })
        .collect::<Vec<(String, String, String)>>()
    });
    let history_cx = cx;

    view! {cx,
        section(id="history", class="compact-history") {
            h3 { "Your Recipe History" }
            (match load.get().as_ref().clone() {
                LoadStatus::Idle | LoadStatus::Loading => view! {cx,
                    p(class="loading", aria-busy="true") { "Loading history..." }
                },
                LoadStatus::Unauthenticated => view! {cx,
                    p(class="login-prompt") { "Please login first." }
                },
                LoadStatus::Failed(msg) => view! {cx,
                    div(class="error-panel") {
                        p(class="error") { "Error loading history: " (msg) }
                        button(class="outline", on:click=move |_| {
                            debug!("Retrying history load");
                            sh.dispatch(history_cx, Message::LoadHistory);
                        }) { "Try Again" }
                    }
                },
                LoadStatus::Loaded => if rows.get().is_empty() {
                    view! {cx, p { "No history yet." } }
                } else {
                    View::empty()
                },
            })
            Indexed(
                iterable=rows,
                view=|cx, (when, ingredients, recipe)| view! {cx,
                    div(class="history-item") {
                        p(class="history-date") { (when) }
                        p { strong { "Ingredients: " } (ingredients) }
                        pre { (recipe) }
                    }
                },
            )
        }
    }
}
