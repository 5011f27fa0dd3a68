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
use recipes::{EmptyState, Listing, RecipeCard};
use sycamore::prelude::*;
use tracing::{debug, instrument};

use crate::app_state::{viewer_offset, LoadStatus, Message, StateHandler};
use crate::components::RecipeCardView;
use crate::config::AppConfig;

#[derive(Prop)]
pub struct HistoryListProps<'ctx> {
    sh: StateHandler<'ctx>,
}

#[instrument(skip_all)]
#[component]
pub fn HistoryList<'ctx, G: Html>(cx: Scope<'ctx>, props: HistoryListProps<'ctx>) -> View<G> {
    let HistoryListProps { sh } = props;
    let dashboard = AppConfig::get_from_context(cx).dashboard_path.clone();
    let load = sh.get_selector(cx, |state| state.get().load.clone());
    let listing = sh.get_selector(cx, |state| {
        state
            .get()
            .history
            .listing(Utc::now(), &viewer_offset())
    });
    // The grid lives outside the status branches so each card keeps its own
    // scope for as long as it is listed.
    let cards = create_memo(cx, move || match (load.get().as_ref(), listing.get().as_ref()) {
        (LoadStatus::Loaded, Listing::Cards { cards, .. }) => cards.clone(),
        _ => Vec::<RecipeCard>::new(),
    });
    let list_cx = cx;

    view! {cx,
        section(id="history-list") {
            (match load.get().as_ref().clone() {
                LoadStatus::Idle | LoadStatus::Loading => view! {cx,
                    div(class="loading", aria-busy="true") { "Loading your recipe history..." }
                },
                LoadStatus::Unauthenticated => {
                    let dashboard = dashboard.clone();
                    view! {cx,
                        div(class="login-prompt") {
                            h3 { "Please log in" }
                            p { "Log in to see the recipes you have created." }
                            a(role="button", href=dashboard) { "Go to the kitchen" }
                        }
                    }
                }
                LoadStatus::Failed(msg) => {
                    let dashboard = dashboard.clone();
                    view! {cx,
                        div(class="error-panel") {
                            h3 { "Error loading history" }
                            p { (msg) }
                            button(on:click=move |_| {
                                debug!("Retrying history load");
                                sh.dispatch(list_cx, Message::LoadHistory);
                            }) { "Try Again" }
                            " "
                            a(role="button", class="outline", href=dashboard) { "Back to Dashboard" }
                        }
                    }
                }
                LoadStatus::Loaded => match listing.get().as_ref().clone() {
                    Listing::Empty(EmptyState::NoHistory) => {
                        let dashboard = dashboard.clone();
                        view! {cx,
                            div(class="empty-state") {
                                i(class="fas fa-utensils")
                                h3 { "No recipes yet" }
                                p { "Start creating delicious recipes to see them here!" }
                                a(role="button", href=dashboard) { "Create Your First Recipe" }
                            }
                        }
                    }
                    Listing::Empty(EmptyState::NoMatches) => view! {cx,
                        div(class="empty-state") {
                            i(class="fas fa-search")
                            h3 { "No recipes found" }
                            p { "Try adjusting your search or filters." }
                            button(on:click=move |_| {
                                sh.dispatch(list_cx, Message::ClearFilters);
                            }) { "Clear Filters" }
                        }
                    },
                    Listing::Cards { summary, .. } => view! {cx,
                        div(class="results-header") {
                            span(class="results-count") { (summary) }
                        }
                    },
                },
            })
            div(class="history-grid") {
                Indexed(
                    iterable=cards,
                    view=move |cx, card| view! {cx,
                        RecipeCardView(sh=sh, card=card)
                    },
                )
            }
        }
    }
}
