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
use recipes::{SortMode, TimeFilter};
use sycamore::{futures::spawn_local_scoped, prelude::*};
use tracing::{debug, instrument};

use crate::app_state::{Message, StateHandler};
use crate::js_lib;

const SEARCH_DEBOUNCE_MS: i32 = 300;

#[derive(Prop)]
pub struct HistoryControlsProps<'ctx> {
    sh: StateHandler<'ctx>,
}

#[instrument(skip_all)]
#[component]
pub fn HistoryControls<'ctx, G: Html>(
    cx: Scope<'ctx>,
    props: HistoryControlsProps<'ctx>,
) -> View<G> {
    let HistoryControlsProps { sh } = props;
    let current_search = sh.get_selector(cx, |state| state.get().history.search().to_owned());
    let current_filter = sh.get_selector(cx, |state| state.get().history.filter());
    let current_sort = sh.get_selector(cx, |state| state.get().history.sort());

    let search_text = create_signal(cx, current_search.get_untracked().as_ref().clone());
    let keystrokes = create_signal(cx, 0usize);
    // Follow the state when something else clears the search.
    create_effect(cx, move || {
        let search = current_search.get();
        if search.is_empty() && !search_text.get_untracked().is_empty() {
            search_text.set(String::new());
        }
    });

    let sort_value = create_signal(cx, current_sort.get_untracked().as_str().to_owned());
    create_effect(cx, move || {
        let sort = current_sort.get();
        if sort_value.get_untracked().as_str() != sort.as_str() {
            sort_value.set(sort.as_str().to_owned());
        }
    });

    let filters = create_signal(cx, TimeFilter::all());
    let sorts = create_signal(cx, SortMode::all());
    let searching = create_memo(cx, move || !search_text.get().is_empty());
    let controls_cx = cx;

    view! {cx,
        section(class="history-controls") {
            div(class="search-box row-flex") {
                input(
                    type="search",
                    id="search-input",
                    placeholder="Search by ingredients or recipe...",
                    bind:value=search_text,
                    on:input=move |_| {
                        let stroke = *keystrokes.get_untracked() + 1;
                        keystrokes.set(stroke);
                        spawn_local_scoped(cx, async move {
                            js_lib::sleep(SEARCH_DEBOUNCE_MS).await;
                            if *keystrokes.get_untracked() != stroke {
                                return;
                            }
                            let search = search_text.get_untracked().as_ref().clone();
                            debug!(%search, "Applying search");
                            sh.dispatch(cx, Message::SetSearch(search));
                        });
                    },
                )
                (if *searching.get() {
                    view! {cx,
                        button(class="outline clear-search", title="Clear search", on:click=move |_| {
                            search_text.set(String::new());
                            sh.dispatch(controls_cx, Message::ClearSearch);
                        }) { "×" }
                    }
                } else {
                    View::empty()
                })
            }
            div(class="filter-buttons row-flex") {
                Indexed(
                    iterable=filters,
                    view=move |cx, filter| {
                        let class = create_memo(cx, move || {
                            if *current_filter.get() == filter {
                                "filter-btn active"
                            } else {
                                "filter-btn outline"
                            }
                        });
                        view! {cx,
                            button(class=class.get(), data-filter=filter.as_str(), on:click=move |_| {
                                sh.dispatch(cx, Message::SetFilter(filter));
                            }) { (filter.label()) }
                        }
                    },
                )
            }
            div(class="sort-controls row-flex") {
                label(for="sort-select") { "Sort by" }
                select(id="sort-select", bind:value=sort_value, on:change=move |_| {
                    match sort_value.get_untracked().parse::<SortMode>() {
                        Ok(sort) => sh.dispatch(cx, Message::SetSort(sort)),
                        Err(err) => debug!(%err, "Ignoring unknown sort"),
                    }
                }) {
                    Indexed(
                        iterable=sorts,
                        view=|cx, sort| view! {cx,
                            option(value=sort.as_str()) { (sort.label()) }
                        },
                    )
                }
                button(class="outline", on:click=move |_| {
                    sh.dispatch(cx, Message::ExportHistory);
                }) { "Export" }
            }
        }
    }
}
