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
use recipes::{Block, RecipeDetail};
use sycamore::prelude::*;
use tracing::{debug, error, instrument};
use wasm_bindgen::JsCast;
use web_sys::{Element, Event, HtmlDialogElement};

use crate::app_state::{Message, StateHandler};
use crate::js_lib::get_element_by_id;

const MODAL_ID: &'static str = "recipe-modal";

fn get_modal() -> Option<HtmlDialogElement> {
    match get_element_by_id::<HtmlDialogElement>(MODAL_ID) {
        Ok(modal) => modal,
        Err(_) => {
            error!("{} isn't an html dialog element!", MODAL_ID);
            None
        }
    }
}

// Clicks inside the content land on a child. Only the backdrop targets the
// dialog itself.
fn is_backdrop_click(event: &Event) -> bool {
    event
        .target()
        .and_then(|t| t.dyn_into::<Element>().ok())
        .map_or(false, |el| el.id() == MODAL_ID)
}

fn block_view<G: Html>(cx: Scope, block: Block) -> View<G> {
    match block {
        Block::Heading(text) => view! {cx, h4(class="recipe-heading") { (text) } },
        step @ Block::Step { .. } => {
            let text = step.text();
            view! {cx, p(class="recipe-step") { (text) } }
        }
        Block::Paragraph(text) => view! {cx, p { (text) } },
    }
}

#[derive(Prop)]
pub struct RecipeModalProps<'ctx> {
    sh: StateHandler<'ctx>,
}

#[instrument(skip_all)]
#[component]
pub fn RecipeModal<'ctx, G: Html>(cx: Scope<'ctx>, props: RecipeModalProps<'ctx>) -> View<G> {
    let RecipeModalProps { sh } = props;
    let detail = sh.get_selector(cx, |state| {
        state.get().detail_entry().map(RecipeDetail::new)
    });
    create_effect(cx, move || {
        let open = detail.get().is_some();
        let modal = match get_modal() {
            Some(modal) => modal,
            None => return,
        };
        if open && !modal.open() {
            debug!("Opening recipe detail");
            if let Err(err) = modal.show_modal() {
                error!(?err, "Unable to open recipe detail");
            }
        } else if !open && modal.open() {
            modal.close();
        }
    });

    // The detail branch below is disposed as soon as it closes, so its
    // buttons dispatch on the modal's scope.
    let modal_cx = cx;
    view! {cx,
        dialog(id=MODAL_ID, class="recipe-modal", on:click=move |event: Event| {
            if is_backdrop_click(&event) {
                sh.dispatch(cx, Message::CloseDetail);
            }
        }, on:close=move |_| {
            sh.dispatch(cx, Message::CloseDetail);
        }) {
            (match detail.get().as_ref().clone() {
                None => View::empty(),
                Some(RecipeDetail { id, title, ingredients, blocks }) => {
                    let ingredients = create_signal(cx, ingredients);
                    let body = View::new_fragment(
                        blocks.into_iter().map(|b| block_view(cx, b)).collect(),
                    );
                    view! {cx,
                        article(class="modal-content") {
                            header(class="row-flex") {
                                h2 { (title) }
                                button(class="close outline", title="Close", on:click=move |_| {
                                    sh.dispatch(modal_cx, Message::CloseDetail);
                                }) { "×" }
                            }
                            h3 { "Ingredients" }
                            ul(class="modal-ingredients") {
                                Indexed(
                                    iterable=ingredients,
                                    view=|cx, item| view! {cx, li { (item) } },
                                )
                            }
                            h3 { "Recipe" }
                            div(class="modal-recipe") { (body) }
                            footer(class="row-flex") {
                                button(on:click=move |_| {
                                    sh.dispatch(modal_cx, Message::CopyRecipe(id));
                                    sh.dispatch(modal_cx, Message::CloseDetail);
                                }) { i(class="fas fa-copy") " Copy Recipe" }
                                button(class="outline", on:click=move |_| {
                                    sh.dispatch(modal_cx, Message::Regenerate(id));
                                }) { i(class="fas fa-magic") " Create Variation" }
                            }
                        }
                    }
                }
            })
        }
    }
}
