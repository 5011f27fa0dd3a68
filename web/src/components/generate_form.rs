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
use recipes::INGREDIENTS_PARAM;
use sycamore::prelude::*;
use tracing::{debug, instrument};

use crate::app_state::{GenerateStatus, Message, StateHandler};
use crate::js_lib;

#[derive(Prop)]
pub struct GenerateFormProps<'ctx> {
    sh: StateHandler<'ctx>,
}

#[instrument(skip_all)]
#[component]
pub fn GenerateForm<'ctx, G: Html>(cx: Scope<'ctx>, props: GenerateFormProps<'ctx>) -> View<G> {
    let GenerateFormProps { sh } = props;
    let prefill = js_lib::query_param(INGREDIENTS_PARAM).unwrap_or_default();
    debug!(%prefill, "Prefilling ingredients");
    let ingredients = create_signal(cx, prefill);
    let status = sh.get_selector(cx, |state| state.get().generation.clone());
    let working = create_memo(cx, move || *status.get() == GenerateStatus::Working);

    view! {cx,
        section(class="generate-form") {
            label(for="ingredients") { "What's in your kitchen?" }
            textarea(
                id="ingredients",
                rows=3,
                placeholder="e.g. chicken, rice, garlic",
                bind:value=ingredients,
            )
            button(disabled=*working.get(), aria-busy=working.get().to_string(), on:click=move |_| {
                sh.dispatch(cx, Message::GenerateRecipe(ingredients.get_untracked().as_ref().clone()));
            }) { "Generate Recipe" }
            div(id="result") {
                (match status.get().as_ref().clone() {
                    GenerateStatus::Idle | GenerateStatus::Working => View::empty(),
                    GenerateStatus::Done(generated) => {
                        let note = generated.note.unwrap_or_default();
                        view! {cx,
                            article(class="generated-recipe") {
                                pre { (generated.recipe) }
                                p(class="note") { (note) }
                            }
                        }
                    }
                    GenerateStatus::Failed(msg) => view! {cx,
                        p(class="error") { (msg) }
                    },
                    GenerateStatus::Unauthenticated => view! {cx,
                        p(class="error") { "Please log in to generate recipes." }
                    },
                })
            }
        }
    }
}
