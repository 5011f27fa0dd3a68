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
use recipes::{Category, RecipeCard};
use sycamore::prelude::*;

use crate::app_state::{Message, StateHandler};

fn category_icon(category: Category) -> &'static str {
    match category {
        Category::Protein => "fas fa-drumstick-bite",
        Category::Carbs => "fas fa-bread-slice",
        Category::Dessert => "fas fa-ice-cream",
        Category::Vegetable => "fas fa-carrot",
    }
}

#[derive(Prop)]
pub struct RecipeCardViewProps<'ctx> {
    sh: StateHandler<'ctx>,
    card: RecipeCard,
}

#[component]
pub fn RecipeCardView<'ctx, G: Html>(cx: Scope<'ctx>, props: RecipeCardViewProps<'ctx>) -> View<G> {
    let RecipeCardViewProps { sh, card } = props;
    let RecipeCard {
        id,
        title,
        subtitle,
        category,
        tags,
        date,
        time,
        word_count,
        step_count,
        reading_minutes,
        preview,
    } = card;
    let favorite = sh.get_selector(cx, move |state| state.get().favorites.contains(&id));
    let favorite_class = create_memo(cx, move || {
        if *favorite.get() {
            "fas fa-heart"
        } else {
            "far fa-heart"
        }
    });
    let tags = create_signal(cx, tags);
    let badge_class = format!("category-badge {}", category.as_str());
    let stats = format!(
        "{} words · {} steps · {} min read",
        word_count, step_count, reading_minutes
    );
    view! {cx,
        article(class="recipe-card", data-id=id) {
            header(class="card-header row-flex") {
                span(class=badge_class) {
                    i(class=category_icon(category)) " " (category.label())
                }
                span(class="card-date") { (date) " · " (time) }
                span(class="card-quick-actions") {
                    button(class="icon-btn", title="Favorite", on:click=move |_| {
                        sh.dispatch(cx, Message::ToggleFavorite(id));
                    }) { i(class=favorite_class.get()) }
                    button(class="icon-btn", title="Share", on:click=move |_| {
                        sh.dispatch(cx, Message::ShareRecipe(id));
                    }) { i(class="fas fa-share-alt") }
                }
            }
            h3(class="card-title") { (title) }
            p(class="card-subtitle") { (subtitle) }
            div(class="ingredient-tags row-flex") {
                Indexed(
                    iterable=tags,
                    view=|cx, tag| view! {cx,
                        span(class="ingredient-tag") { (tag) }
                    },
                )
            }
            p(class="card-preview") { (preview) }
            p(class="card-stats") { (stats) }
            footer(class="card-actions row-flex") {
                button(on:click=move |_| {
                    sh.dispatch(cx, Message::ShowDetail(id));
                }) { i(class="fas fa-eye") " View" }
                button(class="outline", on:click=move |_| {
                    sh.dispatch(cx, Message::Regenerate(id));
                }) { i(class="fas fa-redo") " Remix" }
                button(class="outline", on:click=move |_| {
                    sh.dispatch(cx, Message::CopyRecipe(id));
                }) { i(class="fas fa-copy") " Copy" }
            }
        }
    }
}
