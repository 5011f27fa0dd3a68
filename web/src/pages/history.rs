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
use sycamore::prelude::*;
use tracing::{info, instrument};

use crate::app_state::{Message, StateHandler};
use crate::components::{toast, HistoryControls, HistoryList, HistoryStats, RecipeModal};
use crate::js_lib;

#[derive(Prop)]
pub struct HistoryPageProps<'ctx> {
    sh: StateHandler<'ctx>,
}

#[instrument(skip_all)]
#[component]
pub fn HistoryPage<'ctx, G: Html>(cx: Scope<'ctx>, props: HistoryPageProps<'ctx>) -> View<G> {
    let HistoryPageProps { sh } = props;
    info!("Loading history page");
    sh.dispatch(cx, Message::LoadHistory);
    view! {cx,
        main(class="container-fluid history-page") {
            h2 { "Your Recipe History" }
            HistoryStats(sh=sh)
            HistoryControls(sh=sh)
            HistoryList(sh=sh)
            RecipeModal(sh=sh)
            button(class="scroll-top outline", title="Back to top", on:click=|_| {
                js_lib::scroll_to_top();
            }) { i(class="fas fa-arrow-up") }
            toast::Container()
        }
    }
}
