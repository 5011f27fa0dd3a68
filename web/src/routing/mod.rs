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
use sycamore_router::{HistoryIntegration, Route, Router};
use tracing::{debug, instrument};

use crate::app_state::StateHandler;
use crate::pages::*;

#[instrument(skip_all, fields(?route))]
fn route_switch<'ctx, G: Html>(route: &Routes, cx: Scope<'ctx>, sh: StateHandler<'ctx>) -> View<G> {
    debug!("Switching route");
    match route {
        Routes::Dashboard => view! {cx,
            DashboardPage(sh=sh)
        },
        Routes::History | Routes::NotFound => view! {cx,
            HistoryPage(sh=sh)
        },
    }
}

#[derive(Route, Debug)]
pub enum Routes {
    #[to("/history")]
    History,
    #[to("/dashboard")]
    Dashboard,
    #[not_found]
    NotFound,
}

#[derive(Prop)]
pub struct HandlerProps<'ctx> {
    sh: StateHandler<'ctx>,
}

#[component]
pub fn Handler<'ctx, G: Html>(cx: Scope<'ctx>, props: HandlerProps<'ctx>) -> View<G> {
    let HandlerProps { sh } = props;
    view! {cx,
        Router(
            integration=HistoryIntegration::new(),
            view=move |cx: Scope, route: &ReadSignal<Routes>| {
                view!{cx,
                    div(class="app") {
                        (route_switch(route.get().as_ref(), cx, sh))
                    }
                }
            },
        )
    }
}
