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
use tracing::instrument;

use crate::app_state::{Message, StateHandler};
use crate::components::{toast, CompactHistory, GenerateForm};

#[derive(Prop)]
pub struct DashboardPageProps<'ctx> {
    sh: StateHandler<'ctx>,
}

#[instrument(skip_all)]
#[component]
pub fn DashboardPage<'ctx, G: Html>(cx: Scope<'ctx>, props: DashboardPageProps<'ctx>) -> View<G> {
    let DashboardPageProps { sh } = props;
    sh.dispatch(cx, Message::LoadHistory);
    view! {cx,
        main(class="container-fluid dashboard-page") {
            GenerateForm(sh=sh)
            CompactHistory(sh=sh)
            toast::Container()
        }
    }
}
