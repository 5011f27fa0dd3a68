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

use crate::config::AppConfig;

#[component]
pub fn Header<G: Html>(cx: Scope) -> View<G> {
    let config = AppConfig::get_from_context(cx);
    let title = config.app_name.clone();
    let dashboard = config.dashboard_path.clone();
    let history = config.history_path.clone();
    view! {cx,
        nav(class="no-print") {
            h1(class="title") { (title) }
            ul {
                li { a(href=dashboard) { "Kitchen" } }
                li { a(href=history) { "History" } }
            }
        }
    }
}
