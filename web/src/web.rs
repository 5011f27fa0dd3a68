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
use std::rc::Rc;

use sycamore::prelude::*;
use tracing::{info, instrument};

use crate::api::{HttpStore, StorageTokenSource};
use crate::app_state::{get_state_handler, AppState};
use crate::components::Header;
use crate::config::AppConfig;
use crate::routing;

#[instrument]
#[component]
pub fn UI<G: Html>(cx: Scope) -> View<G> {
    let config = AppConfig::from_document();
    info!(?config, "Starting UI");
    let tokens = Rc::new(StorageTokenSource::new(config.token_key.clone()));
    let store = HttpStore::new(config.api_root.clone(), tokens);
    let config = Rc::new(config);
    AppConfig::provide_context(cx, config.clone());
    let sh = get_state_handler(cx, AppState::new(), store, config);
    view! {cx,
        Header()
        routing::Handler(sh=sh)
    }
}
