// Copyright 2022 Jeremy Wall (Jeremy@marzhilsltudios.com)
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
use tracing::debug;

use crate::js_lib;

/// Host page settings. Each field can be overridden with a
/// `<meta name="chef:{key}" content="...">` tag.
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub api_root: String,
    pub dashboard_path: String,
    pub history_path: String,
    pub token_key: String,
    pub app_name: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_root: "/api".to_owned(),
            dashboard_path: "/dashboard".to_owned(),
            history_path: "/history".to_owned(),
            token_key: "id_token".to_owned(),
            app_name: recipes::APP_NAME.to_owned(),
        }
    }
}

fn override_from_meta(key: &str, field: &mut String) {
    if let Some(value) = js_lib::meta_content(&format!("chef:{}", key)) {
        let value = value.trim();
        if !value.is_empty() {
            debug!(key, value, "config override from host page");
            *field = value.to_owned();
        }
    }
}

impl AppConfig {
    pub fn from_document() -> Self {
        let mut config = Self::default();
        override_from_meta("api_root", &mut config.api_root);
        override_from_meta("dashboard", &mut config.dashboard_path);
        override_from_meta("history", &mut config.history_path);
        override_from_meta("token_key", &mut config.token_key);
        override_from_meta("app_name", &mut config.app_name);
        config.api_root = config.api_root.trim_end_matches('/').to_owned();
        config
    }

    pub fn provide_context(cx: Scope, config: Rc<Self>) {
        provide_context(cx, config);
    }

    pub fn get_from_context(cx: Scope) -> Rc<Self> {
        use_context::<Rc<Self>>(cx).clone()
    }
}
