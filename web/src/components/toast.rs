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
use sycamore::{easing, motion, prelude::*};
use tracing::{debug, error};
use wasm_bindgen::JsValue;
use web_sys::{Element, HtmlElement};

use crate::js_lib::get_element_by_id;

const SECTION_ID: &'static str = "toast-container";

/// Toasts are appended here and removed oldest first.
#[component]
pub fn Container<G: Html>(cx: Scope) -> View<G> {
    view! {cx,
        section(id=SECTION_ID, class="toast-container", aria-live="polite") { }
    }
}

fn container() -> Option<HtmlElement> {
    match get_element_by_id::<HtmlElement>(SECTION_ID) {
        Ok(found) => found,
        Err(_) => {
            error!("{} is not an html element", SECTION_ID);
            None
        }
    }
}

fn create_output_element(msg: &str, class: &str) -> Result<Element, JsValue> {
    let document = web_sys::window()
        .expect("No window present")
        .document()
        .expect("No document in window");
    let output = document.create_element("output")?;
    output.set_attribute("class", class)?;
    output.set_attribute("role", "status")?;
    output.append_child(&document.create_text_node(msg))?;
    Ok(output)
}

fn show_toast<'a>(cx: Scope<'a>, msg: &str, class: &str, timeout: Option<chrono::Duration>) {
    let container = match container() {
        Some(c) => c,
        None => {
            debug!(msg, "No toast container on this page");
            return;
        }
    };
    let element = match create_output_element(msg, class) {
        Ok(el) => el,
        Err(err) => {
            error!(?err, "Unable to build toast");
            return;
        }
    };
    if let Err(err) = container.append_child(&element) {
        error!(?err, "Unable to show toast");
        return;
    }
    let timeout = timeout
        .unwrap_or_else(|| chrono::Duration::seconds(3))
        .to_std()
        .unwrap_or(std::time::Duration::from_secs(3));
    let tweened = motion::create_tweened_signal(cx, 0.0 as f32, timeout, easing::quad_in);
    tweened.set(1.0);
    create_effect_scoped(cx, move |_cx| {
        if !tweened.is_tweening() {
            debug!("Toast timed out");
            // The oldest toast always expires first.
            if let Some(first) = container.first_element_child() {
                if let Err(err) = container.remove_child(&first) {
                    error!(?err, "Unable to remove toast");
                }
            }
        }
    });
}

pub fn message<'a>(cx: Scope<'a>, msg: &str, timeout: Option<chrono::Duration>) {
    show_toast(cx, msg, "toast", timeout);
}

pub fn error_message<'a>(cx: Scope<'a>, msg: &str, timeout: Option<chrono::Duration>) {
    show_toast(cx, msg, "toast error", timeout);
}
