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
use js_sys::{Function, Object, Promise, Reflect};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{window, Element, Storage, UrlSearchParams, Window};

/// A browser feature we wanted was missing or refused to work.
#[derive(Debug)]
pub enum CapabilityError {
    Unavailable(&'static str),
    Js(JsValue),
}

impl From<JsValue> for CapabilityError {
    fn from(item: JsValue) -> Self {
        CapabilityError::Js(item)
    }
}

impl std::fmt::Display for CapabilityError {
    fn fmt(&self, w: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Unavailable(what) => write!(w, "{} is not available", what),
            Self::Js(val) => write!(w, "{:?}", val),
        }
    }
}

fn get_window() -> Window {
    window().expect("No window present")
}

pub fn navigate_to_href(href: &str) -> Result<(), JsValue> {
    get_window().location().set_href(href)
}

pub fn scroll_to_top() {
    get_window().scroll_to_with_x_and_y(0.0, 0.0);
}

pub fn get_element_by_id<E>(id: &str) -> Result<Option<E>, Element>
where
    E: JsCast,
{
    match get_window()
        .document()
        .expect("No document in window")
        .get_element_by_id(id)
    {
        Some(e) => e.dyn_into::<E>().map(|e| Some(e)),
        None => Ok(None),
    }
}

/// Content of `<meta name="{name}" content="...">` in the host page.
pub fn meta_content(name: &str) -> Option<String> {
    get_window()
        .document()?
        .query_selector(&format!("meta[name=\"{}\"]", name))
        .ok()??
        .get_attribute("content")
}

pub fn get_storage() -> Option<Storage> {
    get_window().local_storage().ok().flatten()
}

pub fn query_param(name: &str) -> Option<String> {
    let search = get_window().location().search().ok()?;
    UrlSearchParams::new_with_str(&search).ok()?.get(name)
}

pub fn encode_uri_component(raw: &str) -> String {
    js_sys::encode_uri_component(raw).into()
}

/// Resolves after `ms` milliseconds.
pub async fn sleep(ms: i32) {
    let promise = Promise::new(&mut |resolve, _reject| {
        if let Err(err) = get_window()
            .set_timeout_with_callback_and_timeout_and_arguments_0(&resolve, ms)
        {
            let _ = resolve.call1(&JsValue::NULL, &err);
        }
    });
    let _ = JsFuture::from(promise).await;
}

fn navigator_method(name: &'static str) -> Option<(JsValue, Function)> {
    let navigator: JsValue = get_window().navigator().into();
    let method = Reflect::get(&navigator, &JsValue::from_str(name)).ok()?;
    method.dyn_into::<Function>().ok().map(|f| (navigator, f))
}

async fn await_promise(result: JsValue) -> Result<(), CapabilityError> {
    let promise = result.dyn_into::<Promise>()?;
    JsFuture::from(promise).await?;
    Ok(())
}

pub async fn copy_to_clipboard(text: &str) -> Result<(), CapabilityError> {
    let navigator: JsValue = get_window().navigator().into();
    let clipboard = Reflect::get(&navigator, &JsValue::from_str("clipboard"))?;
    if clipboard.is_undefined() || clipboard.is_null() {
        return Err(CapabilityError::Unavailable("clipboard"));
    }
    let write_text = Reflect::get(&clipboard, &JsValue::from_str("writeText"))?
        .dyn_into::<Function>()
        .map_err(|_| CapabilityError::Unavailable("clipboard.writeText"))?;
    await_promise(write_text.call1(&clipboard, &JsValue::from_str(text))?).await
}

pub fn can_share() -> bool {
    navigator_method("share").is_some()
}

/// Invoke the native share sheet. A user cancelling the sheet is an error
/// like any other.
pub async fn share(title: &str, text: &str) -> Result<(), CapabilityError> {
    let (navigator, share) =
        navigator_method("share").ok_or(CapabilityError::Unavailable("share"))?;
    let data = Object::new();
    Reflect::set(&data, &JsValue::from_str("title"), &JsValue::from_str(title))?;
    Reflect::set(&data, &JsValue::from_str("text"), &JsValue::from_str(text))?;
    await_promise(share.call1(&navigator, &data)?).await
}
