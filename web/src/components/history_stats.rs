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
use std::time::Duration;

use sycamore::{easing, motion, prelude::*, reactive::untrack};
use tracing::{debug, instrument};

use crate::app_state::StateHandler;

const COUNT_UP: Duration = Duration::from_secs(1);

#[derive(Prop)]
struct StatProps<'ctx> {
    value: &'ctx ReadSignal<usize>,
    label: &'static str,
    suffix: &'static str,
}

/// One number that counts up from zero whenever its target changes.
#[component]
fn Stat<'ctx, G: Html>(cx: Scope<'ctx>, props: StatProps<'ctx>) -> View<G> {
    let StatProps {
        value,
        label,
        suffix,
    } = props;
    let tweened = motion::create_tweened_signal(cx, 0.0 as f32, COUNT_UP, easing::quad_out);
    create_effect(cx, move || {
        let target = *value.get() as f32;
        untrack(|| {
            tweened.signal().set(0.0);
            tweened.set(target);
        });
    });
    let current = tweened.signal();
    let shown = create_memo(cx, move || format!("{}{}", current.get().round() as usize, suffix));
    view! {cx,
        div(class="stat") {
            span(class="stat-number") { (shown.get()) }
            span(class="stat-label") { (label) }
        }
    }
}

#[derive(Prop)]
pub struct HistoryStatsProps<'ctx> {
    sh: StateHandler<'ctx>,
}

#[instrument(skip_all)]
#[component]
pub fn HistoryStats<'ctx, G: Html>(cx: Scope<'ctx>, props: HistoryStatsProps<'ctx>) -> View<G> {
    let HistoryStatsProps { sh } = props;
    let total = sh.get_selector(cx, |state| state.get().summary.total);
    let this_month = sh.get_selector(cx, |state| state.get().summary.this_month);
    let saved = sh.get_selector(cx, |state| state.get().summary.food_saved_kg);
    debug!("Rendering history stats");
    view! {cx,
        section(class="history-stats row-flex") {
            Stat(value=total, label="Total Recipes", suffix="")
            Stat(value=this_month, label="This Month", suffix="")
            Stat(value=saved, label="Food Saved", suffix="kg")
        }
    }
}
