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
pub mod compact_history;
pub mod generate_form;
pub mod header;
pub mod history_controls;
pub mod history_list;
pub mod history_stats;
pub mod recipe_card;
pub mod recipe_modal;
pub mod toast;

pub use compact_history::*;
pub use generate_form::*;
pub use header::*;
pub use history_controls::*;
pub use history_list::*;
pub use history_stats::*;
pub use recipe_card::*;
pub use recipe_modal::*;
