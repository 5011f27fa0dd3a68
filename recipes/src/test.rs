// Copyright 2023 Jeremy Wall
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
use crate::*;

use chrono::{DateTime, Duration, FixedOffset, TimeZone, Utc};

const GARLIC_RECIPE: &'static str =
    "Garlic Chicken Rice\nA simple one-pot meal\n**Step 1**\n- cook rice";

fn at(y: i32, m: u32, d: u32, h: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(y, m, d, h, 0, 0).unwrap()
}

fn now() -> DateTime<Utc> {
    at(2024, 5, 20, 12)
}

fn entry(ingredients: &str, recipe: &str, created_at: DateTime<Utc>) -> HistoryEntry {
    HistoryEntry::new(ingredients, recipe, created_at)
}

fn sample_history() -> Vec<HistoryEntry> {
    vec![
        entry("tomato, basil", "Caprese\nFresh and bright", at(2024, 5, 1, 9)),
        entry("chicken, rice, garlic", GARLIC_RECIPE, at(2024, 5, 19, 18)),
        entry("Banana, honey", "Banana Bites\nSweet", at(2024, 4, 2, 7)),
        entry("apple, sugar", "Apple Crumble\nWarm dessert", at(2024, 5, 15, 20)),
    ]
}

fn view_with(entries: Vec<HistoryEntry>) -> HistoryView {
    let mut view = HistoryView::new();
    view.replace_entries(entries);
    view
}

#[test]
fn test_parse_timestamp_naive_is_utc() {
    let parsed = parse_timestamp("2024-05-01T12:34:56.123456").unwrap();
    assert_eq!(
        parsed,
        Utc.with_ymd_and_hms(2024, 5, 1, 12, 34, 56).unwrap() + Duration::microseconds(123456)
    );
    let parsed = parse_timestamp("2024-05-01T12:34:56").unwrap();
    assert_eq!(parsed, Utc.with_ymd_and_hms(2024, 5, 1, 12, 34, 56).unwrap());
}

#[test]
fn test_parse_timestamp_rfc3339_keeps_offset() {
    let parsed = parse_timestamp("2024-05-01T12:00:00+02:00").unwrap();
    assert_eq!(parsed, at(2024, 5, 1, 10));
}

#[test]
fn test_parse_timestamp_rejects_garbage() {
    assert!(parse_timestamp("yesterday").is_err());
    assert!(parse_timestamp("").is_err());
}

#[test]
fn test_entry_deserializes_from_backend_json() {
    let json = r#"{"ingredients": "egg", "recipe": "Omelette", "created_at": "2024-05-01T08:00:00", "word_count": 12}"#;
    let entry: HistoryEntry = serde_json::from_str(json).unwrap();
    assert_eq!(entry.ingredients, "egg");
    assert_eq!(entry.created_at, at(2024, 5, 1, 8));
    assert_eq!(entry.display.word_count, Some(12));
    assert_eq!(entry.display.preview, None);
}

#[test]
fn test_entry_with_bad_timestamp_fails_to_deserialize() {
    let json = r#"{"ingredients": "egg", "recipe": "Omelette", "created_at": "soon"}"#;
    assert!(serde_json::from_str::<HistoryEntry>(json).is_err());
}

#[test]
fn test_replace_entries_drops_invalid_and_numbers_the_rest() {
    let mut view = HistoryView::new();
    let dropped = view.replace_entries(vec![
        entry("egg", "Omelette", now()),
        entry("  ", "Nothing", now()),
        entry("flour", "", now()),
        entry("milk", "Pancakes", now()),
    ]);
    assert_eq!(dropped, 2);
    let ids: Vec<usize> = view.entries().iter().map(|e| e.id).collect();
    assert_eq!(ids, vec![0, 1]);
    assert_eq!(view.entry(1).unwrap().ingredients, "milk");
}

#[test]
fn test_replace_entries_replaces_wholesale() {
    let mut view = view_with(sample_history());
    view.replace_entries(vec![entry("egg", "Omelette", now())]);
    assert_eq!(view.entries().len(), 1);
}

#[test]
fn test_search_matches_ingredients_or_recipe_case_insensitively() {
    let history = sample_history();
    for needle in ["GARLIC", "banana", "crumble", "e", "zzz"] {
        let found = apply_pipeline(&history, needle, TimeFilter::All, SortMode::Newest, now());
        let lowered = needle.to_lowercase();
        for e in history.iter() {
            let hit = e.ingredients.to_lowercase().contains(&lowered)
                || e.recipe.to_lowercase().contains(&lowered);
            assert_eq!(
                found.iter().any(|f| *f == e),
                hit,
                "needle {} entry {}",
                needle,
                e.ingredients
            );
        }
    }
}

#[test]
fn test_empty_search_matches_everything() {
    let history = sample_history();
    let found = apply_pipeline(&history, "", TimeFilter::All, SortMode::Newest, now());
    assert_eq!(found.len(), history.len());
}

#[test]
fn test_recent_filter_is_strictly_after_seven_days_ago() {
    let cutoff = now() - Duration::days(7);
    let history = vec![
        entry("a", "exactly seven days", cutoff),
        entry("b", "just inside", cutoff + Duration::seconds(1)),
        entry("c", "just outside", cutoff - Duration::seconds(1)),
        entry("d", "today", now()),
    ];
    let found = apply_pipeline(&history, "", TimeFilter::Recent, SortMode::Oldest, now());
    let names: Vec<&str> = found.iter().map(|e| e.ingredients.as_str()).collect();
    assert_eq!(names, vec!["b", "d"]);
}

#[test]
fn test_favorite_filter_keeps_everything() {
    let history = sample_history();
    let found = apply_pipeline(&history, "", TimeFilter::Favorite, SortMode::Newest, now());
    assert_eq!(found.len(), history.len());
}

#[test]
fn test_sort_newest_and_oldest_are_monotonic() {
    let history = sample_history();
    let newest = apply_pipeline(&history, "", TimeFilter::All, SortMode::Newest, now());
    assert!(newest
        .windows(2)
        .all(|w| w[0].created_at >= w[1].created_at));
    let oldest = apply_pipeline(&history, "", TimeFilter::All, SortMode::Oldest, now());
    assert!(oldest
        .windows(2)
        .all(|w| w[0].created_at <= w[1].created_at));
}

#[test]
fn test_sort_by_ingredients_ignores_case() {
    let history = sample_history();
    let sorted = apply_pipeline(&history, "", TimeFilter::All, SortMode::Ingredients, now());
    let names: Vec<&str> = sorted.iter().map(|e| e.ingredients.as_str()).collect();
    assert_eq!(
        names,
        vec![
            "apple, sugar",
            "Banana, honey",
            "chicken, rice, garlic",
            "tomato, basil"
        ]
    );
}

#[test]
fn test_sort_is_stable_for_equal_keys() {
    let history = vec![
        entry("same", "first", now()),
        entry("same", "second", now()),
        entry("same", "third", now()),
    ];
    let sorted = apply_pipeline(&history, "", TimeFilter::All, SortMode::Newest, now());
    let order: Vec<&str> = sorted.iter().map(|e| e.recipe.as_str()).collect();
    assert_eq!(order, vec!["first", "second", "third"]);
}

#[test]
fn test_pipeline_is_deterministic_and_leaves_input_alone() {
    let history = sample_history();
    let before = history.clone();
    let first = apply_pipeline(&history, "a", TimeFilter::Recent, SortMode::Ingredients, now());
    let second = apply_pipeline(&history, "a", TimeFilter::Recent, SortMode::Ingredients, now());
    assert_eq!(first, second);
    assert_eq!(history, before);
}

#[test]
fn test_filter_and_sort_string_round_trip() {
    for f in TimeFilter::all() {
        assert_eq!(f.as_str().parse::<TimeFilter>().unwrap(), f);
    }
    for s in SortMode::all() {
        assert_eq!(s.as_str().parse::<SortMode>().unwrap(), s);
    }
    assert!("sideways".parse::<SortMode>().is_err());
}

#[test]
fn test_clear_filters_resets_everything() {
    let mut view = view_with(sample_history());
    view.set_search("rice");
    view.set_filter(TimeFilter::Recent);
    view.set_sort(SortMode::Ingredients);
    view.clear_filters();
    assert_eq!(view.search(), "");
    assert_eq!(view.filter(), TimeFilter::All);
    assert_eq!(view.sort(), SortMode::Newest);
}

#[test]
fn test_clear_search_keeps_filter_and_sort() {
    let mut view = view_with(sample_history());
    view.set_search("rice");
    view.set_filter(TimeFilter::Recent);
    view.clear_search();
    assert_eq!(view.search(), "");
    assert_eq!(view.filter(), TimeFilter::Recent);
}

#[test]
fn test_listing_empty_history() {
    let view = HistoryView::new();
    assert_eq!(
        view.listing(now(), &Utc),
        Listing::Empty(EmptyState::NoHistory)
    );
}

#[test]
fn test_listing_no_matches() {
    let mut view = view_with(sample_history());
    view.set_search("no such ingredient");
    assert_eq!(
        view.listing(now(), &Utc),
        Listing::Empty(EmptyState::NoMatches)
    );
}

#[test]
fn test_listing_cards_with_summary() {
    let mut view = view_with(sample_history());
    view.set_search("chicken");
    match view.listing(now(), &Utc) {
        Listing::Cards { summary, cards } => {
            assert_eq!(summary, "1 recipe found");
            assert_eq!(cards.len(), 1);
            assert_eq!(cards[0].id, 1);
        }
        other => panic!("unexpected listing {:?}", other),
    }
}

#[test]
fn test_results_summary_pluralizes() {
    assert_eq!(results_summary(0), "0 recipes found");
    assert_eq!(results_summary(1), "1 recipe found");
    assert_eq!(results_summary(3), "3 recipes found");
}

#[test]
fn test_category_priority() {
    assert_eq!(Category::classify("chicken, rice, garlic"), Category::Protein);
    assert_eq!(Category::classify("Pasta, tomato"), Category::Carbs);
    assert_eq!(Category::classify("dark CHOCOLATE, milk"), Category::Dessert);
    assert_eq!(Category::classify("carrot, kale"), Category::Vegetable);
    assert_eq!(Category::classify("potato, honey"), Category::Carbs);
    assert_eq!(Category::Carbs.label(), "Carbs");
}

#[test]
fn test_card_for_garlic_chicken() {
    let e = entry("chicken, rice, garlic", GARLIC_RECIPE, at(2024, 5, 1, 15));
    let card = RecipeCard::new(&e, &Utc);
    assert_eq!(card.title, "Garlic Chicken Rice");
    assert_eq!(card.subtitle, "A simple one-pot meal");
    assert_eq!(card.category, Category::Protein);
    assert_eq!(card.tags, vec!["chicken", "rice", "garlic"]);
    assert_eq!(card.date, "May 1, 2024");
    assert_eq!(card.time, "03:00 PM");
    assert_eq!(card.step_count, 1);
    assert_eq!(card.reading_minutes, 1);
    assert_eq!(card.preview, "Step 1 - cook rice");
}

#[test]
fn test_card_dates_use_viewer_offset() {
    let e = entry("egg", "Omelette", at(2024, 5, 1, 2));
    let pacific = FixedOffset::west_opt(7 * 3600).unwrap();
    let card = RecipeCard::new(&e, &pacific);
    assert_eq!(card.date, "April 30, 2024");
    assert_eq!(card.time, "07:00 PM");
}

#[test]
fn test_card_prefers_backend_display_fields() {
    let e = entry("egg", "Omelette", now()).with_display(DisplayFields {
        formatted_date: Some("Yesterday".to_owned()),
        word_count: Some(450),
        preview: Some("Fluffy".to_owned()),
        ..DisplayFields::default()
    });
    let card = RecipeCard::new(&e, &Utc);
    assert_eq!(card.date, "Yesterday");
    assert_eq!(card.word_count, 450);
    assert_eq!(card.reading_minutes, 3);
    assert_eq!(card.preview, "Fluffy");
}

#[test]
fn test_card_fallback_title_and_subtitle() {
    let e = entry("egg", "\n", now());
    let card = RecipeCard::new(&e, &Utc);
    assert_eq!(card.title, DEFAULT_TITLE);
    assert_eq!(card.subtitle, DEFAULT_SUBTITLE);
}

#[test]
fn test_ingredient_tags_take_first_four() {
    assert_eq!(
        ingredient_tags("a, b,, c , d, e, f"),
        vec!["a", "b", "c", "d"]
    );
}

#[test]
fn test_preview_truncates_long_bodies() {
    let body = format!("Title\nSub\n{}", "word ".repeat(100));
    let p = preview(&body);
    assert!(p.ends_with('…'));
    assert!(p.chars().count() <= PREVIEW_CHARS + 1);
}

#[test]
fn test_reading_minutes_rounds_up() {
    assert_eq!(reading_minutes(0), 1);
    assert_eq!(reading_minutes(200), 1);
    assert_eq!(reading_minutes(201), 2);
}

#[test]
fn test_detail_for_garlic_chicken() {
    let mut view = view_with(vec![entry("chicken, rice, garlic", GARLIC_RECIPE, now())]);
    let before = view.clone();
    let detail = RecipeDetail::new(view.entry(0).unwrap());
    assert_eq!(detail.title, "Garlic Chicken Rice");
    assert_eq!(detail.ingredients, vec!["chicken", "rice", "garlic"]);
    assert_eq!(
        detail.blocks,
        vec![
            Block::Paragraph("Garlic Chicken Rice".to_owned()),
            Block::Paragraph("A simple one-pot meal".to_owned()),
            Block::Heading("Step 1".to_owned()),
            Block::Step {
                marker: StepMarker::Bullet,
                text: "cook rice".to_owned()
            },
        ]
    );
    view.set_sort(SortMode::Newest);
    assert_eq!(view, before);
}

#[test]
fn test_classify_lines() {
    assert_eq!(classify_line("   "), None);
    assert_eq!(classify_line("**"), None);
    assert_eq!(classify_line("***"), None);
    assert_eq!(classify_line("****"), None);
    assert_eq!(
        classify_line("  **Marinade:**  "),
        Some(Block::Heading("Marinade:".to_owned()))
    );
    assert_eq!(
        classify_line("12. Serve warm"),
        Some(Block::Step {
            marker: StepMarker::Numbered("12".to_owned()),
            text: "Serve warm".to_owned()
        })
    );
    assert_eq!(
        classify_line("**Chef's Tip:** salt helps"),
        Some(Block::Paragraph("**Chef's Tip:** salt helps".to_owned()))
    );
    assert_eq!(
        classify_line("2 cups flour"),
        Some(Block::Paragraph("2 cups flour".to_owned()))
    );
}

#[test]
fn test_block_text_includes_step_number() {
    let block = classify_line("3. Stir").unwrap();
    assert!(block.is_step());
    assert_eq!(block.text(), "3. Stir");
}

#[test]
fn test_detail_title_fallback() {
    let detail = RecipeDetail::new(&entry("egg", "\nOmelette", now()));
    assert_eq!(detail.title, DETAIL_TITLE);
}

#[test]
fn test_copy_text() {
    let e = entry("chicken, rice, garlic", GARLIC_RECIPE, now());
    assert_eq!(
        copy_text(&e),
        "Ingredients: chicken, rice, garlic\n\nRecipe:\nGarlic Chicken Rice\nA simple one-pot meal\n**Step 1**\n- cook rice"
    );
}

#[test]
fn test_share_payload() {
    let e = entry("egg", "Omelette", now());
    let payload = SharePayload::for_entry(&e, APP_NAME);
    assert_eq!(payload.title, "My Zero Hunger Chef Recipe");
    assert_eq!(
        payload.text,
        "Check out this recipe I made with Zero Hunger Chef!\n\nIngredients: egg\n\nOmelette"
    );
}

#[test]
fn test_regenerate_href() {
    assert_eq!(
        regenerate_href("/dashboard", "egg%2C%20milk"),
        "/dashboard?ingredients=egg%2C%20milk"
    );
}

#[test]
fn test_summary_counts_current_month() {
    let summary = HistorySummary::compute(&sample_history(), &now());
    assert_eq!(summary.total, 4);
    assert_eq!(summary.this_month, 3);
    assert_eq!(summary.food_saved_kg, 2);
}

#[test]
fn test_summary_month_uses_viewer_zone() {
    let history = vec![entry("egg", "Omelette", at(2024, 6, 1, 2))];
    let eastern = FixedOffset::west_opt(4 * 3600).unwrap();
    let may_evening = eastern.with_ymd_and_hms(2024, 5, 31, 23, 0, 0).unwrap();
    let summary = HistorySummary::compute(&history, &may_evening);
    assert_eq!(summary.this_month, 1);
}

#[test]
fn test_summary_rounds_savings_half_up() {
    assert_eq!(HistorySummary::compute(&[], &now()).food_saved_kg, 0);
    let one = vec![entry("egg", "Omelette", now())];
    assert_eq!(HistorySummary::compute(&one, &now()).food_saved_kg, 1);
}
