#![allow(unused)]
//! Search layer integration harness.
//!
//! # What this covers
//!
//! - **Validity gate**: `SearchCriteria::is_valid` is false exactly when no
//!   field is usable (blank strings, non-positive ids, nothing at all).
//! - **Empty criteria**: calling `search` anyway returns the whole catalog in
//!   store order.
//! - **Name / genre matching**: case-insensitive, unanchored substring match
//!   on the trimmed criterion.
//! - **Id matching**: exact, and only for positive ids.
//! - **Conjunction**: a record must pass every supplied criterion.
//! - **Order**: results are never re-sorted.
//! - **Short-circuits**: `search_by_name` / `search_by_genre` return nothing
//!   for a missing or blank argument.
//! - **Properties** (proptest): every substring of a name finds that record;
//!   results are an order-preserving subsequence of the catalog.
//!
//! # What this does NOT cover
//!
//! - Pirate rewriting of results (see pirate_harness)
//! - HTTP parameter parsing (see server_harness)
//!
//! # Running
//!
//! ```sh
//! cargo test --test search_harness
//! ```

mod common;
use cinedex_core::{Catalog, SearchCriteria};
use common::*;
use proptest::prelude::*;
use rstest::rstest;

// ---------------------------------------------------------------------------
// Validity and empty criteria
// ---------------------------------------------------------------------------

/// Blank and non-positive criteria are all unusable; searching with them
/// anyway returns every record in store order.
#[rstest]
#[case::nothing(SearchCriteria::new())]
#[case::blank_name(SearchCriteria::new().name("   "))]
#[case::empty_genre(SearchCriteria::new().genre(""))]
#[case::zero_id(SearchCriteria::new().id(0))]
#[case::negative_id_blank_rest(SearchCriteria::new().id(-7).name("").genre("\t"))]
fn unusable_criteria_match_everything(#[case] criteria: SearchCriteria) {
    let catalog = sample_catalog();
    assert!(!criteria.is_valid());

    let results = catalog.search(&criteria);
    assert_eq!(names(results), names(catalog.all()));
}

// ---------------------------------------------------------------------------
// Name matching
// ---------------------------------------------------------------------------

/// `"Prison"`, any case, with or without surrounding whitespace, finds the
/// single prison movie.
#[rstest]
#[case("Prison")]
#[case("prison")]
#[case("PRISON")]
#[case("  Prison  ")]
#[case("rison Esc")]
fn name_is_trimmed_case_insensitive_substring(#[case] name: &str) {
    let catalog = sample_catalog();
    let results = catalog.search(&SearchCriteria::new().name(name));
    assert_movie_names!(results, ["The Prison Escape"]);
}

/// "The" appears in several names; all of them come back, in store order.
#[test]
fn common_word_matches_many_in_store_order() {
    let catalog = sample_catalog();
    let results = catalog.search(&SearchCriteria::new().name("the"));
    assert_movie_names!(results, ["The Prison Escape", "The Family Boss", "The Virtual World"]);
}

#[test]
fn unknown_name_matches_nothing() {
    let catalog = sample_catalog();
    assert!(catalog.search(&SearchCriteria::new().name("NonExistentMovie")).is_empty());
}

// ---------------------------------------------------------------------------
// Id and genre matching
// ---------------------------------------------------------------------------

#[test]
fn id_is_exact() {
    let catalog = sample_catalog();
    let results = catalog.search(&SearchCriteria::new().id(1));
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].id, 1);

    assert!(catalog.search(&SearchCriteria::new().id(999)).is_empty());
}

#[rstest]
#[case("drama", 2)]
#[case("DRAMA", 2)]
#[case("sci", 2)]
#[case(" Sci-Fi ", 2)]
#[case("comedy", 1)]
#[case("western", 0)]
fn genre_is_trimmed_case_insensitive_substring(#[case] genre: &str, #[case] expected: usize) {
    let catalog = sample_catalog();
    let results = catalog.search(&SearchCriteria::new().genre(genre));
    assert_eq!(results.len(), expected);
    let needle = genre.trim().to_lowercase();
    assert_results_all!(results, |m: &&cinedex_core::Movie| m.genre.to_lowercase().contains(&needle));
}

// ---------------------------------------------------------------------------
// Conjunction
// ---------------------------------------------------------------------------

#[test]
fn all_supplied_criteria_must_hold() {
    let catalog = sample_catalog();

    let hit = catalog.search(&SearchCriteria::new().name("Prison").id(1).genre("Drama"));
    assert_movie_names!(hit, ["The Prison Escape"]);

    // Right name, wrong genre.
    assert!(catalog.search(&SearchCriteria::new().name("Prison").genre("Comedy")).is_empty());
    // Right name, wrong id.
    assert!(catalog.search(&SearchCriteria::new().name("Prison").id(2)).is_empty());
}

/// A non-positive id is ignored rather than matching nothing.
#[test]
fn non_positive_id_imposes_no_constraint() {
    let catalog = sample_catalog();
    let results = catalog.search(&SearchCriteria::new().name("Prison").id(-1));
    assert_movie_names!(results, ["The Prison Escape"]);
}

// ---------------------------------------------------------------------------
// Single-field helpers
// ---------------------------------------------------------------------------

#[rstest]
#[case(None)]
#[case(Some(""))]
#[case(Some("   "))]
fn single_field_helpers_short_circuit(#[case] arg: Option<&str>) {
    let catalog = sample_catalog();
    assert!(catalog.search_by_name(arg).is_empty());
    assert!(catalog.search_by_genre(arg).is_empty());
}

#[test]
fn single_field_helpers_delegate() {
    let catalog = sample_catalog();
    assert_movie_names!(catalog.search_by_name(Some("dream")), ["Dream Heist"]);
    assert_movie_names!(catalog.search_by_genre(Some("comedy")), ["Buccaneer's Gold"]);
}

// ---------------------------------------------------------------------------
// Embedded catalog
// ---------------------------------------------------------------------------

/// The shipped data keeps the well-known anchor record.
#[test]
fn embedded_catalog_answers_known_queries() {
    let catalog = cinedex_core::catalog();
    assert_movie_names!(catalog.search(&SearchCriteria::new().name("Prison")), ["The Prison Escape"]);
    assert!(catalog.search(&SearchCriteria::new().name("The")).len() > 1);
    assert!(catalog
        .search(&SearchCriteria::new().name("Prison").genre("Comedy"))
        .is_empty());
    assert!(!catalog.search_by_genre(Some("sci")).is_empty());
}

// ---------------------------------------------------------------------------
// Property tests
// ---------------------------------------------------------------------------

fn arb_catalog() -> impl Strategy<Value = Catalog> {
    prop::collection::vec(("[A-Za-z ]{1,16}", "[A-Za-z/]{1,10}"), 1..20).prop_map(|rows| {
        let rows: Vec<(&str, &str)> = rows.iter().map(|(n, g)| (n.as_str(), g.as_str())).collect();
        catalog_of(&rows)
    })
}

proptest! {
    /// Any non-blank substring of a record's name, in any case, finds it.
    #[test]
    fn prop_name_substring_finds_record(
        catalog in arb_catalog(),
        pick in any::<prop::sample::Index>(),
        start in 0usize..16,
        len in 1usize..16,
        upper in any::<bool>(),
    ) {
        let movie = &catalog.all()[pick.index(catalog.len())];
        let name = &movie.movie_name;
        let start = start.min(name.len() - 1);
        let end = (start + len).min(name.len());
        let needle = &name[start..end];
        prop_assume!(!needle.trim().is_empty());

        let needle = if upper { needle.to_uppercase() } else { needle.to_lowercase() };
        let results = catalog.search(&SearchCriteria::new().name(needle));
        prop_assert!(results.iter().any(|m| m.id == movie.id));
    }

    /// Results are a subsequence of the catalog: nothing fabricated, nothing
    /// re-ordered.
    #[test]
    fn prop_results_preserve_store_order(
        catalog in arb_catalog(),
        name in "[a-z]{0,3}",
        genre in "[a-z]{0,2}",
    ) {
        let results = catalog.search(&SearchCriteria::new().name(name).genre(genre));
        let positions: Vec<usize> = results
            .iter()
            .map(|r| catalog.all().iter().position(|m| m.id == r.id).expect("result must come from the store"))
            .collect();
        prop_assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }
}
