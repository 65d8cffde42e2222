//! Property-based tests for identifier handling and difficulty scoring
//!
//! These tests verify invariants that should hold for all inputs:
//! - Parsing is idempotent on its normalized output
//! - Separator and case spelling never change the parse
//! - A sawbox's rear identifier never affects matching
//! - Module-key sorting orders by module number, then level
//! - Scoring and labelling are total

use moda::{
    has_matching_drawing, intensity_label, parse, score_of, sort_modules, DifficultyCategory,
    Drawing, IntensityLabel, Module, SortDirection, SortKey,
};
use proptest::prelude::*;

/// Identifier with random separators and casing
fn spelled_identifier() -> impl Strategy<Value = (String, String)> {
    (
        proptest::option::of(1u32..20),
        0u32..40,
        0u32..200,
        prop::sample::select(vec!["", "-", "_", " "]),
        any::<bool>(),
    )
        .prop_map(|(building, level, module, sep, lower)| {
            let canonical = match building {
                Some(b) => format!("B{b}L{level}M{module}"),
                None => format!("L{level}M{module}"),
            };
            let mut spelled = match building {
                Some(b) => format!("B{b}{sep}L{level}{sep}M{module}"),
                None => format!("L{level}{sep}M{module}"),
            };
            if lower {
                spelled = spelled.to_lowercase();
            }
            (canonical, spelled)
        })
}

fn module_strategy() -> impl Strategy<Value = Module> {
    (1u32..4, 0u32..6, 0u32..30, any::<bool>()).prop_map(|(b, l, m, sawbox)| {
        let module = Module::new(format!("{b}-{l}-{m}")).with_blm(format!("B{b}L{l}M{m}"), "");
        if sawbox {
            module.as_sawbox()
        } else {
            module
        }
    })
}

proptest! {
    #[test]
    fn prop_parse_is_idempotent(input in "[ -~]{0,40}") {
        let once = parse(Some(input.as_str()));
        prop_assert_eq!(parse(Some(once.raw.as_str())), once);
    }

    #[test]
    fn prop_spelling_does_not_change_parse((canonical, spelled) in spelled_identifier()) {
        prop_assert_eq!(parse(Some(spelled.as_str())), parse(Some(canonical.as_str())));
    }

    #[test]
    fn prop_sawbox_ignores_rear(
        rear_a in "[A-Z0-9_-]{0,12}",
        rear_b in "[A-Z0-9_-]{0,12}",
        names in prop::collection::vec("[A-Za-z0-9_ -]{0,16}", 0..6),
    ) {
        let drawings: Vec<Drawing> = names.into_iter().map(Drawing::named).collect();
        let a = Module::new("s").with_blm("B1L2M03", rear_a).as_sawbox();
        let b = Module::new("s").with_blm("B1L2M03", rear_b).as_sawbox();
        prop_assert_eq!(
            has_matching_drawing(&a, &drawings),
            has_matching_drawing(&b, &drawings)
        );
    }

    #[test]
    fn prop_module_sort_orders_module_then_level(
        modules in prop::collection::vec(module_strategy(), 0..25)
    ) {
        let sorted = sort_modules(&modules, SortKey::Module, SortDirection::Asc);
        prop_assert_eq!(sorted.len(), modules.len());
        for pair in sorted.windows(2) {
            let a = parse(Some(pair[0].hitch_blm.as_str()));
            let b = parse(Some(pair[1].hitch_blm.as_str()));
            prop_assert!(a.module <= b.module);
            if a.module == b.module {
                prop_assert!(a.level <= b.level);
            }
        }
    }

    #[test]
    fn prop_unknown_categories_score_zero(label in "[A-Za-z_ -]{0,12}") {
        let known = ["easy", "average", "medium", "hard", "very_hard"];
        if !known.contains(&label.as_str()) {
            prop_assert_eq!(score_of(&label), 0);
        }
    }

    #[test]
    fn prop_zero_modules_is_sentinel(score in any::<i64>()) {
        prop_assert_eq!(intensity_label(score, 0), IntensityLabel::NoModules);
    }

    #[test]
    fn prop_label_never_no_modules_when_populated(score in -100i64..100, count in 1usize..50) {
        prop_assert_ne!(intensity_label(score, count), IntensityLabel::NoModules);
    }
}

#[test]
fn test_every_category_has_a_score() {
    let scores: Vec<i32> = DifficultyCategory::ALL
        .iter()
        .map(|c| score_of(c.as_str()))
        .collect();
    assert_eq!(scores, vec![-1, 0, 1, 1, 2]);
}
