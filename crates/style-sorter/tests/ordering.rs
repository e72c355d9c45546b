//! Ordering properties of `sort_names` over realistic families.

use style_sorter::{score, sort_names};

fn names(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

const ACUMIN: &[&str] = &[
    "AcuminPro-BoldItalic",
    "AcuminPro-ExtraCondensedLight",
    "AcuminPro-Regular",
    "AcuminPro-SemiCondensedBold",
    "AcuminPro-ThinItalic",
    "AcuminPro-Black",
    "AcuminPro-Whatever",
    "AcuminPro-CondensedRegular",
    "AcuminPro-Italic",
    "AcuminPro-UltraBlack",
    "AcuminPro-Medium",
    "AcuminPro-WideSemibold",
];

// ============================================================================
// Scenarios
// ============================================================================

#[test]
fn weights_then_trailing_italics() {
    let input = ["MyFont-Bold", "MyFont-Regular", "MyFont-Light", "MyFont-BoldItalic"];
    assert_eq!(
        sort_names(input, false),
        names(&["MyFont-Light", "MyFont-Regular", "MyFont-Bold", "MyFont-BoldItalic"])
    );
}

#[test]
fn alternate_italics_tie_on_weight() {
    let input = ["MyFont-Bold", "MyFont-Regular", "MyFont-Light", "MyFont-BoldItalic"];
    assert_eq!(
        sort_names(input, true),
        names(&["MyFont-Light", "MyFont-Regular", "MyFont-Bold", "MyFont-BoldItalic"])
    );
    let bold = score("MyFont-Bold", true);
    let bold_italic = score("MyFont-BoldItalic", true);
    assert_eq!(bold.weight, bold_italic.weight);
}

#[test]
fn outliers_sort_last() {
    assert_eq!(
        sort_names(["Acumin-Whatever", "Acumin-Regular"], false),
        names(&["Acumin-Regular", "Acumin-Whatever"])
    );
}

#[test]
fn numeric_suffix_ascends() {
    assert_eq!(
        sort_names(["Font-Regular1", "Font-Regular2", "Font-Regular"], false),
        names(&["Font-Regular", "Font-Regular1", "Font-Regular2"])
    );
}

#[test]
fn empty_and_single() {
    assert!(sort_names(Vec::<String>::new(), true).is_empty());
    assert_eq!(sort_names(["OnlyOne"], true), names(&["OnlyOne"]));
}

#[test]
fn widths_before_weights() {
    assert_eq!(
        sort_names(ACUMIN, false),
        names(&[
            "AcuminPro-ExtraCondensedLight",
            "AcuminPro-CondensedRegular",
            "AcuminPro-SemiCondensedBold",
            "AcuminPro-Regular",
            "AcuminPro-Medium",
            "AcuminPro-Black",
            "AcuminPro-UltraBlack",
            "AcuminPro-ThinItalic",
            "AcuminPro-Italic",
            "AcuminPro-BoldItalic",
            "AcuminPro-WideSemibold",
            "AcuminPro-Whatever",
        ])
    );
}

#[test]
fn optical_sizes_lead() {
    let input = ["Font-BoldDisplay", "Font-Caption", "Font-Bold", "Font-RegularSubhead"];
    assert_eq!(
        sort_names(input, false),
        names(&["Font-Caption", "Font-Bold", "Font-RegularSubhead", "Font-BoldDisplay"])
    );
}

// ============================================================================
// Properties
// ============================================================================

#[test]
fn sorting_is_deterministic() {
    for alternate in [false, true] {
        assert_eq!(sort_names(ACUMIN, alternate), sort_names(ACUMIN, alternate));
    }
}

#[test]
fn sorting_is_a_permutation() {
    let mut input = names(ACUMIN);
    input.push("AcuminPro-Regular".into());
    for alternate in [false, true] {
        let mut sorted = sort_names(&input, alternate);
        let mut expected = input.clone();
        sorted.sort();
        expected.sort();
        assert_eq!(sorted, expected);
    }
}

#[test]
fn resorting_is_idempotent() {
    for alternate in [false, true] {
        let once = sort_names(ACUMIN, alternate);
        assert_eq!(sort_names(&once, alternate), once);
    }
}

#[test]
fn input_order_does_not_matter() {
    let mut reversed = ACUMIN.to_vec();
    reversed.reverse();
    assert_eq!(sort_names(reversed, true), sort_names(ACUMIN, true));
}
