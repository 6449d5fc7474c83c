//! Variant selection rules for the product detail and cart edit views.
//!
//! Every function here is total: empty variant lists, unknown colors,
//! and colorless or sizeless products all produce an answer, never a
//! panic. The caller decides what to render; this module only derives
//! what is selectable.

use std::cmp::Ordering;

use crate::catalog::Variant;

/// A selectable color with its swatch code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColorChoice {
    pub color: String,
    /// Hex display color for the swatch
    pub color_code: String,
}

/// A selectable size with the stock left for the chosen color.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SizeChoice {
    pub size: String,
    pub remains: u32,
}

/// A concrete color/size pick, as the detail view starts out.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection {
    pub color: String,
    /// `None` when no size of the color is in stock; the size control
    /// renders unselected
    pub size: Option<String>,
}

/// Distinct colors in first-seen order.
///
/// The swatch code of a color's first variant wins; the API repeats it
/// on every row anyway.
#[must_use]
pub fn available_colors(variants: &[Variant]) -> Vec<ColorChoice> {
    let mut colors: Vec<ColorChoice> = Vec::new();
    for variant in variants {
        if !colors.iter().any(|choice| choice.color == variant.color) {
            colors.push(ColorChoice {
                color: variant.color.clone(),
                color_code: variant.color_code.clone(),
            });
        }
    }
    colors
}

/// Sizes offered for one color, in variants order, with stock counts.
#[must_use]
pub fn available_sizes(variants: &[Variant], color: &str) -> Vec<SizeChoice> {
    variants
        .iter()
        .filter(|variant| variant.color == color)
        .map(|variant| SizeChoice {
            size: variant.size.clone(),
            remains: variant.remains,
        })
        .collect()
}

/// All sizes across every color, deduplicated and ordered for display.
///
/// Letter sizes come first in garment order (S, M, L, XL), then numeric
/// labels ascending (shoe sizes like "40" or "42.5"), then anything else
/// in first-seen order. The detail view renders this full row and greys
/// out the sizes the current color lacks.
#[must_use]
pub fn all_sizes_union(variants: &[Variant]) -> Vec<String> {
    let mut sizes: Vec<String> = Vec::new();
    for variant in variants {
        if !sizes.iter().any(|size| size == &variant.size) {
            sizes.push(variant.size.clone());
        }
    }
    // Stable sort keeps unrecognized labels in first-seen order
    sizes.sort_by(|a, b| compare_sizes(a, b));
    sizes
}

/// Whether a color/size combination cannot be bought right now.
///
/// True when no variant matches or the matching variant has no stock.
#[must_use]
pub fn is_out_of_stock(variants: &[Variant], color: &str, size: &str) -> bool {
    find_variant(variants, color, size).is_none_or(|variant| variant.remains == 0)
}

/// The most units a customer may put in the cart for a combination.
///
/// Zero when the combination does not exist or is out of stock.
#[must_use]
pub fn max_selectable_quantity(variants: &[Variant], color: &str, size: &str) -> u32 {
    find_variant(variants, color, size).map_or(0, |variant| variant.remains)
}

/// Pick the size to show after the customer switches color.
///
/// Keeps `previous_size` when the new color offers it with stock,
/// otherwise falls back to the new color's first in-stock size in
/// variants order. `None` means nothing is in stock and the size
/// control goes back to unselected.
#[must_use]
pub fn resolve_size_on_color_change(
    variants: &[Variant],
    new_color: &str,
    previous_size: &str,
) -> Option<String> {
    if !is_out_of_stock(variants, new_color, previous_size) {
        return Some(previous_size.to_string());
    }

    variants
        .iter()
        .find(|variant| variant.color == new_color && variant.remains > 0)
        .map(|variant| variant.size.clone())
}

/// The initial selection for a freshly opened product detail view:
/// the first listed color with its size resolved the same way a color
/// switch resolves it. `None` only for a product with no variants.
#[must_use]
pub fn default_selection(variants: &[Variant]) -> Option<Selection> {
    let first = variants.first()?;
    Some(Selection {
        color: first.color.clone(),
        size: resolve_size_on_color_change(variants, &first.color, &first.size),
    })
}

fn find_variant<'a>(variants: &'a [Variant], color: &str, size: &str) -> Option<&'a Variant> {
    variants
        .iter()
        .find(|variant| variant.color == color && variant.size == size)
}

/// Size ordering: letter sizes by garment rank, then numerics by value,
/// then everything else equal (stable sort preserves input order).
fn compare_sizes(a: &str, b: &str) -> Ordering {
    match (classify_size(a), classify_size(b)) {
        (SizeClass::Letter(x), SizeClass::Letter(y)) => x.cmp(&y),
        (SizeClass::Numeric(x), SizeClass::Numeric(y)) => x.total_cmp(&y),
        (SizeClass::Other, SizeClass::Other) => Ordering::Equal,
        (SizeClass::Letter(_), _) => Ordering::Less,
        (_, SizeClass::Letter(_)) => Ordering::Greater,
        (SizeClass::Numeric(_), SizeClass::Other) => Ordering::Less,
        (SizeClass::Other, SizeClass::Numeric(_)) => Ordering::Greater,
    }
}

enum SizeClass {
    Letter(u8),
    Numeric(f64),
    Other,
}

fn classify_size(size: &str) -> SizeClass {
    match size {
        "S" => SizeClass::Letter(1),
        "M" => SizeClass::Letter(2),
        "L" => SizeClass::Letter(3),
        "XL" => SizeClass::Letter(4),
        _ => match size.parse::<f64>() {
            Ok(value) if value.is_finite() => SizeClass::Numeric(value),
            _ => SizeClass::Other,
        },
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use super::*;

    fn variant(color: &str, size: &str, remains: u32) -> Variant {
        Variant {
            color: color.to_string(),
            color_code: format!("#{color}"),
            size: size.to_string(),
            remains,
        }
    }

    fn shirt() -> Vec<Variant> {
        vec![
            variant("Red", "S", 2),
            variant("Red", "M", 3),
            variant("Blue", "S", 4),
            variant("Blue", "L", 0),
        ]
    }

    #[test]
    fn test_available_colors_dedupes_in_first_seen_order() {
        let colors = available_colors(&shirt());
        let names: Vec<&str> = colors.iter().map(|c| c.color.as_str()).collect();
        assert_eq!(names, ["Red", "Blue"]);
        assert_eq!(colors[0].color_code, "#Red");
    }

    #[test]
    fn test_available_sizes_filters_by_color() {
        let sizes = available_sizes(&shirt(), "Blue");
        assert_eq!(
            sizes,
            [
                SizeChoice { size: "S".to_string(), remains: 4 },
                SizeChoice { size: "L".to_string(), remains: 0 },
            ]
        );
        assert!(available_sizes(&shirt(), "Green").is_empty());
    }

    #[test]
    fn test_all_sizes_union_garment_order() {
        let variants = vec![
            variant("Red", "L", 1),
            variant("Red", "XL", 1),
            variant("Blue", "S", 1),
            variant("Blue", "M", 1),
        ];
        assert_eq!(all_sizes_union(&variants), ["S", "M", "L", "XL"]);
    }

    #[test]
    fn test_all_sizes_union_numeric_after_letters() {
        let variants = vec![
            variant("Black", "42", 1),
            variant("Black", "40.5", 1),
            variant("Black", "M", 1),
            variant("Black", "One Size", 1),
            variant("White", "38", 1),
        ];
        assert_eq!(
            all_sizes_union(&variants),
            ["M", "38", "40.5", "42", "One Size"]
        );
    }

    #[test]
    fn test_all_sizes_union_unrecognized_keep_first_seen_order() {
        let variants = vec![
            variant("A", "Tall", 1),
            variant("A", "Petite", 1),
            variant("B", "Tall", 1),
        ];
        assert_eq!(all_sizes_union(&variants), ["Tall", "Petite"]);
    }

    #[test]
    fn test_out_of_stock_and_max_quantity() {
        let variants = shirt();

        assert!(!is_out_of_stock(&variants, "Red", "M"));
        assert!(is_out_of_stock(&variants, "Blue", "L"));
        assert!(is_out_of_stock(&variants, "Blue", "M"));

        assert_eq!(max_selectable_quantity(&variants, "Red", "M"), 3);
        assert_eq!(max_selectable_quantity(&variants, "Blue", "L"), 0);
        assert_eq!(max_selectable_quantity(&variants, "Green", "S"), 0);
    }

    #[test]
    fn test_color_switch_falls_back_to_first_in_stock_size() {
        // Red offers M; Blue does not, so switching lands on Blue's
        // first in-stock size
        let variants = shirt();
        assert_eq!(
            resolve_size_on_color_change(&variants, "Blue", "M"),
            Some("S".to_string())
        );
    }

    #[test]
    fn test_color_switch_keeps_size_when_still_available() {
        let variants = shirt();
        assert_eq!(
            resolve_size_on_color_change(&variants, "Blue", "S"),
            Some("S".to_string())
        );
    }

    #[test]
    fn test_color_switch_with_nothing_in_stock_unselects() {
        let variants = vec![variant("Blue", "L", 0)];
        assert_eq!(resolve_size_on_color_change(&variants, "Blue", "M"), None);
    }

    #[test]
    fn test_default_selection() {
        let variants = shirt();
        assert_eq!(
            default_selection(&variants),
            Some(Selection {
                color: "Red".to_string(),
                size: Some("S".to_string()),
            })
        );
        assert_eq!(default_selection(&[]), None);
    }

    #[test]
    fn test_sizeless_product_still_selectable() {
        let variants = vec![variant("Tan", "", 6)];

        assert!(!is_out_of_stock(&variants, "Tan", ""));
        assert_eq!(max_selectable_quantity(&variants, "Tan", ""), 6);
        assert_eq!(
            default_selection(&variants),
            Some(Selection {
                color: "Tan".to_string(),
                size: Some(String::new()),
            })
        );
    }
}
