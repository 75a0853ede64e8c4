//! Combination enumeration for the theme grids.
//!
//! The same fixed 17-color sequence drives rows and columns alike: the
//! `default` pseudo-color, then the eight hues at normal intensity, then the
//! eight hues bright. Weights nest beneath color, reverse-video beneath
//! weight.

use crate::attr::{Weight, DEFAULT_REPR, HUES};

/// The full repr sequence: `df`, eight lowercase reprs, eight uppercase
/// reprs. 17 entries, always in this order.
pub fn palette_reprs() -> Vec<&'static str> {
    let mut reprs = Vec::with_capacity(1 + 2 * HUES.len());
    reprs.push(DEFAULT_REPR);
    reprs.extend(HUES.iter().map(|hue| hue.repr()));
    reprs.extend(HUES.iter().map(|hue| hue.bright_repr()));
    reprs
}

/// One row's worth of attributes: a color repr combined with a weight and
/// the reverse-video flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Combo {
    pub repr: &'static str,
    pub weight: Weight,
    pub reverse: bool,
}

/// The reverse-video states to iterate beneath each weight.
pub fn reverse_states(reverse_video: bool) -> &'static [bool] {
    if reverse_video {
        &[false, true]
    } else {
        &[false]
    }
}

/// Enumerate every (color, weight, reverse) tuple in the fixed nested
/// order: color outermost, weights in caller order, reverse-video
/// innermost. The result has a statically known length of
/// `17 * weights.len() * (1 or 2)`.
pub fn combinations(weights: &[Weight], reverse_video: bool) -> Vec<Combo> {
    let toggles = reverse_states(reverse_video);
    let mut combos = Vec::with_capacity(palette_reprs().len() * weights.len() * toggles.len());
    for repr in palette_reprs() {
        for &weight in weights {
            for &reverse in toggles {
                combos.push(Combo {
                    repr,
                    weight,
                    reverse,
                });
            }
        }
    }
    combos
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn palette_has_seventeen_reprs_in_fixed_order() {
        let reprs = palette_reprs();
        assert_eq!(reprs.len(), 17);
        assert_eq!(reprs[0], "df");
        assert_eq!(reprs[1], "bk");
        assert_eq!(reprs[8], "wh");
        assert_eq!(reprs[9], "BK");
        assert_eq!(reprs[16], "WH");
    }

    #[test]
    fn default_never_appears_bright() {
        assert_eq!(
            palette_reprs().iter().filter(|r| r.eq_ignore_ascii_case("df")).count(),
            1
        );
    }

    #[test]
    fn combinations_nest_color_weight_reverse() {
        let combos = combinations(&Weight::STANDARD, true);
        assert_eq!(combos.len(), 17 * 2 * 2);
        assert_eq!(
            combos[0],
            Combo {
                repr: "df",
                weight: Weight::Default,
                reverse: false
            }
        );
        assert_eq!(
            combos[1],
            Combo {
                repr: "df",
                weight: Weight::Default,
                reverse: true
            }
        );
        assert_eq!(
            combos[2],
            Combo {
                repr: "df",
                weight: Weight::Bold,
                reverse: false
            }
        );
        assert_eq!(combos[4].repr, "bk");
    }

    #[test]
    fn reverse_off_yields_single_state() {
        assert_eq!(reverse_states(false), &[false]);
        assert_eq!(combinations(&Weight::ALL, false).len(), 17 * 4);
    }
}
