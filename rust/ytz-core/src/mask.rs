//! Category bitsets ("which scoring slots are enabled").

use crate::category::{Category, NUM_CATS};

/// Bitset over the 13 categories.
///
/// Bit `i` corresponds to category index `i`.
pub type CategoryMask = u16;

/// All 13 categories set.
pub const FULL_MASK: CategoryMask = (1u16 << NUM_CATS) - 1;

#[inline]
pub fn bit_for_cat(cat: Category) -> CategoryMask {
    1u16 << cat.index()
}

/// Return whether `cat` is set in `mask`.
#[inline]
pub fn is_set(mask: CategoryMask, cat: Category) -> bool {
    (mask & bit_for_cat(cat)) != 0
}

/// Categories set in `mask`, in index order.
pub fn categories_in(mask: CategoryMask) -> impl Iterator<Item = Category> {
    Category::ALL
        .into_iter()
        .filter(move |&c| is_set(mask, c))
}

/// Convert a bitset into a `[u8; NUM_CATS]` array (0/1 bytes).
pub fn to_u8_array(mask: CategoryMask) -> [u8; NUM_CATS] {
    let mut out = [0u8; NUM_CATS];
    for cat in Category::ALL {
        out[cat.index()] = u8::from(is_set(mask, cat));
    }
    out
}

/// Build a mask from a list of categories.
pub fn mask_of(cats: &[Category]) -> CategoryMask {
    cats.iter().fold(0, |m, &c| m | bit_for_cat(c))
}
