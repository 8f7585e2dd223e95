use crate::error::{DrawError, Result};
use crate::model::draw::{Draw, NumberSlot, CANDIDATE_COUNT, PICK_COUNT};

/// Picks the draw for one set of 49 random keys.
///
/// Number `i + 1` is paired with `keys[i]` and the pairs are sorted by key.
/// Sorting by independent uniform keys shuffles the numbers, so the first six
/// form a uniform 6-of-49 combination. The sort is stable: equal keys keep slot
/// order, which makes the result reproducible for a given key sequence.
pub fn select_draw<K: Ord>(keys: &[K]) -> Result<Draw> {
    if keys.len() != CANDIDATE_COUNT {
        return Err(DrawError::InvalidInput {
            expected: CANDIDATE_COUNT,
            actual: keys.len(),
        });
    }

    let mut slots: Vec<NumberSlot<&K>> = keys
        .iter()
        .enumerate()
        .map(|(i, key)| NumberSlot::new(i as u8 + 1, key))
        .collect();

    slots.sort_by(|a, b| a.key.cmp(b.key));

    let mut picks = [0u8; PICK_COUNT];
    for (pick, slot) in picks.iter_mut().zip(&slots) {
        *pick = slot.number;
    }

    // Slots carry distinct numbers 1..=49, so the first six always form a draw.
    Draw::from_picks(picks).ok_or(DrawError::InvalidDraw(picks))
}
