//! Number Generator - Fallback draw when the client supplies no numbers

use std::ops::RangeInclusive;

use rand::Rng;

use crate::domain::entities::DrawNumbers;

/// Range a drawn number falls in
pub const DRAW_RANGE: RangeInclusive<i64> = 100..=999;

/// Draw three independent numbers from `DRAW_RANGE`
pub fn draw_with<R: Rng + ?Sized>(rng: &mut R) -> DrawNumbers {
    DrawNumbers::new(
        rng.random_range(DRAW_RANGE),
        rng.random_range(DRAW_RANGE),
        rng.random_range(DRAW_RANGE),
    )
}

/// Draw three numbers with the thread-local RNG
pub fn draw() -> DrawNumbers {
    draw_with(&mut rand::rng())
}

/// Use the caller's numbers verbatim, drawing fresh ones only when absent
pub fn numbers_or_draw(supplied: Option<DrawNumbers>) -> DrawNumbers {
    match supplied {
        Some(numbers) => numbers,
        None => {
            let numbers = draw();
            tracing::debug!("No numbers supplied, drew {}", numbers);
            numbers
        }
    }
}
