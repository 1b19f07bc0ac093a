//! Star rating derived from base experience.

pub const MAX_STARS: u8 = 5;

/// Map base experience to 1..=5 stars.
pub fn star_rating(base_experience: u32) -> u8 {
    match base_experience {
        200.. => 5,
        150..=199 => 4,
        100..=149 => 3,
        50..=99 => 2,
        _ => 1,
    }
}
