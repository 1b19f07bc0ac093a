use leptos::prelude::*;

use pokedex_core::rating::{star_rating, MAX_STARS};

/// Filled and empty stars, e.g. `★★★☆☆`
pub fn star_glyphs(stars: u8) -> String {
    (1..=MAX_STARS)
        .map(|slot| if slot <= stars { '★' } else { '☆' })
        .collect()
}

#[component]
pub fn StarRating(base_experience: u32) -> impl IntoView {
    let stars = star_rating(base_experience);
    view! {
        <span class="star-rating" title=format!("{} / {}", stars, MAX_STARS)>
            {star_glyphs(stars)}
        </span>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_star_glyphs() {
        assert_eq!(star_glyphs(1), "★☆☆☆☆");
        assert_eq!(star_glyphs(3), "★★★☆☆");
        assert_eq!(star_glyphs(5), "★★★★★");
    }
}
