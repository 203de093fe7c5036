/// Read-only aggregate rating row: five star glyphs plus a numeric label.
use leptos::*;

use crate::components::icons::StarIcon;

/// Number of filled glyphs for an average rating, clamped to the 5-star row.
pub fn filled_stars(rating: f64) -> u8 {
    rating.round().clamp(0.0, 5.0) as u8
}

#[component]
pub fn StarRating(rating: Option<f64>, count: u32) -> impl IntoView {
    let Some(rating) = rating.filter(|_| count > 0) else {
        return view! { <div class="detail-rating-text">"No reviews yet"</div> }.into_view();
    };

    let full = filled_stars(rating);
    let label = format!(
        "{:.1} ({} {})",
        rating,
        count,
        if count == 1 { "review" } else { "reviews" }
    );

    view! {
        <div class="detail-star-rating">
            {(0..5u8)
                .map(|i| {
                    let class = if i < full { "star-filled" } else { "star-empty" };
                    view! { <StarIcon class=class.to_string() /> }
                })
                .collect::<Vec<_>>()}
            <span class="detail-rating-text">{label}</span>
        </div>
    }
    .into_view()
}
