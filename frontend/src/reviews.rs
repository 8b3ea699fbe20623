use serde::{Deserialize, Serialize};

use crate::error::{Result, SiteError};

pub const PLACES_STATUS_OK: &str = "OK";
pub const DEFAULT_AUTHOR: &str = "Customer";

/// Grey silhouette used when a reviewer has no photo or it fails to load.
pub const DEFAULT_AVATAR: &str = "data:image/svg+xml,%3Csvg xmlns='http://www.w3.org/2000/svg' viewBox='0 0 40 40'%3E%3Ccircle cx='20' cy='20' r='20' fill='%23e8e4df'/%3E%3Ccircle cx='20' cy='15' r='7' fill='%23b0a99f'/%3E%3Cellipse cx='20' cy='34' rx='12' ry='10' fill='%23b0a99f'/%3E%3C/svg%3E";

/// Fields requested from `PlacesService.getDetails`.
pub const DETAIL_FIELDS: [&str; 4] = ["name", "rating", "user_ratings_total", "reviews"];

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DetailsRequest<'a> {
    pub place_id: &'a str,
    pub fields: &'a [&'a str],
}

#[derive(Debug, Clone, PartialEq, Deserialize, Default)]
pub struct PlaceDetails {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub rating: Option<f64>,
    #[serde(default)]
    pub user_ratings_total: Option<u32>,
    #[serde(default)]
    pub reviews: Option<Vec<Review>>,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Default)]
pub struct Review {
    #[serde(default)]
    pub author_name: Option<String>,
    #[serde(default)]
    pub rating: f64,
    #[serde(default)]
    pub relative_time_description: Option<String>,
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default)]
    pub profile_photo_url: Option<String>,
}

impl Review {
    pub fn author(&self) -> &str {
        match self.author_name.as_deref() {
            Some(name) if !name.is_empty() => name,
            _ => DEFAULT_AUTHOR,
        }
    }

    pub fn time(&self) -> &str {
        self.relative_time_description.as_deref().unwrap_or_default()
    }

    pub fn body(&self) -> &str {
        self.text.as_deref().unwrap_or_default()
    }

    pub fn avatar(&self) -> &str {
        match self.profile_photo_url.as_deref() {
            Some(url) if !url.is_empty() => url,
            _ => DEFAULT_AVATAR,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct RatingSummary {
    pub rating: f64,
    pub total: u32,
}

impl RatingSummary {
    pub fn rating_text(&self) -> String {
        format!("{:.1}", self.rating)
    }

    pub fn total_text(&self) -> String {
        format!("{} reviews on Google", self.total)
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub enum ReviewsView {
    #[default]
    Loading,
    Fallback,
    Loaded {
        summary: Option<RatingSummary>,
        reviews: Vec<Review>,
    },
}

impl ReviewsView {
    pub fn shows_loading(&self) -> bool {
        matches!(self, ReviewsView::Loading)
    }

    pub fn shows_fallback(&self) -> bool {
        matches!(self, ReviewsView::Fallback)
    }

    /// Every failure collapses into the static fallback block.
    pub fn from_result(result: Result<ReviewsView>) -> Self {
        match result {
            Ok(view) => view,
            Err(err) => {
                log::warn!("showing static reviews: {}", err);
                ReviewsView::Fallback
            }
        }
    }
}

/// Turns a `getDetails` callback into something renderable.
pub fn resolve(status: &str, place: Option<PlaceDetails>) -> Result<ReviewsView> {
    if status != PLACES_STATUS_OK {
        return Err(SiteError::PlacesStatus(status.to_string()));
    }
    let place = place.ok_or_else(|| SiteError::PlacesStatus("empty result".to_string()))?;

    let reviews = place.reviews.unwrap_or_default();
    if reviews.is_empty() {
        return Err(SiteError::NoReviews);
    }

    let summary = place.rating.map(|rating| RatingSummary {
        rating,
        total: place.user_ratings_total.unwrap_or(0),
    });

    Ok(ReviewsView::Loaded { summary, reviews })
}

/// Five stars, the first `round(rating)` filled.
pub fn stars(rating: f64) -> [bool; 5] {
    let filled = rating.round();
    let mut out = [false; 5];
    for (i, star) in out.iter_mut().enumerate() {
        *star = (i + 1) as f64 <= filled;
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn place(json: serde_json::Value) -> PlaceDetails {
        serde_json::from_value(json).expect("place fixture")
    }

    #[test]
    fn non_ok_status_falls_back() {
        let view = ReviewsView::from_result(resolve("REQUEST_DENIED", Some(PlaceDetails::default())));
        assert!(view.shows_fallback());
        assert!(!view.shows_loading());

        let view = ReviewsView::from_result(resolve(PLACES_STATUS_OK, None));
        assert!(view.shows_fallback());
    }

    #[test]
    fn zero_reviews_fall_back() {
        let details = place(serde_json::json!({ "name": "Workshop", "rating": 4.8, "reviews": [] }));
        assert_eq!(resolve(PLACES_STATUS_OK, Some(details)), Err(SiteError::NoReviews));

        let details = place(serde_json::json!({ "name": "Workshop" }));
        let view = ReviewsView::from_result(resolve(PLACES_STATUS_OK, Some(details)));
        assert!(view.shows_fallback());
        assert!(!view.shows_loading());
    }

    #[test]
    fn loaded_place_builds_summary_and_cards() {
        let details = place(serde_json::json!({
            "name": "Workshop",
            "rating": 4.66,
            "user_ratings_total": 37,
            "reviews": [
                {
                    "author_name": "Anita",
                    "rating": 5,
                    "relative_time_description": "a month ago",
                    "text": "Beautiful kitchen cabinets.",
                    "profile_photo_url": "https://example.com/a.png"
                },
                { "rating": 4 }
            ]
        }));

        let ReviewsView::Loaded { summary, reviews } = resolve(PLACES_STATUS_OK, Some(details)).unwrap() else {
            panic!("expected loaded view");
        };
        let summary = summary.expect("summary");
        assert_eq!(summary.rating_text(), "4.7");
        assert_eq!(summary.total_text(), "37 reviews on Google");

        assert_eq!(reviews.len(), 2);
        assert_eq!(reviews[0].author(), "Anita");
        assert_eq!(reviews[0].avatar(), "https://example.com/a.png");
        assert_eq!(reviews[1].author(), DEFAULT_AUTHOR);
        assert_eq!(reviews[1].avatar(), DEFAULT_AVATAR);
        assert_eq!(reviews[1].time(), "");
        assert_eq!(reviews[1].body(), "");
    }

    #[test]
    fn missing_total_reads_as_zero() {
        let details = place(serde_json::json!({ "rating": 5.0, "reviews": [{ "rating": 5 }] }));
        let ReviewsView::Loaded { summary, .. } = resolve(PLACES_STATUS_OK, Some(details)).unwrap() else {
            panic!("expected loaded view");
        };
        assert_eq!(summary.unwrap().total_text(), "0 reviews on Google");
    }

    #[test]
    fn markup_in_review_text_is_kept_verbatim() {
        let details = place(serde_json::json!({
            "reviews": [{ "author_name": "<b>x</b>", "rating": 1, "text": "<script>alert(1)</script>" }]
        }));
        let ReviewsView::Loaded { reviews, .. } = resolve(PLACES_STATUS_OK, Some(details)).unwrap() else {
            panic!("expected loaded view");
        };
        // Rendered through text nodes, so the raw string is what the reader sees.
        assert_eq!(reviews[0].body(), "<script>alert(1)</script>");
        assert_eq!(reviews[0].author(), "<b>x</b>");
    }

    #[test]
    fn stars_round_half_up() {
        assert_eq!(stars(0.0), [false; 5]);
        assert_eq!(stars(4.4), [true, true, true, true, false]);
        assert_eq!(stars(4.5), [true; 5]);
        assert_eq!(stars(2.0), [true, true, false, false, false]);
    }
}
