use web_sys::{Event, HtmlImageElement};
use yew::prelude::*;

use crate::places::{self, LoaderHooks};
use crate::reviews::{self, RatingSummary, Review, ReviewsView, DEFAULT_AVATAR};

fn star_row(rating: f64) -> Html {
    reviews::stars(rating)
        .iter()
        .map(|filled| {
            let class = if *filled { "star-filled" } else { "star-empty" };
            html! { <span {class}>{"★"}</span> }
        })
        .collect()
}

/// Swaps a broken reviewer photo for the placeholder, once.
fn avatar_fallback() -> Callback<Event> {
    Callback::from(|e: Event| {
        let Some(img) = e.target_dyn_into::<HtmlImageElement>() else {
            return;
        };
        if img.src() != DEFAULT_AVATAR {
            img.set_src(DEFAULT_AVATAR);
        }
    })
}

#[derive(Properties, PartialEq)]
struct ReviewCardProps {
    review: Review,
}

#[function_component(ReviewCard)]
fn review_card(props: &ReviewCardProps) -> Html {
    let review = &props.review;
    html! {
        <article class="review-card">
            <div class="review-header">
                <img class="review-avatar"
                    src={review.avatar().to_string()}
                    alt={review.author().to_string()}
                    loading="lazy"
                    onerror={avatar_fallback()} />
                <div class="review-author-info">
                    <div class="review-author-name">{review.author()}</div>
                    <div class="review-time">{review.time()}</div>
                </div>
            </div>
            <div class="review-stars">{star_row(review.rating)}</div>
            <p class="review-text">{review.body()}</p>
        </article>
    }
}

fn summary_bar(summary: &RatingSummary) -> Html {
    html! {
        <div id="reviews-summary" class="reviews-summary">
            <span id="overall-rating" class="overall-rating">{summary.rating_text()}</span>
            <span id="summary-stars" class="summary-stars">{star_row(summary.rating)}</span>
            <span id="total-reviews" class="total-reviews">{summary.total_text()}</span>
        </div>
    }
}

fn hidden_unless(visible: bool) -> Option<&'static str> {
    (!visible).then_some("display: none;")
}

/// Pre-authored testimonials shown whenever live reviews are unavailable.
fn fallback_block(visible: bool) -> Html {
    let quotes = [
        ("Meena R.", "They rebuilt our entire kitchen in three weeks and left the place spotless."),
        ("Arjun K.", "Solid teak wardrobe, perfect fit, exactly as drawn. Highly recommended."),
        ("Fatima S.", "Fixed every squeaky door and drawer in the house in one visit."),
    ];
    html! {
        <div id="reviews-fallback" class="reviews-fallback grid" style={hidden_unless(visible)}>
            { for quotes.iter().map(|(author, text)| html! {
                <blockquote class="review">
                    <div class="review-stars">{star_row(5.0)}</div>
                    <p>{*text}</p>
                    <cite>{*author}</cite>
                </blockquote>
            }) }
        </div>
    }
}

#[function_component(Reviews)]
pub fn reviews() -> Html {
    let view = use_state(ReviewsView::default);

    {
        let view = view.clone();
        use_effect_with_deps(
            move |_| {
                let on_done = Callback::from(move |next: ReviewsView| view.set(next));
                let on_error = {
                    let on_done = on_done.clone();
                    Callback::from(move |_| on_done.emit(ReviewsView::Fallback))
                };
                let on_ready = {
                    let on_done = on_done.clone();
                    Callback::from(move |_| places::load_reviews(on_done.clone()))
                };
                let hooks = LoaderHooks::install(on_ready, on_error);
                places::load_reviews(on_done);
                move || drop(hooks)
            },
            (),
        );
    }

    html! {
        <section id="reviews" class="reviews">
            <div class="container">
                <h2>{"What Our Clients Say"}</h2>
                <p class="muted">{"Real reviews from homes and offices we have worked on."}</p>
                <div class="section-line"></div>

                <div id="reviews-loading" class="reviews-loading" aria-busy="true"
                    style={hidden_unless(view.shows_loading())}>
                    <div class="skeleton-card"></div>
                    <div class="skeleton-card"></div>
                    <div class="skeleton-card"></div>
                </div>

                if let ReviewsView::Loaded { summary, reviews } = &*view {
                    if let Some(summary) = summary {
                        { summary_bar(summary) }
                    }
                    <div id="reviews-grid" class="reviews-grid">
                        { for reviews.iter().cloned().map(|review| html! { <ReviewCard {review} /> }) }
                    </div>
                    <p id="google-attr" class="google-attr">{"Reviews from Google"}</p>
                }

                // Kept in the document so it is tagged for reveal on first paint.
                { fallback_block(view.shows_fallback()) }
            </div>
        </section>
    }
}
