/// Modal dialog showing a service's details and collecting a star rating
/// plus text review for a completed booking.
use leptos::*;
use std::time::Duration;
use wasm_bindgen_futures::spawn_local;

use crate::api::{self, ReviewTransport};
use crate::auth::TokenSource;
use crate::components::icons::{MapPinIcon, StarIcon, TagIcon, UserIcon};
use crate::components::star_rating::StarRating;
use crate::models::booking::Booking;
use crate::models::review::{ReviewDraft, ReviewTarget};
use crate::models::service::Service;
use crate::utils::panic_hook;

/// Outcome banner rendered under the review form in place of a blocking
/// alert; the calling UI stays interactive while it shows.
#[derive(Clone, PartialEq)]
pub enum SubmitStatus {
    Success(String),
    Failure(String),
}

const STATUS_BANNER_SECS: u64 = 4;

#[component]
pub fn ServiceDetailModal<T, A>(
    service: Option<Service>,
    booking: Option<Booking>,
    on_close: Callback<()>,
    /// Transport the submission goes over; `ReviewApi::new()` in production.
    transport: T,
    /// Bearer-token source; `BrowserTokens` in production.
    tokens: A,
) -> impl IntoView
where
    T: ReviewTransport + Clone + 'static,
    A: TokenSource + Clone + 'static,
{
    let Some(service) = service else {
        return ().into_view();
    };

    let (rating, set_rating) = create_signal(0u8);
    let (review, set_review) = create_signal(String::new());
    let (submitting, set_submitting) = create_signal(false);
    let (status, set_status) = create_signal(None::<SubmitStatus>);

    // Each banner gets a generation so an earlier attempt's clear timer
    // cannot wipe a newer attempt's message.
    let banner_epoch = store_value(0u64);
    let show_status = move |next: SubmitStatus| {
        let epoch = banner_epoch
            .try_update_value(|e| {
                *e += 1;
                *e
            })
            .unwrap_or(0);
        set_status.try_set(Some(next));
        spawn_local(async move {
            gloo_timers::future::sleep(Duration::from_secs(STATUS_BANNER_SECS)).await;
            if banner_epoch.try_get_value() == Some(epoch) {
                set_status.try_set(None);
            }
        });
    };

    let target = ReviewTarget::for_booking(&service, booking.as_ref());

    let handle_submit = move |_| {
        // One request in flight per modal instance.
        if submitting.get() {
            return;
        }
        let draft = ReviewDraft {
            rating: rating.get(),
            comment: review.get(),
        };

        // Preconditions fail before the in-flight flag is raised.
        if let Err(err) = api::validate_draft(&draft) {
            show_status(SubmitStatus::Failure(err.to_string()));
            return;
        }

        let transport = transport.clone();
        let tokens = tokens.clone();
        let target = target.clone();

        set_submitting.set(true);
        panic_hook::mark_submission_in_flight(true);
        spawn_local(async move {
            let outcome = api::submit_review(&transport, &tokens, &draft, &target).await;
            panic_hook::mark_submission_in_flight(false);
            // try_set: the modal may have been closed while the request ran.
            set_submitting.try_set(false);

            match outcome {
                Ok(message) => {
                    // Only a successful submission resets the draft.
                    set_rating.try_set(0);
                    set_review.try_set(String::new());
                    show_status(SubmitStatus::Success(message));
                }
                Err(err) => {
                    show_status(SubmitStatus::Failure(err.to_string()));
                }
            }
        });
    };

    let image = service.image_or_placeholder();
    let price_label = service.price_label();
    let location = service
        .location
        .clone()
        .unwrap_or_else(|| "Not specified".to_string());
    let description = service
        .description
        .clone()
        .unwrap_or_else(|| "No description provided for this service.".to_string());
    let completed_label = booking
        .as_ref()
        .map(|b| format!("Booking completed on {}", b.completed_on.format("%d %b %Y")));

    view! {
        <div class="modal-overlay" on:click=move |_| on_close.call(())>
            <div class="modal-content detail-modal" on:click=|ev| ev.stop_propagation()>
                <div class="detail-modal-header">
                    <img src=image alt=service.service_name.clone() class="detail-modal-img" />
                    <button class="close-btn" on:click=move |_| on_close.call(())>"×"</button>
                </div>

                <div class="detail-modal-body">
                    <div class="detail-title-section">
                        <h2>{service.service_name.clone()}</h2>
                        <p class="detail-price">{price_label}</p>
                    </div>

                    <StarRating rating=service.average_rating count=service.review_count />

                    <div class="detail-meta">
                        <span><TagIcon /> {service.category.clone()}</span>
                        <span><MapPinIcon /> {location}</span>
                        <span><UserIcon /> {service.provider_name.clone()}</span>
                    </div>

                    <p class="detail-description">{description}</p>

                    <div class="review-section">
                        <h3>"Give your rating"</h3>
                        {completed_label
                            .map(|label| view! { <p class="detail-booking-date">{label}</p> })}
                        <div class="star-input">
                            {(1..=5u8)
                                .map(|star| {
                                    view! {
                                        <StarIcon
                                            class=Signal::derive(move || {
                                                if star <= rating.get() {
                                                    "star-filled".to_string()
                                                } else {
                                                    "star-empty".to_string()
                                                }
                                            })
                                            on_click=Callback::new(move |_| set_rating.set(star))
                                        />
                                    }
                                })
                                .collect::<Vec<_>>()}
                        </div>

                        <textarea
                            class="review-input"
                            placeholder="Write your review..."
                            prop:value=review
                            on:input=move |ev| set_review.set(event_target_value(&ev))
                            disabled=submitting
                        ></textarea>

                        <button class="btn btn-primary" on:click=handle_submit disabled=submitting>
                            {move || if submitting.get() { "Submitting..." } else { "Submit Review" }}
                        </button>

                        {move || {
                            status
                                .get()
                                .map(|status| match status {
                                    SubmitStatus::Success(message) => {
                                        view! { <div class="submit-status submit-success">{message}</div> }
                                    }
                                    SubmitStatus::Failure(message) => {
                                        view! { <div class="submit-status submit-failure">{message}</div> }
                                    }
                                })
                        }}
                    </div>
                </div>

                <div class="modal-actions">
                    <button type="button" class="btn btn-secondary" on:click=move |_| on_close.call(())>
                        "Close"
                    </button>
                </div>
            </div>
        </div>
    }
    .into_view()
}
