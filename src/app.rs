/// Main application entry point for ServiceHub.
/// Hosts the service catalog and wires the detail modal open/close state.
use chrono::NaiveDate;
use leptos::*;
use leptos_meta::*;
use leptos_router::*;

use crate::api::ReviewApi;
use crate::auth::BrowserTokens;
use crate::components::service_detail_modal::ServiceDetailModal;
use crate::components::star_rating::StarRating;
use crate::models::booking::Booking;
use crate::models::service::Service;

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Title text="ServiceHub" />
        <Router>
            <Routes>
                <Route path="" view=CatalogPage />
            </Routes>
        </Router>
    }
}

#[component]
fn CatalogPage() -> impl IntoView {
    // Selected entry drives whether the detail modal is open.
    let (selected, set_selected) = create_signal(None::<(Service, Booking)>);
    let catalog = completed_bookings();

    view! {
        <div class="catalog">
            <h1>"ServiceHub"</h1>
            <p class="catalog-subtitle">"Your completed bookings, ready to review"</p>
            <div class="service-grid">
                {catalog
                    .into_iter()
                    .map(|(service, booking)| {
                        let entry = (service.clone(), booking);
                        let price_label = service.price_label();
                        view! {
                            <div class="service-card">
                                <h2>{service.service_name.clone()}</h2>
                                <p class="card-category">{service.category.clone()}</p>
                                <StarRating
                                    rating=service.average_rating
                                    count=service.review_count
                                />
                                <p class="card-price">{price_label}</p>
                                <button
                                    class="btn btn-primary"
                                    on:click=move |_| set_selected.set(Some(entry.clone()))
                                >
                                    "View details"
                                </button>
                            </div>
                        }
                    })
                    .collect::<Vec<_>>()}
            </div>

            {move || {
                selected
                    .get()
                    .map(|(service, booking)| {
                        view! {
                            <ServiceDetailModal
                                service=Some(service)
                                booking=Some(booking)
                                on_close=Callback::new(move |_| set_selected.set(None))
                                transport=ReviewApi::new()
                                tokens=BrowserTokens
                            />
                        }
                    })
            }}
        </div>
    }
}

/// Completed bookings eligible for review. Stands in for the booking
/// history a backend would serve.
fn completed_bookings() -> Vec<(Service, Booking)> {
    vec![
        (
            Service {
                id: 1,
                service_name: "Plumbing".to_string(),
                price: Some(1499.0),
                category: "Home Repair".to_string(),
                location: Some("Mumbai".to_string()),
                provider_id: 9,
                provider_name: "Sharma Services".to_string(),
                description: Some(
                    "Leak fixes, pipe replacement and bathroom fittings.".to_string(),
                ),
                image_url: None,
                average_rating: Some(4.3),
                review_count: 12,
            },
            Booking {
                id: 42,
                completed_on: NaiveDate::from_ymd_opt(2025, 7, 14).unwrap(),
            },
        ),
        (
            Service {
                id: 2,
                service_name: "Deep Cleaning".to_string(),
                price: Some(3999.0),
                category: "Cleaning".to_string(),
                location: Some("Pune".to_string()),
                provider_id: 14,
                provider_name: "SparkleCrew".to_string(),
                description: None,
                image_url: None,
                average_rating: None,
                review_count: 0,
            },
            Booking {
                id: 57,
                completed_on: NaiveDate::from_ymd_opt(2025, 8, 2).unwrap(),
            },
        ),
        (
            Service {
                id: 3,
                service_name: "AC Servicing".to_string(),
                price: Some(899.5),
                category: "Appliances".to_string(),
                location: None,
                provider_id: 21,
                provider_name: "CoolAir Care".to_string(),
                description: Some("Split and window AC maintenance visits.".to_string()),
                image_url: None,
                average_rating: Some(3.8),
                review_count: 1,
            },
            Booking {
                id: 63,
                completed_on: NaiveDate::from_ymd_opt(2025, 8, 19).unwrap(),
            },
        ),
    ]
}
