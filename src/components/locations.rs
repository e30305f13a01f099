use yew::prelude::*;

use super::{EmptyNotice, ErrorNotice, HeroCarousel, LoadingNotice, Slide};
use crate::api::ApiClient;
use crate::config::CONFIG;
use crate::hooks::{use_remote, use_session, RemoteState};
use crate::parser::location_image_url;
use crate::router::{use_navigator, Route};
use crate::types::LocationSummary;

#[derive(Properties, PartialEq)]
pub struct LocationListProps {
    #[prop_or(AttrValue::Static("Domestic Packages"))]
    pub heading: AttrValue,
}

/// Destination cards. Choosing one opens its packages, or the login page
/// for visitors without a session.
#[function_component(LocationList)]
pub fn location_list(props: &LocationListProps) -> Html {
    let locations = use_remote((), |_, _| async move { ApiClient::default().list_locations().await });
    let session = use_session();
    let navigate = use_navigator();

    let body = match locations {
        RemoteState::Loading => html! { <LoadingNotice /> },
        RemoteState::Failed(message) => html! { <ErrorNotice message={message} /> },
        RemoteState::Ready(locations) if locations.is_empty() => {
            html! { <EmptyNotice message="No packages available right now." /> }
        }
        RemoteState::Ready(locations) => html! {
            <div style="display:grid; grid-template-columns:repeat(auto-fill, minmax(15em, 1fr)); gap:1.5em;">
                { for locations.into_iter().map(|location| {
                    let logged_in = session.is_logged_in();
                    let target = if logged_in {
                        Route::TourPackages { category: location.slug.clone() }
                    } else {
                        Route::Login
                    };
                    let key = location.id.clone();
                    html! {
                        <LocationCard key={key} {location} navigate={navigate.clone()} {target} {logged_in} />
                    }
                }) }
            </div>
        },
    };

    html! {
        <section style="padding:2em 1.5em;">
            <h2 style="text-align:center; font-size:1.8em; margin:0 0 1.5em 0;">{ &*props.heading }</h2>
            { body }
        </section>
    }
}

#[derive(Properties, PartialEq)]
struct LocationCardProps {
    location: LocationSummary,
    navigate: Callback<Route>,
    target: Route,
    logged_in: bool,
}

/// Call to action on a location card; visitors without a session are told
/// the card leads to the login page.
fn card_action_label(logged_in: bool) -> &'static str {
    if logged_in {
        "View More"
    } else {
        "Login to Check"
    }
}

#[function_component(LocationCard)]
fn location_card(props: &LocationCardProps) -> Html {
    let name = props
        .location
        .name
        .clone()
        .unwrap_or_else(|| "Unknown Destination".to_string());
    let image = location_image_url(&CONFIG, props.location.image.as_deref());
    let onclick = {
        let navigate = props.navigate.clone();
        let target = props.target.clone();
        Callback::from(move |_: MouseEvent| navigate.emit(target.clone()))
    };

    html! {
        <div {onclick} style="cursor:pointer; border-radius:10px; overflow:hidden; background:white; box-shadow:0 4px 10px rgba(0,0,0,0.1);">
            <img src={image} alt={name.clone()} style="width:100%; height:12em; object-fit:cover;" />
            <h3 style="text-align:center; margin:0.8em 0;">{ name }</h3>
            <div style="padding:0 1em 1em 1em;">
                <button style="width:100%; padding:0.5em 0; background:#0a2c53; color:white; border:none; border-radius:6px; cursor:pointer;">
                    { card_action_label(props.logged_in) }
                </button>
            </div>
        </div>
    }
}

#[function_component(PackagesPage)]
pub fn packages_page() -> Html {
    html! { <LocationList heading="Explore Our Packages" /> }
}

#[function_component(HomePage)]
pub fn home_page() -> Html {
    let slides = vec![
        Slide::new("https://www.travelguru.com/holiday-packages/images/goa.jpg", "Explore India With Us"),
        Slide::new(
            "https://img.freepik.com/free-photo/swimming-pool_74190-1977.jpg?semt=ais_hybrid&w=740&q=80",
            "Handpicked Hotels",
        ),
    ];
    html! {
        <>
            <HeroCarousel {slides} />
            <LocationList />
        </>
    }
}

#[function_component(DomesticPage)]
pub fn domestic_page() -> Html {
    let slides = vec![Slide::new(
        "https://www.travelguru.com/holiday-packages/images/goa.jpg",
        "Domestic Packages",
    )];
    html! {
        <>
            <HeroCarousel {slides} />
            <LocationList />
        </>
    }
}

#[function_component(PanIndiaHotelsPage)]
pub fn pan_india_hotels_page() -> Html {
    let slides = vec![Slide::new(
        "https://img.freepik.com/free-photo/swimming-pool_74190-1977.jpg?semt=ais_hybrid&w=740&q=80",
        "Pan India Hotels",
    )];
    html! {
        <>
            <HeroCarousel {slides} />
            <LocationList heading="Hotels Across India" />
        </>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_card_label_follows_session() {
        assert_eq!(card_action_label(true), "View More");
        assert_eq!(card_action_label(false), "Login to Check");
    }
}
