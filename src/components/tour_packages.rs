use web_sys::{ScrollBehavior, ScrollIntoViewOptions};
use yew::prelude::*;

use super::{rich_text, EmptyNotice, ErrorNotice, HeroBanner, LoadingNotice};
use crate::api::ApiClient;
use crate::config::CONFIG;
use crate::hooks::{use_remote, RemoteState};
use crate::parser::{group_by_duration, location_image_url, package_image_url, PackageSection};
use crate::router::{use_navigator, Route};
use crate::types::{LocationPackages, PackageSummary};

#[derive(Properties, PartialEq)]
pub struct TourPackagesProps {
    pub category: AttrValue,
}

#[function_component(TourPackagesPage)]
pub fn tour_packages_page(props: &TourPackagesProps) -> Html {
    let state = use_remote(props.category.clone(), |category, signal| async move {
        ApiClient::default().location_packages(&category, signal).await
    });

    match state {
        RemoteState::Loading => html! { <LoadingNotice /> },
        RemoteState::Failed(message) => html! { <ErrorNotice {message} /> },
        RemoteState::Ready(data) => html! { <LocationPackagesView {data} /> },
    }
}

#[derive(Properties, PartialEq)]
struct LocationPackagesViewProps {
    data: LocationPackages,
}

fn scroll_to_section(id: &str) {
    let Some(element) = web_sys::window()
        .and_then(|window| window.document())
        .and_then(|document| document.get_element_by_id(id))
    else {
        log::debug!("section {} not rendered", id);
        return;
    };
    let options = ScrollIntoViewOptions::new();
    options.set_behavior(ScrollBehavior::Smooth);
    element.scroll_into_view_with_scroll_into_view_options(&options);
}

#[function_component(LocationPackagesView)]
fn location_packages_view(props: &LocationPackagesViewProps) -> Html {
    let location = &props.data.location;
    let sections = group_by_duration(&props.data.packages);
    let active = use_state(|| sections.first().map(|s| s.id.clone()));

    let select = {
        let active = active.clone();
        Callback::from(move |id: String| {
            scroll_to_section(&id);
            active.set(Some(id));
        })
    };

    let section_link = |section: &PackageSection| {
        let is_active = active.as_deref() == Some(section.id.as_str());
        let onclick = {
            let select = select.clone();
            let id = section.id.clone();
            Callback::from(move |_: MouseEvent| select.emit(id.clone()))
        };
        let style = if is_active {
            "cursor:pointer; padding:0.3em 0.6em; border-radius:999px; background:#2563eb; color:white;"
        } else {
            "cursor:pointer; padding:0.3em 0.6em; border-radius:999px; color:#374151;"
        };
        html! {
            <li key={section.id.clone()} {onclick} {style}>{ &section.label }</li>
        }
    };

    html! {
        <>
            <HeroBanner
                image={location_image_url(&CONFIG, location.image.as_deref())}
                title={format!("{} PACKAGES", location.name)}
            />

            <div style="margin:1.5em; padding:1em; background:white; border-radius:10px; box-shadow:0 4px 10px rgba(0,0,0,0.08);">
                <h2 style="margin:0 0 0.5em 0;">{ format!("About {}", location.name) }</h2>
                <div style="line-height:1.6;">{ rich_text(location.description.as_deref()) }</div>
            </div>

            if sections.is_empty() {
                <EmptyNotice message="No packages available for this location yet." />
            } else {
                <div style="display:flex; gap:1.5em; margin-top:2.5em; padding:0 1.5em;">
                    <aside style="width:25%; position:sticky; top:6em; align-self:flex-start; padding:1em; background:white; border-radius:10px; box-shadow:0 4px 10px rgba(0,0,0,0.08);">
                        <h2 style="font-size:1.1em; margin:0 0 0.8em 0;">{ "PACKAGES" }</h2>
                        <ul style="list-style:none; margin:0; padding:0; display:flex; flex-direction:column; gap:0.5em;">
                            { for sections.iter().map(section_link) }
                        </ul>
                    </aside>

                    <div style="flex:1; display:flex; flex-direction:column; gap:3em;">
                        { for sections.iter().map(|section| html! {
                            <section key={section.id.clone()} id={section.id.clone()} style="scroll-margin-top:6em;">
                                <h2 style="text-align:center; color:#2563eb; margin:0 0 1em 0;">{ &section.label }</h2>
                                <div style="display:grid; grid-template-columns:repeat(auto-fill, minmax(16em, 1fr)); gap:1.5em;">
                                    { for section.packages.iter().map(|package| html! {
                                        <PackageCard key={format!("{}-{}", package.id, package.package_code)} package={package.clone()} />
                                    }) }
                                </div>
                            </section>
                        }) }
                    </div>
                </div>
            }
        </>
    }
}

#[derive(Properties, PartialEq)]
struct PackageCardProps {
    package: PackageSummary,
}

#[function_component(PackageCard)]
fn package_card(props: &PackageCardProps) -> Html {
    let navigate = use_navigator();
    let package = &props.package;

    let onclick = {
        let code = package.package_code.clone();
        Callback::from(move |_: MouseEvent| navigate.emit(Route::PackageDetail { code: code.clone() }))
    };

    html! {
        <div style="padding:1em; background:white; border:1px solid #e5e7eb; border-radius:10px; box-shadow:0 2px 6px rgba(0,0,0,0.08);">
            <img
                src={package_image_url(&CONFIG, package.image.as_deref())}
                alt={package.title.clone()}
                style="width:100%; height:10em; object-fit:cover; border-radius:6px;"
            />
            <h3 style="text-align:center; margin:0.8em 0 0 0;">{ format!("{} PACKAGE", package.package_type) }</h3>
            <h3 style="margin:0.8em 0 0 0;">{ &package.title }</h3>
            <p style="font-size:0.85em; color:#6b7280; margin:0.3em 0 0 0;">{ format!("Code: {}", package.package_code) }</p>
            <div style="display:flex; flex-wrap:wrap; gap:0.6em; margin-top:0.8em; font-size:0.75em; color:#4b5563;">
                <span>{ "🍽 Meal" }</span>
                <span>{ "🏨 Hotel" }</span>
                <span>{ "🚗 Transport" }</span>
                <span>{ "👓 Sightseeing" }</span>
            </div>
            <h4 style="color:#2563eb; font-size:1.3em; margin:0.5em 0 0 0;">{ format!("₹{}/-", package.price) }</h4>
            <p style="font-size:0.85em; color:#6b7280; margin:0;">{ "Per Person" }</p>
            <button {onclick} style="margin-top:1em; width:100%; padding:0.6em 0; background:#2563eb; color:white; border:none; border-radius:6px; cursor:pointer;">
                { "VIEW DETAILS" }
            </button>
        </div>
    }
}
