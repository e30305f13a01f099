use yew::prelude::*;

use super::{rich_text, BookingModal, ErrorNotice, HeroBanner, LoadingNotice};
use crate::api::ApiClient;
use crate::config::CONFIG;
use crate::hooks::{use_remote, RemoteState};
use crate::parser::package_image_url;
use crate::types::PackageDetail;

const CELL_STYLE: &str = "border:1px solid #d1d5db; padding:0.5em;";
const CARD_STYLE: &str =
    "padding:1em; background:white; border-radius:8px; box-shadow:0 2px 6px rgba(0,0,0,0.1);";
const POLICY_STYLE: &str =
    "padding:1.5em; background:#f3f4f6; border-radius:10px; box-shadow:0 2px 6px rgba(0,0,0,0.08);";

#[derive(Properties, PartialEq)]
pub struct PackageDetailProps {
    pub code: AttrValue,
}

#[function_component(PackageDetailPage)]
pub fn package_detail_page(props: &PackageDetailProps) -> Html {
    let state = use_remote(props.code.clone(), |code, signal| async move {
        ApiClient::default().package_detail(&code, signal).await
    });

    match state {
        RemoteState::Loading => html! { <LoadingNotice /> },
        RemoteState::Failed(message) => html! { <ErrorNotice {message} /> },
        RemoteState::Ready(package) => html! { <PackageDetailView {package} /> },
    }
}

#[derive(Properties, PartialEq)]
struct PackageDetailViewProps {
    package: PackageDetail,
}

fn price(amount: &str) -> String {
    format!("₹{}/-", amount)
}

#[function_component(PackageDetailView)]
fn package_detail_view(props: &PackageDetailViewProps) -> Html {
    let package = &props.package;
    let show_booking = use_state(|| false);

    let open_booking = {
        let show_booking = show_booking.clone();
        Callback::from(move |_: MouseEvent| show_booking.set(true))
    };
    let close_booking = {
        let show_booking = show_booking.clone();
        Callback::from(move |_: ()| show_booking.set(false))
    };

    let info_card = |heading: &'static str, body: Option<&str>| {
        html! {
            <div style={CARD_STYLE}>
                <h3 style="margin:0 0 0.5em 0;">{ heading }</h3>
                <div>{ rich_text(body) }</div>
            </div>
        }
    };

    html! {
        <div style="padding-bottom:2.5em;">
            <HeroBanner
                image={package_image_url(&CONFIG, package.image.as_deref())}
                title={package.title.clone()}
                subtitle={AttrValue::from(format!("{} • {}", package.category, package.package_type).to_uppercase())}
            />

            <div style="padding:1.5em 2.5em;">
                <div style="text-align:center; margin-bottom:2em;">
                    if let Some(meta_title) = &package.meta_title {
                        <h3 style="margin:0;">{ meta_title }</h3>
                    }
                    <div style="color:#374151; margin-top:0.5em;">{ rich_text(package.meta_description.as_deref()) }</div>
                </div>

                <div style="color:#374151; margin-bottom:1.5em;">{ rich_text(package.description.as_deref()) }</div>

                <div style="overflow-x:auto;">
                    <table style="width:100%; border-collapse:collapse;">
                        <thead style="background:#1e3a8a; color:white;">
                            <tr>
                                <th style={CELL_STYLE}>{ "Duration" }</th>
                                <th style={CELL_STYLE}>{ "Hotel Name" }</th>
                                <th style={CELL_STYLE}>{ "Star Rating" }</th>
                                <th style={CELL_STYLE}>{ "Room Type" }</th>
                                <th style={CELL_STYLE}>{ "Meal Plan" }</th>
                            </tr>
                        </thead>
                        <tbody>
                            { for package.hotels.iter().enumerate().map(|(i, hotel)| html! {
                                <tr key={i.to_string()}>
                                    <td style={CELL_STYLE}>{ "1 Night" }</td>
                                    <td style={CELL_STYLE}>{ &hotel.hotel_name }</td>
                                    <td style={CELL_STYLE}>{ format!("{}-Star", hotel.hotel_star) }</td>
                                    <td style={CELL_STYLE}>{ &package.package_type }</td>
                                    <td style={CELL_STYLE}>{ "Breakfast & Dinner" }</td>
                                </tr>
                            }) }
                        </tbody>
                    </table>
                </div>

                <div style="overflow-x:auto; margin-top:2em;">
                    <table style="width:100%; border-collapse:collapse; text-align:center;">
                        <thead style="background:#e5e7eb;">
                            <tr>
                                <th style={CELL_STYLE}>{ "Package Cost" }</th>
                                <th style={CELL_STYLE}>{ "2 Person" }</th>
                                <th style={CELL_STYLE}>{ "4 Person" }</th>
                                <th style={CELL_STYLE}>{ "6 Person" }</th>
                                <th style={CELL_STYLE}>{ "Extra Bed" }</th>
                                <th style={CELL_STYLE}>{ "Child Without Bed" }</th>
                                <th style={CELL_STYLE}>{ "Booking Validity" }</th>
                            </tr>
                        </thead>
                        <tbody>
                            <tr>
                                <td style={CELL_STYLE}>{ price(&package.price) }</td>
                                <td style={CELL_STYLE}>{ price(&package.person_2) }</td>
                                <td style={CELL_STYLE}>{ price(&package.person_4) }</td>
                                <td style={CELL_STYLE}>{ price(&package.person_6) }</td>
                                <td style={CELL_STYLE}>{ price(&package.extra_bed) }</td>
                                <td style={CELL_STYLE}>{ price(&package.child_no_bed) }</td>
                                <td style={CELL_STYLE}>{ &package.booking_validity }</td>
                            </tr>
                        </tbody>
                    </table>
                </div>

                <div style="display:flex; justify-content:center; gap:1em; margin-top:1.5em;">
                    <button
                        onclick={open_booking.clone()}
                        style="padding:0.6em 1em; background:#2563eb; color:white; border:none; border-radius:6px; cursor:pointer;"
                    >
                        { "CUSTOMIZE YOUR PACKAGE" }
                    </button>
                    <button
                        onclick={open_booking}
                        style="padding:0.6em 1em; background:#16a34a; color:white; border:none; border-radius:6px; cursor:pointer;"
                    >
                        { "BOOK NOW" }
                    </button>
                </div>

                <div style="display:grid; grid-template-columns:repeat(auto-fit, minmax(14em, 1fr)); gap:1.5em; margin-top:2.5em; font-size:0.9em;">
                    { info_card("Package Inclusion", package.inclusion.as_deref()) }
                    { info_card("Package Exclusion", package.exclusion.as_deref()) }
                    { info_card("Note", package.note.as_deref()) }
                    { info_card("Additional Charges", package.addtional_charge.as_deref()) }
                </div>
            </div>

            <div style="max-width:72em; margin:0 auto; padding:2.5em 1.5em;">
                <h2 style="text-align:center; margin:0 0 1.5em 0;">
                    { "DAY-WISE " }<span style="color:#2563eb;">{ "ITINERARY" }</span>
                </h2>
                <div style="color:#374151;">{ rich_text(package.day_details.as_deref()) }</div>
            </div>

            <div style="max-width:72em; margin:0 auto; padding:0 1.5em; display:flex; flex-direction:column; gap:2em;">
                <div style={POLICY_STYLE}>
                    <h3 style="text-align:center; margin:0 0 1em 0;">{ "BOOKING PAYMENT POLICY" }</h3>
                    { rich_text(package.booking_payment_policy.as_deref()) }
                </div>
                <div style={POLICY_STYLE}>
                    <h3 style="text-align:center; margin:0 0 1em 0;">{ "BOOKING CANCELLATION POLICY" }</h3>
                    { rich_text(package.booking_cancellation_policy.as_deref()) }
                </div>
            </div>

            if *show_booking {
                <BookingModal package_code={package.package_code.clone()} on_close={close_booking} />
            }
        </div>
    }
}
