use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use wasm_bindgen::JsCast;
use yew::platform::spawn_local;
use yew::prelude::*;

use super::{FormMessage, FormStatus, SubmitButton};
use crate::api::ApiClient;
use crate::types::{BookingRequest, MEAL_PLAN_OPTIONS, PERSON_COUNT_OPTIONS};
use crate::validation::validate_booking;

const BOOKING_SUCCESS: &str = "Booking submitted successfully!";
const BOOKING_FAILED: &str = "Booking failed. Please try again.";

const FIELD_STYLE: &str = "display:flex; flex-direction:column; gap:0.3em;";
const CONTROL_STYLE: &str =
    "padding:0.5em; border-radius:4px; border:1px solid #ccc; color:black; box-sizing:border-box;";

#[derive(Properties, PartialEq)]
pub struct BookingModalProps {
    pub package_code: AttrValue,
    pub on_close: Callback<()>,
}

/// Pulls `(name, value)` out of whichever form control fired the event.
fn control_value(e: &Event) -> Option<(String, String)> {
    let target = e.target()?;
    if let Some(input) = target.dyn_ref::<HtmlInputElement>() {
        return Some((input.name(), input.value()));
    }
    if let Some(select) = target.dyn_ref::<HtmlSelectElement>() {
        return Some((select.name(), select.value()));
    }
    target
        .dyn_ref::<HtmlTextAreaElement>()
        .map(|area| (area.name(), area.value()))
}

#[function_component(BookingModal)]
pub fn booking_modal(props: &BookingModalProps) -> Html {
    let booking = use_state(|| BookingRequest::for_package(&props.package_code));
    let status = use_state(|| FormStatus::Idle);

    let update = {
        let booking = booking.clone();
        move |e: &Event| match control_value(e) {
            Some((name, value)) => {
                let mut next = (*booking).clone();
                next.set(&name, value);
                booking.set(next);
            }
            None => log::warn!("change event from an unknown control"),
        }
    };
    let onchange = {
        let update = update.clone();
        Callback::from(move |e: Event| update(&e))
    };
    let oninput = Callback::from(move |e: InputEvent| update(&e));

    let onsubmit = {
        let booking = booking.clone();
        let status = status.clone();
        let package_code = props.package_code.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let request = (*booking).clone();
            if let Err(invalid) = validate_booking(&request) {
                status.set(FormStatus::Error(invalid.to_string()));
                return;
            }

            status.set(FormStatus::Submitting);
            let booking = booking.clone();
            let status = status.clone();
            let package_code = package_code.clone();
            spawn_local(async move {
                match ApiClient::default().book(&request).await {
                    Ok(()) => {
                        log::info!("booking submitted for {}", request.package_code);
                        booking.set(BookingRequest::for_package(&package_code));
                        status.set(FormStatus::Success(BOOKING_SUCCESS.to_string()));
                    }
                    Err(e) => {
                        log::warn!("booking failed: {}", e);
                        status.set(FormStatus::Error(e.user_message(BOOKING_FAILED)));
                    }
                }
            });
        })
    };

    let close = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };

    let text_input = |label: &'static str, name: &'static str, kind: &'static str, value: &str| {
        html! {
            <div style={FIELD_STYLE}>
                <label>{ label }</label>
                <input
                    type={kind}
                    {name}
                    value={value.to_string()}
                    oninput={oninput.clone()}
                    style={CONTROL_STYLE}
                />
            </div>
        }
    };

    let select = |label: &'static str, name: &'static str, options: &[&'static str], value: &str| {
        html! {
            <div style={FIELD_STYLE}>
                <label>{ label }</label>
                <select {name} onchange={onchange.clone()} style={CONTROL_STYLE}>
                    <option value="" selected={value.is_empty()}>{ "Select" }</option>
                    { for options.iter().map(|option| html! {
                        <option value={*option} selected={*option == value}>{ *option }</option>
                    }) }
                </select>
            </div>
        }
    };

    html! {
        <div style="position:fixed; inset:0; z-index:50; background:rgba(0,0,0,0.5); display:flex; justify-content:center; align-items:center; overflow-y:auto;">
            <div style="position:relative; width:95%; max-width:56em; max-height:90vh; overflow-y:auto; padding:1.5em; border-radius:10px; background:#083d56; color:white; box-sizing:border-box;">
                <button
                    onclick={close}
                    style="position:absolute; top:0.5em; right:0.8em; background:none; border:none; color:white; font-size:1.3em; cursor:pointer;"
                >
                    { "✖" }
                </button>
                <h2 style="text-align:center; margin:0 0 1em 0;">{ "Booking Now" }</h2>

                <form {onsubmit} style="display:grid; grid-template-columns:repeat(auto-fit, minmax(16em, 1fr)); gap:1em;">
                    { text_input("Booking code*", "package_code", "text", &booking.package_code) }
                    { text_input("First Guest Name *", "first_guest_name", "text", &booking.first_guest_name) }
                    { text_input("Check In Date *", "check_in_date", "date", &booking.check_in_date) }
                    { text_input("Check Out Date *", "check_out_date", "date", &booking.check_out_date) }
                    { text_input("Mobile No *", "mobile_no", "tel", &booking.mobile_no) }
                    { select("Total No. of Person *", "total_persons", &PERSON_COUNT_OPTIONS, &booking.total_persons) }
                    { select("Extra Bed", "extra_bed", &PERSON_COUNT_OPTIONS, &booking.extra_bed) }
                    { select("Child without Bed", "child_without_bed", &PERSON_COUNT_OPTIONS, &booking.child_without_bed) }
                    { select("Meal Plan *", "meal_plan", &MEAL_PLAN_OPTIONS, &booking.meal_plan) }

                    <div style={format!("{} grid-column:1 / -1;", FIELD_STYLE)}>
                        <label>{ "Additional Information" }</label>
                        <textarea
                            name="additional_info"
                            value={booking.additional_info.clone()}
                            oninput={oninput.clone()}
                            style={CONTROL_STYLE}
                        />
                    </div>

                    <div style="grid-column:1 / -1;">
                        <FormMessage status={(*status).clone()} />
                        <SubmitButton label="Submit" busy_label="Submitting..." busy={status.is_submitting()} />
                    </div>
                </form>
            </div>
        </div>
    }
}
