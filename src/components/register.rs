use web_sys::HtmlInputElement;
use yew::platform::spawn_local;
use yew::prelude::*;

use super::{FormMessage, FormStatus, HeroBanner, SubmitButton, FORM_PAGE_STYLE};
use crate::api::ApiClient;
use crate::router::{use_navigator, Route};
use crate::types::RegisterForm;
use crate::validation::validate_register;

const REGISTER_BANNER: &str = "https://images.unsplash.com/photo-1507525428034-b723cf961d3e";
const INPUT_STYLE: &str =
    "width:100%; margin-bottom:1em; padding:0.75em 1em; border:1px solid #d1d5db; border-radius:8px; box-sizing:border-box;";

fn text_field(
    form: &UseStateHandle<RegisterForm>,
    apply: fn(&mut RegisterForm, String),
) -> Callback<InputEvent> {
    let form = form.clone();
    Callback::from(move |e: InputEvent| {
        let input: HtmlInputElement = e.target_unchecked_into();
        let mut next = (*form).clone();
        apply(&mut next, input.value());
        form.set(next);
    })
}

#[function_component(RegisterPage)]
pub fn register_page() -> Html {
    let form = use_state(RegisterForm::default);
    let status = use_state(|| FormStatus::Idle);
    let navigate = use_navigator();

    let on_agree = {
        let form = form.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let mut next = (*form).clone();
            next.agree = input.checked();
            form.set(next);
        })
    };

    let onsubmit = {
        let form = form.clone();
        let status = status.clone();
        let navigate = navigate.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let submission = (*form).clone();
            if let Err(invalid) = validate_register(&submission) {
                status.set(FormStatus::Error(invalid.to_string()));
                return;
            }

            status.set(FormStatus::Submitting);
            let status = status.clone();
            let navigate = navigate.clone();
            spawn_local(async move {
                match ApiClient::default().register(&submission).await {
                    Ok(_) => {
                        log::info!("registered {}", submission.username);
                        status.set(FormStatus::Idle);
                        navigate.emit(Route::Login);
                    }
                    Err(e) => {
                        log::warn!("registration failed: {}", e);
                        status.set(FormStatus::Error(
                            e.user_message("Registration failed. Try again."),
                        ));
                    }
                }
            });
        })
    };

    let to_login = Callback::from(move |_: MouseEvent| navigate.emit(Route::Login));

    html! {
        <>
            <HeroBanner image={REGISTER_BANNER} title="Register" />
            <div style={FORM_PAGE_STYLE}>
                <form {onsubmit} style="width:100%; max-width:32em; padding:2em; background:white; border:1px solid #e5e7eb; border-radius:16px; box-shadow:0 10px 25px rgba(0,0,0,0.1); box-sizing:border-box;">
                    <h3 style="text-align:center; color:#1f2937; font-size:1.5em; margin:0 0 1.5em 0;">{ "Create Your Account" }</h3>

                    <input type="text" placeholder="Full Name" style={INPUT_STYLE}
                        value={form.full_name.clone()}
                        oninput={text_field(&form, |f, v| f.full_name = v)} />
                    <input type="email" placeholder="Email" style={INPUT_STYLE}
                        value={form.email.clone()}
                        oninput={text_field(&form, |f, v| f.email = v)} />
                    <input type="text" placeholder="Username" style={INPUT_STYLE}
                        value={form.username.clone()}
                        oninput={text_field(&form, |f, v| f.username = v)} />
                    <input type="password" placeholder="Password" style={INPUT_STYLE}
                        value={form.password.clone()}
                        oninput={text_field(&form, |f, v| f.password = v)} />
                    <input type="password" placeholder="Confirm Password" style={INPUT_STYLE}
                        value={form.confirm_password.clone()}
                        oninput={text_field(&form, |f, v| f.confirm_password = v)} />

                    <FormMessage status={(*status).clone()} />

                    <div style="display:flex; align-items:center; margin-bottom:1.5em;">
                        <input type="checkbox" id="agree" checked={form.agree} onchange={on_agree} style="margin-right:0.5em;" />
                        <label for="agree" style="font-size:0.9em; color:#4b5563;">
                            { "I agree to the " }
                            <a href="#" style="color:#2563eb;">{ "Terms & Conditions" }</a>
                        </label>
                    </div>

                    <SubmitButton label="Register" busy_label="Registering..." busy={status.is_submitting()} />

                    <p style="margin-top:1.5em; text-align:center; font-size:0.9em; color:#4b5563;">
                        { "Already have an account? " }
                        <a onclick={to_login} style="color:#2563eb; cursor:pointer;">{ "Login here" }</a>
                    </p>
                </form>
            </div>
        </>
    }
}
