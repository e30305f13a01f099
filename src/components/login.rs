use yew::platform::spawn_local;
use yew::prelude::*;

use super::{
    bind_text, FormMessage, FormStatus, HeroBanner, SubmitButton, FORM_CARD_STYLE,
    FORM_INPUT_STYLE, FORM_LABEL_STYLE, FORM_PAGE_STYLE, LINK_TEXT_STYLE,
};
use crate::api::ApiClient;
use crate::hooks::use_session;
use crate::router::{use_navigator, Route};
use crate::types::LoginForm;
use crate::validation::validate_login;

const LOGIN_BANNER: &str =
    "https://encrypted-tbn0.gstatic.com/images?q=tbn:ANd9GcQjWmiqweNJs456ZNquPcFecIqR8Z4iPS80KQ&s";

#[function_component(LoginPage)]
pub fn login_page() -> Html {
    let username = use_state(String::new);
    let password = use_state(String::new);
    let status = use_state(|| FormStatus::Idle);
    let session = use_session();
    let navigate = use_navigator();

    let onsubmit = {
        let username = username.clone();
        let password = password.clone();
        let status = status.clone();
        let sign_in = session.sign_in.clone();
        let navigate = navigate.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let form = LoginForm {
                username: (*username).clone(),
                password: (*password).clone(),
            };
            if let Err(invalid) = validate_login(&form) {
                status.set(FormStatus::Error(invalid.to_string()));
                return;
            }

            status.set(FormStatus::Submitting);
            let status = status.clone();
            let sign_in = sign_in.clone();
            let navigate = navigate.clone();
            spawn_local(async move {
                match ApiClient::default().login(&form).await {
                    Ok(record) => {
                        log::info!("logged in as {}", form.username);
                        status.set(FormStatus::Idle);
                        sign_in.emit(record);
                        navigate.emit(Route::Packages);
                    }
                    Err(e) => {
                        log::warn!("login failed: {}", e);
                        status.set(FormStatus::Error(
                            e.user_message("Invalid username or password."),
                        ));
                    }
                }
            });
        })
    };

    let to_register = Callback::from(move |_: MouseEvent| navigate.emit(Route::Register));

    html! {
        <>
            <HeroBanner image={LOGIN_BANNER} title="LOGIN" />
            <div style={FORM_PAGE_STYLE}>
                <form {onsubmit} style={FORM_CARD_STYLE}>
                    <p style="color:white; opacity:0.7; font-size:0.9em; text-align:center; margin:0 0 1.5em 0;">
                        { "Use your registered credentials to log in" }
                    </p>

                    <div style="margin-bottom:1.5em;">
                        <label style={FORM_LABEL_STYLE}>{ "Username" }<span style="color:#ef4444;">{ "*" }</span></label>
                        <input
                            type="text"
                            placeholder="Enter your username"
                            value={(*username).clone()}
                            oninput={bind_text(&username)}
                            style={FORM_INPUT_STYLE}
                        />
                    </div>

                    <div style="margin-bottom:1.5em;">
                        <label style={FORM_LABEL_STYLE}>{ "Password" }<span style="color:#ef4444;">{ "*" }</span></label>
                        <input
                            type="password"
                            placeholder="Enter your password"
                            value={(*password).clone()}
                            oninput={bind_text(&password)}
                            style={FORM_INPUT_STYLE}
                        />
                    </div>

                    <FormMessage status={(*status).clone()} />
                    <SubmitButton label="Login" busy_label="Logging in..." busy={status.is_submitting()} />

                    <p onclick={to_register} style={LINK_TEXT_STYLE}>{ "Register" }</p>
                </form>
            </div>
        </>
    }
}
