use yew::prelude::*;

use crate::hooks::use_session;
use crate::router::{use_navigator, Route};

const BUTTON_STYLE: &str =
    "width:100%; padding:0.6em 0; border-radius:8px; cursor:pointer; font-size:1em;";

#[function_component(AccountPage)]
pub fn account_page() -> Html {
    let session = use_session();
    let navigate = use_navigator();

    // The router redirects visitors without a session before we get here.
    let Some(user) = session.session.clone() else {
        return html! {};
    };

    let to_packages = {
        let navigate = navigate.clone();
        Callback::from(move |_: MouseEvent| navigate.emit(Route::Packages))
    };
    let logout = {
        let sign_out = session.sign_out.clone();
        let navigate = navigate.clone();
        Callback::from(move |_: MouseEvent| {
            sign_out.emit(());
            navigate.emit(Route::Login);
        })
    };
    let to_reset = Callback::from(move |_: MouseEvent| navigate.emit(Route::ResetPassword));

    html! {
        <div style="min-height:70vh; display:flex; align-items:center; justify-content:center; background:#f3f4f6; padding:1.5em;">
            <div style="width:100%; max-width:28em; padding:2em; background:white; border-radius:10px; box-shadow:0 10px 25px rgba(0,0,0,0.1);">
                <h2 style="text-align:center; color:#0a2c53; margin:0 0 1.5em 0;">{ "Your Account" }</h2>

                <div style="display:flex; flex-direction:column; gap:1em; color:#374151;">
                    <p style="margin:0;"><strong>{ "👤 Name: " }</strong>{ user.display_name() }</p>
                    <p style="margin:0;"><strong>{ "📞 Phone: " }</strong>{ user.phone() }</p>
                    <p style="margin:0;"><strong>{ "🆔 Username: " }</strong>{ user.username() }</p>
                    if let Some(mobile) = user.mobile() {
                        <p style="margin:0;"><strong>{ "📱 Mobile: " }</strong>{ mobile }</p>
                    }
                </div>

                <div style="margin-top:2em; display:flex; flex-direction:column; gap:1em;">
                    <button onclick={to_packages} style={format!("{} background:#0a2c53; color:white; border:none;", BUTTON_STYLE)}>
                        { "Go to Packages" }
                    </button>
                    <button onclick={logout} style={format!("{} background:white; color:#0a2c53; border:1px solid #0a2c53;", BUTTON_STYLE)}>
                        { "Logout" }
                    </button>
                    <p onclick={to_reset} style="color:#3b82f6; text-align:center; cursor:pointer; margin:0.5em 0 0 0;">
                        { "Change Password?" }
                    </p>
                </div>
            </div>
        </div>
    }
}
