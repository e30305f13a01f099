use yew::platform::spawn_local;
use yew::prelude::*;

use super::{
    bind_text, FormMessage, FormStatus, HeroBanner, SubmitButton, FORM_CARD_STYLE,
    FORM_INPUT_STYLE, FORM_LABEL_STYLE, FORM_PAGE_STYLE, LINK_TEXT_STYLE,
};
use crate::api::ApiClient;
use crate::hooks::use_session;
use crate::router::{use_navigator, Route};
use crate::types::ResetPasswordForm;
use crate::validation::validate_reset_password;

const RESET_BANNER: &str = "https://images.unsplash.com/photo-1542744173-8e7e53415bb0";

#[function_component(ResetPasswordPage)]
pub fn reset_password_page() -> Html {
    let current_password = use_state(String::new);
    let new_password = use_state(String::new);
    let confirm_password = use_state(String::new);
    let status = use_state(|| FormStatus::Idle);
    let session = use_session();
    let navigate = use_navigator();

    let user_id = session
        .session
        .as_ref()
        .and_then(|s| s.user_id())
        .unwrap_or_default();

    let onsubmit = {
        let current_password = current_password.clone();
        let new_password = new_password.clone();
        let confirm_password = confirm_password.clone();
        let status = status.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let form = ResetPasswordForm {
                user_id: user_id.clone(),
                current_password: (*current_password).clone(),
                new_password: (*new_password).clone(),
                confirm_password: (*confirm_password).clone(),
            };
            if let Err(invalid) = validate_reset_password(&form) {
                status.set(FormStatus::Error(invalid.to_string()));
                return;
            }

            status.set(FormStatus::Submitting);
            let status = status.clone();
            spawn_local(async move {
                match ApiClient::default().change_password(&form).await {
                    Ok(message) => {
                        log::info!("password changed for user {}", form.user_id);
                        status.set(FormStatus::Success(
                            message.unwrap_or_else(|| "Password changed successfully!".to_string()),
                        ));
                    }
                    Err(e) => {
                        log::warn!("password change failed: {}", e);
                        status.set(FormStatus::Error(
                            e.user_message("Failed to change password."),
                        ));
                    }
                }
            });
        })
    };

    let to_login = Callback::from(move |_: MouseEvent| navigate.emit(Route::Login));

    let field = |label: &'static str, placeholder: &'static str, state: &UseStateHandle<String>| {
        html! {
            <div style="margin-bottom:1em;">
                <label style={FORM_LABEL_STYLE}>{ label }</label>
                <input
                    type="password"
                    {placeholder}
                    value={(**state).clone()}
                    oninput={bind_text(state)}
                    style={FORM_INPUT_STYLE}
                />
            </div>
        }
    };

    html! {
        <>
            <HeroBanner image={RESET_BANNER} title="Reset Password" />
            <div style={FORM_PAGE_STYLE}>
                <form {onsubmit} style={FORM_CARD_STYLE}>
                    <h3 style="color:white; font-size:1.5em; text-align:center; margin:0 0 1.5em 0;">{ "Change Your Password" }</h3>

                    { field("Current Password", "Enter your current password", &current_password) }
                    { field("New Password", "Enter new password", &new_password) }
                    { field("Confirm New Password", "Confirm new password", &confirm_password) }

                    <FormMessage status={(*status).clone()} />
                    <SubmitButton label="Update Password" busy_label="Updating..." busy={status.is_submitting()} />

                    <p onclick={to_login} style={LINK_TEXT_STYLE}>{ "Back to Login" }</p>
                </form>
            </div>
        </>
    }
}
