mod account;
mod booking_modal;
mod hero;
mod layout;
mod locations;
mod login;
mod not_found;
mod package_detail;
mod register;
mod reset_password;
mod status;
mod tour_packages;

pub use account::AccountPage;
pub use booking_modal::BookingModal;
pub use hero::{HeroBanner, HeroCarousel, Slide};
pub use layout::Layout;
pub use locations::{DomesticPage, HomePage, LocationList, PackagesPage, PanIndiaHotelsPage};
pub use login::LoginPage;
pub use not_found::NotFoundPage;
pub use package_detail::PackageDetailPage;
pub use register::RegisterPage;
pub use reset_password::ResetPasswordPage;
pub use status::{
    rich_text, EmptyNotice, ErrorNotice, FormMessage, FormStatus, LoadingNotice, SubmitButton,
};
pub use tour_packages::TourPackagesPage;

use web_sys::HtmlInputElement;
use yew::prelude::*;

/// Keeps a text state in sync with an `<input>`.
pub fn bind_text(state: &UseStateHandle<String>) -> Callback<InputEvent> {
    let state = state.clone();
    Callback::from(move |e: InputEvent| {
        let input: HtmlInputElement = e.target_unchecked_into();
        state.set(input.value());
    })
}

pub(crate) const FORM_CARD_STYLE: &str =
    "width:100%; max-width:28em; padding:2em; border-radius:10px; background:#0a2c53; box-shadow:0 10px 25px rgba(0,0,0,0.2); box-sizing:border-box;";
pub(crate) const FORM_LABEL_STYLE: &str =
    "display:block; color:white; font-size:0.9em; font-weight:500; margin-bottom:0.5em;";
pub(crate) const FORM_INPUT_STYLE: &str =
    "width:100%; padding:0.6em 1em; border:1px solid #ccc; border-radius:6px; box-sizing:border-box;";
pub(crate) const FORM_PAGE_STYLE: &str =
    "min-height:70vh; display:flex; align-items:center; justify-content:center; background:#f3f4f6; padding:3em 1em;";
pub(crate) const LINK_TEXT_STYLE: &str =
    "color:#93c5fd; cursor:pointer; text-align:center; margin-top:1.5em;";
