use yew::prelude::*;

use crate::router::{Link, Route};

#[function_component(NotFoundPage)]
pub fn not_found_page() -> Html {
    html! {
        <div style="min-height:50vh; display:flex; flex-direction:column; align-items:center; justify-content:center; gap:1em; color:#374151;">
            <h2 style="margin:0;">{ "Page not found" }</h2>
            <Link to={Route::Home}>{ "Back to home" }</Link>
        </div>
    }
}
