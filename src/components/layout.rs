use yew::prelude::*;

use crate::hooks::use_session;
use crate::router::{use_navigator, Link, Route};

const BRAND_COLOR: &str = "#0a2c53";

#[derive(Properties, PartialEq)]
pub struct LayoutProps {
    pub children: Html,
}

/// Header, collapsible sidebar and footer around a page.
#[function_component(Layout)]
pub fn layout(props: &LayoutProps) -> Html {
    let sidebar_open = use_state(|| false);

    let toggle = {
        let sidebar_open = sidebar_open.clone();
        Callback::from(move |_: MouseEvent| sidebar_open.set(!*sidebar_open))
    };
    let close = {
        let sidebar_open = sidebar_open.clone();
        Callback::from(move |_: MouseEvent| sidebar_open.set(false))
    };

    let content_margin = if *sidebar_open { "14em" } else { "4em" };

    html! {
        <div style="min-height:100vh; display:flex; flex-direction:column; font-family:Arial,sans-serif;">
            <Sidebar open={*sidebar_open} on_close={close.clone()} />
            <div style={format!("margin-top:72px; margin-left:{}; transition:margin-left 0.3s;", content_margin)}>
                <Header on_toggle={toggle} />
                <main>{ props.children.clone() }</main>
                <Footer />
            </div>
            if *sidebar_open {
                <div onclick={close} style="position:fixed; inset:0; background:rgba(0,0,0,0.4); z-index:30;"></div>
            }
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct HeaderProps {
    on_toggle: Callback<MouseEvent>,
}

#[function_component(Header)]
fn header(props: &HeaderProps) -> Html {
    let session = use_session();
    let navigate = use_navigator();

    let account_link = if session.is_logged_in() {
        html! { <Link to={Route::Account}>{ "My Account" }</Link> }
    } else {
        html! { <Link to={Route::Login}>{ "Login" }</Link> }
    };

    let go_home = Callback::from(move |_: MouseEvent| navigate.emit(Route::Home));

    html! {
        <header style={format!("position:fixed; top:0; left:0; right:0; height:72px; z-index:40; display:flex; align-items:center; justify-content:space-between; padding:0 1.5em; background:{}; color:white;", BRAND_COLOR)}>
            <div style="display:flex; align-items:center; gap:1em;">
                <button onclick={props.on_toggle.clone()} style="background:none; border:none; color:white; font-size:1.5em; cursor:pointer;">{ "☰" }</button>
                <span onclick={go_home} style="font-size:1.4em; font-weight:700; cursor:pointer;">{ "TravChap" }</span>
            </div>
            <nav style="display:flex; gap:1.5em;">
                <Link to={Route::Packages}>{ "Packages" }</Link>
                <Link to={Route::Domestic}>{ "Domestic" }</Link>
                <Link to={Route::PanIndiaHotels}>{ "Hotels" }</Link>
                { account_link }
            </nav>
        </header>
    }
}

#[derive(Properties, PartialEq)]
struct SidebarProps {
    open: bool,
    on_close: Callback<MouseEvent>,
}

#[function_component(Sidebar)]
fn sidebar(props: &SidebarProps) -> Html {
    let width = if props.open { "14em" } else { "4em" };
    let entries = [
        ("🏠", "Home", Route::Home),
        ("🧳", "Packages", Route::Packages),
        ("🇮🇳", "Domestic", Route::Domestic),
        ("🏨", "Pan India Hotels", Route::PanIndiaHotels),
        ("👤", "Account", Route::Account),
    ];

    html! {
        <aside style={format!("position:fixed; top:72px; bottom:0; left:0; width:{}; z-index:35; background:white; box-shadow:2px 0 6px rgba(0,0,0,0.1); transition:width 0.3s; overflow:hidden;", width)}>
            <ul onclick={props.on_close.clone()} style="list-style:none; margin:0; padding:1em 0.5em; display:flex; flex-direction:column; gap:1em;">
                { for entries.into_iter().map(|(icon, label, route)| html! {
                    <li>
                        <Link to={route}>
                            <span style="font-size:1.3em;">{ icon }</span>
                            if props.open {
                                <span style="margin-left:0.8em;">{ label }</span>
                            }
                        </Link>
                    </li>
                }) }
            </ul>
        </aside>
    }
}

#[function_component(Footer)]
fn footer() -> Html {
    html! {
        <footer style={format!("margin-top:3em; padding:2em; background:{}; color:#cbd5e1; text-align:center; font-size:0.9em;", BRAND_COLOR)}>
            <div style="display:flex; justify-content:center; gap:1.5em; margin-bottom:0.8em;">
                <Link to={Route::Packages}>{ "Tour Packages" }</Link>
                <Link to={Route::Register}>{ "Register" }</Link>
                <Link to={Route::Login}>{ "Login" }</Link>
            </div>
            { "© TravChap. All rights reserved." }
        </footer>
    }
}
