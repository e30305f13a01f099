use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use yew::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Route {
    Home,
    Login,
    Register,
    ResetPassword,
    Account,
    Packages,
    TourPackages { category: String },
    PackageDetail { code: String },
    Domestic,
    PanIndiaHotels,
    NotFound,
}

impl Route {
    /// Maps a URL path to a route. Query strings, fragments and trailing
    /// slashes are ignored; the old misspelled `pakages` paths still resolve.
    /// Segments are percent-decoded.
    pub fn from_path(path: &str) -> Self {
        let path = path.split(['?', '#']).next().unwrap_or_default();
        let segments: Vec<String> = path
            .split('/')
            .filter(|s| !s.is_empty())
            .map(decode_segment)
            .collect();
        let segments: Vec<&str> = segments.iter().map(String::as_str).collect();
        match segments.as_slice() {
            [] => Route::Home,
            ["login"] => Route::Login,
            ["register"] => Route::Register,
            ["reset-password"] => Route::ResetPassword,
            ["account"] => Route::Account,
            ["packages"] | ["pakages"] => Route::Packages,
            ["domestic"] => Route::Domestic,
            ["pan-india-hotels"] => Route::PanIndiaHotels,
            ["package", code] => Route::PackageDetail {
                code: code.to_string(),
            },
            [category, "tour-packages"] | [category, "tour-pakages"] => Route::TourPackages {
                category: category.to_string(),
            },
            _ => Route::NotFound,
        }
    }

    pub fn to_path(&self) -> String {
        match self {
            Route::Home => "/".to_string(),
            Route::Login => "/login".to_string(),
            Route::Register => "/register".to_string(),
            Route::ResetPassword => "/reset-password".to_string(),
            Route::Account => "/account".to_string(),
            Route::Packages => "/packages".to_string(),
            Route::TourPackages { category } => {
                format!("/{}/tour-packages", encode_segment(category))
            }
            Route::PackageDetail { code } => format!("/package/{}", encode_segment(code)),
            Route::Domestic => "/domestic".to_string(),
            Route::PanIndiaHotels => "/pan-india-hotels".to_string(),
            Route::NotFound => "/not-found".to_string(),
        }
    }
}

fn is_unreserved(byte: u8) -> bool {
    byte.is_ascii_alphanumeric() || b"-_.!~*'()".contains(&byte)
}

/// Percent-encodes one path segment the way `encodeURIComponent` does.
pub fn encode_segment(segment: &str) -> String {
    let mut encoded = String::with_capacity(segment.len());
    for byte in segment.bytes() {
        if is_unreserved(byte) {
            encoded.push(byte as char);
        } else {
            encoded.push_str(&format!("%{:02X}", byte));
        }
    }
    encoded
}

/// Reverses `encode_segment`. Malformed escapes are kept as written, and a
/// segment that does not decode to UTF-8 is returned unchanged.
pub fn decode_segment(segment: &str) -> String {
    let bytes = segment.as_bytes();
    let mut decoded = Vec::with_capacity(bytes.len());
    let mut i = 0;
    while i < bytes.len() {
        let escaped = (bytes[i] == b'%')
            .then(|| segment.get(i + 1..i + 3))
            .flatten()
            .and_then(|hex| u8::from_str_radix(hex, 16).ok());
        match escaped {
            Some(byte) => {
                decoded.push(byte);
                i += 3;
            }
            None => {
                decoded.push(bytes[i]);
                i += 1;
            }
        }
    }
    String::from_utf8(decoded).unwrap_or_else(|_| segment.to_string())
}

/// Where a visitor should be sent instead of `route`, given whether a
/// session is stored. The account page needs one; the login page is
/// pointless with one.
pub fn resolve_access(route: &Route, logged_in: bool) -> Option<Route> {
    match route {
        Route::Account if !logged_in => Some(Route::Login),
        Route::Login if logged_in => Some(Route::Account),
        _ => None,
    }
}

#[derive(Clone, PartialEq)]
pub struct RouterContext {
    pub route: Route,
    pub navigate: Callback<Route>,
    pub redirect: Callback<Route>,
}

fn current_route() -> Route {
    web_sys::window()
        .and_then(|window| window.location().pathname().ok())
        .map(|path| Route::from_path(&path))
        .unwrap_or(Route::Home)
}

fn update_history(route: &Route, replace: bool) {
    let Some(window) = web_sys::window() else {
        return;
    };
    let path = route.to_path();
    let result = window.history().and_then(|history| {
        if replace {
            history.replace_state_with_url(&JsValue::NULL, "", Some(&path))
        } else {
            history.push_state_with_url(&JsValue::NULL, "", Some(&path))
        }
    });
    if let Err(e) = result {
        log::warn!("could not update history for {}: {:?}", path, e);
    }
    window.scroll_to_with_x_and_y(0.0, 0.0);
}

#[derive(Properties, PartialEq)]
pub struct RouterProps {
    pub children: Html,
}

#[function_component(Router)]
pub fn router(props: &RouterProps) -> Html {
    let route = use_state(current_route);

    // Back/forward buttons
    {
        let route = route.clone();
        use_effect_with((), move |_| {
            let listener = Closure::<dyn FnMut(web_sys::Event)>::new(move |_: web_sys::Event| {
                route.set(current_route());
            });
            let window = web_sys::window();
            if let Some(window) = &window {
                if let Err(e) = window
                    .add_event_listener_with_callback("popstate", listener.as_ref().unchecked_ref())
                {
                    log::warn!("could not listen for popstate: {:?}", e);
                }
            }
            move || {
                if let Some(window) = window {
                    let _ = window.remove_event_listener_with_callback(
                        "popstate",
                        listener.as_ref().unchecked_ref(),
                    );
                }
                drop(listener);
            }
        });
    }

    let navigate = {
        let route = route.clone();
        Callback::from(move |target: Route| {
            log::debug!("navigate to {}", target.to_path());
            update_history(&target, false);
            route.set(target);
        })
    };

    let redirect = {
        let route = route.clone();
        Callback::from(move |target: Route| {
            log::debug!("redirect to {}", target.to_path());
            update_history(&target, true);
            route.set(target);
        })
    };

    let context = RouterContext {
        route: (*route).clone(),
        navigate,
        redirect,
    };

    html! {
        <ContextProvider<RouterContext> context={context}>
            { props.children.clone() }
        </ContextProvider<RouterContext>>
    }
}

#[hook]
pub fn use_route() -> Route {
    use_context::<RouterContext>()
        .map(|ctx| ctx.route)
        .unwrap_or(Route::Home)
}

#[hook]
pub fn use_navigator() -> Callback<Route> {
    use_context::<RouterContext>()
        .map(|ctx| ctx.navigate)
        .unwrap_or_else(|| Callback::from(|route: Route| log::warn!("no router for {:?}", route)))
}

/// A link that navigates in-app instead of reloading the page.
#[derive(Properties, PartialEq)]
pub struct LinkProps {
    pub to: Route,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub children: Html,
}

#[function_component(Link)]
pub fn link(props: &LinkProps) -> Html {
    let navigate = use_navigator();
    let onclick = {
        let to = props.to.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            navigate.emit(to.clone());
        })
    };
    html! {
        <a href={props.to.to_path()} class={props.class.clone()} {onclick}>
            { props.children.clone() }
        </a>
    }
}

#[derive(Properties, PartialEq)]
pub struct RedirectProps {
    pub to: Route,
}

/// Replaces the current history entry with `to` once rendered.
#[function_component(Redirect)]
pub fn redirect(props: &RedirectProps) -> Html {
    let redirect = use_context::<RouterContext>().map(|ctx| ctx.redirect);
    use_effect_with(props.to.clone(), move |to| {
        if let Some(redirect) = redirect {
            redirect.emit(to.clone());
        }
        || ()
    });
    html! {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_static_paths() {
        assert_eq!(Route::from_path("/"), Route::Home);
        assert_eq!(Route::from_path(""), Route::Home);
        assert_eq!(Route::from_path("/login"), Route::Login);
        assert_eq!(Route::from_path("/login/"), Route::Login);
        assert_eq!(Route::from_path("/register?ref=home"), Route::Register);
        assert_eq!(Route::from_path("/reset-password"), Route::ResetPassword);
        assert_eq!(Route::from_path("/account#top"), Route::Account);
        assert_eq!(Route::from_path("/domestic"), Route::Domestic);
        assert_eq!(Route::from_path("/pan-india-hotels"), Route::PanIndiaHotels);
        assert_eq!(Route::from_path("/nowhere/at/all"), Route::NotFound);
    }

    #[test]
    fn test_parse_dynamic_paths() {
        assert_eq!(
            Route::from_path("/goa/tour-packages"),
            Route::TourPackages {
                category: "goa".to_string()
            }
        );
        assert_eq!(
            Route::from_path("/package/GOA-3N4D"),
            Route::PackageDetail {
                code: "GOA-3N4D".to_string()
            }
        );
        assert_eq!(Route::from_path("/package"), Route::NotFound);
    }

    #[test]
    fn test_legacy_spellings() {
        assert_eq!(Route::from_path("/pakages"), Route::Packages);
        assert_eq!(
            Route::from_path("/kerala/tour-pakages"),
            Route::TourPackages {
                category: "kerala".to_string()
            }
        );
    }

    #[test]
    fn test_paths_round_trip() {
        let routes = [
            Route::Home,
            Route::Login,
            Route::Packages,
            Route::TourPackages {
                category: "shimla".to_string(),
            },
            Route::PackageDetail {
                code: "SH1".to_string(),
            },
            Route::PanIndiaHotels,
        ];
        for route in routes {
            assert_eq!(Route::from_path(&route.to_path()), route);
        }
    }

    #[test]
    fn test_reserved_characters_survive_a_round_trip() {
        let detail = Route::PackageDetail {
            code: "GOA/3N".to_string(),
        };
        assert_eq!(detail.to_path(), "/package/GOA%2F3N");
        assert_eq!(Route::from_path(&detail.to_path()), detail);

        for category in ["goa?x", "new delhi", "a#b", "100%", "ladakh & leh"] {
            let route = Route::TourPackages {
                category: category.to_string(),
            };
            assert_eq!(Route::from_path(&route.to_path()), route);
        }
    }

    #[test]
    fn test_pathname_segments_are_decoded_once() {
        assert_eq!(
            Route::from_path("/new%20delhi/tour-packages"),
            Route::TourPackages {
                category: "new delhi".to_string()
            }
        );
        assert_eq!(
            Route::from_path("/package/K%C3%A9rala-1"),
            Route::PackageDetail {
                code: "Kérala-1".to_string()
            }
        );
    }

    #[test]
    fn test_segment_codec_edges() {
        assert_eq!(encode_segment("goa-3n_4d.(x)"), "goa-3n_4d.(x)");
        assert_eq!(encode_segment("é"), "%C3%A9");
        assert_eq!(decode_segment("50%"), "50%");
        assert_eq!(decode_segment("%zz1"), "%zz1");
        assert_eq!(decode_segment("%FF"), "%FF");
    }

    #[test]
    fn test_access_rules() {
        assert_eq!(resolve_access(&Route::Account, false), Some(Route::Login));
        assert_eq!(resolve_access(&Route::Account, true), None);
        assert_eq!(resolve_access(&Route::Login, true), Some(Route::Account));
        assert_eq!(resolve_access(&Route::Login, false), None);
        assert_eq!(resolve_access(&Route::ResetPassword, false), None);
        assert_eq!(resolve_access(&Route::Packages, false), None);
    }
}
