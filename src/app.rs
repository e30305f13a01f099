use yew::prelude::*;

use crate::components::{
    AccountPage, DomesticPage, HomePage, Layout, LoginPage, NotFoundPage, PackageDetailPage,
    PackagesPage, PanIndiaHotelsPage, RegisterPage, ResetPasswordPage, TourPackagesPage,
};
use crate::hooks::{use_session, SessionProvider};
use crate::router::{resolve_access, use_route, Redirect, Route, Router};

#[function_component(App)]
pub fn app() -> Html {
    html! {
        <Router>
            <SessionProvider>
                <Layout>
                    <Pages />
                </Layout>
            </SessionProvider>
        </Router>
    }
}

/// Picks the page for the current route, bouncing guarded routes first.
#[function_component(Pages)]
fn pages() -> Html {
    let route = use_route();
    let session = use_session();

    if let Some(target) = resolve_access(&route, session.is_logged_in()) {
        log::debug!("{} is not available, redirecting", route.to_path());
        return html! { <Redirect to={target} /> };
    }

    match route {
        Route::Home => html! { <HomePage /> },
        Route::Login => html! { <LoginPage /> },
        Route::Register => html! { <RegisterPage /> },
        Route::ResetPassword => html! { <ResetPasswordPage /> },
        Route::Account => html! { <AccountPage /> },
        Route::Packages => html! { <PackagesPage /> },
        Route::TourPackages { category } => html! { <TourPackagesPage {category} /> },
        Route::PackageDetail { code } => html! { <PackageDetailPage {code} /> },
        Route::Domestic => html! { <DomesticPage /> },
        Route::PanIndiaHotels => html! { <PanIndiaHotelsPage /> },
        Route::NotFound => html! { <NotFoundPage /> },
    }
}
