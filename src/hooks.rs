use std::future::Future;

use serde_json::Value;
use web_sys::{AbortController, AbortSignal};
use yew::platform::spawn_local;
use yew::prelude::*;

use crate::error::ApiError;
use crate::router::use_route;
use crate::session::{Session, SessionManager};

#[derive(Clone, PartialEq)]
pub struct SessionHandle {
    pub session: Option<Session>,
    pub sign_in: Callback<Value>,
    pub sign_out: Callback<()>,
}

impl SessionHandle {
    pub fn is_logged_in(&self) -> bool {
        self.session.is_some()
    }
}

#[derive(Properties, PartialEq)]
pub struct SessionProviderProps {
    pub children: Html,
}

/// Owns the in-memory copy of the stored session and re-reads storage on
/// every route change, so a login or logout in another tab shows up on the
/// next navigation. When storage cannot be read the in-memory copy stays.
#[function_component(SessionProvider)]
pub fn session_provider(props: &SessionProviderProps) -> Html {
    let session = use_state(|| SessionManager::browser().current());
    let route = use_route();

    {
        let session = session.clone();
        use_effect_with(route, move |_| {
            let refreshed = SessionManager::browser().refresh((*session).clone());
            if *session != refreshed {
                session.set(refreshed);
            }
            || ()
        });
    }

    let sign_in = {
        let session = session.clone();
        Callback::from(move |record: Value| {
            match SessionManager::browser().sign_in(record.clone()) {
                Ok(stored) => {
                    log::info!("session stored");
                    session.set(Some(stored));
                }
                Err(e) => {
                    log::error!("failed to store session: {}", e);
                    session.set(Some(Session::new(record)));
                }
            }
        })
    };

    let sign_out = {
        let session = session.clone();
        Callback::from(move |_: ()| {
            if let Err(e) = SessionManager::browser().sign_out() {
                log::error!("failed to clear session: {}", e);
            }
            log::info!("signed out");
            session.set(None);
        })
    };

    let handle = SessionHandle {
        session: (*session).clone(),
        sign_in,
        sign_out,
    };

    html! {
        <ContextProvider<SessionHandle> context={handle}>
            { props.children.clone() }
        </ContextProvider<SessionHandle>>
    }
}

#[hook]
pub fn use_session() -> SessionHandle {
    use_context::<SessionHandle>().unwrap_or_else(|| SessionHandle {
        session: SessionManager::browser().current(),
        sign_in: Callback::from(|_: Value| log::warn!("no session provider")),
        sign_out: Callback::from(|_: ()| log::warn!("no session provider")),
    })
}

#[derive(Clone, Debug, PartialEq)]
pub enum RemoteState<T> {
    Loading,
    Failed(String),
    Ready(T),
}

/// Runs `fetch` whenever `key` changes and tracks its outcome. The request
/// in flight is aborted when the key changes again or the caller unmounts.
#[hook]
pub fn use_remote<K, T, F, Fut>(key: K, fetch: F) -> RemoteState<T>
where
    K: PartialEq + Clone + 'static,
    T: Clone + 'static,
    F: FnOnce(K, Option<AbortSignal>) -> Fut + 'static,
    Fut: Future<Output = Result<T, ApiError>> + 'static,
{
    let state = use_state(|| RemoteState::<T>::Loading);

    {
        let state = state.clone();
        use_effect_with(key, move |key| {
            state.set(RemoteState::Loading);

            let controller = match AbortController::new() {
                Ok(controller) => Some(controller),
                Err(e) => {
                    log::warn!("AbortController unavailable: {:?}", e);
                    None
                }
            };
            let request = fetch(key.clone(), controller.as_ref().map(|c| c.signal()));

            spawn_local(async move {
                match request.await {
                    Ok(value) => state.set(RemoteState::Ready(value)),
                    Err(ApiError::Aborted) => log::debug!("request aborted"),
                    Err(e) => {
                        log::error!("request failed: {}", e);
                        state.set(RemoteState::Failed(e.to_string()));
                    }
                }
            });

            move || {
                if let Some(controller) = controller {
                    controller.abort();
                }
            }
        });
    }

    (*state).clone()
}
