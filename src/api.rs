use serde_json::Value;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{AbortSignal, FormData, Request, RequestInit, Response};

use crate::config::{AppConfig, CONFIG};
use crate::error::ApiError;
use crate::parser::{
    booking_outcome, login_user_record, parse_location_list, parse_location_packages,
    parse_package_detail, Envelope,
};
use crate::types::{
    BookingRequest, FormFields, LocationPackages, LocationSummary, LoginForm, PackageDetail,
    RegisterForm, ResetPasswordForm,
};

/// Thin client for the remote booking API. Reads go through the CORS proxy,
/// writes go straight to the backend.
#[derive(Clone, Debug, PartialEq)]
pub struct ApiClient {
    config: AppConfig,
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new(CONFIG.clone())
    }
}

impl ApiClient {
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }

    pub async fn list_locations(&self) -> Result<Vec<LocationSummary>, ApiError> {
        let url = self.config.proxied(&self.config.endpoint("locations/list"));
        let body = get_json(&url, None).await?;
        parse_location_list(body)
    }

    pub async fn location_packages(
        &self,
        slug: &str,
        signal: Option<AbortSignal>,
    ) -> Result<LocationPackages, ApiError> {
        let path = format!("locations/{}", path_segment(slug));
        let url = self.config.proxied(&self.config.endpoint(&path));
        let body = get_json(&url, signal.as_ref()).await?;
        parse_location_packages(body)
    }

    pub async fn package_detail(
        &self,
        code: &str,
        signal: Option<AbortSignal>,
    ) -> Result<PackageDetail, ApiError> {
        let path = format!("package/{}", path_segment(code));
        let url = self.config.proxied(&self.config.endpoint(&path));
        let body = get_json(&url, signal.as_ref()).await?;
        log::debug!("fetched package {}", code);
        parse_package_detail(body)
    }

    pub async fn register(&self, form: &RegisterForm) -> Result<Envelope, ApiError> {
        let url = self.config.endpoint("userRegistration");
        let (_, body) = post_form(&url, form).await?;
        Envelope::from_value(body)?.into_confirmed()
    }

    /// Returns the user record to keep as the session.
    pub async fn login(&self, form: &LoginForm) -> Result<Value, ApiError> {
        let url = self.config.endpoint("user/login");
        let (_, body) = post_form(&url, form).await?;
        let envelope = Envelope::from_value(body)?.into_result()?;
        Ok(login_user_record(&envelope))
    }

    /// Returns the server's confirmation message, if it sent one.
    pub async fn change_password(
        &self,
        form: &ResetPasswordForm,
    ) -> Result<Option<String>, ApiError> {
        let url = self.config.endpoint("user/change_password");
        let (_, body) = post_form(&url, form).await?;
        let envelope = Envelope::from_value(body)?.into_result()?;
        Ok(envelope.message)
    }

    pub async fn book(&self, booking: &BookingRequest) -> Result<(), ApiError> {
        let url = self.config.endpoint("booking");
        let (http_ok, body) = post_form(&url, booking).await?;
        booking_outcome(http_ok, Envelope::from_value(body)?)
    }
}

fn path_segment(segment: &str) -> String {
    String::from(js_sys::encode_uri_component(segment))
}

fn is_abort(err: &JsValue) -> bool {
    js_sys::Reflect::get(err, &JsValue::from_str("name"))
        .ok()
        .and_then(|name| name.as_string())
        .map(|name| name == "AbortError")
        .unwrap_or(false)
}

fn describe(err: &JsValue) -> String {
    err.as_string()
        .or_else(|| {
            js_sys::Reflect::get(err, &JsValue::from_str("message"))
                .ok()
                .and_then(|message| message.as_string())
        })
        .unwrap_or_else(|| format!("{:?}", err))
}

fn network_error(err: JsValue) -> ApiError {
    if is_abort(&err) {
        ApiError::Aborted
    } else {
        ApiError::Network(describe(&err))
    }
}

async fn send(request: &Request) -> Result<Response, ApiError> {
    let window = web_sys::window().ok_or_else(|| ApiError::Network("window not available".to_string()))?;
    let resp_value = JsFuture::from(window.fetch_with_request(request))
        .await
        .map_err(network_error)?;
    resp_value
        .dyn_into::<Response>()
        .map_err(|_| ApiError::Decode("fetch did not return a Response".to_string()))
}

async fn read_json(resp: &Response) -> Result<Value, ApiError> {
    let text = JsFuture::from(resp.text().map_err(network_error)?)
        .await
        .map_err(network_error)?;
    let raw = text.as_string().unwrap_or_default();
    serde_json::from_str(&raw).map_err(|e| ApiError::Decode(e.to_string()))
}

async fn get_json(url: &str, signal: Option<&AbortSignal>) -> Result<Value, ApiError> {
    let opts = RequestInit::new();
    opts.set_method("GET");
    if signal.is_some() {
        opts.set_signal(signal);
    }

    let request = Request::new_with_str_and_init(url, &opts).map_err(network_error)?;
    let resp = send(&request).await?;
    if !resp.ok() {
        log::warn!("GET {} failed with status {}", url, resp.status());
        return Err(ApiError::Status(resp.status()));
    }
    read_json(&resp).await
}

/// POSTs the form as multipart fields. The body is read whatever the HTTP
/// status, since the backend reports refusals inside the envelope.
async fn post_form(url: &str, form: &impl FormFields) -> Result<(bool, Value), ApiError> {
    let data = FormData::new().map_err(network_error)?;
    for (name, value) in form.fields() {
        data.append_with_str(name, &value).map_err(network_error)?;
    }

    let opts = RequestInit::new();
    opts.set_method("POST");
    opts.set_body(&data.into());

    let request = Request::new_with_str_and_init(url, &opts).map_err(network_error)?;
    let resp = send(&request).await?;
    let http_ok = resp.ok();
    match read_json(&resp).await {
        Ok(body) => Ok((http_ok, body)),
        Err(ApiError::Decode(reason)) if !http_ok => {
            log::warn!("POST {} returned {} with unreadable body: {}", url, resp.status(), reason);
            Err(ApiError::Status(resp.status()))
        }
        Err(e) => Err(e),
    }
}
