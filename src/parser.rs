//! Lenient decoding of the backend's JSON. The backend is loose about types
//! (ids and prices arrive as numbers or strings, `status` as a bool or a
//! word), so everything funnels through `serde_json::Value` first.

use serde::{Deserialize, Deserializer};
use serde_json::{Map, Value};

use crate::config::{AppConfig, LOCATION_PLACEHOLDER_IMAGE, PACKAGE_PLACEHOLDER_IMAGE};
use crate::error::ApiError;
use crate::types::{Location, LocationPackages, LocationSummary, PackageDetail, PackageSummary};

pub const OTHERS_SECTION: &str = "Others";

/// The `{status, message?, data?}` wrapper around most responses.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Envelope {
    #[serde(default)]
    pub status: Value,
    #[serde(default, deserialize_with = "opt_text")]
    pub message: Option<String>,
    #[serde(default)]
    pub data: Option<Value>,
}

impl Envelope {
    pub fn from_value(value: Value) -> Result<Self, ApiError> {
        if !value.is_object() {
            return Err(ApiError::Decode("Invalid response format".to_string()));
        }
        serde_json::from_value(value).map_err(|e| ApiError::Decode(e.to_string()))
    }

    /// `status` is either `true` or the string `"success"`.
    pub fn is_success(&self) -> bool {
        match &self.status {
            Value::Bool(ok) => *ok,
            Value::String(word) => word == "success",
            _ => false,
        }
    }

    /// Only a literal `true`; registration does not accept `"success"`.
    pub fn is_confirmed(&self) -> bool {
        self.status == Value::Bool(true)
    }

    pub fn is_truthy(&self) -> bool {
        is_truthy(&self.status)
    }

    pub fn into_result(self) -> Result<Self, ApiError> {
        if self.is_success() {
            Ok(self)
        } else {
            Err(ApiError::Rejected(self.message))
        }
    }

    pub fn into_confirmed(self) -> Result<Self, ApiError> {
        if self.is_confirmed() {
            Ok(self)
        } else {
            Err(ApiError::Rejected(self.message))
        }
    }
}

/// JavaScript truthiness, which is what the backend's clients have always
/// tested `status` with.
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().map(|f| f != 0.0 && !f.is_nan()).unwrap_or(true),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// Display text for scalar values; `None` for null, arrays and objects.
pub fn value_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

pub fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.as_ref().and_then(value_text).unwrap_or_default())
}

/// Like [`string_or_number`] but empty text becomes `None`.
pub fn opt_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value
        .as_ref()
        .and_then(value_text)
        .filter(|text| !text.trim().is_empty()))
}

pub fn parse_location_list(value: Value) -> Result<Vec<LocationSummary>, ApiError> {
    let envelope = Envelope::from_value(value)?;
    let truthy = envelope.is_truthy();
    match envelope.data {
        Some(data @ Value::Array(_)) if truthy => {
            serde_json::from_value(data).map_err(|e| ApiError::Decode(e.to_string()))
        }
        _ => Err(ApiError::Decode("Invalid response format".to_string())),
    }
}

pub fn parse_location_packages(value: Value) -> Result<LocationPackages, ApiError> {
    let no_data = || ApiError::Decode("No data found for this location".to_string());
    let envelope = Envelope::from_value(value)?;
    if !envelope.is_truthy() {
        return Err(no_data());
    }
    let mut data = match envelope.data {
        Some(Value::Object(data)) => data,
        _ => return Err(no_data()),
    };

    let location = match data.remove("location") {
        Some(location @ Value::Object(_)) => serde_json::from_value::<Location>(location)
            .map_err(|e| ApiError::Decode(e.to_string()))?,
        _ => return Err(no_data()),
    };
    let packages = match data.remove("packages") {
        Some(packages @ Value::Array(_)) => serde_json::from_value::<Vec<PackageSummary>>(packages)
            .map_err(|e| ApiError::Decode(e.to_string()))?,
        _ => Vec::new(),
    };

    Ok(LocationPackages { location, packages })
}

/// The detail endpoint answers with the bare package object. A wrapped
/// `{status, data: {...}}` answer is accepted as well.
pub fn parse_package_detail(value: Value) -> Result<PackageDetail, ApiError> {
    let invalid = || ApiError::Decode("Invalid API response structure".to_string());

    let record = if has_title(&value) {
        value
    } else {
        match value {
            Value::Object(mut map) => match map.remove("data") {
                Some(data) if has_title(&data) => data,
                _ => return Err(invalid()),
            },
            _ => return Err(invalid()),
        }
    };

    serde_json::from_value(record).map_err(|e| ApiError::Decode(e.to_string()))
}

fn has_title(value: &Value) -> bool {
    value
        .get("title")
        .and_then(value_text)
        .map(|title| !title.trim().is_empty())
        .unwrap_or(false)
}

/// What a successful login stores as the session: `data.user`, else `data`,
/// else an empty object.
pub fn login_user_record(envelope: &Envelope) -> Value {
    let data = envelope.data.as_ref().filter(|data| is_truthy(data));
    data.and_then(|data| data.get("user").filter(|user| is_truthy(user)))
        .or(data)
        .cloned()
        .unwrap_or_else(|| Value::Object(Map::new()))
}

/// Bookings are judged by HTTP status first; a 2xx answer is only refused
/// when the envelope carries an explicit non-success `status`.
pub fn booking_outcome(http_ok: bool, envelope: Envelope) -> Result<(), ApiError> {
    if !http_ok || !(envelope.status.is_null() || envelope.is_success()) {
        return Err(ApiError::Rejected(envelope.message));
    }
    Ok(())
}

#[derive(Clone, Debug, PartialEq)]
pub struct PackageSection {
    pub id: String,
    pub label: String,
    pub packages: Vec<PackageSummary>,
}

/// Groups packages by duration, keeping the order in which durations first
/// appear. Packages without a duration land in "Others".
pub fn group_by_duration(packages: &[PackageSummary]) -> Vec<PackageSection> {
    let mut sections: Vec<PackageSection> = Vec::new();
    for package in packages {
        let label = package
            .duration
            .as_deref()
            .map(str::trim)
            .filter(|d| !d.is_empty())
            .unwrap_or(OTHERS_SECTION);
        match sections.iter_mut().find(|section| section.label == label) {
            Some(section) => section.packages.push(package.clone()),
            None => sections.push(PackageSection {
                id: format!("sec{}", sections.len() + 1),
                label: label.to_string(),
                packages: vec![package.clone()],
            }),
        }
    }
    sections
}

pub fn package_image_url(config: &AppConfig, image: Option<&str>) -> String {
    match image.map(str::trim).filter(|i| !i.is_empty()) {
        Some(image) => config.asset_url(image),
        None => PACKAGE_PLACEHOLDER_IMAGE.to_string(),
    }
}

pub fn location_image_url(config: &AppConfig, image: Option<&str>) -> String {
    match image.map(str::trim).filter(|i| !i.is_empty()) {
        Some(image) => config.location_image_url(image),
        None => LOCATION_PLACEHOLDER_IMAGE.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn summary(code: &str, duration: Option<&str>) -> PackageSummary {
        PackageSummary {
            package_code: code.to_string(),
            duration: duration.map(str::to_string),
            ..PackageSummary::default()
        }
    }

    #[test]
    fn test_registration_needs_literal_true() {
        let confirmed = |body: Value| Envelope::from_value(body).unwrap().into_confirmed();
        assert!(confirmed(json!({"status": true})).is_ok());
        assert_eq!(
            confirmed(json!({"status": "success", "message": "Registered"})),
            Err(ApiError::Rejected(Some("Registered".to_string())))
        );
        assert_eq!(
            confirmed(json!({"status": 1})),
            Err(ApiError::Rejected(None))
        );
        assert!(Envelope::from_value(json!({"status": "success"}))
            .unwrap()
            .into_result()
            .is_ok());
    }

    #[test]
    fn test_success_status_variants() {
        let ok = |status: Value| Envelope { status, ..Envelope::default() }.is_success();
        assert!(ok(json!(true)));
        assert!(ok(json!("success")));
        assert!(!ok(json!(false)));
        assert!(!ok(json!("error")));
        assert!(!ok(json!("Success")));
        assert!(!ok(json!(1)));
        assert!(!ok(Value::Null));
    }

    #[test]
    fn test_into_result_carries_server_message() {
        let envelope = Envelope::from_value(json!({
            "status": false,
            "message": "Username already exists"
        }))
        .unwrap();
        assert_eq!(
            envelope.into_result(),
            Err(ApiError::Rejected(Some("Username already exists".to_string())))
        );
    }

    #[test]
    fn test_non_object_envelope() {
        assert!(matches!(
            Envelope::from_value(json!([1, 2])),
            Err(ApiError::Decode(_))
        ));
    }

    #[test]
    fn test_location_list() {
        let locations = parse_location_list(json!({
            "status": true,
            "data": [
                {"id": 1, "name": "Goa", "slug": "goa", "image": "goa.png"},
                {"id": "2", "name": null, "slug": "kerala"}
            ]
        }))
        .unwrap();
        assert_eq!(locations.len(), 2);
        assert_eq!(locations[0].id, "1");
        assert_eq!(locations[0].image.as_deref(), Some("goa.png"));
        assert_eq!(locations[1].name, None);
        assert_eq!(locations[1].slug, "kerala");
    }

    #[test]
    fn test_location_list_rejects_bad_shapes() {
        for body in [
            json!({"status": false, "data": []}),
            json!({"status": true, "data": {"id": 1}}),
            json!({"status": true}),
        ] {
            assert_eq!(
                parse_location_list(body),
                Err(ApiError::Decode("Invalid response format".to_string()))
            );
        }
    }

    #[test]
    fn test_empty_location_list_is_ok() {
        assert_eq!(parse_location_list(json!({"status": 1, "data": []})), Ok(vec![]));
    }

    #[test]
    fn test_location_packages() {
        let result = parse_location_packages(json!({
            "status": true,
            "data": {
                "location": {"name": "Goa", "image": "goa.png", "description": "<p>Sun</p>"},
                "packages": [
                    {"id": 7, "title": "Goa Lite", "type": "Standard", "package_code": "GL1", "price": 9999, "duration": "3N/4D"}
                ]
            }
        }))
        .unwrap();
        assert_eq!(result.location.name, "Goa");
        assert_eq!(result.packages[0].price, "9999");
        assert_eq!(result.packages[0].package_type, "Standard");
    }

    #[test]
    fn test_location_packages_defaults_and_failures() {
        let result = parse_location_packages(json!({
            "status": "success",
            "data": {"location": {"name": "Ooty"}, "packages": null}
        }))
        .unwrap();
        assert!(result.packages.is_empty());

        let missing = parse_location_packages(json!({"status": true, "data": {"packages": []}}));
        assert_eq!(
            missing,
            Err(ApiError::Decode("No data found for this location".to_string()))
        );
    }

    #[test]
    fn test_package_detail_bare_and_wrapped() {
        let bare = parse_package_detail(json!({"title": "Manali Snow", "package_code": "MS2"})).unwrap();
        assert_eq!(bare.package_code, "MS2");

        let wrapped =
            parse_package_detail(json!({"status": true, "data": {"title": "Manali Snow"}})).unwrap();
        assert_eq!(wrapped.title, "Manali Snow");
    }

    #[test]
    fn test_package_detail_without_title() {
        for body in [json!({"status": false}), json!({"title": ""}), json!("oops")] {
            assert_eq!(
                parse_package_detail(body),
                Err(ApiError::Decode("Invalid API response structure".to_string()))
            );
        }
    }

    #[test]
    fn test_login_user_record_fallbacks() {
        let nested = Envelope::from_value(json!({
            "status": true,
            "data": {"user": {"id": 5, "username": "meera"}, "token": "t"}
        }))
        .unwrap();
        assert_eq!(login_user_record(&nested), json!({"id": 5, "username": "meera"}));

        let flat = Envelope::from_value(json!({"status": true, "data": {"user_id": "9"}})).unwrap();
        assert_eq!(login_user_record(&flat), json!({"user_id": "9"}));

        let empty = Envelope::from_value(json!({"status": "success"})).unwrap();
        assert_eq!(login_user_record(&empty), json!({}));
    }

    #[test]
    fn test_booking_outcome() {
        let envelope = |body: Value| Envelope::from_value(body).unwrap();
        assert_eq!(booking_outcome(true, envelope(json!({}))), Ok(()));
        assert_eq!(booking_outcome(true, envelope(json!({"status": true}))), Ok(()));
        assert_eq!(
            booking_outcome(true, envelope(json!({"status": false, "message": "Dates unavailable"}))),
            Err(ApiError::Rejected(Some("Dates unavailable".to_string())))
        );
        assert_eq!(
            booking_outcome(false, envelope(json!({"status": true}))),
            Err(ApiError::Rejected(None))
        );
    }

    #[test]
    fn test_group_by_duration_keeps_first_seen_order() {
        let packages = vec![
            summary("A", Some("3N/4D")),
            summary("B", None),
            summary("C", Some("5N/6D")),
            summary("D", Some("3N/4D")),
            summary("E", Some("  ")),
        ];
        let sections = group_by_duration(&packages);
        let labels: Vec<&str> = sections.iter().map(|s| s.label.as_str()).collect();
        assert_eq!(labels, vec!["3N/4D", "Others", "5N/6D"]);
        assert_eq!(sections[0].id, "sec1");
        assert_eq!(sections[2].id, "sec3");
        assert_eq!(sections[0].packages.len(), 2);
        assert_eq!(sections[1].packages.len(), 2);
    }

    #[test]
    fn test_image_urls_fall_back_to_placeholders() {
        let config = AppConfig::default();
        assert_eq!(package_image_url(&config, None), PACKAGE_PLACEHOLDER_IMAGE);
        assert_eq!(location_image_url(&config, Some("")), LOCATION_PLACEHOLDER_IMAGE);
        assert_eq!(
            package_image_url(&config, Some("uploads/p.jpg")),
            "https://demandonsale.com/trav-chap/uploads/p.jpg"
        );
    }
}
