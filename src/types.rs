use serde::{Deserialize, Serialize};

use crate::parser::{opt_text, string_or_number};

/// A destination card on the location list.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct LocationSummary {
    #[serde(default, deserialize_with = "string_or_number")]
    pub id: String,
    #[serde(default, deserialize_with = "opt_text")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "string_or_number")]
    pub slug: String,
    #[serde(default, deserialize_with = "opt_text")]
    pub image: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Location {
    #[serde(default, deserialize_with = "string_or_number")]
    pub name: String,
    #[serde(default, deserialize_with = "opt_text")]
    pub image: Option<String>,
    // HTML fragment
    #[serde(default, deserialize_with = "opt_text")]
    pub description: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct PackageSummary {
    #[serde(default, deserialize_with = "string_or_number")]
    pub id: String,
    #[serde(default, deserialize_with = "string_or_number")]
    pub title: String,
    #[serde(default, deserialize_with = "opt_text")]
    pub image: Option<String>,
    #[serde(rename = "type", default, deserialize_with = "string_or_number")]
    pub package_type: String,
    #[serde(default, deserialize_with = "string_or_number")]
    pub package_code: String,
    #[serde(default, deserialize_with = "string_or_number")]
    pub price: String,
    #[serde(default, deserialize_with = "opt_text")]
    pub duration: Option<String>,
}

/// A location together with the packages offered there.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct LocationPackages {
    pub location: Location,
    pub packages: Vec<PackageSummary>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Hotel {
    #[serde(default, deserialize_with = "string_or_number")]
    pub hotel_name: String,
    #[serde(default, deserialize_with = "string_or_number")]
    pub hotel_star: String,
}

/// Full package record. The text fields named after policies and itinerary
/// carry HTML produced by the backend's editor.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct PackageDetail {
    #[serde(default, deserialize_with = "string_or_number")]
    pub title: String,
    #[serde(default, deserialize_with = "string_or_number")]
    pub package_code: String,
    #[serde(default, deserialize_with = "string_or_number")]
    pub price: String,
    #[serde(default, deserialize_with = "opt_text")]
    pub image: Option<String>,
    #[serde(default, deserialize_with = "string_or_number")]
    pub category: String,
    #[serde(rename = "type", default, deserialize_with = "string_or_number")]
    pub package_type: String,
    #[serde(default, deserialize_with = "opt_text")]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "opt_text")]
    pub meta_title: Option<String>,
    #[serde(default, deserialize_with = "opt_text")]
    pub meta_description: Option<String>,
    #[serde(default, deserialize_with = "opt_text")]
    pub day_details: Option<String>,
    #[serde(default, deserialize_with = "opt_text")]
    pub inclusion: Option<String>,
    #[serde(default, deserialize_with = "opt_text")]
    pub exclusion: Option<String>,
    #[serde(default, deserialize_with = "opt_text")]
    pub note: Option<String>,
    // The backend spells it this way.
    #[serde(default, deserialize_with = "opt_text", alias = "additional_charge")]
    pub addtional_charge: Option<String>,
    #[serde(default, deserialize_with = "opt_text")]
    pub booking_payment_policy: Option<String>,
    #[serde(default, deserialize_with = "opt_text")]
    pub booking_cancellation_policy: Option<String>,
    #[serde(default, deserialize_with = "string_or_number")]
    pub booking_validity: String,
    #[serde(default, deserialize_with = "string_or_number")]
    pub person_2: String,
    #[serde(default, deserialize_with = "string_or_number")]
    pub person_4: String,
    #[serde(default, deserialize_with = "string_or_number")]
    pub person_6: String,
    #[serde(default, deserialize_with = "string_or_number")]
    pub extra_bed: String,
    #[serde(default, deserialize_with = "string_or_number")]
    pub child_no_bed: String,
    #[serde(default, deserialize_with = "hotels")]
    pub hotels: Vec<Hotel>,
}

fn hotels<'de, D>(deserializer: D) -> Result<Vec<Hotel>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    Ok(Option::<Vec<Hotel>>::deserialize(deserializer)?.unwrap_or_default())
}

/// Form fields are sent as multipart fields, in this order.
pub trait FormFields {
    fn fields(&self) -> Vec<(&'static str, String)>;
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct LoginForm {
    pub username: String,
    pub password: String,
}

impl FormFields for LoginForm {
    fn fields(&self) -> Vec<(&'static str, String)> {
        vec![
            ("username", self.username.clone()),
            ("password", self.password.clone()),
        ]
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct RegisterForm {
    pub full_name: String,
    pub email: String,
    pub username: String,
    pub password: String,
    pub confirm_password: String,
    pub agree: bool,
}

impl FormFields for RegisterForm {
    fn fields(&self) -> Vec<(&'static str, String)> {
        vec![
            ("full_name", self.full_name.clone()),
            ("email", self.email.clone()),
            ("username", self.username.clone()),
            ("password", self.password.clone()),
            ("confirmPassword", self.confirm_password.clone()),
        ]
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ResetPasswordForm {
    pub user_id: String,
    pub current_password: String,
    pub new_password: String,
    pub confirm_password: String,
}

impl FormFields for ResetPasswordForm {
    fn fields(&self) -> Vec<(&'static str, String)> {
        vec![
            ("user_id", self.user_id.clone()),
            ("current_password", self.current_password.clone()),
            ("new_password", self.new_password.clone()),
            ("confirm_password", self.confirm_password.clone()),
        ]
    }
}

pub const PERSON_COUNT_OPTIONS: [&str; 7] = ["0", "1", "2", "3", "4", "5", "6"];

pub const MEAL_PLAN_OPTIONS: [&str; 4] = [
    "Room with no meal",
    "Breakfast",
    "Breakfast and Dinner",
    "Breakfast with lunch dinner",
];

#[derive(Clone, Debug, Default, PartialEq)]
pub struct BookingRequest {
    pub package_code: String,
    pub first_guest_name: String,
    pub total_persons: String,
    pub check_in_date: String,
    pub check_out_date: String,
    pub extra_bed: String,
    pub child_without_bed: String,
    pub meal_plan: String,
    pub mobile_no: String,
    pub additional_info: String,
}

impl BookingRequest {
    /// An empty booking for the given package.
    pub fn for_package(package_code: &str) -> Self {
        Self {
            package_code: package_code.to_string(),
            ..Self::default()
        }
    }

    /// Sets a field by its form name; unknown names are ignored.
    pub fn set(&mut self, name: &str, value: String) {
        match name {
            "package_code" => self.package_code = value,
            "first_guest_name" => self.first_guest_name = value,
            "total_persons" => self.total_persons = value,
            "check_in_date" => self.check_in_date = value,
            "check_out_date" => self.check_out_date = value,
            "extra_bed" => self.extra_bed = value,
            "child_without_bed" => self.child_without_bed = value,
            "meal_plan" => self.meal_plan = value,
            "mobile_no" => self.mobile_no = value,
            "additional_info" => self.additional_info = value,
            _ => log::warn!("unknown booking field: {}", name),
        }
    }
}

impl FormFields for BookingRequest {
    fn fields(&self) -> Vec<(&'static str, String)> {
        vec![
            ("package_code", self.package_code.clone()),
            ("first_guest_name", self.first_guest_name.clone()),
            ("total_persons", self.total_persons.clone()),
            ("check_in_date", self.check_in_date.clone()),
            ("check_out_date", self.check_out_date.clone()),
            ("extra_bed", self.extra_bed.clone()),
            ("child_without_bed", self.child_without_bed.clone()),
            ("meal_plan", self.meal_plan.clone()),
            ("mobile_no", self.mobile_no.clone()),
            ("additional_info", self.additional_info.clone()),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_register_uses_backend_field_names() {
        let form = RegisterForm {
            full_name: "Asha Rao".to_string(),
            email: "asha@example.com".to_string(),
            username: "asha".to_string(),
            password: "pw".to_string(),
            confirm_password: "pw".to_string(),
            agree: true,
        };
        let names: Vec<&str> = form.fields().iter().map(|(name, _)| *name).collect();
        assert_eq!(
            names,
            vec!["full_name", "email", "username", "password", "confirmPassword"]
        );
    }

    #[test]
    fn test_booking_set_and_reset() {
        let mut booking = BookingRequest::for_package("GOA-3N");
        booking.set("first_guest_name", "Ravi".to_string());
        booking.set("meal_plan", MEAL_PLAN_OPTIONS[1].to_string());
        booking.set("no_such_field", "x".to_string());
        assert_eq!(booking.first_guest_name, "Ravi");
        assert_eq!(booking.meal_plan, "Breakfast");

        let fields = booking.fields();
        assert_eq!(fields.len(), 10);
        assert_eq!(fields[0], ("package_code", "GOA-3N".to_string()));

        assert_eq!(
            BookingRequest::for_package(&booking.package_code),
            BookingRequest {
                package_code: "GOA-3N".to_string(),
                ..BookingRequest::default()
            }
        );
    }

    #[test]
    fn test_package_detail_tolerates_numbers_and_nulls() {
        let detail: PackageDetail = serde_json::from_str(
            r#"{
                "title": "Goa Beach Escape",
                "package_code": "GOA01",
                "price": 12999,
                "type": "Deluxe",
                "person_2": "24000",
                "note": null,
                "addtional_charge": "<p>GST extra</p>",
                "hotels": [{"hotel_name": "Sea View", "hotel_star": 4}]
            }"#,
        )
        .unwrap();
        assert_eq!(detail.price, "12999");
        assert_eq!(detail.person_2, "24000");
        assert_eq!(detail.note, None);
        assert_eq!(detail.package_type, "Deluxe");
        assert_eq!(detail.addtional_charge.as_deref(), Some("<p>GST extra</p>"));
        assert_eq!(detail.hotels[0].hotel_star, "4");
        assert!(detail.person_4.is_empty());
    }

    #[test]
    fn test_null_hotels_is_empty() {
        let detail: PackageDetail =
            serde_json::from_str(r#"{"title": "Kerala", "hotels": null}"#).unwrap();
        assert!(detail.hotels.is_empty());
    }
}
