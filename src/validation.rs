use crate::error::ValidationError;
use crate::types::{BookingRequest, LoginForm, RegisterForm, ResetPasswordForm};

fn blank(value: &str) -> bool {
    value.trim().is_empty()
}

pub fn validate_login(form: &LoginForm) -> Result<(), ValidationError> {
    if blank(&form.username) || blank(&form.password) {
        return Err(ValidationError::MissingCredentials);
    }
    Ok(())
}

pub fn validate_register(form: &RegisterForm) -> Result<(), ValidationError> {
    if [&form.full_name, &form.email, &form.username, &form.password]
        .iter()
        .any(|field| blank(field))
    {
        return Err(ValidationError::MissingRegistrationFields);
    }
    if form.password != form.confirm_password {
        return Err(ValidationError::PasswordMismatch);
    }
    if !form.agree {
        return Err(ValidationError::TermsNotAccepted);
    }
    Ok(())
}

pub fn validate_reset_password(form: &ResetPasswordForm) -> Result<(), ValidationError> {
    if [&form.current_password, &form.new_password, &form.confirm_password]
        .iter()
        .any(|field| blank(field))
    {
        return Err(ValidationError::MissingPasswordFields);
    }
    if form.new_password != form.confirm_password {
        return Err(ValidationError::NewPasswordMismatch);
    }
    if blank(&form.user_id) {
        return Err(ValidationError::MissingUserId);
    }
    Ok(())
}

pub fn validate_booking(booking: &BookingRequest) -> Result<(), ValidationError> {
    let required = [
        &booking.package_code,
        &booking.first_guest_name,
        &booking.total_persons,
        &booking.check_in_date,
        &booking.check_out_date,
        &booking.meal_plan,
        &booking.mobile_no,
    ];
    if required.iter().any(|field| blank(field)) {
        return Err(ValidationError::MissingBookingFields);
    }
    // Date inputs yield ISO `YYYY-MM-DD`, which orders lexically.
    if booking.check_out_date.trim() < booking.check_in_date.trim() {
        return Err(ValidationError::CheckOutBeforeCheckIn);
    }
    if !booking.mobile_no.trim().chars().all(|c| c.is_ascii_digit()) {
        return Err(ValidationError::InvalidMobile);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn register_form() -> RegisterForm {
        RegisterForm {
            full_name: "Kavya Menon".to_string(),
            email: "kavya@example.com".to_string(),
            username: "kavya".to_string(),
            password: "secret1".to_string(),
            confirm_password: "secret1".to_string(),
            agree: true,
        }
    }

    fn booking() -> BookingRequest {
        BookingRequest {
            package_code: "KER05".to_string(),
            first_guest_name: "Arjun".to_string(),
            total_persons: "2".to_string(),
            check_in_date: "2026-12-20".to_string(),
            check_out_date: "2026-12-24".to_string(),
            meal_plan: "Breakfast".to_string(),
            mobile_no: "9876543210".to_string(),
            ..BookingRequest::default()
        }
    }

    #[test]
    fn test_login_requires_both_fields() {
        let mut form = LoginForm {
            username: "ravi".to_string(),
            password: String::new(),
        };
        assert_eq!(validate_login(&form), Err(ValidationError::MissingCredentials));
        form.password = "pw".to_string();
        assert_eq!(validate_login(&form), Ok(()));
        form.username = "   ".to_string();
        assert_eq!(validate_login(&form), Err(ValidationError::MissingCredentials));
    }

    #[test]
    fn test_register_checks_in_order() {
        assert_eq!(validate_register(&register_form()), Ok(()));

        let mut form = register_form();
        form.email.clear();
        form.agree = false;
        assert_eq!(
            validate_register(&form),
            Err(ValidationError::MissingRegistrationFields)
        );

        let mut form = register_form();
        form.confirm_password = "other".to_string();
        form.agree = false;
        assert_eq!(validate_register(&form), Err(ValidationError::PasswordMismatch));

        let mut form = register_form();
        form.agree = false;
        assert_eq!(validate_register(&form), Err(ValidationError::TermsNotAccepted));
    }

    #[test]
    fn test_reset_password() {
        let mut form = ResetPasswordForm {
            user_id: String::new(),
            current_password: "old".to_string(),
            new_password: "new".to_string(),
            confirm_password: "newer".to_string(),
        };
        assert_eq!(
            validate_reset_password(&form),
            Err(ValidationError::NewPasswordMismatch)
        );

        form.confirm_password = "new".to_string();
        assert_eq!(validate_reset_password(&form), Err(ValidationError::MissingUserId));

        form.user_id = "17".to_string();
        assert_eq!(validate_reset_password(&form), Ok(()));

        form.current_password.clear();
        assert_eq!(
            validate_reset_password(&form),
            Err(ValidationError::MissingPasswordFields)
        );
    }

    #[test]
    fn test_booking_required_fields() {
        assert_eq!(validate_booking(&booking()), Ok(()));

        let mut missing_meal = booking();
        missing_meal.meal_plan.clear();
        assert_eq!(
            validate_booking(&missing_meal),
            Err(ValidationError::MissingBookingFields)
        );

        // Optional fields may stay empty.
        let mut optional = booking();
        optional.extra_bed.clear();
        optional.additional_info.clear();
        assert_eq!(validate_booking(&optional), Ok(()));

        let mut zero_persons = booking();
        zero_persons.total_persons = "0".to_string();
        assert_eq!(validate_booking(&zero_persons), Ok(()));
    }

    #[test]
    fn test_booking_dates_and_mobile() {
        let mut reversed = booking();
        reversed.check_out_date = "2026-12-19".to_string();
        assert_eq!(
            validate_booking(&reversed),
            Err(ValidationError::CheckOutBeforeCheckIn)
        );

        let mut same_day = booking();
        same_day.check_out_date = same_day.check_in_date.clone();
        assert_eq!(validate_booking(&same_day), Ok(()));

        let mut bad_mobile = booking();
        bad_mobile.mobile_no = "+91 98765".to_string();
        assert_eq!(validate_booking(&bad_mobile), Err(ValidationError::InvalidMobile));
    }

    #[test]
    fn test_booking_reports_first_failure() {
        let mut both = booking();
        both.check_out_date = "2026-12-19".to_string();
        both.mobile_no = "98-765".to_string();
        assert_eq!(
            validate_booking(&both),
            Err(ValidationError::CheckOutBeforeCheckIn)
        );

        both.meal_plan.clear();
        assert_eq!(
            validate_booking(&both),
            Err(ValidationError::MissingBookingFields)
        );
    }
}
