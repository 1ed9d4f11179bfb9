//! # Form Validation
//!
//! Client-side validation for every form that turns into a request. All
//! checks run before anything is sent; the returned strings are what the
//! screens display.

use shared::dto::auth::RegisterRequest;
use shared::dto::batch::MarketListingRequest;

/// Minimum password length accepted at registration.
pub const MIN_PASSWORD_LEN: usize = 6;

/// Lightweight email shape check: local part, `@`, and a dotted domain.
pub fn validate_email(email: &str) -> Result<(), String> {
    let email = email.trim();
    if email.is_empty() {
        return Err("Email is required".to_string());
    }
    let valid = match email.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty()
                && domain.contains('.')
                && !domain.starts_with('.')
                && !domain.ends_with('.')
        }
        None => false,
    };
    if valid {
        Ok(())
    } else {
        Err("Please enter a valid email address".to_string())
    }
}

/// Validate the login form.
pub fn validate_login(email: &str, password: &str) -> Result<(), String> {
    validate_email(email)?;
    if password.is_empty() {
        return Err("Password is required".to_string());
    }
    Ok(())
}

/// Validate the registration form. `confirm_password` must match the
/// request's password.
pub fn validate_registration(
    request: &RegisterRequest,
    confirm_password: &str,
) -> Result<(), String> {
    if request.username.trim().is_empty() {
        return Err("Username is required".to_string());
    }
    validate_email(&request.email)?;
    if request.password.len() < MIN_PASSWORD_LEN {
        return Err(format!(
            "Password must be at least {} characters",
            MIN_PASSWORD_LEN
        ));
    }
    if request.password != confirm_password {
        return Err("Passwords do not match".to_string());
    }
    if request.account_type.trim().is_empty() {
        return Err("Account type is required".to_string());
    }
    Ok(())
}

/// Validate the test request form fields.
pub fn validate_test_request(
    batch_id: &str,
    supplier: &str,
    date: &str,
    laboratory_email: &str,
) -> Result<(), String> {
    if batch_id.trim().is_empty() {
        return Err("Batch ID is required".to_string());
    }
    if supplier.trim().is_empty() {
        return Err("Supplier is required".to_string());
    }
    if date.trim().is_empty() {
        return Err("Date is required".to_string());
    }
    validate_email(laboratory_email).map_err(|_| "Please select a laboratory".to_string())?;
    Ok(())
}

/// Parse and validate the marketplace listing form. Both fields must be
/// positive numbers.
pub fn parse_marketplace_form(
    quantity: &str,
    price_per_kg: &str,
) -> Result<MarketListingRequest, String> {
    let quantity: f64 = quantity
        .trim()
        .parse()
        .map_err(|_| "Quantity must be a number".to_string())?;
    if !quantity.is_finite() || quantity <= 0.0 {
        return Err("Quantity must be greater than zero".to_string());
    }
    let price_per_kg: f64 = price_per_kg
        .trim()
        .parse()
        .map_err(|_| "Price must be a number".to_string())?;
    if !price_per_kg.is_finite() || price_per_kg <= 0.0 {
        return Err("Price must be greater than zero".to_string());
    }
    Ok(MarketListingRequest {
        quantity,
        price_per_kg,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn register_request() -> RegisterRequest {
        RegisterRequest {
            username: "alice".to_string(),
            email: "alice@coop.rw".to_string(),
            password: "secret1".to_string(),
            account_type: "cooperative".to_string(),
            ..RegisterRequest::default()
        }
    }

    #[test]
    fn accepts_plausible_emails() {
        assert!(validate_email("alice@coop.rw").is_ok());
        assert!(validate_email("  jean.bosco@example.com ").is_ok());
    }

    #[test]
    fn rejects_malformed_emails() {
        for bad in ["", "alice", "alice@", "@coop.rw", "alice@nodot", "a@.rw"] {
            assert!(validate_email(bad).is_err(), "accepted {:?}", bad);
        }
    }

    #[test]
    fn login_requires_both_fields() {
        assert!(validate_login("alice@coop.rw", "pw").is_ok());
        assert!(validate_login("alice@coop.rw", "").is_err());
        assert!(validate_login("", "pw").is_err());
    }

    #[test]
    fn registration_enforces_password_rules() {
        let mut request = register_request();
        assert!(validate_registration(&request, "secret1").is_ok());

        request.password = "short".to_string();
        assert!(validate_registration(&request, "short").is_err());

        request.password = "secret1".to_string();
        assert_eq!(
            validate_registration(&request, "different"),
            Err("Passwords do not match".to_string())
        );
    }

    #[test]
    fn registration_requires_username_and_type() {
        let mut request = register_request();
        request.username = "  ".to_string();
        assert!(validate_registration(&request, "secret1").is_err());

        let mut request = register_request();
        request.account_type = String::new();
        assert!(validate_registration(&request, "secret1").is_err());
    }

    #[test]
    fn test_request_requires_all_fields() {
        assert!(validate_test_request("B-1", "Nyagatare", "2025-06-01", "lab@x.rw").is_ok());
        assert!(validate_test_request("", "Nyagatare", "2025-06-01", "lab@x.rw").is_err());
        assert_eq!(
            validate_test_request("B-1", "Nyagatare", "2025-06-01", ""),
            Err("Please select a laboratory".to_string())
        );
    }

    #[test]
    fn marketplace_form_parses_positive_numbers() {
        let request = parse_marketplace_form("100", "250.5").unwrap();
        assert_eq!(request.quantity, 100.0);
        assert_eq!(request.price_per_kg, 250.5);
    }

    #[test]
    fn marketplace_form_rejects_bad_input() {
        assert!(parse_marketplace_form("abc", "250").is_err());
        assert!(parse_marketplace_form("0", "250").is_err());
        assert!(parse_marketplace_form("-5", "250").is_err());
        assert!(parse_marketplace_form("100", "0").is_err());
        assert!(parse_marketplace_form("100", "NaN").is_err());
    }
}
