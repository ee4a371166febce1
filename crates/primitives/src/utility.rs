use regex::Regex;
use std::sync::LazyLock;
use validator::ValidationError;

static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[a-zA-Z0-9_+&*-]+(?:\.[a-zA-Z0-9_+&*-]+)*@(?:[a-zA-Z0-9-]+\.)+[a-zA-Z]{2,7}$")
        .expect("Invalid email regex")
});

/// An absent address is never valid.
pub fn is_email_valid(email: Option<&str>) -> bool {
    email.is_some_and(|e| EMAIL_RE.is_match(e))
}

pub fn validate_email(email: &str) -> Result<(), ValidationError> {
    if is_email_valid(Some(email)) {
        return Ok(());
    }

    let mut err = ValidationError::new("email_invalid");
    err.message = Some("Email Address is not valid".into());
    Err(err)
}
