use secrecy::{ExposeSecret, SecretString};
use serde::{Serialize, Serializer};

/// Card fields in the shape the charge endpoint expects. `Debug` never prints the PAN or CVV.
#[derive(Debug, Clone, Serialize)]
pub struct CardDetails {
    #[serde(serialize_with = "expose")]
    pub number: SecretString,
    #[serde(serialize_with = "expose")]
    pub cvv: SecretString,
    pub expiry_month: String,
    pub expiry_year: String,
}

impl CardDetails {
    pub fn new(
        number: impl Into<String>,
        cvv: impl Into<String>,
        expiry_month: impl Into<String>,
        expiry_year: impl Into<String>,
    ) -> Self {
        Self {
            number: SecretString::from(number.into()),
            cvv: SecretString::from(cvv.into()),
            expiry_month: expiry_month.into(),
            expiry_year: expiry_year.into(),
        }
    }
}

fn expose<S: Serializer>(secret: &SecretString, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(secret.expose_secret())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn serializes_plain_fields() {
        let card = CardDetails::new("4084084084084081", "408", "12", "31");
        assert_eq!(
            serde_json::to_value(&card).unwrap(),
            json!({
                "number": "4084084084084081",
                "cvv": "408",
                "expiry_month": "12",
                "expiry_year": "31"
            })
        );
    }

    #[test]
    fn debug_hides_number_and_cvv() {
        let card = CardDetails::new("4084084084084081", "408", "12", "31");
        let printed = format!("{:?}", card);
        assert!(!printed.contains("4084084084084081"));
        assert!(!printed.contains("408\""));
    }
}
