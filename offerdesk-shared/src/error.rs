/// Errors raised when a caller hands over a discriminant outside its documented set.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum OfferError {
    #[error("Unrecognized {field}: {value}")]
    UnrecognizedVariant {
        field: &'static str,
        value: String,
    },
}

impl OfferError {
    pub fn unrecognized(field: &'static str, value: &str) -> Self {
        OfferError::UnrecognizedVariant {
            field,
            value: value.to_string(),
        }
    }
}
