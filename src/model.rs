use serde::{Deserialize, Serialize};

/// One documented error code from one source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorDetail {
    pub code: i64,
    pub alias: String,
    pub description: String,
}

/// Everything collected for one source, in page traversal order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorDetails {
    pub errors: Vec<ErrorDetail>,
}

impl ErrorDetail {
    pub fn new(code: i64, alias: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            code,
            alias: alias.into(),
            description: description.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_fields_in_record_order() {
        let details = ErrorDetails {
            errors: vec![ErrorDetail::new(
                0,
                "ERROR_SUCCESS",
                "The operation completed successfully.",
            )],
        };
        let json = serde_json::to_string(&details).unwrap();
        assert_eq!(
            json,
            r#"{"errors":[{"code":0,"alias":"ERROR_SUCCESS","description":"The operation completed successfully."}]}"#
        );
    }

    #[test]
    fn empty_container_is_an_empty_array() {
        let json = serde_json::to_string(&ErrorDetails::default()).unwrap();
        assert_eq!(json, r#"{"errors":[]}"#);
    }
}
