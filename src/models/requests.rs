use serde::{Deserialize, Serialize};
use validator::Validate;

/// Search parameters for the clinic search endpoint
///
/// All fields are optional; an empty string places no constraint on that
/// field. The availability window only applies when both `from` and `to`
/// are supplied.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct SearchParams {
    #[validate(length(max = 100))]
    #[serde(default)]
    pub name: String,
    #[validate(length(max = 100))]
    #[serde(default)]
    pub state: String,
    #[serde(default)]
    pub from: String,
    #[serde(default)]
    pub to: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_fields_default_to_empty() {
        let params: SearchParams = serde_json::from_str(r#"{"name":"Good Health"}"#).unwrap();
        assert_eq!(params.name, "Good Health");
        assert_eq!(params.state, "");
        assert_eq!(params.from, "");
        assert_eq!(params.to, "");
    }

    #[test]
    fn test_unknown_fields_are_ignored() {
        let params: SearchParams =
            serde_json::from_str(r#"{"state":"FL","somethingElse":true}"#).unwrap();
        assert_eq!(params.state, "FL");
    }

    #[test]
    fn test_overlong_name_fails_validation() {
        let params = SearchParams {
            name: "x".repeat(101),
            ..Default::default()
        };
        assert!(params.validate().is_err());
    }

    #[test]
    fn test_empty_params_pass_validation() {
        let params = SearchParams::default();
        assert!(params.validate().is_ok());
    }
}
