//! Unit tests for error handling

use super::*;
use std::io;

#[cfg(test)]
mod fpl_error_tests {
    use super::*;

    #[test]
    fn test_http_error_conversion() {
        // A relative URL fails while building the request, no network needed
        let reqwest_error = reqwest::Client::new()
            .get("not a url")
            .build()
            .unwrap_err();
        let fpl_error = FplError::from(reqwest_error);

        match fpl_error {
            FplError::Http(_) => (),
            _ => panic!("Expected Http error variant"),
        }
    }

    #[test]
    fn test_json_error_conversion() {
        let json_error = serde_json::from_str::<serde_json::Value>("invalid json").unwrap_err();
        let fpl_error = FplError::from(json_error);

        match fpl_error {
            FplError::Json(_) => (),
            _ => panic!("Expected Json error variant"),
        }
    }

    #[test]
    fn test_io_error_conversion() {
        let io_error = io::Error::new(io::ErrorKind::PermissionDenied, "read-only");
        let fpl_error = FplError::from(io_error);

        match fpl_error {
            FplError::Io(_) => (),
            _ => panic!("Expected Io error variant"),
        }
    }

    #[test]
    fn test_parse_int_error_conversion() {
        let parse_error = "twelve".parse::<u32>().unwrap_err();
        let fpl_error = FplError::from(parse_error);

        match fpl_error {
            FplError::InvalidId(_) => (),
            _ => panic!("Expected InvalidId error variant"),
        }
    }

    #[test]
    fn test_invalid_base_url_display() {
        let error = FplError::InvalidBaseUrl {
            url: "mailto:someone".to_string(),
            reason: "cannot be a base".to_string(),
        };

        let error_string = error.to_string();
        assert!(error_string.contains("mailto:someone"));
        assert!(error_string.contains("cannot be a base"));
    }

    #[test]
    fn test_error_debug_format() {
        let error = FplError::InvalidBaseUrl {
            url: "x".to_string(),
            reason: "y".to_string(),
        };
        let debug_string = format!("{:?}", error);
        assert!(debug_string.contains("InvalidBaseUrl"));
    }

    #[test]
    fn test_result_type_alias() {
        fn returns_ok() -> Result<u32> {
            Ok(7)
        }

        fn returns_err() -> Result<u32> {
            Err(FplError::from("x".parse::<u32>().unwrap_err()))
        }

        assert_eq!(returns_ok().unwrap(), 7);
        assert!(returns_err().is_err());
    }
}
