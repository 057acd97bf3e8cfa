//! # Resolver Configuration
//!
//! Which annotation kinds count as `@Operation`, `@ApiResponses` and `@ApiResponse`.

use crate::defaults::kind;
use serde::Deserialize;

/// Kind names accepted for each annotation the resolver looks for.
///
/// Every list accepts the fully-qualified class name and the simple name by
/// default. Fields missing from a deserialized config keep their defaults.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ResolverConfig {
    /// Kinds treated as `@Operation`.
    pub operation_kinds: Vec<String>,
    /// Kinds treated as the grouped `@ApiResponses` wrapper.
    pub api_responses_kinds: Vec<String>,
    /// Kinds treated as a standalone `@ApiResponse`.
    pub api_response_kinds: Vec<String>,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            operation_kinds: kind_names(kind::OPERATION),
            api_responses_kinds: kind_names(kind::API_RESPONSES),
            api_response_kinds: kind_names(kind::API_RESPONSE),
        }
    }
}

fn kind_names(class_name: &str) -> Vec<String> {
    let simple = class_name.rsplit('.').next().unwrap_or(class_name);
    vec![class_name.to_string(), simple.to_string()]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_accepts_simple_and_qualified() {
        let cfg = ResolverConfig::default();
        assert_eq!(
            cfg.api_responses_kinds,
            vec![
                "io.swagger.v3.oas.annotations.responses.ApiResponses".to_string(),
                "ApiResponses".to_string()
            ]
        );
        assert!(cfg.operation_kinds.contains(&"Operation".to_string()));
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let cfg: ResolverConfig =
            serde_json::from_str(r#"{"operationKinds": ["com.acme.Doc"]}"#).unwrap();
        assert_eq!(cfg.operation_kinds, vec!["com.acme.Doc".to_string()]);
        assert_eq!(cfg.api_response_kinds, ResolverConfig::default().api_response_kinds);
    }
}
