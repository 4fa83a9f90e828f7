//! AWS SDK error categorization for user visibility.
//!
//! Distinguishes transient errors (throttling, timeouts, network issues) from
//! errors the user has to fix (missing log group, permissions, validation), so a
//! failed fetch can end with a one-line hint. The fetch itself never retries; the
//! AWS SDK's own retry policy is the only one applied.

use std::time::Duration;

use aws_sdk_cloudwatchlogs::error::{ProvideErrorMetadata, SdkError};
use aws_sdk_cloudwatchlogs::operation::describe_log_streams::DescribeLogStreamsError;
use aws_sdk_cloudwatchlogs::operation::get_log_events::GetLogEventsError;

/// Categorized error types for AWS SDK errors
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ErrorCategory {
    /// Request was throttled due to rate limiting
    Throttled {
        service: String,
        error_code: String,
        /// Hint from Retry-After header if available
        retry_after: Option<Duration>,
    },
    /// Request timed out
    Timeout {
        operation: String,
        duration: Option<Duration>,
    },
    /// Network connectivity issues
    NetworkError { message: String },
    /// AWS service temporarily unavailable
    ServiceUnavailable { service: String, message: String },
    /// The log group (or stream) does not exist
    NotFound { message: String },
    /// Credentials missing or the named profile could not be resolved
    Credentials { message: String },
    /// Non-retryable error (permissions, validation, etc.)
    NonRetryable {
        code: String,
        message: String,
        is_permission_error: bool,
    },
}

impl ErrorCategory {
    /// Returns true if repeating the same request later could succeed
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            ErrorCategory::Throttled { .. }
                | ErrorCategory::Timeout { .. }
                | ErrorCategory::NetworkError { .. }
                | ErrorCategory::ServiceUnavailable { .. }
        )
    }

    /// One-line message for stderr
    pub fn user_message(&self) -> String {
        match self {
            ErrorCategory::Throttled { service, .. } => {
                format!("{} rate limited", service)
            }
            ErrorCategory::Timeout { operation, .. } => {
                format!("{} timeout", operation)
            }
            ErrorCategory::NetworkError { .. } => "Network error".to_string(),
            ErrorCategory::ServiceUnavailable { service, .. } => {
                format!("{} unavailable", service)
            }
            ErrorCategory::NotFound { .. } => "Log group not found".to_string(),
            ErrorCategory::Credentials { .. } => {
                "No usable credentials for the selected profile".to_string()
            }
            ErrorCategory::NonRetryable {
                code,
                is_permission_error: true,
                ..
            } => format!("{} (check the profile's IAM permissions)", code),
            ErrorCategory::NonRetryable { code, .. } => code.clone(),
        }
    }

    /// Short label for log lines
    pub fn short_label(&self) -> &'static str {
        match self {
            ErrorCategory::Throttled { .. } => "throttled",
            ErrorCategory::Timeout { .. } => "timeout",
            ErrorCategory::NetworkError { .. } => "network",
            ErrorCategory::ServiceUnavailable { .. } => "unavailable",
            ErrorCategory::NotFound { .. } => "not-found",
            ErrorCategory::Credentials { .. } => "credentials",
            ErrorCategory::NonRetryable { .. } => "error",
        }
    }
}

/// Analyze an error and categorize it
///
/// Context layers name the log group and stream the user asked for, so only the
/// SDK error itself (or the root cause for anything else) is inspected.
pub fn categorize_error(error: &anyhow::Error, service: &str, operation: &str) -> ErrorCategory {
    categorize_sdk_error::<DescribeLogStreamsError>(error, service, operation)
        .or_else(|| categorize_sdk_error::<GetLogEventsError>(error, service, operation))
        .unwrap_or_else(|| {
            let root = format!("{}", error.root_cause());
            categorize_error_string(&root, service, operation)
        })
}

/// Categorize an `SdkError` for one operation, if that is what `error` wraps
fn categorize_sdk_error<E>(
    error: &anyhow::Error,
    service: &str,
    operation: &str,
) -> Option<ErrorCategory>
where
    SdkError<E>: ProvideErrorMetadata + std::fmt::Display + std::fmt::Debug + Send + Sync + 'static,
{
    let sdk_error = error.downcast_ref::<SdkError<E>>()?;

    let category = match sdk_error {
        SdkError::TimeoutError(_) => ErrorCategory::Timeout {
            operation: operation.to_string(),
            duration: None,
        },
        SdkError::DispatchFailure(failure) if failure.is_timeout() => ErrorCategory::Timeout {
            operation: operation.to_string(),
            duration: None,
        },
        SdkError::DispatchFailure(failure) if failure.is_io() => ErrorCategory::NetworkError {
            message: truncate_message(&format!("{:?}", failure), 100),
        },
        _ => match sdk_error.code() {
            Some(code) => categorize_error_code(
                code,
                sdk_error.message().unwrap_or_default(),
                service,
                operation,
            ),
            None => categorize_error_string(&format!("{:?}", sdk_error), service, operation),
        },
    };

    Some(category)
}

/// Categorize a service error code as returned by the API
pub fn categorize_error_code(
    code: &str,
    message: &str,
    service: &str,
    operation: &str,
) -> ErrorCategory {
    let detail = if message.is_empty() {
        code.to_string()
    } else {
        format!("{}: {}", code, message)
    };

    match code {
        "ThrottlingException" | "Throttling" | "TooManyRequestsException"
        | "RequestLimitExceeded" | "LimitExceededException" => ErrorCategory::Throttled {
            service: service.to_string(),
            error_code: code.to_string(),
            retry_after: None,
        },
        "ResourceNotFoundException" => ErrorCategory::NotFound {
            message: truncate_message(&detail, 200),
        },
        "ServiceUnavailableException" | "ServiceUnavailable" | "InternalServerException"
        | "InternalServerError" | "InternalFailure" => ErrorCategory::ServiceUnavailable {
            service: service.to_string(),
            message: truncate_message(&detail, 100),
        },
        "RequestTimeout" | "RequestTimeoutException" => ErrorCategory::Timeout {
            operation: operation.to_string(),
            duration: None,
        },
        _ => ErrorCategory::NonRetryable {
            code: code.to_string(),
            message: truncate_message(&detail, 200),
            is_permission_error: is_permission_code(code),
        },
    }
}

fn is_permission_code(text: &str) -> bool {
    text.contains("AccessDenied")
        || text.contains("UnrecognizedClientException")
        || text.contains("UnauthorizedOperation")
        || text.contains("InvalidClientTokenId")
        || text.contains("ExpiredToken")
        || text.contains("SignatureDoesNotMatch")
}

/// Categorize an error based on its string representation
///
/// Recognizable error codes are checked before the loose substring matches.
pub fn categorize_error_string(error_str: &str, service: &str, operation: &str) -> ErrorCategory {
    if let Some(code) = extract_error_code(error_str) {
        let category = categorize_error_code(&code, "", service, operation);
        if !matches!(
            category,
            ErrorCategory::NonRetryable {
                is_permission_error: false,
                ..
            }
        ) {
            return category;
        }
    }

    if error_str.contains("Throttling")
        || error_str.contains("TooManyRequestsException")
        || error_str.contains("RateExceeded")
    {
        return ErrorCategory::Throttled {
            service: service.to_string(),
            error_code: "Throttling".to_string(),
            retry_after: None, // SDK doesn't expose Retry-After easily
        };
    }

    if error_str.contains("ResourceNotFoundException") {
        return ErrorCategory::NotFound {
            message: truncate_message(error_str, 200),
        };
    }

    let is_permission_error = is_permission_code(error_str);
    if is_permission_error {
        return ErrorCategory::NonRetryable {
            code: extract_error_code(error_str).unwrap_or_else(|| "AccessDenied".to_string()),
            message: truncate_message(error_str, 200),
            is_permission_error,
        };
    }

    // Checked before network errors: a missing profile also fails at dispatch
    if error_str.contains("CredentialsNotLoaded")
        || error_str.contains("no providers in chain provided credentials")
        || error_str.contains("ProfileFile")
        || error_str.contains("could not find source profile")
    {
        return ErrorCategory::Credentials {
            message: truncate_message(error_str, 200),
        };
    }

    if error_str.contains("TimeoutError")
        || error_str.contains("timeout")
        || error_str.contains("timed out")
        || error_str.contains("deadline exceeded")
    {
        return ErrorCategory::Timeout {
            operation: operation.to_string(),
            duration: None,
        };
    }

    if error_str.contains("DispatchFailure")
        || error_str.contains("connection")
        || error_str.contains("Connection")
        || error_str.contains("network")
        || error_str.contains("Network")
        || error_str.contains("DNS")
        || error_str.contains("socket")
    {
        return ErrorCategory::NetworkError {
            message: truncate_message(error_str, 100),
        };
    }

    if error_str.contains("ServiceUnavailable")
        || error_str.contains("InternalServerError")
        || error_str.contains("InternalServerException")
        || error_str.contains("Service Unavailable")
    {
        return ErrorCategory::ServiceUnavailable {
            service: service.to_string(),
            message: truncate_message(error_str, 100),
        };
    }

    ErrorCategory::NonRetryable {
        code: extract_error_code(error_str).unwrap_or_else(|| "Error".to_string()),
        message: truncate_message(error_str, 200),
        is_permission_error: false,
    }
}

/// Extract AWS error code from error message if present
fn extract_error_code(error_str: &str) -> Option<String> {
    // Debug output of SDK errors: code: Some("ValidationException")
    if let Some(start) = error_str.find("code:") {
        let after_code = &error_str[start + 5..];
        if let Some(quote_start) = after_code.find('"') {
            let after_quote = &after_code[quote_start + 1..];
            if let Some(quote_end) = after_quote.find('"') {
                let code = &after_quote[..quote_end];
                if !code.is_empty() && code.len() < 50 {
                    return Some(code.to_string());
                }
            }
        }
    }

    // ErrorName: message
    if let Some(pos) = error_str.find(':') {
        let prefix = error_str[..pos].trim();
        if prefix.ends_with("Exception") || prefix.ends_with("Error") {
            let code = prefix.rsplit("::").next().unwrap_or(prefix);
            if !code.is_empty() && code.len() < 50 && !code.contains(char::is_whitespace) {
                return Some(code.to_string());
            }
        }
    }

    None
}

/// Truncate a message to max characters, adding ellipsis if truncated
fn truncate_message(msg: &str, max_len: usize) -> String {
    if msg.chars().count() <= max_len {
        msg.to_string()
    } else {
        let kept: String = msg.chars().take(max_len.saturating_sub(3)).collect();
        format!("{}...", kept)
    }
}
