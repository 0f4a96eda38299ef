//! Environment variable expansion for configuration strings.

use crate::ConfigError;

/// Error returned when environment variable lookup fails.
struct LookupError {
    var_name: String,
}

/// Expand `${VAR}` and `${VAR:-default}` references in a string.
///
/// Bare `$VAR` is left untouched. A reference to an unset variable without a
/// default is an error naming both the variable and the config field.
pub(crate) fn expand_env(value: &str, field: &str) -> Result<String, ConfigError> {
    if !value.contains("${") {
        return Ok(value.to_owned());
    }

    shellexpand::env_with_context(value, |var| -> Result<Option<String>, LookupError> {
        std::env::var(var).map(Some).map_err(|_| LookupError {
            var_name: var.to_owned(),
        })
    })
    .map(std::borrow::Cow::into_owned)
    .map_err(|e| ConfigError::EnvVar {
        field: field.to_owned(),
        message: format!("${{{0}}} not set", e.cause.var_name),
    })
}

/// Expand environment references, then a leading `~`, in a path string.
pub(crate) fn expand_path(value: &str, field: &str) -> Result<String, ConfigError> {
    let expanded = expand_env(value, field)?;
    Ok(shellexpand::tilde(&expanded).into_owned())
}
