//! Environment variable validation
//!
//! `PSDKEEP_*` values that do not parse keep the configured value and
//! produce a warning naming the variable, the rejected value and the
//! accepted form.

use std::str::FromStr;

use super::loader::ConfigWarning;

/// Validator for one numeric environment variable
pub struct EnvVarValidator<'a> {
    var_name: &'a str,
    expected: &'a str,
}

impl<'a> EnvVarValidator<'a> {
    pub fn new(var_name: &'a str, expected: &'a str) -> Self {
        Self { var_name, expected }
    }

    /// Parse a trimmed value, or describe why it was rejected.
    pub fn parse<T: FromStr>(&self, value: &str) -> Result<T, ConfigWarning> {
        value
            .trim()
            .parse()
            .map_err(|_| ConfigWarning::InvalidEnvValue {
                var: self.var_name.to_string(),
                value: value.to_string(),
                expected: self.expected.to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_padded_numbers() {
        let validator = EnvVarValidator::new("PSDKEEP_WAIT_ATTEMPTS", "a whole number");
        assert_eq!(validator.parse::<u32>(" 3 "), Ok(3));
    }

    #[test]
    fn rejects_with_value_and_expected_form() {
        let validator = EnvVarValidator::new("PSDKEEP_WAIT_ATTEMPTS", "a whole number");
        assert_eq!(
            validator.parse::<u32>("-1"),
            Err(ConfigWarning::InvalidEnvValue {
                var: "PSDKEEP_WAIT_ATTEMPTS".to_string(),
                value: "-1".to_string(),
                expected: "a whole number".to_string(),
            })
        );
    }
}
