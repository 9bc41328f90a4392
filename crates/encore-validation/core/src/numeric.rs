//! Numeric validation functions

pub const NUMBER_MESSAGE: &str = "Please enter a valid number";

/// Parse a finite number. Rejects `NaN` and infinities, which `f64::from_str` accepts.
pub fn parse_number(value: &str) -> Option<f64> {
    value.trim().parse::<f64>().ok().filter(|n| n.is_finite())
}

/// Number rule: value must parse, then fall within the optional bounds.
///
/// Bounds arrive as raw rule parameters. A bound that does not parse is
/// ignored, so `number:abc:10` behaves like `number::10`.
pub fn validate_number(value: &str, min: Option<&str>, max: Option<&str>) -> Result<(), String> {
    if value.is_empty() {
        return Ok(());
    }

    let number = parse_number(value).ok_or_else(|| NUMBER_MESSAGE.to_string())?;

    if let Some(min) = min {
        if let Some(bound) = parse_number(min) {
            if number < bound {
                return Err(format!("Must be at least {}", min));
            }
        }
    }

    if let Some(max) = max {
        if let Some(bound) = parse_number(max) {
            if number > bound {
                return Err(format!("Must not exceed {}", max));
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("50", Ok(()))]
    #[case("0", Ok(()))]
    #[case("100", Ok(()))]
    #[case("99.5", Ok(()))]
    #[case("150", Err("Must not exceed 100"))]
    #[case("-1", Err("Must be at least 0"))]
    #[case("fifty", Err(NUMBER_MESSAGE))]
    fn test_number_range(#[case] value: &str, #[case] expected: Result<(), &str>) {
        let expected = expected.map_err(str::to_string);
        assert_eq!(validate_number(value, Some("0"), Some("100")), expected);
    }

    #[test]
    fn test_non_finite_values_are_rejected() {
        assert!(validate_number("NaN", None, None).is_err());
        assert!(validate_number("inf", None, None).is_err());
    }

    #[test]
    fn test_malformed_bounds_are_ignored() {
        assert!(validate_number("1000000", Some("low"), Some("high")).is_ok());
        assert!(validate_number("5", Some(""), Some("10")).is_ok());
        assert!(validate_number("11", Some(""), Some("10")).is_err());
    }

    #[test]
    fn test_empty_passes() {
        assert!(validate_number("", Some("1"), Some("2")).is_ok());
    }
}
