//! Shutter speed parsing and the 180-degree rule.

use super::ensure_domain;
use crate::error::ExposureError;

/// Shutter speed for natural motion blur at a given frame rate.
///
/// ```text
/// t = 1 / (2 × fps)
/// ```
///
/// 25 fps gives 1/50 s, 24 fps gives 1/48 s.
pub fn recommended_shutter_speed(fps: f64) -> Result<f64, ExposureError> {
    let fps = ensure_domain("FPS", fps)?;
    let shutter_speed = 1.0 / (2.0 * fps);
    ensure_domain("recommended shutter speed", shutter_speed)
}

/// Display form of the recommended shutter speed, e.g. `"1/50"`.
///
/// The denominator is printed without a trailing `.0`, so fractional frame
/// rates keep their digits (`23.976` fps gives `"1/47.952"`).
pub fn shutter_fraction_label(fps: f64) -> Result<String, ExposureError> {
    let fps = ensure_domain("FPS", fps)?;
    Ok(format!("1/{}", 2.0 * fps))
}

/// Parse shutter speed input into seconds.
///
/// Accepts a decimal number (`"0.01"`) or a fraction (`"1/100"`). The text is
/// split at the first `/` only, so `"1/2/3"` is rejected rather than read as
/// `1/2`. Whitespace around either part is ignored.
///
/// Empty parts, non-numeric parts, a zero denominator and any result that is
/// not a positive finite number all yield [`ExposureError::MalformedFraction`].
pub fn parse_shutter_speed(text: &str) -> Result<f64, ExposureError> {
    let malformed = || ExposureError::MalformedFraction(text.to_string());

    let seconds = match text.split_once('/') {
        None => parse_part(text).ok_or_else(malformed)?,
        Some((numerator, denominator)) => {
            let numerator = parse_part(numerator).ok_or_else(malformed)?;
            let denominator = parse_part(denominator).ok_or_else(malformed)?;
            numerator / denominator
        }
    };

    if seconds.is_finite() && seconds > 0.0 {
        Ok(seconds)
    } else {
        Err(malformed())
    }
}

fn parse_part(part: &str) -> Option<f64> {
    part.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-12;

    #[test]
    fn test_recommended_shutter_at_25_fps() {
        assert_eq!(recommended_shutter_speed(25.0), Ok(0.02));
    }

    #[test]
    fn test_recommended_shutter_rejects_zero_fps() {
        assert!(recommended_shutter_speed(0.0).is_err());
        assert!(recommended_shutter_speed(-24.0).is_err());
        assert!(recommended_shutter_speed(f64::NAN).is_err());
    }

    #[test]
    fn test_recommended_shutter_tiny_fps_overflows() {
        assert!(recommended_shutter_speed(1e-320).is_err());
    }

    #[test]
    fn test_fraction_label() {
        assert_eq!(shutter_fraction_label(25.0).unwrap(), "1/50");
        assert_eq!(shutter_fraction_label(24.0).unwrap(), "1/48");
        assert_eq!(shutter_fraction_label(23.976).unwrap(), "1/47.952");
        assert!(shutter_fraction_label(0.0).is_err());
    }

    #[test]
    fn test_parse_fraction_and_decimal() {
        assert!((parse_shutter_speed("1/100").unwrap() - 0.01).abs() < EPSILON);
        assert!((parse_shutter_speed("0.01").unwrap() - 0.01).abs() < EPSILON);
        assert!((parse_shutter_speed(" 1 / 50 ").unwrap() - 0.02).abs() < EPSILON);
        assert_eq!(parse_shutter_speed("2").unwrap(), 2.0);
        assert_eq!(parse_shutter_speed("1.5/3").unwrap(), 0.5);
    }

    #[test]
    fn test_parse_rejects_malformed_input() {
        for text in ["abc", "", "/100", "1/", "1/x", "a/b", "1/2/3", "1/0", "0", "-1/50"] {
            assert_eq!(
                parse_shutter_speed(text),
                Err(ExposureError::MalformedFraction(text.to_string())),
                "{text:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_parse_rejects_non_finite_spellings() {
        assert!(parse_shutter_speed("inf").is_err());
        assert!(parse_shutter_speed("NaN").is_err());
        assert!(parse_shutter_speed("1/inf").is_err());
    }
}
