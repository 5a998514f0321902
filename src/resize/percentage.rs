use crate::resize::codec::Dimensions;
use crate::resize::errors::ResizeError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Percentage(u8);

impl Percentage {
    pub const DEFAULT: Percentage = Percentage(33);

    /// Parses the raw form value.
    ///
    /// A missing or empty value falls back to [`Percentage::DEFAULT`]. Otherwise only the leading
    /// integer is considered, so `"12.5"` reads as 12 and `"50px"` as 50.
    pub fn parse(raw: Option<&str>) -> Result<Self, ResizeError> {
        let raw = match raw {
            None | Some("") => return Ok(Self::DEFAULT),
            Some(raw) => raw.trim(),
        };

        let (negative, unsigned) = match raw.as_bytes().first() {
            Some(b'-') => (true, &raw[1..]),
            Some(b'+') => (false, &raw[1..]),
            _ => (false, raw),
        };
        let digits_len = unsigned
            .bytes()
            .take_while(|byte| byte.is_ascii_digit())
            .count();
        if digits_len == 0 || negative {
            return Err(ResizeError::InvalidPercentage);
        }

        match unsigned[..digits_len].parse::<u64>() {
            Ok(value @ 1..=100) => Ok(Self(value as u8)),
            _ => Err(ResizeError::InvalidPercentage),
        }
    }

    pub fn value(self) -> u8 {
        self.0
    }

    /// Scales one side, rounding halves up and never going below one pixel.
    pub fn scale(self, side: u32) -> u32 {
        let scaled = (u64::from(side) * u64::from(self.0) + 50) / 100;
        scaled.max(1) as u32
    }

    pub fn scale_dimensions(self, dimensions: Dimensions) -> Dimensions {
        Dimensions {
            width: self.scale(dimensions.width),
            height: self.scale(dimensions.height),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_or_empty_values_default_to_33() {
        assert_eq!(Percentage::parse(None).unwrap(), Percentage::DEFAULT);
        assert_eq!(Percentage::parse(Some("")).unwrap().value(), 33);
    }

    #[test]
    fn parses_the_leading_integer() {
        assert_eq!(Percentage::parse(Some("50")).unwrap().value(), 50);
        assert_eq!(Percentage::parse(Some(" 7 ")).unwrap().value(), 7);
        assert_eq!(Percentage::parse(Some("+100")).unwrap().value(), 100);
        assert_eq!(Percentage::parse(Some("12.5")).unwrap().value(), 12);
        assert_eq!(Percentage::parse(Some("1")).unwrap().value(), 1);
    }

    #[test]
    fn rejects_out_of_range_and_non_numeric_values() {
        for raw in ["0", "-5", "-0", "101", "99999999999999999999999", "abc", "   ", "-", "%50"] {
            assert!(
                matches!(Percentage::parse(Some(raw)), Err(ResizeError::InvalidPercentage)),
                "{raw:?} should be rejected"
            );
        }
    }

    #[test]
    fn scales_with_half_up_rounding() {
        let half = Percentage::parse(Some("50")).unwrap();
        assert_eq!(half.scale(200), 100);
        assert_eq!(half.scale(101), 51);
        assert_eq!(Percentage::DEFAULT.scale(100), 33);
        assert_eq!(Percentage::DEFAULT.scale(150), 50);
        assert_eq!(Percentage::parse(Some("1")).unwrap().scale(10), 1);
        assert_eq!(Percentage::parse(Some("1")).unwrap().scale(1), 1);
    }
}
