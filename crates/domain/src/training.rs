use derive_more::{Display, Into};

#[derive(Debug, Display, Clone, Copy, Into, PartialEq, Eq, PartialOrd, Ord)]
pub struct RPE(u8);

impl RPE {
    pub fn new(value: u8) -> Result<Self, RPEError> {
        if !(1..=10).contains(&value) {
            return Err(RPEError::OutOfRange(value));
        }

        Ok(Self(value))
    }
}

impl TryFrom<&str> for RPE {
    type Error = RPEError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value.trim().parse::<u8>() {
            Ok(parsed_value) => RPE::new(parsed_value),
            Err(_) => Err(RPEError::ParseError),
        }
    }
}

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum RPEError {
    #[error("RPE must be in the range 1 to 10 ({0})")]
    OutOfRange(u8),
    #[error("RPE must be an integer")]
    ParseError,
}

#[derive(Debug, Display, Clone, Copy, Into, PartialEq, Eq, PartialOrd, Ord)]
pub struct RIR(u8);

impl RIR {
    pub const MAX: RIR = RIR(5);

    pub fn new(value: u8) -> Result<Self, RIRError> {
        if value > 5 {
            return Err(RIRError::OutOfRange(value));
        }

        Ok(Self(value))
    }
}

impl TryFrom<&str> for RIR {
    type Error = RIRError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value.trim().parse::<u8>() {
            Ok(parsed_value) => RIR::new(parsed_value),
            Err(_) => Err(RIRError::ParseError),
        }
    }
}

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum RIRError {
    #[error("RIR must be in the range 0 to 5 ({0})")]
    OutOfRange(u8),
    #[error("RIR must be an integer")]
    ParseError,
}

#[derive(Debug, Default, Display, Clone, Copy, Into, PartialEq, PartialOrd)]
pub struct Weight(f32);

impl Weight {
    pub fn new(value: f32) -> Result<Self, WeightError> {
        if !(0.0..1000.0).contains(&value) {
            return Err(WeightError::OutOfRange);
        }

        Ok(Self(value))
    }

    /// Scale by a percentage and round to the nearest whole unit.
    #[must_use]
    pub fn scaled(self, percent: i32) -> Weight {
        #[allow(clippy::cast_precision_loss)]
        let factor = 1.0 + percent as f32 / 100.0;
        Weight((self.0 * factor).round().clamp(0.0, 999.0))
    }
}

impl TryFrom<&str> for Weight {
    type Error = WeightError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value.trim().parse::<f32>() {
            Ok(parsed_value) => Weight::new(parsed_value),
            Err(_) => Err(WeightError::ParseError),
        }
    }
}

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum WeightError {
    #[error("Weight must be in the range 0.0 to 999.9")]
    OutOfRange,
    #[error("Weight must be a decimal")]
    ParseError,
}

#[cfg(test)]
mod tests {
    use assert_approx_eq::assert_approx_eq;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case(1, Ok(RPE(1)))]
    #[case(10, Ok(RPE(10)))]
    #[case(0, Err(RPEError::OutOfRange(0)))]
    #[case(11, Err(RPEError::OutOfRange(11)))]
    fn test_rpe_new(#[case] value: u8, #[case] expected: Result<RPE, RPEError>) {
        assert_eq!(RPE::new(value), expected);
    }

    #[rstest]
    #[case("8", Ok(RPE(8)))]
    #[case(" 9 ", Ok(RPE(9)))]
    #[case("8.5", Err(RPEError::ParseError))]
    #[case("", Err(RPEError::ParseError))]
    fn test_rpe_try_from_str(#[case] value: &str, #[case] expected: Result<RPE, RPEError>) {
        assert_eq!(RPE::try_from(value), expected);
    }

    #[rstest]
    #[case(0, Ok(RIR(0)))]
    #[case(5, Ok(RIR::MAX))]
    #[case(6, Err(RIRError::OutOfRange(6)))]
    fn test_rir_new(#[case] value: u8, #[case] expected: Result<RIR, RIRError>) {
        assert_eq!(RIR::new(value), expected);
    }

    #[rstest]
    #[case("3", Ok(RIR(3)))]
    #[case("x", Err(RIRError::ParseError))]
    fn test_rir_try_from_str(#[case] value: &str, #[case] expected: Result<RIR, RIRError>) {
        assert_eq!(RIR::try_from(value), expected);
    }

    #[rstest]
    #[case(0.0, Ok(Weight(0.0)))]
    #[case(82.5, Ok(Weight(82.5)))]
    #[case(-1.0, Err(WeightError::OutOfRange))]
    #[case(1000.0, Err(WeightError::OutOfRange))]
    fn test_weight_new(#[case] value: f32, #[case] expected: Result<Weight, WeightError>) {
        assert_eq!(Weight::new(value), expected);
    }

    #[rstest]
    #[case(40.0, 5, 42.0)]
    #[case(100.0, -15, 85.0)]
    #[case(100.0, -20, 80.0)]
    #[case(47.5, -15, 40.0)]
    #[case(0.0, 5, 0.0)]
    fn test_weight_scaled(#[case] weight: f32, #[case] percent: i32, #[case] expected: f32) {
        assert_approx_eq!(f32::from(Weight(weight).scaled(percent)), expected);
    }
}
