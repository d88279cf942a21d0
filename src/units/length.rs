use serde::{Deserialize, Serialize};

use super::{convert_linear, LinearUnit};

/// 길이 단위. 내부 기준은 미터이다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LengthUnit {
    Meter,
    Kilometer,
    Centimeter,
    Millimeter,
    Mile,
    Yard,
    Foot,
    Inch,
}

impl LinearUnit for LengthUnit {
    const ALL: &'static [Self] = &[
        LengthUnit::Meter,
        LengthUnit::Kilometer,
        LengthUnit::Centimeter,
        LengthUnit::Millimeter,
        LengthUnit::Mile,
        LengthUnit::Yard,
        LengthUnit::Foot,
        LengthUnit::Inch,
    ];

    fn name(self) -> &'static str {
        match self {
            LengthUnit::Meter => "Meters",
            LengthUnit::Kilometer => "Kilometers",
            LengthUnit::Centimeter => "Centimeters",
            LengthUnit::Millimeter => "Millimeters",
            LengthUnit::Mile => "Miles",
            LengthUnit::Yard => "Yards",
            LengthUnit::Foot => "Feet",
            LengthUnit::Inch => "Inches",
        }
    }

    /// 1 m 당 해당 단위의 개수.
    fn factor(self) -> f64 {
        match self {
            LengthUnit::Meter => 1.0,
            LengthUnit::Kilometer => 0.001,
            LengthUnit::Centimeter => 100.0,
            LengthUnit::Millimeter => 1000.0,
            LengthUnit::Mile => 0.000621371,
            LengthUnit::Yard => 1.09361,
            LengthUnit::Foot => 3.28084,
            LengthUnit::Inch => 39.3701,
        }
    }
}

/// 길이를 다른 단위로 변환한다.
pub fn convert_length(value: f64, from: LengthUnit, to: LengthUnit) -> f64 {
    convert_linear(value, from, to)
}
