use serde::{Deserialize, Serialize};

use super::{convert_linear, LinearUnit};

/// 질량 단위. 내부 기준은 kg이다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WeightUnit {
    Kilogram,
    Gram,
    Milligram,
    Pound,
    Ounce,
}

impl LinearUnit for WeightUnit {
    const ALL: &'static [Self] = &[
        WeightUnit::Kilogram,
        WeightUnit::Gram,
        WeightUnit::Milligram,
        WeightUnit::Pound,
        WeightUnit::Ounce,
    ];

    fn name(self) -> &'static str {
        match self {
            WeightUnit::Kilogram => "Kilograms",
            WeightUnit::Gram => "Grams",
            WeightUnit::Milligram => "Milligrams",
            WeightUnit::Pound => "Pounds",
            WeightUnit::Ounce => "Ounces",
        }
    }

    fn factor(self) -> f64 {
        match self {
            WeightUnit::Kilogram => 1.0,
            WeightUnit::Gram => 1000.0,
            WeightUnit::Milligram => 1_000_000.0,
            WeightUnit::Pound => 2.20462,
            WeightUnit::Ounce => 35.274,
        }
    }
}

/// 질량을 변환한다.
pub fn convert_weight(value: f64, from: WeightUnit, to: WeightUnit) -> f64 {
    convert_linear(value, from, to)
}
