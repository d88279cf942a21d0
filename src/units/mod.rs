//! 단위 정의 및 변환 모듈 모음.

pub mod data_storage;
pub mod length;
pub mod temperature;
pub mod weight;

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::category::Category;

pub use data_storage::{convert_data_storage, DataStorageUnit};
pub use length::{convert_length, LengthUnit};
pub use temperature::{convert_temperature, convert_temperature_all, TemperatureUnit};
pub use weight::{convert_weight, WeightUnit};

/// 기준 단위 대비 배율 하나로 표현되는 선형 단위.
///
/// `factor`는 "기준 단위 1당 이 단위가 몇 개인가"를 뜻하며 항상 양수이다.
/// 기준 단위의 factor 는 1이다.
pub trait LinearUnit: Copy + Eq + 'static {
    /// 표시 순서대로 나열한 전체 단위.
    const ALL: &'static [Self];

    fn name(self) -> &'static str;

    fn factor(self) -> f64;
}

/// 선형 단위 사이의 변환. 같은 단위끼리는 입력값을 그대로 돌려준다.
pub fn convert_linear<U: LinearUnit>(value: f64, from: U, to: U) -> f64 {
    if from == to {
        return value;
    }
    value / from.factor() * to.factor()
}

/// `from` 단위의 값을 계열 내 모든 단위(자기 자신 포함)로 환산한다.
pub fn convert_all_linear<U: LinearUnit>(value: f64, from: U) -> Vec<(U, f64)> {
    U::ALL
        .iter()
        .map(|&to| (to, convert_linear(value, from, to)))
        .collect()
}

/// 계열 정보를 포함한 단위.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Unit {
    Length(LengthUnit),
    Weight(WeightUnit),
    Temperature(TemperatureUnit),
    DataStorage(DataStorageUnit),
}

impl Unit {
    pub fn category(self) -> Category {
        match self {
            Unit::Length(_) => Category::Length,
            Unit::Weight(_) => Category::Weight,
            Unit::Temperature(_) => Category::Temperature,
            Unit::DataStorage(_) => Category::DataStorage,
        }
    }

    /// 화면과 기록에 쓰이는 단위 이름 (예: `Meters`, `Data Storage`의 `Kilobytes`).
    pub fn name(self) -> &'static str {
        match self {
            Unit::Length(u) => u.name(),
            Unit::Weight(u) => u.name(),
            Unit::Temperature(u) => u.name(),
            Unit::DataStorage(u) => u.name(),
        }
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
