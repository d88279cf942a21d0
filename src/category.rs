use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::conversion::ConversionError;
use crate::units::{DataStorageUnit, LengthUnit, LinearUnit, TemperatureUnit, Unit, WeightUnit};

/// 변환기가 다루는 단위 계열.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Length,
    Weight,
    Temperature,
    DataStorage,
}

impl Category {
    /// 화면 표시 순서대로 나열한 전체 계열.
    pub const ALL: [Category; 4] = [
        Category::Length,
        Category::Weight,
        Category::Temperature,
        Category::DataStorage,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Category::Length => "Length",
            Category::Weight => "Weight",
            Category::Temperature => "Temperature",
            Category::DataStorage => "Data Storage",
        }
    }

    /// 계열에 속한 단위 목록을 고정된 순서로 반환한다.
    pub fn units(self) -> Vec<Unit> {
        match self {
            Category::Length => LengthUnit::ALL.iter().map(|&u| Unit::Length(u)).collect(),
            Category::Weight => WeightUnit::ALL.iter().map(|&u| Unit::Weight(u)).collect(),
            Category::Temperature => TemperatureUnit::ALL
                .iter()
                .map(|&u| Unit::Temperature(u))
                .collect(),
            Category::DataStorage => DataStorageUnit::ALL
                .iter()
                .map(|&u| Unit::DataStorage(u))
                .collect(),
        }
    }

    pub fn unit_names(self) -> Vec<&'static str> {
        self.units().into_iter().map(Unit::name).collect()
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Category {
    type Err = ConversionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "length" => Ok(Category::Length),
            "weight" | "mass" => Ok(Category::Weight),
            "temperature" | "temp" => Ok(Category::Temperature),
            "data storage" | "data-storage" | "data_storage" | "datastorage" | "storage" => {
                Ok(Category::DataStorage)
            }
            _ => Err(ConversionError::UnknownCategory(s.to_string())),
        }
    }
}
