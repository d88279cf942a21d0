use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::category::Category;
use crate::units::*;

/// 단위 변환 시 발생 가능한 오류.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConversionError {
    /// 알 수 없는 계열 문자열
    #[error("알 수 없는 변환 종류: {0}")]
    UnknownCategory(String),
    /// 계열에 속하지 않는 단위 문자열
    #[error("{category}에 없는 단위: {unit}")]
    UnknownUnit { category: Category, unit: String },
    /// NaN 또는 무한대 입력
    #[error("유한한 숫자가 아닙니다: {0}")]
    NonFiniteValue(f64),
    /// 환산표에서 목표 단위의 값을 얻지 못함. 같은 단위는 조회 전에 처리되므로
    /// 현재 계열 구성에서는 도달하지 않는 방어용 오류이다.
    #[error("{from} → {to} 변환 결과를 만들 수 없습니다")]
    MissingTarget { from: Unit, to: Unit },
    /// 유한한 입력이 f64 범위를 넘거나(무한대) 0으로 사라지는 결과
    #[error("{value} {from} → {to} 변환 결과가 표현 범위를 벗어납니다")]
    OutOfRange { from: Unit, to: Unit, value: f64 },
}

/// 한 단위의 값을 계열 내 다른 단위들로 환산한 표.
#[derive(Debug, Clone, PartialEq)]
pub struct ConversionTable {
    pub source: Unit,
    pub value: f64,
    pub entries: Vec<(Unit, f64)>,
}

impl ConversionTable {
    pub fn get(&self, unit: Unit) -> Option<f64> {
        self.entries
            .iter()
            .find(|(u, _)| *u == unit)
            .map(|&(_, v)| v)
    }

    /// 단위 이름(대소문자 무시)으로 값을 찾는다.
    pub fn get_by_name(&self, name: &str) -> Option<f64> {
        self.entries
            .iter()
            .find(|(u, _)| u.name().eq_ignore_ascii_case(name))
            .map(|&(_, v)| v)
    }

    pub fn iter(&self) -> impl Iterator<Item = (Unit, f64)> + '_ {
        self.entries.iter().copied()
    }
}

/// 변환 요청. 두 단위는 항상 `category` 에 속한다.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ConversionRequest {
    pub category: Category,
    pub from: Unit,
    pub to: Unit,
    pub value: f64,
}

impl ConversionRequest {
    /// 문자열 단위명을 해석해 요청을 만든다.
    pub fn parse(
        category: Category,
        from_unit_str: &str,
        to_unit_str: &str,
        value: f64,
    ) -> Result<Self, ConversionError> {
        Ok(Self {
            category,
            from: parse_unit(category, from_unit_str)?,
            to: parse_unit(category, to_unit_str)?,
            value,
        })
    }

    pub fn execute(&self) -> Result<ConversionResult, ConversionError> {
        let output = convert_units(self.value, self.from, self.to)?;
        Ok(ConversionResult {
            request: *self,
            output,
        })
    }
}

/// 변환 요청과 그 결과값. 엔진은 반올림하지 않은 전체 정밀도를 돌려준다.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ConversionResult {
    pub request: ConversionRequest,
    pub output: f64,
}

impl ConversionResult {
    /// `1 Meters = 3.2808 Feet` 형태의 결과 문자열.
    pub fn display(&self, decimal_places: usize) -> String {
        format!(
            "{} {} = {:.prec$} {}",
            self.request.value,
            self.request.from,
            self.output,
            self.request.to,
            prec = decimal_places
        )
    }
}

fn ensure_finite(value: f64) -> Result<(), ConversionError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(ConversionError::NonFiniteValue(value))
    }
}

/// 단위 하나의 값을 계열 내 다른 단위로 모두 환산한다.
///
/// 온도는 입력 단위를 제외한 나머지 두 단위만, 그 외 계열은 입력 단위를
/// 포함한 전체 단위를 담는다.
pub fn convert_all_units(value: f64, from: Unit) -> Result<ConversionTable, ConversionError> {
    ensure_finite(value)?;
    let table = build_table(value, from);
    for &(to, out) in &table.entries {
        ensure_in_range(value, from, to, out)?;
    }
    Ok(table)
}

fn build_table(value: f64, from: Unit) -> ConversionTable {
    let entries = match from {
        Unit::Length(u) => convert_all_linear(value, u)
            .into_iter()
            .map(|(to, v)| (Unit::Length(to), v))
            .collect(),
        Unit::Weight(u) => convert_all_linear(value, u)
            .into_iter()
            .map(|(to, v)| (Unit::Weight(to), v))
            .collect(),
        Unit::Temperature(u) => convert_temperature_all(value, u)
            .into_iter()
            .map(|(to, v)| (Unit::Temperature(to), v))
            .collect(),
        Unit::DataStorage(u) => convert_all_linear(value, u)
            .into_iter()
            .map(|(to, v)| (Unit::DataStorage(to), v))
            .collect(),
    };
    ConversionTable {
        source: from,
        value,
        entries,
    }
}

/// 결과가 무한대가 되거나, 선형 계열에서 0이 아닌 입력이 0으로 사라지면 실패한다.
/// 온도는 아핀 변환이라 0이 정상 결과일 수 있다 (273.15 K → 0 °C).
fn ensure_in_range(value: f64, from: Unit, to: Unit, out: f64) -> Result<(), ConversionError> {
    let overflow = !out.is_finite();
    let underflow = from.category() != Category::Temperature && value != 0.0 && out == 0.0;
    if overflow || underflow {
        return Err(ConversionError::OutOfRange { from, to, value });
    }
    Ok(())
}

/// 문자열 단위명을 해석한 뒤 계열 내 모든 단위로 환산한다.
pub fn convert_all(
    category: Category,
    from_unit_str: &str,
    value: f64,
) -> Result<ConversionTable, ConversionError> {
    let from = parse_unit(category, from_unit_str)?;
    convert_all_units(value, from)
}

/// 온도 값을 나머지 두 온도 단위로 환산한다.
pub fn convert_temperature_table(
    from_unit_str: &str,
    value: f64,
) -> Result<ConversionTable, ConversionError> {
    convert_all(Category::Temperature, from_unit_str, value)
}

/// 단위 간 변환. 같은 단위는 어떤 계열이든 입력값을 그대로 돌려준다.
pub fn convert_units(value: f64, from: Unit, to: Unit) -> Result<f64, ConversionError> {
    ensure_finite(value)?;
    if from.category() != to.category() {
        return Err(ConversionError::UnknownUnit {
            category: from.category(),
            unit: to.name().to_string(),
        });
    }
    if from == to {
        return Ok(value);
    }
    let out = build_table(value, from)
        .get(to)
        .ok_or(ConversionError::MissingTarget { from, to })?;
    ensure_in_range(value, from, to, out)?;
    tracing::debug!(%from, %to, value, out, "converted");
    Ok(out)
}

/// 문자열로 전달된 단위명을 enum으로 변환한 뒤 지정된 단위로 환산한다.
///
/// 단위 문자열은 표시 이름(`Meters`)이나 약어(`m`, `kb`, `F`)를 대소문자 구분 없이 받는다.
pub fn convert(
    category: Category,
    from_unit_str: &str,
    to_unit_str: &str,
    value: f64,
) -> Result<f64, ConversionError> {
    let from = parse_unit(category, from_unit_str)?;
    let to = parse_unit(category, to_unit_str)?;
    convert_units(value, from, to)
}

/// 계열에 맞춰 단위 문자열을 해석한다.
pub fn parse_unit(category: Category, s: &str) -> Result<Unit, ConversionError> {
    let key = s.trim().to_lowercase();
    let unit = match category {
        Category::Length => parse_length_unit(&key).map(Unit::Length),
        Category::Weight => parse_weight_unit(&key).map(Unit::Weight),
        Category::Temperature => parse_temperature_unit(&key).map(Unit::Temperature),
        Category::DataStorage => parse_data_storage_unit(&key).map(Unit::DataStorage),
    };
    unit.ok_or_else(|| ConversionError::UnknownUnit {
        category,
        unit: s.to_string(),
    })
}

fn parse_length_unit(s: &str) -> Option<LengthUnit> {
    match s {
        "m" | "meter" | "meters" | "metre" | "metres" => Some(LengthUnit::Meter),
        "km" | "kilometer" | "kilometers" => Some(LengthUnit::Kilometer),
        "cm" | "centimeter" | "centimeters" => Some(LengthUnit::Centimeter),
        "mm" | "millimeter" | "millimeters" => Some(LengthUnit::Millimeter),
        "mi" | "mile" | "miles" => Some(LengthUnit::Mile),
        "yd" | "yard" | "yards" => Some(LengthUnit::Yard),
        "ft" | "foot" | "feet" => Some(LengthUnit::Foot),
        "in" | "inch" | "inches" => Some(LengthUnit::Inch),
        _ => None,
    }
}

fn parse_weight_unit(s: &str) -> Option<WeightUnit> {
    match s {
        "kg" | "kilogram" | "kilograms" => Some(WeightUnit::Kilogram),
        "g" | "gram" | "grams" => Some(WeightUnit::Gram),
        "mg" | "milligram" | "milligrams" => Some(WeightUnit::Milligram),
        "lb" | "lbs" | "pound" | "pounds" => Some(WeightUnit::Pound),
        "oz" | "ounce" | "ounces" => Some(WeightUnit::Ounce),
        _ => None,
    }
}

fn parse_temperature_unit(s: &str) -> Option<TemperatureUnit> {
    match s {
        "c" | "°c" | "celsius" => Some(TemperatureUnit::Celsius),
        "f" | "°f" | "fahrenheit" => Some(TemperatureUnit::Fahrenheit),
        "k" | "kelvin" => Some(TemperatureUnit::Kelvin),
        _ => None,
    }
}

fn parse_data_storage_unit(s: &str) -> Option<DataStorageUnit> {
    match s {
        "b" | "byte" | "bytes" => Some(DataStorageUnit::Byte),
        "kb" | "kilobyte" | "kilobytes" => Some(DataStorageUnit::Kilobyte),
        "mb" | "megabyte" | "megabytes" => Some(DataStorageUnit::Megabyte),
        "gb" | "gigabyte" | "gigabytes" => Some(DataStorageUnit::Gigabyte),
        "tb" | "terabyte" | "terabytes" => Some(DataStorageUnit::Terabyte),
        _ => None,
    }
}
