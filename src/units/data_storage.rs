use serde::{Deserialize, Serialize};

use super::{convert_linear, LinearUnit};

const BYTES_PER_KIB: f64 = 1024.0;

/// 데이터 저장 용량 단위. 내부 기준은 바이트이며 1024 배수(이진 접두어)를 쓴다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DataStorageUnit {
    Byte,
    Kilobyte,
    Megabyte,
    Gigabyte,
    Terabyte,
}

impl DataStorageUnit {
    /// 1 단위가 몇 바이트인지.
    fn bytes(self) -> f64 {
        match self {
            DataStorageUnit::Byte => 1.0,
            DataStorageUnit::Kilobyte => BYTES_PER_KIB,
            DataStorageUnit::Megabyte => BYTES_PER_KIB.powi(2),
            DataStorageUnit::Gigabyte => BYTES_PER_KIB.powi(3),
            DataStorageUnit::Terabyte => BYTES_PER_KIB.powi(4),
        }
    }
}

impl LinearUnit for DataStorageUnit {
    const ALL: &'static [Self] = &[
        DataStorageUnit::Byte,
        DataStorageUnit::Kilobyte,
        DataStorageUnit::Megabyte,
        DataStorageUnit::Gigabyte,
        DataStorageUnit::Terabyte,
    ];

    fn name(self) -> &'static str {
        match self {
            DataStorageUnit::Byte => "Bytes",
            DataStorageUnit::Kilobyte => "Kilobytes",
            DataStorageUnit::Megabyte => "Megabytes",
            DataStorageUnit::Gigabyte => "Gigabytes",
            DataStorageUnit::Terabyte => "Terabytes",
        }
    }

    // 1 바이트 당 단위 수. 2의 거듭제곱이라 나눗셈/곱셈이 정확하다.
    fn factor(self) -> f64 {
        1.0 / self.bytes()
    }
}

/// 저장 용량을 변환한다.
pub fn convert_data_storage(value: f64, from: DataStorageUnit, to: DataStorageUnit) -> f64 {
    convert_linear(value, from, to)
}
