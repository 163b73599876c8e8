// ==========================================
// 产品碳足迹计算系统 - 领域类型定义
// ==========================================
// 职责: 流类别、流方向、计量单位三个枚举
// 红线: 类别与单位的对应关系是固定白名单,不做单位换算
// ==========================================

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// ==========================================
// 流类别 (Flow Category)
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FlowCategory {
    Waste,     // 废弃物
    Energy,    // 能源
    Material,  // 物料
    Transport, // 运输
    Emission,  // 排放
}

impl FlowCategory {
    /// 该类别允许使用的单位白名单
    pub fn allowed_units(&self) -> &'static [UnitType] {
        match self {
            FlowCategory::Transport => &[UnitType::Km, UnitType::None],
            FlowCategory::Emission => &[
                UnitType::KgCo2Eq,
                UnitType::KgCo2TonKm,
                UnitType::GCo2EqKwh,
                UnitType::None,
            ],
            FlowCategory::Material => &[UnitType::Kg, UnitType::None],
            FlowCategory::Energy => &[UnitType::Kwh, UnitType::GCo2EqKwh, UnitType::None],
            FlowCategory::Waste => &[UnitType::Kg, UnitType::None],
        }
    }

    /// 判断单位是否属于该类别
    pub fn accepts(&self, unit: UnitType) -> bool {
        self.allowed_units().contains(&unit)
    }
}

impl fmt::Display for FlowCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FlowCategory::Waste => write!(f, "WASTE"),
            FlowCategory::Energy => write!(f, "ENERGY"),
            FlowCategory::Material => write!(f, "MATERIAL"),
            FlowCategory::Transport => write!(f, "TRANSPORT"),
            FlowCategory::Emission => write!(f, "EMISSION"),
        }
    }
}

impl FromStr for FlowCategory {
    type Err = String;

    /// 大小写不敏感
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "WASTE" => Ok(FlowCategory::Waste),
            "ENERGY" => Ok(FlowCategory::Energy),
            "MATERIAL" => Ok(FlowCategory::Material),
            "TRANSPORT" => Ok(FlowCategory::Transport),
            "EMISSION" => Ok(FlowCategory::Emission),
            other => Err(format!("未知流类别: {}", other)),
        }
    }
}

// ==========================================
// 流方向 (Direction)
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Direction {
    Input,  // 输入
    Output, // 输出
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::Input => write!(f, "INPUT"),
            Direction::Output => write!(f, "OUTPUT"),
        }
    }
}

impl FromStr for Direction {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "INPUT" => Ok(Direction::Input),
            "OUTPUT" => Ok(Direction::Output),
            other => Err(format!("未知流方向: {}", other)),
        }
    }
}

// ==========================================
// 计量单位 (Unit Type)
// ==========================================
// 序列化格式与导入文件一致 (KWH, KGCO2EQ, ...)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum UnitType {
    #[serde(rename = "KWH")]
    Kwh,
    #[serde(rename = "KG")]
    Kg,
    #[serde(rename = "KGCO2EQ")]
    KgCo2Eq,
    #[serde(rename = "GCO2EQKWH")]
    GCo2EqKwh,
    #[serde(rename = "KM")]
    Km,
    #[serde(rename = "x100")]
    X100,
    #[serde(rename = "KGCO2TONELADAKM")]
    KgCo2TonKm,
    #[serde(rename = "NONE")]
    None,
}

impl fmt::Display for UnitType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UnitType::Kwh => write!(f, "KWH"),
            UnitType::Kg => write!(f, "KG"),
            UnitType::KgCo2Eq => write!(f, "KGCO2EQ"),
            UnitType::GCo2EqKwh => write!(f, "GCO2EQKWH"),
            UnitType::Km => write!(f, "KM"),
            UnitType::X100 => write!(f, "x100"),
            UnitType::KgCo2TonKm => write!(f, "KGCO2TONELADAKM"),
            UnitType::None => write!(f, "NONE"),
        }
    }
}

impl FromStr for UnitType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "KWH" => Ok(UnitType::Kwh),
            "KG" => Ok(UnitType::Kg),
            "KGCO2EQ" => Ok(UnitType::KgCo2Eq),
            "GCO2EQKWH" => Ok(UnitType::GCo2EqKwh),
            "KM" => Ok(UnitType::Km),
            "X100" => Ok(UnitType::X100),
            "KGCO2TONELADAKM" => Ok(UnitType::KgCo2TonKm),
            "NONE" => Ok(UnitType::None),
            other => Err(format!("未知计量单位: {}", other)),
        }
    }
}
