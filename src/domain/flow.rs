// ==========================================
// 产品碳足迹计算系统 - 流 (Flow) 实体
// ==========================================
// 职责: 描述工序的一条输入/输出计量数据
// 红线: 构造即校验,非法组合直接拒绝,不做静默修正
// ==========================================

use crate::domain::error::{FlowError, FlowResult};
use crate::domain::types::{Direction, FlowCategory, UnitType};
use serde::{Deserialize, Serialize};
use std::fmt;

// ==========================================
// Flow - 计量流
// ==========================================
// 构造后只读; 唯一的原地修改入口是主数据回填 (backfill_from)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Flow {
    category: FlowCategory,
    name: String,
    direction: Direction,
    value: f64,
    unit: UnitType,
    loss_rate: f64, // 损耗率, 0.1 = 10%
}

impl Flow {
    /// 创建并校验一条流
    ///
    /// # 校验规则
    /// - name 非空
    /// - value、loss_rate 为有限且非负的数值
    /// - unit 属于 category 的单位白名单
    pub fn new(
        category: FlowCategory,
        name: impl Into<String>,
        direction: Direction,
        value: f64,
        unit: UnitType,
        loss_rate: f64,
    ) -> FlowResult<Self> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(FlowError::EmptyName);
        }
        validate_quantity("value", value)?;
        validate_quantity("loss_rate", loss_rate)?;
        validate_unit(category, unit)?;

        Ok(Self {
            category,
            name,
            direction,
            value,
            unit,
            loss_rate,
        })
    }

    pub fn category(&self) -> FlowCategory {
        self.category
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    pub fn unit(&self) -> UnitType {
        self.unit
    }

    pub fn loss_rate(&self) -> f64 {
        self.loss_rate
    }

    /// value == 0 表示导入时省略了数值 (占位)
    pub fn is_placeholder(&self) -> bool {
        self.value == 0.0
    }

    /// 从次级数据回填 value / unit / loss_rate
    ///
    /// 来源流本身已通过构造校验,但类别可能不同,因此仍需重新检查单位白名单。
    pub(crate) fn backfill_from(&mut self, source: &Flow) -> FlowResult<()> {
        validate_unit(self.category, source.unit)?;
        self.value = source.value;
        self.unit = source.unit;
        self.loss_rate = source.loss_rate;
        Ok(())
    }
}

impl fmt::Display for Flow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Flow{{category={}, name={}, direction={}, value={}, unit={}, loss_rate={}}}",
            self.category, self.name, self.direction, self.value, self.unit, self.loss_rate
        )
    }
}

fn validate_quantity(field: &'static str, value: f64) -> FlowResult<()> {
    if !value.is_finite() {
        return Err(FlowError::NonFinite { field, value });
    }
    if value < 0.0 {
        return Err(FlowError::Negative { field, value });
    }
    Ok(())
}

fn validate_unit(category: FlowCategory, unit: UnitType) -> FlowResult<()> {
    if !category.accepts(unit) {
        return Err(FlowError::UnitNotAllowed {
            category,
            unit,
            allowed: category.allowed_units(),
        });
    }
    Ok(())
}
