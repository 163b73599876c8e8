// ==========================================
// 产品碳足迹计算系统 - 流分类器
// ==========================================
// 阶段: 字段映射与类型转换
// 输入: 一条记录去掉工序名后的字段
// 输出: Flow 或 ClassifyError
// ==========================================

use crate::domain::flow::Flow;
use crate::domain::types::{Direction, FlowCategory, UnitType};
use crate::importer::error::{ClassifyError, ClassifyResult};
use crate::importer::importer_trait::FlowClassification;

/// 类别字段内 "类别;名称" 的分隔符
pub const CATEGORY_NAME_SEPARATOR: char = ';';

// 字段位置
const DIRECTION_IDX: usize = 0;
const CATEGORY_IDX: usize = 1;
const VALUE_IDX: usize = 2;
const UNIT_IDX: usize = 3;
const LOSS_RATE_IDX: usize = 4;

// ==========================================
// FlowClassifier - 流分类器
// ==========================================
// 无状态; 缺省数值字段取 0 (占位, 供主数据回填识别)
#[derive(Debug, Clone, Copy, Default)]
pub struct FlowClassifier;

impl FlowClassifier {
    pub fn new() -> Self {
        Self
    }

    /// 解析 "类别" 或 "类别;名称"
    ///
    /// 名称统一转大写; 未给出名称时以类别名作为流名称
    fn parse_category(raw: &str) -> ClassifyResult<(FlowCategory, String)> {
        let mut parts = raw.split(CATEGORY_NAME_SEPARATOR);
        let category_raw = parts.next().unwrap_or_default().trim();
        let category: FlowCategory = category_raw
            .parse()
            .map_err(|_| ClassifyError::InvalidCategory(category_raw.to_string()))?;

        let name = match parts.next() {
            Some(name) => name.trim().to_uppercase(),
            None => category_raw.to_uppercase(),
        };

        Ok((category, name))
    }

    fn parse_number(fields: &[&str], idx: usize, field: &'static str) -> ClassifyResult<f64> {
        match optional_field(fields, idx) {
            Some(raw) => raw.parse::<f64>().map_err(|_| ClassifyError::InvalidNumber {
                field,
                value: raw.to_string(),
            }),
            None => Ok(0.0),
        }
    }

    fn parse_unit(fields: &[&str]) -> ClassifyResult<UnitType> {
        match optional_field(fields, UNIT_IDX) {
            Some(raw) => raw
                .parse()
                .map_err(|_| ClassifyError::InvalidUnit(raw.to_string())),
            None => Ok(UnitType::None),
        }
    }
}

impl FlowClassification for FlowClassifier {
    fn classify(&self, fields: &[&str]) -> ClassifyResult<Flow> {
        let direction_raw = fields
            .get(DIRECTION_IDX)
            .ok_or(ClassifyError::MissingField("direction"))?
            .trim();
        let direction: Direction = direction_raw
            .parse()
            .map_err(|_| ClassifyError::InvalidDirection(direction_raw.to_string()))?;

        let category_raw = fields
            .get(CATEGORY_IDX)
            .ok_or(ClassifyError::MissingField("category"))?;
        let (category, name) = Self::parse_category(category_raw)?;

        let value = Self::parse_number(fields, VALUE_IDX, "value")?;
        let unit = Self::parse_unit(fields)?;
        let loss_rate = Self::parse_number(fields, LOSS_RATE_IDX, "loss_rate")?;

        Ok(Flow::new(category, name, direction, value, unit, loss_rate)?)
    }
}

/// 取可选字段: 缺失或空白视为未提供
fn optional_field<'a>(fields: &[&'a str], idx: usize) -> Option<&'a str> {
    fields
        .get(idx)
        .map(|v| v.trim())
        .filter(|v| !v.is_empty())
}
