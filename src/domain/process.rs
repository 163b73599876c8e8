// ==========================================
// 产品碳足迹计算系统 - 工序 (Process) 实体
// ==========================================
// 职责: 一个命名的生产工序,持有有序的输入流和输出流
// ==========================================

use crate::domain::flow::Flow;
use crate::domain::types::{Direction, FlowCategory};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Process {
    pub name: String,
    pub inputs: Vec<Flow>,
    pub outputs: Vec<Flow>,
}

impl Process {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            inputs: Vec::new(),
            outputs: Vec::new(),
        }
    }

    /// 用现成的流列表构造工序 (测试与批量构造使用)
    pub fn with_flows(name: impl Into<String>, inputs: Vec<Flow>, outputs: Vec<Flow>) -> Self {
        Self {
            name: name.into(),
            inputs,
            outputs,
        }
    }

    /// 按流方向追加,保持插入顺序
    pub fn attach(&mut self, flow: Flow) {
        match flow.direction() {
            Direction::Input => self.inputs.push(flow),
            Direction::Output => self.outputs.push(flow),
        }
    }

    /// 按方向取流列表
    pub fn flows(&self, direction: Direction) -> &[Flow] {
        match direction {
            Direction::Input => &self.inputs,
            Direction::Output => &self.outputs,
        }
    }

    /// 名称大小写不敏感比较
    pub fn is_named(&self, name: &str) -> bool {
        self.name.eq_ignore_ascii_case(name)
    }

    /// 第一条同名输出流 (不限类别)
    pub fn output_named(&self, flow_name: &str) -> Option<&Flow> {
        self.outputs.iter().find(|f| f.name() == flow_name)
    }

    /// 第一条同名且类别为 EMISSION 的输出流
    pub fn emission_named(&self, flow_name: &str) -> Option<&Flow> {
        self.outputs
            .iter()
            .find(|f| f.category() == FlowCategory::Emission && f.name() == flow_name)
    }

    pub fn flow_count(&self) -> usize {
        self.inputs.len() + self.outputs.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::types::UnitType;

    fn flow(category: FlowCategory, name: &str, direction: Direction, unit: UnitType) -> Flow {
        Flow::new(category, name, direction, 1.0, unit, 0.0).unwrap()
    }

    #[test]
    fn test_attach_by_direction_keeps_order() {
        let mut process = Process::new("cutting");
        process.attach(flow(FlowCategory::Material, "A", Direction::Input, UnitType::Kg));
        process.attach(flow(FlowCategory::Emission, "A", Direction::Output, UnitType::KgCo2Eq));
        process.attach(flow(FlowCategory::Material, "B", Direction::Input, UnitType::Kg));

        assert_eq!(process.inputs.len(), 2);
        assert_eq!(process.inputs[0].name(), "A");
        assert_eq!(process.inputs[1].name(), "B");
        assert_eq!(process.outputs.len(), 1);
        assert_eq!(process.flow_count(), 3);
    }

    #[test]
    fn test_output_lookup_first_match() {
        let mut process = Process::new("stitching");
        process.attach(flow(FlowCategory::Waste, "STRING", Direction::Output, UnitType::Kg));
        process.attach(flow(FlowCategory::Emission, "STRING", Direction::Output, UnitType::KgCo2Eq));

        assert_eq!(
            process.output_named("STRING").unwrap().category(),
            FlowCategory::Waste
        );
        assert_eq!(
            process.emission_named("STRING").unwrap().category(),
            FlowCategory::Emission
        );
        assert!(process.emission_named("string").is_none());
    }

    #[test]
    fn test_is_named_ignores_case() {
        assert!(Process::new("Energy").is_named("energy"));
        assert!(!Process::new("Energia").is_named("energy"));
    }
}
