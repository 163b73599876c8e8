// ==========================================
// 影响计算公式性质测试
// ==========================================

use pcf_engine::domain::types::{Direction, FlowCategory, UnitType};
use pcf_engine::engine::{flow_inefficiency, impact};
use pcf_engine::Flow;
use proptest::prelude::*;

/// 有效数值 (避免溢出)
fn quantity() -> impl Strategy<Value = f64> {
    0.0f64..1_000_000.0
}

fn loss_rate() -> impl Strategy<Value = f64> {
    0.0f64..1.0
}

fn material_flow() -> impl Strategy<Value = Flow> {
    (quantity(), loss_rate()).prop_map(|(value, loss)| {
        Flow::new(FlowCategory::Material, "LEATHER", Direction::Input, value, UnitType::Kg, loss)
            .unwrap()
    })
}

fn emission_flow() -> impl Strategy<Value = Flow> {
    (quantity(), loss_rate()).prop_map(|(value, loss)| {
        Flow::new(FlowCategory::Emission, "LEATHER", Direction::Output, value, UnitType::KgCo2Eq, loss)
            .unwrap()
    })
}

proptest! {
    /// 损耗放大值不小于原值且非负
    #[test]
    fn prop_inefficiency_at_least_value(flow in material_flow()) {
        let inefficiency = flow_inefficiency(Some(&flow));
        prop_assert!(inefficiency >= flow.value());
        prop_assert!(inefficiency >= 0.0);
    }

    /// 影响值等于两侧损耗放大值之积, 且非负
    #[test]
    fn prop_impact_is_product(flow in material_flow(), emission in emission_flow()) {
        let expected = flow_inefficiency(Some(&flow)) * flow_inefficiency(Some(&emission));
        let actual = impact(Some(&flow), Some(&emission));
        prop_assert_eq!(actual, expected);
        prop_assert!(actual >= 0.0);
    }

    /// 任一操作数缺失时影响值为 0
    #[test]
    fn prop_missing_operand_contributes_nothing(flow in material_flow()) {
        prop_assert_eq!(impact(Some(&flow), None), 0.0);
        prop_assert_eq!(impact(None, Some(&flow)), 0.0);
    }
}

#[test]
fn test_missing_flow_has_zero_inefficiency() {
    assert_eq!(flow_inefficiency(None), 0.0);
    assert_eq!(impact(None, None), 0.0);
}
