// ==========================================
// 工厂生产计划看板 - 联动入账引擎
// ==========================================
// 职责: 单笔报工沿 机台 → 订单 → 产线 → 全厂KPI 链路一致入账
// 口径: 订单/机台 kg, 产线/全厂 t, 换算 1t = 1000kg
// 达成率 = round(real / plan × 100), plan 为 0 时取 0
// ==========================================

use tracing::debug;

use crate::domain::order::ProductionRecord;
use crate::domain::PlantState;
use crate::store::error::{StoreError, StoreResult};

/// 千克/吨换算系数
pub const KG_PER_TONNE: f64 = 1000.0;

/// kg → t
pub fn kg_to_t(kg: f64) -> f64 {
    kg / KG_PER_TONNE
}

/// 达成率 (%); plan 非正时为 0
pub fn compliance_pct(real: f64, plan: f64) -> u32 {
    if plan <= 0.0 {
        return 0;
    }
    (real / plan * 100.0).round() as u32
}

// ==========================================
// RollupEngine - 联动入账
// ==========================================
pub struct RollupEngine;

impl RollupEngine {
    /// 将一笔报工量沿引用链入账
    ///
    /// 链路: machine.produced_so_far → order.real(+记录) → line.real(+达成率)
    ///       → kpis.accumulated_real(+达成率)
    ///
    /// # 参数
    /// - order_id: 指定入账订单; None 时取机台当前绑定订单
    /// - clamp_plant: 严格口径时全厂实际量截到周计划、达成率截到 100
    ///
    /// # 返回
    /// - Ok(order_id): 实际入账的订单ID
    /// - Err(NotFound): 机台/订单/产线缺失, 状态不变 (调用方丢弃本副本)
    pub fn credit_chain(
        state: &mut PlantState,
        machine_id: &str,
        order_id: Option<&str>,
        quantity_kg: f64,
        record: ProductionRecord,
        clamp_plant: bool,
    ) -> StoreResult<String> {
        // 先解析整条引用链, 任一环缺失即拒绝, 不做部分入账
        let machine = state
            .machine(machine_id)
            .ok_or_else(|| StoreError::not_found("machine", machine_id))?;
        let order_id = order_id.unwrap_or(&machine.current_order_id).to_string();
        let line_id = state
            .order(&order_id)
            .ok_or_else(|| StoreError::not_found("order", &order_id))?
            .line_id
            .clone();
        if state.line(&line_id).is_none() {
            return Err(StoreError::not_found("line", &line_id));
        }

        // 机台计数器
        let machine = state.machine_mut(machine_id).expect("已解析");
        machine.produced_so_far += quantity_kg;

        // 订单入账 + 追加生产记录
        let order = state.order_mut(&order_id).expect("已解析");
        order.real += quantity_kg;
        order.production_records.push(record);

        // 产线入账 (kg → t) + 达成率重算
        let delta_t = kg_to_t(quantity_kg);
        let line = state.line_mut(&line_id).expect("已解析");
        line.credit(delta_t);

        // 全厂 KPI 入账
        state.kpis.credit(delta_t, clamp_plant);

        debug!(
            machine_id,
            order_id = %order_id,
            line_id = %line_id,
            quantity_kg,
            "联动入账完成"
        );
        Ok(order_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compliance_rounding() {
        assert_eq!(compliance_pct(38.0, 45.0), 84); // 84.44 → 84
        assert_eq!(compliance_pct(35.0, 50.0), 70);
        assert_eq!(compliance_pct(8500.0, 8500.0), 100);
        assert_eq!(compliance_pct(9.5, 10.0), 95);
        assert_eq!(compliance_pct(124.0, 120.0), 103); // 未截断口径可超 100
    }

    #[test]
    fn test_compliance_zero_plan() {
        assert_eq!(compliance_pct(10.0, 0.0), 0);
        assert_eq!(compliance_pct(0.0, 0.0), 0);
    }

    #[test]
    fn test_kg_to_t() {
        assert!((kg_to_t(1500.0) - 1.5).abs() < 1e-12);
    }
}
