// ==========================================
// 工厂生产计划看板 - 装载计划引擎
// ==========================================
// 职责: 周计划装载 (创建订单) 的校验与各层计划量入账
// ==========================================

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

use crate::domain::order::Order;
use crate::domain::PlantState;
use crate::engine::rollup::kg_to_t;
use crate::store::error::{StoreError, StoreResult};

// ==========================================
// LoadPlanRequest - 装载计划请求
// ==========================================
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoadPlanRequest {
    pub line_id: String,
    pub product: String,
    pub quantity_kg: f64,
    pub commitment_date: Option<NaiveDate>,
    pub week_number: u32,
}

impl LoadPlanRequest {
    /// 逐字段校验, 汇总全部缺失/非法字段后一次性拒绝
    fn validate(&self) -> StoreResult<()> {
        let mut missing = Vec::new();
        if self.line_id.trim().is_empty() {
            missing.push("line_id".to_string());
        }
        if self.product.trim().is_empty() {
            missing.push("product".to_string());
        }
        if !self.quantity_kg.is_finite() || self.quantity_kg <= 0.0 {
            missing.push("quantity_kg".to_string());
        }
        if self.commitment_date.is_none() {
            missing.push("commitment_date".to_string());
        }
        if self.week_number == 0 {
            missing.push("week_number".to_string());
        }
        if missing.is_empty() {
            Ok(())
        } else {
            Err(StoreError::MissingFields(missing))
        }
    }
}

// ==========================================
// PlanLoader - 装载计划引擎
// ==========================================
pub struct PlanLoader;

impl PlanLoader {
    /// 生成新订单ID (FR- 前缀 + 6 位十六进制)
    fn new_order_id() -> String {
        let raw = Uuid::new_v4().simple().to_string();
        format!("FR-{}", raw[..6].to_uppercase())
    }

    /// 装载一条周计划 (纯变换)
    ///
    /// 效果: 新建 Planned 订单(实际量 0, 记录为空); 产线计划量与全厂
    /// 周计划各加 kg/1000 吨; 仅当累计实际量 > 0 时重算全厂达成率
    /// (避免空产出时达成率被压成虚假的低值); 看板选中周切到计划周
    pub fn load(
        mut state: PlantState,
        request: &LoadPlanRequest,
        now: NaiveDateTime,
    ) -> StoreResult<(PlantState, Order)> {
        request.validate()?;

        if state.line(&request.line_id).is_none() {
            return Err(StoreError::not_found("line", &request.line_id));
        }

        let order = Order::planned(
            Self::new_order_id(),
            request.line_id.clone(),
            request.product.clone(),
            request.quantity_kg,
            request.commitment_date.expect("validate 已保证"),
            request.week_number,
        );

        let delta_t = kg_to_t(request.quantity_kg);

        // 产线计划量上调; 达成率留待下一笔产量入账时重算
        let line = state.line_mut(&request.line_id).expect("已解析");
        line.plan += delta_t;

        // 全厂周计划上调; 无实际产出时达成率保持原值
        state.kpis.weekly_plan += delta_t;
        if state.kpis.accumulated_real > 0.0 {
            state.kpis.recompute_compliance();
        }

        state.selected_week = request.week_number;
        state.last_updated = now;
        state.orders.insert(order.id.clone(), order.clone());

        info!(
            order_id = %order.id,
            line_id = %request.line_id,
            product = %request.product,
            quantity_kg = request.quantity_kg,
            week_number = request.week_number,
            "周计划已装载"
        );
        Ok((state, order))
    }
}
