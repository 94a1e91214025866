// ==========================================
// 工厂生产计划看板 - 报工引擎
// ==========================================
// 职责: 生产报工的校验与入账, 两种封顶口径共用一条入账路径
// ==========================================
// 口径说明:
// - Strict: 操作员绑定订单的报工入口, 超出订单剩余额度即拒绝,
//   全厂 KPI 同步截断 (实际量≤周计划, 达成率≤100)
// - Unchecked: 机台自由报工入口, 不封顶, 超报可使订单/产线/全厂
//   越过 100% (保留自由口径, 两入口的分叉是有意保留的现场行为)
// ==========================================

use chrono::{NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::domain::order::ProductionRecord;
use crate::domain::PlantState;
use crate::engine::rollup::RollupEngine;
use crate::store::error::{StoreError, StoreResult};

// ==========================================
// CapPolicy - 封顶口径
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CapPolicy {
    Strict,    // 严格: 超额度拒绝
    Unchecked, // 自由: 不封顶
}

// ==========================================
// ProductionInput - 报工输入
// ==========================================
#[derive(Debug, Clone)]
pub struct ProductionInput {
    pub machine_id: String,
    /// 指定订单; None 时入账到机台当前绑定订单
    pub order_id: Option<String>,
    pub quantity_kg: f64,
    pub comments: String,
    pub cap: CapPolicy,
}

// ==========================================
// ProductionReceipt - 报工回执
// ==========================================
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductionReceipt {
    pub order_id: String,
    pub accepted_kg: f64,
    pub order_real: f64,
    pub order_plan: f64,
    pub progress_pct: u32,
}

// ==========================================
// ProductionEngine - 报工引擎
// ==========================================
pub struct ProductionEngine;

impl ProductionEngine {
    /// 记录一笔生产报工 (纯变换: 入参状态为副本, 失败即整体丢弃)
    pub fn record(
        mut state: PlantState,
        input: &ProductionInput,
        now: NaiveDateTime,
    ) -> StoreResult<(PlantState, ProductionReceipt)> {
        // 报工量必须为正的有限值
        if !input.quantity_kg.is_finite() || input.quantity_kg <= 0.0 {
            return Err(StoreError::NonPositiveQuantity {
                quantity_kg: input.quantity_kg,
            });
        }

        // 严格口径: 先做额度校验, 再入账
        if input.cap == CapPolicy::Strict {
            let machine = state
                .machine(&input.machine_id)
                .ok_or_else(|| StoreError::not_found("machine", &input.machine_id))?;
            let order_id = input
                .order_id
                .as_deref()
                .unwrap_or(&machine.current_order_id)
                .to_string();
            let order = state
                .order(&order_id)
                .ok_or_else(|| StoreError::not_found("order", &order_id))?;
            let available = order.headroom();
            if input.quantity_kg > available {
                warn!(
                    machine_id = %input.machine_id,
                    order_id = %order_id,
                    requested_kg = input.quantity_kg,
                    available_kg = available,
                    "报工超出订单剩余额度, 已拒绝"
                );
                return Err(StoreError::HeadroomExceeded {
                    order_id,
                    requested_kg: input.quantity_kg,
                    available_kg: available,
                    plan_kg: order.plan,
                });
            }
        }

        let record = ProductionRecord {
            time: wall_clock_minute(now),
            quantity_kg: input.quantity_kg,
            operator: input.machine_id.clone(),
            comments: input.comments.clone(),
        };

        let order_id = RollupEngine::credit_chain(
            &mut state,
            &input.machine_id,
            input.order_id.as_deref(),
            input.quantity_kg,
            record,
            input.cap == CapPolicy::Strict,
        )?;
        state.last_updated = now;

        let order = state.order(&order_id).expect("入账后必然存在");
        let receipt = ProductionReceipt {
            order_id: order_id.clone(),
            accepted_kg: input.quantity_kg,
            order_real: order.real,
            order_plan: order.plan,
            progress_pct: order.progress_pct(),
        };
        info!(
            machine_id = %input.machine_id,
            order_id = %order_id,
            quantity_kg = input.quantity_kg,
            cap = ?input.cap,
            "生产报工入账"
        );
        Ok((state, receipt))
    }
}

/// 报工时刻按分钟记录 (HH:MM)
fn wall_clock_minute(now: NaiveDateTime) -> NaiveTime {
    let t = now.time();
    NaiveTime::from_hms_opt(chrono::Timelike::hour(&t), chrono::Timelike::minute(&t), 0)
        .expect("小时/分钟取值合法")
}
