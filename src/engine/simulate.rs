// ==========================================
// 工厂生产计划看板 - 模拟负载引擎
// ==========================================
// 职责: 一次批量"机台负载"节拍, 为所有有剩余额度的产线
// 注入有界随机增量并沿联动链分摊, 用于演示/演练联动口径
// 必须保持与人工报工完全相同的不变式 (单调、封顶、达成率派生)
// ==========================================

use std::collections::HashMap;

use chrono::{NaiveDateTime, NaiveTime, Timelike};
use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::config::SimulationProfile;
use crate::domain::order::ProductionRecord;
use crate::domain::PlantState;
use crate::engine::rollup::KG_PER_TONNE;
use crate::i18n;
use crate::store::error::StoreResult;

// ==========================================
// SimulationSummary - 节拍结果
// ==========================================
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimulationSummary {
    pub lines_credited: u32,   // 入账产线数
    pub orders_credited: u32,  // 入账订单数
    pub total_increment_t: f64, // 产线层增量合计 (t)
}

// ==========================================
// LoadSimulator - 模拟负载引擎
// ==========================================
pub struct LoadSimulator {
    profile: SimulationProfile,
}

impl LoadSimulator {
    pub fn new(profile: SimulationProfile) -> Self {
        Self { profile }
    }

    /// 执行一次模拟节拍 (纯变换)
    ///
    /// 每条产线: 增量 = min(uniform(min_t, max_t), 产线剩余额度);
    /// 零额度产线整体跳过 (不入账, 不报错)。
    /// 产线增量折算 kg 后在该线在产订单间均摊并叠加 ±jitter 随机抖动,
    /// 逐单截到自身剩余额度且不为负; 订单增量的 attribution 倍率部分
    /// 计入当前绑定该订单的机台。
    /// 全厂: 合计增量截到全厂剩余额度, 达成率截到 100;
    /// 延误数以 delay_recovery_probability 概率减一。
    pub fn tick<R: Rng>(
        &self,
        mut state: PlantState,
        rng: &mut R,
        now: NaiveDateTime,
    ) -> StoreResult<(PlantState, SimulationSummary)> {
        let record_time = NaiveTime::from_hms_opt(now.time().hour(), now.time().minute(), 0)
            .expect("小时/分钟取值合法");

        let mut total_increment_t = 0.0;
        let mut lines_credited = 0u32;
        // 订单ID → 本节拍入账量(kg), 供机台归因
        let mut credited: HashMap<String, f64> = HashMap::new();

        let line_ids: Vec<String> = state.lines.keys().cloned().collect();
        for line_id in line_ids {
            let headroom = state.line(&line_id).expect("遍历自状态本身").headroom();
            if headroom <= 0.0 {
                continue;
            }

            let increment_t = rng
                .gen_range(self.profile.line_increment_min_t..self.profile.line_increment_max_t)
                .min(headroom);
            total_increment_t += increment_t;
            lines_credited += 1;
            state.line_mut(&line_id).expect("遍历自状态本身").credit(increment_t);

            // 在产订单均摊
            let order_ids: Vec<String> = state
                .orders
                .values()
                .filter(|o| o.line_id == line_id && o.status.is_in_flight())
                .map(|o| o.id.clone())
                .collect();
            if order_ids.is_empty() {
                continue;
            }
            let per_order_kg = increment_t * KG_PER_TONNE / order_ids.len() as f64;

            let operator = i18n::t_with_args("simulate.operator", &[("line", line_id.as_str())]);
            let comment = i18n::t("simulate.comment");
            for order_id in order_ids {
                let order = state.order_mut(&order_id).expect("遍历自状态本身");
                let available = order.headroom();
                if available <= 0.0 {
                    continue;
                }
                let jitter = if self.profile.order_jitter_kg > 0.0 {
                    rng.gen_range(-self.profile.order_jitter_kg..self.profile.order_jitter_kg)
                } else {
                    0.0
                };
                // 均摊 + 抖动, 截到订单额度, 不为负 (保持单调不变式)
                let increment_kg = (per_order_kg + jitter).round().min(available).max(0.0);
                if increment_kg <= 0.0 {
                    continue;
                }
                order.real += increment_kg;
                order.production_records.push(ProductionRecord {
                    time: record_time,
                    quantity_kg: increment_kg,
                    operator: operator.clone(),
                    comments: comment.clone(),
                });
                *credited.entry(order_id).or_insert(0.0) += increment_kg;
            }
        }

        // 机台归因: 仅当前绑定订单拿到增量时计数
        for machine in state.machines.values_mut() {
            if let Some(increment_kg) = credited.get(&machine.current_order_id) {
                machine.produced_so_far +=
                    (increment_kg * self.profile.machine_attribution).round();
            }
        }

        // 全厂 KPI: 合计增量截到剩余额度, 达成率截到 100
        let global_increment = total_increment_t.min(state.kpis.headroom());
        state.kpis.credit(global_increment, true);
        if state.kpis.delay_count > 0
            && rng.gen_bool(self.profile.delay_recovery_probability)
        {
            state.kpis.delay_count -= 1;
        }
        state.last_updated = now;

        let summary = SimulationSummary {
            lines_credited,
            orders_credited: credited.len() as u32,
            total_increment_t,
        };
        info!(
            lines_credited,
            orders_credited = summary.orders_credited,
            total_increment_t,
            "模拟负载节拍完成"
        );
        Ok((state, summary))
    }
}
