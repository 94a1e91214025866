// ==========================================
// 工厂生产计划看板 - 停机上报引擎
// ==========================================
// 职责: 停机记录的时刻校验、时长派生、告警生成
// 时长按当日时刻差计算, 不处理跨午夜
// ==========================================

use chrono::NaiveTime;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::domain::alert::Alert;
use crate::domain::order::DowntimeRecord;
use crate::domain::types::DowntimeReason;
use crate::domain::PlantState;
use crate::store::error::{StoreError, StoreResult};

// ==========================================
// DowntimeInput - 停机上报输入
// ==========================================
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DowntimeInput {
    pub machine_id: String,
    pub reason: DowntimeReason,
    /// 表单原始时刻值, 格式 HH:MM
    pub start_time: String,
    pub end_time: String,
    pub comments: String,
}

// ==========================================
// DowntimeEngine - 停机上报引擎
// ==========================================
pub struct DowntimeEngine;

impl DowntimeEngine {
    /// 解析 HH:MM 表单时刻
    pub fn parse_hhmm(value: &str) -> StoreResult<NaiveTime> {
        NaiveTime::parse_from_str(value.trim(), "%H:%M").map_err(|_| {
            StoreError::InvalidTimeFormat {
                value: value.to_string(),
            }
        })
    }

    /// 记录一次停机 (纯变换)
    ///
    /// 校验: 结束时刻不得早于开始时刻; 违规即拒绝, 状态零变更
    /// 副作用: 缺料/维护原因前插一条看板告警, 列表按 alert_retention 截断
    ///
    /// 注: 停机上报不触碰 last_updated (与产量入账口径不同)
    pub fn record(
        mut state: PlantState,
        input: &DowntimeInput,
        alert_retention: usize,
    ) -> StoreResult<(PlantState, DowntimeRecord)> {
        let start = Self::parse_hhmm(&input.start_time)?;
        let end = Self::parse_hhmm(&input.end_time)?;
        if end < start {
            return Err(StoreError::EndBeforeStart {
                start: input.start_time.clone(),
                end: input.end_time.clone(),
            });
        }

        let machine = state
            .machine(&input.machine_id)
            .ok_or_else(|| StoreError::not_found("machine", &input.machine_id))?;
        let order_id = machine.current_order_id.clone();

        let record = DowntimeRecord {
            reason: input.reason,
            start_time: start,
            end_time: end,
            duration_minutes: (end - start).num_minutes(),
            comments: input.comments.clone(),
        };

        let order = state
            .order_mut(&order_id)
            .ok_or_else(|| StoreError::not_found("order", &order_id))?;
        let product = order.product.clone();
        order.downtime_records.push(record.clone());

        // 缺料 → danger, 维护 → warning; 其余原因不产生告警
        if let Some(alert) = Alert::from_downtime(
            input.reason,
            &input.machine_id,
            &product,
            &start.format("%H:%M").to_string(),
        ) {
            state.push_alert(alert, alert_retention);
        }

        info!(
            machine_id = %input.machine_id,
            order_id = %order_id,
            reason = %input.reason,
            duration_minutes = record.duration_minutes,
            "停机记录入账"
        );
        Ok((state, record))
    }
}
