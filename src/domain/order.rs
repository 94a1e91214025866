// ==========================================
// 工厂生产计划看板 - 订单领域模型
// ==========================================
// 口径: 订单层计量单位为千克(kg)
// ==========================================

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

use crate::domain::types::{DowntimeReason, OrderStatus};
use crate::engine::rollup;

// ==========================================
// ProductionRecord - 生产记录
// ==========================================
// 一经追加不可修改; 存储顺序即追加顺序 (展示排序不回写)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductionRecord {
    pub time: NaiveTime,      // 报工时刻 (HH:MM)
    pub quantity_kg: f64,     // 报工量 (kg)
    pub operator: String,     // 报工主体 (操作员或机台ID)
    pub comments: String,     // 备注
}

// ==========================================
// DowntimeRecord - 停机记录
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DowntimeRecord {
    pub reason: DowntimeReason,  // 停机原因
    pub start_time: NaiveTime,   // 开始时刻
    pub end_time: NaiveTime,     // 结束时刻
    pub duration_minutes: i64,   // 时长 (分钟) - 创建时一次性派生
    pub comments: String,        // 备注
}

// ==========================================
// Order - 订单 (批次)
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub id: String,                              // 订单ID
    pub line_id: String,                         // 所属产线
    pub product: String,                         // 产品名称
    pub plan: f64,                               // 计划量 (kg)
    pub real: f64,                               // 累计实际量 (kg)
    pub status: OrderStatus,                     // 状态 (人工驱动)
    pub commitment_date: NaiveDate,              // 交付承诺日
    pub week_number: u32,                        // 所属周 (ISO周号)
    pub production_records: Vec<ProductionRecord>, // 生产记录 (追加序)
    pub downtime_records: Vec<DowntimeRecord>,   // 停机记录 (追加序)
}

impl Order {
    /// 新建空订单 (装载计划入口专用)
    pub fn planned(
        id: String,
        line_id: String,
        product: String,
        plan_kg: f64,
        commitment_date: NaiveDate,
        week_number: u32,
    ) -> Self {
        Self {
            id,
            line_id,
            product,
            plan: plan_kg,
            real: 0.0,
            status: OrderStatus::Planned,
            commitment_date,
            week_number,
            production_records: Vec::new(),
            downtime_records: Vec::new(),
        }
    }

    /// 剩余可报工量 (kg), 不为负
    pub fn headroom(&self) -> f64 {
        (self.plan - self.real).max(0.0)
    }

    /// 进度百分比 (%). 存储值不截断, 展示层自行截到 100
    pub fn progress_pct(&self) -> u32 {
        rollup::compliance_pct(self.real, self.plan)
    }
}
