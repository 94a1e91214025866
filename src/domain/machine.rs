// ==========================================
// 工厂生产计划看板 - 机台领域模型
// ==========================================

use serde::{Deserialize, Serialize};

// ==========================================
// Machine - 机台
// ==========================================
// 静态参考数据; produced_so_far 为累计计数器, 随报工单调递增
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Machine {
    pub id: String,               // 机台ID
    pub line_id: String,          // 所属产线
    pub current_order_id: String, // 当前绑定订单
    pub product: String,          // 当前产品
    pub shift: String,            // 班次
    pub shift_target: f64,        // 班次目标 (kg)
    pub produced_so_far: f64,     // 本班累计产量 (kg)
}
