// ==========================================
// 工厂生产计划看板 - 产线领域模型
// ==========================================
// 口径: 产线层计量单位为吨(t)
// ==========================================

use serde::{Deserialize, Serialize};

use crate::engine::rollup;

// ==========================================
// Line - 产线
// ==========================================
// 静态参考数据: 初始化时创建, 只原地更新, 不删除
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Line {
    pub id: String,        // 产线ID
    pub name: String,      // 产线名称
    pub plan: f64,         // 周计划量 (t)
    pub real: f64,         // 累计实际量 (t)
    pub compliance: u32,   // 达成率 (%) - 派生字段, 只能重算, 不可独立设置
}

impl Line {
    /// 剩余可入账量 (t), 不为负
    pub fn headroom(&self) -> f64 {
        (self.plan - self.real).max(0.0)
    }

    /// 入账产量并重算达成率
    ///
    /// # 参数
    /// - delta_t: 本次增量 (t)
    pub fn credit(&mut self, delta_t: f64) {
        self.real += delta_t;
        self.recompute_compliance();
    }

    /// 重算达成率 (唯一合法的 compliance 写入路径)
    pub fn recompute_compliance(&mut self) {
        self.compliance = rollup::compliance_pct(self.real, self.plan);
    }
}
