// ==========================================
// 工厂生产计划看板 - 全厂 KPI 领域模型
// ==========================================
// 口径: 全厂层计量单位为吨(t)
// ==========================================

use serde::{Deserialize, Serialize};

use crate::engine::rollup;

// ==========================================
// KpiSnapshot - 全厂 KPI 快照
// ==========================================
// 反规范化的全厂汇总, 必须与各产线增量保持一致
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KpiSnapshot {
    pub weekly_plan: f64,      // 周计划总量 (t)
    pub accumulated_real: f64, // 累计实际总量 (t)
    pub compliance: u32,       // 全厂达成率 (%)
    pub delay_count: u32,      // 延误订单数
}

impl KpiSnapshot {
    /// 全厂剩余可入账量 (t), 不为负
    pub fn headroom(&self) -> f64 {
        (self.weekly_plan - self.accumulated_real).max(0.0)
    }

    /// 入账产量并重算达成率
    ///
    /// # 参数
    /// - delta_t: 本次增量 (t)
    /// - clamp: 是否将实际量截到周计划、达成率截到 100 (严格报工口径)
    pub fn credit(&mut self, delta_t: f64, clamp: bool) {
        self.accumulated_real += delta_t;
        self.recompute_compliance();
        if clamp {
            self.accumulated_real = self.accumulated_real.min(self.weekly_plan);
            self.compliance = self.compliance.min(100);
        }
    }

    /// 重算达成率
    pub fn recompute_compliance(&mut self) {
        self.compliance = rollup::compliance_pct(self.accumulated_real, self.weekly_plan);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kpis() -> KpiSnapshot {
        KpiSnapshot {
            weekly_plan: 120.0,
            accumulated_real: 94.0,
            compliance: 78,
            delay_count: 3,
        }
    }

    #[test]
    fn test_credit_unclamped_can_exceed_plan() {
        let mut k = kpis();
        k.credit(30.0, false);
        assert!((k.accumulated_real - 124.0).abs() < 1e-9);
        assert_eq!(k.compliance, 103);
    }

    #[test]
    fn test_credit_clamped_caps_at_plan() {
        let mut k = kpis();
        k.credit(30.0, true);
        assert!((k.accumulated_real - 120.0).abs() < 1e-9);
        assert_eq!(k.compliance, 100);
    }
}
