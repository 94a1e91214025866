// ==========================================
// 工厂生产计划看板 - 模拟负载参数档案
// ==========================================
// 模拟节拍的可调参数; 字段逐项可缺省, 缺省值即现场演示口径
// ==========================================

use serde::{Deserialize, Serialize};

// ==========================================
// SimulationProfile - 模拟参数
// ==========================================
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimulationProfile {
    /// 单条产线每节拍增量下限 (t)
    #[serde(default = "default_line_increment_min_t")]
    pub line_increment_min_t: f64,

    /// 单条产线每节拍增量上限 (t)
    #[serde(default = "default_line_increment_max_t")]
    pub line_increment_max_t: f64,

    /// 订单均摊抖动幅度 (kg, 正负对称)
    #[serde(default = "default_order_jitter_kg")]
    pub order_jitter_kg: f64,

    /// 订单增量计入机台的倍率
    #[serde(default = "default_machine_attribution")]
    pub machine_attribution: f64,

    /// 每节拍延误数减一的概率
    #[serde(default = "default_delay_recovery_probability")]
    pub delay_recovery_probability: f64,
}

fn default_line_increment_min_t() -> f64 {
    0.5
}

fn default_line_increment_max_t() -> f64 {
    2.0
}

fn default_order_jitter_kg() -> f64 {
    100.0
}

fn default_machine_attribution() -> f64 {
    0.8
}

fn default_delay_recovery_probability() -> f64 {
    0.5
}

impl Default for SimulationProfile {
    fn default() -> Self {
        Self {
            line_increment_min_t: default_line_increment_min_t(),
            line_increment_max_t: default_line_increment_max_t(),
            order_jitter_kg: default_order_jitter_kg(),
            machine_attribution: default_machine_attribution(),
            delay_recovery_probability: default_delay_recovery_probability(),
        }
    }
}

impl SimulationProfile {
    /// 参数合法性整形: 上限不得低于下限, 概率截到 [0,1]
    pub fn sanitized(mut self) -> Self {
        if !self.line_increment_min_t.is_finite() || self.line_increment_min_t < 0.0 {
            self.line_increment_min_t = default_line_increment_min_t();
        }
        if !self.line_increment_max_t.is_finite()
            || self.line_increment_max_t <= self.line_increment_min_t
        {
            self.line_increment_max_t = self.line_increment_min_t + 0.1;
        }
        self.order_jitter_kg = self.order_jitter_kg.max(0.0);
        self.machine_attribution = self.machine_attribution.max(0.0);
        self.delay_recovery_probability = if self.delay_recovery_probability.is_finite() {
            self.delay_recovery_probability.clamp(0.0, 1.0)
        } else {
            default_delay_recovery_probability()
        };
        self
    }
}
