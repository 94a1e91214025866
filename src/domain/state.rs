// ==========================================
// 工厂生产计划看板 - 聚合状态根
// ==========================================
// 唯一可变根: 每次变更整体替换 (根级写时复制)
// 本层不含数据访问逻辑, 不含引擎逻辑
// ==========================================

use std::collections::BTreeMap;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::domain::alert::Alert;
use crate::domain::kpi::KpiSnapshot;
use crate::domain::line::Line;
use crate::domain::machine::Machine;
use crate::domain::order::Order;

// ==========================================
// PlantState - 全厂看板状态
// ==========================================
// 实体表使用 BTreeMap: 遍历顺序确定, 快照可复现
// 告警为有序列表, 最新在前
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlantState {
    pub selected_week: u32,               // 看板当前选中周
    pub plant_name: String,               // 工厂名称
    pub last_updated: NaiveDateTime,      // 最近一次状态变更时刻
    pub kpis: KpiSnapshot,                // 全厂 KPI
    pub lines: BTreeMap<String, Line>,    // 产线表
    pub orders: BTreeMap<String, Order>,  // 订单表
    pub alerts: Vec<Alert>,               // 告警列表 (最新在前)
    pub machines: BTreeMap<String, Machine>, // 机台表
}

impl PlantState {
    pub fn line(&self, id: &str) -> Option<&Line> {
        self.lines.get(id)
    }

    pub fn order(&self, id: &str) -> Option<&Order> {
        self.orders.get(id)
    }

    pub fn machine(&self, id: &str) -> Option<&Machine> {
        self.machines.get(id)
    }

    pub fn line_mut(&mut self, id: &str) -> Option<&mut Line> {
        self.lines.get_mut(id)
    }

    pub fn order_mut(&mut self, id: &str) -> Option<&mut Order> {
        self.orders.get_mut(id)
    }

    pub fn machine_mut(&mut self, id: &str) -> Option<&mut Machine> {
        self.machines.get_mut(id)
    }

    /// 某产线的全部订单 (确定序)
    pub fn orders_of_line(&self, line_id: &str) -> Vec<&Order> {
        self.orders.values().filter(|o| o.line_id == line_id).collect()
    }

    /// 某周的全部订单
    pub fn orders_of_week(&self, week_number: u32) -> Vec<&Order> {
        self.orders.values().filter(|o| o.week_number == week_number).collect()
    }

    /// 前插告警并按保留上限截断最旧项
    pub fn push_alert(&mut self, alert: Alert, retention: usize) {
        self.alerts.insert(0, alert);
        self.alerts.truncate(retention);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::types::AlertSeverity;

    fn alert(title: &str) -> Alert {
        Alert {
            severity: AlertSeverity::Info,
            icon: String::new(),
            title: title.to_string(),
            description: String::new(),
        }
    }

    #[test]
    fn test_push_alert_prepends_and_truncates() {
        let mut state = crate::store::seed::default_state(
            chrono::NaiveDate::from_ymd_opt(2024, 4, 15)
                .unwrap()
                .and_hms_opt(8, 0, 0)
                .unwrap(),
        );
        state.alerts.clear();
        for i in 0..5 {
            state.push_alert(alert(&format!("a{}", i)), 3);
        }
        assert_eq!(state.alerts.len(), 3);
        // 最新在前
        assert_eq!(state.alerts[0].title, "a4");
        assert_eq!(state.alerts[2].title, "a2");
    }
}
