// ==========================================
// 测试辅助函数
// ==========================================
// 职责: 固定时刻、种子状态、API 组装
// ==========================================

#![allow(dead_code)]

use std::sync::Arc;

use chrono::{NaiveDate, NaiveDateTime};
use plant_dashboard::config::DashboardConfig;
use plant_dashboard::domain::{Machine, PlantState};
use plant_dashboard::store::seed;
use plant_dashboard::{DashboardApi, PlanApi, ProductionApi, StateStore};

/// 固定测试时刻: 2024-04-15 (周一, ISO 第 16 周) 08:00
pub fn fixed_now() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2024, 4, 15)
        .unwrap()
        .and_hms_opt(8, 0, 0)
        .unwrap()
}

/// 固定时刻构造的种子状态
pub fn seeded_state() -> PlantState {
    seed::default_state(fixed_now())
}

/// 种子状态 + 补充机台: 每条产线一台在班机台, 便于多线联动测试
pub fn seeded_state_multi_machine() -> PlantState {
    let mut state = seeded_state();
    for (machine_id, line_id, order_id, product) in [
        ("LINEA_B_06", "LINEA_B", "FR-352", "Concentrado Pera"),
        ("LINEA_C_08", "LINEA_C", "FR-355", "Envasado Pulpa 1L"),
    ] {
        state.machines.insert(
            machine_id.to_string(),
            Machine {
                id: machine_id.to_string(),
                line_id: line_id.to_string(),
                current_order_id: order_id.to_string(),
                product: product.to_string(),
                shift: "Mañana".to_string(),
                shift_target: 2000.0,
                produced_so_far: 0.0,
            },
        );
    }
    state
}

/// 以种子状态组装仓储
pub fn seeded_store() -> Arc<StateStore> {
    Arc::new(StateStore::with_state(seeded_state()))
}

/// 缺省配置
pub fn default_config() -> Arc<DashboardConfig> {
    Arc::new(DashboardConfig::load_or_default(Some(std::path::Path::new(
        "/nonexistent/plant-dashboard-config.json",
    ))))
}

/// 组装全部 API (共享同一仓储)
pub fn apis() -> (Arc<StateStore>, ProductionApi, PlanApi, DashboardApi) {
    let store = seeded_store();
    let config = default_config();
    (
        store.clone(),
        ProductionApi::new(store.clone(), config.clone()),
        PlanApi::new(store.clone(), config.clone()),
        DashboardApi::new(store.clone(), config),
    )
}

/// 某产线订单实际量合计 (kg)
pub fn line_orders_real_kg(state: &PlantState, line_id: &str) -> f64 {
    state
        .orders
        .values()
        .filter(|o| o.line_id == line_id)
        .map(|o| o.real)
        .sum()
}
