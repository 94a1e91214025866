// ==========================================
// 工厂生产计划看板 - 看板 API
// ==========================================
// 职责: 全厂聚合查询、周视图、模拟负载与重置
// 查询一律在快照上进行, 不持有仓储内部引用
// ==========================================

use std::sync::Arc;

use chrono::Local;
use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::api::error::ApiResult;
use crate::config::DashboardConfig;
use crate::domain::alert::Alert;
use crate::domain::kpi::KpiSnapshot;
use crate::domain::line::Line;
use crate::domain::order::Order;
use crate::domain::state::PlantState;
use crate::domain::types::OrderStatus;
use crate::domain::week::{self, WeekInfo};
use crate::engine::rollup;
use crate::engine::simulate::{LoadSimulator, SimulationSummary};
use crate::store::{seed, StateStore, StoreError};

// ==========================================
// LineWeekSummary - 产线周视图
// ==========================================
// 仅统计选中周订单的产线口径 (管理端周看板)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LineWeekSummary {
    pub line_id: String,
    pub name: String,
    pub plan_t: f64,
    pub real_t: f64,
    pub compliance: u32,
    pub order_count: usize,
}

// ==========================================
// DashboardApi - 看板 API
// ==========================================
pub struct DashboardApi {
    store: Arc<StateStore>,
    config: Arc<DashboardConfig>,
}

impl DashboardApi {
    pub fn new(store: Arc<StateStore>, config: Arc<DashboardConfig>) -> Self {
        Self { store, config }
    }

    /// 全量状态快照 (只读)
    pub fn snapshot(&self) -> ApiResult<PlantState> {
        Ok(self.store.snapshot()?)
    }

    /// 全厂 KPI
    pub fn kpis(&self) -> ApiResult<KpiSnapshot> {
        Ok(self.store.snapshot()?.kpis)
    }

    /// 告警列表 (最新在前, 已按保留上限截断)
    pub fn alerts(&self) -> ApiResult<Vec<Alert>> {
        Ok(self.store.snapshot()?.alerts)
    }

    /// 产线列表 (确定序)
    pub fn lines(&self) -> ApiResult<Vec<Line>> {
        Ok(self.store.snapshot()?.lines.into_values().collect())
    }

    /// 某周订单中的延误单数
    pub fn week_delayed_count(&self, week_number: u32) -> ApiResult<usize> {
        let state = self.store.snapshot()?;
        Ok(state
            .orders_of_week(week_number)
            .iter()
            .filter(|o| o.status == OrderStatus::Delayed)
            .count())
    }

    /// 产线周视图: 各产线仅按选中周订单聚合计划/实际/达成率
    pub fn line_week_summaries(&self, week_number: u32) -> ApiResult<Vec<LineWeekSummary>> {
        let state = self.store.snapshot()?;
        let summaries = state
            .lines
            .values()
            .map(|line| {
                let orders: Vec<&Order> = state
                    .orders
                    .values()
                    .filter(|o| o.line_id == line.id && o.week_number == week_number)
                    .collect();
                let plan_t = rollup::kg_to_t(orders.iter().map(|o| o.plan).sum());
                let real_t = rollup::kg_to_t(orders.iter().map(|o| o.real).sum());
                LineWeekSummary {
                    line_id: line.id.clone(),
                    name: line.name.clone(),
                    plan_t,
                    real_t,
                    compliance: rollup::compliance_pct(real_t, plan_t),
                    order_count: orders.len(),
                }
            })
            .collect();
        Ok(summaries)
    }

    /// 周选择器备选项: 当周及其后 12 周
    pub fn available_weeks(&self) -> Vec<WeekInfo> {
        week::upcoming_weeks(Local::now().date_naive(), 13)
    }

    /// 切换看板选中周
    pub fn select_week(&self, week_number: u32) -> ApiResult<u32> {
        if week_number == 0 {
            return Err(StoreError::InvalidWeek(week_number).into());
        }
        let now = Local::now().naive_local();
        self.store
            .apply(|mut state| {
                state.selected_week = week_number;
                state.last_updated = now;
                Ok((state, week_number))
            })
            .map_err(Into::into)
    }

    /// 模拟负载节拍 (演示联动口径)
    pub fn simulate_load(&self) -> ApiResult<SimulationSummary> {
        self.simulate_load_with(&mut rand::thread_rng())
    }

    /// 模拟负载节拍 (注入随机源, 测试用)
    pub fn simulate_load_with<R: Rng>(&self, rng: &mut R) -> ApiResult<SimulationSummary> {
        let now = Local::now().naive_local();
        let simulator = LoadSimulator::new(self.config.simulation.clone());
        self.store
            .apply(|state| simulator.tick(state, rng, now))
            .map_err(Into::into)
    }

    /// 重置: 以种子数据集的全新深拷贝整体替换当前状态
    pub fn reset(&self) -> ApiResult<()> {
        let now = Local::now().naive_local();
        self.store.apply(|_discarded| {
            info!("看板状态已重置为种子数据集");
            Ok((seed::default_state(now), ()))
        })?;
        Ok(())
    }
}
