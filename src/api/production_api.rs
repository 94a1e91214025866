// ==========================================
// 工厂生产计划看板 - 报工 API
// ==========================================
// 职责: 操作员/机台两条报工入口与停机上报
// 架构: API 层 → 引擎层 (纯变换) → 状态仓储 (整体替换)
// ==========================================

use std::sync::Arc;

use chrono::Local;
use serde::{Deserialize, Serialize};

use crate::api::error::ApiResult;
use crate::config::DashboardConfig;
use crate::domain::machine::Machine;
use crate::domain::order::{DowntimeRecord, Order};
use crate::engine::downtime::{DowntimeEngine, DowntimeInput};
use crate::engine::production::{CapPolicy, ProductionEngine, ProductionInput, ProductionReceipt};
use crate::store::StateStore;

// ==========================================
// MachineContext - 机台上下文 (操作员界面)
// ==========================================
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MachineContext {
    pub machine: Machine,
    /// 机台当前绑定订单; 引用失配时为 None (界面回退显示机台产品)
    pub order: Option<Order>,
}

// ==========================================
// ProductionApi - 报工 API
// ==========================================
pub struct ProductionApi {
    store: Arc<StateStore>,
    config: Arc<DashboardConfig>,
}

impl ProductionApi {
    pub fn new(store: Arc<StateStore>, config: Arc<DashboardConfig>) -> Self {
        Self { store, config }
    }

    /// 严格报工: 操作员绑定订单的入口, 超出订单剩余额度即拒绝
    ///
    /// # 返回
    /// - Ok(ProductionReceipt): 入账回执 (含订单进度)
    /// - Err(HeadroomExceeded): 超额度, 文案回报最大可报工量
    pub fn submit_strict(
        &self,
        machine_id: &str,
        order_id: &str,
        quantity_kg: f64,
        comments: &str,
    ) -> ApiResult<ProductionReceipt> {
        self.submit(ProductionInput {
            machine_id: machine_id.to_string(),
            order_id: Some(order_id.to_string()),
            quantity_kg,
            comments: comments.to_string(),
            cap: CapPolicy::Strict,
        })
    }

    /// 自由报工: 机台入口, 入账到机台当前绑定订单, 不封顶
    pub fn submit_unchecked(
        &self,
        machine_id: &str,
        quantity_kg: f64,
        comments: &str,
    ) -> ApiResult<ProductionReceipt> {
        self.submit(ProductionInput {
            machine_id: machine_id.to_string(),
            order_id: None,
            quantity_kg,
            comments: comments.to_string(),
            cap: CapPolicy::Unchecked,
        })
    }

    fn submit(&self, input: ProductionInput) -> ApiResult<ProductionReceipt> {
        let now = Local::now().naive_local();
        self.store
            .apply(|state| ProductionEngine::record(state, &input, now))
            .map_err(Into::into)
    }

    /// 停机上报
    ///
    /// 缺料/维护原因会同时前插一条看板告警
    pub fn report_downtime(&self, input: DowntimeInput) -> ApiResult<DowntimeRecord> {
        let retention = self.config.alert_retention;
        self.store
            .apply(|state| DowntimeEngine::record(state, &input, retention))
            .map_err(Into::into)
    }

    /// 机台上下文查询 (机台 + 当前绑定订单)
    pub fn machine_context(&self, machine_id: &str) -> ApiResult<MachineContext> {
        let state = self.store.snapshot()?;
        let machine = state
            .machine(machine_id)
            .ok_or_else(|| crate::store::StoreError::not_found("machine", machine_id))?
            .clone();
        let order = state.order(&machine.current_order_id).cloned();
        Ok(MachineContext { machine, order })
    }
}
