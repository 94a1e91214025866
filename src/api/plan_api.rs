// ==========================================
// 工厂生产计划看板 - 计划 API
// ==========================================
// 职责: 周计划装载、订单查询、订单状态流转
// ==========================================

use std::sync::Arc;

use chrono::Local;
use tracing::info;

use crate::api::error::{ApiError, ApiResult};
use crate::config::DashboardConfig;
use crate::domain::order::Order;
use crate::domain::types::OrderStatus;
use crate::engine::plan_loader::{LoadPlanRequest, PlanLoader};
use crate::store::{StateStore, StoreError};

// ==========================================
// PlanApi - 计划 API
// ==========================================
pub struct PlanApi {
    store: Arc<StateStore>,
    config: Arc<DashboardConfig>,
}

impl PlanApi {
    pub fn new(store: Arc<StateStore>, config: Arc<DashboardConfig>) -> Self {
        Self { store, config }
    }

    /// 装载一条周计划 (创建订单)
    ///
    /// 在引擎校验之外, 额外做产品归线校验 (产品必须在产线目录内;
    /// 原界面以下拉框约束, 此处收紧为硬校验)
    pub fn load_plan(&self, request: LoadPlanRequest) -> ApiResult<Order> {
        if !request.line_id.trim().is_empty()
            && !request.product.trim().is_empty()
            && !self
                .config
                .plant
                .product_allowed(&request.line_id, &request.product)
        {
            return Err(ApiError::ProductNotInLine {
                line_id: request.line_id.clone(),
                product: request.product.clone(),
            });
        }

        let now = Local::now().naive_local();
        self.store
            .apply(|state| PlanLoader::load(state, &request, now))
            .map_err(Into::into)
    }

    /// 订单状态流转 (人工驱动; 数量达成不会自动流转)
    ///
    /// 合法转移: Planned → InProgress → (AwaitingQuality) → Finished;
    /// 任意状态 → Delayed; Delayed → InProgress (人工恢复)
    /// 全厂延误数随 Delayed 进出同步加减
    pub fn set_order_status(&self, order_id: &str, next: OrderStatus) -> ApiResult<Order> {
        let now = Local::now().naive_local();
        let order_id = order_id.to_string();
        self.store
            .apply(move |mut state| {
                let order = state
                    .order(&order_id)
                    .ok_or_else(|| StoreError::not_found("order", &order_id))?;
                let current = order.status;
                if !current.can_transition_to(next) {
                    return Err(StoreError::InvalidStateTransition {
                        from: current.label().to_string(),
                        to: next.label().to_string(),
                    });
                }

                // 延误计数随状态进出维护
                if next == OrderStatus::Delayed {
                    state.kpis.delay_count += 1;
                } else if current == OrderStatus::Delayed {
                    state.kpis.delay_count = state.kpis.delay_count.saturating_sub(1);
                }

                let order = state.order_mut(&order_id).expect("已解析");
                order.status = next;
                let updated = order.clone();
                state.last_updated = now;
                info!(order_id = %order_id, from = %current, to = %next, "订单状态流转");
                Ok((state, updated))
            })
            .map_err(Into::into)
    }

    /// 按ID查询订单
    pub fn order(&self, order_id: &str) -> ApiResult<Order> {
        let state = self.store.snapshot()?;
        state
            .order(order_id)
            .cloned()
            .ok_or_else(|| StoreError::not_found("order", order_id).into())
    }

    /// 某产线的全部订单
    pub fn orders_of_line(&self, line_id: &str) -> ApiResult<Vec<Order>> {
        let state = self.store.snapshot()?;
        if state.line(line_id).is_none() {
            return Err(StoreError::not_found("line", line_id).into());
        }
        Ok(state.orders_of_line(line_id).into_iter().cloned().collect())
    }

    /// 某周的全部订单
    pub fn orders_of_week(&self, week_number: u32) -> ApiResult<Vec<Order>> {
        let state = self.store.snapshot()?;
        Ok(state
            .orders_of_week(week_number)
            .into_iter()
            .cloned()
            .collect())
    }
}
