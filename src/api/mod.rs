// ==========================================
// 工厂生产计划看板 - API 层
// ==========================================
// 职责: 提供业务 API 接口, 供展示层调用
// 展示层只经由本层与快照交互, 禁止直接改写状态字段
// ==========================================

pub mod dashboard_api;
pub mod error;
pub mod plan_api;
pub mod production_api;

// 重导出核心类型
pub use dashboard_api::{DashboardApi, LineWeekSummary};
pub use error::{ApiError, ApiResult};
pub use plan_api::PlanApi;
pub use production_api::{MachineContext, ProductionApi};
