// ==========================================
// 工厂生产计划看板 - 引擎层
// ==========================================
// 职责: 以纯变换表达业务规则; 引擎不持有状态
// 规则失败必须带显式原因, 且不产生部分变更
// ==========================================

pub mod downtime;
pub mod plan_loader;
pub mod production;
pub mod rollup;
pub mod simulate;

// 重导出核心引擎
pub use downtime::{DowntimeEngine, DowntimeInput};
pub use plan_loader::{LoadPlanRequest, PlanLoader};
pub use production::{CapPolicy, ProductionEngine, ProductionInput, ProductionReceipt};
pub use rollup::RollupEngine;
pub use simulate::{LoadSimulator, SimulationSummary};
