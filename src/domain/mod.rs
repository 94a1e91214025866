// ==========================================
// 工厂生产计划看板 - 领域模型层
// ==========================================
// 职责: 定义领域实体、封闭类型、聚合状态根、周历工具
// 不含数据访问逻辑, 不含引擎逻辑
// ==========================================

pub mod alert;
pub mod kpi;
pub mod line;
pub mod machine;
pub mod order;
pub mod state;
pub mod types;
pub mod week;

// 重导出核心类型
pub use alert::Alert;
pub use kpi::KpiSnapshot;
pub use line::Line;
pub use machine::Machine;
pub use order::{DowntimeRecord, Order, ProductionRecord};
pub use state::PlantState;
pub use types::{AlertSeverity, DowntimeReason, OrderStatus};
pub use week::WeekInfo;
