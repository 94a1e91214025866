// ==========================================
// 工厂生产计划看板 - 核心库
// ==========================================
// 系统定位: 单会话内存态看板核心 (无持久化)
// 口径: 产线吨(t) / 订单千克(kg), 换算 1t = 1000kg
// ==========================================

// 初始化国际化系统 (默认西语界面文案)
rust_i18n::i18n!("locales", fallback = "es");

// ==========================================
// 模块声明
// ==========================================

// 领域层 - 实体与类型
pub mod domain;

// 状态仓储层 - 唯一可变根与变换入口
pub mod store;

// 引擎层 - 业务规则 (纯变换)
pub mod engine;

// 配置层 - 工厂档案与模拟参数
pub mod config;

// 日志系统
pub mod logging;

// 国际化
pub mod i18n;

// API 层 - 业务接口
pub mod api;

// ==========================================
// 重导出核心类型
// ==========================================

// 领域类型
pub use domain::types::{AlertSeverity, DowntimeReason, OrderStatus};

// 领域实体
pub use domain::{
    Alert, DowntimeRecord, KpiSnapshot, Line, Machine, Order, PlantState, ProductionRecord,
};

// 周历工具
pub use domain::week::{upcoming_weeks, week_end, week_number, week_start, WeekInfo};

// 状态仓储
pub use store::{StateStore, StoreError, StoreResult};

// 引擎
pub use engine::{
    CapPolicy, DowntimeEngine, DowntimeInput, LoadPlanRequest, LoadSimulator, PlanLoader,
    ProductionEngine, ProductionInput, ProductionReceipt, RollupEngine, SimulationSummary,
};

// 配置
pub use config::{DashboardConfig, PlantProfile, SimulationProfile};

// API
pub use api::{ApiError, ApiResult, DashboardApi, PlanApi, ProductionApi};

// ==========================================
// 常量定义
// ==========================================

// 系统版本
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// 系统名称
pub const APP_NAME: &str = "工厂生产计划看板";
