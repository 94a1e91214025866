// ==========================================
// 工厂生产计划看板 - 仓储层错误类型
// ==========================================
// 工具: thiserror 派生宏
// 所有错误均为局部可恢复: 被拒绝的操作不产生任何状态变更
// ==========================================

use thiserror::Error;

/// 仓储/引擎层错误类型
#[derive(Error, Debug)]
pub enum StoreError {
    // ===== 输入校验错误 =====
    #[error("校验失败: {0}")]
    Validation(String),

    #[error("报工量必须大于 0: {quantity_kg}")]
    NonPositiveQuantity { quantity_kg: f64 },

    #[error("时刻格式非法: {value}")]
    InvalidTimeFormat { value: String },

    #[error("结束时刻必须大于等于开始时刻: start={start} end={end}")]
    EndBeforeStart { start: String, end: String },

    #[error("缺失或非法字段: {}", .0.join(", "))]
    MissingFields(Vec<String>),

    #[error("周号非法: {0}")]
    InvalidWeek(u32),

    // ===== 引用缺失错误 =====
    #[error("记录未找到: {entity} (id={id})")]
    NotFound { entity: String, id: String },

    // ===== 业务规则错误 =====
    #[error("超出剩余额度: order_id={order_id}, requested_kg={requested_kg}, available_kg={available_kg}, plan_kg={plan_kg}")]
    HeadroomExceeded {
        order_id: String,
        requested_kg: f64,
        available_kg: f64,
        plan_kg: f64,
    },

    #[error("无效的状态转换: from={from} to={to}")]
    InvalidStateTransition { from: String, to: String },

    // ===== 基础设施错误 =====
    #[error("状态锁获取失败: {0}")]
    LockError(String),

    // ===== 通用错误 =====
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl StoreError {
    /// NotFound 便捷构造
    pub fn not_found(entity: &str, id: &str) -> Self {
        StoreError::NotFound {
            entity: entity.to_string(),
            id: id.to_string(),
        }
    }
}

/// Result 类型别名
pub type StoreResult<T> = Result<T, StoreError>;
