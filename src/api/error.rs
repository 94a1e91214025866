// ==========================================
// 工厂生产计划看板 - API层错误类型
// ==========================================
// 职责: 定义API层错误类型, 转换仓储层错误, 渲染本地化用户文案
// 所有错误信息必须包含显式原因
// ==========================================

use thiserror::Error;

use crate::i18n;
use crate::store::error::StoreError;

/// API层错误类型
#[derive(Error, Debug)]
pub enum ApiError {
    // ==========================================
    // 输入校验错误
    // ==========================================
    #[error("无效输入: {0}")]
    InvalidInput(String),

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

    #[error("产品不属于产线目录: line={line_id}, product={product}")]
    ProductNotInLine { line_id: String, product: String },

    // ==========================================
    // 业务规则错误
    // ==========================================
    #[error("资源未找到: {entity} (id={id})")]
    NotFound { entity: String, id: String },

    #[error("超出剩余额度: order_id={order_id}, requested_kg={requested_kg}, available_kg={available_kg}")]
    HeadroomExceeded {
        order_id: String,
        requested_kg: f64,
        available_kg: f64,
        plan_kg: f64,
    },

    #[error("无效的状态转换: from={from} to={to}")]
    InvalidStateTransition { from: String, to: String },

    // ==========================================
    // 通用错误
    // ==========================================
    #[error("内部错误: {0}")]
    InternalError(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

// ==========================================
// 从 StoreError 转换
// 目的: 将仓储/引擎层错误转换为可向用户解释的业务错误
// ==========================================
impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::Validation(msg) => ApiError::InvalidInput(msg),
            StoreError::NonPositiveQuantity { quantity_kg } => {
                ApiError::NonPositiveQuantity { quantity_kg }
            }
            StoreError::InvalidTimeFormat { value } => ApiError::InvalidTimeFormat { value },
            StoreError::EndBeforeStart { start, end } => ApiError::EndBeforeStart { start, end },
            StoreError::MissingFields(fields) => ApiError::MissingFields(fields),
            StoreError::InvalidWeek(week) => ApiError::InvalidWeek(week),
            StoreError::NotFound { entity, id } => ApiError::NotFound { entity, id },
            StoreError::HeadroomExceeded {
                order_id,
                requested_kg,
                available_kg,
                plan_kg,
            } => ApiError::HeadroomExceeded {
                order_id,
                requested_kg,
                available_kg,
                plan_kg,
            },
            StoreError::InvalidStateTransition { from, to } => {
                ApiError::InvalidStateTransition { from, to }
            }
            StoreError::LockError(msg) => ApiError::InternalError(msg),
            StoreError::Other(err) => ApiError::Other(err),
        }
    }
}

impl ApiError {
    /// 面向用户的本地化文案 (默认西语, 见 locales/)
    pub fn user_message(&self) -> String {
        match self {
            ApiError::InvalidInput(msg) => msg.clone(),
            ApiError::NonPositiveQuantity { .. } => i18n::t("production.positive_required"),
            ApiError::InvalidTimeFormat { value } => {
                i18n::t_with_args("downtime.invalid_time", &[("value", value)])
            }
            ApiError::EndBeforeStart { .. } => i18n::t("downtime.end_before_start"),
            ApiError::MissingFields(fields) => {
                i18n::t_with_args("plan.missing_fields", &[("fields", &fields.join(", "))])
            }
            ApiError::InvalidWeek(_) => i18n::t("week.invalid"),
            ApiError::ProductNotInLine { line_id, product } => i18n::t_with_args(
                "plan.product_not_in_line",
                &[("product", product), ("line", line_id)],
            ),
            ApiError::NotFound { entity, id } => {
                i18n::t_with_args("common.not_found", &[("entity", entity), ("id", id)])
            }
            ApiError::HeadroomExceeded {
                available_kg,
                plan_kg,
                ..
            } => i18n::t_with_args(
                "production.headroom_exceeded",
                &[
                    ("available", &format_kg(*available_kg)),
                    ("max", &format_kg(*plan_kg)),
                ],
            ),
            ApiError::InvalidStateTransition { from, to } => {
                i18n::t_with_args("order.invalid_transition", &[("from", from), ("to", to)])
            }
            ApiError::InternalError(_) | ApiError::Other(_) => i18n::t("common.internal_error"),
        }
    }
}

/// kg 数值文案: 整数值不带小数位
fn format_kg(value: f64) -> String {
    if (value - value.round()).abs() < 1e-9 {
        format!("{}", value.round() as i64)
    } else {
        format!("{:.1}", value)
    }
}

/// Result 类型别名
pub type ApiResult<T> = Result<T, ApiError>;
