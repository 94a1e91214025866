// ==========================================
// 工厂生产计划看板 - 领域类型定义
// ==========================================
// 口径: 封闭枚举, 不用自由字符串表达状态/原因
// 序列化格式: SCREAMING_SNAKE_CASE (告警级别除外, 见下)
// ==========================================

use serde::{Deserialize, Serialize};
use std::fmt;

// ==========================================
// 订单状态 (Order Status)
// ==========================================
// 状态机: Planned → InProgress → (AwaitingQuality) → Finished
//         任意状态 → Delayed, Delayed → InProgress (人工恢复)
// 状态永远由人工驱动, 不由数量推导 (real == plan 不会自动置为 Finished)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderStatus {
    Planned,        // 已计划
    InProgress,     // 生产中
    AwaitingQuality, // 待质检
    Finished,       // 已完成
    Delayed,        // 延误
}

impl OrderStatus {
    /// 现场显示名 (与车间报表一致, 西语)
    pub fn label(&self) -> &'static str {
        match self {
            OrderStatus::Planned => "Planificado",
            OrderStatus::InProgress => "En proceso",
            OrderStatus::AwaitingQuality => "En espera calidad",
            OrderStatus::Finished => "Terminado",
            OrderStatus::Delayed => "Atrasado",
        }
    }

    /// 是否在产 (模拟负载只会向在产订单分摊产量)
    pub fn is_in_flight(&self) -> bool {
        matches!(self, OrderStatus::Planned | OrderStatus::InProgress)
    }

    /// 状态机转移校验
    pub fn can_transition_to(&self, next: OrderStatus) -> bool {
        if *self == next {
            return false;
        }
        // 任意状态可标记延误
        if next == OrderStatus::Delayed {
            return true;
        }
        match self {
            OrderStatus::Planned => next == OrderStatus::InProgress,
            OrderStatus::InProgress => {
                matches!(next, OrderStatus::AwaitingQuality | OrderStatus::Finished)
            }
            OrderStatus::AwaitingQuality => next == OrderStatus::Finished,
            OrderStatus::Finished => false,
            // 延误订单允许人工恢复到生产中
            OrderStatus::Delayed => next == OrderStatus::InProgress,
        }
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OrderStatus::Planned => write!(f, "PLANNED"),
            OrderStatus::InProgress => write!(f, "IN_PROGRESS"),
            OrderStatus::AwaitingQuality => write!(f, "AWAITING_QUALITY"),
            OrderStatus::Finished => write!(f, "FINISHED"),
            OrderStatus::Delayed => write!(f, "DELAYED"),
        }
    }
}

// ==========================================
// 停机原因 (Downtime Reason)
// ==========================================
// 其中 MaterialShortage / Maintenance 会触发看板告警
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DowntimeReason {
    Maintenance,      // 设备维护
    MaterialShortage, // 缺料
    Cleaning,         // 清洗
    FormatChange,     // 换型
    QualityHold,      // 质量封锁
    Other,            // 其他
}

impl DowntimeReason {
    /// 现场显示名 (西语)
    pub fn label(&self) -> &'static str {
        match self {
            DowntimeReason::Maintenance => "Mantenimiento",
            DowntimeReason::MaterialShortage => "Falta de insumos",
            DowntimeReason::Cleaning => "Limpieza",
            DowntimeReason::FormatChange => "Cambio de formato",
            DowntimeReason::QualityHold => "Calidad (bloqueo)",
            DowntimeReason::Other => "Otro",
        }
    }

    /// 该原因触发的告警级别 (不触发则为 None)
    pub fn alert_severity(&self) -> Option<AlertSeverity> {
        match self {
            DowntimeReason::MaterialShortage => Some(AlertSeverity::Danger),
            DowntimeReason::Maintenance => Some(AlertSeverity::Warning),
            _ => None,
        }
    }

    /// 告警图标
    pub fn alert_icon(&self) -> &'static str {
        match self.alert_severity() {
            Some(AlertSeverity::Danger) => "🔴",
            Some(AlertSeverity::Warning) => "⚠️",
            _ => "",
        }
    }

    /// 从现场显示名解析 (表单提交值)
    pub fn from_label(label: &str) -> Option<Self> {
        match label {
            "Mantenimiento" => Some(DowntimeReason::Maintenance),
            "Falta de insumos" => Some(DowntimeReason::MaterialShortage),
            "Limpieza" => Some(DowntimeReason::Cleaning),
            "Cambio de formato" => Some(DowntimeReason::FormatChange),
            "Calidad (bloqueo)" => Some(DowntimeReason::QualityHold),
            "Otro" => Some(DowntimeReason::Other),
            _ => None,
        }
    }
}

impl fmt::Display for DowntimeReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DowntimeReason::Maintenance => write!(f, "MAINTENANCE"),
            DowntimeReason::MaterialShortage => write!(f, "MATERIAL_SHORTAGE"),
            DowntimeReason::Cleaning => write!(f, "CLEANING"),
            DowntimeReason::FormatChange => write!(f, "FORMAT_CHANGE"),
            DowntimeReason::QualityHold => write!(f, "QUALITY_HOLD"),
            DowntimeReason::Other => write!(f, "OTHER"),
        }
    }
}

// ==========================================
// 告警级别 (Alert Severity)
// ==========================================
// 序列化格式: lowercase (与前端约定一致)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AlertSeverity {
    Info,
    Success,
    Warning,
    Danger,
}

impl fmt::Display for AlertSeverity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AlertSeverity::Info => write!(f, "info"),
            AlertSeverity::Success => write!(f, "success"),
            AlertSeverity::Warning => write!(f, "warning"),
            AlertSeverity::Danger => write!(f, "danger"),
        }
    }
}
