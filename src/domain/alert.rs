// ==========================================
// 工厂生产计划看板 - 告警领域模型
// ==========================================

use serde::{Deserialize, Serialize};

use crate::domain::types::{AlertSeverity, DowntimeReason};
use crate::i18n;

// ==========================================
// Alert - 看板告警
// ==========================================
// 只追加, 最新在前; 无身份标识, 仓储层按保留上限截断
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Alert {
    pub severity: AlertSeverity, // 级别
    pub icon: String,            // 图标
    pub title: String,           // 标题
    pub description: String,     // 描述
}

impl Alert {
    /// 由停机上报生成告警
    ///
    /// 仅 MaterialShortage / Maintenance 会生成; 其余原因返回 None
    pub fn from_downtime(
        reason: DowntimeReason,
        machine_id: &str,
        product: &str,
        start_time: &str,
    ) -> Option<Self> {
        let severity = reason.alert_severity()?;
        Some(Self {
            severity,
            icon: reason.alert_icon().to_string(),
            title: i18n::t_with_args("downtime.alert_title", &[("reason", reason.label())]),
            description: i18n::t_with_args(
                "downtime.alert_description",
                &[("machine", machine_id), ("product", product), ("start", start_time)],
            ),
        })
    }
}
