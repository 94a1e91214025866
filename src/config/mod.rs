// ==========================================
// 工厂生产计划看板 - 配置层
// ==========================================
// 职责: 工厂档案与模拟参数的加载、缺省与覆盖
// 存储: 可选 JSON 覆盖文件 (用户配置目录), 缺失即全量缺省
// ==========================================

pub mod plant_profile;
pub mod simulation_profile;

// 重导出核心类型
pub use plant_profile::PlantProfile;
pub use simulation_profile::SimulationProfile;

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

// ==========================================
// DashboardConfig - 看板配置
// ==========================================
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DashboardConfig {
    /// 工厂档案
    #[serde(default)]
    pub plant: PlantProfile,

    /// 模拟负载参数
    #[serde(default)]
    pub simulation: SimulationProfile,

    /// 告警列表保留上限
    #[serde(default = "default_alert_retention")]
    pub alert_retention: usize,
}

fn default_alert_retention() -> usize {
    50
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            plant: PlantProfile::default(),
            simulation: SimulationProfile::default(),
            alert_retention: default_alert_retention(),
        }
    }
}

impl DashboardConfig {
    /// 从覆盖文件加载; 文件缺失或不可解析时退回全量缺省
    pub fn load_or_default(path: Option<&Path>) -> Self {
        let path = match path {
            Some(p) => p.to_path_buf(),
            None => match default_config_path() {
                Some(p) => p,
                None => return Self::default().sanitized(),
            },
        };

        match fs::read_to_string(&path) {
            Ok(raw) => match serde_json::from_str::<DashboardConfig>(&raw) {
                Ok(config) => {
                    info!(path = %path.display(), "已加载配置覆盖文件");
                    config.sanitized()
                }
                Err(e) => {
                    warn!(path = %path.display(), error = %e, "配置文件解析失败, 使用缺省配置");
                    Self::default().sanitized()
                }
            },
            Err(_) => Self::default().sanitized(),
        }
    }

    fn sanitized(mut self) -> Self {
        self.simulation = self.simulation.sanitized();
        if self.alert_retention == 0 {
            self.alert_retention = default_alert_retention();
        }
        self
    }
}

/// 缺省覆盖文件路径: <用户配置目录>/plant-dashboard/config.json
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("plant-dashboard").join("config.json"))
}
