// ==========================================
// 工厂生产计划看板 - 状态仓储
// ==========================================
// 职责: 持有唯一可变根, 暴露快照读取与"变换并替换"单一写入口
// 并发模型: 单逻辑写者; Mutex 仅用于跨 Arc 共享, 不设计并行写
// 原子性: 变换失败时当前状态原样保留 (无部分应用)
// ==========================================

use std::sync::Mutex;

use chrono::Local;
use tracing::debug;

use crate::domain::PlantState;
use crate::store::error::{StoreError, StoreResult};
use crate::store::seed;

// ==========================================
// StateStore - 状态仓储
// ==========================================
pub struct StateStore {
    state: Mutex<PlantState>,
}

impl StateStore {
    /// 以默认种子数据集创建仓储
    pub fn new() -> Self {
        Self::with_state(seed::default_state(Local::now().naive_local()))
    }

    /// 以给定状态创建仓储 (测试与定制场景)
    pub fn with_state(state: PlantState) -> Self {
        Self {
            state: Mutex::new(state),
        }
    }

    /// 读取当前状态快照 (深拷贝, 调用方可自由持有)
    pub fn snapshot(&self) -> StoreResult<PlantState> {
        let guard = self
            .state
            .lock()
            .map_err(|e| StoreError::LockError(e.to_string()))?;
        Ok(guard.clone())
    }

    /// 唯一写入口: 对当前状态应用纯变换并整体替换
    ///
    /// 变换接收当前状态的深拷贝, 返回 (新状态, 结果值);
    /// 返回 Err 时不发生替换, 原状态不受任何影响。
    pub fn apply<T, F>(&self, transform: F) -> StoreResult<T>
    where
        F: FnOnce(PlantState) -> StoreResult<(PlantState, T)>,
    {
        let mut guard = self
            .state
            .lock()
            .map_err(|e| StoreError::LockError(e.to_string()))?;
        let (next, out) = transform(guard.clone())?;
        debug!(last_updated = %next.last_updated, "状态整体替换");
        *guard = next;
        Ok(out)
    }
}

impl Default for StateStore {
    fn default() -> Self {
        Self::new()
    }
}
