// ==========================================
// 采购风险监测 - 算法元数据存储
// ==========================================
// 职责: 内存中的算法元数据列表（显式对象，由 API 层持有）
// 红线: 与合同生成完全解耦
// ==========================================

use crate::domain::algorithm::{default_algorithms, AlgorithmMetric};
use crate::repository::error::{RepositoryError, RepositoryResult};
use std::sync::{Mutex, MutexGuard};

// ==========================================
// AlgorithmStore - 算法元数据存储
// ==========================================
pub struct AlgorithmStore {
    algorithms: Mutex<Vec<AlgorithmMetric>>,
}

impl Default for AlgorithmStore {
    fn default() -> Self {
        Self::new(default_algorithms())
    }
}

impl AlgorithmStore {
    pub fn new(algorithms: Vec<AlgorithmMetric>) -> Self {
        Self {
            algorithms: Mutex::new(algorithms),
        }
    }

    fn lock(&self) -> RepositoryResult<MutexGuard<'_, Vec<AlgorithmMetric>>> {
        self.algorithms
            .lock()
            .map_err(|e| RepositoryError::LockError(e.to_string()))
    }

    /// 当前列表快照
    pub fn list(&self) -> RepositoryResult<Vec<AlgorithmMetric>> {
        Ok(self.lock()?.clone())
    }

    /// 按名称查找
    pub fn find(&self, name: &str) -> RepositoryResult<AlgorithmMetric> {
        self.lock()?
            .iter()
            .find(|a| a.name == name)
            .cloned()
            .ok_or_else(|| RepositoryError::NotFound {
                entity: "AlgorithmMetric".to_string(),
                id: name.to_string(),
            })
    }

    /// 切换算法启用状态
    ///
    /// # 返回
    /// - Ok(AlgorithmMetric): 更新后的元数据
    /// - Err(NotFound): 名称不存在
    pub fn set_enabled(&self, name: &str, enabled: bool) -> RepositoryResult<AlgorithmMetric> {
        if name.trim().is_empty() {
            return Err(RepositoryError::ValidationError(
                "算法名称不能为空".to_string(),
            ));
        }

        let mut algorithms = self.lock()?;
        let algorithm = algorithms
            .iter_mut()
            .find(|a| a.name == name)
            .ok_or_else(|| RepositoryError::NotFound {
                entity: "AlgorithmMetric".to_string(),
                id: name.to_string(),
            })?;

        algorithm.enabled = enabled;
        Ok(algorithm.clone())
    }
}
