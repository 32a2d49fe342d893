// ==========================================
// 采购风险监测 - 配置管理器
// ==========================================
// 职责: 配置加载（JSON 文件 + 环境变量覆写）
// 优先级: 环境变量 > 配置文件 > 默认值
// ==========================================

use crate::config::service_config::{LatencyConfig, ServiceConfig};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// 环境变量键
pub mod env_keys {
    pub const CONFIG_PATH: &str = "PROCUREMENT_RISK_CONFIG";
    pub const SEED: &str = "PROCUREMENT_RISK_SEED";
    pub const BATCH_SIZE: &str = "PROCUREMENT_RISK_BATCH_SIZE";
    pub const NO_LATENCY: &str = "PROCUREMENT_RISK_NO_LATENCY";
}

/// 配置错误类型
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("配置文件读取失败: path={path}, {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("配置文件解析失败: path={path}, {source}")]
    Parse {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("配置值非法: {key}={value}")]
    InvalidValue { key: String, value: String },
}

fn is_true(v: &str) -> bool {
    matches!(
        v.trim().to_lowercase().as_str(),
        "1" | "true" | "yes" | "y" | "on"
    )
}

// ==========================================
// ConfigManager - 配置管理器
// ==========================================
pub struct ConfigManager {
    config: ServiceConfig,
    source_path: Option<PathBuf>,
}

impl ConfigManager {
    /// 从默认值创建
    pub fn with_defaults() -> Self {
        Self {
            config: ServiceConfig::default(),
            source_path: None,
        }
    }

    /// 加载配置
    ///
    /// # 参数
    /// - path: 显式配置文件路径；None 时依次尝试
    ///   PROCUREMENT_RISK_CONFIG 与默认路径（不存在则使用默认值）
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let resolved = match path {
            Some(p) => Some(p.to_path_buf()),
            None => std::env::var(env_keys::CONFIG_PATH)
                .ok()
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
                .map(PathBuf::from)
                .or_else(|| Some(get_default_config_path()).filter(|p| p.exists())),
        };

        let mut manager = match resolved {
            Some(p) => Self::from_file(&p)?,
            None => Self::with_defaults(),
        };
        manager.apply_env_overrides()?;

        tracing::debug!(
            source = ?manager.source_path,
            batch_size = manager.config.batch_size,
            seed = ?manager.config.seed,
            "配置加载完成"
        );
        Ok(manager)
    }

    /// 从 JSON 文件读取（不应用环境变量）
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        let config: ServiceConfig =
            serde_json::from_str(&raw).map_err(|source| ConfigError::Parse {
                path: path.display().to_string(),
                source,
            })?;

        Ok(Self {
            config,
            source_path: Some(path.to_path_buf()),
        })
    }

    /// 应用环境变量覆写
    pub fn apply_env_overrides(&mut self) -> Result<(), ConfigError> {
        if let Ok(v) = std::env::var(env_keys::SEED) {
            let seed = v.trim().parse::<u64>().map_err(|_| ConfigError::InvalidValue {
                key: env_keys::SEED.to_string(),
                value: v.clone(),
            })?;
            self.config.seed = Some(seed);
        }

        if let Ok(v) = std::env::var(env_keys::BATCH_SIZE) {
            let batch_size = v
                .trim()
                .parse::<i64>()
                .ok()
                .filter(|n| *n > 0)
                .ok_or_else(|| ConfigError::InvalidValue {
                    key: env_keys::BATCH_SIZE.to_string(),
                    value: v.clone(),
                })?;
            self.config.batch_size = batch_size;
        }

        if let Ok(v) = std::env::var(env_keys::NO_LATENCY) {
            if is_true(&v) {
                self.config.latency = LatencyConfig::none();
            }
        }

        Ok(())
    }

    pub fn config(&self) -> &ServiceConfig {
        &self.config
    }

    pub fn into_config(self) -> ServiceConfig {
        self.config
    }

    pub fn source_path(&self) -> Option<&Path> {
        self.source_path.as_deref()
    }
}

/// 默认配置文件路径
///
/// 用户配置目录下 procurement-risk-mock/config.json；取不到时回退到当前目录
pub fn get_default_config_path() -> PathBuf {
    match dirs::config_dir() {
        Some(dir) => dir.join("procurement-risk-mock").join("config.json"),
        None => PathBuf::from("./procurement-risk-mock.json"),
    }
}
