// ==========================================
// Right-to-Repair 备件责任预测 - 配置管理器
// ==========================================
// 职责: 配置加载、校验、快照
// 来源优先级: 显式路径 > 环境变量 RTR_FORECASTER_CONFIG > 用户配置目录 > 内置默认值
// ==========================================

use crate::config::planner_config::PlannerConfig;
use anyhow::Context;
use std::path::{Path, PathBuf};

// ==========================================
// 配置键
// ==========================================
pub mod config_keys {
    /// 配置文件路径环境变量
    pub const CONFIG_PATH_ENV: &str = "RTR_FORECASTER_CONFIG";

    /// 用户配置目录下的子目录名
    pub const CONFIG_DIR_NAME: &str = "rtr-forecaster";

    /// 配置文件名
    pub const CONFIG_FILE_NAME: &str = "config.json";
}

// ==========================================
// ConfigManager - 配置管理器
// ==========================================
#[derive(Debug, Clone)]
pub struct ConfigManager {
    config: PlannerConfig,
    source: Option<PathBuf>,
}

impl Default for ConfigManager {
    fn default() -> Self {
        Self::from_config(PlannerConfig::default())
    }
}

impl ConfigManager {
    /// 由内存中的配置创建
    pub fn from_config(config: PlannerConfig) -> Self {
        Self {
            config,
            source: None,
        }
    }

    /// 从 JSON 文件加载并校验
    ///
    /// # 参数
    /// - path: 配置文件路径
    ///
    /// # 返回
    /// - Err: 文件读取失败 / JSON 格式错误 / 参数越界
    pub fn from_file(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("读取配置文件失败: {}", path.display()))?;
        let config: PlannerConfig = serde_json::from_str(&raw)
            .with_context(|| format!("解析配置文件失败: {}", path.display()))?;
        config
            .validate()
            .with_context(|| format!("配置校验失败: {}", path.display()))?;

        tracing::info!(path = %path.display(), "已加载配置文件");

        Ok(Self {
            config,
            source: Some(path.to_path_buf()),
        })
    }

    /// 按优先级加载配置
    ///
    /// 1) 环境变量 RTR_FORECASTER_CONFIG 指向的文件（必须存在）
    /// 2) 用户配置目录下的 rtr-forecaster/config.json（存在时）
    /// 3) 内置默认值
    pub fn load() -> anyhow::Result<Self> {
        if let Ok(path) = std::env::var(config_keys::CONFIG_PATH_ENV) {
            let path = path.trim();
            if !path.is_empty() {
                return Self::from_file(path);
            }
        }

        if let Some(path) = default_config_path() {
            if path.is_file() {
                return Self::from_file(path);
            }
        }

        tracing::debug!("未找到配置文件，使用内置默认值");
        Ok(Self::default())
    }

    pub fn config(&self) -> &PlannerConfig {
        &self.config
    }

    /// 配置来源文件（内置默认值时为 None）
    pub fn source(&self) -> Option<&Path> {
        self.source.as_deref()
    }

    /// 获取配置快照（JSON）
    ///
    /// # 用途
    /// - 随报告输出，保证结果可复现
    pub fn get_config_snapshot(&self) -> anyhow::Result<String> {
        Ok(serde_json::to_string(&self.config)?)
    }

    /// 从配置快照恢复
    pub fn restore_from_snapshot(snapshot_json: &str) -> anyhow::Result<Self> {
        let config: PlannerConfig =
            serde_json::from_str(snapshot_json).context("解析配置快照失败")?;
        config.validate().context("配置快照校验失败")?;
        Ok(Self::from_config(config))
    }
}

/// 用户配置目录下的默认配置文件路径
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| {
        dir.join(config_keys::CONFIG_DIR_NAME)
            .join(config_keys::CONFIG_FILE_NAME)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_snapshot_roundtrip() {
        let manager = ConfigManager::default();
        let snapshot = manager.get_config_snapshot().unwrap();
        let restored = ConfigManager::restore_from_snapshot(&snapshot).unwrap();
        assert_eq!(restored.config(), manager.config());
        assert!(restored.source().is_none());
    }

    #[test]
    fn test_default_config_path_shape() {
        if let Some(path) = default_config_path() {
            assert!(path.ends_with("rtr-forecaster/config.json"));
        }
    }
}
