//! 建议书分享
//!
//! 导出后可选地把建议书发布为带随机键的分享记录，落盘在内部目录下，
//! 通过 `/shared-report/{key}` 形式的链接访问。键使用UUID v4，不可枚举。

use anyhow::{Context, Result};
use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use uuid::Uuid;

use crate::error::{GatewayError, GatewayResult};
use crate::types::InvestmentReport;

/// 一条已发布的分享记录
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SharedReport {
    /// 分享键（UUID v4）
    pub key: String,
    /// 分享链接路径
    pub share_url: String,
    /// 公司名称
    pub company_name: String,
    /// 发布时间
    pub created_at: DateTime<Local>,
    /// 建议书快照
    pub report: InvestmentReport,
}

/// 磁盘分享存储，每条记录一个 `{key}.json` 文件
pub struct SharedReportStore {
    root: PathBuf,
}

impl SharedReportStore {
    /// `internal_path` 为工作流内部目录，分享记录存放在其 `shared` 子目录
    pub fn new(internal_path: &Path) -> Self {
        Self {
            root: internal_path.join("shared"),
        }
    }

    /// 发布建议书，返回含分享链接的记录
    pub fn put(&self, company_name: &str, report: &InvestmentReport) -> Result<SharedReport> {
        let key = Uuid::new_v4().to_string();
        let entry = SharedReport {
            share_url: format!("/shared-report/{}", key),
            key,
            company_name: company_name.to_string(),
            created_at: Local::now(),
            report: report.clone(),
        };

        fs::create_dir_all(&self.root)
            .with_context(|| format!("无法创建分享目录: {}", self.root.display()))?;
        let path = self.entry_path(&entry.key);
        let json = serde_json::to_string_pretty(&entry)?;
        fs::write(&path, json).with_context(|| format!("无法写入分享记录: {}", path.display()))?;

        println!("🔗 建议书已发布: {}", entry.share_url);
        Ok(entry)
    }

    /// 按分享键读取记录，不存在时返回NotFound
    pub fn get(&self, key: &str) -> GatewayResult<SharedReport> {
        let path = self.entry_path(key);
        let json = fs::read_to_string(&path)
            .map_err(|_| GatewayError::NotFound(format!("分享记录不存在: {}", key)))?;
        serde_json::from_str(&json)
            .map_err(|e| GatewayError::Validation(format!("分享记录已损坏: {}", e)))
    }

    fn entry_path(&self, key: &str) -> PathBuf {
        self.root.join(format!("{}.json", key))
    }
}
