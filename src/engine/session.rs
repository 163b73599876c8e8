// ==========================================
// 产品碳足迹计算系统 - 建模会话
// ==========================================
// 职责: 持有次级/主数据两个工序列表及当前录入模式
// 红线: 会话由调用方持有并显式传入,不使用全局状态
// ==========================================

use crate::domain::process::Process;
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

// ==========================================
// 录入模式 (Intake Mode)
// ==========================================
// 状态机: Secondary (初始) -> Primary (终态, 仅 reset 可回到 Secondary)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum IntakeMode {
    Secondary, // 录入次级 (参考) 数据
    Primary,   // 录入主 (现场) 数据, 并用次级数据补全
}

impl IntakeMode {
    /// 一次建模调用成功之后的模式
    pub fn after_success(self) -> Self {
        match self {
            IntakeMode::Secondary | IntakeMode::Primary => IntakeMode::Primary,
        }
    }
}

impl fmt::Display for IntakeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IntakeMode::Secondary => write!(f, "SECONDARY"),
            IntakeMode::Primary => write!(f, "PRIMARY"),
        }
    }
}

// ==========================================
// ModelingSession - 建模会话
// ==========================================
#[derive(Debug, Clone)]
pub struct ModelingSession {
    session_id: Uuid,
    mode: IntakeMode,
    secondary: Vec<Process>,
    primary: Vec<Process>,
}

impl Default for ModelingSession {
    fn default() -> Self {
        Self::new()
    }
}

impl ModelingSession {
    pub fn new() -> Self {
        Self {
            session_id: Uuid::new_v4(),
            mode: IntakeMode::Secondary,
            secondary: Vec::new(),
            primary: Vec::new(),
        }
    }

    pub fn session_id(&self) -> Uuid {
        self.session_id
    }

    pub fn mode(&self) -> IntakeMode {
        self.mode
    }

    pub fn secondary_processes(&self) -> &[Process] {
        &self.secondary
    }

    pub fn primary_processes(&self) -> &[Process] {
        &self.primary
    }

    /// 清空两个工序列表,回到 Secondary 模式,并分配新的会话 ID
    pub fn reset(&mut self) {
        self.secondary.clear();
        self.primary.clear();
        self.mode = IntakeMode::Secondary;
        self.session_id = Uuid::new_v4();
    }

    /// 当前模式下的目标列表
    pub(crate) fn target_mut(&mut self) -> &mut Vec<Process> {
        match self.mode {
            IntakeMode::Secondary => &mut self.secondary,
            IntakeMode::Primary => &mut self.primary,
        }
    }

    /// 同时借出次级列表 (只读) 与主数据列表 (可写)
    pub(crate) fn split_mut(&mut self) -> (&[Process], &mut Vec<Process>) {
        (&self.secondary, &mut self.primary)
    }

    /// 按名称 (区分大小写) 查找次级工序
    pub(crate) fn secondary_named(&self, name: &str) -> Option<&Process> {
        self.secondary.iter().find(|p| p.name == name)
    }

    /// 执行模式转换, 返回是否发生了变化
    pub(crate) fn advance(&mut self) -> bool {
        let next = self.mode.after_success();
        let changed = next != self.mode;
        self.mode = next;
        changed
    }
}
