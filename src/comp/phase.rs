//! 组件生命周期
//!
//! 两类组件共用同一个阶段机：Configured → Scheduled → Done。

/// 组件所处阶段。`Done` 只会到达一次。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// 已构造，尚未启动
    Configured,
    /// 已有回调在事件队列中
    Scheduled,
    /// 终态
    Done,
}
