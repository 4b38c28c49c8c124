//! 标识符类型
//!
//! 定义发射器和填充器的唯一标识符。

/// 脉冲发射器标识符
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EmitterId(pub usize);

/// 缓冲填充器标识符
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FillerId(pub usize);
