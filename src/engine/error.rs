// ==========================================
// 采购风险监测 - 引擎层错误类型
// ==========================================
// 工具: thiserror 派生宏
// ==========================================

use thiserror::Error;

/// 生成器错误类型
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GeneratorError {
    /// 生成数量非法（<= 0 或不是整数）
    #[error("参数非法: {0}")]
    InvalidArgument(String),

    /// 日期越界
    ///
    /// 日取值经 pick_index 钳制在 1..=28，任意月份均合法；
    /// 保留此分支以替代 from_ymd_opt 的 unwrap
    #[error("日期越界: month={month}, day={day}")]
    DateOutOfRange { month: u32, day: u32 },

    /// 后台生成任务失败
    #[error("生成任务失败: {0}")]
    TaskFailed(String),
}

/// Result 类型别名
pub type GeneratorResult<T> = Result<T, GeneratorError>;

/// 解析生成数量（命令行 / 配置输入）
///
/// 非整数与非正数均返回 InvalidArgument
pub fn parse_count(raw: &str) -> GeneratorResult<i64> {
    let trimmed = raw.trim();
    let count = trimmed
        .parse::<i64>()
        .map_err(|_| GeneratorError::InvalidArgument(format!("count 不是整数: {:?}", trimmed)))?;
    if count <= 0 {
        return Err(GeneratorError::InvalidArgument(format!(
            "count 必须为正整数: {}",
            count
        )));
    }
    Ok(count)
}
