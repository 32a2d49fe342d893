// ==========================================
// 国际化 (i18n) 模块
// ==========================================
// 使用 rust-i18n 库
// 支持英文（默认）和俄文
// ==========================================
// 注意: rust_i18n::i18n! 宏已在 lib.rs 中初始化
// ==========================================

use crate::domain::contract::RiskIndicator;
use crate::domain::types::RiskLevel;

/// 获取当前语言
pub fn current_locale() -> String {
    rust_i18n::locale().to_string()
}

/// 设置语言
///
/// # 参数
/// - locale: 语言代码（"en" 或 "ru"）
pub fn set_locale(locale: &str) {
    rust_i18n::set_locale(locale);
}

/// 翻译消息（无参数）
pub fn t(key: &str) -> String {
    rust_i18n::t!(key).to_string()
}

/// 翻译消息（带参数）
///
/// # 示例
/// ```no_run
/// use procurement_risk_mock::i18n::t_with_args;
/// let msg = t_with_args("summary.total", &[("count", "1000")]);
/// ```
pub fn t_with_args(key: &str, args: &[(&str, &str)]) -> String {
    let mut result = rust_i18n::t!(key).to_string();
    for (k, v) in args {
        let placeholder = format!("%{{{}}}", k);
        result = result.replace(&placeholder, v);
    }
    result
}

/// 风险指标展示名
pub fn indicator_label(indicator: RiskIndicator) -> String {
    t(indicator.label_key())
}

/// 风险等级展示名
pub fn risk_level_label(level: RiskLevel) -> String {
    t(&format!("risk_level.{}", level))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    // rust-i18n 的 locale 为全局状态，且 Rust 测试默认并行执行；
    // 为避免测试互相干扰，这里对 i18n 相关测试串行化。
    static LOCALE_TEST_LOCK: Mutex<()> = Mutex::new(());

    #[test]
    fn test_set_locale() {
        let _guard = LOCALE_TEST_LOCK.lock().unwrap();
        set_locale("ru");
        assert_eq!(current_locale(), "ru");

        set_locale("en");
        assert_eq!(current_locale(), "en");
    }

    #[test]
    fn test_indicator_labels() {
        let _guard = LOCALE_TEST_LOCK.lock().unwrap();
        set_locale("en");
        assert_eq!(indicator_label(RiskIndicator::PriceAnomaly), "Price anomaly");

        set_locale("ru");
        assert_eq!(
            indicator_label(RiskIndicator::SingleParticipant),
            "Единственный участник"
        );
        assert_eq!(risk_level_label(RiskLevel::High), "Высокий");

        set_locale("en");
    }

    #[test]
    fn test_translate_with_args() {
        let _guard = LOCALE_TEST_LOCK.lock().unwrap();
        set_locale("en");
        let msg = t_with_args("summary.total", &[("count", "1000")]);
        assert_eq!(msg, "Total contracts: 1000");
    }
}
