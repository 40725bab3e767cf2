//! 建議解析
//!
//! 從外部產生器的自由文字中回復（類別, 車數）序列。
//! 輸入本質上不可信，此元件定義為全函數：
//! 格式不符時退化為預設值，絕不拋出錯誤。
//!
//! 結構化的 [`Decomposition`](freight_core::Decomposition) 應盡量
//! 端到端傳遞；本解析器只是文字回復路徑的相容墊片。

use freight_core::{TruckAllocation, TruckClass};

/// 建議解析器
pub struct RecommendationParser;

impl RecommendationParser {
    /// 解析敘述句為卡車配置序列
    ///
    /// 演算法：以連接詞 "and" 切分子句；每個子句嘗試結構化匹配
    /// （前導整數、可選乘號 "x"/"×"、類別名稱片語），類別以同義詞
    /// 子字串判定（不分大小寫）。無前導整數時改找子句中任一整數，
    /// 再無則預設 1。無法辨識的子句靜默跳過。
    ///
    /// 重複類別以加總合併，保留首見順序。若整體無任何匹配，
    /// 退回整段文字的關鍵字掃描（每類至多一筆，Full/Half/LTL 優先序）；
    /// 文字非空但無任何關鍵字時回傳預設 `[Full:1, LTL:1]`
    /// （記載的啟發式預設，非失敗）。空白文字回傳空序列。
    pub fn parse(text: &str) -> Vec<TruckAllocation> {
        if text.trim().is_empty() {
            return Vec::new();
        }

        let mut entries: Vec<TruckAllocation> = Vec::new();
        for clause in Self::clauses(text) {
            if let Some((class, count)) = Self::parse_clause(&clause) {
                match entries.iter_mut().find(|e| e.class == class) {
                    // 飽和加法：輸入不可信，加總不得溢位
                    Some(existing) => existing.count = existing.count.saturating_add(count),
                    None => entries.push(TruckAllocation::new(class, count)),
                }
            }
        }

        if entries.is_empty() {
            return Self::keyword_fallback(text);
        }

        entries
    }

    /// 以 "and" 為界切分子句（token 層級，避免誤切單字內的 and）
    fn clauses(text: &str) -> Vec<Vec<String>> {
        let mut clauses = Vec::new();
        let mut current = Vec::new();

        for token in text.split_whitespace() {
            if token.eq_ignore_ascii_case("and") {
                if !current.is_empty() {
                    clauses.push(std::mem::take(&mut current));
                }
            } else {
                current.push(token.to_string());
            }
        }

        if !current.is_empty() {
            clauses.push(current);
        }

        clauses
    }

    /// 結構化匹配單一子句
    fn parse_clause(tokens: &[String]) -> Option<(TruckClass, u64)> {
        let first = tokens.first()?;
        let leading_count = Self::parse_count(first);

        let phrase_tokens = match leading_count {
            Some(_) => {
                let rest = &tokens[1..];
                // 跳過可選乘號
                if rest.first().map(|t| Self::is_multiplier(t)).unwrap_or(false) {
                    &rest[1..]
                } else {
                    rest
                }
            }
            None => tokens,
        };

        let phrase = Self::phrase_until_punctuation(phrase_tokens);
        let class = Self::classify(&phrase)?;

        let count = leading_count
            .or_else(|| tokens.iter().find_map(|t| Self::parse_count(t)))
            .unwrap_or(1);

        Some((class, count))
    }

    /// 組合類別名稱片語：到第一個帶句讀的 token 為止
    ///
    /// 片語以標點或子句結尾終止；帶句讀的 token 本身仍計入片語
    fn phrase_until_punctuation(tokens: &[String]) -> String {
        let mut words = Vec::new();
        for token in tokens {
            words.push(token.to_lowercase());
            if token.ends_with([',', '.', ';', ':', '!', '?']) {
                break;
            }
        }
        words.join(" ")
    }

    /// 解析單一 token 為車數（去除前後標點）
    fn parse_count(token: &str) -> Option<u64> {
        let trimmed = token.trim_matches(|c: char| !c.is_alphanumeric());
        if trimmed.is_empty() {
            return None;
        }
        trimmed.parse::<u64>().ok()
    }

    /// 檢查是否為乘號 token
    fn is_multiplier(token: &str) -> bool {
        token.eq_ignore_ascii_case("x") || token == "×"
    }

    /// 以同義詞子字串判定類別
    fn classify(phrase: &str) -> Option<TruckClass> {
        if phrase.contains("full") {
            Some(TruckClass::Full)
        } else if phrase.contains("half") {
            Some(TruckClass::Half)
        } else if phrase.contains("ltl") || phrase.contains("less than truck") {
            Some(TruckClass::Ltl)
        } else {
            None
        }
    }

    /// 整段文字的粗粒度關鍵字掃描
    ///
    /// 每類至多一筆，Full/Half/LTL 優先序；
    /// 無任何關鍵字時回傳記載的啟發式預設 [Full:1, LTL:1]
    fn keyword_fallback(text: &str) -> Vec<TruckAllocation> {
        let lower = text.to_lowercase();
        let mut entries = Vec::new();

        for class in [TruckClass::Full, TruckClass::Half, TruckClass::Ltl] {
            let found = match class {
                TruckClass::Full => lower.contains("full"),
                TruckClass::Half => lower.contains("half"),
                TruckClass::Ltl => lower.contains("ltl") || lower.contains("less than truck"),
            };
            if found {
                entries.push(TruckAllocation::new(class, 1));
            }
        }

        if entries.is_empty() {
            entries = vec![
                TruckAllocation::new(TruckClass::Full, 1),
                TruckAllocation::new(TruckClass::Ltl, 1),
            ];
        }

        entries
    }
}
