//! コードフェンスの除去
//!
//! 完了エンドポイントは JSON を ```json ... ``` で包んで返すことがある。
//! 除去は不動点に達するまで繰り返すので、`strip_fences(strip_fences(t)) == strip_fences(t)`。

use regex::Regex;
use std::sync::OnceLock;

const FENCE: &str = "```";

fn opener() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"^```(?:[A-Za-z0-9_+.\-]*[ \t]*(?:\r?\n|$))?").expect("fence opener pattern is valid")
    })
}

/// 前後の空白とフェンス（開始: ``` + 任意の言語タグ、終了: ```）を取り除く
///
/// 言語タグとみなすのは改行か入力末尾で終わる場合だけ。直後に本文が続くなら ``` だけを外す。
pub fn strip_fences(raw: &str) -> &str {
    let mut text = raw.trim();
    loop {
        let mut next = text;
        if let Some(m) = opener().find(next) {
            next = next[m.end()..].trim();
        }
        if let Some(rest) = next.strip_suffix(FENCE) {
            next = rest.trim();
        }
        if next.len() == text.len() {
            return text;
        }
        text = next;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_text_is_trimmed_only() {
        assert_eq!(strip_fences("  {\"a\":1}\n"), "{\"a\":1}");
    }

    #[test]
    fn test_json_fence() {
        assert_eq!(strip_fences("```json\n{\"a\":1}\n```"), "{\"a\":1}");
    }

    #[test]
    fn test_fence_without_language_tag() {
        assert_eq!(strip_fences("```\nTexto libre\n```"), "Texto libre");
    }

    #[test]
    fn test_only_closing_fence() {
        assert_eq!(strip_fences("{\"a\":1}```"), "{\"a\":1}");
    }

    #[test]
    fn test_nested_fences_reach_fixed_point() {
        let once = strip_fences("```json\n```json\n{\"a\":1}\n```\n```");
        assert_eq!(once, "{\"a\":1}");
        assert_eq!(strip_fences(once), once);
    }

    #[test]
    fn test_idempotent_on_odd_inputs() {
        let inputs = [
            "",
            "   ",
            "```",
            "``````",
            "x``````",
            "```json",
            "  ```python\nprint(1)\n```  ",
            "texto con ``` en medio",
        ];
        for input in inputs {
            let once = strip_fences(input);
            assert_eq!(strip_fences(once), once, "input: {:?}", input);
        }
    }

    #[test]
    fn test_text_right_after_opener_is_not_a_language_tag() {
        assert_eq!(
            strip_fences("```1. Deuda técnica\n2. Inercia\n3. Competencia```"),
            "1. Deuda técnica\n2. Inercia\n3. Competencia"
        );
        assert_eq!(strip_fences("```resumen ejecutivo```"), "resumen ejecutivo");
    }

    #[test]
    fn test_language_tag_at_end_of_input() {
        assert_eq!(strip_fences("```json"), "");
        assert_eq!(strip_fences("```json \r\n{}\r\n```"), "{}");
    }

    #[test]
    fn test_inner_fences_are_kept() {
        assert_eq!(strip_fences("texto con ``` en medio"), "texto con ``` en medio");
    }
}
