use serde_json::{Value, json};

/// A word with one Japanese section holding a single equivalent.
pub fn simple_word(name: &str, equivalent: &str) -> Value {
    json!({
        "name": name,
        "pronunciation": name,
        "parts": {
            "ja": {
                "sort": "名",
                "sections": [{
                    "equivalents": [{ "category": "名", "names": [equivalent] }],
                    "informations": [{ "kind": "meaning", "text": "?" }]
                }]
            }
        }
    })
}

pub fn dictionary_of(words: Vec<Value>) -> Value {
    json!({
        "settings": { "version": "S" },
        "words": words
    })
}

/// A word exercising every section kind and every markup span.
pub fn rich_word() -> Value {
    json!({
        "name": "sal",
        "pronunciation": "sal",
        "parts": {
            "ja": {
                "sort": "動",
                "sections": [{
                    "equivalents": [
                        { "category": "自", "frame": "[a]へ", "names": ["歩く", "/進む/"] },
                        { "category": "秘", "names": ["hidden"], "hidden": true }
                    ],
                    "informations": [
                        { "kind": "meaning", "text": "徒歩で移動する" },
                        { "kind": "usage", "text": "{zal} と比較" },
                        { "kind": "etymology", "text": "不明" }
                    ],
                    "phrases": [
                        { "expression": "sal a", "equivalentNames": ["行く"], "text": "口語" },
                        { "expression": "sal hidden", "equivalentNames": ["隠す"], "hidden": true }
                    ],
                    "examples": [
                        { "sentence": "[a sal] & b.", "translation": "a が歩く。" },
                        { "sentence": "hidden sal.", "translation": "隠れた例。", "hidden": true }
                    ]
                }]
            }
        }
    })
}
