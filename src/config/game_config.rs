// src/config/game_config.rs
//! ゲーム開始時の設定だよ。JS 側から JSON で渡してもらうこともできる！

use serde::{Deserialize, Serialize};

/// 新しいゲームを始めるときの設定。
///
/// `seed` を指定するとシャッフルが毎回同じになる (テストやリプレイ用)。
/// 指定しなければ OS の乱数で毎回違う配り方になるよ🎲
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub seed: Option<u64>,
}

impl GameConfig {
    pub fn with_seed(seed: u64) -> Self {
        Self { seed: Some(seed) }
    }

    /// JSON 文字列から設定を読む。空文字なら全部デフォルト。
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        if json.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_json::from_str(json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_config_json() {
        let config = GameConfig::from_json(r#"{"seed": 42}"#).expect("valid json");
        assert_eq!(config, GameConfig::with_seed(42));

        let config = GameConfig::from_json("{}").expect("empty object");
        assert_eq!(config.seed, None);

        let config = GameConfig::from_json("   ").expect("blank string");
        assert_eq!(config, GameConfig::default());

        assert!(GameConfig::from_json("{seed:").is_err());
    }
}
