// src/config.rs

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

// ============================================================================
// 默认值
// ============================================================================

/// 成语字数
pub const DEFAULT_PHRASE_LENGTH: usize = 4;
/// 成语 json 数据文件名
pub const DEFAULT_CORPUS_FILE_NAME: &str = "idiom.json";
/// 成语 json 中表示成语的 key
pub const DEFAULT_TEXT_KEY: &str = "word";
/// 成语 json 中表示拼音的 key
pub const DEFAULT_PINYIN_KEY: &str = "pinyin";
/// 输出备选成语时，最多这么多个
pub const DEFAULT_OUTPUT_PHRASE_MAX: usize = 50;
/// 输出某位置的备选汉字时，最多这么多个
pub const DEFAULT_OUTPUT_CHAR_MAX: usize = 50;

fn default_phrase_length() -> usize {
    DEFAULT_PHRASE_LENGTH
}

fn default_corpus_path() -> PathBuf {
    PathBuf::from(DEFAULT_CORPUS_FILE_NAME)
}

fn default_text_key() -> String {
    DEFAULT_TEXT_KEY.to_string()
}

fn default_pinyin_key() -> String {
    DEFAULT_PINYIN_KEY.to_string()
}

fn default_output_phrase_max() -> usize {
    DEFAULT_OUTPUT_PHRASE_MAX
}

fn default_output_char_max() -> usize {
    DEFAULT_OUTPUT_CHAR_MAX
}

// ============================================================================
// 搜索配置
// ============================================================================

/// 搜索配置
///
/// 显式传入 pipeline，同一进程可以用不同配置多次搜索
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchConfig {
    /// 成语字数（同时是拼音音节数）
    #[serde(default = "default_phrase_length")]
    pub phrase_length: usize,
    /// 成语 json 数据文件路径
    #[serde(default = "default_corpus_path")]
    pub corpus_path: PathBuf,
    /// 成语 json 中表示成语的 key
    #[serde(default = "default_text_key")]
    pub text_key: String,
    /// 成语 json 中表示拼音的 key
    #[serde(default = "default_pinyin_key")]
    pub pinyin_key: String,
    /// 限制条件: `[汉字/声母/韵母/01234声调] [c01234? 数量] [p1234 位置]`
    ///
    /// 例如 `"2 c1 p2"` 表示第二个位置是二声
    #[serde(default)]
    pub constraints: Vec<String>,
    /// 输出备选成语时，最多这么多个
    #[serde(default = "default_output_phrase_max")]
    pub output_phrase_max: usize,
    /// 输出某位置的备选汉字时，最多这么多个
    #[serde(default = "default_output_char_max")]
    pub output_char_max: usize,
    /// 调试模式，会输出被丢弃的成语和限制的原因
    #[serde(default)]
    pub debug: bool,
    /// 成语缺少拼音时，按汉字默认读音补全
    #[serde(default)]
    pub derive_missing_pinyin: bool,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl SearchConfig {
    pub fn new() -> Self {
        Self {
            phrase_length: default_phrase_length(),
            corpus_path: default_corpus_path(),
            text_key: default_text_key(),
            pinyin_key: default_pinyin_key(),
            constraints: Vec::new(),
            output_phrase_max: default_output_phrase_max(),
            output_char_max: default_output_char_max(),
            debug: false,
            derive_missing_pinyin: false,
        }
    }

    /// 使用给定限制条件创建配置
    pub fn with_constraints<S: AsRef<str>>(constraints: &[S]) -> Self {
        Self {
            constraints: constraints.iter().map(|c| c.as_ref().to_string()).collect(),
            ..Self::new()
        }
    }

    /// 校验配置
    pub fn validate(&self) -> Result<()> {
        if self.phrase_length == 0 {
            anyhow::bail!("成语字数必须大于 0");
        }
        if self.text_key.trim().is_empty() {
            anyhow::bail!("成语 key 不能为空");
        }
        if self.pinyin_key.trim().is_empty() {
            anyhow::bail!("拼音 key 不能为空");
        }
        if self.text_key == self.pinyin_key {
            anyhow::bail!("成语 key 和拼音 key 不能相同");
        }
        Ok(())
    }

    pub fn config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir().ok_or_else(|| anyhow::anyhow!("无法获取配置目录"))?;
        let app_dir = config_dir.join("IdiomSearch");
        std::fs::create_dir_all(&app_dir)?;
        Ok(app_dir.join("config.json"))
    }

    /// 从默认路径加载，不存在时使用默认配置
    pub fn load() -> Result<Self> {
        let path = Self::config_path()?;
        if !path.exists() {
            tracing::info!("配置文件不存在，使用默认配置: {:?}", path);
            return Ok(Self::new());
        }
        Self::load_from(&path)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        tracing::info!("尝试从以下路径加载配置: {:?}", path);
        let content = std::fs::read_to_string(path)
            .map_err(|e| anyhow::anyhow!("读取配置文件 {:?} 失败: {}", path, e))?;
        let config: SearchConfig = serde_json::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// 保存配置（先写临时文件再重命名）
    pub fn save_to(&self, path: &Path) -> Result<()> {
        self.validate()?;
        let content = serde_json::to_string_pretty(self)?;
        let temp_path = path.with_extension("json.tmp");
        std::fs::write(&temp_path, content)?;

        if let Err(e) = std::fs::rename(&temp_path, path) {
            tracing::error!("重命名临时文件失败: {}", e);
            let _ = std::fs::remove_file(&temp_path);
            return Err(e.into());
        }
        tracing::info!("配置保存成功: {:?}", path);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = SearchConfig::default();
        assert_eq!(config.phrase_length, 4);
        assert_eq!(config.text_key, "word");
        assert_eq!(config.pinyin_key, "pinyin");
        assert_eq!(config.output_phrase_max, 50);
        assert!(config.constraints.is_empty());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config: SearchConfig =
            serde_json::from_str(r#"{"constraints": ["y c0"], "debug": true}"#).unwrap();
        assert_eq!(config.constraints, vec!["y c0"]);
        assert!(config.debug);
        assert_eq!(config.phrase_length, 4);
        assert_eq!(config.corpus_path, PathBuf::from("idiom.json"));
    }

    #[test]
    fn test_validate_rejects_bad_config() {
        let mut config = SearchConfig::new();
        config.phrase_length = 0;
        assert!(config.validate().is_err());

        let mut config = SearchConfig::new();
        config.pinyin_key = "word".to_string();
        assert!(config.validate().is_err());

        let mut config = SearchConfig::new();
        config.text_key = "  ".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_save_and_load_roundtrip() {
        let temp = tempfile::tempdir().expect("create temp dir");
        let path = temp.path().join("config.json");
        let config = SearchConfig::with_constraints(&["2 c1 p2", "好 c?"]);

        config.save_to(&path).expect("save config");
        let loaded = SearchConfig::load_from(&path).expect("load config");
        assert_eq!(loaded, config);
        assert!(!path.with_extension("json.tmp").exists());
    }

    #[test]
    fn test_load_missing_file_fails() {
        let temp = tempfile::tempdir().expect("create temp dir");
        assert!(SearchConfig::load_from(&temp.path().join("missing.json")).is_err());
    }
}
