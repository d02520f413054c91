// 拼音补全
//
// 成语数据缺少拼音时，按每个汉字的默认读音生成带声调拼音

use pinyin::ToPinyin;

/// 生成空格分隔的带声调拼音（如 "一心一意" → "yī xīn yī yì"）
///
/// 包含非汉字字符时返回 None
pub fn derive_pinyin(text: &str) -> Option<String> {
    let mut syllables = Vec::new();
    for ch in text.chars() {
        let pinyin = ch.to_pinyin()?;
        syllables.push(pinyin.with_tone());
    }
    if syllables.is_empty() {
        return None;
    }
    Some(syllables.join(" "))
}
