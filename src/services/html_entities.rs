//! HTML 实体解码 - 业务能力层
//!
//! 题目数据来自第三方题库，正确答案里常带有 `&quot;`、`&#039;`、`&eacute;` 之类的实体。
//! 这里的行为对应浏览器里"写入 innerHTML 再读 textContent"（只覆盖下方表中的命名实体）：
//! 标签被去掉，实体被解码，结果只当作纯文本使用。

use phf::phf_map;
use regex::{Captures, Regex};

/// 常见命名实体
static NAMED_ENTITIES: phf::Map<&'static str, char> = phf_map! {
    "amp" => '&',
    "lt" => '<',
    "gt" => '>',
    "quot" => '"',
    "apos" => '\'',
    "nbsp" => '\u{a0}',
    "shy" => '\u{ad}',
    "iexcl" => '¡',
    "iquest" => '¿',
    "cent" => '¢',
    "pound" => '£',
    "yen" => '¥',
    "euro" => '€',
    "sect" => '§',
    "para" => '¶',
    "copy" => '©',
    "reg" => '®',
    "trade" => '™',
    "deg" => '°',
    "micro" => 'µ',
    "middot" => '·',
    "times" => '×',
    "not" => '¬',
    "divide" => '÷',
    "plusmn" => '±',
    "sup2" => '²',
    "sup3" => '³',
    "frac14" => '¼',
    "frac12" => '½',
    "frac34" => '¾',
    "laquo" => '«',
    "raquo" => '»',
    "lsquo" => '‘',
    "rsquo" => '’',
    "ldquo" => '“',
    "rdquo" => '”',
    "ndash" => '–',
    "mdash" => '—',
    "hellip" => '…',
    "bull" => '•',
    "prime" => '′',
    "Prime" => '″',
    "larr" => '←',
    "rarr" => '→',
    "le" => '≤',
    "ge" => '≥',
    "ne" => '≠',
    "minus" => '−',
    "infin" => '∞',
    "Agrave" => 'À',
    "Aacute" => 'Á',
    "Acirc" => 'Â',
    "Atilde" => 'Ã',
    "Auml" => 'Ä',
    "Aring" => 'Å',
    "AElig" => 'Æ',
    "Ccedil" => 'Ç',
    "Egrave" => 'È',
    "Eacute" => 'É',
    "Ecirc" => 'Ê',
    "Euml" => 'Ë',
    "Iacute" => 'Í',
    "Icirc" => 'Î',
    "Iuml" => 'Ï',
    "Ntilde" => 'Ñ',
    "Oacute" => 'Ó',
    "Ocirc" => 'Ô',
    "Ouml" => 'Ö',
    "Oslash" => 'Ø',
    "Uacute" => 'Ú',
    "Uuml" => 'Ü',
    "szlig" => 'ß',
    "agrave" => 'à',
    "aacute" => 'á',
    "acirc" => 'â',
    "atilde" => 'ã',
    "auml" => 'ä',
    "aring" => 'å',
    "aelig" => 'æ',
    "ccedil" => 'ç',
    "egrave" => 'è',
    "eacute" => 'é',
    "ecirc" => 'ê',
    "euml" => 'ë',
    "igrave" => 'ì',
    "iacute" => 'í',
    "icirc" => 'î',
    "iuml" => 'ï',
    "eth" => 'ð',
    "ntilde" => 'ñ',
    "ograve" => 'ò',
    "oacute" => 'ó',
    "ocirc" => 'ô',
    "otilde" => 'õ',
    "ouml" => 'ö',
    "oslash" => 'ø',
    "ugrave" => 'ù',
    "uacute" => 'ú',
    "ucirc" => 'û',
    "uuml" => 'ü',
    "yacute" => 'ý',
    "thorn" => 'þ',
    "yuml" => 'ÿ',
    "alpha" => 'α',
    "beta" => 'β',
    "gamma" => 'γ',
    "delta" => 'δ',
    "Delta" => 'Δ',
    "theta" => 'θ',
    "lambda" => 'λ',
    "mu" => 'μ',
    "pi" => 'π',
    "sigma" => 'σ',
    "Sigma" => 'Σ',
    "omega" => 'ω',
    "Omega" => 'Ω',
};

/// 将可能含有标签和实体的文本转为纯文本
///
/// - 去掉形如 `<b>`、`</i>`、`<!-- -->` 的标签（`a < b` 这种不算标签）
/// - 解码命名实体、十进制和十六进制数字实体，数字实体可以省略分号
/// - `&amp`、`&copy` 这类旧式实体可以省略分号
/// - 未知的命名实体原样保留
pub fn decode_html_text(raw: &str) -> String {
    let stripped = strip_tags(raw);
    decode_entities(&stripped)
}

fn strip_tags(raw: &str) -> String {
    match Regex::new(r"(?s)<!--.*?-->|</?[A-Za-z][^>]*>") {
        Ok(re) => re.replace_all(raw, "").into_owned(),
        Err(_) => raw.to_string(),
    }
}

fn decode_entities(text: &str) -> String {
    let Ok(re) = Regex::new(
        r"&(?:#([0-9]+);?|#[xX]([0-9A-Fa-f]+);?|([A-Za-z][A-Za-z0-9]*)(;?))",
    ) else {
        return text.to_string();
    };

    re.replace_all(text, |caps: &Captures| {
        if let Some(dec) = caps.get(1) {
            return numeric_reference(dec.as_str().parse().ok()).to_string();
        }
        if let Some(hex) = caps.get(2) {
            return numeric_reference(u32::from_str_radix(hex.as_str(), 16).ok()).to_string();
        }
        let name = caps.get(3).map_or("", |m| m.as_str());
        let terminated = caps.get(4).is_some_and(|m| !m.as_str().is_empty());
        named_reference(name, terminated).unwrap_or_else(|| caps[0].to_string())
    })
    .into_owned()
}

/// 命名实体：带分号时整名匹配；否则按最长前缀匹配旧式实体（`&amp`、`&copy`）
fn named_reference(name: &str, terminated: bool) -> Option<String> {
    if terminated {
        if let Some(ch) = NAMED_ENTITIES.get(name) {
            return Some(ch.to_string());
        }
    }

    let (len, ch) = (1..=name.len())
        .rev()
        .find_map(|len| legacy_entity(&name[..len]).map(|ch| (len, ch)))?;

    let mut decoded = String::with_capacity(name.len() + 1);
    decoded.push(ch);
    decoded.push_str(&name[len..]);
    if terminated {
        decoded.push(';');
    }
    Some(decoded)
}

/// 允许省略分号的旧式实体：`amp`/`lt`/`gt`/`quot` 和 Latin-1 字符
fn legacy_entity(name: &str) -> Option<char> {
    let ch = *NAMED_ENTITIES.get(name)?;
    let legacy = matches!(name, "amp" | "lt" | "gt" | "quot") || ('\u{a0}'..='\u{ff}').contains(&ch);
    legacy.then_some(ch)
}

/// 数字实体转字符，规则与浏览器一致：
/// 0、代理区、超出范围的码点替换为 U+FFFD；0x80-0x9F 按 Windows-1252 映射
fn numeric_reference(code: Option<u32>) -> char {
    let Some(code) = code else {
        return char::REPLACEMENT_CHARACTER;
    };
    if let Some(ch) = windows_1252(code) {
        return ch;
    }
    if code == 0 {
        return char::REPLACEMENT_CHARACTER;
    }
    char::from_u32(code).unwrap_or(char::REPLACEMENT_CHARACTER)
}

fn windows_1252(code: u32) -> Option<char> {
    let ch = match code {
        0x80 => '€',
        0x82 => '‚',
        0x83 => 'ƒ',
        0x84 => '„',
        0x85 => '…',
        0x86 => '†',
        0x87 => '‡',
        0x88 => 'ˆ',
        0x89 => '‰',
        0x8A => 'Š',
        0x8B => '‹',
        0x8C => 'Œ',
        0x8E => 'Ž',
        0x91 => '‘',
        0x92 => '’',
        0x93 => '“',
        0x94 => '”',
        0x95 => '•',
        0x96 => '–',
        0x97 => '—',
        0x98 => '˜',
        0x99 => '™',
        0x9A => 'š',
        0x9B => '›',
        0x9C => 'œ',
        0x9E => 'ž',
        0x9F => 'Ÿ',
        _ => return None,
    };
    Some(ch)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decimal_apostrophe() {
        assert_eq!(decode_html_text("O&#39;Brien"), "O'Brien");
        assert_eq!(decode_html_text("Don&#039;t Stop"), "Don't Stop");
    }

    #[test]
    fn test_named_and_hex_entities() {
        assert_eq!(decode_html_text("&quot;Pok&eacute;mon&quot;"), "\"Pokémon\"");
        assert_eq!(decode_html_text("Caf&#xE9; &amp; Bar"), "Café & Bar");
        assert_eq!(decode_html_text("Ni&ntilde;o &ndash; 1998"), "Niño – 1998");
    }

    #[test]
    fn test_escaped_markup_stays_text() {
        assert_eq!(
            decode_html_text("&lt;script&gt;alert(1)&lt;/script&gt;"),
            "<script>alert(1)</script>"
        );
    }

    #[test]
    fn test_real_tags_are_stripped() {
        assert_eq!(decode_html_text("<b>Mercury</b><!-- x -->"), "Mercury");
        assert_eq!(decode_html_text("1 < 2 and 3 > 2"), "1 < 2 and 3 > 2");
    }

    #[test]
    fn test_unknown_entity_is_kept() {
        assert_eq!(decode_html_text("&madeup; & done"), "&madeup; & done");
    }

    #[test]
    fn test_references_without_semicolon() {
        assert_eq!(decode_html_text("Tom &amp Jerry"), "Tom & Jerry");
        assert_eq!(decode_html_text("&copy 2001 &#39quoted&#39"), "© 2001 'quoted'");
        assert_eq!(decode_html_text("&notit; &alpha"), "¬it; &alpha");
        assert_eq!(decode_html_text("&eacutex;"), "éx;");
    }

    #[test]
    fn test_long_numeric_references() {
        assert_eq!(decode_html_text("O&#0000000039;Brien"), "O'Brien");
        assert_eq!(decode_html_text("&#x00000000E9;"), "é");
        assert_eq!(decode_html_text("&#99999999999;"), "\u{FFFD}");
    }

    #[test]
    fn test_invalid_code_points() {
        assert_eq!(decode_html_text("&#0;"), "\u{FFFD}");
        assert_eq!(decode_html_text("&#xD800;"), "\u{FFFD}");
        assert_eq!(decode_html_text("&#150;"), "–");
    }
}
