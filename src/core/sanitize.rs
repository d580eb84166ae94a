// src/core/sanitize.rs

pub fn normalize_ws(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut prev_space = false;
    for ch in s.chars() {
        if ch.is_whitespace() {
            if !prev_space { out.push(' '); prev_space = true; }
        } else { out.push(ch); prev_space = false; }
    }
    out.trim().to_string()
}

/// Portuguese accented letters → their ASCII base letter.
fn strip_accent(ch: char) -> char {
    match ch {
        'á' | 'à' | 'â' | 'ã' | 'ä' => 'a',
        'Á' | 'À' | 'Â' | 'Ã' | 'Ä' => 'A',
        'é' | 'è' | 'ê' | 'ë' => 'e',
        'É' | 'È' | 'Ê' | 'Ë' => 'E',
        'í' | 'ì' | 'î' | 'ï' => 'i',
        'Í' | 'Ì' | 'Î' | 'Ï' => 'I',
        'ó' | 'ò' | 'ô' | 'õ' | 'ö' => 'o',
        'Ó' | 'Ò' | 'Ô' | 'Õ' | 'Ö' => 'O',
        'ú' | 'ù' | 'û' | 'ü' => 'u',
        'Ú' | 'Ù' | 'Û' | 'Ü' => 'U',
        'ç' => 'c',
        'Ç' => 'C',
        _ => ch,
    }
}

/// Comparison key for source headers: accents stripped, uppercased, spaces collapsed.
/// `"Transmissão"` and `"TRANSMISSAO "` fold to the same key.
pub fn fold_header(s: &str) -> String {
    let plain: String = s.chars().map(strip_accent).collect();
    normalize_ws(&plain).to_uppercase()
}

/// ASCII snake_case key for a metric header: `"3PTS %"` → `"3pts_pct"`.
pub fn snake_key(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut last_us = true;
    for ch in s.chars().map(strip_accent) {
        if ch == '%' {
            if !last_us { out.push('_'); }
            out.push_str("pct");
            last_us = false;
        } else if ch.is_ascii_alphanumeric() {
            out.push(ch.to_ascii_lowercase());
            last_us = false;
        } else if !last_us {
            out.push('_');
            last_us = true;
        }
    }
    let out = out.trim_matches('_').to_string();
    if out.is_empty() { s!("metric") } else { out }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn whitespace_collapses() {
        assert_eq!(normalize_ws("  Flamengo \n\t RJ "), "Flamengo RJ");
    }

    #[test]
    fn headers_fold_accents_and_case() {
        assert_eq!(fold_header("Transmissão"), "TRANSMISSAO");
        assert_eq!(fold_header(" ginásio "), "GINASIO");
        assert_eq!(fold_header("Unnamed: 3"), "UNNAMED: 3");
    }

    #[test]
    fn metric_keys_are_snake_case() {
        assert_eq!(snake_key("3PTS %"), "3pts_pct");
        assert_eq!(snake_key("Média"), "media");
        assert_eq!(snake_key("Lances Livres"), "lances_livres");
        assert_eq!(snake_key("%"), "pct");
        assert_eq!(snake_key("--"), "metric");
    }
}
