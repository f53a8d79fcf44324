//! URL-safe slug derivation for program display keys.

/// Derives a lower-kebab-case ASCII slug from a free-text name.
///
/// Latin letters with diacritics are transliterated; every other
/// non-alphanumeric run collapses into a single `-`. Slugs are derived from
/// the original (non-lower-cased) name and are not deduplicated within a
/// run, only implicitly against the master data by the operator.
pub fn slugify(raw: &str) -> String {
    let lowered = raw.trim().to_lowercase();
    let mut slug = String::with_capacity(lowered.len());
    let mut pending_separator = false;

    for ch in lowered.chars() {
        if ch.is_ascii_alphanumeric() {
            if pending_separator && !slug.is_empty() {
                slug.push('-');
            }
            pending_separator = false;
            slug.push(ch);
        } else if let Some(folded) = fold_diacritic(ch) {
            if pending_separator && !slug.is_empty() {
                slug.push('-');
            }
            pending_separator = false;
            slug.push_str(folded);
        } else {
            pending_separator = true;
        }
    }

    slug
}

/// ASCII folding for the Latin diacritics that show up in program names.
fn fold_diacritic(ch: char) -> Option<&'static str> {
    let folded = match ch {
        'à' | 'á' | 'â' | 'ã' | 'ä' | 'å' => "a",
        'è' | 'é' | 'ê' | 'ë' => "e",
        'ì' | 'í' | 'î' | 'ï' => "i",
        'ò' | 'ó' | 'ô' | 'õ' | 'ö' => "o",
        'ù' | 'ú' | 'û' | 'ü' => "u",
        'ý' | 'ÿ' => "y",
        'ç' => "c",
        'ñ' => "n",
        'ß' => "ss",
        'æ' => "ae",
        'ø' => "o",
        _ => return None,
    };
    Some(folded)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lower_kebab_cases_plain_names() {
        assert_eq!(slugify("Training CMA"), "training-cma");
        assert_eq!(
            slugify("Training Microsoft Excel Level Basic PT. Sadhana"),
            "training-microsoft-excel-level-basic-pt-sadhana"
        );
    }

    #[test]
    fn collapses_punctuation_runs() {
        assert_eq!(
            slugify("Training SAP 2000: Analisa Struktur & Desain"),
            "training-sap-2000-analisa-struktur-desain"
        );
        assert_eq!(
            slugify("Pelatihan PLC Modicon M221 Schneider – Tingkat Dasar"),
            "pelatihan-plc-modicon-m221-schneider-tingkat-dasar"
        );
    }

    #[test]
    fn transliterates_diacritics() {
        assert_eq!(slugify("Café Résumé"), "cafe-resume");
    }

    #[test]
    fn trims_leading_and_trailing_separators() {
        assert_eq!(slugify("  ¡Hola!  "), "hola");
        assert_eq!(slugify("---"), "");
        assert_eq!(slugify(""), "");
    }
}
