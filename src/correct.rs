//! Lexical post-correction for raw Turkish transcripts.
//!
//! Whisper output for Turkish speech carries a recurring set of
//! mis-transcriptions (often English or Spanish words substituted for
//! similar-sounding Turkish ones). [`post_process`] collapses whitespace,
//! applies the static replacement table, and normalizes spacing around
//! sentence-ending punctuation.

use once_cell::sync::Lazy;
use regex::Regex;

/// Known mis-transcriptions and their corrections, applied in order.
const TURKISH_FIXES: &[(&str, &str)] = &[
    ("Cliniki", "Klinik"),
    ("aunque", "ancak"),
    ("inaugural", "gerçek"),
    ("Garage", "garaj"),
    ("Lime", "limon"),
    ("Party", "parti"),
    ("övüyle", "övgüyle"),
    ("müfakalı", "mümkün"),
    ("orka", "organizasyon"),
    ("hayatması", "hayatı"),
    ("ufacıklı", "ufak"),
    ("canısıyla", "canıyla"),
    ("değiştilerinecek", "değiştirilecek"),
    ("boşlu", "boş"),
    ("füldüme", "fırsatıma"),
    ("mükefata", "mükafat"),
    ("dairli", "dair"),
    ("fayna", "fayda"),
    ("espranlar", "espriler"),
    ("aynayyardan", "yanından"),
    ("aynadısı", "yanında"),
    ("aynadık", "yanında"),
    ("krim", "kariyer"),
    ("etleşin", "elde edin"),
    ("sınake", "sadece"),
    ("hizahetle", "hizmetle"),
    ("nefikirlerine", "fikirlerine"),
    ("fırsitli", "fırsatı"),
    ("Tiye", "Tıpkı"),
    ("sınavda", "sıradan"),
    ("itiyar", "ihtiyaç"),
    ("ayağıcak", "ayıracak"),
    ("dançağı", "dan başka"),
    ("hedani", "hedonik"),
    ("kuyruğumun", "kuyruğunun"),
    ("çarkayından", "çarkından"),
    ("sonuçtundan", "sonuçtan"),
    ("kayk", "kayıp"),
    ("dina", "dünya"),
    ("niçabı", "ne kadar"),
    ("soğusturmaya", "sorgulamaya"),
    ("yamak", "yapmak"),
];

static WHITESPACE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").unwrap());
static SPACE_BEFORE_PUNCT: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+([.!?])").unwrap());
static MISSING_SPACE_AFTER_PUNCT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"([.!?])([A-ZÇĞIİÖŞÜ])").unwrap());

/// Apply the full correction pass to a raw transcript.
pub fn post_process(text: &str) -> String {
    let mut text = WHITESPACE.replace_all(text.trim(), " ").into_owned();

    for (wrong, correct) in TURKISH_FIXES {
        if text.contains(wrong) {
            text = text.replace(wrong, correct);
        }
    }

    let text = SPACE_BEFORE_PUNCT.replace_all(&text, "$1");
    MISSING_SPACE_AFTER_PUNCT
        .replace_all(&text, "$1 $2")
        .into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn collapses_whitespace_and_trims() {
        assert_eq!(
            post_process("  Merhaba   dünya\n\tnasılsın  "),
            "Merhaba dünya nasılsın"
        );
    }

    #[test]
    fn applies_replacement_table() {
        assert_eq!(post_process("Cliniki bir ortam"), "Klinik bir ortam");
        assert_eq!(post_process("aunque öyle olsa"), "ancak öyle olsa");
        assert_eq!(post_process("etleşin hemen"), "elde edin hemen");
    }

    #[test]
    fn removes_space_before_sentence_punctuation() {
        assert_eq!(post_process("Geldik mi ?"), "Geldik mi?");
        assert_eq!(post_process("Bitti ."), "Bitti.");
    }

    #[test]
    fn inserts_space_after_punctuation_before_uppercase() {
        assert_eq!(post_process("Bitti.Şimdi devam"), "Bitti. Şimdi devam");
        assert_eq!(post_process("Olur mu?Çok iyi"), "Olur mu? Çok iyi");
    }

    #[test]
    fn lowercase_after_punctuation_is_untouched() {
        assert_eq!(post_process("bitti.devam"), "bitti.devam");
    }

    #[test]
    fn combined_pass() {
        assert_eq!(
            post_process("  Garage kapısı  açık .Şimdi kapat "),
            "garaj kapısı açık. Şimdi kapat"
        );
    }
}
