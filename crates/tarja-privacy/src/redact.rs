//! Mask rendering.

use tarja_core::constants::MASK_CHAR;
use tarja_core::models::MaskIndexSet;

/// Render the redacted copy of `text`.
///
/// Every alphanumeric character whose starting byte offset is in the
/// mask becomes [`MASK_CHAR`]; punctuation and whitespace inside a
/// masked span stay visible, so `123.456.789-09` renders as
/// `xxx.xxx.xxx-xx`.
pub fn render(text: &str, mask: &MaskIndexSet) -> String {
    if mask.is_empty() {
        return text.to_string();
    }

    let mut out = String::with_capacity(text.len());
    for (offset, ch) in text.char_indices() {
        if mask.contains(offset) && ch.is_alphanumeric() {
            out.push(MASK_CHAR);
        } else {
            out.push(ch);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mask_of(start: usize, end: usize) -> MaskIndexSet {
        let mut mask = MaskIndexSet::new();
        mask.insert_span(start, end);
        mask
    }

    #[test]
    fn empty_mask_returns_text_unchanged() {
        let text = "nenhum dado pessoal aqui";
        assert_eq!(render(text, &MaskIndexSet::new()), text);
    }

    #[test]
    fn punctuation_inside_span_survives() {
        let text = "CPF 123.456.789-09 citado";
        let start = text.find("123").unwrap();
        let mask = mask_of(start, start + "123.456.789-09".len());
        assert_eq!(render(text, &mask), "CPF xxx.xxx.xxx-xx citado");
    }

    #[test]
    fn email_keeps_at_sign_and_dots() {
        let text = "contato: maria@example.com";
        let start = text.find("maria").unwrap();
        let mask = mask_of(start, text.len());
        assert_eq!(render(text, &mask), "contato: xxxxx@xxxxxxx.xxx");
    }

    #[test]
    fn multibyte_text_masks_whole_characters() {
        let text = "nome: José";
        let start = text.find("José").unwrap();
        let mask = mask_of(start, text.len());
        let redacted = render(text, &mask);
        assert_eq!(redacted, "nome: xxxx");
        assert_eq!(redacted.chars().count(), text.chars().count());
    }

    #[test]
    fn unmasked_regions_untouched() {
        let text = "antes 12345678 depois";
        let start = text.find("12345678").unwrap();
        let mask = mask_of(start, start + 8);
        assert_eq!(render(text, &mask), "antes xxxxxxxx depois");
    }
}
