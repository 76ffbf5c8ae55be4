use unicode_normalization::UnicodeNormalization;

/// Cleans raw input (typed or transcribed) before it reaches the matcher
pub trait Preprocessor {
    fn process(&self, text: &str) -> String {
        let mut text = text.trim().to_string();

        if text.is_empty() {
            return text;
        }

        // Unicode normalization (NFKC)
        text = text.nfkc().collect();

        // Pasted input can carry line breaks; they are never meaningful here
        text = text.replace(['\n', '\r'], " ").trim().to_string();

        text
    }
}

pub struct DefaultPreprocessor;
impl Preprocessor for DefaultPreprocessor {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trims_and_flattens_line_breaks() {
        let p = DefaultPreprocessor;
        assert_eq!(p.process("  hello\nthere \r\n"), "hello there");
        assert_eq!(p.process(""), "");
        assert_eq!(p.process("   "), "");
    }

    #[test]
    fn applies_nfkc() {
        let p = DefaultPreprocessor;
        // Fullwidth forms collapse to ASCII under NFKC
        assert_eq!(p.process("ｈｅｌｌｏ"), "hello");
    }
}
