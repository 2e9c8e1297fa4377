const MAX_DIGITS: usize = 9;

/// Numeric entry for jumping to a slide by number.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GoToPrompt {
    buffer: String,
}

impl GoToPrompt {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, c: char) {
        if c.is_ascii_digit() && self.buffer.len() < MAX_DIGITS {
            self.buffer.push(c);
        }
    }

    pub fn backspace(&mut self) {
        self.buffer.pop();
    }

    pub fn text(&self) -> &str {
        &self.buffer
    }

    pub fn label(total: usize) -> String {
        format!("Go to slide number (1-{total}):")
    }

    /// The entered slide number, if any digits were typed.
    pub fn submit(&self) -> Option<i64> {
        parse_leading_number(&self.buffer)
    }
}

/// Reads the leading run of decimal digits after optional whitespace and sign.
pub fn parse_leading_number(input: &str) -> Option<i64> {
    let s = input.trim_start();
    let (negative, rest) = match s.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, s.strip_prefix('+').unwrap_or(s)),
    };
    let digits: String = rest.chars().take_while(char::is_ascii_digit).collect();
    let value: i64 = digits.parse().ok()?;
    Some(if negative { -value } else { value })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn typed_digits_are_submitted() {
        let mut prompt = GoToPrompt::new();
        for c in "12".chars() {
            prompt.push(c);
        }
        assert_eq!(prompt.text(), "12");
        assert_eq!(prompt.submit(), Some(12));
    }

    #[test]
    fn non_digits_and_overflow_are_dropped() {
        let mut prompt = GoToPrompt::new();
        for c in "4x2-".chars() {
            prompt.push(c);
        }
        assert_eq!(prompt.text(), "42");
        for _ in 0..20 {
            prompt.push('9');
        }
        assert_eq!(prompt.text().len(), MAX_DIGITS);
    }

    #[test]
    fn backspace_and_empty_submit() {
        let mut prompt = GoToPrompt::new();
        prompt.push('3');
        prompt.backspace();
        prompt.backspace();
        assert_eq!(prompt.submit(), None);
    }

    #[test]
    fn leading_number_parsing() {
        assert_eq!(parse_leading_number("  7 slides"), Some(7));
        assert_eq!(parse_leading_number("12abc"), Some(12));
        assert_eq!(parse_leading_number("-3"), Some(-3));
        assert_eq!(parse_leading_number("abc"), None);
        assert_eq!(parse_leading_number(""), None);
    }

    #[test]
    fn label_names_the_range() {
        assert_eq!(GoToPrompt::label(13), "Go to slide number (1-13):");
    }
}
