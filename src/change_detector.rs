/// Reports a text value only when it differs from the previous one seen.
#[derive(Debug, Clone, Default)]
pub struct ChangeDetector {
    last: String,
}

impl ChangeDetector {
    pub fn new(initial: impl Into<String>) -> ChangeDetector {
        ChangeDetector {
            last: initial.into(),
        }
    }

    pub fn observe(&mut self, text: &str) -> Option<String> {
        if text == self.last {
            return None;
        }
        self.last = text.to_string();
        Some(self.last.clone())
    }

    pub fn last(&self) -> &str {
        &self.last
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repeats_are_suppressed() {
        let mut detector = ChangeDetector::default();
        assert_eq!(detector.observe(""), None);
        assert_eq!(detector.observe("he"), Some("he".to_string()));
        assert_eq!(detector.observe("he"), None);
        assert_eq!(detector.observe("hello"), Some("hello".to_string()));
        assert_eq!(detector.observe(""), Some("".to_string()));
        assert_eq!(detector.last(), "");
    }

    #[test]
    fn test_initial_value_counts_as_seen() {
        let mut detector = ChangeDetector::new("greet");
        assert_eq!(detector.observe("greet"), None);
        assert_eq!(detector.observe("greeting"), Some("greeting".to_string()));
    }
}
