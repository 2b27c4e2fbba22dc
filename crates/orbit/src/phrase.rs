/// Rotating subtitle under the hero text.
#[derive(Debug, Clone, PartialEq)]
pub struct PhraseCycler {
    phrases: Vec<String>,
    interval_ms: f64,
}

impl PhraseCycler {
    pub fn new(phrases: Vec<String>, interval_ms: f64) -> Self {
        Self {
            phrases,
            interval_ms,
        }
    }

    pub fn index_at(&self, elapsed_ms: f64) -> Option<usize> {
        if self.phrases.is_empty() {
            return None;
        }
        if !(self.interval_ms > 0.0) || !elapsed_ms.is_finite() || elapsed_ms < 0.0 {
            return Some(0);
        }
        let step = (elapsed_ms / self.interval_ms).floor() as u64;
        Some((step % self.phrases.len() as u64) as usize)
    }

    pub fn phrase(&self, index: usize) -> Option<&str> {
        self.phrases.get(index).map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::PhraseCycler;

    fn cycler() -> PhraseCycler {
        PhraseCycler::new(vec!["a".into(), "b".into(), "c".into()], 5_000.0)
    }

    #[test]
    fn advances_and_wraps() {
        let c = cycler();
        assert_eq!(c.index_at(0.0), Some(0));
        assert_eq!(c.index_at(4_999.0), Some(0));
        assert_eq!(c.index_at(5_000.0), Some(1));
        assert_eq!(c.index_at(15_000.0), Some(0));
        assert_eq!(c.phrase(2), Some("c"));
    }

    #[test]
    fn empty_list_has_no_phrase() {
        let c = PhraseCycler::new(Vec::new(), 5_000.0);
        assert_eq!(c.index_at(12_345.0), None);
    }
}
