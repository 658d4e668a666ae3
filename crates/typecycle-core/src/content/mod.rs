//! Word sources cycled through by the animation.

mod static_source;

pub use static_source::{DEFAULT_HEADLINE_WORDS, default_headline_words};

/// Read-only ordered list of words.
pub trait WordSource {
    fn word_count(&self) -> usize;
    fn word_at(&self, index: usize) -> Option<&str>;

    fn is_empty(&self) -> bool {
        self.word_count() == 0
    }
}

impl<S: AsRef<str>> WordSource for [S] {
    fn word_count(&self) -> usize {
        self.len()
    }

    fn word_at(&self, index: usize) -> Option<&str> {
        self.get(index).map(AsRef::as_ref)
    }
}

impl<S: AsRef<str>, const N: usize> WordSource for [S; N] {
    fn word_count(&self) -> usize {
        self.as_slice().word_count()
    }

    fn word_at(&self, index: usize) -> Option<&str> {
        self.as_slice().word_at(index)
    }
}

impl<S: AsRef<str>, const N: usize> WordSource for heapless::Vec<S, N> {
    fn word_count(&self) -> usize {
        self.as_slice().word_count()
    }

    fn word_at(&self, index: usize) -> Option<&str> {
        self.as_slice().word_at(index)
    }
}

impl<T: WordSource + ?Sized> WordSource for &T {
    fn word_count(&self) -> usize {
        (**self).word_count()
    }

    fn word_at(&self, index: usize) -> Option<&str> {
        (**self).word_at(index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slices_arrays_and_heapless_vectors_expose_words_in_order() {
        let array = ["alpha", "beta"];
        assert_eq!(array.word_count(), 2);
        assert_eq!(array.word_at(1), Some("beta"));
        assert_eq!(array.word_at(2), None);

        let slice: &[&str] = &array;
        assert_eq!(slice.word_at(0), Some("alpha"));

        let mut owned: heapless::Vec<heapless::String<8>, 4> = heapless::Vec::new();
        let mut word = heapless::String::new();
        word.push_str("gamma").unwrap();
        owned.push(word).unwrap();
        assert_eq!(owned.word_count(), 1);
        assert_eq!(owned.word_at(0), Some("gamma"));
    }

    #[test]
    fn empty_sources_report_empty() {
        let none: [&str; 0] = [];
        assert!(none.is_empty());
        assert!(!DEFAULT_HEADLINE_WORDS.is_empty());
    }
}
