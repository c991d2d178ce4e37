use std::num::NonZeroUsize;

/// Index after `index` in a sequence of `len` items, wrapping to the front.
pub fn next(index: usize, len: NonZeroUsize) -> usize {
    (index + 1) % len.get()
}

/// Index before `index` in a sequence of `len` items, wrapping to the back.
pub fn prev(index: usize, len: NonZeroUsize) -> usize {
    let len = len.get();
    (index % len + len - 1) % len
}

/// A project's image gallery. Never empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Gallery {
    images: Vec<String>,
}

impl Gallery {
    pub fn new(images: Vec<String>) -> Option<Self> {
        if images.is_empty() {
            None
        } else {
            Some(Self { images })
        }
    }

    pub fn len(&self) -> NonZeroUsize {
        NonZeroUsize::new(self.images.len()).expect("gallery is never empty")
    }

    /// Image at `index`, clamped into range so a stale index still renders.
    pub fn image(&self, index: usize) -> &str {
        &self.images[index.min(self.images.len() - 1)]
    }
}
