use memchr::memmem;

/// Something that can be searched for inside a `&str`.
///
/// Offsets are byte offsets into the haystack and always land on `char`
/// boundaries, so they can be used to slice it directly.
pub trait Delimiter {
    /// Returns `(start, end)` of the first match in `haystack`.
    fn find_next(&self, haystack: &str) -> Option<(usize, usize)>;

    /// An empty delimiter would match without consuming input.
    fn is_empty(&self) -> bool;
}

impl Delimiter for &str {
    fn find_next(&self, haystack: &str) -> Option<(usize, usize)> {
        memmem::find(haystack.as_bytes(), self.as_bytes()).map(|start| (start, start + self.len()))
    }

    fn is_empty(&self) -> bool {
        str::is_empty(self)
    }
}

impl Delimiter for &String {
    fn find_next(&self, haystack: &str) -> Option<(usize, usize)> {
        self.as_str().find_next(haystack)
    }

    fn is_empty(&self) -> bool {
        String::is_empty(self)
    }
}

impl Delimiter for char {
    fn find_next(&self, haystack: &str) -> Option<(usize, usize)> {
        let start = if self.is_ascii() {
            memchr::memchr(*self as u8, haystack.as_bytes())
        } else {
            let mut buf = [0u8; 4];
            let encoded = self.encode_utf8(&mut buf);
            memmem::find(haystack.as_bytes(), encoded.as_bytes())
        };
        start.map(|start| (start, start + self.len_utf8()))
    }

    fn is_empty(&self) -> bool {
        false
    }
}
