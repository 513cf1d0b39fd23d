//! The in-memory output set produced by one build.
//!
//! The host bundler owns the set for the duration of the build and hands
//! this crate temporary mutable access during the finalize hook. Entries
//! keep their emit order; every filename is unique within the set.

/// Raw contents of a non-code output entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AssetSource {
    Text(String),
    Binary(Vec<u8>),
}

impl AssetSource {
    /// The textual content, if this asset carries text.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(text) => Some(text),
            Self::Binary(_) => None,
        }
    }
}

impl From<String> for AssetSource {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

impl From<&str> for AssetSource {
    fn from(text: &str) -> Self {
        Self::Text(text.to_owned())
    }
}

impl From<Vec<u8>> for AssetSource {
    fn from(bytes: Vec<u8>) -> Self {
        Self::Binary(bytes)
    }
}

/// A single entry of the output set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputItem {
    /// Generated executable code (JS).
    Chunk {
        /// The generated code.
        code: String,
    },
    /// Raw, non-executable source (HTML, CSS, images, ...).
    Asset {
        /// The raw file contents.
        source: AssetSource,
    },
}

/// The complete set of files produced by one build, keyed by output
/// filename, before anything is written to disk.
///
/// Iteration follows insertion order, which is the order the host
/// emitted the files in.
#[derive(Debug, Clone, Default)]
pub struct Bundle {
    entries: Vec<(String, OutputItem)>,
}

impl Bundle {
    /// Create an empty bundle.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert an entry. An existing entry with the same filename is
    /// replaced in place, keeping its original position.
    pub fn insert(&mut self, file_name: impl Into<String>, item: OutputItem) {
        let file_name = file_name.into();
        match self.entries.iter_mut().find(|(name, _)| *name == file_name) {
            Some((_, existing)) => *existing = item,
            None => self.entries.push((file_name, item)),
        }
    }

    pub fn get(&self, file_name: &str) -> Option<&OutputItem> {
        self.entries
            .iter()
            .find(|(name, _)| name == file_name)
            .map(|(_, item)| item)
    }

    pub fn get_mut(&mut self, file_name: &str) -> Option<&mut OutputItem> {
        self.entries
            .iter_mut()
            .find(|(name, _)| name == file_name)
            .map(|(_, item)| item)
    }

    /// Remove the entry for `file_name`, returning it if it was present.
    pub fn remove(&mut self, file_name: &str) -> Option<OutputItem> {
        let idx = self.entries.iter().position(|(name, _)| name == file_name)?;
        Some(self.entries.remove(idx).1)
    }

    pub fn contains(&self, file_name: &str) -> bool {
        self.entries.iter().any(|(name, _)| name == file_name)
    }

    /// All filenames, in emit order.
    pub fn file_names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(name, _)| name.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<S: Into<String>> FromIterator<(S, OutputItem)> for Bundle {
    fn from_iter<T: IntoIterator<Item = (S, OutputItem)>>(iter: T) -> Self {
        let mut bundle = Self::new();
        for (name, item) in iter {
            bundle.insert(name, item);
        }
        bundle
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn keeps_emit_order() {
        let mut bundle = Bundle::new();
        bundle.insert("index.html", OutputItem::Asset { source: "<html>".into() });
        bundle.insert("app.js", OutputItem::Chunk { code: "1".into() });
        bundle.insert("app.css", OutputItem::Asset { source: "a{}".into() });

        let names: Vec<_> = bundle.file_names().collect();
        assert_eq!(names, ["index.html", "app.js", "app.css"]);
    }

    #[test]
    fn insert_replaces_in_place() {
        let mut bundle = Bundle::new();
        bundle.insert("a.js", OutputItem::Chunk { code: "old".into() });
        bundle.insert("b.js", OutputItem::Chunk { code: "2".into() });
        bundle.insert("a.js", OutputItem::Chunk { code: "new".into() });

        assert_eq!(bundle.len(), 2);
        let names: Vec<_> = bundle.file_names().collect();
        assert_eq!(names, ["a.js", "b.js"]);
        assert_eq!(
            bundle.get("a.js"),
            Some(&OutputItem::Chunk { code: "new".into() })
        );
    }

    #[test]
    fn remove_returns_entry() {
        let mut bundle = Bundle::new();
        bundle.insert("a.css", OutputItem::Asset { source: "a{}".into() });

        assert_eq!(
            bundle.remove("a.css"),
            Some(OutputItem::Asset { source: "a{}".into() })
        );
        assert!(bundle.is_empty());
        assert_eq!(bundle.remove("a.css"), None);
    }
}
