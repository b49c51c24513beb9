//! Styled run container
//!
//! A [`RunSequence`] is the unit of output at every tree level. Runs carry
//! their text and an abstract, insertion-ordered attribute map; hosts convert
//! the attributes into whatever their text framework needs.

use indexmap::IndexMap;

/// Marks the end of a paragraph
pub const PARAGRAPH_SEPARATOR: &str = "\u{2029}";

/// Marks a line break within the same paragraph
pub const LINE_SEPARATOR: &str = "\u{2028}";

/// Zero-width marker keeping otherwise empty runs renderable
pub const ZERO_WIDTH_SPACE: &str = "\u{200B}";

/// Separator between a list item prefix and its content
pub const PREFIX_SEPARATOR: &str = "\t";

/// Bullet used when no list context supplies a prefix
pub const DEFAULT_BULLET: &str = "•";

/// An attribute value
#[derive(Debug, Clone, PartialEq)]
pub enum AttrValue {
    Flag(bool),
    Int(i64),
    Float(f64),
    Text(String),
}

impl From<bool> for AttrValue {
    fn from(value: bool) -> Self {
        AttrValue::Flag(value)
    }
}

impl From<i64> for AttrValue {
    fn from(value: i64) -> Self {
        AttrValue::Int(value)
    }
}

impl From<f64> for AttrValue {
    fn from(value: f64) -> Self {
        AttrValue::Float(value)
    }
}

impl From<&str> for AttrValue {
    fn from(value: &str) -> Self {
        AttrValue::Text(value.to_string())
    }
}

impl From<String> for AttrValue {
    fn from(value: String) -> Self {
        AttrValue::Text(value)
    }
}

impl std::fmt::Display for AttrValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AttrValue::Flag(v) => write!(f, "{}", v),
            AttrValue::Int(v) => write!(f, "{}", v),
            AttrValue::Float(v) => write!(f, "{}", v),
            AttrValue::Text(v) => write!(f, "{:?}", v),
        }
    }
}

/// Insertion-ordered attribute map of a run
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Attributes(IndexMap<String, AttrValue>);

impl Attributes {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, key: &str) -> Option<&AttrValue> {
        self.0.get(key)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    /// Set an attribute, replacing any previous value
    pub fn set(&mut self, key: &str, value: impl Into<AttrValue>) {
        self.0.insert(key.to_string(), value.into());
    }

    /// Set an attribute only if the key is not present yet
    pub fn set_if_absent(&mut self, key: &str, value: impl Into<AttrValue>) {
        if !self.0.contains_key(key) {
            self.0.insert(key.to_string(), value.into());
        }
    }

    pub fn remove(&mut self, key: &str) -> Option<AttrValue> {
        self.0.shift_remove(key)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &AttrValue)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v))
    }
}

impl std::fmt::Display for Attributes {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("{")?;
        for (i, (key, value)) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}: {}", key, value)?;
        }
        f.write_str("}")
    }
}

/// A span of text sharing one set of attributes
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Run {
    pub text: String,
    pub attributes: Attributes,
}

impl Run {
    pub fn new(text: &str) -> Self {
        Self {
            text: text.to_string(),
            attributes: Attributes::new(),
        }
    }

    /// Length in characters
    pub fn char_len(&self) -> usize {
        self.text.chars().count()
    }
}

/// An ordered sequence of styled runs
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RunSequence {
    runs: Vec<Run>,
}

impl RunSequence {
    pub fn new() -> Self {
        Self::default()
    }

    /// A sequence holding one unstyled run
    pub fn from_text(text: &str) -> Self {
        let mut seq = Self::new();
        seq.push_str(text);
        seq
    }

    /// Append an unstyled run; empty text is ignored
    pub fn push_str(&mut self, text: &str) {
        if !text.is_empty() {
            self.runs.push(Run::new(text));
        }
    }

    pub fn push_run(&mut self, run: Run) {
        self.runs.push(run);
    }

    /// Move all runs of `other` to the end of this sequence
    pub fn append(&mut self, mut other: RunSequence) {
        self.runs.append(&mut other.runs);
    }

    /// Insert all runs of `other` before the run at `index`
    ///
    /// `index` is clamped to the number of runs.
    pub fn insert(&mut self, index: usize, other: RunSequence) {
        let index = index.min(self.runs.len());
        self.runs.splice(index..index, other.runs);
    }

    /// Number of runs
    pub fn len(&self) -> usize {
        self.runs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.runs.is_empty()
    }

    pub fn runs(&self) -> &[Run] {
        &self.runs
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Run> {
        self.runs.iter()
    }

    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, Run> {
        self.runs.iter_mut()
    }

    /// Concatenated text of all runs
    pub fn text(&self) -> String {
        self.runs.iter().map(|r| r.text.as_str()).collect()
    }

    /// Length in characters across all runs
    pub fn char_len(&self) -> usize {
        self.runs.iter().map(Run::char_len).sum()
    }

    /// Set an attribute on every run, replacing existing values
    pub fn set_attribute(&mut self, key: &str, value: impl Into<AttrValue>) {
        let value = value.into();
        for run in &mut self.runs {
            run.attributes.set(key, value.clone());
        }
    }

    /// Set an attribute on every run that does not carry it yet
    pub fn set_attribute_if_absent(&mut self, key: &str, value: impl Into<AttrValue>) {
        let value = value.into();
        for run in &mut self.runs {
            run.attributes.set_if_absent(key, value.clone());
        }
    }

    /// Merge adjacent runs whose attributes are equal
    pub fn coalesce(&mut self) {
        let mut merged: Vec<Run> = Vec::with_capacity(self.runs.len());
        for run in self.runs.drain(..) {
            match merged.last_mut() {
                Some(last) if last.attributes == run.attributes => last.text.push_str(&run.text),
                _ => merged.push(run),
            }
        }
        self.runs = merged;
    }

    /// Render as plain text: separators become newlines, zero-width markers vanish
    pub fn to_plain_text(&self) -> String {
        let mut out = String::with_capacity(self.runs.iter().map(|r| r.text.len()).sum());
        for run in &self.runs {
            for c in run.text.chars() {
                match c {
                    '\u{2029}' | '\u{2028}' => out.push('\n'),
                    '\u{200B}' => {}
                    _ => out.push(c),
                }
            }
        }
        out
    }
}

impl IntoIterator for RunSequence {
    type Item = Run;
    type IntoIter = std::vec::IntoIter<Run>;

    fn into_iter(self) -> Self::IntoIter {
        self.runs.into_iter()
    }
}

impl<'a> IntoIterator for &'a RunSequence {
    type Item = &'a Run;
    type IntoIter = std::slice::Iter<'a, Run>;

    fn into_iter(self) -> Self::IntoIter {
        self.runs.iter()
    }
}

impl FromIterator<Run> for RunSequence {
    fn from_iter<I: IntoIterator<Item = Run>>(iter: I) -> Self {
        Self {
            runs: iter.into_iter().collect(),
        }
    }
}

/// A slice of compiled output, either prose or a single code block
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Segment {
    pub content: RunSequence,
    pub is_code_block: bool,
    pub code_language: Option<String>,
}

impl Segment {
    pub fn prose(content: RunSequence) -> Self {
        Self {
            content,
            is_code_block: false,
            code_language: None,
        }
    }

    pub fn code(content: RunSequence, code_language: Option<String>) -> Self {
        Self {
            content,
            is_code_block: true,
            code_language,
        }
    }
}
