use std::convert::From;
use std::iter::{ FromIterator, IntoIterator, Iterator, };
use std::slice::Iter;
use std::string::String;
use std::vec::Vec;


/// Value held for one header name. `Multiple` is emitted as repeated header
/// lines, e.g. several `Set-Cookie`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum HeaderEntry {
    Single(String),
    Multiple(Vec<String>),
}

impl From<&str> for HeaderEntry {
    fn from(value: &str) -> Self {
        HeaderEntry::Single(value.to_string())
    }
}

impl From<String> for HeaderEntry {
    fn from(value: String) -> Self {
        HeaderEntry::Single(value)
    }
}

impl From<Vec<String>> for HeaderEntry {
    fn from(values: Vec<String>) -> Self {
        HeaderEntry::Multiple(values)
    }
}

impl From<Vec<&str>> for HeaderEntry {
    fn from(values: Vec<&str>) -> Self {
        HeaderEntry::Multiple(values.into_iter().map(String::from).collect())
    }
}

/// Header names mapped to their entries, kept in insertion order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ResponseHeaders {
    entries: Vec<(String, HeaderEntry)>,
}

impl ResponseHeaders {
    pub fn new() -> ResponseHeaders {
        ResponseHeaders {
            entries: Vec::new(),
        }
    }

    /// Replaces the entry of an existing name in place, otherwise appends.
    pub fn insert<K, V>(
        &mut self,
        name: K,
        entry: V,
    ) -> Option<HeaderEntry>
    where
        K: Into<String>,
        V: Into<HeaderEntry>,
    {
        let name = name.into();
        let entry = entry.into();
        match self.entries.iter().position(|(key, _)| *key == name) {
            Some(index) => Some(std::mem::replace(&mut self.entries[index].1, entry)),
            None => {
                self.entries.push((name, entry));
                None
            },
        }
    }

    pub fn get(&self, name: &str) -> Option<&HeaderEntry> {
        self.entries.iter().find(|(key, _)| key == name).map(|(_, entry)| entry)
    }

    pub fn iter(&self) -> Iter<'_, (String, HeaderEntry)> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K, V> FromIterator<(K, V)> for ResponseHeaders
where
    K: Into<String>,
    V: Into<HeaderEntry>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut headers = ResponseHeaders::new();
        for (name, entry) in iter {
            headers.insert(name, entry);
        }
        headers
    }
}

impl<'h> IntoIterator for &'h ResponseHeaders {
    type Item = &'h (String, HeaderEntry);
    type IntoIter = Iter<'h, (String, HeaderEntry)>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
