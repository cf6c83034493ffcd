// src/record.rs
//
// One extracted item: an ordered list of (field name, value) pairs.
// Field order is insertion order and becomes the CSV column order.

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Record {
    fields: Vec<(String, String)>,
}

impl Record {
    pub fn new() -> Self { Self { fields: Vec::new() } }

    /// Append a field. A repeated name replaces the earlier value in place.
    pub fn push(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        let value = value.into();
        match self.fields.iter_mut().find(|(n, _)| *n == name) {
            Some(slot) => slot.1 = value,
            None => self.fields.push((name, value)),
        }
    }

    /// Builder-style `push`.
    pub fn with(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.push(name, value);
        self
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    pub fn field_names(&self) -> Vec<String> {
        self.fields.iter().map(|(n, _)| n.clone()).collect()
    }

    pub fn values(&self) -> Vec<String> {
        self.fields.iter().map(|(_, v)| v.clone()).collect()
    }

    #[inline] pub fn len(&self) -> usize { self.fields.len() }
    #[inline] pub fn is_empty(&self) -> bool { self.fields.is_empty() }

    /// Same field names in the same order.
    pub fn same_schema(&self, other: &Record) -> bool {
        self.fields.len() == other.fields.len()
            && self.fields.iter().zip(&other.fields).all(|((a, _), (b, _))| a == b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_insertion_order() {
        let r = Record::new().with("text", "A").with("author", "B");
        assert_eq!(r.field_names(), vec!["text", "author"]);
        assert_eq!(r.values(), vec!["A", "B"]);
        assert_eq!(r.get("author"), Some("B"));
        assert_eq!(r.get("tags"), None);
    }

    #[test]
    fn repeated_name_overwrites_in_place() {
        let r = Record::new().with("text", "A").with("author", "B").with("text", "C");
        assert_eq!(r.len(), 2);
        assert_eq!(r.values(), vec!["C", "B"]);
    }

    #[test]
    fn schema_compares_names_and_order() {
        let a = Record::new().with("text", "1").with("author", "2");
        let b = Record::new().with("text", "x").with("author", "y");
        let c = Record::new().with("author", "y").with("text", "x");
        let d = Record::new().with("text", "x");
        assert!(a.same_schema(&b));
        assert!(!a.same_schema(&c));
        assert!(!a.same_schema(&d));
    }
}
