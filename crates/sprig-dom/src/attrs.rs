use smartstring::{LazyCompact, SmartString};

/// Attribute value: plain text, or a boolean for live flags like `checked`
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AttrValue {
    Text(String),
    Bool(bool),
}

impl AttrValue {
    pub fn as_text(&self) -> Option<&str> {
        match self {
            AttrValue::Text(text) => Some(text),
            AttrValue::Bool(_) => None,
        }
    }

    /// Stringified form used when the value lands in the generic attribute
    /// list instead of a live property
    pub(crate) fn into_attr_string(self) -> String {
        match self {
            AttrValue::Text(text) => text,
            AttrValue::Bool(b) => b.to_string(),
        }
    }
}

impl From<&str> for AttrValue {
    fn from(text: &str) -> Self {
        AttrValue::Text(text.to_string())
    }
}

impl From<String> for AttrValue {
    fn from(text: String) -> Self {
        AttrValue::Text(text)
    }
}

impl From<bool> for AttrValue {
    fn from(b: bool) -> Self {
        AttrValue::Bool(b)
    }
}

/// Ordered attribute mapping for the element builder
#[derive(Debug, Clone, Default)]
pub struct Attrs(pub(crate) Vec<(SmartString<LazyCompact>, AttrValue)>);

impl Attrs {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(mut self, name: &str, value: impl Into<AttrValue>) -> Self {
        self.0.push((name.into(), value.into()));
        self
    }

    pub fn get(&self, name: &str) -> Option<&AttrValue> {
        self.0
            .iter()
            .find(|(n, _)| n.as_str() == name)
            .map(|(_, value)| value)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_attrs_ordered() {
        let attrs = Attrs::new()
            .set("type", "checkbox")
            .set("checked", true)
            .set("class", "done");

        assert_eq!(attrs.get("type"), Some(&AttrValue::Text("checkbox".into())));
        assert_eq!(attrs.get("checked"), Some(&AttrValue::Bool(true)));
        assert_eq!(attrs.get("missing"), None);
        assert_eq!(attrs.0[0].0.as_str(), "type");
        assert_eq!(attrs.0[2].0.as_str(), "class");
    }

    #[test]
    fn test_attr_value_stringified() {
        assert_eq!(AttrValue::from(true).into_attr_string(), "true");
        assert_eq!(AttrValue::from("x").into_attr_string(), "x");
    }
}
