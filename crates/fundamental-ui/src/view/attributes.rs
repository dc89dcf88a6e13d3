use dioxus::dioxus_core::AttributeValue;
use dioxus::prelude::*;

/// Attributes forwarded verbatim onto a rendered element.
///
/// Names are unique per namespace; setting a name again replaces the value in
/// place so first-insertion order is kept. Inline styles live in the `style`
/// namespace, as the renderer expects.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct AttributeSet(Vec<Attribute>);

const STYLE: Option<&str> = Some("style");

impl AttributeSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace a plain attribute.
    pub fn with(mut self, name: &'static str, value: impl Into<String>) -> Self {
        self.set(Attribute::new(name, value.into(), None, false));
        self
    }

    /// Add or replace an inline style property.
    pub fn with_style(mut self, property: &'static str, value: impl Into<String>) -> Self {
        self.set(Attribute::new(property, value.into(), STYLE, false));
        self
    }

    pub fn set(&mut self, attribute: Attribute) {
        match self
            .0
            .iter_mut()
            .find(|a| a.name == attribute.name && a.namespace == attribute.namespace)
        {
            Some(existing) => *existing = attribute,
            None => self.0.push(attribute),
        }
    }

    /// `self` overlaid with `other`; `other` wins on conflicts.
    pub fn merge(mut self, other: &AttributeSet) -> Self {
        for attribute in &other.0 {
            self.set(attribute.clone());
        }
        self
    }

    pub fn get(&self, name: &str) -> Option<&AttributeValue> {
        self.find(name, None)
    }

    /// Text value of a plain attribute.
    pub fn text(&self, name: &str) -> Option<&str> {
        self.get(name).and_then(as_text)
    }

    /// Text value of an inline style property.
    pub fn style(&self, property: &str) -> Option<&str> {
        self.find(property, STYLE).and_then(as_text)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Remove every `class` attribute and return the joined value.
    ///
    /// `class` is always consumed by the component, which appends it after
    /// its own computed tokens.
    pub fn take_class(&mut self) -> Option<String> {
        let mut classes: Vec<String> = Vec::new();
        self.0.retain(|a| {
            if a.name == "class" && a.namespace.is_none() {
                if let Some(text) = as_text(&a.value) {
                    classes.push(text.to_string());
                }
                false
            } else {
                true
            }
        });
        if classes.is_empty() {
            None
        } else {
            Some(classes.join(" "))
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &Attribute> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    fn find(&self, name: &str, namespace: Option<&str>) -> Option<&AttributeValue> {
        self.0
            .iter()
            .find(|a| a.name == name && a.namespace == namespace)
            .map(|a| &a.value)
    }
}

impl From<Vec<Attribute>> for AttributeSet {
    fn from(attributes: Vec<Attribute>) -> Self {
        let mut set = AttributeSet::new();
        for attribute in attributes {
            set.set(attribute);
        }
        set
    }
}

fn as_text(value: &AttributeValue) -> Option<&str> {
    match value {
        AttributeValue::Text(text) => Some(text.as_str()),
        _ => None,
    }
}
