use std::collections::HashMap;

use super::{
    types::{CharClass, ElementId, FormatError, Printable},
    DlElement,
};

/// Single tagged value of a subfile.
///
/// The `name` is a caller-side key used to keep elements unique inside a
/// [`FieldCollection`]. It is never serialized.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DataElement {
    name: String,
    id: ElementId,
    value: String,
}

impl DataElement {
    /// Creates a data element.
    ///
    /// Fails if `id` is not exactly three ASCII letters, or if `value`
    /// contains anything other than printable ASCII.
    pub fn new(
        name: impl Into<String>,
        id: impl AsRef<[u8]>,
        value: impl Into<String>,
    ) -> Result<Self, FormatError> {
        let id = ElementId::new(id).map_err(|e| e.with_field("element ID"))?;
        let value = value.into();

        if !Printable::contains_all(value.as_bytes()) {
            return Err(FormatError::new("data element value", value));
        }

        Ok(Self {
            name: name.into(),
            id,
            value,
        })
    }

    /// Creates a standard `DL` data element, named after its identifier.
    pub fn standard(element: DlElement, value: impl Into<String>) -> Result<Self, FormatError> {
        Self::new(element.string_id(), element.id(), value)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn id(&self) -> &ElementId {
        &self.id
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    /// Number of bytes of [`Self::to_text`].
    pub fn encoded_len(&self) -> usize {
        self.id.len() + self.value.len()
    }

    /// Element ID followed by the value, upper-cased.
    pub fn to_text(&self) -> String {
        let mut text = String::with_capacity(self.encoded_len());
        text.push_str(&self.id);
        text.push_str(&self.value);
        text.make_ascii_uppercase();
        text
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("duplicate data element `{0}`")]
pub struct DuplicateFieldError(pub String);

/// Data elements of one subfile, in insertion order.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct FieldCollection {
    elements: Vec<DataElement>,
    index: HashMap<String, usize>,
}

impl FieldCollection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_elements(
        elements: impl IntoIterator<Item = DataElement>,
    ) -> Result<Self, DuplicateFieldError> {
        let mut result = Self::new();

        for element in elements {
            result.insert(element)?;
        }

        Ok(result)
    }

    /// Appends `element`, refusing to replace an element with the same name.
    pub fn insert(&mut self, element: DataElement) -> Result<(), DuplicateFieldError> {
        if self.index.contains_key(element.name()) {
            return Err(DuplicateFieldError(element.name));
        }

        self.index
            .insert(element.name.clone(), self.elements.len());
        self.elements.push(element);
        Ok(())
    }

    pub fn get(&self, name: &str) -> Option<&DataElement> {
        self.index.get(name).map(|&i| &self.elements[i])
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, DataElement> {
        self.elements.iter()
    }

    /// Number of bytes of [`Self::serialize`].
    pub fn encoded_len(&self) -> usize {
        self.elements.iter().map(DataElement::encoded_len).sum()
    }

    /// Concatenation of every element's text, without separators.
    pub fn serialize(&self) -> String {
        let mut result = String::with_capacity(self.encoded_len());

        for element in &self.elements {
            result.push_str(&element.to_text());
        }

        result
    }
}

impl<'a> IntoIterator for &'a FieldCollection {
    type Item = &'a DataElement;
    type IntoIter = std::slice::Iter<'a, DataElement>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
