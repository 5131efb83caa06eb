use crate::core::FieldName;
use crate::core::field::FormField;

/// One page of the wizard and the fields it contains, in document order.
#[derive(Debug, Clone, PartialEq)]
pub struct Step {
    pub id: String,
    pub title: String,
    pub fields: Vec<FormField>,
}

impl Step {
    pub fn new(id: impl Into<String>, title: impl Into<String>, fields: Vec<FormField>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            fields,
        }
    }

    pub fn builder(id: impl Into<String>, title: impl Into<String>) -> StepBuilder {
        StepBuilder::new(id, title)
    }

    pub fn checkboxes(&self) -> impl Iterator<Item = &FormField> {
        self.fields.iter().filter(|field| field.is_checkbox())
    }

    pub fn checkbox_count(&self) -> usize {
        self.checkboxes().count()
    }

    pub fn any_checked(&self) -> bool {
        self.checkboxes().any(|field| field.checked)
    }

    /// A step without checkboxes is vacuously valid.
    pub fn is_valid(&self) -> bool {
        self.checkbox_count() == 0 || self.any_checked()
    }
}

pub struct StepBuilder {
    id: String,
    title: String,
    fields: Vec<FormField>,
}

impl StepBuilder {
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            fields: Vec::new(),
        }
    }

    pub fn checkbox(mut self, name: impl Into<FieldName>, value: impl Into<String>) -> Self {
        self.fields.push(FormField::checkbox(name, value));
        self
    }

    pub fn checkboxes<V: Into<String>>(
        mut self,
        name: impl Into<FieldName>,
        values: impl IntoIterator<Item = V>,
    ) -> Self {
        let name = name.into();
        self.fields.extend(
            values
                .into_iter()
                .map(|value| FormField::checkbox(name.clone(), value)),
        );
        self
    }

    pub fn text(mut self, name: impl Into<FieldName>) -> Self {
        self.fields.push(FormField::text(name));
        self
    }

    pub fn button(mut self, name: impl Into<FieldName>) -> Self {
        self.fields.push(FormField::button(name));
        self
    }

    pub fn build(self) -> Step {
        Step {
            id: self.id,
            title: self.title,
            fields: self.fields,
        }
    }
}
