use crate::core::field::FormField;
use crate::core::step::Step;

/// All wizard steps and their fields, in document order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Form {
    steps: Vec<Step>,
}

impl Form {
    pub fn new(steps: Vec<Step>) -> Self {
        Self { steps }
    }

    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    pub fn step_at(&self, index: usize) -> Option<&Step> {
        self.steps.get(index)
    }

    pub fn step_count(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    pub fn fields(&self) -> impl Iterator<Item = &FormField> {
        self.steps.iter().flat_map(|step| step.fields.iter())
    }

    pub fn fields_mut(&mut self) -> impl Iterator<Item = &mut FormField> {
        self.steps.iter_mut().flat_map(|step| step.fields.iter_mut())
    }

    pub fn fields_named<'a, 'n>(
        &'a self,
        name: &'n str,
    ) -> impl Iterator<Item = &'a FormField> + use<'a, 'n> {
        self.fields().filter(move |field| field.name == name)
    }

    /// Pure with respect to selection state; out-of-range indices are invalid.
    pub fn validate(&self, step_index: usize) -> bool {
        self.steps.get(step_index).is_some_and(Step::is_valid)
    }

    /// Checked values of a checkbox group in document order.
    pub fn selected_values(&self, name: &str) -> Vec<String> {
        self.fields_named(name)
            .filter(|field| field.is_selected())
            .map(|field| field.value.clone())
            .collect()
    }

    pub fn has_checkbox_group(&self, name: &str) -> bool {
        self.fields_named(name).any(FormField::is_checkbox)
    }

    /// Returns false when no checkbox carries that name and value.
    pub fn set_checked(&mut self, name: &str, value: &str, checked: bool) -> bool {
        let mut found = false;
        for field in self
            .fields_mut()
            .filter(|field| field.is_checkbox() && field.name == name && field.value == value)
        {
            field.checked = checked;
            found = true;
        }
        found
    }

    pub fn set_group_checked(&mut self, name: &str, checked: bool) {
        for field in self
            .fields_mut()
            .filter(|field| field.is_checkbox() && field.name == name)
        {
            field.checked = checked;
        }
    }

    /// False for an empty group.
    pub fn all_checked(&self, name: &str) -> bool {
        let mut members = self.fields_named(name).filter(|field| field.is_checkbox()).peekable();
        members.peek().is_some() && members.all(|field| field.checked)
    }

    pub fn set_text(&mut self, name: &str, value: &str) -> bool {
        let mut found = false;
        for field in self
            .fields_mut()
            .filter(|field| field.is_text() && field.name == name)
        {
            field.value = value.to_string();
            found = true;
        }
        found
    }

    pub fn text_value(&self, name: &str) -> Option<&str> {
        self.fields()
            .find(|field| field.is_text() && field.name == name)
            .map(|field| field.value.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::Form;
    use crate::core::step::Step;

    fn sample_form() -> Form {
        Form::new(vec![
            Step::builder("records", "Records")
                .checkbox("selectAllRecordTypes", "all")
                .checkboxes("recordType", ["Contact", "Account", "Lead"])
                .build(),
            Step::builder("review", "Review").text("workflowName").build(),
        ])
    }

    #[test]
    fn selected_values_follow_document_order() {
        let mut form = sample_form();
        assert!(form.set_checked("recordType", "Lead", true));
        assert!(form.set_checked("recordType", "Contact", true));

        assert_eq!(form.selected_values("recordType"), vec!["Contact", "Lead"]);
    }

    #[test]
    fn set_checked_reports_unknown_option() {
        let mut form = sample_form();
        assert!(!form.set_checked("recordType", "Opportunity", true));
        assert!(!form.set_checked("workflowName", "", true));
    }

    #[test]
    fn validate_covers_arbitrary_indices() {
        let mut form = sample_form();
        assert!(!form.validate(0));
        assert!(form.validate(1));
        assert!(!form.validate(7));

        form.set_checked("recordType", "Account", true);
        assert!(form.validate(0));
    }

    #[test]
    fn group_toggle_and_all_checked() {
        let mut form = sample_form();
        assert!(!form.all_checked("recordType"));
        form.set_group_checked("recordType", true);
        assert!(form.all_checked("recordType"));
        assert!(!form.all_checked("missing"));
    }

    #[test]
    fn set_text_updates_text_fields_only() {
        let mut form = sample_form();
        assert!(form.set_text("workflowName", "Welcome mail"));
        assert_eq!(form.text_value("workflowName"), Some("Welcome mail"));
        assert!(!form.set_text("recordType", "Contact"));
    }
}
