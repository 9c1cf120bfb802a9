use crate::ui::mvi::UiState;

/// Focusable controls, in Tab order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormField {
    #[default]
    Title,
    Address,
    Submit,
    Hello,
}

impl FormField {
    const ORDER: [FormField; 4] = [
        FormField::Title,
        FormField::Address,
        FormField::Submit,
        FormField::Hello,
    ];

    fn index(self) -> usize {
        Self::ORDER
            .iter()
            .position(|field| *field == self)
            .unwrap_or(0)
    }

    pub fn next(self) -> Self {
        Self::ORDER[(self.index() + 1) % Self::ORDER.len()]
    }

    pub fn prev(self) -> Self {
        let len = Self::ORDER.len();
        Self::ORDER[(self.index() + len - 1) % len]
    }

    pub fn is_text(self) -> bool {
        matches!(self, FormField::Title | FormField::Address)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FormValue {
    pub title: String,
    pub address: String,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct FormState {
    pub value: FormValue,
    pub focus: FormField,
    /// Value captured by the latest submit.
    pub last_submitted: Option<FormValue>,
}

impl UiState for FormState {}

impl FormState {
    pub fn field_mut(&mut self, field: FormField) -> Option<&mut String> {
        match field {
            FormField::Title => Some(&mut self.value.title),
            FormField::Address => Some(&mut self.value.address),
            FormField::Submit | FormField::Hello => None,
        }
    }
}
