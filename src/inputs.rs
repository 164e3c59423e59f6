use crate::config::ConfigField;

/// One numeric text box. Starts empty; the current value is shown as a
/// placeholder by the renderer.
#[derive(Debug, Clone, PartialEq)]
pub struct NumericInput {
    pub field: ConfigField,
    pub buffer: String,
}

/// A `(field name, text)` pair ready for `Carousel::handle_change`.
pub type Submission = (&'static str, String);

#[derive(Debug, Clone, PartialEq)]
pub struct InputPanel {
    inputs: Vec<NumericInput>,
    focused: Option<ConfigField>,
}

impl Default for InputPanel {
    fn default() -> Self {
        Self {
            inputs: ConfigField::ALL
                .into_iter()
                .map(|field| NumericInput { field, buffer: String::new() })
                .collect(),
            focused: None,
        }
    }
}

impl InputPanel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn inputs(&self) -> &[NumericInput] {
        &self.inputs
    }

    pub fn focused(&self) -> Option<ConfigField> {
        self.focused
    }

    pub fn focus(&mut self, field: Option<ConfigField>) {
        self.focused = field;
    }

    /// Types `c` into the focused box. Every edit that leaves text behind is
    /// submitted, like a browser `change` event on a number input.
    pub fn type_char(&mut self, c: char) -> Option<Submission> {
        if !(c.is_ascii_digit() || c == '.' || c == '-') {
            return None;
        }
        let input = self.focused_input()?;
        input.buffer.push(c);
        Self::submission(input)
    }

    pub fn backspace(&mut self) -> Option<Submission> {
        let input = self.focused_input()?;
        input.buffer.pop()?;
        Self::submission(input)
    }

    fn focused_input(&mut self) -> Option<&mut NumericInput> {
        let field = self.focused?;
        self.inputs.iter_mut().find(|i| i.field == field)
    }

    fn submission(input: &NumericInput) -> Option<Submission> {
        if input.buffer.is_empty() {
            None
        } else {
            Some((input.field.name(), input.buffer.clone()))
        }
    }
}
