//! Single-line text input state.
//!
//! Holds the draft text of the search and new-todo boxes until it is committed.

/// Draft text owned by one input box.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextInput {
    /// Current draft
    value: String,
    /// Hint shown while the draft is empty
    placeholder: &'static str,
}

impl TextInput {
    /// Create an empty input.
    ///
    /// # Arguments
    /// * `placeholder` - Hint shown while the draft is empty
    pub fn new(placeholder: &'static str) -> Self {
        Self {
            value: String::new(),
            placeholder,
        }
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn placeholder(&self) -> &'static str {
        self.placeholder
    }

    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
    }

    /// Append a character to the draft.
    pub fn push(&mut self, ch: char) {
        self.value.push(ch);
    }

    /// Remove the last character of the draft.
    pub fn pop(&mut self) {
        self.value.pop();
    }

    /// Discard the draft.
    pub fn clear(&mut self) {
        self.value.clear();
    }

    /// Hand out the draft and reset the input.
    ///
    /// # Returns
    /// * `String` - The draft as typed, untrimmed
    pub fn commit(&mut self) -> String {
        std::mem::take(&mut self.value)
    }
}
