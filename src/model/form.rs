//! Form state for entity screens
//!
//! A screen-local mirror of one record plus the id-field lock. The id field
//! is only editable while the screen is armed for a search.

use super::record::{
    parse_entity_id, EntityId, EntityPayload, EntityRecord, ValidationError, MAX_ENTITY_ID,
};

/// Editability of the id input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum IdFieldState {
    /// Read-only; holds nothing or the id of the last loaded record
    #[default]
    Locked,
    /// Editable, waiting for Enter to look the id up
    SearchArmed,
}

/// Input fields of an entity form
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Id,
    Name,
    Description,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormState {
    pub id: String,
    pub name: String,
    pub description: String,
    pub id_field: IdFieldState,
}

impl FormState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn value(&self, field: FormField) -> &str {
        match field {
            FormField::Id => &self.id,
            FormField::Name => &self.name,
            FormField::Description => &self.description,
        }
    }

    pub fn is_id_editable(&self) -> bool {
        self.id_field == IdFieldState::SearchArmed
    }

    /// Append a character to a field, returning whether it was accepted
    ///
    /// The id field takes digits only, only while armed, and never past
    /// `MAX_ENTITY_ID`.
    pub fn push_char(&mut self, field: FormField, c: char) -> bool {
        match field {
            FormField::Id => {
                if !self.is_id_editable() || !c.is_ascii_digit() {
                    return false;
                }
                let candidate = format!("{}{}", self.id, c);
                match candidate.parse::<EntityId>() {
                    Ok(value) if value <= MAX_ENTITY_ID => {
                        self.id = candidate;
                        true
                    }
                    _ => false,
                }
            }
            FormField::Name => {
                self.name.push(c);
                true
            }
            FormField::Description => {
                self.description.push(c);
                true
            }
        }
    }

    /// Remove the last character of a field
    pub fn backspace(&mut self, field: FormField) -> bool {
        let target = match field {
            FormField::Id if !self.is_id_editable() => return false,
            FormField::Id => &mut self.id,
            FormField::Name => &mut self.name,
            FormField::Description => &mut self.description,
        };
        target.pop().is_some()
    }

    /// Reset every field and re-lock the id input
    pub fn clear(&mut self) {
        self.id.clear();
        self.name.clear();
        self.description.clear();
        self.id_field = IdFieldState::Locked;
    }

    /// Clear the form and unlock the id input for a lookup
    pub fn arm_search(&mut self) {
        self.clear();
        self.id_field = IdFieldState::SearchArmed;
    }

    pub fn lock_id(&mut self) {
        self.id_field = IdFieldState::Locked;
    }

    /// Copy name and description from a fetched record; the id stays as typed
    pub fn populate(&mut self, record: &EntityRecord) {
        self.name = record.name().to_string();
        self.description = record.description().to_string();
    }

    /// Payload for create/update, or the validation failure
    pub fn payload(&self) -> Result<EntityPayload, ValidationError> {
        let payload = EntityPayload::new(self.name.clone(), self.description.clone());
        payload.validate()?;
        Ok(payload)
    }

    /// Id of the record currently shown, required by update and delete
    pub fn loaded_id(&self) -> Result<EntityId, ValidationError> {
        parse_entity_id(&self.id).ok_or(ValidationError::NoRecordLoaded)
    }

    pub fn is_empty(&self) -> bool {
        self.id.is_empty() && self.name.is_empty() && self.description.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled_form() -> FormState {
        FormState {
            id: "7".to_string(),
            name: "Acme".to_string(),
            description: "Tools co.".to_string(),
            id_field: IdFieldState::Locked,
        }
    }

    #[test]
    fn test_new_form_is_empty_and_locked() {
        let form = FormState::new();
        assert!(form.is_empty());
        assert_eq!(form.id_field, IdFieldState::Locked);
    }

    #[test]
    fn test_locked_id_rejects_input() {
        let mut form = filled_form();
        assert!(!form.push_char(FormField::Id, '1'));
        assert!(!form.backspace(FormField::Id));
        assert_eq!(form.id, "7");
    }

    #[test]
    fn test_armed_id_accepts_digits_only() {
        let mut form = FormState::new();
        form.arm_search();
        assert!(form.push_char(FormField::Id, '4'));
        assert!(!form.push_char(FormField::Id, 'x'));
        assert!(!form.push_char(FormField::Id, '-'));
        assert!(form.push_char(FormField::Id, '2'));
        assert_eq!(form.id, "42");
    }

    #[test]
    fn test_id_input_bounded_by_max() {
        let mut form = FormState::new();
        form.arm_search();
        for c in "922337203685477580".chars() {
            assert!(form.push_char(FormField::Id, c));
        }
        assert!(!form.push_char(FormField::Id, '8'));
        assert!(form.push_char(FormField::Id, '7'));
        assert_eq!(form.loaded_id(), Ok(MAX_ENTITY_ID));
        assert!(!form.push_char(FormField::Id, '0'));
    }

    #[test]
    fn test_clear_resets_everything() {
        let mut form = filled_form();
        form.id_field = IdFieldState::SearchArmed;
        form.clear();
        assert!(form.is_empty());
        assert_eq!(form.id_field, IdFieldState::Locked);
    }

    #[test]
    fn test_arm_search_clears_and_unlocks() {
        let mut form = filled_form();
        form.arm_search();
        assert!(form.is_empty());
        assert!(form.is_id_editable());
    }

    #[test]
    fn test_populate_keeps_typed_id() {
        let mut form = FormState::new();
        form.arm_search();
        form.push_char(FormField::Id, '7');
        form.populate(&EntityRecord::new(7, "Acme", "Tools co."));
        assert_eq!(form.id, "7");
        assert_eq!(form.name, "Acme");
        assert_eq!(form.description, "Tools co.");
    }

    #[test]
    fn test_payload_requires_name_and_description() {
        let mut form = filled_form();
        form.name.clear();
        assert_eq!(form.payload(), Err(ValidationError::MissingFields));

        let form = filled_form();
        assert_eq!(
            form.payload(),
            Ok(EntityPayload::new("Acme", "Tools co."))
        );
    }

    #[test]
    fn test_loaded_id_requires_valid_id() {
        let mut form = filled_form();
        assert_eq!(form.loaded_id(), Ok(7));
        form.id.clear();
        assert_eq!(form.loaded_id(), Err(ValidationError::NoRecordLoaded));
    }

    #[test]
    fn test_description_accepts_newlines() {
        let mut form = FormState::new();
        form.push_char(FormField::Description, 'a');
        form.push_char(FormField::Description, '\n');
        form.push_char(FormField::Description, 'b');
        assert_eq!(form.value(FormField::Description), "a\nb");
    }
}
