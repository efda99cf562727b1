//! Contact section: text fields, address lines and the opening-hours table.

use super::{EditorError, SectionEditor, slot, take};
use crate::content::{ContactContent, OpeningHours};

pub type ContactEditor = SectionEditor<ContactContent>;

field_enum! {
    ContactField {
        Title => "title",
        Description => "description",
        Email => "email",
        Phone => "phone",
    }
}

impl ContactEditor {
    pub fn update_field(&mut self, field: ContactField, value: impl Into<String>) -> Result<(), EditorError> {
        let value = value.into();
        self.edit(|contact| {
            let target = match field {
                ContactField::Title => &mut contact.title,
                ContactField::Description => &mut contact.description,
                ContactField::Email => &mut contact.email,
                ContactField::Phone => &mut contact.phone,
            };
            *target = value;
            Ok(())
        })
    }

    // ------------------------------------------------------------------------
    // Address
    // ------------------------------------------------------------------------

    /// Replace one address line.
    pub fn set_address_line(&mut self, index: usize, line: impl Into<String>) -> Result<(), EditorError> {
        let line = line.into();
        self.edit(|contact| {
            *slot(&mut contact.address, "address", index)? = line;
            Ok(())
        })
    }

    /// Replace all address lines.
    pub fn set_address(&mut self, lines: Vec<String>) -> Result<(), EditorError> {
        self.edit(|contact| {
            contact.address = lines;
            Ok(())
        })
    }

    // ------------------------------------------------------------------------
    // Opening hours
    // ------------------------------------------------------------------------

    /// Change the day label of a row. The row keeps its position.
    pub fn rename_day(&mut self, index: usize, day: impl Into<String>) -> Result<(), EditorError> {
        let day = day.into();
        self.edit(|contact| {
            slot(&mut contact.opening_hours, "openingHours", index)?.day = day;
            Ok(())
        })
    }

    pub fn set_hours(&mut self, index: usize, hours: impl Into<String>) -> Result<(), EditorError> {
        let hours = hours.into();
        self.edit(|contact| {
            slot(&mut contact.opening_hours, "openingHours", index)?.hours = hours;
            Ok(())
        })
    }

    /// Append a row and return its index.
    pub fn add_opening_hours(
        &mut self,
        day: impl Into<String>,
        hours: impl Into<String>,
    ) -> Result<usize, EditorError> {
        let row = OpeningHours::new(day, hours);
        self.edit(|contact| {
            contact.opening_hours.push(row);
            Ok(contact.opening_hours.len() - 1)
        })
    }

    pub fn remove_opening_hours(&mut self, index: usize) -> Result<OpeningHours, EditorError> {
        self.edit(|contact| take(&mut contact.opening_hours, "openingHours", index))
    }
}
