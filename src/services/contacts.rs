use crate::domain::models::{Contact, ContactBook, OutboundIntent};
use crate::services::storage::now_millis;

#[derive(thiserror::Error, Debug)]
pub enum ContactError {
    #[error("name and phone are required")]
    MissingFields,
}

/// Timestamp-derived id, bumped until unique within the book.
pub fn fresh_contact_id(book: &ContactBook) -> String {
    let mut id = now_millis();
    while book.contacts.iter().any(|c| c.id == id.to_string()) {
        id += 1;
    }
    id.to_string()
}

pub fn add_contact(
    book: &mut ContactBook,
    name: &str,
    relation: &str,
    phone: &str,
    is_emergency: bool,
) -> Result<Contact, ContactError> {
    if name.trim().is_empty() || phone.trim().is_empty() {
        return Err(ContactError::MissingFields);
    }
    let entry = Contact {
        id: fresh_contact_id(book),
        name: name.to_string(),
        relation: relation.to_string(),
        phone: phone.to_string(),
        is_emergency,
    };
    book.contacts.push(entry.clone());
    Ok(entry)
}

/// Returns how many entries were removed (0 for an unknown id).
pub fn remove_contact(book: &mut ContactBook, id: &str) -> usize {
    let before = book.contacts.len();
    book.contacts.retain(|c| c.id != id);
    before.saturating_sub(book.contacts.len())
}

pub fn toggle_emergency<'a>(book: &'a mut ContactBook, id: &str) -> Option<&'a Contact> {
    let contact = book.contacts.iter_mut().find(|c| c.id == id)?;
    contact.is_emergency = !contact.is_emergency;
    Some(contact)
}

pub fn find<'a>(book: &'a ContactBook, id: &str) -> Option<&'a Contact> {
    book.contacts.iter().find(|c| c.id == id)
}

pub fn call_intent(contact: &Contact) -> OutboundIntent {
    intent(contact, "tel")
}

pub fn message_intent(contact: &Contact) -> OutboundIntent {
    intent(contact, "sms")
}

fn intent(contact: &Contact, scheme: &str) -> OutboundIntent {
    OutboundIntent {
        id: contact.id.clone(),
        name: contact.name.clone(),
        phone: contact.phone.clone(),
        uri: format!("{}:{}", scheme, contact.phone),
    }
}
