//! Resolution notice sent to the inquirer when a contact is marked done.

use super::domain::Contact;
use crate::mail::OutgoingMail;

pub const RESOLVED_STATUS: &str = "done";
pub const SUBJECT: &str = "Query Status Response";

/// `true` when `status` is `done` in any letter casing.
pub fn is_resolved(status: Option<&str>) -> bool {
    status.is_some_and(|s| s.eq_ignore_ascii_case(RESOLVED_STATUS))
}

pub fn render_body(name: &str, event: &str, reply_note: &str) -> String {
    format!(
        "Thank you for reaching out to Cocoloco Garden, {name}.\n\n\
         This is regarding your query about: {event}\n\n\
         Response: {reply_note}\n\n\
         If you have any further questions, please contact the ABC Restaurant Front Desk.\n\n\
         ABC RESTAURANT\n\
         Telephone No: +94 77 782 8629"
    )
}

/// The message owed for `contact` in its current state, if any. Checked by
/// value on every update, not by tracking the previous status.
pub fn resolution_notice(contact: &Contact) -> Option<OutgoingMail> {
    if !is_resolved(contact.status.as_deref()) {
        return None;
    }
    Some(OutgoingMail {
        to: contact.email.clone().unwrap_or_default(),
        subject: SUBJECT.to_string(),
        body: render_body(
            contact.name.as_deref().unwrap_or_default(),
            contact.event.as_deref().unwrap_or_default(),
            contact.reply_note.as_deref().unwrap_or_default(),
        ),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    fn contact(status: Option<&str>) -> Contact {
        Contact {
            id: Uuid::new_v4(),
            name: Some("Kasun".into()),
            email: Some("kasun@example.com".into()),
            event: Some("Birthday dinner".into()),
            status: status.map(str::to_string),
            reply_note: Some("Table for 12 is reserved.".into()),
        }
    }

    #[test]
    fn done_matches_in_any_casing_only() {
        for s in ["done", "DONE", "Done", "dOnE"] {
            assert!(is_resolved(Some(s)), "{s}");
        }
        for s in ["pending", "done ", "undone", ""] {
            assert!(!is_resolved(Some(s)), "{s}");
        }
        assert!(!is_resolved(None));
    }

    #[test]
    fn body_matches_template_exactly() {
        let expected = "Thank you for reaching out to Cocoloco Garden, Kasun.\n\n\
This is regarding your query about: Birthday dinner\n\n\
Response: Table for 12 is reserved.\n\n\
If you have any further questions, please contact the ABC Restaurant Front Desk.\n\n\
ABC RESTAURANT\n\
Telephone No: +94 77 782 8629";
        assert_eq!(render_body("Kasun", "Birthday dinner", "Table for 12 is reserved."), expected);
    }

    #[test]
    fn notice_is_addressed_to_the_contact() {
        let mail = resolution_notice(&contact(Some("Done"))).expect("resolved contact");
        assert_eq!(mail.to, "kasun@example.com");
        assert_eq!(mail.subject, "Query Status Response");
        assert!(mail.body.contains("Response: Table for 12 is reserved."));
    }

    #[test]
    fn no_notice_for_open_contacts() {
        assert!(resolution_notice(&contact(Some("in progress"))).is_none());
        assert!(resolution_notice(&contact(None)).is_none());
    }

    #[test]
    fn missing_fields_render_empty() {
        let c = Contact { id: Uuid::new_v4(), name: None, email: None, event: None, status: Some("done".into()), reply_note: None };
        let mail = resolution_notice(&c).unwrap();
        assert_eq!(mail.to, "");
        assert!(mail.body.starts_with("Thank you for reaching out to Cocoloco Garden, .\n\n"));
    }
}
