use crate::{macros::nutype_string, UncheckedEmailAddress};

/// A message submitted through the contact form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactMessage {
    pub author: ContactMessageAuthor,
    pub subject: ContactMessageSubject,
    pub content: ContactMessageContent,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactMessageAuthor {
    pub name: ContactMessageAuthorName,
    pub email: UncheckedEmailAddress,
}

nutype_string!(ContactMessageAuthorName(validate(not_empty)));
nutype_string!(ContactMessageSubject(validate(not_empty)));
nutype_string!(ContactMessageContent(validate(not_empty)));

impl ContactMessageAuthorName {
    /// The first whitespace separated word of the name, used to address the
    /// author in replies.
    pub fn first_name(&self) -> &str {
        let name: &str = self;
        name.split_whitespace().next().unwrap_or(name)
    }
}
