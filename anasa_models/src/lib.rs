pub mod contact;
pub mod email_address;
mod macros;
pub mod newsletter;

use email_address::EmailAddress;
use macros::nutype_string;

nutype_string!(
    /// An email address exactly as it was submitted.
    ///
    /// Only non-emptiness is checked. Whether the value is actually deliverable
    /// is decided when an email is built for it, see [`Self::to_email_address`].
    UncheckedEmailAddress(validate(not_empty))
);

impl UncheckedEmailAddress {
    pub fn to_email_address(&self) -> Result<EmailAddress, lettre::address::AddressError> {
        self.as_str().parse()
    }

    pub fn as_str(&self) -> &str {
        self
    }
}
