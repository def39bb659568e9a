//! Booking confirmation message
//!
//! Nothing is sent over the network. The message is rendered, logged and
//! handed back to the caller to display.

use std::fmt;

use booking_model::BookingRecord;
use serde::Serialize;

/// Sender address on every confirmation
pub const CONFIRMATION_SENDER: &str = "noreply@luxuryapp.com";

/// Shown after a booking is stored
pub const BOOKING_SUCCESS: &str = "Booking successful! A confirmation email has been sent.";

/// Confirmation email for one stored booking
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Confirmation {
    /// Sender
    pub from: String,
    /// Recipient, the booking's email
    pub to: String,
    /// Subject line
    pub subject: String,
    /// Plain-text body
    pub body: String,
}

impl Confirmation {
    /// Build the confirmation for `record`
    #[must_use]
    pub fn for_booking(record: &BookingRecord) -> Self {
        let body = format!(
            "Dear {user},\n\n\
             Your booking at {shop} is confirmed.\n\n\
             Time: {time}\n\
             Location: {location}\n\
             Phone: {phone}\n\n\
             We look forward to welcoming you.",
            user = record.user_name,
            shop = record.shop_name,
            time = record.booking_time,
            location = record.location,
            phone = record.phone,
        );

        Self {
            from: CONFIRMATION_SENDER.to_string(),
            to: record.email.clone(),
            subject: format!("Booking Confirmation for {}", record.shop_name),
            body,
        }
    }

    /// Status line once the confirmation has been delivered
    #[inline]
    #[must_use]
    pub fn sent_message(&self) -> String {
        format!("Confirmation email sent to {}.", self.to)
    }
}

impl fmt::Display for Confirmation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "From: {}", self.from)?;
        writeln!(f, "To: {}", self.to)?;
        writeln!(f, "Subject: {}", self.subject)?;
        writeln!(f)?;
        write!(f, "{}", self.body)
    }
}
