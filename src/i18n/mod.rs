//! Localisable user-facing strings.
//!
//! Every user-facing string is a [`Message`] variant carrying exactly the
//! interpolation parameters it needs, so a catalogue can never be called with
//! a missing or misspelt parameter. [`EnglishCatalog`] is the default
//! catalogue; other locales implement [`Catalog`].

mod relative_time;

pub use relative_time::relative_time;

/// A user-facing message key with its required interpolation parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    /// Byline under a top-level review: "by {author}, {relative_time}".
    BylineByAuthor {
        /// Display name of the review author.
        author: String,
        /// Pre-formatted relative time of posting.
        relative_time: String,
    },
    /// Byline under a developer reply: "posted {relative_time}".
    BylinePosted {
        /// Pre-formatted relative time of posting.
        relative_time: String,
    },
    /// Headline shown above a developer reply block.
    DeveloperResponse,
    /// Label of the edit affordance.
    EditAction,
    /// Label of the begin-reply affordance.
    ReplyAction,
    /// Composer submit label when no reply exists yet.
    PublishReply,
    /// Composer progress label while publishing a first reply.
    PublishingReply,
    /// Composer submit label when updating an existing reply.
    UpdateReply,
    /// Composer progress label while updating an existing reply.
    UpdatingReply,
    /// Shown when the listing holds no reviews.
    NoReviews,
    /// Rating summary, e.g. "rated 4 out of 5".
    RatedOutOfFive {
        /// Star count, 1..=5.
        stars: u8,
    },
}

/// Supplies locale text for [`Message`] values.
pub trait Catalog: Send + Sync + std::fmt::Debug {
    /// Renders `message` in this catalogue's locale.
    fn text(&self, message: &Message) -> String;
}

/// Built-in English catalogue.
#[derive(Debug, Default, Clone, Copy)]
pub struct EnglishCatalog;

impl Catalog for EnglishCatalog {
    fn text(&self, message: &Message) -> String {
        match message {
            Message::BylineByAuthor {
                author,
                relative_time,
            } => format!("by {author}, {relative_time}"),
            Message::BylinePosted { relative_time } => format!("posted {relative_time}"),
            Message::DeveloperResponse => "Developer response".to_owned(),
            Message::EditAction => "Edit".to_owned(),
            Message::ReplyAction => "Reply to this review".to_owned(),
            Message::PublishReply => "Publish reply".to_owned(),
            Message::PublishingReply => "Publishing reply…".to_owned(),
            Message::UpdateReply => "Update reply".to_owned(),
            Message::UpdatingReply => "Updating reply…".to_owned(),
            Message::NoReviews => "No reviews yet.".to_owned(),
            Message::RatedOutOfFive { stars } => format!("rated {stars} out of 5"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{Catalog, EnglishCatalog, Message};

    #[test]
    fn byline_interpolates_author_and_time() {
        let text = EnglishCatalog.text(&Message::BylineByAuthor {
            author: "carla".to_owned(),
            relative_time: "3 days ago".to_owned(),
        });

        assert_eq!(text, "by carla, 3 days ago");
    }

    #[test]
    fn reply_byline_omits_the_author() {
        let text = EnglishCatalog.text(&Message::BylinePosted {
            relative_time: "moments ago".to_owned(),
        });

        assert_eq!(text, "posted moments ago");
    }
}
