//! Fixed speech phrases and pluralization.

use crate::memos::MemoListing;

pub const CARD_TITLE: &str = "Memo";
pub const HELP: &str = "You can save memo and re listen to it";
pub const GOODBYE: &str = "Goodbye!";
pub const DELETION_DONE: &str = "Deletion completed";
pub const NO_MEMOS: &str = "You have no messages to listen to.";
pub const APOLOGY: &str = "Sorry, I can't understand the command. Please say again.";

/// "message" for exactly one, "messages" otherwise.
fn plural_suffix(count: usize) -> &'static str {
    if count == 1 {
        ""
    } else {
        "s"
    }
}

pub fn welcome(count: usize) -> String {
    if count == 0 {
        "Welcome to the Memo Skill, you have no messages!".to_string()
    } else {
        format!(
            "Welcome to the Memo Skill, you have {} message{}!",
            count,
            plural_suffix(count)
        )
    }
}

pub fn memo_created(text: &str) -> String {
    format!("Memo created: {}", text)
}

pub fn listing(listing: &MemoListing<'_>) -> String {
    match listing {
        MemoListing::Empty => NO_MEMOS.to_string(),
        MemoListing::Items(memos) => format!(
            "Here is your message{}: {}",
            plural_suffix(memos.len()),
            memos.join(", ")
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn welcome_is_singular_only_for_one_message() {
        assert_eq!(welcome(0), "Welcome to the Memo Skill, you have no messages!");
        assert_eq!(welcome(1), "Welcome to the Memo Skill, you have 1 message!");
        assert_eq!(welcome(2), "Welcome to the Memo Skill, you have 2 messages!");
    }

    #[test]
    fn listing_enumerates_in_order_with_plural_framing() {
        let memos = vec!["a".to_string(), "b".to_string()];
        assert_eq!(
            listing(&MemoListing::Items(&memos)),
            "Here is your messages: a, b"
        );
        let one = vec!["a".to_string()];
        assert_eq!(listing(&MemoListing::Items(&one)), "Here is your message: a");
    }

    #[test]
    fn empty_listing_has_its_own_phrase() {
        assert_eq!(listing(&MemoListing::Empty), NO_MEMOS);
    }
}
