//! Google Chat mention tokens.

use std::fmt;

/// A single mention in a Chat message
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mention {
    /// Everyone in the space
    Everyone,
    /// One user, by Chat user id
    User(String),
}

impl fmt::Display for Mention {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mention::Everyone => write!(f, "<users/all>"),
            Mention::User(id) => write!(f, "<users/{id}>"),
        }
    }
}

impl Mention {
    /// `all` in any case means everyone; anything else is a user id, case kept.
    pub fn from_token(token: &str) -> Self {
        if token.eq_ignore_ascii_case("all") {
            Mention::Everyone
        } else {
            Mention::User(token.to_string())
        }
    }
}

/// Split a comma-separated list into mentions, in input order.
///
/// Blank entries are skipped.
pub fn parse_mentions(list: &str) -> Vec<Mention> {
    list.split(',')
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .map(Mention::from_token)
        .collect()
}

/// Mention line for a list, `None` when it yields no mentions.
pub fn mention_text(list: Option<&str>) -> Option<String> {
    let mentions = parse_mentions(list?);
    if mentions.is_empty() {
        return None;
    }

    Some(
        mentions
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(" "),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mixed_list() {
        let mentions = parse_mentions("alice, BOB, all");
        assert_eq!(
            mentions,
            vec![
                Mention::User("alice".to_string()),
                Mention::User("BOB".to_string()),
                Mention::Everyone,
            ]
        );
        assert_eq!(
            mention_text(Some("alice, BOB, all")).as_deref(),
            Some("<users/alice> <users/BOB> <users/all>")
        );
    }

    #[test]
    fn test_all_is_case_insensitive() {
        assert_eq!(Mention::from_token("ALL"), Mention::Everyone);
        assert_eq!(Mention::from_token("All"), Mention::Everyone);
        assert_eq!(Mention::from_token("allison"), Mention::User("allison".to_string()));
    }

    #[test]
    fn test_numeric_user_ids() {
        assert_eq!(
            mention_text(Some("112233445566778899")).as_deref(),
            Some("<users/112233445566778899>")
        );
    }

    #[test]
    fn test_no_mentions() {
        assert_eq!(mention_text(None), None);
        assert_eq!(mention_text(Some("")), None);
        assert_eq!(mention_text(Some(" , ,")), None);
    }

    #[test]
    fn test_blank_entries_skipped() {
        assert_eq!(mention_text(Some("a,,b")).as_deref(), Some("<users/a> <users/b>"));
    }
}
