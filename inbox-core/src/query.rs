//! Mailbox query parsing and validation.

use std::fmt;

use serde::Serialize;

use crate::CoreError;

/// Page requested when the caller omits `page`.
pub const DEFAULT_PAGE: u32 = 1;

/// Page size requested when the caller omits `limit`.
pub const DEFAULT_LIMIT: u32 = 10;

/// A validated request for one page of a Tinyhost mailbox.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[non_exhaustive]
pub struct MailboxQuery {
    /// Portion of the address before `@`.
    pub local_part: String,
    /// Portion of the address after `@`.
    pub domain: String,
    /// 1-based page number.
    pub page: u32,
    /// Maximum number of messages on the page.
    pub limit: u32,
}

impl MailboxQuery {
    /// Validate raw query parameters.
    ///
    /// # Errors
    /// Returns [`CoreError::MissingEmail`] for an absent or empty address,
    /// [`CoreError::InvalidEmailFormat`] unless the address contains exactly
    /// one `@` with text on both sides (neither side may be `.` or `..`), and [`CoreError::InvalidPaging`] if
    /// `page` or `limit` is present but not a positive integer.
    pub fn parse(
        email: Option<&str>,
        page: Option<&str>,
        limit: Option<&str>,
    ) -> Result<Self, CoreError> {
        let email = email.filter(|e| !e.is_empty()).ok_or(CoreError::MissingEmail)?;
        let (local_part, domain) = split_address(email)?;

        Ok(Self {
            local_part: local_part.to_owned(),
            domain: domain.to_owned(),
            page: parse_positive("page", page, DEFAULT_PAGE)?,
            limit: parse_positive("limit", limit, DEFAULT_LIMIT)?,
        })
    }

    /// Build a query for an address with explicit paging.
    ///
    /// # Errors
    /// Same address rules as [`MailboxQuery::parse`]; zero `page` or `limit`
    /// is rejected with [`CoreError::InvalidPaging`].
    pub fn new(email: &str, page: u32, limit: u32) -> Result<Self, CoreError> {
        Self::parse(Some(email), Some(&page.to_string()), Some(&limit.to_string()))
    }

    /// The full address this query targets.
    #[must_use]
    pub fn address(&self) -> String {
        format!("{}@{}", self.local_part, self.domain)
    }
}

impl fmt::Display for MailboxQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}@{} (page {}, limit {})",
            self.local_part, self.domain, self.page, self.limit
        )
    }
}

/// Both parts become URL path segments upstream, where `.` and `..` would be
/// resolved away and shift the other part into the wrong slot.
fn usable_part(part: &str) -> bool {
    !part.is_empty() && part != "." && part != ".."
}

fn split_address(email: &str) -> Result<(&str, &str), CoreError> {
    match email.split_once('@') {
        Some((local, domain))
            if usable_part(local) && usable_part(domain) && !domain.contains('@') =>
        {
            Ok((local, domain))
        }
        _ => Err(CoreError::InvalidEmailFormat),
    }
}

fn parse_positive(field: &'static str, raw: Option<&str>, default: u32) -> Result<u32, CoreError> {
    let Some(raw) = raw else {
        return Ok(default);
    };
    match raw.trim().parse::<u32>() {
        Ok(n) if n > 0 => Ok(n),
        _ => Err(CoreError::InvalidPaging { field, value: raw.to_owned() }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn parse_splits_address_and_applies_defaults() {
        let q = match MailboxQuery::parse(Some("alice@tinyhost.shop"), None, None) {
            Ok(q) => q,
            Err(e) => panic!("unexpected error: {e}"),
        };
        assert_eq!(q.local_part, "alice");
        assert_eq!(q.domain, "tinyhost.shop");
        assert_eq!(q.page, DEFAULT_PAGE);
        assert_eq!(q.limit, DEFAULT_LIMIT);
        assert_eq!(q.address(), "alice@tinyhost.shop");
    }

    #[test]
    fn parse_missing_and_empty_email_are_distinct_from_bad_format() {
        assert_eq!(MailboxQuery::parse(None, None, None), Err(CoreError::MissingEmail));
        assert_eq!(MailboxQuery::parse(Some(""), None, None), Err(CoreError::MissingEmail));
        assert_eq!(
            MailboxQuery::parse(Some("no-at-sign"), None, None),
            Err(CoreError::InvalidEmailFormat)
        );
    }

    #[test]
    fn parse_rejects_empty_segments_and_double_at() {
        for bad in ["@domain.com", "user@", "@", "a@b@c"] {
            assert_eq!(
                MailboxQuery::parse(Some(bad), None, None),
                Err(CoreError::InvalidEmailFormat),
                "{bad:?} should be rejected"
            );
        }
    }

    #[test]
    fn parse_rejects_dot_only_parts() {
        for bad in ["u@.", "u@..", ".@tinyhost.shop", "..@tinyhost.shop"] {
            assert_eq!(
                MailboxQuery::parse(Some(bad), None, None),
                Err(CoreError::InvalidEmailFormat),
                "{bad:?} should be rejected"
            );
        }
        assert!(MailboxQuery::parse(Some("first.last@mail.example"), None, None).is_ok());
        assert!(MailboxQuery::parse(Some("...@x"), None, None).is_ok());
    }

    #[test]
    fn parse_paging_accepts_positive_and_rejects_the_rest() {
        let q = match MailboxQuery::parse(Some("a@b"), Some("3"), Some("20")) {
            Ok(q) => q,
            Err(e) => panic!("unexpected error: {e}"),
        };
        assert_eq!((q.page, q.limit), (3, 20));

        for (page, limit) in [(Some("0"), None), (None, Some("-5")), (Some("two"), None)] {
            assert!(
                matches!(
                    MailboxQuery::parse(Some("a@b"), page, limit),
                    Err(CoreError::InvalidPaging { .. })
                ),
                "page={page:?} limit={limit:?} should be rejected"
            );
        }
    }

    #[test]
    fn invalid_paging_reports_offending_field() {
        match MailboxQuery::parse(Some("a@b"), None, Some("0")) {
            Err(err @ CoreError::InvalidPaging { .. }) => {
                assert_eq!(
                    err.to_string(),
                    "page and limit must be positive integers (limit=\"0\")"
                );
            }
            other => panic!("expected InvalidPaging, got {other:?}"),
        }
    }

    #[test]
    fn display_includes_paging() {
        let q = match MailboxQuery::new("bob@example.org", 2, 5) {
            Ok(q) => q,
            Err(e) => panic!("unexpected error: {e}"),
        };
        assert_eq!(q.to_string(), "bob@example.org (page 2, limit 5)");
    }

    proptest! {
        #[test]
        fn strings_without_at_are_never_valid(s in "[^@]+") {
            prop_assert_eq!(
                MailboxQuery::parse(Some(&s), None, None),
                Err(CoreError::InvalidEmailFormat)
            );
        }

        #[test]
        fn empty_side_of_at_is_never_valid(s in "[^@]*") {
            let at_first = format!("@{s}");
            let at_last = format!("{s}@");
            let leading = MailboxQuery::parse(Some(&at_first), None, None);
            let trailing = MailboxQuery::parse(Some(&at_last), None, None);
            prop_assert!(leading.is_err());
            prop_assert!(trailing.is_err());
        }

        #[test]
        fn well_formed_addresses_round_trip(
            local in "[a-z0-9][a-z0-9.]{0,15}",
            domain in "[a-z0-9][a-z0-9.-]{0,23}",
        ) {
            let email = format!("{local}@{domain}");
            let q = MailboxQuery::parse(Some(&email), None, None);
            prop_assert!(q.is_ok());
            if let Ok(q) = q {
                prop_assert_eq!(q.address(), email);
            }
        }
    }
}
