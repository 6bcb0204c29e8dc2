//! Fuzz target: `MailboxQuery::parse` over arbitrary parameter strings.
//!
//! Accepted queries must always have non-empty, `@`-free address parts and
//! positive paging.

#![no_main]

use inbox_core::MailboxQuery;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|input: (&str, Option<&str>, Option<&str>)| {
    let (email, page, limit) = input;
    if let Ok(q) = MailboxQuery::parse(Some(email), page, limit) {
        assert!(!q.local_part.is_empty() && !q.domain.is_empty());
        assert!(!q.local_part.contains('@') && !q.domain.contains('@'));
        assert!(q.page > 0 && q.limit > 0);
        assert_eq!(q.address(), email);
    }
});
