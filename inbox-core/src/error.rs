/// Errors produced by the `inbox-core` crate.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum CoreError {
    /// The `email` parameter was absent or empty.
    #[error("Email query parameter is required")]
    MissingEmail,

    /// The `email` parameter did not split into a local-part and a domain.
    #[error("Invalid email format")]
    InvalidEmailFormat,

    /// A paging parameter was not a positive integer.
    #[error("page and limit must be positive integers ({field}={value:?})")]
    InvalidPaging { field: &'static str, value: String },

    /// A listing body did not have the `{emails: [...]}` shape.
    #[error("malformed listing: {0}")]
    MalformedListing(String),
}
