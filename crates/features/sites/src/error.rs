use std::borrow::Cow;

/// A specialized [`SitesError`] enum of this crate.
#[ghub_derive::ghub_error]
pub enum SitesError {
    /// The configured site list cannot form a valid registry.
    #[error("Sites config error{}: {message}", fmt_context(.context))]
    Config { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}
