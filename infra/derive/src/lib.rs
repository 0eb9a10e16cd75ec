#![allow(unreachable_pub)]
#![allow(clippy::needless_pass_by_value)]

//! # Macros
//!
//! Attribute macros for the platform's infrastructure glue: context-carrying
//! error enums, `OpenAPI`-documented handlers, `Arc`-backed feature slices,
//! and the profiled runtime entry point.
//!
//! Doc examples are `ignore`d so they do not compile inside this proc-macro
//! crate; the consuming crates show live usage.

mod macros;

use proc_macro::TokenStream;
use syn::{DeriveInput, ItemFn, ItemStruct, parse_macro_input};

/// Turns an `async fn main` into a sync `main` that runs on a profiled
/// Tokio runtime.
///
/// Takes the profile name as its only argument: `default` (auto-detected
/// worker count) or `high_performance` (long-running server preset). The
/// annotated function must be async and return a `Result`.
///
/// ```rust,ignore
/// #[ghub_runtime::main(high_performance)]
/// async fn main() -> anyhow::Result<()> {
///     Ok(())
/// }
/// ```
#[proc_macro_attribute]
pub fn main(args: TokenStream, item: TokenStream) -> TokenStream {
    let input = parse_macro_input!(item as ItemFn);
    macros::runtime::expand_main(args.into(), input).into()
}

/// Bridges an Axum handler with its `utoipa::path` documentation.
///
/// All arguments are forwarded to `utoipa::path` (method, `path = "..."`,
/// `responses(...)`, `tag = ...`); the path attribute is applied only when
/// the consuming crate's `server` feature is on. The macro also silences
/// `clippy::unused_async`, since some Axum extractor combinations force an
/// async signature onto otherwise synchronous handlers.
///
/// ```rust,ignore
/// #[api_handler(
///     get,
///     path = "/health",
///     responses((status = OK, body = Health)),
///     tag = "System"
/// )]
/// async fn health_handler() -> impl IntoResponse { /* ... */ }
/// ```
#[proc_macro_attribute]
pub fn api_handler(args: TokenStream, item: TokenStream) -> TokenStream {
    let input = parse_macro_input!(item as ItemFn);
    macros::api::expand_api_handler(args.into(), input).into()
}

/// Expands an enum into a fully wired error type.
///
/// Injects `#[derive(Debug, thiserror::Error)]` (unless already derived) and
/// generates:
///
/// * a `<Name>Ext` trait adding `.context(...)` to `Result<_, <Name>>` and to
///   `Result<_, Source>` for every variant wrapping a source error;
/// * `From<Source>` impls for those variants, so `?` works on upstream errors;
/// * `From<&'static str>` / `From<String>` when an `Internal` variant exists;
/// * a module-level `fmt_context` helper for `#[error(...)]` format strings.
///
/// Variants must use named fields, and any variant wrapping a source must
/// also carry `context: Option<Cow<'static, str>>`; tuple and unit variants
/// are rejected to keep error wiring explicit.
///
/// ```rust,ignore
/// #[ghub_error]
/// pub enum RegistryError {
///     #[error("IO error{}: {source}", fmt_context(.context))]
///     Io {
///         #[source]
///         source: std::io::Error,
///         context: Option<Cow<'static, str>>,
///     },
/// }
///
/// fn load() -> Result<String, RegistryError> {
///     std::fs::read_to_string("sites.toml").context("Reading site manifest")
/// }
/// ```
#[proc_macro_attribute]
pub fn ghub_error(_args: TokenStream, item: TokenStream) -> TokenStream {
    let input = parse_macro_input!(item as DeriveInput);
    macros::error::expand_derive(input).into()
}

/// Wraps a struct into an `Arc`-backed feature slice handle.
///
/// The annotated struct's fields move into a generated `<Name>Inner`; the
/// original name becomes a cheaply clonable wrapper with `Deref` access to
/// the inner state, a `FeatureSlice` impl for the kernel registry, and an
/// `into_slice()` method for registration at startup.
///
/// ```rust,ignore
/// #[ghub_derive::ghub_slice]
/// pub struct Sites {
///     pub registry: SiteRegistry,
/// }
///
/// fn init(registry: SiteRegistry) -> InitializedSlice {
///     Sites::new(SitesInner { registry }).into_slice()
/// }
/// ```
#[proc_macro_attribute]
pub fn ghub_slice(_attr: TokenStream, item: TokenStream) -> TokenStream {
    let input = parse_macro_input!(item as ItemStruct);
    macros::slice::expand_slice(input).into()
}
