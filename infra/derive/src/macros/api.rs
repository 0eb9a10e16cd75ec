use proc_macro2::TokenStream;
use quote::quote;
use syn::ItemFn;

/// Expands `#[api_handler]`.
///
/// The handler itself is passed through untouched; the arguments become a
/// `utoipa::path` attribute gated on the consuming crate's `server` feature,
/// so documentation metadata compiles only where the `OpenAPI` surface does.
pub fn expand_api_handler(args: TokenStream, input: ItemFn) -> TokenStream {
    let ItemFn { attrs, vis, sig, block } = &input;

    quote! {
        #(#attrs)*
        #[allow(clippy::unused_async)]
        #[cfg_attr(feature = "server", ::utoipa::path(#args))]
        #vis #sig #block
    }
}
