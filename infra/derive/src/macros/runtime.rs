use proc_macro2::TokenStream;
use quote::quote;
use syn::{Error, ItemFn, ReturnType, Type};

/// Expands `#[ghub_runtime::main]`.
///
/// The async body is moved into a `block_on` call on a runtime built from
/// the named profile, so binaries never spell out Tokio builder plumbing.
#[must_use]
pub fn expand_main(args: TokenStream, input: ItemFn) -> TokenStream {
    if input.sig.asyncness.is_none() {
        return Error::new_spanned(&input.sig.ident, "#[ghub_runtime::main] needs an async fn")
            .to_compile_error();
    }
    if !returns_result(&input.sig.output) {
        return Error::new_spanned(
            &input.sig.output,
            "#[ghub_runtime::main] needs a Result return type so runtime build errors can propagate",
        )
        .to_compile_error();
    }

    let profile = match parse_profile(args) {
        Ok(profile) => profile,
        Err(err) => return err,
    };

    let ItemFn { attrs, vis, sig, block } = &input;
    let name = &sig.ident;
    let output = &sig.output;

    quote! {
        #(#attrs)*
        #vis fn #name() #output {
            ::ghub_runtime::RuntimeProfile::#profile()
                .build()?
                .block_on(async move #block)
        }
    }
}

/// Maps the attribute argument onto a `RuntimeProfile` constructor name.
fn parse_profile(args: TokenStream) -> Result<TokenStream, TokenStream> {
    if args.is_empty() {
        return Ok(quote! { default });
    }

    let ident: syn::Ident = syn::parse2(args).map_err(|err| err.to_compile_error())?;
    match ident.to_string().as_str() {
        "default" => Ok(quote! { default }),
        "high_performance" => Ok(quote! { high_performance }),
        _ => Err(Error::new_spanned(
            ident,
            "unknown runtime profile; expected `default` or `high_performance`",
        )
        .to_compile_error()),
    }
}

fn returns_result(output: &ReturnType) -> bool {
    match output {
        ReturnType::Default => false,
        ReturnType::Type(_, ty) => match &**ty {
            Type::Path(path) => {
                path.path.segments.last().is_some_and(|segment| segment.ident == "Result")
            }
            _ => false,
        },
    }
}
