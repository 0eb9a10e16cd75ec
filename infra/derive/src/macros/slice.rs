use proc_macro2::TokenStream;
use quote::{format_ident, quote};
use syn::ItemStruct;

/// Expands `#[ghub_slice]`.
///
/// The annotated struct's fields are moved into `<Name>Inner`; the original
/// name becomes an `Arc` handle over it. Handlers clone the handle freely and
/// reach the state through `Deref`; `into_slice()` boxes it for the kernel
/// registry.
pub fn expand_slice(input: ItemStruct) -> TokenStream {
    let ItemStruct { attrs, vis, ident: handle, fields, .. } = &input;
    let state = format_ident!("{handle}Inner");

    quote! {
        #(#attrs)*
        #[derive(Debug, Clone)]
        #vis struct #state #fields

        #[derive(Debug, Clone)]
        #vis struct #handle {
            state: std::sync::Arc<#state>,
        }

        impl #handle {
            pub fn new(state: #state) -> Self {
                Self { state: std::sync::Arc::new(state) }
            }

            /// Boxes the handle for registration in the kernel state.
            #[must_use]
            pub fn into_slice(self) -> ::ghub_kernel::domain::registry::InitializedSlice {
                ::ghub_kernel::domain::registry::InitializedSlice::new(self)
            }
        }

        impl std::ops::Deref for #handle {
            type Target = #state;

            fn deref(&self) -> &Self::Target {
                &self.state
            }
        }

        impl ::ghub_kernel::domain::registry::FeatureSlice for #handle {
            fn as_any(&self) -> &dyn std::any::Any {
                self
            }
        }
    }
}
