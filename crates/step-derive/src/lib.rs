//! Procedural macros for consensus serialization of Step chain data.

use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::{Data, DeriveInput, Fields, parse_macro_input};

/// Derives `Encodable` by writing every field in declaration order.
///
/// The generated impl refers to `crate::consensus::Encodable` and
/// `crate::io`, so the deriving crate must expose both paths at its root.
/// Field types must themselves implement `Encodable`; nothing is written
/// between fields, which matches the wire layout of headers and
/// transactions.
///
/// # Example
///
/// ```ignore
/// use step_derive::ConsensusEncode;
///
/// #[derive(ConsensusEncode)]
/// struct Outline {
///     version: i32,
///     time: u32,
///     lock_time: u32,
/// }
/// ```
#[proc_macro_derive(ConsensusEncode)]
pub fn derive_consensus_encode(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    let name = &input.ident;
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    let fields = match &input.data {
        Data::Struct(data) => match &data.fields {
            Fields::Named(fields) => &fields.named,
            Fields::Unnamed(fields) => &fields.unnamed,
            Fields::Unit => {
                return syn::Error::new_spanned(
                    &input,
                    "ConsensusEncode cannot be derived for unit structs",
                )
                .to_compile_error()
                .into();
            }
        },
        Data::Enum(_) | Data::Union(_) => {
            return syn::Error::new_spanned(
                &input,
                "ConsensusEncode can only be derived for structs",
            )
            .to_compile_error()
            .into();
        }
    };

    let writes: Vec<TokenStream2> = fields
        .iter()
        .enumerate()
        .map(|(i, field)| {
            let access = match &field.ident {
                Some(ident) => quote! { self.#ident },
                None => {
                    let index = syn::Index::from(i);
                    quote! { self.#index }
                }
            };
            quote! {
                len = len.saturating_add(
                    crate::consensus::Encodable::consensus_encode(&#access, writer)?,
                );
            }
        })
        .collect();

    let expanded = quote! {
        impl #impl_generics crate::consensus::Encodable for #name #ty_generics #where_clause {
            #[inline]
            fn consensus_encode<W: crate::io::Write + ?Sized>(
                &self,
                writer: &mut W,
            ) -> core::result::Result<usize, crate::io::Error> {
                let mut len: usize = 0;
                #(#writes)*
                Ok(len)
            }
        }
    };

    TokenStream::from(expanded)
}
