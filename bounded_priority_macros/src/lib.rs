use proc_macro2::TokenStream;
use quote::quote;
use syn::{parse_macro_input, parse_quote, Attribute, Data, DeriveInput, Index, Member, Meta, Type};

/// The field a derived `Sortable` impl delegates its comparison to.
struct SortKey {
    member: Member,
    ty: Type,
    reverse: bool,
}

impl SortKey {
    /// Find the single field marked with `#[sortable]`.
    fn from_input(input: &DeriveInput) -> syn::Result<Self> {
        let fields = match &input.data {
            Data::Struct(data) => &data.fields,
            Data::Enum(data) => {
                return Err(syn::Error::new_spanned(
                    data.enum_token,
                    "`Sortable` can only be derived for structs",
                ))
            }
            Data::Union(data) => {
                return Err(syn::Error::new_spanned(
                    data.union_token,
                    "`Sortable` can only be derived for structs",
                ))
            }
        };

        let mut key: Option<SortKey> = None;
        for (i, field) in fields.iter().enumerate() {
            for attr in field.attrs.iter().filter(|a| a.path().is_ident("sortable")) {
                let reverse = parse_reverse(attr)?;
                if key.is_some() {
                    return Err(syn::Error::new_spanned(
                        attr,
                        "only one field may be marked `#[sortable]`",
                    ));
                }
                let member = match &field.ident {
                    Some(ident) => Member::Named(ident.clone()),
                    None => Member::Unnamed(Index::from(i)),
                };
                key = Some(SortKey {
                    member,
                    ty: field.ty.clone(),
                    reverse,
                });
            }
        }

        key.ok_or_else(|| {
            syn::Error::new_spanned(
                &input.ident,
                "mark the field to compare by with `#[sortable]` or `#[sortable(reverse)]`",
            )
        })
    }

    fn generate(&self, input: &DeriveInput) -> TokenStream {
        let name = &input.ident;
        let member = &self.member;
        let ty = &self.ty;

        // The key's type may mention type parameters, so require its impl explicitly.
        let mut generics = input.generics.clone();
        generics
            .make_where_clause()
            .predicates
            .push(parse_quote!(#ty: ::bounded_priority::Sortable));
        let (impl_generics, ty_generics, where_clause) = generics.split_for_impl();

        let compare = quote! {
            ::bounded_priority::Sortable::compare(&self.#member, &other.#member)
        };
        let body = if self.reverse {
            quote! { #compare.reverse() }
        } else {
            compare
        };

        quote! {
            impl #impl_generics ::bounded_priority::Sortable for #name #ty_generics #where_clause {
                fn compare(&self, other: &Self) -> ::core::cmp::Ordering {
                    #body
                }
            }
        }
    }
}

/// Parse `#[sortable]` (ascending) or `#[sortable(reverse)]`.
fn parse_reverse(attr: &Attribute) -> syn::Result<bool> {
    match &attr.meta {
        Meta::Path(_) => Ok(false),
        Meta::List(_) => {
            let mut reverse = false;
            attr.parse_nested_meta(|meta| {
                if meta.path.is_ident("reverse") {
                    reverse = true;
                    Ok(())
                } else {
                    Err(meta.error("expected `reverse`"))
                }
            })?;
            Ok(reverse)
        }
        Meta::NameValue(nv) => Err(syn::Error::new_spanned(
            nv,
            "expected `#[sortable]` or `#[sortable(reverse)]`",
        )),
    }
}

/// Derive `bounded_priority::Sortable` by delegating to one field.
///
/// Example:
///
/// ```rust,ignore
/// #[derive(Sortable)]
/// struct Job {
///     name: String,
///     #[sortable]
///     urgency: u32,
/// }
///
/// #[derive(Sortable)]
/// struct Deadline(#[sortable(reverse)] u64);
/// ```
///
/// Exactly one field must carry the attribute. With `reverse`, a smaller key ranks higher.
#[proc_macro_derive(Sortable, attributes(sortable))]
pub fn derive_sortable(input: proc_macro::TokenStream) -> proc_macro::TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    SortKey::from_input(&input)
        .map(|key| key.generate(&input))
        .unwrap_or_else(|e| e.into_compile_error())
        .into()
}
