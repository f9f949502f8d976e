use proc_macro::TokenStream;
use quote::quote;

#[proc_macro]
pub fn gen_model(input: TokenStream) -> TokenStream {
    let mut input = syn::parse_macro_input!(input as syn::ItemStruct);

    if !matches!(input.fields, syn::Fields::Named(_)) || input.fields.len() != 3 {
        return quote! {
            compile_error!("Models must have exactly 3 named fields, one for each component of the color.")
        }
        .into();
    }

    if !input.generics.params.is_empty() {
        return quote! {
            compile_error!("Models can not be generic.")
        }
        .into();
    }

    let field_names = input
        .fields
        .iter()
        .map(|f| f.ident.clone())
        .collect::<Vec<_>>();
    let field_types = input
        .fields
        .iter()
        .map(|f| f.ty.clone())
        .collect::<Vec<_>>();
    debug_assert!(field_names.len() == 3);

    let (field1, field2, field3) = (&field_names[0], &field_names[1], &field_names[2]);
    let (ty1, ty2, ty3) = (&field_types[0], &field_types[1], &field_types[2]);

    // Make sure the 3 specified fields are public.
    input.fields.iter_mut().for_each(|f| {
        f.vis = syn::Visibility::Public(Default::default());
    });

    input.attrs.push(syn::parse_quote! {
        #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    });

    let struct_name = input.ident.clone();

    let model_impl = quote! {
        impl #struct_name {
            /// Create a new model from its three components.
            pub const fn new(#field1: #ty1, #field2: #ty2, #field3: #ty3) -> Self {
                Self {
                    #field1,
                    #field2,
                    #field3,
                }
            }

            /// Return the three components as a tuple.
            pub const fn to_tuple(&self) -> (#ty1, #ty2, #ty3) {
                (self.#field1, self.#field2, self.#field3)
            }
        }

        impl From<(#ty1, #ty2, #ty3)> for #struct_name {
            fn from(value: (#ty1, #ty2, #ty3)) -> Self {
                Self::new(value.0, value.1, value.2)
            }
        }

        impl From<#struct_name> for (#ty1, #ty2, #ty3) {
            fn from(value: #struct_name) -> Self {
                value.to_tuple()
            }
        }
    };

    quote! {
        #input
        #model_impl
    }
    .into()
}
