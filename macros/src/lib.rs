use proc_macro::TokenStream;
use proc_macro2::Span;
use quote::quote;
use syn::parse::Parser;

/// Generate a color model from a struct with one field per color channel.
///
/// Models with 3 channels additionally convert to and from
/// `crate::color::Components`. Device CMYK is the only model with 4.
#[proc_macro]
pub fn gen_model(input: TokenStream) -> TokenStream {
    let mut input = syn::parse_macro_input!(input as syn::ItemStruct);

    let channel_count = input.fields.len();
    if channel_count != 3 && channel_count != 4 {
        return quote! {
            compile_error!("Models must have 3 or 4 fields, one for each channel of the color.")
        }
        .into();
    }

    let field_names = input
        .fields
        .iter()
        .filter_map(|f| f.ident.clone())
        .collect::<Vec<_>>();
    if field_names.len() != channel_count {
        return quote! {
            compile_error!("Model channels must be named fields.")
        }
        .into();
    }

    // Make sure the channel fields are public.
    input.fields.iter_mut().for_each(|f| {
        f.vis = syn::Visibility::Public(Default::default());
    });

    let attr = syn::Attribute::parse_outer
        .parse2(syn::parse_quote! {
            #[derive(Clone, Copy, Debug, PartialEq)]
        })
        .unwrap();
    input.attrs.extend(attr);

    let mut phantom_fields: Vec<syn::Ident> = vec![];

    if let syn::Fields::Named(ref mut named) = input.fields {
        let type_params = input
            .generics
            .params
            .iter()
            .filter_map(|g| match g {
                syn::GenericParam::Type(type_param) => Some(type_param.ident.clone()),
                _ => None,
            })
            .collect::<Vec<_>>();

        for ident in type_params {
            let field_name = format!("_{}", ident.to_string().to_lowercase());
            let field_name = syn::Ident::new(field_name.as_str(), Span::call_site());
            phantom_fields.push(field_name.clone());

            named.named.push(
                syn::Field::parse_named
                    .parse2(syn::parse_quote! {
                        #field_name: std::marker::PhantomData<#ident>
                    })
                    .unwrap(),
            );
        }
    }

    let struct_name = input.ident.clone();
    let (impl_gen, type_gen, where_clause) = input.generics.split_for_impl();
    let indices = (0..channel_count).map(syn::Index::from).collect::<Vec<_>>();

    let new_impl = quote! {
        impl #impl_gen #struct_name #type_gen #where_clause {
            /// Create a new color in this model.
            pub fn new(#(#field_names: crate::color::Component),*) -> Self {
                Self {
                    #(#field_names,)*
                    #(#phantom_fields: std::marker::PhantomData,)*
                }
            }

            /// Return the channels of this model in declaration order.
            pub fn channels(&self) -> [crate::color::Component; #channel_count] {
                [#(self.#field_names),*]
            }
        }

        impl #impl_gen From<[crate::color::Component; #channel_count]> for #struct_name #type_gen #where_clause {
            fn from(value: [crate::color::Component; #channel_count]) -> Self {
                Self::new(#(value[#indices]),*)
            }
        }
    };

    let components_impl = if channel_count == 3 {
        let (f0, f1, f2) = (&field_names[0], &field_names[1], &field_names[2]);
        quote! {
            impl #impl_gen #struct_name #type_gen #where_clause {
                /// Convert this model into generic components.
                pub fn to_components(&self) -> crate::color::Components {
                    crate::color::Components(self.#f0, self.#f1, self.#f2)
                }
            }

            impl #impl_gen From<crate::color::Components> for #struct_name #type_gen #where_clause {
                fn from(value: crate::color::Components) -> Self {
                    Self::new(value.0, value.1, value.2)
                }
            }
        }
    } else {
        quote! {}
    };

    quote! {
        #input
        #new_impl
        #components_impl
    }
    .into()
}
