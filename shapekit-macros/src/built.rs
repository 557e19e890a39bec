use proc_macro2::TokenStream;
use quote::quote;
use syn::ItemImpl;

pub fn built_shape(attr: TokenStream, item: TokenStream) -> TokenStream {
    expand(attr, item, false)
}

pub fn built_insettable_shape(attr: TokenStream, item: TokenStream) -> TokenStream {
    expand(attr, item, true)
}

fn expand(attr: TokenStream, item: TokenStream, insettable: bool) -> TokenStream {
    if !attr.is_empty() {
        return syn::Error::new_spanned(attr, "this attribute takes no arguments")
            .to_compile_error();
    }

    let input: ItemImpl = match syn::parse2(item) {
        Ok(input) => input,
        Err(err) => return err.to_compile_error(),
    };

    let is_built_shape_impl = input
        .trait_
        .as_ref()
        .and_then(|(_, path, _)| path.segments.last())
        .is_some_and(|segment| segment.ident == "BuiltShape");
    if !is_built_shape_impl {
        return syn::Error::new_spanned(
            &input.self_ty,
            "expected an `impl BuiltShape for …` block",
        )
        .to_compile_error();
    }

    let (impl_generics, _, where_clause) = input.generics.split_for_impl();
    let self_ty = &input.self_ty;

    let mut output = quote! { #input };

    output.extend(quote! {
        impl #impl_generics shapekit_core::shape::Shape for #self_ty #where_clause {
            fn path(
                &self,
                rect: shapekit_core::vg::kurbo::Rect,
            ) -> shapekit_core::vg::kurbo::BezPath {
                shapekit_core::shape::Shape::path(
                    &shapekit_core::built::BuiltShape::shape(self),
                    rect,
                )
            }
        }
    });

    if insettable {
        output.extend(quote! {
            impl #impl_generics shapekit_core::shape::InsettableShape for #self_ty #where_clause {
                type Inset = <<Self as shapekit_core::built::BuiltShape>::S
                    as shapekit_core::shape::InsettableShape>::Inset;

                fn inset(&self, amount: f64) -> Self::Inset {
                    shapekit_core::shape::InsettableShape::inset(
                        &shapekit_core::built::BuiltShape::shape(self),
                        amount,
                    )
                }
            }
        });
    }

    output
}
