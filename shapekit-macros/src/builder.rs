use proc_macro2::TokenStream;
use quote::quote;
use syn::{Block, Expr, ExprIf, Stmt};

pub fn shape(input: TokenStream) -> TokenStream {
    expand(input, quote!(shapekit_core::builder::ShapeBuilder))
}

pub fn insettable_shape(input: TokenStream) -> TokenStream {
    expand(input, quote!(shapekit_core::builder::InsettableShapeBuilder))
}

fn expand(input: TokenStream, builder: TokenStream) -> TokenStream {
    let expr: Expr = match syn::parse2(input) {
        Ok(expr) => expr,
        Err(err) => return err.to_compile_error(),
    };

    match rewrite(&expr, &builder) {
        Ok(tokens) => tokens,
        Err(err) => err.to_compile_error(),
    }
}

/// Rewrite one branch expression into builder calls.
///
/// Conditionals are dispatched to [rewrite_if]; everything else is a leaf
/// shape expression and passes through `build_block`.
fn rewrite(expr: &Expr, builder: &TokenStream) -> syn::Result<TokenStream> {
    match expr {
        Expr::If(conditional) => rewrite_if(conditional, builder),
        Expr::Block(block) => rewrite_block(&block.block, builder),
        Expr::Match(_) => Err(syn::Error::new_spanned(
            expr,
            "`match` is not supported in a shape expression; compose with `if`/`else if`/`else` instead",
        )),
        leaf => Ok(quote! { #builder::build_block(#leaf) }),
    }
}

fn rewrite_if(conditional: &ExprIf, builder: &TokenStream) -> syn::Result<TokenStream> {
    let cond = &conditional.cond;
    let taken = rewrite_block(&conditional.then_branch, builder)?;

    match &conditional.else_branch {
        // Two branches: tag whichever one runs, so both arms share the
        // either type.
        Some((_, alternative)) => {
            let skipped = rewrite(alternative.as_ref(), builder)?;
            Ok(quote! {
                if #cond {
                    #builder::build_either_first(#taken)
                } else {
                    #builder::build_either_second(#skipped)
                }
            })
        }
        // No alternative: the untaken branch resolves to `EmptyShape`
        // inside `build_optional`.
        None => Ok(quote! {
            #builder::build_optional(if #cond {
                ::core::option::Option::Some(#taken)
            } else {
                ::core::option::Option::None
            })
        }),
    }
}

/// Rewrite a branch body, keeping any leading statements and treating the
/// trailing expression as the branch's shape value.
fn rewrite_block(block: &Block, builder: &TokenStream) -> syn::Result<TokenStream> {
    if let Some((Stmt::Expr(tail, None), rest)) = block.stmts.split_last() {
        let tail = rewrite(tail, builder)?;
        Ok(quote! { { #(#rest)* #tail } })
    } else {
        Err(syn::Error::new_spanned(
            block,
            "expected the branch to end with a shape expression",
        ))
    }
}
