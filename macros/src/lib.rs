//! Derive macros for the Flowstate state container
//!
//! This crate provides procedural macros to reduce boilerplate when defining
//! actions for a Flowstate store.
//!
//! # Available Macros
//!
//! - `#[derive(Action)]` - Implements `flowstate_core::action::Action` for an action enum
//!
//! # Example
//!
//! ```ignore
//! use flowstate_macros::Action;
//!
//! #[derive(Action, Clone, Debug)]
//! enum TodoAction {
//!     AddTodo { text: String },
//!     CompleteAll,
//!     #[action_type = "TOGGLE_TODO"]
//!     CompleteTodo { id: u64 },
//! }
//!
//! // Generated:
//! assert_eq!(TodoAction::CompleteAll.action_type(), "COMPLETE_ALL");
//! assert_eq!(TodoAction::CompleteTodo { id: 0 }.action_type(), "TOGGLE_TODO");
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

use flowstate_core::action::screaming_snake_case;
use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::{Attribute, Data, DeriveInput, Expr, ExprLit, Fields, Lit, Meta, parse_macro_input};

/// Derive macro for Action enums
///
/// Implements `flowstate_core::action::Action`, whose `action_type()` returns
/// a stable name for each variant:
///
/// - By default the variant name in `SCREAMING_SNAKE_CASE` (`AddTodo` → `"ADD_TODO"`)
/// - `#[action_type = "NAME"]` on a variant overrides the name
///
/// Also generates an inherent `ACTION_TYPES` constant listing every name in
/// declaration order.
///
/// # Errors
///
/// This macro produces a compile error (not a runtime panic) if:
/// - Applied to a non-enum type
/// - `#[action_type]` is not of the form `#[action_type = "NAME"]`
/// - Two variants resolve to the same type name
///
/// # Example
///
/// ```ignore
/// #[derive(Action, Clone, Debug)]
/// enum TodoAction {
///     AddTodo { text: String },
///     DeleteTodo { id: u64 },
///     ClearCompleted,
/// }
///
/// let action = TodoAction::DeleteTodo { id: 3 };
/// assert_eq!(action.action_type(), "DELETE_TODO");
/// assert_eq!(TodoAction::ACTION_TYPES, &["ADD_TODO", "DELETE_TODO", "CLEAR_COMPLETED"]);
/// ```
#[proc_macro_derive(Action, attributes(action_type))]
pub fn derive_action(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    expand_action(&input)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}

/// Builds the `Action` impl and `ACTION_TYPES` constant for an enum.
fn expand_action(input: &DeriveInput) -> syn::Result<TokenStream2> {
    let name = &input.ident;
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    let Data::Enum(data_enum) = &input.data else {
        return Err(syn::Error::new_spanned(
            input,
            "#[derive(Action)] can only be used on enums"
        ));
    };

    let mut arms: Vec<TokenStream2> = Vec::new();
    let mut type_names: Vec<String> = Vec::new();

    for variant in &data_enum.variants {
        let variant_name = &variant.ident;

        let type_name = action_type_override(&variant.attrs)?
            .unwrap_or_else(|| screaming_snake_case(&variant_name.to_string()));

        if type_names.contains(&type_name) {
            return Err(syn::Error::new_spanned(
                variant,
                format!("Duplicate action type name \"{type_name}\"")
            ));
        }

        let arm = match &variant.fields {
            Fields::Named(_) => quote! { Self::#variant_name { .. } => #type_name, },
            Fields::Unnamed(_) => quote! { Self::#variant_name(..) => #type_name, },
            Fields::Unit => quote! { Self::#variant_name => #type_name, },
        };

        arms.push(arm);
        type_names.push(type_name);
    }

    // An empty enum has no values, so the match needs no arms
    let body = if arms.is_empty() {
        quote! { match *self {} }
    } else {
        quote! {
            match self {
                #(#arms)*
            }
        }
    };

    Ok(quote! {
        impl #impl_generics ::flowstate_core::action::Action for #name #ty_generics #where_clause {
            fn action_type(&self) -> &'static str {
                #body
            }
        }

        impl #impl_generics #name #ty_generics #where_clause {
            /// Every action type name, in declaration order
            #[allow(dead_code)]
            pub const ACTION_TYPES: &'static [&'static str] = &[#(#type_names),*];
        }
    })
}

/// Reads an `#[action_type = "NAME"]` attribute, if present.
fn action_type_override(attrs: &[Attribute]) -> syn::Result<Option<String>> {
    let Some(attr) = attrs.iter().find(|attr| attr.path().is_ident("action_type")) else {
        return Ok(None);
    };

    if let Meta::NameValue(name_value) = &attr.meta {
        if let Expr::Lit(ExprLit { lit: Lit::Str(value), .. }) = &name_value.value {
            let value = value.value();
            if value.trim().is_empty() {
                return Err(syn::Error::new_spanned(attr, "Action type name cannot be empty"));
            }
            return Ok(Some(value));
        }
    }

    Err(syn::Error::new_spanned(
        attr,
        "Expected #[action_type = \"NAME\"]"
    ))
}
