//! Procedural macros for the aoc-solver library

use proc_macro::TokenStream;
use quote::quote;
use syn::{parse_macro_input, Attribute, DeriveInput, Lit, LitInt};

/// Derive the `Solver` trait by dispatching to `PartSolver<N>` impls.
///
/// # Attributes
///
/// - `#[aoc_solver(max_parts = N)]`: Required. Parts `1..=N` must each have a
///   `PartSolver<k>` impl; any other part yields `SolveError::PartOutOfRange`.
///
/// # Example
///
/// ```ignore
/// #[derive(AocSolver)]
/// #[aoc_solver(max_parts = 2)]
/// pub struct Solver;
///
/// impl AocParser for Solver { /* ... */ }
/// impl PartSolver<1> for Solver { /* ... */ }
/// impl PartSolver<2> for Solver { /* ... */ }
/// ```
#[proc_macro_derive(AocSolver, attributes(aoc_solver))]
pub fn derive_aoc_solver(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    expand_aoc_solver(&input)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}

fn expand_aoc_solver(input: &DeriveInput) -> syn::Result<proc_macro2::TokenStream> {
    let name = &input.ident;
    let attr = find_attr(&input.attrs, "aoc_solver", input)?;

    let mut max_parts: Option<u8> = None;
    attr.parse_nested_meta(|meta| {
        if meta.path.is_ident("max_parts") {
            let value: LitInt = meta.value()?.parse()?;
            max_parts = Some(value.base10_parse()?);
            Ok(())
        } else {
            Err(meta.error("unsupported aoc_solver attribute, expected `max_parts`"))
        }
    })?;

    let max_parts = max_parts
        .ok_or_else(|| syn::Error::new_spanned(attr, "missing required `max_parts`"))?;
    if max_parts == 0 {
        return Err(syn::Error::new_spanned(attr, "`max_parts` must be at least 1"));
    }

    let arms = (1..=max_parts).map(|part| {
        quote! {
            #part => <Self as ::aoc_solver::PartSolver<#part>>::solve(shared),
        }
    });

    Ok(quote! {
        impl ::aoc_solver::Solver for #name {
            const PARTS: u8 = #max_parts;

            fn solve_part(
                shared: &mut <Self as ::aoc_solver::AocParser>::SharedData<'_>,
                part: u8,
            ) -> ::core::result::Result<::std::string::String, ::aoc_solver::SolveError> {
                match part {
                    #(#arms)*
                    _ => ::core::result::Result::Err(::aoc_solver::SolveError::PartOutOfRange(part)),
                }
            }
        }
    })
}

/// Derive macro for registering a solver with the plugin system
///
/// # Attributes
///
/// - `year`: Required. The Advent of Code year (e.g., 2024)
/// - `day`: Required. The day number (1-25)
/// - `tags`: Optional. Array of string literals for filtering (e.g., ["grid", "dijkstra"])
///
/// The type must implement `Solver`; otherwise compilation fails with an
/// unsatisfied `Solver` bound on the type.
///
/// # Example
///
/// ```ignore
/// #[derive(AocSolver, AutoRegisterSolver)]
/// #[aoc_solver(max_parts = 2)]
/// #[aoc(year = 2024, day = 16, tags = ["grid", "dijkstra"])]
/// pub struct Solver;
/// ```
#[proc_macro_derive(AutoRegisterSolver, attributes(aoc))]
pub fn derive_auto_register_solver(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    expand_auto_register(&input)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}

fn expand_auto_register(input: &DeriveInput) -> syn::Result<proc_macro2::TokenStream> {
    let name = &input.ident;
    let attr = find_attr(&input.attrs, "aoc", input)?;

    let mut year: Option<u16> = None;
    let mut day: Option<u8> = None;
    let mut tags: Vec<String> = Vec::new();

    attr.parse_nested_meta(|meta| {
        if meta.path.is_ident("year") {
            let value: LitInt = meta.value()?.parse()?;
            year = Some(value.base10_parse()?);
        } else if meta.path.is_ident("day") {
            let value: LitInt = meta.value()?.parse()?;
            let parsed: u8 = value.base10_parse()?;
            if !(1..=25).contains(&parsed) {
                return Err(syn::Error::new_spanned(value, "day must be within 1..=25"));
            }
            day = Some(parsed);
        } else if meta.path.is_ident("tags") {
            // tags = ["a", "b"]
            let _ = meta.value()?;
            let content;
            syn::bracketed!(content in meta.input);
            while !content.is_empty() {
                match content.parse::<Lit>()? {
                    Lit::Str(lit_str) => tags.push(lit_str.value()),
                    other => return Err(syn::Error::new_spanned(other, "tags must be string literals")),
                }
                if content.peek(syn::Token![,]) {
                    content.parse::<syn::Token![,]>()?;
                }
            }
        } else {
            return Err(meta.error("unsupported aoc attribute, expected `year`, `day` or `tags`"));
        }
        Ok(())
    })?;

    let year = year.ok_or_else(|| syn::Error::new_spanned(attr, "missing required `year`"))?;
    let day = day.ok_or_else(|| syn::Error::new_spanned(attr, "missing required `day`"))?;

    Ok(quote! {
        const _: () = {
            trait MustImplementSolver: ::aoc_solver::Solver {}
            impl MustImplementSolver for #name {}
        };

        ::aoc_solver::inventory::submit! {
            ::aoc_solver::SolverPlugin {
                year: #year,
                day: #day,
                solver: &#name,
                tags: &[#(#tags),*],
            }
        }
    })
}

fn find_attr<'a>(
    attrs: &'a [Attribute],
    ident: &str,
    input: &DeriveInput,
) -> syn::Result<&'a Attribute> {
    attrs
        .iter()
        .find(|attr| attr.path().is_ident(ident))
        .ok_or_else(|| {
            syn::Error::new_spanned(&input.ident, format!("missing #[{ident}(...)] attribute"))
        })
}
