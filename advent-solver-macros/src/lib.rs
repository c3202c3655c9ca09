//! Procedural macros for the advent-solver library

use proc_macro::TokenStream;
use quote::quote;
use syn::{DeriveInput, Lit, parse_macro_input};

/// Derive macro that generates the `Solver` impl from per-part impls
///
/// Takes the part count from `#[advent_solver(parts = N)]` and produces a
/// `solve_part` that dispatches to `PartSolver<1>` through `PartSolver<N>`.
/// Each of those impls must exist or compilation fails at the dispatch arm.
///
/// # Example
///
/// ```ignore
/// use advent_solver::{AdventParser, PartSolver};
/// use advent_solver_macros::AdventSolver;
///
/// #[derive(AdventSolver)]
/// #[advent_solver(parts = 2)]
/// struct Day7;
///
/// impl AdventParser for Day7 { /* ... */ }
/// impl PartSolver<1> for Day7 { /* ... */ }
/// impl PartSolver<2> for Day7 { /* ... */ }
/// ```
#[proc_macro_derive(AdventSolver, attributes(advent_solver))]
pub fn derive_advent_solver(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    let name = &input.ident;

    let Some(attr) = input
        .attrs
        .iter()
        .find(|attr| attr.path().is_ident("advent_solver"))
    else {
        return syn::Error::new_spanned(
            name,
            "AdventSolver derive requires a #[advent_solver(parts = N)] attribute",
        )
        .to_compile_error()
        .into();
    };

    let mut parts: Option<u8> = None;
    let parse_result = attr.parse_nested_meta(|meta| {
        if meta.path.is_ident("parts") {
            let value: Lit = meta.value()?.parse()?;
            if let Lit::Int(lit_int) = value {
                parts = Some(lit_int.base10_parse()?);
            }
            Ok(())
        } else {
            Err(meta.error("unknown advent_solver attribute"))
        }
    });
    if let Err(e) = parse_result {
        return e.to_compile_error().into();
    }

    let Some(parts) = parts else {
        return syn::Error::new_spanned(attr, "missing required 'parts' attribute")
            .to_compile_error()
            .into();
    };
    if parts == 0 {
        return syn::Error::new_spanned(attr, "'parts' must be at least 1")
            .to_compile_error()
            .into();
    }

    let arms = (1..=parts).map(|n| {
        quote! {
            #n => <#name as ::advent_solver::PartSolver<#n>>::solve(shared),
        }
    });

    let expanded = quote! {
        impl ::advent_solver::Solver for #name {
            const PARTS: u8 = #parts;

            fn solve_part(
                shared: &mut Self::Shared<'_>,
                part: u8,
            ) -> ::std::result::Result<::std::string::String, ::advent_solver::SolveError> {
                match part {
                    #(#arms)*
                    _ => Err(::advent_solver::SolveError::PartNotImplemented(part)),
                }
            }
        }
    };

    TokenStream::from(expanded)
}

/// Derive macro for automatically registering solvers with the plugin system
///
/// Generates an `inventory::submit!` of a `SolverPlugin` so the solver is
/// discovered by `RegistryBuilder::register_all_plugins`.
///
/// # Attributes
///
/// - `year`: Required. The Advent of Code year (e.g., 2023)
/// - `day`: Required. The day number (1-25)
/// - `tags`: Optional. Array of string literals for filtering (e.g., ["cards"])
///
/// # Example
///
/// ```ignore
/// use advent_solver_macros::{AdventSolver, AutoRegister};
///
/// #[derive(AdventSolver, AutoRegister)]
/// #[advent_solver(parts = 2)]
/// #[advent(year = 2023, day = 7, tags = ["cards"])]
/// struct Day7;
/// ```
#[proc_macro_derive(AutoRegister, attributes(advent))]
pub fn derive_auto_register(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    let name = &input.ident;

    let Some(attr) = input.attrs.iter().find(|attr| attr.path().is_ident("advent")) else {
        return syn::Error::new_spanned(
            name,
            "AutoRegister derive requires an #[advent(year = ..., day = ...)] attribute",
        )
        .to_compile_error()
        .into();
    };

    let mut year: Option<u16> = None;
    let mut day: Option<u8> = None;
    let mut tags: Vec<String> = Vec::new();

    let parse_result = attr.parse_nested_meta(|meta| {
        if meta.path.is_ident("year") {
            let value: Lit = meta.value()?.parse()?;
            if let Lit::Int(lit_int) = value {
                year = Some(lit_int.base10_parse()?);
            }
        } else if meta.path.is_ident("day") {
            let value: Lit = meta.value()?.parse()?;
            if let Lit::Int(lit_int) = value {
                day = Some(lit_int.base10_parse()?);
            }
        } else if meta.path.is_ident("tags") {
            // Parse array of string literals: tags = ["a", "b"]
            let _ = meta.value()?;
            let content;
            syn::bracketed!(content in meta.input);
            while !content.is_empty() {
                let lit: Lit = content.parse()?;
                if let Lit::Str(lit_str) = lit {
                    tags.push(lit_str.value());
                }
                if content.peek(syn::Token![,]) {
                    let _: syn::Token![,] = content.parse()?;
                }
            }
        } else {
            return Err(meta.error("unknown advent attribute"));
        }
        Ok(())
    });
    if let Err(e) = parse_result {
        return e.to_compile_error().into();
    }

    let (Some(year), Some(day)) = (year, day) else {
        return syn::Error::new_spanned(attr, "missing required 'year' or 'day' attribute")
            .to_compile_error()
            .into();
    };

    let tag_strs = tags.iter().map(|s| s.as_str());
    let tags_array = quote! { &[#(#tag_strs),*] };

    let expanded = quote! {
        // Compile-time check that the type implements Solver, for a clearer
        // error than the one the inventory submission would produce
        const _: () = {
            trait MustImplementSolver: ::advent_solver::Solver {}
            impl MustImplementSolver for #name {}
        };

        ::advent_solver::inventory::submit! {
            ::advent_solver::SolverPlugin {
                year: #year,
                day: #day,
                solver: &#name,
                tags: #tags_array,
            }
        }
    };

    TokenStream::from(expanded)
}
