//! Procedural macros for the `aoc-framework` crate.

use proc_macro::TokenStream;
use proc_macro2::Span;
use quote::quote;
use syn::meta::ParseNestedMeta;
use syn::{Error, Expr, Item, ItemImpl, ItemStruct, Type, parse_macro_input};

/// Store a property value, rejecting a second occurrence of the same key.
fn set_once<T: syn::parse::Parse>(
    slot: &mut Option<T>,
    meta: &ParseNestedMeta,
    key: &str,
) -> syn::Result<()> {
    if slot.is_some() {
        return Err(meta.error(format!("duplicate '{key}' property")));
    }
    *slot = Some(meta.value()?.parse()?);
    Ok(())
}

fn missing(key: &str) -> TokenStream {
    Error::new(
        Span::call_site(),
        format!("missing required property: '{key}'"),
    )
    .to_compile_error()
    .into()
}

/// Attribute macro implementing `aoc_framework::runner::DayRunner` for a struct or impl block.
///
/// # Properties
///
/// - `day` (required): an expression of type `u8`, the day of the month.
/// - `title` (required): an expression of type `&'static str`, the puzzle title.
/// - `part_one` (required): the type implementing `Solution<PartOne>`.
/// - `part_two` (required): the type implementing `Solution<PartTwo>`.
/// - `parsed` (optional): a `ParseData` type built from the input and handed to both parts.
///   Without it, both parts receive the input string.
///
/// # Errors
///
/// Compilation fails when the macro is placed on anything other than a struct or impl block, when
/// a required property is missing, or when a property is unknown or repeated.
///
/// # Example
///
/// ```ignore
/// #[day_runner(day = 4, title = "Scratchcards", parsed = Cards, part_one = Day04, part_two = Day04)]
/// impl super::AdventOfCode2023<4> {}
/// ```
#[proc_macro_attribute]
pub fn day_runner(args: TokenStream, input: TokenStream) -> TokenStream {
    let mut day_opt: Option<Expr> = None;
    let mut title_opt: Option<Expr> = None;
    let mut parsed_ty_opt: Option<Type> = None;
    let mut part_one_ty_opt: Option<Type> = None;
    let mut part_two_ty_opt: Option<Type> = None;

    let day_runner_parser = syn::meta::parser(|meta| {
        if meta.path.is_ident("day") {
            set_once(&mut day_opt, &meta, "day")
        } else if meta.path.is_ident("title") {
            set_once(&mut title_opt, &meta, "title")
        } else if meta.path.is_ident("parsed") {
            set_once(&mut parsed_ty_opt, &meta, "parsed")
        } else if meta.path.is_ident("part_one") {
            set_once(&mut part_one_ty_opt, &meta, "part_one")
        } else if meta.path.is_ident("part_two") {
            set_once(&mut part_two_ty_opt, &meta, "part_two")
        } else {
            Err(meta.error("unsupported day runner property"))
        }
    });
    parse_macro_input!(args with day_runner_parser);

    let Some(day) = day_opt else {
        return missing("day");
    };
    let Some(title) = title_opt else {
        return missing("title");
    };
    let Some(part_one_ty) = part_one_ty_opt else {
        return missing("part_one");
    };
    let Some(part_two_ty) = part_two_ty_opt else {
        return missing("part_two");
    };

    let solve_call = if let Some(parsed_ty) = parsed_ty_opt {
        quote! {
            aoc_framework::runner::solve_parsed_day::<#parsed_ty, #part_one_ty, #part_two_ty>(
                <Self as aoc_framework::runner::DayRunner>::INFO,
                input,
                handler,
                timing
            )
        }
    } else {
        quote! {
            aoc_framework::runner::solve_day::<#part_one_ty, #part_two_ty>(
                <Self as aoc_framework::runner::DayRunner>::INFO,
                input,
                handler,
                timing
            )
        }
    };

    let original_input = input.clone(); // clone before macro consumes input
    let item = parse_macro_input!(input as Item);

    let self_ty = match item {
        Item::Struct(ItemStruct { ident, .. }) => quote! { #ident },
        Item::Impl(ItemImpl { self_ty, .. }) => quote! { #self_ty },
        _ => {
            return Error::new(
                Span::call_site(),
                "the #[day_runner] macro can only be applied to a struct or an impl block",
            )
            .to_compile_error()
            .into();
        }
    };

    let input_ts = proc_macro2::TokenStream::from(original_input);
    TokenStream::from(quote! {
        #input_ts

        impl aoc_framework::runner::DayRunner for #self_ty {
            const INFO: aoc_framework::runner::DayInfo = aoc_framework::runner::DayInfo {
                day: #day,
                title: #title,
            };

            fn run(
                input: &str,
                handler: &mut dyn aoc_framework::runner::OutputHandler,
                timing: aoc_framework::runner::Timing
            ) -> aoc_framework::DynamicResult<()> {
                #solve_call
            }
        }
    })
}
