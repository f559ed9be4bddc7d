#![crate_type = "proc-macro"]
use syn::{self, parse, parse_macro_input, Ident, LitInt};

use proc_macro::TokenStream;

mod kw {
    syn::custom_keyword!(Type);
    syn::custom_keyword!(Upto);
    syn::custom_punctuation!(Colon, :);
}

#[derive(Default, Clone)]
struct TableOptions {
    element_type: Option<Ident>,
    upto: Option<LitInt>,
}

#[derive(Clone)]
enum TableOption {
    ElementType(Ident),
    Upto(LitInt),
}

// `Type: <ident>` or `Upto: <int>`, in any order.
impl parse::Parse for TableOption {
    fn parse(input: parse::ParseStream) -> syn::Result<Self> {
        let la = input.lookahead1();
        if la.peek(kw::Type) {
            input.parse::<kw::Type>()?;
            input.parse::<kw::Colon>()?;
            let ty: Ident = input.parse()?;
            return Ok(TableOption::ElementType(ty));
        }
        if la.peek(kw::Upto) {
            input.parse::<kw::Upto>()?;
            input.parse::<kw::Colon>()?;
            let upto: LitInt = input.parse()?;
            return Ok(TableOption::Upto(upto));
        }
        Err(la.error())
    }
}

impl parse::Parse for TableOptions {
    fn parse(input: parse::ParseStream) -> syn::Result<Self> {
        let f: syn::punctuated::Punctuated<TableOption, syn::Token![,]> =
            input.parse_terminated(TableOption::parse)?;
        let mut opts = Self::default();

        for opt in f {
            match opt {
                TableOption::ElementType(ty) => opts.element_type = Some(ty),
                TableOption::Upto(n) => opts.upto = Some(n),
            }
        }
        Ok(opts)
    }
}

/// Largest value of the named primitive integer type, widened to `u128`.
///
/// `isize` and `usize` are rejected: their width is that of the machine running the macro, which
/// need not be the target.
fn representable_max(ty: &str) -> Option<u128> {
    let max = match ty {
        "i8" => i8::MAX as u128,
        "i16" => i16::MAX as u128,
        "i32" => i32::MAX as u128,
        "i64" => i64::MAX as u128,
        "i128" => i128::MAX as u128,
        "u8" => u8::MAX as u128,
        "u16" => u16::MAX as u128,
        "u32" => u32::MAX as u128,
        "u64" => u64::MAX as u128,
        "u128" => u128::MAX,
        _ => return None,
    };
    Some(max)
}

/// `0!, 1!, 2!, ...` for as long as the values stay at or below `max`.
fn factorials_within(max: u128) -> Vec<u128> {
    let mut values = vec![1u128];
    let mut acc = 1u128;
    for i in 1u128.. {
        match acc.checked_mul(i) {
            Some(next) if next <= max => {
                acc = next;
                values.push(acc);
            }
            _ => break,
        }
    }
    values
}

fn expand(options: &TableOptions) -> syn::Result<proc_macro2::TokenStream> {
    let ty = match &options.element_type {
        Some(ty) => ty,
        None => {
            return Err(syn::Error::new(
                proc_macro2::Span::call_site(),
                "factorial_table error: missing `Type: <integer type>`",
            ))
        }
    };
    let ty_name = ty.to_string();
    let max = representable_max(&ty_name).ok_or_else(|| {
        syn::Error::new(
            ty.span(),
            format!(
                "factorial_table error: `{}` is not a fixed-width primitive integer type",
                ty_name
            ),
        )
    })?;

    let mut values = factorials_within(max);
    if let Some(upto) = &options.upto {
        let n: usize = upto.base10_parse()?;
        if n >= values.len() {
            return Err(syn::Error::new(
                upto.span(),
                format!(
                    "factorial_table error: {}! does not fit in {}; the largest is {}!",
                    n,
                    ty_name,
                    values.len() - 1
                ),
            ));
        }
        values.truncate(n + 1);
    }

    let literals = values
        .iter()
        .map(|v| LitInt::new(&format!("{}{}", v, ty_name), ty.span()));
    Ok(quote::quote! { [#(#literals),*] })
}

/**
 * factorial_table expands to an array literal of factorials computed at compile time.
 *
 * The element type is given with `Type:` and must be a fixed-width primitive integer. Entry `i`
 * of the array is `i!`. By default the table runs up to the largest factorial representable in
 * the element type; `Upto: n` stops it at `n!` instead.
 *
 * ```ignore
 * use factorial::factorial_table;
 *
 * const SMALL: [u8; 6] = factorial_table!(Type: u8);
 * assert_eq!(SMALL[5], 120);
 *
 * const FIRST: [i64; 4] = factorial_table!(Type: i64, Upto: 3);
 * assert_eq!(FIRST, [1, 1, 2, 6]);
 * ```
 *
 * Asking for a factorial that does not fit (`factorial_table!(Type: i32, Upto: 13)`) is a compile
 * error rather than a wrapped value.
 */
#[proc_macro]
pub fn factorial_table(input: TokenStream) -> TokenStream {
    let options = parse_macro_input!(input as TableOptions);
    match expand(&options) {
        Ok(table) => table.into(),
        Err(e) => e.to_compile_error().into(),
    }
}
