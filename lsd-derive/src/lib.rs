use proc_macro::TokenStream;
use quote::quote;
use syn::{parse_macro_input, Data, DeriveInput, Expr, Fields, Lit, LitStr, Meta, Type};

/// Derive macro describing a struct's fields as CSV columns.
///
/// For each named field it records:
/// - the column name, honouring `#[serde(rename = "...")]`
/// - whether the column must be present (anything but `Option<T>`)
/// - a description joined from the field's doc comments
///
/// Generates `csv_schema() -> &'static [CsvField]` and
/// `csv_header() -> Vec<&'static str>`. A `CsvField` type with `name`,
/// `required` and `description` fields must be in scope at the derive site.
#[proc_macro_derive(CsvSchema, attributes(serde))]
pub fn derive_csv_schema(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    match expand(&input) {
        Ok(tokens) => tokens.into(),
        Err(err) => err.to_compile_error().into(),
    }
}

fn expand(input: &DeriveInput) -> syn::Result<proc_macro2::TokenStream> {
    let name = &input.ident;

    let fields = match &input.data {
        Data::Struct(data) => match &data.fields {
            Fields::Named(fields) => &fields.named,
            _ => {
                return Err(syn::Error::new_spanned(
                    name,
                    "CsvSchema requires a struct with named fields",
                ))
            }
        },
        _ => return Err(syn::Error::new_spanned(name, "CsvSchema only supports structs")),
    };

    let mut columns = Vec::with_capacity(fields.len());
    for field in fields {
        let Some(ident) = field.ident.as_ref() else {
            continue;
        };
        let column = serde_rename(&field.attrs)?.unwrap_or_else(|| ident.to_string());
        let required = !is_option(&field.ty);
        let description = doc_comment(&field.attrs);
        columns.push((column, required, description));
    }

    let entries = columns.iter().map(|(column, required, description)| {
        quote! {
            CsvField {
                name: #column,
                required: #required,
                description: #description,
            }
        }
    });

    Ok(quote! {
        impl #name {
            pub fn csv_schema() -> &'static [CsvField] {
                static SCHEMA: &[CsvField] = &[
                    #(#entries),*
                ];
                SCHEMA
            }

            pub fn csv_header() -> Vec<&'static str> {
                Self::csv_schema().iter().map(|field| field.name).collect()
            }
        }
    })
}

fn serde_rename(attrs: &[syn::Attribute]) -> syn::Result<Option<String>> {
    let mut rename = None;
    for attr in attrs.iter().filter(|a| a.path().is_ident("serde")) {
        attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("rename") {
                let value: LitStr = meta.value()?.parse()?;
                rename = Some(value.value());
            } else if meta.input.peek(syn::Token![=]) {
                // skip the value of any other `key = value` serde option
                let _: Expr = meta.value()?.parse()?;
            }
            Ok(())
        })?;
    }
    Ok(rename)
}

fn doc_comment(attrs: &[syn::Attribute]) -> String {
    attrs
        .iter()
        .filter(|attr| attr.path().is_ident("doc"))
        .filter_map(|attr| match &attr.meta {
            Meta::NameValue(meta) => match &meta.value {
                Expr::Lit(expr) => match &expr.lit {
                    Lit::Str(doc) => Some(doc.value().trim().to_string()),
                    _ => None,
                },
                _ => None,
            },
            _ => None,
        })
        .collect::<Vec<_>>()
        .join(" ")
}

fn is_option(ty: &Type) -> bool {
    match ty {
        Type::Path(path) => path
            .path
            .segments
            .last()
            .is_some_and(|segment| segment.ident == "Option"),
        _ => false,
    }
}
