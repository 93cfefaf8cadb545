mod error_kind;

use error_kind::ErrorKindTarget;
use proc_macro::TokenStream;
use quote::quote;
use syn::parse_macro_input;

/// Derives the `symbolic_error::ErrorKind` trait for the given struct.
///
/// The information of the error is customized using the `error` attribute:
/// ```ignore
/// use symbolic_attrs::ErrorKind;
///
/// #[derive(Debug, ErrorKind)]
/// #[error(
///     message = format!("cannot evaluate `{}`", self.name),
///     labels = ["this unknown"],
///     help = "unknowns have no numeric value",
/// )]
/// pub struct Unevaluable {
///     pub name: String,
/// }
/// ```
///
/// The following tags are available:
///
/// | Tag       | Description                                                               |
/// | --------- | ------------------------------------------------------------------------- |
/// | `message` | The message displayed at the top of the error. Required.                  |
/// | `labels`  | An array of label texts, attached in order to the spans of the error.     |
/// | `help`    | Optional help text describing what the user can do to fix the error.      |
/// | `note`    | Optional note with additional context.                                    |
///
/// Each tag accepts an expression, evaluated with `self` in scope, whose result implements
/// [`ToString`]. The generated code refers to the `ariadne` and `symbolic_error` crates, so both
/// must be dependencies of the crate using the derive.
#[proc_macro_derive(ErrorKind, attributes(error))]
pub fn error_kind(item: TokenStream) -> TokenStream {
    let target = parse_macro_input!(item as ErrorKindTarget);
    let name = &target.name;
    quote! {
        impl symbolic_error::ErrorKind for #name {
            fn as_any(&self) -> &dyn std::any::Any {
                self
            }

            #target
        }
    }.into()
}
