mod macros;

use proc_macro::TokenStream;

/// Generate a `<field>_lens()` constructor returning a `formlet::Lens` for
/// every named field of a struct.
#[proc_macro_derive(Lenses)]
pub fn derive_lenses(input: TokenStream) -> TokenStream {
    macros::lenses::expand(input.into()).into()
}
