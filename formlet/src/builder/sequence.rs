/// Combine named builders over one state into a builder of a whole record.
///
/// Each `field: builder` pair is evaluated against the same state. The result
/// is `Some($record { .. })` only if every field accepted; annotations are
/// concatenated in field order and tagged with the field name; the UI is a
/// [`Fields`](crate::Fields) map whose entries share the one update callback.
/// The fields' acceptance stamps run in declaration order.
///
/// ```ignore
/// let form = sequence!(Registration {
///     email: email_field,
///     password: password_field,
/// });
/// ```
#[macro_export]
macro_rules! sequence {
    ($record:ident { $($field:ident : $builder:expr),+ $(,)? }) => {{
        $( let $field = $builder; )+
        $crate::FormBuilder::new(move |state| {
            $( let $field = $field.build(state).keyed(stringify!($field)).into_parts(); )+

            let mut annotations = ::std::vec::Vec::new();
            $( annotations.extend($field.1); )+

            let result = match ($( $field.0, )+) {
                ($( ::std::option::Option::Some($field), )+) => {
                    ::std::option::Option::Some($record { $( $field ),+ })
                }
                _ => ::std::option::Option::None,
            };

            let stamps = [$( ::std::rc::Rc::clone(&$field.3) ),+];
            $( let $field = $field.2; )+
            $crate::Built::from_parts(result, annotations, move |on_change| {
                let mut fields = $crate::Fields::new();
                $( fields.push(stringify!($field), $field(::std::rc::Rc::clone(&on_change))); )+
                fields
            })
            .stamped(move |state| stamps.iter().fold(state, |state, stamp| stamp(state)))
        })
    }};
}
