//! Literal-style construction of [`Value`](crate::Value) trees.
//!
//! [`toon!`] walks its input with a pair of recursive helpers: one munching
//! array elements, one munching object entries. Scalars go through the
//! crate's `From` conversions, so any element position accepts an arbitrary
//! expression of a convertible type, including negative numbers and
//! variables. Trailing commas are allowed everywhere.

/// Builds a [`Value`](crate::Value) from a JSON-like literal.
///
/// Scalar positions take any expression with a `From` conversion into
/// `Value` (integers, floats, booleans, strings, `Vec<Value>`, `Map`).
/// `null` is the null value.
///
/// ```rust
/// use toon_codec::toon;
///
/// let retries = 3u32;
/// let data = toon!({
///     "name": "Alice",
///     "scores": [95, -12, null],
///     "retries": retries,
/// });
/// assert!(data.is_object());
/// ```
#[macro_export]
macro_rules! toon {
    ({ $($entries:tt)* }) => {{
        let mut object = $crate::Map::new();
        $crate::__toon_entries!(object; $($entries)*);
        $crate::Value::Object(object)
    }};

    ([ $($elements:tt)* ]) => {
        $crate::Value::Array($crate::__toon_elements!([] $($elements)*))
    };

    (null) => {
        $crate::Value::Null
    };

    ($scalar:expr) => {
        $crate::Value::from($scalar)
    };
}

/// Accumulates array elements left to right. The first token tree is the
/// list of already-built element expressions.
#[doc(hidden)]
#[macro_export]
macro_rules! __toon_elements {
    ([$($built:expr),*]) => {
        vec![$($built),*]
    };

    ([$($built:expr),*] [$($inner:tt)*] $(, $($rest:tt)*)?) => {
        $crate::__toon_elements!([$($built,)* $crate::toon!([$($inner)*])] $($($rest)*)?)
    };

    ([$($built:expr),*] {$($inner:tt)*} $(, $($rest:tt)*)?) => {
        $crate::__toon_elements!([$($built,)* $crate::toon!({$($inner)*})] $($($rest)*)?)
    };

    ([$($built:expr),*] null $(, $($rest:tt)*)?) => {
        $crate::__toon_elements!([$($built,)* $crate::Value::Null] $($($rest)*)?)
    };

    ([$($built:expr),*] $element:expr, $($rest:tt)*) => {
        $crate::__toon_elements!([$($built,)* $crate::Value::from($element)] $($rest)*)
    };

    ([$($built:expr),*] $element:expr) => {
        vec![$($built,)* $crate::Value::from($element)]
    };
}

/// Inserts `"key": value` entries into the named map, one per step.
#[doc(hidden)]
#[macro_export]
macro_rules! __toon_entries {
    ($object:ident;) => {};

    ($object:ident; $key:literal : [$($inner:tt)*] $(, $($rest:tt)*)?) => {
        $object.insert($key.to_string(), $crate::toon!([$($inner)*]));
        $crate::__toon_entries!($object; $($($rest)*)?);
    };

    ($object:ident; $key:literal : {$($inner:tt)*} $(, $($rest:tt)*)?) => {
        $object.insert($key.to_string(), $crate::toon!({$($inner)*}));
        $crate::__toon_entries!($object; $($($rest)*)?);
    };

    ($object:ident; $key:literal : null $(, $($rest:tt)*)?) => {
        $object.insert($key.to_string(), $crate::Value::Null);
        $crate::__toon_entries!($object; $($($rest)*)?);
    };

    ($object:ident; $key:literal : $value:expr, $($rest:tt)*) => {
        $object.insert($key.to_string(), $crate::Value::from($value));
        $crate::__toon_entries!($object; $($rest)*);
    };

    ($object:ident; $key:literal : $value:expr) => {
        $object.insert($key.to_string(), $crate::Value::from($value));
    };
}
