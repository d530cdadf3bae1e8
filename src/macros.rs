/// Builds an [`AttrList`](crate::AttrList) from `name => raw value` pairs.
#[macro_export]
macro_rules! attrs {
    // Handle the empty list
    () => {
        $crate::AttrList::new()
    };

    // Handle name => raw value pairs, with an optional trailing comma
    ( $( $name:expr => $value:expr ),+ $(,)? ) => {{
        let mut list = $crate::AttrList::new();
        $(
            list.insert($name, $value);
        )+
        list
    }};
}
