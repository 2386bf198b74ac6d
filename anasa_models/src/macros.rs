macro_rules! nutype_string {
    ($(#[$meta:meta])* $ident:ident ( $($args:tt)* )) => {
        $(#[$meta])*
        #[::nutype::nutype(
            $($args)*,
            derive(Debug, Clone, PartialEq, Eq, Display, Deref, TryFrom, Serialize, Deserialize)
        )]
        pub struct $ident(String);
    };
}

pub(crate) use nutype_string;
