//! Helper macro for declaring port error enums.
//!
//! Every variant carries named fields and gets a snake-case constructor whose
//! parameters accept `impl Into<T>`, so adapters can write
//! `UserPersistenceError::query("boom")`.

macro_rules! define_port_error {
    (
        $(#[$outer:meta])*
        pub enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident { $($field:ident : $ty:ty),+ $(,)? } => $message:expr
            ),+ $(,)?
        }
    ) => {
        $(#[$outer])*
        #[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
        pub enum $name {
            $(
                $(#[$variant_meta])*
                #[error($message)]
                $variant { $($field: $ty),+ },
            )+
        }

        impl $name {
            $(
                ::paste::paste! {
                    #[doc = concat!("Construct [`", stringify!($name), "::", stringify!($variant), "`].")]
                    pub fn [<$variant:snake>]($($field: impl Into<$ty>),+) -> Self {
                        Self::$variant { $($field: $field.into()),+ }
                    }
                }
            )+
        }
    };
}

pub(crate) use define_port_error;

#[cfg(test)]
mod tests {
    define_port_error! {
        pub enum SamplePortError {
            Unreachable { host: String } => "cannot reach {host}",
            Rejected { reason: String, attempts: u32 } => "rejected after {attempts}: {reason}",
        }
    }

    #[test]
    fn constructors_accept_borrowed_strings() {
        let err = SamplePortError::unreachable("db.internal");
        assert_eq!(err.to_string(), "cannot reach db.internal");
    }

    #[test]
    fn constructors_convert_each_field() {
        let err = SamplePortError::rejected("locked", 3_u32);
        assert_eq!(
            err,
            SamplePortError::Rejected {
                reason: "locked".to_owned(),
                attempts: 3,
            }
        );
        assert_eq!(err.to_string(), "rejected after 3: locked");
    }
}
