//! Macros for ergonomic state machine construction.

/// Generate a state identifier enum with its `StateId` implementation.
///
/// The macro derives the traits `StateId` requires, implements `COUNT` and
/// `name`, and emits `From<Id> for usize` so the default
/// [`ModuloIndex`](crate::core::ModuloIndex) index function applies. Variant
/// order determines the integral value, so slots are `0..COUNT` in
/// declaration order.
///
/// # Example
///
/// ```
/// use lockstep::core::StateId;
/// use lockstep::state_ids;
///
/// state_ids! {
///     pub enum Conveyor {
///         Stopped,
///         Feeding,
///         Jammed,
///     }
/// }
///
/// assert_eq!(Conveyor::COUNT, 3);
/// assert_eq!(Conveyor::Jammed.name(), "Jammed");
/// assert_eq!(usize::from(Conveyor::Feeding), 1);
/// ```
#[macro_export]
macro_rules! state_ids {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, PartialEq, Eq, Debug)]
        $vis enum $name {
            $(
                $(#[$variant_meta])*
                $variant
            ),*
        }

        impl $crate::core::StateId for $name {
            const COUNT: usize = [$(Self::$variant),*].len();

            fn name(&self) -> &'static str {
                match self {
                    $(Self::$variant => stringify!($variant)),*
                }
            }
        }

        impl ::core::convert::From<$name> for usize {
            fn from(id: $name) -> usize {
                id as usize
            }
        }
    };
}

#[cfg(test)]
mod tests {
    use crate::core::StateId;

    state_ids! {
        enum TestId {
            Idle,
            Running,
            Stopped,
        }
    }

    #[test]
    fn macro_generates_count_and_names() {
        assert_eq!(TestId::COUNT, 3);
        assert_eq!(TestId::Idle.name(), "Idle");
        assert_eq!(TestId::Stopped.name(), "Stopped");
    }

    #[test]
    fn macro_generates_usize_conversion() {
        assert_eq!(usize::from(TestId::Idle), 0);
        assert_eq!(usize::from(TestId::Running), 1);
        assert_eq!(usize::from(TestId::Stopped), 2);
    }

    #[test]
    fn macro_supports_visibility_and_attributes() {
        state_ids! {
            /// Visible outside the defining module.
            pub enum PublicId {
                A,
                B,
            }
        }

        assert_eq!(PublicId::COUNT, 2);
        let _state = PublicId::A;
    }
}
