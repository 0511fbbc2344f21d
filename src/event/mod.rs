pub mod hw;

#[derive(Clone, Debug)]
pub struct Event(pub(crate) EventConfig);

#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct EventConfig {
    pub ty: u32,
    pub config: u64,
    pub config1: u64,
}

macro_rules! try_from {
    ($ty:ty, $value:ident, $impl: expr) => {
        impl TryFrom<&$ty> for crate::event::Event {
            type Error = std::io::Error;

            fn try_from($value: &$ty) -> std::result::Result<Self, Self::Error> {
                $impl
            }
        }

        impl TryFrom<$ty> for crate::event::Event {
            type Error = std::io::Error;

            fn try_from(value: $ty) -> std::result::Result<Self, Self::Error> {
                (&value).try_into()
            }
        }
    };
}
use try_from;
