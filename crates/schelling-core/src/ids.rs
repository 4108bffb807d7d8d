//! Typed identifiers.
//!
//! `AgentId` indexes the SoA agent columns; `GroupId` is the population an
//! agent belongs to.  Both are plain `Copy` newtypes with a `pub` inner
//! integer.

use std::fmt;

macro_rules! typed_id {
    ($(#[$attr:meta])* $vis:vis struct $name:ident($inner:ty), $label:literal;) => {
        $(#[$attr])*
        #[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        $vis struct $name(pub $inner);

        impl $name {
            #[inline(always)]
            pub fn index(self) -> usize {
                self.0 as usize
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, concat!($label, "#{}"), self.0)
            }
        }

        impl TryFrom<usize> for $name {
            type Error = std::num::TryFromIntError;
            fn try_from(n: usize) -> Result<$name, Self::Error> {
                <$inner>::try_from(n).map($name)
            }
        }
    };
}

typed_id! {
    /// Position of an agent in the SoA columns, assigned in placement order.
    pub struct AgentId(u32), "agent";
}

typed_id! {
    /// Group 0 is the majority, group 1 the minority.
    pub struct GroupId(u8), "group";
}

impl GroupId {
    pub const MAJORITY: GroupId = GroupId(0);
    pub const MINORITY: GroupId = GroupId(1);

    #[inline]
    pub fn is_minority(self) -> bool {
        self == Self::MINORITY
    }
}
