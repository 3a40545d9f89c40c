pub use crate::error::*;

mod clock;
mod entity;
mod error;
mod event;
mod modify;
mod query;
mod storage;

#[cfg(feature = "prelude")]
pub mod prelude {
    pub mod entity {
        pub use crate::entity::*;
    }
}

#[cfg(feature = "interface")]
pub mod interface {
    pub mod clock {
        pub use crate::clock::*;
    }
    pub mod event {
        pub use crate::event::*;
    }
    pub mod query {
        pub use crate::query::*;
    }
    pub mod storage {
        pub use crate::storage::*;
    }
    pub mod update {
        pub use crate::modify::*;
    }
}
