pub(crate) mod data;
pub(crate) mod layout;
pub(crate) mod limits;
pub(crate) mod parcoord;
pub(crate) mod quick;
pub(crate) mod document;
pub(crate) mod ticks;
