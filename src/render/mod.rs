pub(crate) mod backend;
pub(crate) mod clip;
pub(crate) mod composite;
pub(crate) mod cpu;
pub(crate) mod export;
pub(crate) mod fonts;
pub(crate) mod plan;
pub(crate) mod svg;
