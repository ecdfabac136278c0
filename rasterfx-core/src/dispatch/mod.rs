pub(crate) mod apply;
pub(crate) mod filter;
pub(crate) mod settings;
