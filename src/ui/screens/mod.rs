pub(crate) mod form;
pub(crate) mod lists;
pub(crate) mod summary;
