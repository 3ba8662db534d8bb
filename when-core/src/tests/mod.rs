mod common;

pub(crate) use common::{entry_at, mk_config};
