mod engine;

pub(crate) use engine::*;
