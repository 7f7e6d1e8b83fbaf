mod polygon;

pub(crate) use polygon::*;
