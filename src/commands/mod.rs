pub mod convert;
pub mod mock;
pub mod recipes;
pub mod scale;
pub mod scan;
pub mod status;
