pub mod category;
pub mod charge_type;
pub mod ev_catalog;
pub mod expense;
pub mod profile;
pub mod session;
pub mod status;
