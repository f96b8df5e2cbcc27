//! Sectors module - coarse economic sectors and company size bands.

mod company_size_model;
mod sector_model;

pub use company_size_model::CompanySize;
pub use sector_model::Sector;
