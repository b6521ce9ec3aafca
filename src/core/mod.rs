/*-------------------------------------------------------------------------------------------------
  Core Modules
-------------------------------------------------------------------------------------------------*/

pub mod address;
pub mod cidr;
pub mod client;
pub mod datetime;
pub mod errors;
pub mod extract;
pub mod family;
pub mod json;
pub mod matcher;
