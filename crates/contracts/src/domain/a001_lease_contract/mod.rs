pub mod aggregate;
pub mod info;

pub use aggregate::{Contract, ContractFile, ContractsResponse};
pub use info::InfoValue;
