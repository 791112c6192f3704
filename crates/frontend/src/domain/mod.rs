pub mod a001_lease_contract;
