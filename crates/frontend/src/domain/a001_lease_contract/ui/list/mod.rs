pub mod state;
pub mod view;

pub use state::{create_state, ContractListState};
pub use view::ContractTable;
