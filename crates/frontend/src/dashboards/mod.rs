pub mod d100_lease_summary;
