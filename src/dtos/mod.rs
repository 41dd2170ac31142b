pub mod auth_dtos;
pub mod ledger_dtos;
pub mod transfer_dtos;
