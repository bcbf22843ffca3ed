//! Data models used throughout the loader
//!
//! This module contains the secret-file contents and the configuration record
//! handed to the contract toolchain.

// Seed phrase read from the mnemonic file
pub mod mnemonic;

// Gas-price document and hex quantity parsing
pub mod gas_price;

// Network profile and toolchain configuration record
pub mod profile;
