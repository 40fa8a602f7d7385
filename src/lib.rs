// src/lib.rs

//! Minimal inventory management backend: CRUD over a single `product`
//! resource on PostgreSQL, with row-locked transactional mutations.

pub mod config;
pub mod db;
pub mod errors;
pub mod models;
pub mod state;
pub mod web;
