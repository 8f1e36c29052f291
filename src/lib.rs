//! Registro de naves espaciales
//!
//! Backend CRUD para la entidad Ship: filtros dinámicos, rating derivado
//! y updates parciales, expuesto como API REST con Axum.

pub mod config;
pub mod controllers;
pub mod database;
pub mod dto;
pub mod middleware;
pub mod models;
pub mod query;
pub mod repositories;
pub mod routes;
pub mod services;
pub mod state;
pub mod utils;
