//! # medcare-entity
//!
//! Domain entity models for MedCare. Every struct in this crate
//! represents a table row or a domain value object. Database entities
//! derive `sqlx::FromRow`; enums map onto PostgreSQL enum types.

pub mod appointment;
pub mod message;
pub mod user;
