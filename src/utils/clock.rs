//! Reloj del sistema
//!
//! El año calendario actual interviene en el cálculo del rating y en el
//! rango válido de `prodDate`; se inyecta para poder fijarlo en tests.

use chrono::{Datelike, Utc};

/// Fuente del año calendario actual
pub trait Clock: Send + Sync {
    fn current_year(&self) -> i32;
}

/// Reloj real basado en `Utc::now()`
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn current_year(&self) -> i32 {
        Utc::now().year()
    }
}

/// Reloj con año fijo
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub i32);

impl Clock for FixedClock {
    fn current_year(&self) -> i32 {
        self.0
    }
}
