//! Configuración de variables de entorno
//!
//! Este módulo maneja la configuración del entorno y variables de configuración.

use anyhow::{anyhow, Context, Result};
use std::env;
use std::str::FromStr;

/// Backend de persistencia
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageBackend {
    Postgres,
    Memory,
}

impl FromStr for StorageBackend {
    type Err = anyhow::Error;

    fn from_str(value: &str) -> Result<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "postgres" | "postgresql" => Ok(StorageBackend::Postgres),
            "memory" => Ok(StorageBackend::Memory),
            other => Err(anyhow!("unknown STORAGE_BACKEND '{}'", other)),
        }
    }
}

/// Configuración del entorno
#[derive(Debug, Clone)]
pub struct EnvironmentConfig {
    pub environment: String,
    pub port: u16,
    pub host: String,
    pub storage_backend: StorageBackend,
    pub cors_origins: Vec<String>,
}

impl Default for EnvironmentConfig {
    fn default() -> Self {
        Self {
            environment: "development".to_string(),
            port: 8080,
            host: "0.0.0.0".to_string(),
            storage_backend: StorageBackend::Postgres,
            cors_origins: Vec::new(),
        }
    }
}

impl EnvironmentConfig {
    /// Leer la configuración desde las variables de entorno
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Construir la configuración a partir de una fuente de claves
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let port = match lookup("PORT") {
            Some(raw) => raw
                .trim()
                .parse()
                .with_context(|| format!("PORT must be a valid number, got '{}'", raw))?,
            None => defaults.port,
        };

        let storage_backend = match lookup("STORAGE_BACKEND") {
            Some(raw) => raw.parse()?,
            None => defaults.storage_backend,
        };

        let cors_origins = lookup("CORS_ORIGINS")
            .map(|raw| {
                raw.split(',')
                    .map(|s| s.trim().to_string())
                    .filter(|s| !s.is_empty())
                    .collect()
            })
            .unwrap_or(defaults.cors_origins);

        Ok(Self {
            environment: lookup("ENVIRONMENT").unwrap_or(defaults.environment),
            port,
            host: lookup("HOST").unwrap_or(defaults.host),
            storage_backend,
            cors_origins,
        })
    }

    /// Verificar si estamos en modo desarrollo
    pub fn is_development(&self) -> bool {
        self.environment == "development"
    }

    /// Obtener la URL del servidor
    pub fn server_url(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
