//! Generación de códigos de seguimiento
//!
//! Este módulo construye el código externo de un paquete a partir de la
//! secuencia interna asignada por la base de datos. El formato es
//! `PREFIX-SECUENCIA` con la secuencia rellenada con ceros a la izquierda.

use crate::utils::errors::{validation_error, AppError};

const DEFAULT_PREFIX: &str = "PRC";
const DEFAULT_PADDING: usize = 6;

/// Formateador de códigos de seguimiento
///
/// La configuración (prefijo y ancho mínimo) se fija al construirlo, de modo
/// que el formateo es una función pura sin estado global.
#[derive(Debug, Clone)]
pub struct TrackingCodeFormatter {
    prefix: String,
    padding: usize,
}

impl Default for TrackingCodeFormatter {
    fn default() -> Self {
        Self::new(DEFAULT_PREFIX, DEFAULT_PADDING)
    }
}

impl TrackingCodeFormatter {
    /// Crear un formateador con valores ya tipados.
    ///
    /// Un prefijo vacío o en blanco cae al valor por defecto `PRC`;
    /// el ancho se fuerza a un mínimo de 1.
    pub fn new(prefix: &str, padding: usize) -> Self {
        let trimmed = prefix.trim();
        let prefix = if trimmed.is_empty() {
            DEFAULT_PREFIX
        } else {
            trimmed
        };

        Self {
            prefix: prefix.to_string(),
            padding: padding.max(1),
        }
    }

    /// Crear un formateador desde los valores crudos de configuración.
    ///
    /// Un ancho no numérico cae al valor por defecto 6; los valores
    /// menores que 1 se normalizan a 1.
    pub fn from_raw(prefix: &str, padding: &str) -> Self {
        let padding = padding
            .trim()
            .parse::<i64>()
            .unwrap_or(DEFAULT_PADDING as i64)
            .max(1) as usize;

        Self::new(prefix, padding)
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    pub fn padding(&self) -> usize {
        self.padding
    }

    /// Construir el código para una secuencia dada.
    ///
    /// La secuencia se rellena con ceros hasta el ancho configurado; si tiene
    /// más dígitos que el ancho se imprime completa, nunca se trunca.
    /// Las secuencias negativas se rechazan.
    pub fn format(&self, seq: i64) -> Result<String, AppError> {
        if seq < 0 {
            return Err(validation_error("seq", "seq must be >= 0"));
        }

        Ok(format!(
            "{}-{:0width$}",
            self.prefix,
            seq,
            width = self.padding
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_with_default_config() {
        let formatter = TrackingCodeFormatter::default();
        assert_eq!(formatter.format(1).unwrap(), "PRC-000001");
        assert_eq!(formatter.format(42).unwrap(), "PRC-000042");
        assert_eq!(formatter.format(123456).unwrap(), "PRC-123456");
    }

    #[test]
    fn test_format_does_not_truncate_long_sequences() {
        let formatter = TrackingCodeFormatter::new("PRC", 6);
        assert_eq!(formatter.format(12345678).unwrap(), "PRC-12345678");
    }

    #[test]
    fn test_format_with_custom_config() {
        let formatter = TrackingCodeFormatter::new("X", 3);
        assert_eq!(formatter.format(7).unwrap(), "X-007");

        let formatter = TrackingCodeFormatter::new("AB", 1);
        assert_eq!(formatter.format(7).unwrap(), "AB-7");
    }

    #[test]
    fn test_negative_seq_is_rejected() {
        let formatter = TrackingCodeFormatter::default();
        assert!(formatter.format(-1).is_err());
    }

    #[test]
    fn test_zero_seq_is_allowed() {
        let formatter = TrackingCodeFormatter::default();
        assert_eq!(formatter.format(0).unwrap(), "PRC-000000");
    }

    #[test]
    fn test_blank_prefix_falls_back_to_default() {
        let formatter = TrackingCodeFormatter::new("   ", 6);
        assert_eq!(formatter.prefix(), "PRC");
    }

    #[test]
    fn test_padding_is_clamped_to_minimum() {
        let formatter = TrackingCodeFormatter::new("PRC", 0);
        assert_eq!(formatter.padding(), 1);
        assert_eq!(formatter.format(7).unwrap(), "PRC-7");
    }

    #[test]
    fn test_from_raw_normalizes_bad_values() {
        let formatter = TrackingCodeFormatter::from_raw("  ", "abc");
        assert_eq!(formatter.prefix(), "PRC");
        assert_eq!(formatter.padding(), 6);

        let formatter = TrackingCodeFormatter::from_raw("PKT", "-3");
        assert_eq!(formatter.prefix(), "PKT");
        assert_eq!(formatter.padding(), 1);

        let formatter = TrackingCodeFormatter::from_raw("PKT", "4");
        assert_eq!(formatter.format(12).unwrap(), "PKT-0012");
    }
}
