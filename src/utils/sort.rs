//! Parseo de cadenas de ordenación
//!
//! Los endpoints de listado aceptan un parámetro `sort` con el formato
//! `campo,orden`. El campo se valida contra una lista blanca por recurso,
//! de modo que el valor devuelto siempre es seguro para interpolar en un
//! `ORDER BY`.

/// Dirección de ordenación
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    Asc,
    Desc,
}

impl SortOrder {
    pub fn as_sql(&self) -> &'static str {
        match self {
            SortOrder::Asc => "ASC",
            SortOrder::Desc => "DESC",
        }
    }
}

/// Resolver una cadena `sort` cruda a un par (campo, orden).
///
/// El campo es la primera parte si pertenece a la lista blanca, si no se usa
/// el valor por defecto. El orden es la última parte si es `asc` o `desc`,
/// si no se usa `asc`. Nunca devuelve texto del usuario: el campo resultante
/// proviene siempre de `allowed` o de `default`.
pub fn parse_sort(
    raw: &str,
    allowed: &[&'static str],
    default: &'static str,
) -> (&'static str, SortOrder) {
    let parts: Vec<&str> = raw.split(',').collect();

    let field = parts
        .first()
        .and_then(|first| allowed.iter().copied().find(|candidate| candidate == first))
        .unwrap_or(default);

    let order = match parts.last() {
        Some(&"desc") => SortOrder::Desc,
        Some(&"asc") => SortOrder::Asc,
        _ => SortOrder::Asc,
    };

    (field, order)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_sort_happy_path() {
        let (field, order) = parse_sort("weight_kg,desc", &["weight_kg"], "tracking_code");
        assert_eq!(field, "weight_kg");
        assert_eq!(order, SortOrder::Desc);
    }

    #[test]
    fn test_parse_sort_field_outside_whitelist_falls_back() {
        let (field, order) = parse_sort("weight_kg,desc", &[], "tracking_code");
        assert_eq!(field, "tracking_code");
        assert_eq!(order, SortOrder::Desc);
    }

    #[test]
    fn test_parse_sort_degenerate_raw() {
        let (field, order) = parse_sort("desc", &["weight_kg"], "tracking_code");
        assert_eq!(field, "tracking_code");
        assert_eq!(order, SortOrder::Desc);
    }

    #[test]
    fn test_parse_sort_unknown_order_defaults_to_asc() {
        let (field, order) = parse_sort("ts;asc", &["ts", "location", "type", "id"], "ts");
        assert_eq!(field, "ts");
        assert_eq!(order, SortOrder::Asc);
    }

    #[test]
    fn test_parse_sort_explicit_asc() {
        let (field, order) = parse_sort("id,asc", &["id", "created_at"], "created_at");
        assert_eq!(field, "id");
        assert_eq!(order, SortOrder::Asc);
    }
}
