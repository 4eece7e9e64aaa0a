//! Maps raw route identifiers onto permission matrix keys.
//!
//! Route ids for the same authorizable action come in many shapes
//! (`x_iaas_resource_operate_y`, `resource_find_list`, ...). The matrix only
//! knows the canonical key, so composite ids are collapsed by substring marker.

/// Ordered (marker, canonical key) pairs. The first marker contained in the
/// raw identifier wins; later entries are not consulted.
pub const ROUTE_KEY_MARKERS: &[(&str, &str)] = &[
    ("iaas_resource_operate", "iaas_resource_operate"),
    ("resource_find", "resource_find"),
];

/// Normalize a raw route identifier against [`ROUTE_KEY_MARKERS`].
///
/// Identifiers without a known marker (including the empty string) are
/// returned unchanged so canonical ids still hit the matrix directly.
pub fn normalize_route_key(raw: &str) -> &str {
    normalize_with(raw, ROUTE_KEY_MARKERS)
}

/// Normalize against a caller-supplied marker table.
pub fn normalize_with<'a>(raw: &'a str, markers: &[(&str, &'a str)]) -> &'a str {
    markers
        .iter()
        .find(|(marker, _)| raw.contains(marker))
        .map(|(_, key)| *key)
        .unwrap_or(raw)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_operate_marker_anywhere() {
        assert_eq!(
            normalize_route_key("x_iaas_resource_operate_y"),
            "iaas_resource_operate"
        );
        assert_eq!(
            normalize_route_key("iaas_resource_operate"),
            "iaas_resource_operate"
        );
        assert_eq!(
            normalize_route_key("cvm.iaas_resource_operate"),
            "iaas_resource_operate"
        );
    }

    #[test]
    fn test_find_marker() {
        assert_eq!(normalize_route_key("resource_find_list"), "resource_find");
        assert_eq!(normalize_route_key("disk_resource_find"), "resource_find");
    }

    #[test]
    fn test_unmatched_passthrough() {
        assert_eq!(normalize_route_key("some_other_page"), "some_other_page");
        assert_eq!(normalize_route_key("biz_access"), "biz_access");
        assert_eq!(normalize_route_key(""), "");
    }

    #[test]
    fn test_partial_marker_is_not_a_match() {
        assert_eq!(normalize_route_key("resource_fin"), "resource_fin");
        assert_eq!(normalize_route_key("iaas_resource"), "iaas_resource");
    }

    #[test]
    fn test_first_marker_wins() {
        // Contains both markers: the earlier table entry decides.
        assert_eq!(
            normalize_route_key("resource_find_iaas_resource_operate"),
            "iaas_resource_operate"
        );

        let reversed: &[(&str, &str)] = &[
            ("resource_find", "resource_find"),
            ("iaas_resource_operate", "iaas_resource_operate"),
        ];
        assert_eq!(
            normalize_with("resource_find_iaas_resource_operate", reversed),
            "resource_find"
        );
    }

    #[test]
    fn test_absent_identifier_stays_absent() {
        let raw: Option<&str> = None;
        assert_eq!(raw.map(normalize_route_key), None);
    }

    #[test]
    fn test_custom_table_canonical_key_differs_from_marker() {
        let markers: &[(&str, &str)] = &[("_op_", "operate")];
        assert_eq!(normalize_with("disk_op_create", markers), "operate");
        assert_eq!(normalize_with("disk_create", markers), "disk_create");
    }
}
