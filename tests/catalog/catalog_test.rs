#[cfg(test)]
mod tests {
    use datascope::catalog::{Catalog, CatalogError, CatalogSource, JsonFileSource, StaticSource};
    use std::io::Write;

    const FIXTURE: &str = r#"[
        {
            "name": "public",
            "tables": [
                {"name": "users", "columns": [
                    {"name": "id", "type": "uuid", "recordCount": 10000},
                    {"name": "name", "type": "text", "recordCount": 10000},
                    {"name": "email", "type": "text", "recordCount": 9850}
                ]},
                {"name": "orders", "columns": [
                    {"name": "id", "type": "uuid", "recordCount": 25000},
                    {"name": "user_id", "type": "uuid", "recordCount": 25000},
                    {"name": "total", "type": "numeric", "recordCount": 25000}
                ]}
            ]
        },
        {
            "name": "analytics",
            "tables": [
                {"name": "events", "columns": [
                    {"name": "id", "type": "uuid", "recordCount": 150000},
                    {"name": "type", "type": "text", "recordCount": 150000},
                    {"name": "data", "type": "jsonb", "recordCount": 148500}
                ]}
            ]
        }
    ]"#;

    #[test]
    fn test_fixture_shape() {
        let catalog = Catalog::from_json_str(FIXTURE).unwrap();

        assert_eq!(catalog.schemas().len(), 2);
        assert_eq!(catalog.table_count(), 3);
        assert_eq!(catalog.column_count(), 9);

        let names: Vec<_> = catalog.schemas().iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, ["public", "analytics"]);

        let events = catalog.table("analytics", "events").unwrap();
        assert_eq!(events.column("data").unwrap().data_type, "jsonb");
        assert_eq!(events.column("data").unwrap().record_count, 148_500);
    }

    #[test]
    fn test_record_count_rollup() {
        let catalog = Catalog::from_json_str(FIXTURE).unwrap();

        assert_eq!(catalog.schema("public").unwrap().record_count(), 35_000);
        assert_eq!(catalog.schema("analytics").unwrap().record_count(), 150_000);
    }

    #[test]
    fn test_missing_optional_fields() {
        let catalog = Catalog::from_json_str(
            r#"{"schemas": [{"name": "s", "tables": [{"name": "t", "columns": [{"name": "c", "type": "int"}]}]}, {"name": "empty"}]}"#,
        )
        .unwrap();

        assert_eq!(catalog.table("s", "t").unwrap().columns[0].record_count, 0);
        assert!(catalog.schema("empty").unwrap().tables.is_empty());
    }

    #[test]
    fn test_missing_type_rejected() {
        let result = Catalog::from_json_str(r#"[{"name": "s", "tables": [{"name": "t", "columns": [{"name": "c"}]}]}]"#);
        assert!(matches!(result, Err(CatalogError::ParseFailed(_))));
    }

    #[test]
    fn test_same_table_name_in_two_schemas_allowed() {
        let catalog = Catalog::from_json_str(
            r#"[{"name": "a", "tables": [{"name": "items"}]}, {"name": "b", "tables": [{"name": "items"}]}]"#,
        )
        .unwrap();
        assert_eq!(catalog.table_count(), 2);
    }

    #[test]
    fn test_duplicate_table_in_file_rejected() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"[{{"name": "a", "tables": [{{"name": "items"}}, {{"name": "items"}}]}}]"#
        )
        .unwrap();

        let result = JsonFileSource::new(file.path()).load();
        match result {
            Err(CatalogError::DuplicateTable { schema, table }) => {
                assert_eq!(schema, "a");
                assert_eq!(table, "items");
            }
            other => panic!("expected duplicate table error, got {:?}", other),
        }
    }

    #[test]
    fn test_colliding_table_keys_in_file_rejected() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"[{{"name": "sales", "tables": [{{"name": "eu.orders"}}]}}, {{"name": "sales.eu", "tables": [{{"name": "orders"}}]}}]"#
        )
        .unwrap();

        let result = JsonFileSource::new(file.path()).load();
        match result {
            Err(CatalogError::AmbiguousTableKey { key }) => assert_eq!(key, "sales.eu.orders"),
            other => panic!("expected ambiguous key error, got {:?}", other),
        }
    }

    #[test]
    fn test_fractional_and_negative_record_counts_accepted() {
        let catalog = Catalog::from_json_str(
            r#"[{"name": "s", "tables": [{"name": "t", "columns": [
                {"name": "a", "type": "int", "recordCount": 99.9},
                {"name": "b", "type": "int", "recordCount": -3}
            ]}]}]"#,
        )
        .unwrap();

        let table = catalog.table("s", "t").unwrap();
        assert_eq!(table.record_count(), 99);
        assert_eq!(table.column("b").unwrap().record_count, 0);
    }

    #[test]
    fn test_static_source_returns_catalog() {
        let catalog = Catalog::from_json_str(FIXTURE).unwrap();
        let loaded = StaticSource(catalog.clone()).load().unwrap();
        assert_eq!(loaded, catalog);
    }

    #[test]
    fn test_serialized_catalog_reloads() {
        let catalog = Catalog::from_json_str(FIXTURE).unwrap();
        let json = serde_json::to_string(&catalog).unwrap();
        assert!(json.contains(r#""recordCount":148500"#));
        assert_eq!(Catalog::from_json_str(&json).unwrap(), catalog);
    }
}
