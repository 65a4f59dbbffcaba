//! Tests for the persisted record shape and restoring from it.

#[cfg(test)]
mod tests {
    use datascope::catalog::{Catalog, Column, Schema, Table};
    use datascope::selection::{ExportError, Selection, SelectionEngine, SelectionExport};
    use insta::assert_snapshot;

    fn catalog() -> Catalog {
        Catalog::new(vec![
            Schema::new(
                "public",
                vec![
                    Table::new(
                        "users",
                        vec![Column::new("id", "uuid", 10_000), Column::new("email", "text", 9_850)],
                    ),
                    Table::new(
                        "orders",
                        vec![Column::new("id", "uuid", 25_000), Column::new("total", "numeric", 25_000)],
                    ),
                ],
            ),
            Schema::new(
                "analytics",
                vec![Table::new("events", vec![Column::new("id", "uuid", 150_000)])],
            ),
        ])
        .unwrap()
    }

    #[test]
    fn test_schema_export_pretty() {
        let catalog = catalog();
        let engine = SelectionEngine::new(&catalog);
        let mut selection = Selection::new();
        engine.select_all_in_schema(&mut selection, "public");

        let json = selection.export().to_json_pretty().unwrap();
        assert_snapshot!(json, @r#"
    {
      "schemas": [
        "public"
      ],
      "tables": {
        "public": [
          "orders",
          "users"
        ]
      },
      "columns": {
        "public.orders": [
          "id",
          "total"
        ],
        "public.users": [
          "email",
          "id"
        ]
      }
    }
    "#);
    }

    #[test]
    fn test_mixed_levels_export_compact() {
        let catalog = catalog();
        let engine = SelectionEngine::new(&catalog);
        let mut selection = Selection::new();
        engine.select_all_in_table(&mut selection, "public", "orders");
        engine.clear_table_selection(&mut selection, "analytics", "events");
        engine.toggle_column_selection(&mut selection, "public", "users", "email");

        let json = selection.export().to_json().unwrap();
        assert_snapshot!(json, @r#"{"schemas":[],"tables":{"analytics":[],"public":["orders"]},"columns":{"public.orders":["id","total"],"public.users":["email"]}}"#);
    }

    #[test]
    fn test_export_restore_preserves_state() {
        let catalog = catalog();
        let engine = SelectionEngine::new(&catalog);
        let mut selection = engine.select_all();
        engine.clear_table_selection(&mut selection, "public", "orders");
        engine.toggle_column_selection(&mut selection, "public", "users", "id");

        let json = selection.export().to_json().unwrap();
        let restored = Selection::from_export(SelectionExport::from_json(&json).unwrap());

        assert_eq!(restored, selection);
    }

    #[test]
    fn test_restore_record_from_older_catalog() {
        let catalog = catalog();
        let engine = SelectionEngine::new(&catalog);

        let saved = r#"{
            "schemas": ["public", "legacy"],
            "tables": {"public": ["users", "sessions"], "legacy": ["accounts"]},
            "columns": {
                "public.users": ["id", "email", "password"],
                "public.sessions": ["token"],
                "legacy.accounts": ["id"]
            }
        }"#;

        let mut restored = Selection::from_export(SelectionExport::from_json(saved).unwrap());
        let dropped = engine.retain_known(&mut restored);

        // legacy schema, sessions table, legacy entry + accounts,
        // password column, sessions entry + token, legacy.accounts entry + id
        assert_eq!(dropped, 9);

        let mut expected = Selection::new();
        engine.select_all_in_schema(&mut expected, "public");
        engine.clear_table_selection(&mut expected, "public", "orders");
        assert_eq!(restored, expected);
    }

    #[test]
    fn test_empty_selection_rejected_for_submit() {
        let catalog = catalog();
        let engine = SelectionEngine::new(&catalog);
        let mut selection = Selection::new();

        engine.toggle_column_selection(&mut selection, "public", "users", "email");
        assert!(selection.export().ensure_non_empty().is_ok());

        engine.toggle_column_selection(&mut selection, "public", "users", "email");
        assert!(matches!(
            selection.export().ensure_non_empty(),
            Err(ExportError::EmptySelection)
        ));
    }
}
