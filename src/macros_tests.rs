#[cfg(test)]
mod tests {
    use crate::builder::QueryBuilder;
    use crate::clause::{Clause, and, eq, gt, or};
    use crate::dialect::Dialect;
    use crate::value::{SqlValue, Value, raw};
    use pretty_assertions::assert_eq;

    #[test]
    fn variadic_and_or_match_sequence_form() {
        assert_eq!(
            crate::and!(eq("a", 1), gt("b", 2)),
            and([eq("a", 1), gt("b", 2)])
        );
        assert_eq!(
            crate::or!(eq("a", 1), eq("a", 2), eq("a", 3),),
            or(vec![eq("a", 1), eq("a", 2), eq("a", 3)])
        );
        assert_eq!(crate::and!(), and(Vec::<Clause>::new()));
    }

    #[test]
    fn values_macro_wraps_scalars_as_bind() {
        let vals = crate::values![1_i64, "tom", raw("now()")];
        assert_eq!(
            vals,
            vec![
                Value::Bind(SqlValue::I64(1)),
                Value::Bind(SqlValue::from("tom")),
                Value::Raw("now()".to_string()),
            ]
        );
        assert!(crate::values![].is_empty());
    }

    #[test]
    fn macros_feed_builder() {
        let (sql, binds) = QueryBuilder::with_dialect(Dialect::Default)
            .insert(vec!["id".to_string(), "name".to_string()])
            .into("users")
            .values(crate::values![7_i64, "tom"])
            .build()
            .unwrap();
        assert_eq!(sql, "insert into users ( id, name ) values ( ?, ? )");
        assert_eq!(binds, vec![SqlValue::I64(7), SqlValue::from("tom")]);

        let sql = QueryBuilder::with_dialect(Dialect::Cql)
            .select(&["id", "name"][..])
            .from("users")
            .where_(crate::or!(eq("id", 1), crate::and!(eq("id", 2), gt("age", 3))))
            .statement()
            .unwrap();
        assert_eq!(
            sql,
            "select id, name from users where id = ? or (id = ? and age > ?)"
        );
    }

    #[test]
    fn column_arguments_accept_single_and_list_forms() {
        let owned = String::from("c");
        let listed = vec!["e".to_string(), "f".to_string()];
        let qb = QueryBuilder::with_dialect(Dialect::Default)
            .select("a")
            .select(["a", "b"])
            .from("t")
            .order_by(&owned)
            .order_by(&["d"][..])
            .order_by(listed)
            .order_by(String::from("g DESC"));
        assert_eq!(qb.query().columns(), ["a".to_string(), "b".to_string()]);
        assert_eq!(
            qb.statement().unwrap(),
            "select a, b from t order by c, d, e, f, g DESC"
        );
    }
}
