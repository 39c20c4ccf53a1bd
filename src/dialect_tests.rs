#[cfg(test)]
mod tests {
    use crate::dialect::{Dialect, default_dialect, set_default_dialect_scoped};
    use crate::translator::Translator;
    use pretty_assertions::assert_eq;

    #[test]
    fn dialect_names_resolve_case_insensitively() {
        let cases = vec![
            ("cql", Dialect::Cql),
            ("CQL", Dialect::Cql),
            (" Cql ", Dialect::Cql),
            ("mysql", Dialect::Default),
            ("MySQL", Dialect::Default),
            ("sql", Dialect::Default),
            ("DEFAULT", Dialect::Default),
            ("oracle", Dialect::Default),
            ("", Dialect::Default),
        ];

        for (name, expected) in cases {
            assert_eq!(Dialect::from_name(name), expected, "{name:?}");
            assert_eq!(name.parse::<Dialect>(), Ok(expected));
        }
    }

    #[test]
    fn dialect_display_round_trips() {
        for d in [Dialect::Default, Dialect::Cql] {
            assert_eq!(Dialect::from(d.to_string().as_str()), d);
        }
        assert_eq!(Dialect::Cql.to_string(), "cql");
    }

    #[test]
    fn strategy_matches_dialect() {
        assert_eq!(Dialect::Cql.strategy().name(), "cql");
        assert_eq!(Dialect::Default.strategy().name(), "default");
        assert_eq!(Translator::from_name("Cql").strategy().name(), "cql");
    }

    #[test]
    fn scoped_default_dialect_restores_on_drop() {
        let outer = set_default_dialect_scoped(Dialect::Cql);
        assert_eq!(default_dialect(), Dialect::Cql);
        assert_eq!(Translator::default().strategy().name(), "cql");

        drop(outer);
        {
            let _g = set_default_dialect_scoped(Dialect::Default);
            assert_eq!(default_dialect(), Dialect::Default);
            assert_eq!(Translator::default().strategy().name(), "default");
        }
        assert_eq!(default_dialect(), Dialect::Cql);
    }
}
