#[cfg(test)]
mod integration_tests {
    use crate::config::{load_and_resolve_config, load_config, PostprocessorRegistry};
    use serde_yaml::Value;

    /// Test that the mockup run config loads and stays untouched by resolution
    #[test]
    fn test_mockup_yaml_loading() {
        let registry = PostprocessorRegistry::with_builtins();
        let raw = load_config("configs/mockup.yaml").unwrap();
        let resolved = load_and_resolve_config("configs/mockup.yaml", &registry).unwrap();

        assert_eq!(resolved.postprocess.class, "mockup");
        assert_eq!(resolved.output_names(), vec!["f"]);
        assert_eq!(resolved, raw);
    }

    /// Test that numpytxt picks its field names up from the run outputs
    #[test]
    fn test_numpytxt_yaml_resolution() {
        let registry = PostprocessorRegistry::with_builtins();
        let cfg = load_and_resolve_config("configs/numpytxt.yaml", &registry).unwrap();

        assert_eq!(cfg.postprocess.str_option("path").unwrap(), Some("mockup.out"));
        assert_eq!(
            cfg.postprocess.get("names"),
            Some(&Value::from(vec!["f", "g"]))
        );
        assert!(cfg.postprocess.mapping_option("options").unwrap().is_some());
    }

    /// Test default path for the json postprocessor
    #[test]
    fn test_json_yaml_resolution() {
        let registry = PostprocessorRegistry::with_builtins();
        let cfg = load_and_resolve_config("configs/json.yaml", &registry).unwrap();

        assert_eq!(cfg.postprocess.str_option("path").unwrap(), Some("stdout"));
    }

    /// Resolving an already resolved config changes nothing
    #[test]
    fn test_resolution_is_idempotent() {
        let registry = PostprocessorRegistry::with_builtins();
        for file in ["configs/mockup.yaml", "configs/numpytxt.yaml", "configs/json.yaml"] {
            let mut cfg = load_and_resolve_config(file, &registry).unwrap();
            let once = cfg.clone();
            registry.resolve(&mut cfg).unwrap();
            assert_eq!(cfg, once, "resolution of {} is not idempotent", file);
        }
    }
}
